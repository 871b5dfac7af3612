//! Route table data: which site a path belongs to, the navigation menus,
//! and the learning-program catalog behind `/learning/{category}/{slug}`.
//!
//! DESIGN
//! ======
//! Every learning page shares one template; the catalog below is the only
//! per-program data. Programs carry optional overrides for their subtitle
//! and credential and otherwise derive both from the audience.

#[cfg(test)]
#[path = "site_map_test.rs"]
mod site_map_test;

/// Paths rendered with the Rooman navigation and footer. Everything else
/// uses the IAISO chrome.
pub const ROOMAN_PATHS: [&str; 5] = ["/rooman", "/about", "/blog", "/shop", "/services"];

pub const PROGRAM_FEE: &str = "USD 1,500";
pub const PROGRAM_HOURS: u32 = 480;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    Iaiso,
    Rooman,
}

/// Which site chrome a pathname gets. A trailing slash is ignored.
#[must_use]
pub fn site_for_path(path: &str) -> Site {
    let trimmed = path.trim_end_matches('/');
    if ROOMAN_PATHS.contains(&trimmed) { Site::Rooman } else { Site::Iaiso }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub description: Option<&'static str>,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href, description: None }
}

const fn described(label: &'static str, href: &'static str, description: &'static str) -> NavLink {
    NavLink { label, href, description: Some(description) }
}

/// Dropdowns in the IAISO navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IaisoMenu {
    Certifications,
    Learning,
    Solutions,
}

impl IaisoMenu {
    pub const ALL: [Self; 3] = [Self::Certifications, Self::Learning, Self::Solutions];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Certifications => "Certifications",
            Self::Learning => "Learning",
            Self::Solutions => "Rooman AI Solutions",
        }
    }
}

pub const CERTIFICATION_LINKS: [NavLink; 3] = [
    described("System Certification", "/system-certifications", "Certify AI systems against IAISO standards"),
    described("Organizational", "/organizational-certifications", "AI governance for enterprises"),
    described("Professional", "/professional-certifications", "Credentials for AI practitioners"),
];

pub const SOLUTION_LINKS: [NavLink; 6] = [
    described("AI Platform", "/rooman-ai-solutions", "Enterprise AI/ML platform"),
    described("Cloud Manager", "/rooman-ai-solutions", "Multi-cloud management"),
    described("SecureShield", "/rooman-ai-solutions", "AI-powered security"),
    described("DataFlow", "/rooman-ai-solutions", "Real-time analytics"),
    described("DevOps Suite", "/rooman-ai-solutions", "CI/CD automation"),
    described("About Rooman", "/rooman", "Visit parent company"),
];

pub const IAISO_TOP_LINKS: [NavLink; 2] = [link("Membership", "/membership"), link("Events", "/events")];

/// Where a Rooman navigation entry leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomanTarget {
    /// A section id on the Rooman home page, scrolled into view.
    Section(&'static str),
    Page(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomanLink {
    pub label: &'static str,
    pub target: RoomanTarget,
}

pub const ROOMAN_HOME: &str = "/rooman";

pub const ROOMAN_PAGES_MENU: [RoomanLink; 4] = [
    RoomanLink { label: "About Us", target: RoomanTarget::Page("/about") },
    RoomanLink { label: "Services", target: RoomanTarget::Page("/services") },
    RoomanLink { label: "Team", target: RoomanTarget::Section("careers") },
    RoomanLink { label: "Why Choose Us", target: RoomanTarget::Section("industries") },
];

pub const ROOMAN_TOP_LINKS: [RoomanLink; 3] = [
    RoomanLink { label: "Blog", target: RoomanTarget::Page("/blog") },
    RoomanLink { label: "Shop", target: RoomanTarget::Page("/shop") },
    RoomanLink { label: "Contact", target: RoomanTarget::Section("contact") },
];

/// Wait between navigating to the Rooman home page and scrolling to one of
/// its sections, so the page has rendered.
pub const SECTION_SCROLL_DELAY_MS: f64 = 100.0;

/// Whether reaching a Rooman home section from `path` needs a navigation
/// first.
#[must_use]
pub fn needs_home_navigation(path: &str) -> bool {
    path.trim_end_matches('/') != ROOMAN_HOME
}

// =============================================================
// Learning catalog
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LearningCategory {
    Engineering,
    Science,
    Arts,
    Medicine,
    Management,
    School,
}

impl LearningCategory {
    pub const ALL: [Self; 6] =
        [Self::Engineering, Self::Science, Self::Arts, Self::Medicine, Self::Management, Self::School];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Engineering => "engineering",
            Self::Science => "science",
            Self::Arts => "arts",
            Self::Medicine => "medicine",
            Self::Management => "management",
            Self::School => "school",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Science => "Science",
            Self::Arts => "Arts",
            Self::Medicine => "Medicine",
            Self::Management => "Management",
            Self::School => "School",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Badge above a program title.
    #[must_use]
    pub fn stream_label(self) -> String {
        format!("{} Stream", self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Program {
    pub category: LearningCategory,
    pub slug: &'static str,
    /// Highlighted part of the headline: "AI for {audience}".
    pub audience: &'static str,
    subtitle: Option<&'static str>,
    credential: Option<&'static str>,
}

impl Program {
    #[must_use]
    pub fn title(&self) -> String {
        format!("AI for {}", self.audience)
    }

    /// Entry in the learning menu. School stages are listed by stage name.
    #[must_use]
    pub fn menu_label(&self) -> String {
        match self.category {
            LearningCategory::School => self.audience.to_owned(),
            _ => self.title(),
        }
    }

    #[must_use]
    pub fn href(&self) -> String {
        format!("/learning/{}/{}", self.category.slug(), self.slug)
    }

    #[must_use]
    pub fn subtitle(&self) -> String {
        self.subtitle.map_or_else(|| format!("Specialization in AI-Driven Practice for {}", self.audience), str::to_owned)
    }

    /// Credential printed on the certificate.
    #[must_use]
    pub fn credential(&self) -> String {
        self.credential.map_or_else(|| format!("Certified Specialist in {} (IAISO)", self.title()), str::to_owned)
    }
}

const fn program(category: LearningCategory, slug: &'static str, audience: &'static str) -> Program {
    Program { category, slug, audience, subtitle: None, credential: None }
}

const fn detailed(
    category: LearningCategory,
    slug: &'static str,
    audience: &'static str,
    subtitle: &'static str,
    credential: &'static str,
) -> Program {
    Program { category, slug, audience, subtitle: Some(subtitle), credential: Some(credential) }
}

use LearningCategory::{Arts, Engineering, Management, Medicine, School, Science};

pub static PROGRAMS: [Program; 53] = [
    detailed(
        Engineering,
        "software",
        "Software Engineers",
        "Specialization in Intelligent Applications and Automation",
        "Certified Specialist in Intelligent Software Engineering and Automation (IAISO)",
    ),
    detailed(
        Engineering,
        "mechanical",
        "Mechanical Engineers",
        "Specialization in Intelligent Mechanical Systems and Automation",
        "Certified Specialist in Intelligent Mechanical Engineering and Automation (IAISO)",
    ),
    program(Engineering, "electrical", "Electrical Engineers"),
    program(Engineering, "civil", "Civil Engineers"),
    program(Engineering, "electronics", "Electronics Engineers"),
    program(Engineering, "biomedical", "Biomedical Engineers"),
    program(Engineering, "industrial", "Industrial Engineers"),
    program(Engineering, "chemical", "Chemical Engineers"),
    program(Engineering, "quality", "Quality Engineers"),
    program(Engineering, "safety-maintenance", "Safety and Maintenance Engineers"),
    program(Science, "physics", "Physics Scientists"),
    program(Science, "chemical", "Chemical Scientists"),
    program(Science, "life-science", "Life Science Scientists"),
    program(Science, "environmental", "Environmental Scientists"),
    program(Science, "mathematical", "Mathematical Scientists"),
    program(Science, "earth-science", "Earth Science Scientists"),
    program(Science, "data-scientists", "Data Scientists"),
    program(Science, "statistics", "Statistics Scientists"),
    program(Science, "research", "Research Scientists"),
    program(Science, "laboratory-quality", "Laboratory Quality Scientists"),
    detailed(
        Arts,
        "literature",
        "Literature Scholars",
        "Specialization in AI for Literature and Digital Humanities",
        "Certified Specialist in AI for Literature and Digital Humanities (IAISO)",
    ),
    program(Arts, "history", "History Scholars"),
    program(Arts, "visual-arts", "Visual Arts Professionals"),
    program(Arts, "media", "Media Scholars"),
    program(Arts, "philosophy", "Philosophy Scholars"),
    program(Arts, "language", "Language Scholars"),
    detailed(
        Arts,
        "performing-arts",
        "Performing Arts Professionals",
        "Specialization in AI-Enhanced Performance and Creative Technology",
        "Certified Specialist in AI for Performing Arts and Creative Technology (IAISO)",
    ),
    program(Arts, "social-science", "Social Science Scholars"),
    program(Arts, "education", "Education Professionals"),
    program(Arts, "psychology", "Psychology Professionals"),
    program(Medicine, "medical", "Medical Professionals"),
    program(Medicine, "dental", "Dental Professionals"),
    program(Medicine, "nursing", "Nursing Professionals"),
    program(Medicine, "medical-research", "Medical Researchers"),
    program(Medicine, "public-health", "Public Health Professionals"),
    program(Medicine, "pharmaceutical", "Pharmaceutical Scientists"),
    program(Medicine, "biomedical", "Biomedical Professionals"),
    program(Medicine, "surgical", "Surgical Professionals"),
    program(Medicine, "healthcare-admin", "Healthcare Administrators"),
    program(Medicine, "allied-health", "Allied Health Professionals"),
    program(Management, "management", "Management Professionals"),
    program(Management, "business-leaders", "Business Leaders"),
    program(Management, "finance", "Finance Professionals"),
    program(Management, "operations", "Operations Managers"),
    program(Management, "economists", "Economists"),
    program(Management, "marketing", "Marketing Professionals"),
    program(Management, "hr", "HR Professionals"),
    program(Management, "international-business", "International Business Professionals"),
    program(Management, "project-managers", "Project Managers"),
    program(Management, "entrepreneurs", "Entrepreneurs"),
    detailed(
        School,
        "foundation",
        "Foundation Stage",
        "Introduction to AI for Young Learners",
        "Certified AI Foundations Graduate (IAISO)",
    ),
    detailed(
        School,
        "application",
        "Application Stage",
        "Applied AI Skills and Project-Based Learning",
        "Certified AI Application Developer (IAISO)",
    ),
    detailed(
        School,
        "advancement",
        "Advancement Stage",
        "Advanced AI Mastery and Innovation Leadership",
        "Certified AI Advancement Graduate (IAISO)",
    ),
];

/// Look up a program by its URL segments.
#[must_use]
pub fn find_program(category: &str, slug: &str) -> Option<&'static Program> {
    let category = LearningCategory::from_slug(category)?;
    PROGRAMS.iter().find(|p| p.category == category && p.slug == slug)
}

/// Programs of one category in menu order.
pub fn programs_in(category: LearningCategory) -> impl Iterator<Item = &'static Program> {
    PROGRAMS.iter().filter(move |p| p.category == category)
}
