//! Certification catalogs behind the three certification pages.
//!
//! The pages share one template; a [`CertificationTrack`] selects the
//! heading, the certifications on offer and the levels each one has.

#[cfg(test)]
#[path = "certifications_test.rs"]
mod certifications_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Level {
    pub number: u8,
    pub name: &'static str,
    pub description: &'static str,
}

const fn cert(name: &'static str, description: &'static str) -> Certification {
    Certification { name, description }
}

const fn level(number: u8, name: &'static str, description: &'static str) -> Level {
    Level { number, name, description }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CertificationTrack {
    System,
    Organizational,
    Professional,
}

impl CertificationTrack {
    pub const ALL: [Self; 3] = [Self::System, Self::Organizational, Self::Professional];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::System => "/system-certifications",
            Self::Organizational => "/organizational-certifications",
            Self::Professional => "/professional-certifications",
        }
    }

    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::System => "System Certifications",
            Self::Organizational => "Organizational Certifications",
            Self::Professional => "Professional Certifications",
        }
    }

    /// Headline word before the highlighted "Certifications".
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::System => "IAISO System",
            Self::Organizational => "IAISO Organizational",
            Self::Professional => "IAISO Professional",
        }
    }

    #[must_use]
    pub fn intro(self) -> &'static str {
        match self {
            Self::System => {
                "Industry-leading certification programs for AI and machine learning systems. Achieve excellence through our 5-level maturity framework."
            }
            Self::Organizational => {
                "Certify how your organization builds, governs and operates AI. Progress through our 5-level maturity framework."
            }
            Self::Professional => {
                "Credentials for AI practitioners at every stage of their career, from associate to expert."
            }
        }
    }

    #[must_use]
    pub fn certifications(self) -> &'static [Certification] {
        match self {
            Self::System => &SYSTEM_CERTIFICATIONS,
            Self::Organizational => &ORGANIZATIONAL_CERTIFICATIONS,
            Self::Professional => &PROFESSIONAL_CERTIFICATIONS,
        }
    }

    #[must_use]
    pub fn levels(self) -> &'static [Level] {
        match self {
            Self::System | Self::Organizational => &MATURITY_LEVELS,
            Self::Professional => &PROFESSIONAL_LEVELS,
        }
    }

    /// Badge above the level dialog heading.
    #[must_use]
    pub fn levels_label(self) -> &'static str {
        match self {
            Self::System | Self::Organizational => "Maturity Levels",
            Self::Professional => "Certification Levels",
        }
    }

    /// Footer line of the level dialog.
    #[must_use]
    pub fn progression_note(self, certification: &Certification) -> String {
        format!("Progress through all {} levels to achieve full {} certification", self.levels().len(), certification.name)
    }
}

pub static MATURITY_LEVELS: [Level; 5] = [
    level(1, "Initial", "Basic process establishment with minimal standardization"),
    level(2, "Managed", "Documented processes with planned and monitored execution"),
    level(3, "Defined", "Standardized organization-wide processes with clear guidelines"),
    level(4, "Quantitatively Managed", "Measured and controlled processes using statistical methods"),
    level(5, "Optimizing", "Continuous improvement through innovation and optimization"),
];

pub static PROFESSIONAL_LEVELS: [Level; 3] = [
    level(1, "IAISO Certified AI Associate", "Entry-level certification for foundational AI skills and knowledge"),
    level(2, "IAISO Certified AI Professional", "Intermediate certification for applied AI expertise and practical skills"),
    level(3, "IAISO Certified AI Expert / Fellow", "Advanced certification for mastery and leadership in AI domains"),
];

pub static SYSTEM_CERTIFICATIONS: [Certification; 9] = [
    cert(
        "IAISO Certified Data Science Pipeline System",
        "End-to-end data processing and analytics workflow certification",
    ),
    cert("IAISO Certified Machine Learning Model System", "Standardized ML model development and deployment framework"),
    cert("IAISO Certified Deep Learning Model System", "Advanced neural network architecture and training protocols"),
    cert("IAISO Certified Generative AI Output System", "Quality assurance for AI-generated content and outputs"),
    cert("IAISO Certified AI Agent System", "Autonomous agent behavior and decision-making standards"),
    cert("IAISO Certified Computer Vision & Multimodal AI System", "Visual perception and multi-sensory AI integration"),
    cert("IAISO Certified NLP & Large Language Model System", "Natural language processing and LLM optimization standards"),
    cert(
        "IAISO Certified Reinforcement Learning & Decision Intelligence System",
        "Adaptive learning and intelligent decision frameworks",
    ),
    cert(
        "IAISO Certified AI Infrastructure & MLOps Deployment System",
        "Scalable infrastructure and operational excellence standards",
    ),
];

pub static ORGANIZATIONAL_CERTIFICATIONS: [Certification; 9] = [
    cert(
        "IAISO Certified AI Organization – Full Scope",
        "Comprehensive AI certification covering all organizational AI practices",
    ),
    cert(
        "IAISO Certified AI Organization – Data Science & Analytics Focus",
        "Specialized certification for data-driven AI organizations",
    ),
    cert(
        "IAISO Certified AI Organization – Deep Learning & Computer Vision Focus",
        "Advanced visual AI and deep learning organizational standards",
    ),
    cert(
        "IAISO Certified AI Organization – Generative AI & NLP Focus",
        "Certification for generative AI and natural language organizations",
    ),
    cert(
        "IAISO Certified AI Organization – AI Agents & Autonomy Focus",
        "Autonomous AI systems and agent-based organizational certification",
    ),
    cert(
        "IAISO Certified AI Organization – Sector-Specific Annex (e.g., Healthcare)",
        "Industry-specific AI certification with sector compliance standards",
    ),
    cert(
        "IAISO Certified AI Service Organization",
        "Certification for organizations providing AI services and solutions",
    ),
    cert("IAISO Certified AI Startup Organization", "Tailored certification for emerging AI startups and ventures"),
    cert(
        "IAISO Certified AI Research Organization",
        "Certification for AI research institutions and academic organizations",
    ),
];

pub static PROFESSIONAL_CERTIFICATIONS: [Certification; 9] = [
    cert("IAISO Certified Data Science", "Comprehensive certification for data science practitioners and professionals"),
    cert("IAISO Certified Machine Learning", "Professional certification in machine learning algorithms and applications"),
    cert("IAISO Certified Deep Learning", "Advanced certification in neural networks and deep learning architectures"),
    cert("IAISO Certified Generative AI", "Specialized certification in generative AI models and creative applications"),
    cert("IAISO Certified AI Agent", "Professional certification for autonomous AI agent development"),
    cert(
        "IAISO Certified Computer Vision & Multimodal AI",
        "Certification in visual AI and multi-sensory machine learning systems",
    ),
    cert("IAISO Certified NLP & Large Language Models", "Professional certification in natural language processing and LLMs"),
    cert(
        "IAISO Certified Reinforcement Learning & Decision Intelligence",
        "Certification in adaptive learning and intelligent decision systems",
    ),
    cert("IAISO Certified AI Infrastructure & MLOps", "Professional certification in AI deployment and operational practices"),
];
