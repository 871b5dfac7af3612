//! Blog listing, category filter, reader modal and the guest post composer.
//!
//! Posts live only in memory; a reload restores the seeded list.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

/// Reading speed used to estimate a post's read time.
pub const WORDS_PER_MINUTE: usize = 200;
pub const MIN_READ_MINUTES: usize = 3;
/// Content longer than this is summarized in the card description.
pub const SUMMARY_MAX_CHARS: usize = 160;
const SUMMARY_KEEP_CHARS: usize = 157;
pub const GUEST_AUTHOR: &str = "Guest Author";

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlogCategory {
    #[default]
    AiMl,
    Cloud,
    DevOps,
    Security,
    Product,
}

impl BlogCategory {
    pub const ALL: [Self; 5] = [Self::AiMl, Self::Cloud, Self::DevOps, Self::Security, Self::Product];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AiMl => "AI & Machine Learning",
            Self::Cloud => "Cloud",
            Self::DevOps => "DevOps",
            Self::Security => "Security",
            Self::Product => "Product",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub author: String,
    pub read_time: String,
    pub date: String,
    pub category: BlogCategory,
    pub content: String,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub category: BlogCategory,
    pub content: String,
}

impl BlogDraft {
    /// Whether the publish button is enabled.
    #[must_use]
    pub fn is_publishable(&self) -> bool {
        self.validate().is_ok()
    }

    /// # Errors
    ///
    /// Returns [`ComposeError`] when the title or content is blank.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.title.trim().is_empty() {
            return Err(ComposeError::MissingTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ComposeError::MissingContent);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("Add a title before publishing.")]
    MissingTitle,
    #[error("Write some content before publishing.")]
    MissingContent,
}

/// Estimated minutes to read `content`, never below three.
#[must_use]
pub fn read_time_minutes(content: &str) -> usize {
    let words = content.split(' ').count();
    // Round half up, matching the usual `round(words / 200)`.
    let rounded = (words + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE;
    rounded.max(MIN_READ_MINUTES)
}

/// Card description: the content itself, or its first 157 characters plus
/// an ellipsis when it runs past 160.
#[must_use]
pub fn summarize(content: &str) -> String {
    if content.chars().count() <= SUMMARY_MAX_CHARS {
        return content.to_owned();
    }
    let kept: String = content.chars().take(SUMMARY_KEEP_CHARS).collect();
    format!("{}...", kept.trim_end())
}

/// `"Jan 5, 2026"` from a calendar date with a zero-based month.
#[must_use]
pub fn date_label(year: u32, month0: u32, day: u32) -> String {
    let month = usize::try_from(month0).ok().and_then(|m| MONTHS.get(m)).copied().unwrap_or("Jan");
    format!("{month} {day}, {year}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogState {
    pub featured: BlogPost,
    pub posts: Vec<BlogPost>,
    /// `None` shows every category.
    pub filter: Option<BlogCategory>,
    pub active_post: Option<usize>,
    pub composer_open: bool,
    pub draft: BlogDraft,
    next_id: usize,
}

impl Default for BlogState {
    fn default() -> Self {
        let posts = seed_posts();
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            featured: featured_post(),
            posts,
            filter: None,
            active_post: None,
            composer_open: false,
            draft: BlogDraft::default(),
            next_id,
        }
    }
}

impl BlogState {
    #[must_use]
    pub fn visible_posts(&self) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|post| self.filter.is_none_or(|category| post.category == category))
            .collect()
    }

    pub fn set_filter(&mut self, filter: Option<BlogCategory>) {
        self.filter = filter;
    }

    pub fn toggle_composer(&mut self) {
        self.composer_open = !self.composer_open;
    }

    /// Open the reader for a post (the featured post included).
    pub fn open_post(&mut self, id: usize) {
        if self.post(id).is_some() {
            self.active_post = Some(id);
        }
    }

    pub fn close_post(&mut self) {
        self.active_post = None;
    }

    #[must_use]
    pub fn post(&self, id: usize) -> Option<&BlogPost> {
        std::iter::once(&self.featured).chain(&self.posts).find(|post| post.id == id)
    }

    #[must_use]
    pub fn active(&self) -> Option<&BlogPost> {
        self.active_post.and_then(|id| self.post(id))
    }

    /// Publish the draft as a guest post at the top of the list, then reset
    /// and close the composer. Returns the new post's id.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError`] and leaves the draft untouched when the title
    /// or content is blank.
    pub fn publish(&mut self, date: &str) -> Result<usize, ComposeError> {
        self.draft.validate()?;
        let draft = std::mem::take(&mut self.draft);
        let id = self.next_id;
        self.next_id += 1;
        self.posts.insert(
            0,
            BlogPost {
                id,
                title: draft.title.trim().to_owned(),
                description: summarize(&draft.content),
                author: GUEST_AUTHOR.to_owned(),
                read_time: format!("{} min read", read_time_minutes(&draft.content)),
                date: date.to_owned(),
                category: draft.category,
                content: draft.content.trim().to_owned(),
                image: None,
            },
        );
        self.composer_open = false;
        Ok(id)
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: usize,
    title: &str,
    author: &str,
    minutes: usize,
    date: &str,
    category: BlogCategory,
    description: &str,
    rest: &str,
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        author: author.to_owned(),
        read_time: format!("{minutes} min read"),
        date: date.to_owned(),
        category,
        content: format!("{description} {rest}"),
        image: None,
    }
}

fn featured_post() -> BlogPost {
    BlogPost {
        image: Some("/hero_innovate.jpg".to_owned()),
        ..post(
            0,
            "The Modern AI Stack: A Complete Guide",
            "Sarah Chen",
            12,
            "Jan 20, 2026",
            BlogCategory::AiMl,
            "Building reliable AI services requires the right tools and architecture. Learn how to set up your AI infrastructure for production.",
            "In this guide, we walk through modern data pipelines, model deployment patterns, observability best practices, and how to keep your AI stack maintainable as it grows.",
        )
    }
}

fn seed_posts() -> Vec<BlogPost> {
    vec![
        post(
            1,
            "Cloud Cost Optimization Strategies",
            "Michael Torres",
            8,
            "Jan 18, 2026",
            BlogCategory::Cloud,
            "Practical techniques to reduce your cloud spend without sacrificing performance.",
            "We cover rightsizing, autoscaling, storage lifecycle policies, reserved instances, and governance practices that keep costs predictable as your footprint grows.",
        ),
        post(
            2,
            "API Design Principles for Scale",
            "Emily Watson",
            6,
            "Jan 15, 2026",
            BlogCategory::Product,
            "Best practices for building APIs that can handle millions of requests.",
            "Learn about versioning strategies, pagination, idempotency, rate limiting, observability, and how to design for backward compatibility from day one.",
        ),
        post(
            3,
            "Security Checklist for 2026",
            "David Kim",
            5,
            "Jan 12, 2026",
            BlogCategory::Security,
            "Essential security measures every modern application should implement.",
            "From secrets management and least-privilege access to monitoring, incident response, and zero trust principles, this checklist helps you cover the fundamentals.",
        ),
        post(
            4,
            "MLOps: From Experiment to Production",
            "Sarah Chen",
            10,
            "Jan 10, 2026",
            BlogCategory::AiMl,
            "A comprehensive guide to deploying machine learning models at scale.",
            "We discuss experiment tracking, model registries, CI/CD for ML, canary releases, and feedback loops so your models stay accurate in production.",
        ),
        post(
            5,
            "Kubernetes Best Practices",
            "Michael Torres",
            7,
            "Jan 8, 2026",
            BlogCategory::DevOps,
            "Tips and tricks for managing containerized applications efficiently.",
            "Explore cluster sizing, resource requests and limits, observability, and security best practices for Kubernetes workloads.",
        ),
        post(
            6,
            "Zero Trust Architecture Explained",
            "David Kim",
            9,
            "Jan 5, 2026",
            BlogCategory::Security,
            "Understanding the principles behind modern security architectures.",
            "This article explains zero trust concepts, identity-aware access, continuous verification, and how to incrementally adopt these patterns.",
        ),
    ]
}
