use super::*;

fn draft(title: &str, content: &str) -> BlogDraft {
    BlogDraft { title: title.to_owned(), category: BlogCategory::Security, content: content.to_owned() }
}

// =============================================================
// Seed data and filter
// =============================================================

#[test]
fn seeded_with_six_posts_and_a_featured_post() {
    let blog = BlogState::default();
    assert_eq!(blog.posts.len(), 6);
    assert_eq!(blog.featured.title, "The Modern AI Stack: A Complete Guide");
    assert_eq!(blog.visible_posts().len(), 6);
}

#[test]
fn filter_limits_to_one_category() {
    let mut blog = BlogState::default();
    blog.set_filter(Some(BlogCategory::Security));
    let titles: Vec<&str> = blog.visible_posts().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Security Checklist for 2026", "Zero Trust Architecture Explained"]);

    blog.set_filter(None);
    assert_eq!(blog.visible_posts().len(), 6);
}

#[test]
fn category_labels_round_trip() {
    for category in BlogCategory::ALL {
        assert_eq!(BlogCategory::from_label(category.label()), Some(category));
    }
    assert_eq!(BlogCategory::from_label("All"), None);
    assert_eq!(BlogCategory::default().label(), "AI & Machine Learning");
}

// =============================================================
// Reader
// =============================================================

#[test]
fn reader_opens_featured_and_listed_posts() {
    let mut blog = BlogState::default();
    blog.open_post(0);
    assert_eq!(blog.active().map(|p| p.author.as_str()), Some("Sarah Chen"));
    blog.open_post(3);
    assert_eq!(blog.active().map(|p| p.id), Some(3));
    blog.open_post(99);
    assert_eq!(blog.active().map(|p| p.id), Some(3));
    blog.close_post();
    assert_eq!(blog.active(), None);
}

// =============================================================
// Composer helpers
// =============================================================

#[test]
fn read_time_has_a_floor_of_three_minutes() {
    assert_eq!(read_time_minutes("short post"), 3);
    assert_eq!(read_time_minutes(&["word"; 700].join(" ")), 4);
    assert_eq!(read_time_minutes(&["word"; 899].join(" ")), 4);
    assert_eq!(read_time_minutes(&["word"; 900].join(" ")), 5);
}

#[test]
fn summary_keeps_short_content() {
    let content = "a".repeat(160);
    assert_eq!(summarize(&content), content);
}

#[test]
fn summary_truncates_long_content() {
    let mut content = "x".repeat(150);
    content.push_str("       tail of the post that is cut");
    let summary = summarize(&content);
    assert_eq!(summary, format!("{}...", "x".repeat(150)));
}

#[test]
fn date_label_formats_short_month() {
    assert_eq!(date_label(2026, 0, 5), "Jan 5, 2026");
    assert_eq!(date_label(2026, 11, 31), "Dec 31, 2026");
}

// =============================================================
// Publishing
// =============================================================

#[test]
fn blank_drafts_are_rejected_and_kept() {
    let mut blog = BlogState::default();
    blog.draft = draft("   ", "content");
    assert_eq!(blog.publish("Jan 1, 2026"), Err(ComposeError::MissingTitle));
    blog.draft = draft("Title", " \n ");
    assert!(!blog.draft.is_publishable());
    assert_eq!(blog.publish("Jan 1, 2026"), Err(ComposeError::MissingContent));
    assert_eq!(blog.draft.title, "Title");
    assert_eq!(blog.posts.len(), 6);
}

#[test]
fn publish_prepends_guest_post_and_resets_composer() {
    let mut blog = BlogState::default();
    blog.toggle_composer();
    blog.set_filter(Some(BlogCategory::Cloud));
    blog.draft = draft("  Hardening CI runners ", "  Pin your actions.  ");

    let id = blog.publish("Oct 18, 2026").unwrap();

    let first = &blog.posts[0];
    assert_eq!(first.id, id);
    assert_eq!(first.title, "Hardening CI runners");
    assert_eq!(first.content, "Pin your actions.");
    assert_eq!(first.description, "  Pin your actions.  ");
    assert_eq!(first.author, GUEST_AUTHOR);
    assert_eq!(first.read_time, "3 min read");
    assert_eq!(first.date, "Oct 18, 2026");
    assert_eq!(first.category, BlogCategory::Security);

    assert_eq!(blog.posts.len(), 7);
    assert!(!blog.composer_open);
    assert_eq!(blog.draft, BlogDraft::default());
    assert_eq!(blog.filter, Some(BlogCategory::Cloud));
}

#[test]
fn published_ids_are_unique() {
    let mut blog = BlogState::default();
    blog.draft = draft("One", "first");
    let first = blog.publish("d").unwrap();
    blog.draft = draft("Two", "second");
    let second = blog.publish("d").unwrap();
    assert_ne!(first, second);
    assert!(blog.post(0).is_some());
    assert!(blog.posts.iter().all(|p| p.id != 0));
}
