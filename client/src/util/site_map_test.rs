use std::collections::HashSet;

use super::*;

// =============================================================
// Site classification
// =============================================================

#[test]
fn rooman_paths_use_rooman_chrome() {
    for path in ROOMAN_PATHS {
        assert_eq!(site_for_path(path), Site::Rooman, "{path}");
    }
    assert_eq!(site_for_path("/blog/"), Site::Rooman);
}

#[test]
fn everything_else_is_iaiso() {
    for path in ["/", "/membership", "/rooman-ai-solutions", "/learning/engineering/software", "/blogs", "/nope"] {
        assert_eq!(site_for_path(path), Site::Iaiso, "{path}");
    }
}

#[test]
fn sections_scroll_in_place_only_on_the_rooman_home() {
    assert!(!needs_home_navigation("/rooman"));
    assert!(!needs_home_navigation("/rooman/"));
    assert!(needs_home_navigation("/about"));
    assert!(needs_home_navigation("/blog"));
}

#[test]
fn section_links_point_at_home_sections() {
    let sections = ROOMAN_PAGES_MENU
        .iter()
        .chain(&ROOMAN_TOP_LINKS)
        .filter_map(|link| match link.target {
            RoomanTarget::Section(id) => Some(id),
            RoomanTarget::Page(_) => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(sections, vec!["careers", "industries", "contact"]);
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_has_fifty_three_unique_routes() {
    let hrefs: HashSet<String> = PROGRAMS.iter().map(Program::href).collect();
    assert_eq!(hrefs.len(), 53);
}

#[test]
fn categories_have_ten_programs_except_school() {
    for category in LearningCategory::ALL {
        let expected = if category == LearningCategory::School { 3 } else { 10 };
        assert_eq!(programs_in(category).count(), expected, "{category:?}");
    }
}

#[test]
fn lookup_by_url_segments() {
    let program = find_program("engineering", "software").expect("software program");
    assert_eq!(program.title(), "AI for Software Engineers");
    assert_eq!(program.href(), "/learning/engineering/software");
    assert_eq!(program.category.stream_label(), "Engineering Stream");

    // Same slug in two categories resolves per category.
    let engineers = find_program("engineering", "chemical").expect("chemical engineers");
    let scientists = find_program("science", "chemical").expect("chemical scientists");
    assert_eq!(engineers.audience, "Chemical Engineers");
    assert_eq!(scientists.audience, "Chemical Scientists");
}

#[test]
fn unknown_segments_are_none() {
    assert!(find_program("engineering", "astronaut").is_none());
    assert!(find_program("cooking", "software").is_none());
    assert!(find_program("", "").is_none());
}

#[test]
fn overrides_and_derived_text() {
    let mechanical = find_program("engineering", "mechanical").expect("mechanical");
    assert_eq!(mechanical.subtitle(), "Specialization in Intelligent Mechanical Systems and Automation");

    let managers = find_program("management", "project-managers").expect("project managers");
    assert_eq!(managers.credential(), "Certified Specialist in AI for Project Managers (IAISO)");
    assert!(managers.subtitle().contains("Project Managers"));

    let foundation = find_program("school", "foundation").expect("foundation");
    assert_eq!(foundation.credential(), "Certified AI Foundations Graduate (IAISO)");
    assert_eq!(foundation.menu_label(), "Foundation Stage");
    assert_eq!(managers.menu_label(), "AI for Project Managers");
}

#[test]
fn category_slugs_round_trip() {
    for category in LearningCategory::ALL {
        assert_eq!(LearningCategory::from_slug(category.slug()), Some(category));
    }
}

// =============================================================
// Menus
// =============================================================

#[test]
fn solutions_menu_ends_with_parent_company() {
    let last = SOLUTION_LINKS[SOLUTION_LINKS.len() - 1];
    assert_eq!(last.href, ROOMAN_HOME);
    assert!(SOLUTION_LINKS[..5].iter().all(|l| l.href == "/rooman-ai-solutions"));
}

#[test]
fn rooman_links_mix_pages_and_sections() {
    assert_eq!(ROOMAN_PAGES_MENU[0].target, RoomanTarget::Page("/about"));
    assert_eq!(ROOMAN_TOP_LINKS[2].target, RoomanTarget::Section("contact"));
    for link in ROOMAN_PAGES_MENU.iter().chain(&ROOMAN_TOP_LINKS) {
        if let RoomanTarget::Page(path) = link.target {
            assert_eq!(site_for_path(path), Site::Rooman, "{path}");
        }
    }
}
