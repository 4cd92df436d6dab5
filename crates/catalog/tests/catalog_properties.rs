use catalog::{filter_projects, project_stats, sort_projects, Catalog};
use shared::domain::{Project, ProjectFilter, ProjectSort};

fn ids(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn react_filter_ignores_query_text_outside_matches() {
    let catalog = Catalog::builtin();
    let react = catalog.select("", ProjectFilter::React, ProjectSort::Title);
    assert_eq!(ids(&react), ["music.me", "spillthebeans"]);

    let with_query = catalog.select("javascript", ProjectFilter::React, ProjectSort::Title);
    assert_eq!(ids(&with_query), ["music.me", "spillthebeans"]);
}

#[test]
fn capstone_filter_returns_vehicle_management() {
    let selected = Catalog::builtin().select("", ProjectFilter::Capstone, ProjectSort::Featured);
    assert_eq!(ids(&selected), ["vehicle-management"]);
}

#[test]
fn mysql_query_is_case_insensitive() {
    let catalog = Catalog::builtin();
    for query in ["mysql", "MySQL", "MYSQL"] {
        let selected = catalog.select(query, ProjectFilter::All, ProjectSort::YearNewest);
        assert_eq!(ids(&selected), ["vehicle-management", "dental-records"]);
    }
}

#[test]
fn featured_sort_orders_featured_then_newest() {
    let selected = Catalog::builtin().select("", ProjectFilter::All, ProjectSort::Featured);
    assert_eq!(
        ids(&selected),
        ["music.me", "vehicle-management", "spillthebeans", "dental-records"]
    );
}

#[test]
fn title_sort_is_idempotent() {
    let catalog = Catalog::builtin();
    let mut once = catalog.select("", ProjectFilter::All, ProjectSort::Title);
    let first = ids(&once);
    sort_projects(&mut once, ProjectSort::Title);
    assert_eq!(ids(&once), first);
    assert_eq!(
        first,
        ["music.me", "vehicle-management", "dental-records", "spillthebeans"]
    );

    let fullstack = catalog.select("", ProjectFilter::Fullstack, ProjectSort::Title);
    assert_eq!(
        ids(&fullstack),
        ["vehicle-management", "dental-records", "spillthebeans"]
    );
}

#[test]
fn oldest_first_puts_2024_first() {
    let selected = Catalog::builtin().select("", ProjectFilter::All, ProjectSort::YearOldest);
    assert_eq!(
        ids(&selected),
        ["dental-records", "vehicle-management", "spillthebeans", "music.me"]
    );
}

#[test]
fn unmatched_query_yields_empty_stats() {
    let catalog = Catalog::builtin();
    let selected = catalog.select("zzz-nonexistent", ProjectFilter::All, ProjectSort::Featured);
    assert!(selected.is_empty());

    let stats = project_stats(selected);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.full_stack, 0);
    assert_eq!(stats.unique_technologies, 0);
    assert_eq!(stats.unique_years, 0);
    assert!(stats.technologies.is_empty());
}

#[test]
fn unfiltered_selection_preserves_insertion_order() {
    let catalog = Catalog::builtin();
    let filtered = filter_projects(catalog.projects(), "", ProjectFilter::All);
    let expected: Vec<&Project> = catalog.projects().iter().collect();
    assert_eq!(filtered, expected);
}

#[test]
fn web_app_filter_uses_exact_category() {
    let selected = Catalog::builtin().select("", ProjectFilter::WebApp, ProjectSort::Featured);
    assert_eq!(ids(&selected), ["dental-records"]);
}

#[test]
fn detail_lookup_distinguishes_absent_records() {
    let catalog = Catalog::builtin();
    let detail = catalog.detail("vehicle-management").expect("detail");
    assert_eq!(detail.features.len(), 6);
    assert_eq!(detail.technologies.len(), 5);
    assert!(catalog.detail("nonexistent").is_none());
}

#[test]
fn projects_serialize_with_plain_string_ids() {
    let project = Catalog::builtin().project("music.me").expect("project");
    let json = serde_json::to_value(project).expect("json");
    assert_eq!(json["id"], "music.me");
    assert_eq!(json["featured"], true);
}
