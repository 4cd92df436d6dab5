use super::*;

use std::{cmp::Ordering, collections::BTreeSet};

fn project(id: &str, year: &str, featured: bool) -> Project {
    Project {
        id: ProjectId::from(id),
        title: id.to_string(),
        category: "Web Application".to_string(),
        description: String::new(),
        technologies: vec!["Rust".to_string()],
        role: "Developer".to_string(),
        stack: "Frontend".to_string(),
        year: year.to_string(),
        featured,
    }
}

fn ids(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn builtin_ids_are_unique() {
    let catalog = Catalog::builtin();
    let unique: BTreeSet<_> = catalog.projects().iter().map(|p| &p.id).collect();
    assert_eq!(unique.len(), catalog.projects().len());

    let rebuilt = Catalog::new(catalog.projects().to_vec(), data::details());
    assert!(rebuilt.is_ok());
}

#[test]
fn builtin_returns_the_same_instance() {
    assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
}

#[test]
fn new_rejects_duplicate_ids() {
    let err = Catalog::new(
        vec![project("a", "2024", false), project("a", "2025", true)],
        vec![],
    )
    .expect_err("duplicate");
    assert_eq!(err, CatalogError::DuplicateProjectId(ProjectId::from("a")));

    let details = data::details();
    let twice = vec![details[0].clone(), details[0].clone()];
    let err = Catalog::new(vec![], twice).expect_err("duplicate detail");
    assert!(matches!(err, CatalogError::DuplicateDetailId(_)));
}

#[test]
fn detail_table_is_independent_of_summary_table() {
    let catalog = Catalog::builtin();
    assert!(catalog.project("music.me").is_some());
    assert!(catalog.detail("music.me").is_none());
}

#[test]
fn year_comparison_is_numeric_for_integers() {
    assert_eq!(compare_years("2024", "2025"), Ordering::Less);
    assert_eq!(compare_years("9", "10"), Ordering::Less);
    assert_eq!(compare_years("2025", "2025"), Ordering::Equal);
    assert_eq!(compare_years("circa 2020", "2021"), Ordering::Greater);
    assert_eq!(compare_years("1a", "circa 2020"), Ordering::Less);
}

#[test]
fn year_comparison_is_a_total_order_on_mixed_input() {
    let years = ["2", "10", "1a", "2024", "circa 2020", "", " 7", "007", "TBD"];
    for a in years {
        assert_eq!(compare_years(a, a), Ordering::Equal);
        for b in years {
            assert_eq!(compare_years(a, b), compare_years(b, a).reverse());
            for c in years {
                if compare_years(a, b) != Ordering::Greater
                    && compare_years(b, c) != Ordering::Greater
                {
                    assert_ne!(compare_years(a, c), Ordering::Greater, "{a:?} {b:?} {c:?}");
                }
            }
        }
    }

    let mut sorted = years.to_vec();
    sorted.sort_by(|a, b| compare_years(a, b));
    assert_eq!(
        sorted,
        [" 7", "007", "2", "10", "2024", "", "1a", "TBD", "circa 2020"]
    );
}

#[test]
fn newest_first_handles_unequal_width_years() {
    let catalog = Catalog::new(
        vec![project("old", "9", false), project("new", "10", false)],
        vec![],
    )
    .expect("catalog");
    let newest = catalog.select("", ProjectFilter::All, ProjectSort::YearNewest);
    assert_eq!(ids(&newest), ["new", "old"]);
}

#[test]
fn featured_sort_keeps_catalog_order_on_ties() {
    let catalog = Catalog::new(
        vec![
            project("b", "2024", false),
            project("c", "2024", true),
            project("a", "2024", true),
        ],
        vec![],
    )
    .expect("catalog");
    let sorted = catalog.select("", ProjectFilter::All, ProjectSort::Featured);
    assert_eq!(ids(&sorted), ["c", "a", "b"]);
}

#[test]
fn title_sort_ignores_case() {
    assert_eq!(compare_titles("music.me", "Online"), Ordering::Less);
    assert_eq!(compare_titles("Alpha", "alpha"), Ordering::Less);
}

#[test]
fn stats_count_each_technology_once_per_project() {
    let mut repeated = project("x", "2024", false);
    repeated.technologies = vec!["Rust".into(), "Rust".into(), "SQL".into()];
    let stats = project_stats([&repeated]);
    assert_eq!(stats.technologies.get("Rust"), Some(&1));
    assert_eq!(stats.unique_technologies, 2);
}

#[test]
fn summary_counts_whole_catalog() {
    let summary = Catalog::builtin().summary();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.capstone, 1);
    assert_eq!(summary.web_app, 1);
    assert_eq!(summary.react, 2);
    assert_eq!(summary.full_stack, 3);
}

#[test]
fn stats_for_matches_selection() {
    let catalog = Catalog::builtin();
    let stats = catalog.stats_for("", ProjectFilter::React);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.full_stack, 1);
    assert_eq!(stats.unique_years, 2);
    assert_eq!(stats.technologies.get("Tailwind CSS"), Some(&2));
}
