use std::cmp::Ordering;

use shared::domain::{Project, ProjectFilter, ProjectSort};

/// Case-insensitive substring match against title, description, category or
/// any technology. An empty query matches every project.
pub fn matches_query(project: &Project, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    hit(&project.title)
        || hit(&project.description)
        || hit(&project.category)
        || project.technologies.iter().any(|tech| hit(tech))
}

/// Keeps catalog order; sorting is a separate step.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    query: &str,
    filter: ProjectFilter,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| matches_query(project, query) && filter.matches(project))
        .collect()
}

/// Stable sort; projects with equal keys keep their relative order.
pub fn sort_projects(projects: &mut [&Project], sort: ProjectSort) {
    match sort {
        ProjectSort::Title => projects.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        ProjectSort::YearNewest => projects.sort_by(|a, b| compare_years(&b.year, &a.year)),
        ProjectSort::YearOldest => projects.sort_by(|a, b| compare_years(&a.year, &b.year)),
        ProjectSort::Featured => projects.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then_with(|| compare_years(&b.year, &a.year))
        }),
    }
}

/// Plain unsigned years order numerically and sort before anything else;
/// the rest order byte-wise.
pub fn compare_years(a: &str, b: &str) -> Ordering {
    year_key(a).cmp(&year_key(b))
}

fn year_key(raw: &str) -> (bool, Option<u32>, &str) {
    let parsed = raw.trim().parse::<u32>().ok();
    (parsed.is_none(), parsed, raw)
}

pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
