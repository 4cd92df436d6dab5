use std::collections::{BTreeMap, BTreeSet};

use shared::{
    domain::{Project, ProjectFilter},
    protocol::{CatalogSummary, ProjectStats},
};

pub fn project_stats<'a>(projects: impl IntoIterator<Item = &'a Project>) -> ProjectStats {
    let mut total = 0;
    let mut full_stack = 0;
    let mut technologies: BTreeMap<String, usize> = BTreeMap::new();
    let mut years = BTreeSet::new();

    for project in projects {
        total += 1;
        if project.is_full_stack() {
            full_stack += 1;
        }
        let distinct: BTreeSet<&str> = project.technologies.iter().map(String::as_str).collect();
        for tech in distinct {
            *technologies.entry(tech.to_string()).or_default() += 1;
        }
        years.insert(project.year.as_str());
    }

    ProjectStats {
        total,
        full_stack,
        unique_technologies: technologies.len(),
        technologies,
        unique_years: years.len(),
    }
}

pub fn summarize(projects: &[Project]) -> CatalogSummary {
    let count = |filter: ProjectFilter| projects.iter().filter(|p| filter.matches(p)).count();
    CatalogSummary {
        total: projects.len(),
        capstone: count(ProjectFilter::Capstone),
        web_app: count(ProjectFilter::WebApp),
        react: count(ProjectFilter::React),
        full_stack: count(ProjectFilter::Fullstack),
    }
}
