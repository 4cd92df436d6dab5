//! The portfolio's project catalog: static summary and detail tables plus the
//! filter/sort pipeline and the figures derived from it.
//!
//! The two tables are independent. A project may appear in the grid without a
//! detail record, in which case its detail page is the not-found page.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::OnceLock,
};

use shared::{
    domain::{Project, ProjectDetail, ProjectFilter, ProjectId, ProjectSort},
    protocol::{CatalogSummary, ProjectStats},
};
use thiserror::Error;
use tracing::debug;

mod data;
pub mod profile;
mod query;
mod stats;

pub use query::{compare_titles, compare_years, filter_projects, matches_query, sort_projects};
pub use stats::{project_stats, summarize};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("project id `{0}` appears more than once in the catalog")]
    DuplicateProjectId(ProjectId),
    #[error("project id `{0}` has more than one detail record")]
    DuplicateDetailId(ProjectId),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    details: BTreeMap<ProjectId, ProjectDetail>,
}

impl Catalog {
    /// Builds a catalog, rejecting repeated identifiers in either table.
    pub fn new(projects: Vec<Project>, details: Vec<ProjectDetail>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for project in &projects {
            if !seen.insert(&project.id) {
                return Err(CatalogError::DuplicateProjectId(project.id.clone()));
            }
        }

        let mut by_id = BTreeMap::new();
        for detail in details {
            let id = detail.id.clone();
            if by_id.insert(id.clone(), detail).is_some() {
                return Err(CatalogError::DuplicateDetailId(id));
            }
        }

        Ok(Self {
            projects,
            details: by_id,
        })
    }

    /// The tables compiled into the binary, built on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let details = data::details()
                .into_iter()
                .map(|detail| (detail.id.clone(), detail))
                .collect();
            let catalog = Catalog {
                projects: data::projects(),
                details,
            };
            debug!(
                projects = catalog.projects.len(),
                details = catalog.details.len(),
                "built-in catalog initialized"
            );
            catalog
        })
    }

    /// Every project in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id.as_str() == id)
    }

    pub fn detail(&self, id: &str) -> Option<&ProjectDetail> {
        self.details.get(id)
    }

    pub fn select(&self, query: &str, filter: ProjectFilter, sort: ProjectSort) -> Vec<&Project> {
        let mut selected = filter_projects(&self.projects, query, filter);
        sort_projects(&mut selected, sort);
        selected
    }

    pub fn summary(&self) -> CatalogSummary {
        summarize(&self.projects)
    }

    pub fn stats_for(&self, query: &str, filter: ProjectFilter) -> ProjectStats {
        project_stats(filter_projects(&self.projects, query, filter))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
