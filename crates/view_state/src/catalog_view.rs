use catalog::{project_stats, Catalog};
use server_api::{empty_message, result_line};
use shared::{
    domain::{Project, ProjectFilter, ProjectSort},
    protocol::ProjectStats,
};

/// Search box, filter and sort controls of the projects grid, with the
/// visible projects recomputed on every change.
#[derive(Debug, Clone)]
pub struct CatalogViewState<'a> {
    catalog: &'a Catalog,
    query: String,
    filter: ProjectFilter,
    sort: ProjectSort,
    visible: Vec<&'a Project>,
    stats: ProjectStats,
}

impl<'a> CatalogViewState<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut state = Self {
            catalog,
            query: String::new(),
            filter: ProjectFilter::default(),
            sort: ProjectSort::default(),
            visible: Vec::new(),
            stats: ProjectStats::default(),
        };
        state.recompute();
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn sort(&self) -> ProjectSort {
        self.sort
    }

    pub fn projects(&self) -> &[&'a Project] {
        &self.visible
    }

    pub fn stats(&self) -> &ProjectStats {
        &self.stats
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: ProjectSort) {
        self.sort = sort;
        self.recompute();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(ProjectFilter::All);
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || self.filter != ProjectFilter::All
    }

    pub fn summary_line(&self) -> String {
        result_line(self.visible.len(), &self.query, self.filter)
    }

    pub fn empty_message(&self) -> Option<String> {
        self.visible
            .is_empty()
            .then(|| empty_message(&self.query))
    }

    fn recompute(&mut self) {
        self.visible = self.catalog.select(&self.query, self.filter, self.sort);
        self.stats = project_stats(self.visible.iter().copied());
    }
}

#[cfg(test)]
#[path = "tests/catalog_view_tests.rs"]
mod tests;
