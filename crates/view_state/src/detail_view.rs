use catalog::Catalog;
use shared::{
    domain::{DetailTab, ProjectDetail, ProjectId},
    protocol::NotFoundView,
};
use tracing::debug;

/// Gallery and tab selection for one project page. Opening another project
/// starts over on the first image and the default tab.
#[derive(Debug, Clone)]
pub struct ProjectDetailState<'a> {
    catalog: &'a Catalog,
    project_id: ProjectId,
    detail: Option<&'a ProjectDetail>,
    tab: DetailTab,
    image_index: usize,
}

impl<'a> ProjectDetailState<'a> {
    pub fn open(catalog: &'a Catalog, project_id: &str) -> Self {
        Self {
            catalog,
            project_id: ProjectId::from(project_id),
            detail: catalog.detail(project_id),
            tab: DetailTab::default(),
            image_index: 0,
        }
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn detail(&self) -> Option<&'a ProjectDetail> {
        self.detail
    }

    /// The page to show instead when the id has no detail record.
    pub fn not_found(&self) -> Option<NotFoundView> {
        self.detail
            .is_none()
            .then(|| NotFoundView::project(self.project_id.as_str()))
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn active_image(&self) -> Option<&'a str> {
        self.detail?
            .images
            .get(self.image_index)
            .map(String::as_str)
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    pub fn select_image(&mut self, index: usize) {
        let count = self.detail.map_or(0, |detail| detail.images.len());
        if index < count {
            self.image_index = index;
        } else {
            debug!(index, count, project_id = %self.project_id, "ignoring out-of-range image");
        }
    }

    pub fn navigate_to(&mut self, project_id: &str) {
        if self.project_id.as_str() == project_id {
            return;
        }
        *self = Self::open(self.catalog, project_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_default_tab_and_first_image() {
        let state = ProjectDetailState::open(Catalog::builtin(), "vehicle-management");
        assert_eq!(state.tab(), DetailTab::Overview);
        assert_eq!(state.image_index(), 0);
        assert!(state.active_image().is_some());
        assert!(state.not_found().is_none());
    }

    #[test]
    fn out_of_range_image_is_ignored() {
        let mut state = ProjectDetailState::open(Catalog::builtin(), "dental-records");
        let count = state.detail().expect("detail").images.len();
        assert!(count > 1);

        state.select_image(count - 1);
        assert_eq!(state.image_index(), count - 1);
        state.select_image(count);
        assert_eq!(state.image_index(), count - 1);
    }

    #[test]
    fn navigating_resets_selection() {
        let mut state = ProjectDetailState::open(Catalog::builtin(), "vehicle-management");
        state.select_tab(DetailTab::Challenges);
        state.select_image(1);

        state.navigate_to("vehicle-management");
        assert_eq!(state.tab(), DetailTab::Challenges, "same project keeps state");

        state.navigate_to("spillthebeans");
        assert_eq!(state.tab(), DetailTab::Overview);
        assert_eq!(state.image_index(), 0);
        assert_eq!(state.project_id().as_str(), "spillthebeans");
    }

    #[test]
    fn missing_detail_renders_project_not_found() {
        let mut state = ProjectDetailState::open(Catalog::builtin(), "music.me");
        let view = state.not_found().expect("not found");
        assert_eq!(view.title, "Project not found");
        assert!(state.active_image().is_none());

        state.select_image(0);
        assert_eq!(state.image_index(), 0);
    }
}
