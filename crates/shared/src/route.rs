//! Path table for the site's pages.

use serde::{Deserialize, Serialize};

use crate::domain::ProjectId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "param", rename_all = "snake_case")]
pub enum Route {
    Home,
    Projects,
    ProjectDetail(ProjectId),
    About,
    Contact,
    NotFound(String),
}

impl Route {
    /// Maps a location path onto a page. The query string and a single trailing
    /// slash are ignored; anything unmatched is [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        match trimmed {
            "" | "/" => Route::Home,
            "/projects" => Route::Projects,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            other => match other.strip_prefix("/projects/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::ProjectDetail(ProjectId::from(id))
                }
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{id}"),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    /// Exact match against the current pathname, as the header highlights it.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

pub fn navigation() -> Vec<NavItem> {
    [
        ("Home", "/"),
        ("Projects", "/projects"),
        ("About", "/about"),
        ("Contact", "/contact"),
    ]
    .into_iter()
    .map(|(label, href)| NavItem {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_fixed_pages() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/projects"), Route::Projects);
        assert_eq!(Route::resolve("/projects/"), Route::Projects);
        assert_eq!(Route::resolve("/about?ref=nav"), Route::About);
        assert_eq!(Route::resolve("/contact"), Route::Contact);
    }

    #[test]
    fn resolves_project_detail_with_dotted_id() {
        assert_eq!(
            Route::resolve("/projects/music.me"),
            Route::ProjectDetail(ProjectId::from("music.me"))
        );
        assert_eq!(
            Route::resolve("/projects/music.me").path(),
            "/projects/music.me"
        );
    }

    #[test]
    fn unmatched_paths_are_not_found() {
        assert_eq!(
            Route::resolve("/blog"),
            Route::NotFound("/blog".to_string())
        );
        assert!(matches!(
            Route::resolve("/projects/a/b"),
            Route::NotFound(_)
        ));
    }

    #[test]
    fn every_nav_item_resolves_to_a_page() {
        for item in navigation() {
            assert!(!matches!(Route::resolve(&item.href), Route::NotFound(_)));
            assert!(item.is_active(&item.href));
        }
        assert!(!navigation()[1].is_active("/projects/music.me"));
    }
}
