use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    contact::{MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS, NAME_MAX_CHARS, SUBJECT_MAX_CHARS},
    domain::{
        ContactInfo, DetailTab, Profile, ProfileEntry, Project, ProjectDetail, ProjectFilter,
        ProjectSort, Skill,
    },
    route::NavItem,
};

/// Query string accepted by the project list. Selectors are kept raw so that
/// unknown values fall back instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectListQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl ProjectListQuery {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
            .as_deref()
            .map(ProjectFilter::from_selector)
            .unwrap_or_default()
    }

    pub fn sort(&self) -> ProjectSort {
        self.sort
            .as_deref()
            .map(ProjectSort::from_selector)
            .unwrap_or_default()
    }
}

/// Figures derived from a filtered project sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: usize,
    pub full_stack: usize,
    pub technologies: BTreeMap<String, usize>,
    pub unique_technologies: usize,
    pub unique_years: usize,
}

/// Headline counts over the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub capstone: usize,
    pub web_app: usize,
    pub react: usize,
    pub full_stack: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListView {
    pub query: String,
    pub filter: ProjectFilter,
    pub sort: ProjectSort,
    pub projects: Vec<Project>,
    pub stats: ProjectStats,
    pub summary: CatalogSummary,
    pub result_line: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabSummary {
    pub tab: DetailTab,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetailView {
    pub project: ProjectDetail,
    pub type_label: String,
    pub technology_count: usize,
    pub feature_count: usize,
    pub tabs: Vec<TabSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub profile: Profile,
    pub hero_technologies: Vec<Skill>,
    pub projects: ProjectListView,
    pub technologies: Vec<Skill>,
    pub expertise: Vec<String>,
    pub navigation: Vec<NavItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutView {
    pub intro: String,
    pub education: Vec<ProfileEntry>,
    pub experience: Vec<ProfileEntry>,
    pub certifications: Vec<String>,
    pub technologies: Vec<Skill>,
    pub languages: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLimits {
    pub name_max: usize,
    pub subject_max: usize,
    pub message_min: usize,
    pub message_max: usize,
}

impl Default for ContactLimits {
    fn default() -> Self {
        Self {
            name_max: NAME_MAX_CHARS,
            subject_max: SUBJECT_MAX_CHARS,
            message_min: MESSAGE_MIN_CHARS,
            message_max: MESSAGE_MAX_CHARS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactView {
    pub contact: ContactInfo,
    pub limits: ContactLimits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundView {
    pub title: String,
    pub message: String,
    pub link: String,
    pub link_label: String,
}

impl NotFoundView {
    pub fn page() -> Self {
        Self {
            title: "Page Not Found".to_string(),
            message: "The page you're looking for doesn't exist or has been moved.".to_string(),
            link: "/".to_string(),
            link_label: "Return Home".to_string(),
        }
    }

    pub fn project(id: &str) -> Self {
        Self {
            title: "Project not found".to_string(),
            message: format!("No project is registered under \"{id}\"."),
            link: "/projects".to_string(),
            link_label: "Browse all projects".to_string(),
        }
    }
}
