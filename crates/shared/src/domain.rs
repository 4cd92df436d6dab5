use std::{borrow::Borrow, convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const CAPSTONE_CATEGORY: &str = "Capstone Project";
pub const WEB_APPLICATION_CATEGORY: &str = "Web Application";
pub const REACT_TECHNOLOGY: &str = "React";
pub const FULL_STACK: &str = "Full-Stack";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Borrow<str> for ProjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Summary record shown in the project grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub role: String,
    pub stack: String,
    pub year: String,
    pub featured: bool,
}

impl Project {
    pub fn is_full_stack(&self) -> bool {
        self.stack == FULL_STACK
    }

    pub fn uses(&self, technology: &str) -> bool {
        self.technologies.iter().any(|tech| tech == technology)
    }
}

/// Extended record rendered on the project detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub full_description: String,
    pub year: String,
    pub role: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub outcomes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub images: Vec<String>,
}

impl ProjectDetail {
    pub fn type_label(&self) -> &'static str {
        if self.category.contains("Capstone") {
            "Capstone"
        } else {
            "Project"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectFilter {
    #[default]
    All,
    Capstone,
    WebApp,
    React,
    Fullstack,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 5] = [
        ProjectFilter::All,
        ProjectFilter::Capstone,
        ProjectFilter::WebApp,
        ProjectFilter::React,
        ProjectFilter::Fullstack,
    ];

    /// Parses a selector, falling back to [`ProjectFilter::All`] for anything unknown.
    pub fn from_selector(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_selector() == raw.trim())
            .unwrap_or_default()
    }

    pub fn as_selector(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Capstone => "capstone",
            ProjectFilter::WebApp => "web-app",
            ProjectFilter::React => "react",
            ProjectFilter::Fullstack => "fullstack",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Capstone => "Capstone Projects",
            ProjectFilter::WebApp => "Web Applications",
            ProjectFilter::React => "React Projects",
            ProjectFilter::Fullstack => "Full-Stack",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Capstone => project.category == CAPSTONE_CATEGORY,
            ProjectFilter::WebApp => project.category == WEB_APPLICATION_CATEGORY,
            ProjectFilter::React => project.uses(REACT_TECHNOLOGY),
            ProjectFilter::Fullstack => project.is_full_stack(),
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_selector())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectSort {
    #[default]
    Featured,
    YearNewest,
    YearOldest,
    Title,
}

impl ProjectSort {
    pub const ALL: [ProjectSort; 4] = [
        ProjectSort::Featured,
        ProjectSort::YearNewest,
        ProjectSort::YearOldest,
        ProjectSort::Title,
    ];

    /// Parses a selector, falling back to [`ProjectSort::Featured`] for anything unknown.
    pub fn from_selector(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_selector() == raw.trim())
            .unwrap_or_default()
    }

    pub fn as_selector(self) -> &'static str {
        match self {
            ProjectSort::Featured => "featured",
            ProjectSort::YearNewest => "year-newest",
            ProjectSort::YearOldest => "year-oldest",
            ProjectSort::Title => "title",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectSort::Featured => "Featured First",
            ProjectSort::YearNewest => "Newest First",
            ProjectSort::YearOldest => "Oldest First",
            ProjectSort::Title => "Alphabetical",
        }
    }
}

impl FromStr for ProjectSort {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl fmt::Display for ProjectSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_selector())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailTab {
    #[default]
    Overview,
    Features,
    Technologies,
    Challenges,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Features,
        DetailTab::Technologies,
        DetailTab::Challenges,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Features => "Features",
            DetailTab::Technologies => "Technologies",
            DetailTab::Challenges => "Challenges",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Expert,
    Intermediate,
    Fluent,
    Native,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

/// Education or experience card on the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub contact: ContactInfo,
}
