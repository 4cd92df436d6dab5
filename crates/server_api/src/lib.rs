use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use catalog::{
    profile::{self, ProfileContent},
    project_stats, Catalog,
};
use shared::{
    contact::{
        validate_contact, ContactReceipt, ContactRequest, ContactTransport, DELIVERY_FAILED_MESSAGE,
    },
    domain::{DetailTab, ProjectFilter},
    error::{ApiError, ApiException, ErrorCode},
    protocol::{
        AboutView, ContactLimits, ContactView, HomeView, ProjectDetailView, ProjectListQuery,
        ProjectListView, TabSummary,
    },
    route::navigation,
};
use tracing::{info, warn};

pub const DEFAULT_CONTACT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone)]
pub struct ApiContext {
    pub catalog: &'static Catalog,
    pub profile: &'static ProfileContent,
    pub transport: Arc<dyn ContactTransport>,
}

impl ApiContext {
    pub fn builtin(transport: Arc<dyn ContactTransport>) -> Self {
        Self {
            catalog: Catalog::builtin(),
            profile: profile::content(),
            transport,
        }
    }
}

/// Stands in for a mail backend: waits, then acknowledges without sending anything.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_DELAY)
    }
}

#[async_trait]
impl ContactTransport for SimulatedTransport {
    async fn deliver(&self, request: &ContactRequest) -> Result<ContactReceipt, ApiException> {
        tokio::time::sleep(self.delay).await;
        let receipt = ContactReceipt::issued_now();
        info!(
            submission_id = %receipt.submission_id,
            message_chars = request.message.chars().count(),
            "contact message accepted (simulated delivery)"
        );
        Ok(receipt)
    }
}

pub fn list_projects(ctx: &ApiContext, query: &ProjectListQuery) -> ProjectListView {
    let text = query.query();
    let filter = query.filter();
    let sort = query.sort();

    let selected = ctx.catalog.select(text, filter, sort);
    let stats = project_stats(selected.iter().copied());
    let projects: Vec<_> = selected.into_iter().cloned().collect();

    ProjectListView {
        query: text.to_string(),
        filter,
        sort,
        result_line: result_line(projects.len(), text, filter),
        empty_message: projects.is_empty().then(|| empty_message(text)),
        projects,
        stats,
        summary: ctx.catalog.summary(),
    }
}

pub fn project_detail(ctx: &ApiContext, id: &str) -> Option<ProjectDetailView> {
    let detail = ctx.catalog.detail(id)?;
    Some(ProjectDetailView {
        type_label: detail.type_label().to_string(),
        technology_count: detail.technologies.len(),
        feature_count: detail.features.len(),
        tabs: DetailTab::ALL
            .into_iter()
            .map(|tab| TabSummary {
                tab,
                label: tab.label().to_string(),
            })
            .collect(),
        project: detail.clone(),
    })
}

pub fn home_view(ctx: &ApiContext) -> HomeView {
    let content = ctx.profile;
    HomeView {
        profile: content.profile.clone(),
        hero_technologies: content.hero_technologies.clone(),
        projects: list_projects(ctx, &ProjectListQuery::default()),
        technologies: content.technologies.clone(),
        expertise: content.expertise.clone(),
        navigation: navigation(),
    }
}

pub fn about_view(ctx: &ApiContext) -> AboutView {
    let content = ctx.profile;
    AboutView {
        intro: content.about_intro.clone(),
        education: content.education.clone(),
        experience: content.experience.clone(),
        certifications: content.certifications.clone(),
        technologies: content.technologies.clone(),
        languages: content.languages.clone(),
    }
}

pub fn contact_view(ctx: &ApiContext) -> ContactView {
    ContactView {
        contact: ctx.profile.profile.contact.clone(),
        limits: ContactLimits::default(),
    }
}

pub async fn submit_contact(
    ctx: &ApiContext,
    request: &ContactRequest,
) -> Result<ContactReceipt, ApiError> {
    validate_contact(request)?;
    ctx.transport.deliver(request).await.map_err(|err| {
        warn!(error = %err, "contact delivery failed");
        ApiError::new(ErrorCode::Unavailable, DELIVERY_FAILED_MESSAGE)
    })
}

/// `Showing N project(s)`, plus the active query and filter when set.
pub fn result_line(count: usize, query: &str, filter: ProjectFilter) -> String {
    let mut line = format!(
        "Showing {count} project{}",
        if count == 1 { "" } else { "s" }
    );
    if !query.is_empty() {
        line.push_str(&format!(" matching \"{query}\""));
    }
    if filter != ProjectFilter::All {
        line.push_str(&format!(" in {}", filter.as_selector().replacen('-', " ", 1)));
    }
    line
}

pub fn empty_message(query: &str) -> String {
    if query.is_empty() {
        "No projects match your filters".to_string()
    } else {
        format!("No projects match \"{query}\"")
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
