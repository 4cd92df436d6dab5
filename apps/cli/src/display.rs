use std::io::{self, Write};

use shared::{
    domain::{DetailTab, ProfileEntry, ProjectDetail, Skill},
    protocol::{AboutView, ContactView, HomeView, NotFoundView},
};
use view_state::{CatalogViewState, ProjectDetailState};

pub fn display_project_list(
    out: &mut impl Write,
    state: &CatalogViewState<'_>,
) -> io::Result<()> {
    writeln!(out, "{} | {}", state.filter().label(), state.sort().label())?;
    writeln!(out, "{}", state.summary_line())?;
    if let Some(message) = state.empty_message() {
        writeln!(out)?;
        writeln!(out, "{message}")?;
        return Ok(());
    }
    writeln!(out)?;
    for project in state.projects() {
        write!(out, "{} ({})", project.title, project.year)?;
        if project.featured {
            write!(out, " [featured]")?;
        }
        writeln!(out)?;
        writeln!(out, "  id: {}", project.id)?;
        writeln!(out, "  {} | {} | {}", project.category, project.role, project.stack)?;
        writeln!(out, "  {}", project.technologies.join(", "))?;
    }
    let stats = state.stats();
    writeln!(out)?;
    writeln!(
        out,
        "Projects/full-stack/technologies/years: {}/{}/{}/{}",
        stats.total, stats.full_stack, stats.unique_technologies, stats.unique_years
    )?;
    Ok(())
}

pub fn display_project_detail(
    out: &mut impl Write,
    state: &ProjectDetailState<'_>,
) -> io::Result<()> {
    let Some(detail) = state.detail() else {
        let view = NotFoundView::project(state.project_id().as_str());
        return display_not_found(out, &view);
    };

    writeln!(out, "{} [{}]", detail.title, detail.type_label())?;
    writeln!(out, "{}", detail.description)?;
    for tab in DetailTab::ALL {
        writeln!(out)?;
        let marker = if tab == state.tab() { "*" } else { "" };
        match tab_items(detail, tab) {
            Some(items) => {
                writeln!(out, "{}{marker} ({}):", tab.label(), items.len())?;
                display_items(out, items)?;
            }
            None => {
                writeln!(out, "{}{marker}:", tab.label())?;
                writeln!(out, "  {}", detail.full_description)?;
                writeln!(out, "  Key Outcomes:")?;
                for outcome in &detail.outcomes {
                    writeln!(out, "    - {outcome}")?;
                }
                writeln!(out, "  Role: {}", detail.role)?;
                writeln!(out, "  Project Duration: {}", detail.year)?;
                writeln!(out, "  Stack: {}", detail.category)?;
            }
        }
    }
    writeln!(out)?;
    if let Some(url) = &detail.live_url {
        writeln!(out, "Live: {url}")?;
    }
    if let Some(url) = &detail.github_url {
        writeln!(out, "Source: {url}")?;
    }
    if let Some(image) = state.active_image() {
        writeln!(
            out,
            "Image {}/{}: {image}",
            state.image_index() + 1,
            detail.images.len()
        )?;
    }
    Ok(())
}

pub fn display_home(out: &mut impl Write, view: &HomeView) -> io::Result<()> {
    writeln!(out, "{}", navigation_bar(view))?;
    writeln!(out)?;
    writeln!(out, "{}", view.profile.name)?;
    writeln!(out, "{}", view.profile.headline)?;
    writeln!(out, "{}", view.profile.summary)?;
    writeln!(out, "{}", skill_line(&view.hero_technologies))?;
    writeln!(out)?;
    writeln!(out, "Featured work:")?;
    for project in view.projects.projects.iter().filter(|p| p.featured) {
        writeln!(out, "  - {} ({})", project.title, project.year)?;
    }
    writeln!(out)?;
    writeln!(out, "Expertise:")?;
    display_items(out, &view.expertise)?;
    Ok(())
}

pub fn display_about(out: &mut impl Write, view: &AboutView) -> io::Result<()> {
    writeln!(out, "{}", view.intro)?;
    writeln!(out)?;
    writeln!(out, "Education:")?;
    for entry in &view.education {
        display_entry(out, entry)?;
    }
    writeln!(out, "Experience:")?;
    for entry in &view.experience {
        display_entry(out, entry)?;
    }
    writeln!(out, "Certifications:")?;
    display_items(out, &view.certifications)?;
    writeln!(out, "Technologies: {}", skill_line(&view.technologies))?;
    writeln!(out, "Languages: {}", skill_line(&view.languages))?;
    Ok(())
}

pub fn display_contact_page(out: &mut impl Write, view: &ContactView) -> io::Result<()> {
    writeln!(out, "Get In Touch")?;
    writeln!(out, "  email: {}", view.contact.email)?;
    writeln!(out, "  phone: {}", view.contact.phone)?;
    writeln!(out, "  location: {}", view.contact.location)?;
    writeln!(out, "  github: {}", view.contact.github_url)?;
    writeln!(
        out,
        "Limits: name {} / subject {} / message {}-{} characters",
        view.limits.name_max,
        view.limits.subject_max,
        view.limits.message_min,
        view.limits.message_max
    )?;
    Ok(())
}

pub fn display_not_found(out: &mut impl Write, view: &NotFoundView) -> io::Result<()> {
    writeln!(out, "{}", view.title)?;
    writeln!(out, "{}", view.message)?;
    writeln!(out, "{}: {}", view.link_label, view.link)?;
    Ok(())
}

fn display_entry(out: &mut impl Write, entry: &ProfileEntry) -> io::Result<()> {
    writeln!(out, "  {} - {}", entry.title, entry.subtitle)?;
    writeln!(out, "    {} | {}", entry.location, entry.date)?;
    if let Some(description) = &entry.description {
        writeln!(out, "    {description}")?;
    }
    for item in &entry.items {
        writeln!(out, "    - {item}")?;
    }
    if !entry.tags.is_empty() {
        writeln!(out, "    [{}]", entry.tags.join(", "))?;
    }
    Ok(())
}

/// List-style tab contents; the overview tab has its own layout.
fn tab_items(detail: &ProjectDetail, tab: DetailTab) -> Option<&[String]> {
    match tab {
        DetailTab::Overview => None,
        DetailTab::Features => Some(detail.features.as_slice()),
        DetailTab::Technologies => Some(detail.technologies.as_slice()),
        DetailTab::Challenges => Some(detail.challenges.as_slice()),
    }
}

fn display_items(out: &mut impl Write, items: &[String]) -> io::Result<()> {
    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

fn skill_line(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(|skill| format!("{} ({:?})", skill.name, skill.level))
        .collect::<Vec<_>>()
        .join(", ")
}

fn navigation_bar(view: &HomeView) -> String {
    view.navigation
        .iter()
        .map(|item| {
            if item.is_active("/") {
                format!("[{}]", item.label)
            } else {
                item.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
