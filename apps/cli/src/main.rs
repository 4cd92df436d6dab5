use std::{
    io::{self, Write},
    sync::Arc,
    time::Duration,
};

use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use server_api::{
    about_view, contact_view, home_view, list_projects, project_detail, ApiContext,
    SimulatedTransport, DEFAULT_CONTACT_DELAY,
};
use shared::{
    contact::ContactField,
    protocol::{NotFoundView, ProjectListQuery},
    route::Route,
};
use tracing::debug;
use url::form_urlencoded;
use view_state::{CatalogViewState, ContactFormState, ProjectDetailState, SubmitStatus};

mod display;

use display::{
    display_about, display_contact_page, display_home, display_not_found, display_project_detail,
    display_project_list,
};

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Browse the portfolio from a terminal")]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List projects
    Projects {
        #[arg(short, long, default_value = "")]
        query: String,
        /// all, capstone, web-app, react or fullstack
        #[arg(short, long, default_value = "all")]
        filter: String,
        /// featured, year-newest, year-oldest or title
        #[arg(short, long, default_value = "featured")]
        sort: String,
        #[arg(long)]
        json: bool,
    },
    /// Show one project's detail page
    Project {
        id: String,
        #[arg(long)]
        json: bool,
    },
    Home,
    About,
    /// Render whatever page a site path resolves to
    Open { path: String },
    /// Fill in and submit the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value_t = DEFAULT_CONTACT_DELAY.as_millis() as u64)]
        delay_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut out = io::stdout().lock();
    run(cli.command, &mut out).await
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(io::stderr)
        .init();
}

fn api_context(command: &Command) -> ApiContext {
    let contact_delay = match command {
        Command::Contact { delay_ms, .. } => Duration::from_millis(*delay_ms),
        _ => DEFAULT_CONTACT_DELAY,
    };
    ApiContext::builtin(Arc::new(SimulatedTransport::new(contact_delay)))
}

/// Reads `q`, `filter` and `sort` from the query part of a site path.
fn list_query_from_path(path: &str) -> ProjectListQuery {
    let path = path.split_once('#').map_or(path, |(before, _)| before);
    let raw = path.split_once('?').map_or("", |(_, query)| query);
    let mut query = ProjectListQuery::default();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "q" => query.q = Some(value.into_owned()),
            "filter" => query.filter = Some(value.into_owned()),
            "sort" => query.sort = Some(value.into_owned()),
            _ => {}
        }
    }
    query
}

fn catalog_state<'a>(ctx: &'a ApiContext, query: &ProjectListQuery) -> CatalogViewState<'a> {
    let mut state = CatalogViewState::new(ctx.catalog);
    state.set_query(query.query());
    state.set_filter(query.filter());
    state.set_sort(query.sort());
    state
}

async fn run(command: Command, out: &mut impl Write) -> Result<()> {
    let ctx = api_context(&command);
    match command {
        Command::Projects {
            query,
            filter,
            sort,
            json,
        } => {
            let query = ProjectListQuery {
                q: Some(query),
                filter: Some(filter),
                sort: Some(sort),
            };
            if json {
                write_json(out, &list_projects(&ctx, &query))?;
            } else {
                display_project_list(out, &catalog_state(&ctx, &query))?;
            }
        }
        Command::Project { id, json } => show_project(&ctx, out, &id, json)?,
        Command::Home => display_home(out, &home_view(&ctx))?,
        Command::About => display_about(out, &about_view(&ctx))?,
        Command::Open { path } => {
            let route = Route::resolve(&path);
            debug!(?route, %path, "resolved path");
            match route {
                Route::Home => display_home(out, &home_view(&ctx))?,
                Route::Projects => {
                    let query = list_query_from_path(&path);
                    display_project_list(out, &catalog_state(&ctx, &query))?
                }
                Route::ProjectDetail(id) => show_project(&ctx, out, id.as_str(), false)?,
                Route::About => display_about(out, &about_view(&ctx))?,
                Route::Contact => display_contact_page(out, &contact_view(&ctx))?,
                Route::NotFound(_) => display_not_found(out, &NotFoundView::page())?,
            }
        }
        Command::Contact {
            name,
            email,
            phone,
            subject,
            message,
            ..
        } => {
            let mut form = ContactFormState::new();
            form.update(ContactField::Name, &name);
            form.update(ContactField::Email, &email);
            form.update(ContactField::Phone, &phone);
            form.update(ContactField::Subject, &subject);
            form.update(ContactField::Message, &message);

            writeln!(out, "Sending Message...")?;
            match form.submit(ctx.transport.as_ref()).await {
                SubmitStatus::Succeeded(confirmation) => writeln!(out, "{confirmation}")?,
                SubmitStatus::Failed(reason) => bail!("{reason}"),
                SubmitStatus::Idle | SubmitStatus::Submitting => {}
            }
        }
    }
    Ok(())
}

fn show_project(ctx: &ApiContext, out: &mut impl Write, id: &str, json: bool) -> Result<()> {
    if json {
        match project_detail(ctx, id) {
            Some(view) => write_json(out, &view)?,
            None => write_json(out, &NotFoundView::project(id))?,
        }
    } else {
        display_project_detail(out, &ProjectDetailState::open(ctx.catalog, id))?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("portfolio").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli.command, &mut out).await?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn parses_verbosity_anywhere() {
        let cli = Cli::try_parse_from(["portfolio", "projects", "-vv", "--sort", "title"])
            .expect("parse");
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Projects { ref sort, .. } if sort == "title"));
    }

    #[test]
    fn contact_requires_message() {
        let err = Cli::try_parse_from(["portfolio", "contact", "--name", "A", "--email", "a@b.co"])
            .expect_err("missing message");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[tokio::test]
    async fn projects_listing_applies_controls() {
        let text = render(&["projects", "--filter", "react", "--sort", "title"])
            .await
            .expect("render");
        assert!(text.starts_with("React Projects | Alphabetical\nShowing 2 projects in react\n"));
        let music = text.find("music.me - Music Recommendation App").expect("music.me");
        let beans = text.find("SpillTheBeans").expect("spillthebeans");
        assert!(music < beans);
    }

    #[tokio::test]
    async fn projects_json_is_a_list_view() {
        let text = render(&["projects", "--query", "mysql", "--json"])
            .await
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["projects"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["filter"], "all");
    }

    #[tokio::test]
    async fn open_dispatches_by_path() {
        let text = render(&["open", "/projects/dental-records/"])
            .await
            .expect("render");
        assert!(text.starts_with("Patient Dental Records Management System [Project]\n"));

        let text = render(&["open", "/projects/music.me"]).await.expect("render");
        assert!(text.starts_with("Project not found\n"));

        let text = render(&["open", "/nowhere"]).await.expect("render");
        assert!(text.starts_with("Page Not Found\n"));
        assert!(text.ends_with("Return Home: /\n"));
    }

    #[tokio::test]
    async fn open_projects_honors_query_string() {
        let text = render(&["open", "/projects?filter=react&sort=title&q=appwrite"])
            .await
            .expect("render");
        assert!(text.starts_with(
            "React Projects | Alphabetical\nShowing 1 project matching \"appwrite\" in react\n"
        ));
        assert!(!text.contains("music.me"));

        let query = list_query_from_path("/projects/?q=full+stack%21#top");
        assert_eq!(query.query(), "full stack!");
        assert_eq!(query.filter, None);
    }

    #[tokio::test]
    async fn detail_opens_on_overview() {
        let text = render(&["project", "vehicle-management"])
            .await
            .expect("render");
        assert!(text.contains("\nOverview*:\n"));
        assert!(text.contains("  Key Outcomes:\n    - Reduced vehicle downtime by 30%"));
        assert!(text.contains("\nFeatures (6):\n"));
        let overview = text.find("Overview*").expect("overview");
        let features = text.find("Features (6)").expect("features");
        assert!(overview < features);
    }

    #[tokio::test(start_paused = true)]
    async fn contact_delay_reaches_the_transport() {
        let started = tokio::time::Instant::now();
        render(&[
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "Let's work together on something.",
            "--delay-ms",
            "250",
        ])
        .await
        .expect("render");
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(250));
        assert!(elapsed < DEFAULT_CONTACT_DELAY);
    }

    #[tokio::test]
    async fn contact_submission_reports_outcome() {
        let text = render(&[
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "Let's work together on something.",
            "--delay-ms",
            "0",
        ])
        .await
        .expect("render");
        assert!(text.ends_with("Message sent successfully! I'll get back to you soon.\n"));

        let err = render(&[
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "short",
            "--delay-ms",
            "0",
        ])
        .await
        .expect_err("too short");
        assert_eq!(err.to_string(), "Message must be at least 10 characters");
    }
}
