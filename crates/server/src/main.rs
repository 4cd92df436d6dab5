use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use server_api::{
    about_view, contact_view, home_view, list_projects, project_detail, submit_contact,
    ApiContext, SimulatedTransport,
};
use shared::{
    contact::{ContactReceipt, ContactRequest},
    error::{ApiError, ErrorCode},
    protocol::{AboutView, ContactView, HomeView, NotFoundView, ProjectListQuery, ProjectListView},
    route::Route,
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{debug, info, warn};

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let transport = SimulatedTransport::new(settings.contact_delay());
    let api = ApiContext::builtin(Arc::new(transport));
    let project_count = api.catalog.projects().len();
    let app = build_router(Arc::new(AppState { api }));

    let addr: SocketAddr = settings.socket_addr()?;
    info!(
        %addr,
        projects = project_count,
        contact_delay_ms = settings.contact_delay_ms,
        "portfolio server listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(home))
        .route("/projects", get(projects))
        .route("/projects/:project_id", get(project))
        .route("/about", get(about))
        .route("/contact", get(contact_page).post(contact_submit))
        .fallback(fallback)
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn home(State(state): State<Arc<AppState>>) -> Json<HomeView> {
    Json(home_view(&state.api))
}

async fn projects(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ProjectListQuery>,
) -> Json<ProjectListView> {
    let view = list_projects(&state.api, &q);
    debug!(
        query = %view.query,
        filter = %view.filter,
        sort = %view.sort,
        results = view.projects.len(),
        "project list rendered"
    );
    Json(view)
}

async fn project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Response {
    match project_detail(&state.api, &project_id) {
        Some(view) => Json(view).into_response(),
        None => {
            debug!(%project_id, "no detail record for project");
            (
                StatusCode::NOT_FOUND,
                Json(NotFoundView::project(&project_id)),
            )
                .into_response()
        }
    }
}

async fn about(State(state): State<Arc<AppState>>) -> Json<AboutView> {
    Json(about_view(&state.api))
}

async fn contact_page(State(state): State<Arc<AppState>>) -> Json<ContactView> {
    Json(contact_view(&state.api))
}

async fn contact_submit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactReceipt>, (StatusCode, Json<ApiError>)> {
    let receipt = submit_contact(&state.api, &req).await.map_err(|e| {
        let status = match e.code {
            ErrorCode::Validation => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(code = ?e.code, message = %e.message, "contact submission rejected");
        (status, Json(e))
    })?;
    Ok(Json(receipt))
}

/// Paths that only differ from a page by a trailing slash are redirected to it;
/// everything else gets the not-found page.
async fn fallback(uri: Uri) -> Response {
    match Route::resolve(uri.path()) {
        Route::NotFound(path) => {
            debug!(%path, "unmatched route");
            (StatusCode::NOT_FOUND, Json(NotFoundView::page())).into_response()
        }
        route => Redirect::permanent(&route.path()).into_response(),
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
