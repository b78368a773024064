// file: src/server/handlers.rs
// description: HTTP handlers for the search page, show more and health
// reference: https://docs.rs/axum

use crate::render::{PageModel, ResultsModel};
use crate::server::state::AppState;
use crate::session::{self, ActionResult, SessionAction, SessionState};
use crate::utils::HealthReport;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `GET /`. A `q` parameter is a new search; without one the session's
/// retained query is re-run with its current limit.
pub async fn index(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Query(params): Query<SearchParams>,
) -> Response {
    let action = match params.q {
        Some(query) => SessionAction::Search(query),
        None => SessionAction::Refresh,
    };
    respond(&state, &cookies, action).await
}

/// `POST /more`
pub async fn show_more(State(state): State<Arc<AppState>>, cookies: Cookies) -> Response {
    respond(&state, &cookies, SessionAction::ShowMore).await
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let report = HealthReport::new(state.index.health_checks().await);

    let status = if report.is_available() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report)).into_response()
}

async fn respond(state: &AppState, cookies: &Cookies, action: SessionAction) -> Response {
    let live = session_cookie(state, cookies).and_then(|id| state.sessions.get(&id));

    match live {
        Some(handle) => {
            let mut current = handle.lock().await;
            let (_, response) = run_action(state, &mut current, action).await;
            response
        }
        None => {
            // A session is only created once a search has given it state
            let mut fresh = state.sessions.fresh_state();
            let (result, response) = run_action(state, &mut fresh, action).await;
            if result == ActionResult::Searched {
                let session_id = state.sessions.insert(fresh);
                set_session_cookie(state, cookies, session_id);
            }
            response
        }
    }
}

async fn run_action(
    state: &AppState,
    current: &mut SessionState,
    action: SessionAction,
) -> (ActionResult, Response) {
    let typed = match &action {
        SessionAction::Search(query) => Some(query.trim().to_string()),
        SessionAction::ShowMore | SessionAction::Refresh => None,
    };

    let index = state.index.status().await;
    let result = session::apply(current, index, action, state.config.pagination.step).await;

    // A failed search leaves the previous page up, so label it with its own query
    let display_query = match (&result, &current.query) {
        (ActionResult::Failed(_), Some(retained)) => retained.clone(),
        _ => typed
            .or_else(|| current.query.clone())
            .unwrap_or_default(),
    };

    let results = result.shows_results(current).then(|| ResultsModel {
        records: &current.records,
        page: current.page_view(),
    });

    let model = PageModel {
        query: &display_query,
        banners: result.banner().map(str::to_string).into_iter().collect(),
        search_enabled: index.table().is_some(),
        results,
    };

    let response = match state.renderer.render_page(&model) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    };

    (result, response)
}

fn session_cookie(state: &AppState, cookies: &Cookies) -> Option<Uuid> {
    cookies
        .get(&state.config.server.session_cookie)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

fn set_session_cookie(state: &AppState, cookies: &Cookies, session_id: Uuid) {
    let mut cookie = Cookie::new(
        state.config.server.session_cookie.clone(),
        session_id.to_string(),
    );
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookies.add(cookie);
}
