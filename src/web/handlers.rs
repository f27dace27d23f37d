//! HTTP request handlers for the checker front end.

use crate::core::checker::InteractionChecker;
use crate::core::CheckReport;
use crate::web::render::{render_index, render_result};
use axum::{
    extract::State,
    response::{Html, Json},
    routing::{get, post},
    Form, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state. Read-only, so requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<InteractionChecker>,
    pub title: Arc<str>,
}

impl AppState {
    pub fn new(checker: InteractionChecker, title: impl Into<Arc<str>>) -> Self {
        Self {
            checker: Arc::new(checker),
            title: title.into(),
        }
    }
}

/// Body of both the form post and the JSON endpoint; absent fields count as blank.
#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub drug_a: String,
    #[serde(default)]
    pub drug_b: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET / - Input form
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.checker.messages(), &state.title))
}

/// POST /check - Form submission, rendered as a result page
async fn check_form(
    State(state): State<AppState>,
    Form(request): Form<CheckRequest>,
) -> Html<String> {
    let report = state.checker.check(&request.drug_a, &request.drug_b).await;
    Html(render_result(state.checker.messages(), &state.title, &report))
}

/// POST /api/check - Same check, JSON in and out
async fn check_json(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Json<CheckReport> {
    Json(state.checker.check(&request.drug_a, &request.drug_b).await)
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/check", post(check_form))
        .route("/api/check", post(check_json))
        .route("/health", get(health_check))
        .with_state(state)
}
