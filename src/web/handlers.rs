//! HTTP request handlers

use super::state::AppState;
use crate::results::{format_duration, LookupOutcome, LookupResult};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;

/// Form payload for a lookup batch
#[derive(Debug, Deserialize)]
pub struct FindForm {
    #[serde(default)]
    pub input_text: String,
}

/// One rendered row of the results table
#[derive(Debug, Serialize)]
pub struct ResultRow {
    pub query: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub duration: Option<String>,
}

impl From<LookupResult> for ResultRow {
    fn from(result: LookupResult) -> Self {
        let LookupResult { query, outcome } = result;
        match outcome {
            LookupOutcome::Found(song) => Self {
                query,
                title: Some(song.title),
                url: Some(song.url),
                duration: Some(format_duration(song.duration_secs)),
            },
            // Misses, timeouts and backend failures all read the same
            _ => Self {
                query,
                title: None,
                url: None,
                duration: None,
            },
        }
    }
}

/// Home page: empty form
pub async fn index(State(state): State<AppState>) -> Response {
    render_index(&state, "", Vec::new())
}

/// Form submission: dispatch the batch and render the results table
pub async fn find(State(state): State<AppState>, Form(form): Form<FindForm>) -> Response {
    let results = state.dispatcher.dispatch_text(&form.input_text).await;
    let rows = results.into_iter().map(ResultRow::from).collect();
    render_index(&state, &form.input_text, rows)
}

fn render_index(state: &AppState, input_text: &str, results: Vec<ResultRow>) -> Response {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("input_text", input_text);
    ctx.insert(
        "min_duration",
        &format_duration(state.settings.search.min_duration_secs),
    );
    ctx.insert("results", &results);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Favicon handler
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
