//! Axum HTTP handlers for the echo backend
//!
//! Every handler is a pure function of the request headers and the
//! immutable service identity.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::Html,
    Json,
};
use serde::Serialize;

use crate::{auth::AuthContext, errors::AppError, headers::collect_headers, html, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub service: String,
    pub language: String,
    pub authenticated_user: String,
    pub auth_method: String,
    pub auth_timestamp: String,
    pub all_headers: BTreeMap<String, String>,
}

pub async fn root(
    State(state): State<AppState>,
    auth: AuthContext,
    headers: HeaderMap,
) -> Json<RootResponse> {
    let identity = &state.identity;
    Json(RootResponse {
        message: identity.message.clone(),
        service: identity.service.clone(),
        language: identity.language.clone(),
        authenticated_user: auth.remote_user,
        auth_method: auth.auth_type,
        auth_timestamp: auth.auth_time,
        all_headers: collect_headers(&headers),
    })
}

pub async fn html_page(
    State(state): State<AppState>,
    auth: AuthContext,
    headers: HeaderMap,
) -> Html<String> {
    Html(html::render_page(
        &state.identity,
        &auth,
        &collect_headers(&headers),
    ))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
