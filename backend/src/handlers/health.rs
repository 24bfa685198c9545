use axum::{http::header::CONTENT_TYPE, response::IntoResponse, Json};
use serde::Serialize;

const OPENAPI_DOCUMENT: &str = include_str!("../../docs/openapi.json");

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub async fn openapi() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], OPENAPI_DOCUMENT)
}
