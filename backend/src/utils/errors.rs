use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

use crate::{repository::StorageError, utils::logger::LOGGER};

pub const VALIDATION_MESSAGE: &str = "candidate_id, job_id, and interview_date are required";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Vec<String>>>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    ValidationError(HashMap<String, Vec<String>>),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("{context}: {source}")]
    StorageError {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

impl AppError {
    /// Wraps a store failure with the generic message shown to the client.
    pub fn storage(context: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| AppError::StorageError { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                VALIDATION_MESSAGE.to_string(),
                Some(errors),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string(), None),
            AppError::StorageError { context, source } => {
                LOGGER.log_error(
                    context,
                    [("source".to_string(), serde_json::Value::String(source.to_string()))]
                        .into_iter()
                        .collect(),
                );
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string(), None)
            }
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut error_map = HashMap::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("Invalid value for field '{}'", field))
                })
                .collect();
            error_map.insert(field.to_string(), messages);
        }

        AppError::ValidationError(error_map)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::BadRequest(format!("Failed to parse the request body as JSON: {error}"))
    }
}
