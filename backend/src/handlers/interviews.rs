use axum::{
    body::Bytes,
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

use crate::{
    middleware::auth::AuthUser,
    models::interview::{CreateInterviewRequest, Interview, NewInterview},
    services::interview::InterviewService,
    utils::{errors::AppError, logger::LOGGER},
    AppState,
};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn get_interviews<S: InterviewService>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Interview>>, AppError> {
    let interviews = state
        .interviews
        .list_all()
        .await
        .map_err(AppError::storage("failed to fetch interviews"))?;

    Ok(Json(interviews))
}

pub async fn create_interview<S: InterviewService>(
    State(state): State<AppState<S>>,
    Extension(auth_user): Extension<AuthUser>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    // Decoded regardless of Content-Type.
    let payload: CreateInterviewRequest = serde_json::from_slice(&body)?;
    let interview = NewInterview::try_from(payload)?;

    let metadata = [
        ("candidate_id".to_string(), serde_json::Value::from(interview.candidate_id)),
        ("job_id".to_string(), serde_json::Value::from(interview.job_id)),
    ]
    .into_iter()
    .collect();

    state
        .interviews
        .add(interview)
        .await
        .map_err(AppError::storage("failed to create interview"))?;

    LOGGER.log_business_event("interview_created", auth_user.subject.as_ref(), metadata);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "interview created successfully",
        }),
    ))
}
