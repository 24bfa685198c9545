use crate::{
    services::interview::InterviewService,
    utils::{errors::AppError, jwt::verify_jwt},
    AppState,
};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub subject: Option<serde_json::Value>,
}

pub async fn auth_middleware<S: InterviewService>(
    State(state): State<AppState<S>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    let claims = verify_jwt(token, &state.jwt_secret).map_err(|err| {
        tracing::debug!("rejected bearer token: {err}");
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthUser { subject: claims.sub });
    Ok(next.run(request).await)
}
