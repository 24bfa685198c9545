use std::borrow::Cow;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: i64,
    pub candidate_id: i64,
    pub job_id: i64,
    pub interview_date: DateTime<Utc>,
    pub feedback: String,
}

/// The client-supplied part of an interview. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInterview {
    pub candidate_id: i64,
    pub job_id: i64,
    pub interview_date: DateTime<Utc>,
    pub feedback: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInterviewRequest {
    #[serde(default)]
    #[validate(custom = "validate_reference")]
    pub candidate_id: i64,
    #[serde(default)]
    #[validate(custom = "validate_reference")]
    pub job_id: i64,
    #[validate(
        required(message = "interview_date is required"),
        custom = "validate_interview_date"
    )]
    pub interview_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub feedback: String,
}

impl TryFrom<CreateInterviewRequest> for NewInterview {
    type Error = ValidationErrors;

    fn try_from(request: CreateInterviewRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let interview_date = request.interview_date.ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.add("interview_date", ValidationError::new("required"));
            errors
        })?;

        Ok(NewInterview {
            candidate_id: request.candidate_id,
            job_id: request.job_id,
            interview_date,
            feedback: request.feedback,
        })
    }
}

fn validate_reference(id: i64) -> Result<(), ValidationError> {
    if id == 0 {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from("must be a non-zero id"));
        return Err(error);
    }
    Ok(())
}

// Clients that serialize an unset timestamp send 0001-01-01T00:00:00Z.
fn validate_interview_date(date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if is_zero_time(date) {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from("interview_date is required"));
        return Err(error);
    }
    Ok(())
}

fn is_zero_time(date: &DateTime<Utc>) -> bool {
    Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0)
        .single()
        .is_some_and(|zero| zero == *date)
}
