use std::future::Future;
use std::time::Instant;

use sqlx::PgPool;

use super::StorageError;
use crate::{
    models::interview::{Interview, NewInterview},
    utils::logger::LOGGER,
};

const SELECT_ALL: &str =
    "SELECT id, candidate_id, job_id, interview_date, feedback FROM interviews";

const INSERT: &str = r#"
    INSERT INTO interviews (candidate_id, job_id, interview_date, feedback)
    VALUES ($1, $2, $3, $4)
"#;

#[cfg_attr(test, mockall::automock)]
pub trait InterviewRepository: Send + Sync + 'static {
    /// Every row of the interviews table, in whatever order the database returns them.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Interview>, StorageError>> + Send;

    /// Blind insert; the generated id is not reported back.
    fn add(
        &self,
        interview: &NewInterview,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

#[derive(Debug, Clone)]
pub struct PgInterviewRepository {
    pool: PgPool,
}

impl PgInterviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl InterviewRepository for PgInterviewRepository {
    async fn list_all(&self) -> Result<Vec<Interview>, StorageError> {
        let start_time = Instant::now();

        let interviews = sqlx::query_as::<_, Interview>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        LOGGER.log_database_query(
            SELECT_ALL,
            start_time.elapsed().as_millis(),
            Some(interviews.len()),
        );

        Ok(interviews)
    }

    async fn add(&self, interview: &NewInterview) -> Result<(), StorageError> {
        let start_time = Instant::now();

        let result = sqlx::query(INSERT)
            .bind(interview.candidate_id)
            .bind(interview.job_id)
            .bind(interview.interview_date)
            .bind(&interview.feedback)
            .execute(&self.pool)
            .await?;

        LOGGER.log_database_query(
            INSERT,
            start_time.elapsed().as_millis(),
            usize::try_from(result.rows_affected()).ok(),
        );

        Ok(())
    }
}
