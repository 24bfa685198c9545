use std::future::Future;

use crate::{
    models::interview::{Interview, NewInterview},
    repository::{InterviewRepository, StorageError},
};

pub trait InterviewService: Send + Sync + 'static {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Interview>, StorageError>> + Send;

    fn add(
        &self,
        interview: NewInterview,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Hands every call straight to the repository.
#[derive(Debug, Clone)]
pub struct InterviewServiceImpl<R> {
    repo: R,
}

impl<R> InterviewServiceImpl<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: InterviewRepository> InterviewService for InterviewServiceImpl<R> {
    async fn list_all(&self) -> Result<Vec<Interview>, StorageError> {
        self.repo.list_all().await
    }

    async fn add(&self, interview: NewInterview) -> Result<(), StorageError> {
        self.repo.add(&interview).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::interview::MockInterviewRepository;
    use chrono::{DateTime, TimeZone, Utc};

    fn mock_interview_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 30, 15, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn list_all_returns_repository_rows() {
        let interviews = vec![
            Interview {
                id: 1,
                candidate_id: 101,
                job_id: 201,
                interview_date: mock_interview_date(),
                feedback: "Excellent performance.".to_string(),
            },
            Interview {
                id: 2,
                candidate_id: 102,
                job_id: 202,
                interview_date: mock_interview_date(),
                feedback: "Needs improvement.".to_string(),
            },
        ];

        let mut repo = MockInterviewRepository::new();
        let rows = interviews.clone();
        repo.expect_list_all()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(rows))));

        let service = InterviewServiceImpl::new(repo);
        assert_eq!(service.list_all().await.unwrap(), interviews);
    }

    #[tokio::test]
    async fn list_all_passes_errors_through() {
        let mut repo = MockInterviewRepository::new();
        repo.expect_list_all().once().return_once(|| {
            Box::pin(std::future::ready(Err(StorageError::Database(
                sqlx::Error::PoolTimedOut,
            ))))
        });

        let service = InterviewServiceImpl::new(repo);
        let err = service.list_all().await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::Database(sqlx::Error::PoolTimedOut)
        ));
    }

    #[tokio::test]
    async fn add_forwards_interview_unchanged() {
        let new_interview = NewInterview {
            candidate_id: 103,
            job_id: 203,
            interview_date: mock_interview_date(),
            feedback: "Good communication skills.".to_string(),
        };

        let mut repo = MockInterviewRepository::new();
        repo.expect_add()
            .once()
            .with(mockall::predicate::eq(new_interview.clone()))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));

        let service = InterviewServiceImpl::new(repo);
        service.add(new_interview).await.unwrap();
    }

    #[tokio::test]
    async fn add_passes_errors_through() {
        let mut repo = MockInterviewRepository::new();
        repo.expect_add().once().return_once(|_| {
            Box::pin(std::future::ready(Err(StorageError::Database(
                sqlx::Error::PoolClosed,
            ))))
        });

        let service = InterviewServiceImpl::new(repo);
        let err = service
            .add(NewInterview {
                candidate_id: 104,
                job_id: 204,
                interview_date: mock_interview_date(),
                feedback: "Requires more technical expertise.".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Database(sqlx::Error::PoolClosed)));
    }
}
