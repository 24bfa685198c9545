pub mod interview;

pub use interview::{InterviewRepository, PgInterviewRepository};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
