use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Answer, AnswerId, BoundingBox, Coordinate, Place, Question, TagSet};

/// Errors raised by place/answer/location store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Seed file error: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Seed file format error: {0}")]
    SeedFormat(#[from] serde_json::Error),

    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

/// Read access to the wizard question catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions with their answers, ordered by step ascending
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerStore: Send + Sync {
    async fn find_answer_by_id(&self, id: AnswerId) -> Result<Option<Answer>, StoreError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Places carrying at least one of `tags`, in insertion order
    async fn find_places_by_tags(&self, tags: &TagSet) -> Result<Vec<Place>, StoreError>;

    /// Places located inside `bbox` (edges included), in insertion order
    async fn find_places_in_bounding_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<Place>, StoreError>;
}

/// Most recently reported user location
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn current_location(&self) -> Result<Option<Coordinate>, StoreError>;

    async fn update_location(&self, location: Coordinate) -> Result<(), StoreError>;
}

/// Everything the HTTP layer needs from a backing store
#[async_trait]
pub trait Store: QuestionStore + AnswerStore + PlaceStore + LocationStore {
    async fn health_check(&self) -> Result<bool, StoreError>;
}
