use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Timestamp {timestamp_seconds}s on video {video_id} already has an annotation")]
    DuplicateTimestamp {
        video_id: DbId,
        timestamp_seconds: i32,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),
}
