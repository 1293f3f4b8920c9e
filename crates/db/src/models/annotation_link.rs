//! Timeline link row models.
//!
//! The three link tables (`video_audio_links`, `video_picbook_links`,
//! `video_video_links`) share one row shape; the repository addresses
//! them by annotation kind.

use edumedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from one of the link tables.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AnnotationLink {
    pub id: DbId,
    pub video_id: DbId,
    pub timestamp_seconds: i32,
    pub reference_id: DbId,
    pub created_at: Timestamp,
}

/// A link row joined with the referenced asset's current name. `name`
/// is `None` when the asset row is gone.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AnnotationLinkWithName {
    pub id: DbId,
    pub video_id: DbId,
    pub timestamp_seconds: i32,
    pub reference_id: DbId,
    pub name: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a link row.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAnnotationLink {
    pub video_id: DbId,
    pub timestamp_seconds: i32,
    pub reference_id: DbId,
}
