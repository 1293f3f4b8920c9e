//! Video asset model and DTOs.

use edumedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `video` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VideoAsset {
    pub id: DbId,
    pub name: String,
    pub note: String,
    pub video_url: String,
    pub cover_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new video asset.
#[derive(Debug, Deserialize)]
pub struct CreateVideoAsset {
    pub name: String,
    pub note: Option<String>,
    pub video_url: String,
    pub cover_url: Option<String>,
}

/// DTO for updating an existing video asset.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVideoAsset {
    pub name: Option<String>,
    pub note: Option<String>,
    pub video_url: Option<String>,
    pub cover_url: Option<String>,
}
