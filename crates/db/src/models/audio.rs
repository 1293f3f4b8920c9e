//! Audio asset model and DTOs.

use edumedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `audio` table. `file_url` and `cover_url` point into
/// the external object store.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AudioAsset {
    pub id: DbId,
    pub name: String,
    pub note: String,
    pub file_url: String,
    pub cover_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new audio asset.
#[derive(Debug, Deserialize)]
pub struct CreateAudioAsset {
    pub name: String,
    pub note: Option<String>,
    pub file_url: String,
    pub cover_url: Option<String>,
}

/// DTO for updating an existing audio asset.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAudioAsset {
    pub name: Option<String>,
    pub note: Option<String>,
    pub file_url: Option<String>,
    pub cover_url: Option<String>,
}
