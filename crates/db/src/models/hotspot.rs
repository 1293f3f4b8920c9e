//! Hotspot row model and DTOs.
//!
//! The row keeps the flat nullable-column shape (`kind` plus one column
//! per payload variant); `kind` alone decides which payload column is
//! active and readers ignore the others. The domain-side sum type lives
//! in `edumedia_core::hotspot`; the adapter in `crate::backend` converts
//! between the two.

use edumedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `hotspots` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HotspotRow {
    pub id: DbId,
    pub picbook_id: DbId,
    pub page_index: i32,
    pub x: f64,
    pub y: f64,
    pub kind: String,
    pub content: Option<String>,
    pub audio_id: Option<DbId>,
    pub video_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a hotspot.
#[derive(Debug, Deserialize)]
pub struct CreateHotspot {
    pub picbook_id: DbId,
    pub page_index: i32,
    pub x: f64,
    pub y: f64,
    pub kind: String,
    pub content: Option<String>,
    pub audio_id: Option<DbId>,
    pub video_id: Option<DbId>,
}

/// DTO for overwriting a hotspot's payload. All payload columns are
/// written on every update so a kind switch clears the columns of the
/// previous kind.
#[derive(Debug, Deserialize)]
pub struct UpdateHotspotPayload {
    pub kind: String,
    pub content: Option<String>,
    pub audio_id: Option<DbId>,
    pub video_id: Option<DbId>,
}
