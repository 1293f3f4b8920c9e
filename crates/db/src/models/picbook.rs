//! Picbook model and DTOs.

use edumedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `picbook` table.
///
/// `pages` is a JSON array of page image file names, resolved against
/// `folder_name` in the external object store. Page order in the array
/// is the reading order; hotspot rows address pages by index into it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Picbook {
    pub id: DbId,
    pub name: String,
    pub note: String,
    pub folder_name: String,
    pub pages: serde_json::Value,
    pub cover_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Picbook {
    /// Number of pages, treating a malformed column as an empty book.
    pub fn page_count(&self) -> usize {
        self.pages.as_array().map_or(0, |pages| pages.len())
    }
}

/// DTO for creating a new picbook.
#[derive(Debug, Deserialize)]
pub struct CreatePicbook {
    pub name: String,
    pub note: Option<String>,
    pub folder_name: String,
    pub pages: serde_json::Value,
    pub cover_url: Option<String>,
}

/// DTO for updating an existing picbook.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePicbook {
    pub name: Option<String>,
    pub note: Option<String>,
    pub folder_name: Option<String>,
    pub pages: Option<serde_json::Value>,
    pub cover_url: Option<String>,
}
