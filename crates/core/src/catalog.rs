//! Read-only lookup of selectable reference assets.
//!
//! The catalog backs the reference pickers in both editors: audio clips,
//! picbooks, and other videos, each listed by id and display name. Empty
//! result sets are valid (rendered as "no options" by the caller).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationKind;
use crate::error::CoreError;
use crate::types::DbId;

/// A selectable asset as shown in a reference picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub id: DbId,
    pub name: String,
}

/// Read-only asset directory, shared across editor sessions.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    /// List all audio clips.
    async fn list_audio(&self) -> Result<Vec<AssetRef>, CoreError>;

    /// List all videos, optionally excluding one (a video must not
    /// reference itself on its own timeline).
    async fn list_videos(&self, exclude: Option<DbId>) -> Result<Vec<AssetRef>, CoreError>;

    /// List all picbooks.
    async fn list_picbooks(&self) -> Result<Vec<AssetRef>, CoreError>;

    /// Look up a single asset of the given kind. `None` when the asset
    /// no longer exists.
    async fn find(&self, kind: AnnotationKind, id: DbId) -> Result<Option<AssetRef>, CoreError>;
}
