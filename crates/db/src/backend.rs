//! Adapters implementing the `edumedia-core` collaborator contracts
//! over the repository layer.
//!
//! Each adapter wraps a connection pool and is injected into the editor
//! components by the caller; nothing here is process-global. Database
//! failures surface as [`CoreError::Persistence`]. The hotspot payload
//! sum type is flattened to the nullable-column row shape on the way in
//! and restored on the way out.

use async_trait::async_trait;
use sqlx::PgPool;

use edumedia_core::annotation::{AnnotationKind, AnnotationLinkStore, LinkRow, NewLink};
use edumedia_core::catalog::{AssetCatalog, AssetRef};
use edumedia_core::error::CoreError;
use edumedia_core::hotspot::{Hotspot, HotspotPayload, HotspotStore, NewHotspot};
use edumedia_core::types::DbId;

use crate::models::annotation_link::NewAnnotationLink;
use crate::models::hotspot::{CreateHotspot, HotspotRow, UpdateHotspotPayload};
use crate::repositories::{
    AnnotationLinkRepo, AudioRepo, HotspotRepo, PicbookRepo, VideoRepo,
};

/// Map a database failure into the domain persistence error.
fn persistence(err: sqlx::Error) -> CoreError {
    CoreError::Persistence(err.to_string())
}

// ---------------------------------------------------------------------------
// Asset catalog
// ---------------------------------------------------------------------------

/// Read-only catalog over the three asset tables.
#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetCatalog for PgCatalog {
    async fn list_audio(&self) -> Result<Vec<AssetRef>, CoreError> {
        let rows = AudioRepo::list(&self.pool).await.map_err(persistence)?;
        Ok(rows
            .into_iter()
            .map(|a| AssetRef {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    async fn list_videos(&self, exclude: Option<DbId>) -> Result<Vec<AssetRef>, CoreError> {
        let rows = VideoRepo::list(&self.pool).await.map_err(persistence)?;
        Ok(rows
            .into_iter()
            .filter(|v| Some(v.id) != exclude)
            .map(|v| AssetRef {
                id: v.id,
                name: v.name,
            })
            .collect())
    }

    async fn list_picbooks(&self) -> Result<Vec<AssetRef>, CoreError> {
        let rows = PicbookRepo::list(&self.pool).await.map_err(persistence)?;
        Ok(rows
            .into_iter()
            .map(|p| AssetRef {
                id: p.id,
                name: p.name,
            })
            .collect())
    }

    async fn find(&self, kind: AnnotationKind, id: DbId) -> Result<Option<AssetRef>, CoreError> {
        let found = match kind {
            AnnotationKind::Audio => AudioRepo::find_by_id(&self.pool, id)
                .await
                .map_err(persistence)?
                .map(|a| AssetRef {
                    id: a.id,
                    name: a.name,
                }),
            AnnotationKind::Picbook => PicbookRepo::find_by_id(&self.pool, id)
                .await
                .map_err(persistence)?
                .map(|p| AssetRef {
                    id: p.id,
                    name: p.name,
                }),
            AnnotationKind::Video => VideoRepo::find_by_id(&self.pool, id)
                .await
                .map_err(persistence)?
                .map(|v| AssetRef {
                    id: v.id,
                    name: v.name,
                }),
        };
        Ok(found)
    }
}

// ---------------------------------------------------------------------------
// Timeline link store
// ---------------------------------------------------------------------------

/// The three link collections behind the timeline editor.
#[derive(Debug, Clone)]
pub struct PgAnnotationLinks {
    pool: PgPool,
}

impl PgAnnotationLinks {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnotationLinkStore for PgAnnotationLinks {
    async fn parent_exists(&self, video_id: DbId) -> Result<bool, CoreError> {
        VideoRepo::exists(&self.pool, video_id)
            .await
            .map_err(persistence)
    }

    async fn list(&self, kind: AnnotationKind, video_id: DbId) -> Result<Vec<LinkRow>, CoreError> {
        let rows = AnnotationLinkRepo::list_for_video(&self.pool, kind, video_id)
            .await
            .map_err(persistence)?;
        Ok(rows
            .into_iter()
            .map(|row| LinkRow {
                id: row.id,
                video_id: row.video_id,
                timestamp_seconds: row.timestamp_seconds,
                reference: row.reference_id,
                name: row.name,
                created_at: row.created_at,
            })
            .collect())
    }

    async fn delete_for_video(
        &self,
        kind: AnnotationKind,
        video_id: DbId,
    ) -> Result<(), CoreError> {
        AnnotationLinkRepo::delete_for_video(&self.pool, kind, video_id)
            .await
            .map_err(persistence)?;
        Ok(())
    }

    async fn insert_many(&self, kind: AnnotationKind, rows: &[NewLink]) -> Result<(), CoreError> {
        let rows: Vec<NewAnnotationLink> = rows
            .iter()
            .map(|row| NewAnnotationLink {
                video_id: row.video_id,
                timestamp_seconds: row.timestamp_seconds,
                reference_id: row.reference,
            })
            .collect();
        AnnotationLinkRepo::insert_many(&self.pool, kind, &rows)
            .await
            .map_err(persistence)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Hotspot store
// ---------------------------------------------------------------------------

/// The hotspot collection behind the page editor.
#[derive(Debug, Clone)]
pub struct PgHotspots {
    pool: PgPool,
}

impl PgHotspots {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flatten a payload into the row's kind and payload columns.
fn flatten_payload(payload: &HotspotPayload) -> (String, Option<String>, Option<DbId>, Option<DbId>) {
    match payload {
        HotspotPayload::Text { content } => {
            ("text".to_string(), Some(content.clone()), None, None)
        }
        HotspotPayload::Audio { audio_id } => ("audio".to_string(), None, Some(*audio_id), None),
        HotspotPayload::Video { video_id } => ("video".to_string(), None, None, Some(*video_id)),
    }
}

/// Restore a row into the domain hotspot. The payload columns that do
/// not match `kind` are ignored whatever they hold; a row whose active
/// column is missing is reported as corrupt rather than guessed at.
fn restore_hotspot(row: HotspotRow) -> Result<Hotspot, CoreError> {
    let payload = match row.kind.as_str() {
        "text" => HotspotPayload::Text {
            content: row.content.unwrap_or_default(),
        },
        "audio" => HotspotPayload::Audio {
            audio_id: row.audio_id.ok_or_else(|| {
                CoreError::Persistence(format!(
                    "hotspot {} is marked audio but has no audio reference",
                    row.id
                ))
            })?,
        },
        "video" => HotspotPayload::Video {
            video_id: row.video_id.ok_or_else(|| {
                CoreError::Persistence(format!(
                    "hotspot {} is marked video but has no video reference",
                    row.id
                ))
            })?,
        },
        other => {
            return Err(CoreError::Persistence(format!(
                "hotspot {} has unknown kind '{other}'",
                row.id
            )))
        }
    };
    Ok(Hotspot {
        id: row.id,
        picbook_id: row.picbook_id,
        page_index: row.page_index,
        x: row.x,
        y: row.y,
        payload,
    })
}

#[async_trait]
impl HotspotStore for PgHotspots {
    async fn list_page(
        &self,
        picbook_id: DbId,
        page_index: i32,
    ) -> Result<Vec<Hotspot>, CoreError> {
        let rows = HotspotRepo::list_page(&self.pool, picbook_id, page_index)
            .await
            .map_err(persistence)?;
        rows.into_iter().map(restore_hotspot).collect()
    }

    async fn insert(&self, hotspot: &NewHotspot) -> Result<DbId, CoreError> {
        let (kind, content, audio_id, video_id) = flatten_payload(&hotspot.payload);
        let row = HotspotRepo::insert(
            &self.pool,
            &CreateHotspot {
                picbook_id: hotspot.picbook_id,
                page_index: hotspot.page_index,
                x: hotspot.x,
                y: hotspot.y,
                kind,
                content,
                audio_id,
                video_id,
            },
        )
        .await
        .map_err(persistence)?;
        Ok(row.id)
    }

    async fn update_payload(&self, id: DbId, payload: &HotspotPayload) -> Result<(), CoreError> {
        let (kind, content, audio_id, video_id) = flatten_payload(payload);
        let updated = HotspotRepo::update_payload(
            &self.pool,
            id,
            &UpdateHotspotPayload {
                kind,
                content,
                audio_id,
                video_id,
            },
        )
        .await
        .map_err(persistence)?;
        if updated.is_none() {
            // Row vanished under us (concurrent delete); per-hotspot
            // edits are last-writer-wins, so this is not an error.
            tracing::warn!(hotspot_id = id, "Committed payload for a deleted hotspot");
        }
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        HotspotRepo::delete(&self.pool, id)
            .await
            .map_err(persistence)?;
        Ok(())
    }
}
