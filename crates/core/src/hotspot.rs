//! Interactive hotspots on picbook pages.
//!
//! A hotspot is a point on a page image, positioned as percentages of
//! the rendered image so it survives any display size, carrying either
//! free text or a reference to an audio clip or video. Unlike timeline
//! annotations, hotspot creation and deletion hit the backing store
//! immediately; only payload edits wait for an explicit commit.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// What a hotspot shows when tapped. Exactly one variant is active;
/// switching variants replaces the payload outright, so a stale text or
/// media reference can never leak through from a previous choice.
/// The flat nullable-column row shape exists only at the storage
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HotspotPayload {
    Text { content: String },
    Audio { audio_id: DbId },
    Video { video_id: DbId },
}

impl HotspotPayload {
    /// Payload for a freshly placed hotspot: empty text, awaiting edits.
    pub fn empty_text() -> Self {
        Self::Text {
            content: String::new(),
        }
    }

    /// The payload kind as a lowercase string slice.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Audio { .. } => "audio",
            Self::Video { .. } => "video",
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a hotspot position. Coordinates are percentages of the
/// rendered page image, so both axes must land in `[0, 100]`; callers
/// normalize raw pointer coordinates against the image (not its
/// container) before calling.
pub fn validate_position(x: f64, y: f64) -> Result<(), CoreError> {
    for (axis, value) in [("x", x), ("y", y)] {
        if !value.is_finite() {
            return Err(CoreError::Validation(format!(
                "{axis} must be a finite number"
            )));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(CoreError::Validation(format!(
                "{axis} must be between 0 and 100 percent of the image, got {value}"
            )));
        }
    }
    Ok(())
}

/// Validate a zero-based page index.
pub fn validate_page_index(page_index: i32) -> Result<(), CoreError> {
    if page_index < 0 {
        return Err(CoreError::Validation(format!(
            "page index must be zero or positive, got {page_index}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Hotspot and its store contract
// ---------------------------------------------------------------------------

/// One hotspot in the editor's working set for a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    pub id: DbId,
    pub picbook_id: DbId,
    pub page_index: i32,
    pub x: f64,
    pub y: f64,
    pub payload: HotspotPayload,
}

/// A hotspot to insert; the id is assigned by the backing store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewHotspot {
    pub picbook_id: DbId,
    pub page_index: i32,
    pub x: f64,
    pub y: f64,
    pub payload: HotspotPayload,
}

/// The hotspot collection behind the page editor.
#[async_trait]
pub trait HotspotStore: Send + Sync {
    /// All hotspots for one page, in creation order. Zero rows is a
    /// normal result, not an error.
    async fn list_page(&self, picbook_id: DbId, page_index: i32)
        -> Result<Vec<Hotspot>, CoreError>;

    /// Insert a hotspot, returning its durable id.
    async fn insert(&self, hotspot: &NewHotspot) -> Result<DbId, CoreError>;

    /// Overwrite one hotspot's payload.
    async fn update_payload(&self, id: DbId, payload: &HotspotPayload) -> Result<(), CoreError>;

    /// Delete one hotspot.
    async fn delete(&self, id: DbId) -> Result<(), CoreError>;
}

// ---------------------------------------------------------------------------
// Page editor
// ---------------------------------------------------------------------------

/// Working set of hotspots for the one page currently open in the
/// editor. Creation and deletion persist per action; payload edits stay
/// in memory until committed hotspot by hotspot.
#[derive(Debug)]
pub struct PageHotspots {
    picbook_id: DbId,
    page_index: i32,
    hotspots: Vec<Hotspot>,
}

impl PageHotspots {
    /// Load the hotspots for one page. A page with no hotspots loads as
    /// an empty set.
    pub async fn load_page(
        store: &impl HotspotStore,
        picbook_id: DbId,
        page_index: i32,
    ) -> Result<Self, CoreError> {
        validate_page_index(page_index)?;
        let hotspots = store.list_page(picbook_id, page_index).await?;
        Ok(Self {
            picbook_id,
            page_index,
            hotspots,
        })
    }

    pub fn picbook_id(&self) -> DbId {
        self.picbook_id
    }

    pub fn page_index(&self) -> i32 {
        self.page_index
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn get(&self, id: DbId) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    /// Place a new hotspot at a click position, as empty text.
    ///
    /// The insert goes to the store first and the point only appears in
    /// the working set once it succeeded, so the editor never shows a
    /// point that was not saved. Out-of-range coordinates fail before
    /// any store call.
    pub async fn add_at(
        &mut self,
        store: &impl HotspotStore,
        x: f64,
        y: f64,
    ) -> Result<&Hotspot, CoreError> {
        validate_position(x, y)?;

        let new = NewHotspot {
            picbook_id: self.picbook_id,
            page_index: self.page_index,
            x,
            y,
            payload: HotspotPayload::empty_text(),
        };
        let id = store.insert(&new).await?;

        let idx = self.hotspots.len();
        self.hotspots.push(Hotspot {
            id,
            picbook_id: new.picbook_id,
            page_index: new.page_index,
            x: new.x,
            y: new.y,
            payload: new.payload,
        });
        Ok(&self.hotspots[idx])
    }

    /// Replace a hotspot's payload in memory. Persists at the next
    /// [`PageHotspots::commit`] for that hotspot.
    pub fn set_content(&mut self, id: DbId, payload: HotspotPayload) -> Result<(), CoreError> {
        let Some(hotspot) = self.hotspots.iter_mut().find(|h| h.id == id) else {
            return Err(CoreError::NotFound {
                entity: "hotspot",
                id,
            });
        };
        hotspot.payload = payload;
        Ok(())
    }

    /// Persist one hotspot's current payload. On failure the in-memory
    /// payload is kept as-is so the caller can retry the commit.
    pub async fn commit(&self, store: &impl HotspotStore, id: DbId) -> Result<(), CoreError> {
        let Some(hotspot) = self.get(id) else {
            return Err(CoreError::NotFound {
                entity: "hotspot",
                id,
            });
        };
        store.update_payload(hotspot.id, &hotspot.payload).await
    }

    /// Delete a hotspot. The store delete runs first; the point stays in
    /// the working set when it fails, matching what is still persisted.
    pub async fn remove(&mut self, store: &impl HotspotStore, id: DbId) -> Result<(), CoreError> {
        if self.get(id).is_none() {
            return Err(CoreError::NotFound {
                entity: "hotspot",
                id,
            });
        }
        store.delete(id).await?;
        self.hotspots.retain(|h| h.id != id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
