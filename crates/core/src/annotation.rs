//! Timeline annotation kinds, validation, and the backing-collection
//! contract.
//!
//! An annotation attaches a reference to another asset (audio clip,
//! picbook, or sub-video) to a parent video at a whole-second playback
//! offset. The three kinds persist to three same-shaped link collections
//! but share one timestamp namespace per parent video.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// The asset kind an annotation references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    Audio,
    Picbook,
    Video,
}

/// All valid annotation kind strings.
const VALID_KIND_STRINGS: &[&str] = &["audio", "picbook", "video"];

impl AnnotationKind {
    /// Every kind, in the order the editor panels present them.
    pub const ALL: [AnnotationKind; 3] = [Self::Audio, Self::Picbook, Self::Video];

    /// Return the kind as a lowercase string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Picbook => "picbook",
            Self::Video => "video",
        }
    }

    /// Capitalized label used when auto-naming a new annotation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Audio => "Audio",
            Self::Picbook => "Picbook",
            Self::Video => "Video",
        }
    }

    /// Parse a kind from a string slice.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "audio" => Ok(Self::Audio),
            "picbook" => Ok(Self::Picbook),
            "video" => Ok(Self::Video),
            _ => Err(CoreError::Validation(format!(
                "Invalid annotation kind '{s}'. Must be one of: {}",
                VALID_KIND_STRINGS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation and labels
// ---------------------------------------------------------------------------

/// Validate a playback offset in whole seconds. Offsets are zero-based;
/// negative values cannot occur from a well-behaved player and are
/// rejected rather than clamped.
pub fn validate_timestamp_seconds(timestamp_seconds: i32) -> Result<(), CoreError> {
    if timestamp_seconds < 0 {
        return Err(CoreError::Validation(format!(
            "timestamp must be a non-negative number of seconds, got {timestamp_seconds}"
        )));
    }
    Ok(())
}

/// Auto-generated display label for a freshly added annotation:
/// `"<Kind> N"` where N is the 1-based ordinal within that kind.
pub fn default_label(kind: AnnotationKind, ordinal: usize) -> String {
    format!("{} {ordinal}", kind.label())
}

/// Placeholder display name for an annotation whose referenced asset no
/// longer exists in the catalog. Built from the annotation's own id so
/// the row stays identifiable in the editor.
pub fn missing_reference_label(kind: AnnotationKind, annotation_id: DbId) -> String {
    format!("{} #{annotation_id} (missing)", kind.label())
}

// ---------------------------------------------------------------------------
// In-memory annotation
// ---------------------------------------------------------------------------

/// One timeline annotation in the editor's working set.
///
/// `kind` and `video_id` are immutable once created; changing kind is
/// modeled as delete plus re-add. `reference` stays unset while the user
/// is still choosing an asset; unreferenced annotations are skipped at
/// save time. `display_name` is a cache of the catalog name for the
/// current reference, never authoritative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub id: DbId,
    pub video_id: DbId,
    pub kind: AnnotationKind,
    pub timestamp_seconds: i32,
    pub reference: Option<DbId>,
    pub display_name: String,
}

// ---------------------------------------------------------------------------
// Backing-collection contract
// ---------------------------------------------------------------------------

/// A persisted link row, joined with the referenced asset's current name.
/// `name` is `None` when the referenced asset has been deleted out from
/// under the link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRow {
    pub id: DbId,
    pub video_id: DbId,
    pub timestamp_seconds: i32,
    pub reference: DbId,
    pub name: Option<String>,
    pub created_at: Timestamp,
}

/// A link row to insert. Ids and creation timestamps are assigned by the
/// backing store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLink {
    pub video_id: DbId,
    pub timestamp_seconds: i32,
    pub reference: DbId,
}

/// The per-kind link collections behind the timeline editor.
///
/// One logical collection per [`AnnotationKind`]; each call addresses a
/// single kind. No call spans kinds, so a replace that fails between the
/// delete and insert phases can leave the collections partially written;
/// callers treat the overall replace as non-atomic.
#[async_trait]
pub trait AnnotationLinkStore: Send + Sync {
    /// Whether the parent video exists at all.
    async fn parent_exists(&self, video_id: DbId) -> Result<bool, CoreError>;

    /// All links of one kind for a parent video, joined with the
    /// referenced asset name, in insertion order.
    async fn list(&self, kind: AnnotationKind, video_id: DbId) -> Result<Vec<LinkRow>, CoreError>;

    /// Delete every link of one kind for a parent video.
    async fn delete_for_video(&self, kind: AnnotationKind, video_id: DbId)
        -> Result<(), CoreError>;

    /// Insert a batch of links of one kind.
    async fn insert_many(&self, kind: AnnotationKind, rows: &[NewLink]) -> Result<(), CoreError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn kind_audio_round_trip() {
        assert_eq!(AnnotationKind::Audio.as_str(), "audio");
        assert_eq!(
            AnnotationKind::from_str("audio").unwrap(),
            AnnotationKind::Audio
        );
    }

    #[test]
    fn kind_picbook_round_trip() {
        assert_eq!(AnnotationKind::Picbook.as_str(), "picbook");
        assert_eq!(
            AnnotationKind::from_str("picbook").unwrap(),
            AnnotationKind::Picbook
        );
    }

    #[test]
    fn kind_video_round_trip() {
        assert_eq!(AnnotationKind::Video.as_str(), "video");
        assert_eq!(
            AnnotationKind::from_str("video").unwrap(),
            AnnotationKind::Video
        );
    }

    #[test]
    fn kind_invalid_rejected() {
        let err = AnnotationKind::from_str("quiz").unwrap_err();
        assert!(err.to_string().contains("Invalid annotation kind"));
    }

    #[test]
    fn kind_empty_rejected() {
        assert!(AnnotationKind::from_str("").is_err());
    }

    #[test]
    fn kind_all_covers_every_variant() {
        assert_eq!(AnnotationKind::ALL.len(), VALID_KIND_STRINGS.len());
        for (kind, s) in AnnotationKind::ALL.iter().zip(VALID_KIND_STRINGS) {
            assert_eq!(kind.as_str(), *s);
        }
    }

    #[test]
    fn timestamp_zero_accepted() {
        assert!(validate_timestamp_seconds(0).is_ok());
    }

    #[test]
    fn timestamp_positive_accepted() {
        assert!(validate_timestamp_seconds(3600).is_ok());
    }

    #[test]
    fn timestamp_negative_rejected() {
        assert_matches!(
            validate_timestamp_seconds(-1),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn default_label_is_one_based() {
        assert_eq!(default_label(AnnotationKind::Audio, 1), "Audio 1");
        assert_eq!(default_label(AnnotationKind::Picbook, 3), "Picbook 3");
    }

    #[test]
    fn missing_reference_label_names_the_annotation() {
        let label = missing_reference_label(AnnotationKind::Video, 42);
        assert!(label.contains("42"));
        assert!(label.contains("Video"));
    }
}
