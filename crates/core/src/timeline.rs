//! In-memory working set behind the video timeline editor.
//!
//! A [`TimelineEditor`] holds every annotation for one parent video
//! across all three kinds, enforcing the shared timestamp namespace.
//! Edits stay in memory until [`TimelineEditor::save`] replaces the
//! backing collections wholesale (delete all rows for the parent, then
//! insert the current set). Two sessions saving the same video race as
//! last-writer-wins; nothing in this layer detects the overlap.

use crate::annotation::{
    default_label, missing_reference_label, validate_timestamp_seconds, Annotation,
    AnnotationKind, AnnotationLinkStore, NewLink,
};
use crate::catalog::AssetCatalog;
use crate::error::CoreError;
use crate::types::DbId;

/// Editor-side working set of timeline annotations for one video.
#[derive(Debug)]
pub struct TimelineEditor {
    video_id: DbId,
    annotations: Vec<Annotation>,
    /// Next session-local annotation id. Durable row ids never enter
    /// the working set: the three link tables number rows independently
    /// so their ids can collide across kinds, and a full-replace save
    /// reassigns them anyway.
    next_id: DbId,
}

impl TimelineEditor {
    /// Load the full annotation set for a parent video.
    ///
    /// Fails with `NotFound` when the video itself does not exist; a
    /// video with no annotations loads as an empty set. Display names
    /// come from the joined catalog name, falling back to a placeholder
    /// when the referenced asset has been deleted (never a hard failure).
    pub async fn load(
        links: &impl AnnotationLinkStore,
        video_id: DbId,
    ) -> Result<Self, CoreError> {
        if !links.parent_exists(video_id).await? {
            return Err(CoreError::NotFound {
                entity: "video",
                id: video_id,
            });
        }

        let mut annotations = Vec::new();
        let mut next_id = 1;
        for kind in AnnotationKind::ALL {
            for row in links.list(kind, video_id).await? {
                let id = next_id;
                next_id += 1;
                let display_name = match row.name {
                    Some(name) => name,
                    None => {
                        tracing::warn!(
                            video_id,
                            link_id = row.id,
                            kind = kind.as_str(),
                            reference = row.reference,
                            "Referenced asset is gone; using placeholder name"
                        );
                        missing_reference_label(kind, id)
                    }
                };
                annotations.push(Annotation {
                    id,
                    video_id,
                    kind,
                    timestamp_seconds: row.timestamp_seconds,
                    reference: Some(row.reference),
                    display_name,
                });
            }
        }

        Ok(Self {
            video_id,
            annotations,
            next_id,
        })
    }

    /// An empty working set for a video known to exist (a freshly
    /// created one, before anything was ever saved).
    pub fn empty(video_id: DbId) -> Self {
        Self {
            video_id,
            annotations: Vec::new(),
            next_id: 1,
        }
    }

    pub fn video_id(&self) -> DbId {
        self.video_id
    }

    /// Current working set, insertion-ordered within each kind.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Annotations of one kind, in insertion order.
    pub fn annotations_of(&self, kind: AnnotationKind) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(move |a| a.kind == kind)
    }

    pub fn get(&self, id: DbId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// Add a new annotation of `kind` at a playback offset.
    ///
    /// The timestamp namespace is shared across kinds: an offset already
    /// taken by any annotation fails with `DuplicateTimestamp`. The new
    /// annotation starts with no reference and an auto-generated label
    /// (`"<Kind> N"`, N being the 1-based per-kind count).
    pub fn add_at_timestamp(
        &mut self,
        kind: AnnotationKind,
        timestamp_seconds: i32,
    ) -> Result<&Annotation, CoreError> {
        validate_timestamp_seconds(timestamp_seconds)?;
        if self
            .annotations
            .iter()
            .any(|a| a.timestamp_seconds == timestamp_seconds)
        {
            return Err(CoreError::DuplicateTimestamp {
                video_id: self.video_id,
                timestamp_seconds,
            });
        }

        let ordinal = self.annotations_of(kind).count() + 1;
        let id = self.next_id;
        self.next_id += 1;

        let idx = self.annotations.len();
        self.annotations.push(Annotation {
            id,
            video_id: self.video_id,
            kind,
            timestamp_seconds,
            reference: None,
            display_name: default_label(kind, ordinal),
        });
        Ok(&self.annotations[idx])
    }

    /// Point an annotation at a catalog asset and refresh its cached
    /// display name. The reference may be changed any number of times
    /// before saving.
    pub async fn set_reference(
        &mut self,
        catalog: &impl AssetCatalog,
        id: DbId,
        reference: DbId,
    ) -> Result<(), CoreError> {
        let Some(annotation) = self.annotations.iter_mut().find(|a| a.id == id) else {
            return Err(CoreError::NotFound {
                entity: "annotation",
                id,
            });
        };

        let display_name = match catalog.find(annotation.kind, reference).await? {
            Some(asset) => asset.name,
            None => {
                tracing::warn!(
                    video_id = annotation.video_id,
                    annotation_id = id,
                    reference,
                    "Selected asset not in catalog; using placeholder name"
                );
                missing_reference_label(annotation.kind, id)
            }
        };

        annotation.reference = Some(reference);
        annotation.display_name = display_name;
        Ok(())
    }

    /// Drop an annotation from the working set. Takes effect in the
    /// backing store only at the next save.
    pub fn remove(&mut self, id: DbId) -> Result<(), CoreError> {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        if self.annotations.len() == before {
            return Err(CoreError::NotFound {
                entity: "annotation",
                id,
            });
        }
        Ok(())
    }

    /// Replace the backing collections with the current working set.
    ///
    /// Deletes every existing row for the parent across all three
    /// collections, then inserts the in-memory annotations that have a
    /// reference, partitioned by kind. Annotations still awaiting a
    /// reference are skipped, not persisted as invalid rows. Returns how
    /// many rows were written.
    ///
    /// The two phases are separate round trips: a failure after the
    /// delete phase leaves the store missing rows that were not
    /// reinserted. Callers should reload and retry rather than assume
    /// either the old or the new set survived.
    pub async fn save(&self, links: &impl AnnotationLinkStore) -> Result<usize, CoreError> {
        for kind in AnnotationKind::ALL {
            links.delete_for_video(kind, self.video_id).await?;
        }

        let mut persisted = 0;
        for kind in AnnotationKind::ALL {
            let rows: Vec<NewLink> = self
                .annotations_of(kind)
                .filter_map(|a| {
                    a.reference.map(|reference| NewLink {
                        video_id: self.video_id,
                        timestamp_seconds: a.timestamp_seconds,
                        reference,
                    })
                })
                .collect();
            if rows.is_empty() {
                continue;
            }
            links.insert_many(kind, &rows).await?;
            persisted += rows.len();
        }

        tracing::info!(
            video_id = self.video_id,
            persisted,
            skipped = self.annotations.len() - persisted,
            "Replaced timeline annotations"
        );
        Ok(persisted)
    }
}
