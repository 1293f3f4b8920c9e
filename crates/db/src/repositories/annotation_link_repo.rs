//! Repository for the three timeline link tables.
//!
//! The tables are same-shaped, so one repository addresses them all and
//! picks the physical table (and the asset table to join for display
//! names) from the annotation kind.

use edumedia_core::annotation::AnnotationKind;
use edumedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::annotation_link::{AnnotationLink, AnnotationLinkWithName, NewAnnotationLink};

/// Column list for link queries (unqualified).
const COLUMNS: &str = "id, video_id, timestamp_seconds, reference_id, created_at";

/// Physical link table for a kind.
fn link_table(kind: AnnotationKind) -> &'static str {
    match kind {
        AnnotationKind::Audio => "video_audio_links",
        AnnotationKind::Picbook => "video_picbook_links",
        AnnotationKind::Video => "video_video_links",
    }
}

/// Asset table a kind's `reference_id` points into.
fn asset_table(kind: AnnotationKind) -> &'static str {
    match kind {
        AnnotationKind::Audio => "audio",
        AnnotationKind::Picbook => "picbook",
        AnnotationKind::Video => "video",
    }
}

/// Provides per-kind operations on the timeline link tables.
pub struct AnnotationLinkRepo;

impl AnnotationLinkRepo {
    /// List one kind's links for a parent video, joined with the
    /// referenced asset's current name, in insertion order.
    pub async fn list_for_video(
        pool: &PgPool,
        kind: AnnotationKind,
        video_id: DbId,
    ) -> Result<Vec<AnnotationLinkWithName>, sqlx::Error> {
        let query = format!(
            "SELECT l.id, l.video_id, l.timestamp_seconds, l.reference_id,
                    a.name AS name, l.created_at
             FROM {link} l
             LEFT JOIN {asset} a ON a.id = l.reference_id
             WHERE l.video_id = $1
             ORDER BY l.id",
            link = link_table(kind),
            asset = asset_table(kind),
        );
        sqlx::query_as::<_, AnnotationLinkWithName>(&query)
            .bind(video_id)
            .fetch_all(pool)
            .await
    }

    /// Delete every link of one kind for a parent video, returning how
    /// many rows went away.
    pub async fn delete_for_video(
        pool: &PgPool,
        kind: AnnotationKind,
        video_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE video_id = $1", link_table(kind));
        let result = sqlx::query(&query).bind(video_id).execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Insert a batch of links of one kind in a single transaction.
    pub async fn insert_many(
        pool: &PgPool,
        kind: AnnotationKind,
        rows: &[NewAnnotationLink],
    ) -> Result<Vec<AnnotationLink>, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (video_id, timestamp_seconds, reference_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}",
            link_table(kind),
        );

        let mut tx = pool.begin().await?;
        let mut inserted = Vec::with_capacity(rows.len());
        for row in rows {
            let link = sqlx::query_as::<_, AnnotationLink>(&query)
                .bind(row.video_id)
                .bind(row.timestamp_seconds)
                .bind(row.reference_id)
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(link);
        }
        tx.commit().await?;
        Ok(inserted)
    }

    /// Count links across all three tables for a parent video.
    pub async fn count_for_video(pool: &PgPool, video_id: DbId) -> Result<i64, sqlx::Error> {
        let mut total = 0;
        for kind in AnnotationKind::ALL {
            let query = format!(
                "SELECT COUNT(*) FROM {} WHERE video_id = $1",
                link_table(kind)
            );
            let (count,): (i64,) = sqlx::query_as(&query).bind(video_id).fetch_one(pool).await?;
            total += count;
        }
        Ok(total)
    }
}
