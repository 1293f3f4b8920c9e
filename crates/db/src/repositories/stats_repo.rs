//! Aggregate queries for the stats overview.

use sqlx::PgPool;

use crate::models::stats::LibraryStats;
use edumedia_core::types::Timestamp;

/// Provides the dashboard landing-page aggregates.
pub struct StatsRepo;

impl StatsRepo {
    /// Library-wide totals: per-asset-type counts, annotation and
    /// hotspot counts, and the newest upload time across asset tables.
    pub async fn library(pool: &PgPool) -> Result<LibraryStats, sqlx::Error> {
        let (audio_total, audio_latest) = Self::table_stats(pool, "audio").await?;
        let (video_total, video_latest) = Self::table_stats(pool, "video").await?;
        let (picbook_total, picbook_latest) = Self::table_stats(pool, "picbook").await?;

        let mut annotation_total = 0;
        for table in ["video_audio_links", "video_picbook_links", "video_video_links"] {
            let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(pool)
                .await?;
            annotation_total += count;
        }

        let (hotspot_total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hotspots")
            .fetch_one(pool)
            .await?;

        let latest_upload = [audio_latest, video_latest, picbook_latest]
            .into_iter()
            .flatten()
            .max();

        Ok(LibraryStats {
            audio_total,
            video_total,
            picbook_total,
            annotation_total,
            hotspot_total,
            latest_upload,
        })
    }

    async fn table_stats(
        pool: &PgPool,
        table: &str,
    ) -> Result<(i64, Option<Timestamp>), sqlx::Error> {
        sqlx::query_as(&format!(
            "SELECT COUNT(*), MAX(created_at) FROM {table}"
        ))
        .fetch_one(pool)
        .await
    }
}
