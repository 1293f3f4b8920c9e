//! Repository for the `hotspots` table.

use edumedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::hotspot::{CreateHotspot, HotspotRow, UpdateHotspotPayload};

/// Column list for hotspot queries.
const COLUMNS: &str = "id, picbook_id, page_index, x, y, kind, content, \
    audio_id, video_id, created_at, updated_at";

/// Provides CRUD operations for picbook page hotspots.
pub struct HotspotRepo;

impl HotspotRepo {
    /// Insert a hotspot, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateHotspot) -> Result<HotspotRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotspots
                (picbook_id, page_index, x, y, kind, content, audio_id, video_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HotspotRow>(&query)
            .bind(input.picbook_id)
            .bind(input.page_index)
            .bind(input.x)
            .bind(input.y)
            .bind(&input.kind)
            .bind(&input.content)
            .bind(input.audio_id)
            .bind(input.video_id)
            .fetch_one(pool)
            .await
    }

    /// Find a hotspot by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HotspotRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotspots WHERE id = $1");
        sqlx::query_as::<_, HotspotRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all hotspots on one picbook page, in creation order.
    pub async fn list_page(
        pool: &PgPool,
        picbook_id: DbId,
        page_index: i32,
    ) -> Result<Vec<HotspotRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hotspots
             WHERE picbook_id = $1 AND page_index = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, HotspotRow>(&query)
            .bind(picbook_id)
            .bind(page_index)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a hotspot's payload columns. Every payload column is
    /// written so a kind switch clears the previous kind's column.
    /// Returns the updated row, or `None` if not found.
    pub async fn update_payload(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHotspotPayload,
    ) -> Result<Option<HotspotRow>, sqlx::Error> {
        let query = format!(
            "UPDATE hotspots SET
                kind = $1,
                content = $2,
                audio_id = $3,
                video_id = $4,
                updated_at = NOW()
             WHERE id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HotspotRow>(&query)
            .bind(&input.kind)
            .bind(&input.content)
            .bind(input.audio_id)
            .bind(input.video_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hotspot by its ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hotspots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count hotspots across all picbooks.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hotspots")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
