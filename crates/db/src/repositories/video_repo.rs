//! Repository for the `video` table.

use edumedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideoAsset, UpdateVideoAsset, VideoAsset};

/// Column list for video queries.
const COLUMNS: &str = "id, name, note, video_url, cover_url, created_at, updated_at";

/// Provides CRUD operations for video assets.
pub struct VideoRepo;

impl VideoRepo {
    /// Create a new video asset, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideoAsset) -> Result<VideoAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO video (name, note, video_url, cover_url)
             VALUES ($1, COALESCE($2, ''), $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoAsset>(&query)
            .bind(&input.name)
            .bind(&input.note)
            .bind(&input.video_url)
            .bind(&input.cover_url)
            .fetch_one(pool)
            .await
    }

    /// Find a video asset by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VideoAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video WHERE id = $1");
        sqlx::query_as::<_, VideoAsset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a video with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM video WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// List all video assets, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<VideoAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, VideoAsset>(&query).fetch_all(pool).await
    }

    /// Update a video asset. Returns the updated row, or `None` if not
    /// found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideoAsset,
    ) -> Result<Option<VideoAsset>, sqlx::Error> {
        let query = format!(
            "UPDATE video SET
                name = COALESCE($1, name),
                note = COALESCE($2, note),
                video_url = COALESCE($3, video_url),
                cover_url = COALESCE($4, cover_url),
                updated_at = NOW()
             WHERE id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoAsset>(&query)
            .bind(&input.name)
            .bind(&input.note)
            .bind(&input.video_url)
            .bind(&input.cover_url)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video asset by its ID. Returns true if a row was
    /// deleted. Timeline links to and from it, and video hotspots
    /// referencing it, cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM video WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a batch of video assets, returning how many rows went away.
    pub async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM video WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
