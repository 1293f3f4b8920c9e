//! Repository for the `audio` table.

use edumedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::audio::{AudioAsset, CreateAudioAsset, UpdateAudioAsset};

/// Column list for audio queries.
const COLUMNS: &str = "id, name, note, file_url, cover_url, created_at, updated_at";

/// Provides CRUD operations for audio assets.
pub struct AudioRepo;

impl AudioRepo {
    /// Create a new audio asset, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAudioAsset) -> Result<AudioAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO audio (name, note, file_url, cover_url)
             VALUES ($1, COALESCE($2, ''), $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudioAsset>(&query)
            .bind(&input.name)
            .bind(&input.note)
            .bind(&input.file_url)
            .bind(&input.cover_url)
            .fetch_one(pool)
            .await
    }

    /// Find an audio asset by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AudioAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audio WHERE id = $1");
        sqlx::query_as::<_, AudioAsset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all audio assets, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<AudioAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audio ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, AudioAsset>(&query).fetch_all(pool).await
    }

    /// Update an audio asset. Returns the updated row, or `None` if not
    /// found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAudioAsset,
    ) -> Result<Option<AudioAsset>, sqlx::Error> {
        let query = format!(
            "UPDATE audio SET
                name = COALESCE($1, name),
                note = COALESCE($2, note),
                file_url = COALESCE($3, file_url),
                cover_url = COALESCE($4, cover_url),
                updated_at = NOW()
             WHERE id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudioAsset>(&query)
            .bind(&input.name)
            .bind(&input.note)
            .bind(&input.file_url)
            .bind(&input.cover_url)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an audio asset by its ID. Returns true if a row was
    /// deleted. Link rows and audio hotspots referencing it cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM audio WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a batch of audio assets, returning how many rows went away.
    pub async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM audio WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
