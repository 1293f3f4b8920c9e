//! Repository for the `picbook` table.

use edumedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::picbook::{CreatePicbook, Picbook, UpdatePicbook};

/// Column list for picbook queries.
const COLUMNS: &str = "id, name, note, folder_name, pages, cover_url, created_at, updated_at";

/// Provides CRUD operations for picbooks.
pub struct PicbookRepo;

impl PicbookRepo {
    /// Create a new picbook, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePicbook) -> Result<Picbook, sqlx::Error> {
        let query = format!(
            "INSERT INTO picbook (name, note, folder_name, pages, cover_url)
             VALUES ($1, COALESCE($2, ''), $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Picbook>(&query)
            .bind(&input.name)
            .bind(&input.note)
            .bind(&input.folder_name)
            .bind(&input.pages)
            .bind(&input.cover_url)
            .fetch_one(pool)
            .await
    }

    /// Find a picbook by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Picbook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM picbook WHERE id = $1");
        sqlx::query_as::<_, Picbook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all picbooks, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Picbook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM picbook ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Picbook>(&query).fetch_all(pool).await
    }

    /// Update a picbook. Returns the updated row, or `None` if not
    /// found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePicbook,
    ) -> Result<Option<Picbook>, sqlx::Error> {
        let query = format!(
            "UPDATE picbook SET
                name = COALESCE($1, name),
                note = COALESCE($2, note),
                folder_name = COALESCE($3, folder_name),
                pages = COALESCE($4, pages),
                cover_url = COALESCE($5, cover_url),
                updated_at = NOW()
             WHERE id = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Picbook>(&query)
            .bind(&input.name)
            .bind(&input.note)
            .bind(&input.folder_name)
            .bind(&input.pages)
            .bind(&input.cover_url)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a picbook by its ID. Returns true if a row was deleted.
    /// Its hotspots and timeline links cascade; page images in the
    /// object store are the caller's cleanup.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM picbook WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a batch of picbooks, returning how many rows went away.
    pub async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM picbook WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
