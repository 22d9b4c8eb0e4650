//! Note repository implementation.
//!
//! Every query filters on both `id` and `owner_id` in SQL. A mismatched
//! (id, owner) pair is indistinguishable from a nonexistent row, so a caller
//! holding someone else's note id learns nothing; ownership is enforced at
//! the data layer, never as an in-memory check after an unscoped lookup.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use uuid::Uuid;

use jot_core::{
    new_v7, CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest,
};

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn map_row_to_note(row: PgRow) -> Note {
    Note {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        title: row.get("title"),
        content: row.get("content"),
        summary: row.get("summary"),
        created_at_utc: row.get("created_at_utc"),
        updated_at_utc: row.get("updated_at_utc"),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, owner: &str, req: CreateNoteRequest) -> Result<Uuid> {
        let id = new_v7();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO note (id, owner_id, title, content, summary, created_at_utc, updated_at_utc)
             VALUES ($1, $2, $3, $4, NULL, $5, $5)",
        )
        .bind(id)
        .bind(owner)
        .bind(&req.title)
        .bind(&req.content)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(id)
    }

    async fn fetch(&self, id: Uuid, owner: &str) -> Result<Note> {
        let row = sqlx::query(
            "SELECT id, owner_id, title, content, summary, created_at_utc, updated_at_utc
             FROM note WHERE id = $1 AND owner_id = $2",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        row.map(map_row_to_note).ok_or(Error::NoteNotFound(id))
    }

    async fn list(&self, owner: &str) -> Result<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, owner_id, title, content, summary, created_at_utc, updated_at_utc
             FROM note WHERE owner_id = $1 ORDER BY created_at_utc DESC, id DESC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row_to_note).collect())
    }

    async fn update(&self, id: Uuid, owner: &str, req: UpdateNoteRequest) -> Result<()> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE note SET title = $1, content = $2, updated_at_utc = $3
             WHERE id = $4 AND owner_id = $5",
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(now)
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid, owner: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }

    async fn set_summary(&self, id: Uuid, owner: &str, summary: &str) -> Result<()> {
        // Deliberately leaves updated_at_utc alone: the summary is derived
        // data, not a user edit.
        let result = sqlx::query("UPDATE note SET summary = $1 WHERE id = $2 AND owner_id = $3")
            .bind(summary)
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }
}
