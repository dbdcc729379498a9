//! Playlist documents
//!
//! A playlist row carries its roadmaps as a JSON column. Reads return the full
//! subtree and [`save`] replaces it with a single `UPDATE`, so every mutation
//! lands atomically. Every query is filtered by owner.

use crate::error::{Result, StorageError};
use crate::time;
use learntube_core::types::{CreatePlaylist, Playlist, PlaylistId, Roadmap, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const COLUMNS: &str = "id, user_id, title, roadmaps, created_at, updated_at";

/// Get user's playlists, most recently updated first
pub async fn get_user_playlists(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM playlists WHERE user_id = ? ORDER BY updated_at DESC, created_at DESC",
        COLUMNS
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

/// Get playlist by ID (owner only)
pub async fn get_by_id(
    pool: &SqlitePool,
    id: &PlaylistId,
    user_id: &UserId,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM playlists WHERE id = ? AND user_id = ?",
        COLUMNS
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Create new, empty playlist
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    let playlist = Playlist::new(playlist.user_id, &playlist.title)?;

    sqlx::query(
        r#"
        INSERT INTO playlists (id, user_id, title, roadmaps, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&playlist.id)
    .bind(&playlist.user_id)
    .bind(&playlist.title)
    .bind(serde_json::to_string(&playlist.roadmaps)?)
    .bind(time::encode(&playlist.created_at))
    .bind(time::encode(&playlist.updated_at))
    .execute(pool)
    .await?;

    Ok(playlist)
}

/// Replace the stored document (title, roadmaps, updated_at)
///
/// The owner is taken from the document and must match the stored row.
/// Last write wins.
pub async fn save(pool: &SqlitePool, playlist: &Playlist) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE playlists
        SET title = ?, roadmaps = ?, updated_at = ?
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(&playlist.title)
    .bind(serde_json::to_string(&playlist.roadmaps)?)
    .bind(time::encode(&playlist.updated_at))
    .bind(&playlist.id)
    .bind(&playlist.user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Playlist", playlist.id.as_str()));
    }
    Ok(())
}

/// Delete playlist (owner only); roadmaps are part of the row
pub async fn delete(pool: &SqlitePool, id: &PlaylistId, user_id: &UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Playlist", id.as_str()));
    }
    Ok(())
}

fn from_row(row: &SqliteRow) -> Result<Playlist> {
    let roadmaps: Vec<Roadmap> = serde_json::from_str(row.get::<&str, _>("roadmaps"))?;

    Ok(Playlist {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        roadmaps,
        created_at: time::decode(row.get::<&str, _>("created_at"))?,
        updated_at: time::decode(row.get::<&str, _>("updated_at"))?,
    })
}
