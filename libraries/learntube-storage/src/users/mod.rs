//! User management and authentication queries

use crate::error::{Result, StorageError};
use crate::time;
use chrono::Utc;
use learntube_core::types::{CreateUser, User, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Create a user together with their password hash
///
/// Both rows are written in one transaction. An email that is already
/// registered yields [`StorageError::Duplicate`].
pub async fn create(pool: &SqlitePool, user: CreateUser, password_hash: &str) -> Result<User> {
    let user = User {
        id: UserId::generate(),
        name: user.name,
        email: user.email,
        created_at: Utc::now(),
    };
    let created_at = time::encode(&user.created_at);

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO users (id, name, email, created_at) VALUES (?, ?, ?, ?)")
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StorageError::Duplicate(format!("email '{}' is already registered", user.email))
            }
            other => StorageError::Database(other),
        })?;

    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, updated_at) VALUES (?, ?, ?)",
    )
    .bind(&user.id)
    .bind(password_hash)
    .bind(&created_at)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Get user by (already normalized) email
pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Get user's password hash for authentication
///
/// Returns None if the user has no credentials
pub async fn get_password_hash(pool: &SqlitePool, user_id: &UserId) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, email, created_at FROM users ORDER BY name")
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

fn from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        created_at: time::decode(row.get::<&str, _>("created_at"))?,
    })
}
