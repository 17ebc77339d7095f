//! SQLite-backed user store.
//!
//! The `users` table holds at most one row. Saving runs DELETE + INSERT in
//! one transaction so a save with a different primary key still leaves a
//! single row behind; upserting by key alone would let two users coexist.

use crate::{DbError, Result, UserStore};

use ft_core::User;

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tokio::sync::watch;

pub struct SqliteUserStore {
    pool: SqlitePool,
    current: watch::Sender<Option<User>>,
}

impl SqliteUserStore {
    /// Open the store over an existing pool, seeding the observable slot
    /// from the persisted row.
    pub async fn new(pool: SqlitePool) -> Result<Self> {
        let user = fetch_current(&pool).await?;
        debug!(
            "user store opened ({})",
            if user.is_some() { "session present" } else { "empty" }
        );

        let (current, _) = watch::channel(user);
        Ok(Self { pool, current })
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn save(&self, user: &User) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM users").execute(&mut *tx).await?;

        sqlx::query(
            r#"
                INSERT INTO users (id, username, email, access_token, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(user.username.as_deref())
        .bind(&user.email)
        .bind(user.access_token.as_deref())
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.current.send_replace(Some(user.clone()));
        Ok(())
    }

    async fn get(&self) -> Result<Option<User>> {
        fetch_current(&self.pool).await
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        self.current.send_replace(None);
        Ok(())
    }

    fn observe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }
}

async fn fetch_current(pool: &SqlitePool) -> Result<Option<User>> {
    let row = sqlx::query(
        r#"
            SELECT id, username, email, access_token, created_at, updated_at
            FROM users
            LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    row.map(|r| decode_user(&r)).transpose()
}

fn decode_user(row: &SqliteRow) -> Result<User> {
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        access_token: row.try_get("access_token")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
