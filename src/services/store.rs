use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::promotional_message::{NewPromotionalMessage, PromotionalMessage};

/// Persistence for promotional messages.
///
/// `eligible_at` has a default that filters `list`; backends with a query
/// language should push the window predicate down instead.
pub trait MessageStore: Send + Sync {
    /// Every stored message, newest first.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<PromotionalMessage>>> + Send;

    /// Messages eligible at `now`, newest first.
    fn eligible_at(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = anyhow::Result<Vec<PromotionalMessage>>> + Send {
        async move {
            let mut all = self.list().await?;
            all.retain(|m| m.is_eligible_at(now));
            Ok(all)
        }
    }

    fn get(
        &self,
        id: i64,
    ) -> impl Future<Output = anyhow::Result<Option<PromotionalMessage>>> + Send;

    fn insert(
        &self,
        new: &NewPromotionalMessage,
    ) -> impl Future<Output = anyhow::Result<PromotionalMessage>> + Send;

    /// Returns `None` when no row has this id.
    fn update(
        &self,
        id: i64,
        new: &NewPromotionalMessage,
    ) -> impl Future<Output = anyhow::Result<Option<PromotionalMessage>>> + Send;

    /// Hard delete. Returns whether a row was removed.
    fn delete(&self, id: i64) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

const COLUMNS: &str =
    r#"id, title, content, start_date, end_date, "type", is_active, created_at, updated_at"#;

/// PostgreSQL-backed store over the `promotional_messages` table.
#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MessageStore for PgMessageStore {
    async fn list(&self) -> anyhow::Result<Vec<PromotionalMessage>> {
        let rows = sqlx::query_as::<_, PromotionalMessage>(&format!(
            "SELECT {COLUMNS} FROM promotional_messages ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn eligible_at(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<PromotionalMessage>> {
        let rows = sqlx::query_as::<_, PromotionalMessage>(&format!(
            r#"SELECT {COLUMNS}
               FROM promotional_messages
               WHERE is_active = TRUE AND start_date <= $1 AND end_date >= $1
               ORDER BY created_at DESC, id DESC"#
        ))
        .bind(now)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<PromotionalMessage>> {
        let row = sqlx::query_as::<_, PromotionalMessage>(&format!(
            "SELECT {COLUMNS} FROM promotional_messages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, new: &NewPromotionalMessage) -> anyhow::Result<PromotionalMessage> {
        let row = sqlx::query_as::<_, PromotionalMessage>(&format!(
            r#"INSERT INTO promotional_messages
                   (title, content, start_date, end_date, "type", is_active)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {COLUMNS}"#
        ))
        .bind(&new.title)
        .bind(&new.content)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(new.message_type.as_str())
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        new: &NewPromotionalMessage,
    ) -> anyhow::Result<Option<PromotionalMessage>> {
        let row = sqlx::query_as::<_, PromotionalMessage>(&format!(
            r#"UPDATE promotional_messages SET
                   title = $2,
                   content = $3,
                   start_date = $4,
                   end_date = $5,
                   "type" = $6,
                   is_active = $7,
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {COLUMNS}"#
        ))
        .bind(id)
        .bind(&new.title)
        .bind(&new.content)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(new.message_type.as_str())
        .bind(new.is_active)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM promotional_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
