use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{
    models::promotional_message::{
        PromotionalMessage, UpsertPromotionalMessageRequest, ValidationError,
    },
    services::{selector::select_active_message, store::MessageStore},
};

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("promotional message {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Probe instant for a calendar date: midnight UTC.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub struct PromotionalMessageService;

impl PromotionalMessageService {
    /// The banner for the current request.
    pub async fn active_now<S: MessageStore>(
        store: &S,
    ) -> anyhow::Result<Option<PromotionalMessage>> {
        Self::active_at(store, Utc::now()).await
    }

    /// The banner as it would appear on `date`, regardless of today's date.
    pub async fn active_on_date<S: MessageStore>(
        store: &S,
        date: NaiveDate,
    ) -> anyhow::Result<Option<PromotionalMessage>> {
        Self::active_at(store, start_of_day(date)).await
    }

    pub async fn active_at<S: MessageStore>(
        store: &S,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<PromotionalMessage>> {
        let eligible = store.eligible_at(now).await?;
        Ok(select_active_message(now, &eligible).cloned())
    }

    pub async fn list<S: MessageStore>(store: &S) -> anyhow::Result<Vec<PromotionalMessage>> {
        store.list().await
    }

    pub async fn get<S: MessageStore>(
        store: &S,
        id: i64,
    ) -> Result<PromotionalMessage, WriteError> {
        store.get(id).await?.ok_or(WriteError::NotFound(id))
    }

    pub async fn create<S: MessageStore>(
        store: &S,
        req: &UpsertPromotionalMessageRequest,
    ) -> Result<PromotionalMessage, WriteError> {
        let new = req.validate()?;
        let created = store.insert(&new).await?;
        tracing::info!(
            "created promotional message {} ({}) for {} .. {}",
            created.id,
            created.message_type,
            created.start_date,
            created.end_date
        );
        Ok(created)
    }

    pub async fn update<S: MessageStore>(
        store: &S,
        id: i64,
        req: &UpsertPromotionalMessageRequest,
    ) -> Result<PromotionalMessage, WriteError> {
        let new = req.validate()?;
        let updated = store.update(id, &new).await?.ok_or(WriteError::NotFound(id))?;
        tracing::info!("updated promotional message {}", id);
        Ok(updated)
    }

    pub async fn delete<S: MessageStore>(store: &S, id: i64) -> Result<(), WriteError> {
        if !store.delete(id).await? {
            return Err(WriteError::NotFound(id));
        }
        tracing::info!("deleted promotional message {}", id);
        Ok(())
    }
}
