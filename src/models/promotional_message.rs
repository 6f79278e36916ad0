use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A banner message shown in the storefront navigation while its window is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PromotionalMessage {
    pub id: i64,
    pub title: String,
    /// Rich text authored through the admin surface. Rendered without escaping,
    /// so only admin-written markup may ever land here.
    pub content: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Stored as free text; read it through [`PromotionalMessage::kind`].
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub message_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PromotionalMessage {
    /// Active flag set and `now` inside the inclusive `[start_date, end_date]` window.
    pub fn is_eligible_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.start_date <= now && self.end_date >= now
    }

    /// Typed style tag. Unrecognised stored values read as [`MessageType::Info`].
    pub fn kind(&self) -> MessageType {
        match self.message_type.parse::<MessageType>() {
            Ok(kind) => kind,
            Err(_) => {
                tracing::warn!(
                    "promotional message {} has unknown type {:?}, rendering as info",
                    self.id,
                    self.message_type
                );
                MessageType::Info
            }
        }
    }
}

/// "info" | "warning" | "success" | "error"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl MessageType {
    pub const ALL: [MessageType; 4] = [
        MessageType::Info,
        MessageType::Warning,
        MessageType::Success,
        MessageType::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Info => "info",
            MessageType::Warning => "warning",
            MessageType::Success => "success",
            MessageType::Error => "error",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownType(s.to_string()))
    }
}

/// Rejections raised at the admin-write boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("content must not be empty")]
    EmptyContent,
    #[error("start_date {start} is after end_date {end}")]
    InvertedWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("unknown message type {0:?}, expected one of info, warning, success, error")]
    UnknownType(String),
}

/// Body for POST /admin/promotional-messages and PUT /admin/promotional-messages/{id}.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPromotionalMessageRequest {
    pub title: String,
    pub content: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Defaults to "info".
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    /// Defaults to true.
    pub is_active: Option<bool>,
}

/// A checked write, ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotionalMessage {
    pub title: String,
    pub content: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub message_type: MessageType,
    pub is_active: bool,
}

impl UpsertPromotionalMessageRequest {
    pub fn validate(&self) -> Result<NewPromotionalMessage, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        if self.start_date > self.end_date {
            return Err(ValidationError::InvertedWindow {
                start: self.start_date,
                end: self.end_date,
            });
        }
        let message_type = match self.message_type.as_deref() {
            Some(raw) => raw.trim().to_ascii_lowercase().parse::<MessageType>()?,
            None => MessageType::default(),
        };

        Ok(NewPromotionalMessage {
            title: title.to_string(),
            content: self.content.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            message_type,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}
