pub mod config;
pub mod db;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use sqlx::PgPool;

use config::Config;
use services::store::PgMessageStore;

/// Application state shared across all handlers.
///
/// `messages` defaults to the PostgreSQL store; handlers only need `MessageStore`.
#[derive(Clone)]
pub struct AppState<S = PgMessageStore> {
    pub db: PgPool,
    pub messages: S,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: PgPool, config: Arc<Config>) -> Self {
        Self {
            messages: PgMessageStore::new(db.clone()),
            db,
            config,
        }
    }
}

impl<S> AppState<S> {
    pub fn with_store(db: PgPool, messages: S, config: Arc<Config>) -> Self {
        Self { db, messages, config }
    }
}
