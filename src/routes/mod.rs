pub mod admin;
pub mod health;
pub mod promotional_messages;

use axum::{routing::get, Router};

use crate::{services::store::MessageStore, AppState};

pub fn router<S>() -> Router<AppState<S>>
where
    S: MessageStore + Clone + 'static,
{
    Router::new()
        .route("/health", get(health::health_check::<S>))
        // Storefront banner
        .route("/promotional-message", get(promotional_messages::get_active::<S>))
        .route(
            "/promotional-message/active-on/{date}",
            get(promotional_messages::get_active_on_date::<S>),
        )
        // Admin
        .route(
            "/admin/promotional-messages",
            get(admin::list_messages::<S>).post(admin::create_message::<S>),
        )
        .route(
            "/admin/promotional-messages/{id}",
            get(admin::get_message::<S>)
                .put(admin::update_message::<S>)
                .delete(admin::delete_message::<S>),
        )
}
