use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::{
    models::promotional_message::PromotionalMessage,
    services::{
        banner::BannerView, promotional_messages::PromotionalMessageService, store::MessageStore,
    },
    AppState,
};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;

/// GET /promotional-message — the banner for right now, or null.
///
/// `content` is trusted admin markup and is returned unescaped.
pub async fn get_active<S: MessageStore>(
    State(state): State<AppState<S>>,
) -> ApiResult<Option<BannerView>> {
    PromotionalMessageService::active_now(&state.messages)
        .await
        .map(to_banner)
        .map_err(store_failure)
}

/// GET /promotional-message/active-on/{date} — the banner as shown on YYYY-MM-DD.
pub async fn get_active_on_date<S: MessageStore>(
    State(state): State<AppState<S>>,
    Path(date): Path<NaiveDate>,
) -> ApiResult<Option<BannerView>> {
    PromotionalMessageService::active_on_date(&state.messages, date)
        .await
        .map(to_banner)
        .map_err(store_failure)
}

fn to_banner(message: Option<PromotionalMessage>) -> Json<Option<BannerView>> {
    Json(message.as_ref().map(BannerView::from))
}

fn store_failure(e: anyhow::Error) -> (StatusCode, Json<Value>) {
    tracing::error!("active promotional message lookup failed: {e:#}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failure_is_500_with_message() {
        let (status, Json(body)) = store_failure(anyhow::anyhow!("pool timed out"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "pool timed out");
    }

    #[test]
    fn no_message_serializes_as_null() {
        let Json(body) = to_banner(None);
        assert_eq!(serde_json::to_value(body).unwrap(), Value::Null);
    }
}
