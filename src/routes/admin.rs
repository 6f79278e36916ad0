use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    middleware::admin::AdminKey,
    models::promotional_message::{PromotionalMessage, UpsertPromotionalMessageRequest},
    services::{
        promotional_messages::{PromotionalMessageService, WriteError},
        store::MessageStore,
    },
    AppState,
};

type AdminResult<T> = Result<T, (StatusCode, Json<Value>)>;

/// GET /admin/promotional-messages — newest first.
pub async fn list_messages<S: MessageStore>(
    State(state): State<AppState<S>>,
    _admin: AdminKey,
) -> AdminResult<Json<Vec<PromotionalMessage>>> {
    PromotionalMessageService::list(&state.messages)
        .await
        .map(Json)
        .map_err(|e| write_failure(WriteError::Store(e)))
}

/// GET /admin/promotional-messages/{id}
pub async fn get_message<S: MessageStore>(
    State(state): State<AppState<S>>,
    _admin: AdminKey,
    Path(id): Path<i64>,
) -> AdminResult<Json<PromotionalMessage>> {
    PromotionalMessageService::get(&state.messages, id)
        .await
        .map(Json)
        .map_err(write_failure)
}

/// POST /admin/promotional-messages
pub async fn create_message<S: MessageStore>(
    State(state): State<AppState<S>>,
    _admin: AdminKey,
    Json(body): Json<UpsertPromotionalMessageRequest>,
) -> AdminResult<(StatusCode, Json<PromotionalMessage>)> {
    PromotionalMessageService::create(&state.messages, &body)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(write_failure)
}

/// PUT /admin/promotional-messages/{id}
pub async fn update_message<S: MessageStore>(
    State(state): State<AppState<S>>,
    _admin: AdminKey,
    Path(id): Path<i64>,
    Json(body): Json<UpsertPromotionalMessageRequest>,
) -> AdminResult<Json<PromotionalMessage>> {
    PromotionalMessageService::update(&state.messages, id, &body)
        .await
        .map(Json)
        .map_err(write_failure)
}

/// DELETE /admin/promotional-messages/{id}
pub async fn delete_message<S: MessageStore>(
    State(state): State<AppState<S>>,
    _admin: AdminKey,
    Path(id): Path<i64>,
) -> AdminResult<Json<Value>> {
    PromotionalMessageService::delete(&state.messages, id)
        .await
        .map(|()| Json(json!({ "ok": true })))
        .map_err(write_failure)
}

fn write_failure(e: WriteError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        WriteError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        WriteError::NotFound(_) => StatusCode::NOT_FOUND,
        WriteError::Store(inner) => {
            tracing::error!("promotional message store failure: {inner:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "error": e.to_string() })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::promotional_message::ValidationError;

    #[test]
    fn write_failures_map_to_status() {
        let (status, Json(body)) = write_failure(WriteError::Store(anyhow::anyhow!("disk full")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "disk full");

        let (status, _) = write_failure(WriteError::NotFound(5));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, Json(body)) = write_failure(ValidationError::EmptyTitle.into());
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "title must not be empty");
    }
}
