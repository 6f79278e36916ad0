use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

use crate::AppState;

/// Header carrying the shared admin key. Also listed in the CORS allow-list.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Admin gate for the promotional message write surface.
pub struct AdminKey;

impl<S: Send + Sync> FromRequestParts<AppState<S>> for AdminKey {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get(ADMIN_KEY_HEADER).map(|v| v.to_str()) {
            None => Err((StatusCode::UNAUTHORIZED, "Missing X-Admin-Key header")),
            Some(Ok(key)) if key == state.config.admin_key => Ok(AdminKey),
            Some(_) => Err((StatusCode::UNAUTHORIZED, "Invalid admin key")),
        }
    }
}
