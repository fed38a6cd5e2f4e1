use axum::{
    extract::Extension,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::app::pages::{self, NotFoundTemplate};
use crate::context::CurrentIdentity;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Echo the resolved identity; `null` fields when anonymous.
pub async fn whoami(Extension(identity): Extension<CurrentIdentity>) -> impl IntoResponse {
    let who = identity.get();
    Json(serde_json::json!({
        "authenticated": who.is_some(),
        "user_id": who.map(|w| w.user_id.to_string()),
        "role": who.and_then(|w| w.role).map(|r| r.as_str()),
    }))
}

pub async fn not_found(uri: Uri) -> Response {
    pages::render_page(
        StatusCode::NOT_FOUND,
        &NotFoundTemplate {
            path: uri.path().to_string(),
        },
    )
}
