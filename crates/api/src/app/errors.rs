use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use jobboard_auth::AccessDenied;
use jobboard_infra::StoreError;

pub fn access_denied_to_response(err: AccessDenied) -> axum::response::Response {
    match err {
        AccessDenied::Unauthenticated => {
            json_error(StatusCode::UNAUTHORIZED, "unauthenticated", err.to_string())
        }
        AccessDenied::WrongRole { .. } => json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string()),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "profile store failure");
    match err {
        StoreError::Unavailable(msg) => json_error(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", msg),
        StoreError::Database { .. } => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
