use axum::{http::StatusCode, response::Response};

use crate::app::pages::{self, UnauthorizedTemplate};

/// Static page shown after a wrong-role redirect. Deliberately unguarded.
pub async fn unauthorized() -> Response {
    pages::render_page(StatusCode::OK, &UnauthorizedTemplate { home_href: "/" })
}
