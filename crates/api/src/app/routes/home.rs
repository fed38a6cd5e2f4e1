use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::Response};

use crate::app::AppServices;
use crate::app::pages::{self, HomeTemplate};

/// Landing page with one sign-in link per role.
pub async fn home(Extension(services): Extension<Arc<AppServices>>) -> Response {
    pages::render_page(StatusCode::OK, &HomeTemplate::new(&services.routes.sign_in))
}
