use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use jobboard_auth::Role;

use crate::app::AppServices;
use crate::app::pages::{self, SignInTemplate};

#[derive(Debug, Default, Deserialize)]
pub struct SignInParams {
    pub role: Option<String>,
}

/// Hand the visitor off to the hosted sign-in UI, keeping a known `role`.
///
/// Without a configured provider the local page explains that sign-in is
/// unavailable instead of redirecting.
pub async fn sign_in(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<SignInParams>,
) -> Response {
    let role = params.role.as_deref().and_then(|raw| raw.parse::<Role>().ok());

    match &services.auth_provider_url {
        Some(provider) => {
            let location = match role {
                Some(role) => pages::with_role_param(provider, role),
                None => provider.clone(),
            };
            tracing::debug!(role = ?role, "handing sign-in off to the identity provider");
            Redirect::temporary(&location).into_response()
        }
        None => pages::render_page(StatusCode::OK, &SignInTemplate::new(role)),
    }
}
