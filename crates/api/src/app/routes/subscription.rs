use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, response::Response, Json};

use jobboard_auth::{Role, check_access};
use jobboard_infra::get_employer_subscription_status;

use crate::app::{AppServices, errors};
use crate::context::CurrentIdentity;

/// Subscription status of the signed-in employer, as `{"isSubscribed": bool}`.
///
/// Same role check as the pages, but denials are JSON errors, not redirects.
pub async fn my_subscription(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<CurrentIdentity>,
) -> Response {
    let employer = match check_access(Role::Employer, identity.get()) {
        Ok(who) => who,
        Err(denied) => return errors::access_denied_to_response(denied),
    };

    match get_employer_subscription_status(services.profiles.as_ref(), Some(&employer.user_id)).await {
        Ok(status) => Json(status).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
