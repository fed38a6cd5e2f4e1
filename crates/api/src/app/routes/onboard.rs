use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
};

use jobboard_auth::{Role, guard_page};

use crate::app::AppServices;
use crate::app::pages::{self, NotFoundTemplate, OnboardingTemplate};
use crate::context::CurrentIdentity;

/// `/onboard/:role` — guarded onboarding page for the role in the path.
pub async fn onboard(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<CurrentIdentity>,
    Path(role): Path<String>,
) -> Response {
    let Ok(required) = role.parse::<Role>() else {
        return pages::render_page(
            StatusCode::NOT_FOUND,
            &NotFoundTemplate {
                path: format!("/onboard/{role}"),
            },
        );
    };

    let outcome = guard_page(required, identity.get(), &services.routes, |who| {
        OnboardingTemplate::new(required, who)
    });
    pages::outcome_to_response(outcome)
}
