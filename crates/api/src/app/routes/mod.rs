use axum::{Router, routing::get};

pub mod home;
pub mod onboard;
pub mod sign_in;
pub mod subscription;
pub mod system;
pub mod unauthorized;

/// Local sign-in entry point; the default `SIGN_IN_URL`.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Router for every page and API endpoint that sees the current identity.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home::home))
        .route(SIGN_IN_PATH, get(sign_in::sign_in))
        .route("/onboard/:role", get(onboard::onboard))
        .route("/unauthorized", get(unauthorized::unauthorized))
        .route("/api/employers/me/subscription", get(subscription::my_subscription))
        .route("/whoami", get(system::whoami))
}
