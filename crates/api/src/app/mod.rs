//! HTTP application wiring (Axum router + shared services).
//!
//! - `routes/`: HTTP routes + handlers (one file per page or API area)
//! - `pages.rs`: askama templates and guard-outcome rendering
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use jobboard_auth::{GuardRoutes, Hs256IdentityResolver};
use jobboard_infra::{EmployerProfileStore, InMemoryEmployerProfileStore, PostgresEmployerProfileStore};

use crate::config::AppConfig;
use crate::middleware;

pub mod errors;
pub mod pages;
pub mod routes;

/// Shared, immutable per-process services handed to every handler.
#[derive(Clone)]
pub struct AppServices {
    pub profiles: Arc<dyn EmployerProfileStore>,
    pub routes: GuardRoutes,
    pub auth_provider_url: Option<String>,
}

/// Build the full HTTP router around an already-constructed profile store.
pub fn build_app(config: &AppConfig, profiles: Arc<dyn EmployerProfileStore>) -> Router {
    let resolver = Arc::new(Hs256IdentityResolver::new(config.session_secret.as_bytes()));
    let auth_state = middleware::AuthState { resolver };

    let services = Arc::new(AppServices {
        profiles,
        routes: config.routes.clone(),
        auth_provider_url: config.auth_provider_url.clone(),
    });

    // Identity is resolved for every page; guards decide per route.
    let pages = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::identity_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(pages)
        .fallback(routes::system::not_found)
        .layer(ServiceBuilder::new())
}

/// Pick the profile store named by the configuration.
pub async fn build_profile_store(config: &AppConfig) -> anyhow::Result<Arc<dyn EmployerProfileStore>> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresEmployerProfileStore::connect(url, config.database_max_connections).await?;
            tracing::info!("connected employer profile store to postgres");
            Ok(Arc::new(store))
        }
        None => Ok(Arc::new(InMemoryEmployerProfileStore::new())),
    }
}
