//! Runtime configuration, read from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

use jobboard_auth::GuardRoutes;

use crate::app::routes::SIGN_IN_PATH;

const DEV_SESSION_SECRET: &str = "dev-secret";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub session_secret: String,
    /// `None` runs against the in-memory profile store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub routes: GuardRoutes,
    /// Hosted sign-in UI that `/sign-in` hands off to.
    pub auth_provider_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            session_secret: DEV_SESSION_SECRET.to_string(),
            database_url: None,
            database_max_connections: 5,
            routes: GuardRoutes::default(),
            auth_provider_url: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                message: format!("{e}"),
            })?,
            None => defaults.bind_addr,
        };

        let session_secret = get("SESSION_SECRET").unwrap_or_else(|| {
            tracing::warn!("SESSION_SECRET not set; using insecure dev default");
            DEV_SESSION_SECRET.to_string()
        });

        let database_url = get("DATABASE_URL");
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set; employer profiles are kept in memory");
        }

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                message: format!("{e}"),
            })?,
            None => defaults.database_max_connections,
        };

        let routes = GuardRoutes {
            sign_in: get("SIGN_IN_URL").unwrap_or(defaults.routes.sign_in),
            unauthorized: get("UNAUTHORIZED_URL").unwrap_or(defaults.routes.unauthorized),
        };

        // A relative sign-in target only works if this app serves it.
        if is_relative(&routes.sign_in) && path_of(&routes.sign_in) != SIGN_IN_PATH {
            return Err(ConfigError::Invalid {
                key: "SIGN_IN_URL",
                message: format!("relative sign-in target must be {SIGN_IN_PATH}"),
            });
        }

        let auth_provider_url = get("AUTH_PROVIDER_URL").map(|url| url.trim().to_string());
        match &auth_provider_url {
            Some(url) if is_relative(url) => {
                return Err(ConfigError::Invalid {
                    key: "AUTH_PROVIDER_URL",
                    message: "must be an absolute http(s) URL".to_string(),
                });
            }
            Some(_) => {}
            None => tracing::warn!("AUTH_PROVIDER_URL not set; /sign-in cannot hand off to a provider"),
        }

        Ok(Self {
            bind_addr,
            session_secret,
            database_url,
            database_max_connections,
            routes,
            auth_provider_url,
        })
    }
}

fn is_relative(url: &str) -> bool {
    !(url.starts_with("https://") || url.starts_with("http://"))
}

fn path_of(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.routes.sign_in, "/sign-in");
        assert_eq!(config.routes.unauthorized, "/unauthorized");
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("SESSION_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/jobs"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("SIGN_IN_URL", "https://accounts.example.com/sign-in"),
            ("UNAUTHORIZED_URL", "/denied"),
            ("AUTH_PROVIDER_URL", "https://accounts.example.com/sign-in"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.session_secret, "s3cret");
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/jobs"));
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.routes.sign_in, "https://accounts.example.com/sign-in");
        assert_eq!(config.routes.unauthorized, "/denied");
        assert_eq!(
            config.auth_provider_url.as_deref(),
            Some("https://accounts.example.com/sign-in")
        );
    }

    #[test]
    fn relative_sign_in_target_must_be_served_locally() {
        let config = AppConfig::from_lookup(lookup(&[("SIGN_IN_URL", "/sign-in?app=jobs")])).unwrap();
        assert_eq!(config.routes.sign_in, "/sign-in?app=jobs");

        let err = AppConfig::from_lookup(lookup(&[("SIGN_IN_URL", "/login")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SIGN_IN_URL", .. }));
    }

    #[test]
    fn auth_provider_must_be_absolute() {
        let err = AppConfig::from_lookup(lookup(&[("AUTH_PROVIDER_URL", "/sign-in")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "AUTH_PROVIDER_URL", .. }));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));

        let err = AppConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. }));
    }
}
