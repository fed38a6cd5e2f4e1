//! Employer profile storage.
//!
//! Profiles are created and edited by employer-management flows elsewhere;
//! from here they are read-only, looked up by the owning user's id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use jobboard_core::UserId;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryEmployerProfileStore;
pub use postgres::PostgresEmployerProfileStore;

/// Persistent employer record keyed by user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerProfile {
    pub user_id: UserId,
    pub company_name: Option<String>,

    /// Nullable in storage; only `Some(true)` means subscribed.
    pub is_subscribed: Option<bool>,

    pub updated_at: DateTime<Utc>,
}

impl EmployerProfile {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            company_name: None,
            is_subscribed: None,
            updated_at: Utc::now(),
        }
    }

    pub fn with_subscription(mut self, is_subscribed: Option<bool>) -> Self {
        self.is_subscribed = is_subscribed;
        self
    }

    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Find-unique-by-key access to employer profiles.
#[async_trait::async_trait]
pub trait EmployerProfileStore: Send + Sync {
    /// `Ok(None)` when no profile exists; absence is not an error.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<EmployerProfile>, StoreError>;
}

#[async_trait::async_trait]
impl<S> EmployerProfileStore for Arc<S>
where
    S: EmployerProfileStore + ?Sized,
{
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<EmployerProfile>, StoreError> {
        (**self).find_by_user_id(user_id).await
    }
}
