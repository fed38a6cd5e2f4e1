//! Identity resolution: session token -> [`Identity`].
//!
//! The identity provider owns users and their metadata. This module only
//! verifies the tokens it issues and lifts the claims into typed values.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Serialize;
use thiserror::Error;

use jobboard_core::UserId;

use crate::{Role, SessionClaims, TokenValidationError, validate_claims};

/// The authenticated user behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: UserId,

    /// `None` when the provider has no (recognised) role on record.
    pub role: Option<Role>,
}

impl Identity {
    pub fn new(user_id: UserId, role: Option<Role>) -> Self {
        Self { user_id, role }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}

impl TryFrom<SessionClaims> for Identity {
    type Error = IdentityError;

    fn try_from(claims: SessionClaims) -> Result<Self, Self::Error> {
        let role = Role::from_metadata(&claims.public_metadata);
        let user_id = UserId::new(claims.sub).map_err(|_| IdentityError::MissingSubject)?;
        Ok(Self { user_id, role })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("malformed session token: {0}")]
    Malformed(String),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    #[error("session token has no subject")]
    MissingSubject,
}

/// Resolves the current identity from a raw session token.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, IdentityError>;
}

/// HS256 resolver backed by a shared secret.
pub struct Hs256IdentityResolver {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256IdentityResolver {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time checks run in `validate_claims` against the caller's clock.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
            validation,
        }
    }
}

impl IdentityResolver for Hs256IdentityResolver {
    fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, IdentityError> {
        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.key, &self.validation)
            .map_err(|e| IdentityError::Malformed(e.to_string()))?;

        validate_claims(&data.claims, now)?;
        Identity::try_from(data.claims)
    }
}
