//! `jobboard-auth` — identity resolution and role-gated access decisions.
//!
//! This crate is intentionally decoupled from HTTP and storage: it turns a
//! session token into an [`Identity`] and decides whether a page may render.

pub mod claims;
pub mod guard;
pub mod identity;
pub mod roles;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use guard::{AccessDenied, GuardRoutes, PageOutcome, check_access, guard_page};
pub use identity::{Hs256IdentityResolver, Identity, IdentityError, IdentityResolver};
pub use roles::Role;
