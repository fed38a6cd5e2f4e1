//! Role-gated page guard.
//!
//! A guarded page declares the role it requires; the guard runs before any
//! page content is produced and either renders or redirects.

use thiserror::Error;

use crate::{Identity, Role};

/// Result of evaluating a guarded page, interpreted by the hosting router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome<B> {
    Render(B),
    RedirectTo(String),
}

/// Redirect targets used on denial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardRoutes {
    pub sign_in: String,
    pub unauthorized: String,
}

impl Default for GuardRoutes {
    fn default() -> Self {
        Self {
            sign_in: "/sign-in".to_string(),
            unauthorized: "/unauthorized".to_string(),
        }
    }
}

impl GuardRoutes {
    pub fn redirect_for(&self, denied: &AccessDenied) -> &str {
        match denied {
            AccessDenied::Unauthenticated => &self.sign_in,
            AccessDenied::WrongRole { .. } => &self.unauthorized,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    #[error("no authenticated session")]
    Unauthenticated,

    #[error("role '{required}' required")]
    WrongRole { required: Role, actual: Option<Role> },
}

/// Pure access check: returns the identity back when it carries `required`.
pub fn check_access(required: Role, identity: Option<&Identity>) -> Result<&Identity, AccessDenied> {
    let identity = identity.ok_or(AccessDenied::Unauthenticated)?;
    if identity.has_role(required) {
        Ok(identity)
    } else {
        Err(AccessDenied::WrongRole {
            required,
            actual: identity.role,
        })
    }
}

/// Evaluate a guarded page.
///
/// `render` is only invoked once access has been granted.
pub fn guard_page<B, F>(
    required: Role,
    identity: Option<&Identity>,
    routes: &GuardRoutes,
    render: F,
) -> PageOutcome<B>
where
    F: FnOnce(&Identity) -> B,
{
    match check_access(required, identity) {
        Ok(identity) => PageOutcome::Render(render(identity)),
        Err(denied) => {
            tracing::info!(required = %required, reason = %denied, "page access denied");
            PageOutcome::RedirectTo(routes.redirect_for(&denied).to_string())
        }
    }
}
