//! Server-rendered HTML pages (askama templates under `templates/`).

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use jobboard_auth::{Identity, PageOutcome, Role};

/// One role-tagged sign-in link on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInLink {
    pub role: &'static str,
    pub label: &'static str,
    pub href: String,
}

impl SignInLink {
    pub fn for_role(sign_in: &str, role: Role) -> Self {
        Self {
            role: role.as_str(),
            label: role.label(),
            href: with_role_param(sign_in, role),
        }
    }
}

/// Append `role=<role>` to a URL that may already carry a query.
pub fn with_role_param(url: &str, role: Role) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}role={}", role.as_str())
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub links: Vec<SignInLink>,
}

impl HomeTemplate {
    pub fn new(sign_in: &str) -> Self {
        Self {
            links: Role::ALL
                .into_iter()
                .map(|role| SignInLink::for_role(sign_in, role))
                .collect(),
        }
    }
}

/// Shown at `/sign-in` when no identity provider is configured to hand off to.
#[derive(Template)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate {
    pub role_label: Option<&'static str>,
}

impl SignInTemplate {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            role_label: role.as_ref().map(Role::label),
        }
    }
}

#[derive(Template)]
#[template(path = "onboarding.html")]
pub struct OnboardingTemplate {
    pub role: &'static str,
    pub role_label: &'static str,
    pub user_id: String,
}

impl OnboardingTemplate {
    pub fn new(role: Role, identity: &Identity) -> Self {
        Self {
            role: role.as_str(),
            role_label: role.label(),
            user_id: identity.user_id.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "unauthorized.html")]
pub struct UnauthorizedTemplate {
    pub home_href: &'static str,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

/// Render a template with the given status.
pub fn render_page<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Turn a guard outcome into an HTTP response.
///
/// Denials become `307 Temporary Redirect`.
pub fn outcome_to_response<T: Template>(outcome: PageOutcome<T>) -> Response {
    match outcome {
        PageOutcome::Render(template) => render_page(StatusCode::OK, &template),
        PageOutcome::RedirectTo(location) => Redirect::temporary(&location).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::UserId;

    #[test]
    fn sign_in_links_are_role_tagged() {
        let links = HomeTemplate::new("/sign-in").links;
        let hrefs: Vec<_> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/sign-in?role=employer", "/sign-in?role=jobseeker"]);
    }

    #[test]
    fn sign_in_links_extend_existing_queries() {
        let link = SignInLink::for_role("https://auth.example.com/sign-in?app=jobs", Role::Employer);
        assert_eq!(link.href, "https://auth.example.com/sign-in?app=jobs&role=employer");
    }

    #[test]
    fn sign_in_page_names_the_requested_role() {
        let html = SignInTemplate::new(Some(Role::Jobseeker)).render().unwrap();
        assert!(html.contains("Job seeker"));
        assert!(html.contains("No identity provider"));

        let html = SignInTemplate::new(None).render().unwrap();
        assert!(!html.contains("Job seeker"));
    }

    #[test]
    fn onboarding_page_escapes_the_user_id() {
        let identity = Identity::new(UserId::new("<script>").unwrap(), Some(Role::Employer));
        let html = OnboardingTemplate::new(Role::Employer, &identity).render().unwrap();
        assert!(html.contains("Employer onboarding"));
        assert!(html.contains("id=\"onboarding-form\""));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn redirect_outcomes_are_temporary() {
        let response = outcome_to_response::<UnauthorizedTemplate>(PageOutcome::RedirectTo("/sign-in".to_string()));
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()["location"], "/sign-in");
    }
}
