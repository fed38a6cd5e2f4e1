use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use jobboard_auth::IdentityResolver;

use crate::context::CurrentIdentity;

/// Cookie the identity provider stores the session token in.
pub const SESSION_COOKIE: &str = "__session";

#[derive(Clone)]
pub struct AuthState {
    pub resolver: Arc<dyn IdentityResolver>,
}

/// Resolve the current identity and attach it to the request.
///
/// Never rejects: missing or invalid tokens simply leave the request
/// anonymous, and guarded pages decide what that means.
pub async fn identity_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let identity = extract_session_token(req.headers()).and_then(|token| {
        state
            .resolver
            .resolve(token, Utc::now())
            .map_err(|e| tracing::debug!(error = %e, "ignoring unusable session token"))
            .ok()
    });

    req.extensions_mut().insert(CurrentIdentity::new(identity));
    next.run(req).await
}

/// Bearer header first, then the session cookie.
pub fn extract_session_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .filter(|t| !t.is_empty())
    {
        return Some(token);
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|t| !t.is_empty())
}

/// Token from `Authorization: <scheme> <token>`; the scheme is case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim_start().split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(header::COOKIE, HeaderValue::from_static("__session=xyz"));
        assert_eq!(extract_session_token(&headers), Some("abc"));
    }

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        for value in ["bearer abc", "BEARER abc", "BeArEr   abc "] {
            let mut headers = HeaderMap::new();
            headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
            assert_eq!(extract_session_token(&headers), Some("abc"), "{value}");
        }
    }

    #[test]
    fn reads_session_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; __session=tok.en.value; other=1"),
        );
        assert_eq!(extract_session_token(&headers), Some("tok.en.value"));
    }

    #[test]
    fn missing_or_blank_tokens_are_none() {
        assert_eq!(extract_session_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        headers.insert(header::COOKIE, HeaderValue::from_static("__session="));
        assert_eq!(extract_session_token(&headers), None);
    }
}
