//! Authentication context forwarded by the upstream reverse proxy.
//!
//! The backend never authenticates anyone itself. It trusts the proxy to
//! strip and re-inject these headers and only reports what it received.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::headers::header_or;

pub const REMOTE_USER_HEADER: &str = "x-remote-user";
pub const AUTH_TYPE_HEADER: &str = "x-auth-type";
pub const AUTH_TIME_HEADER: &str = "x-authenticated-time";

pub const UNKNOWN: &str = "unknown";
pub const NO_AUTH: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub remote_user: String,
    pub auth_type: String,
    pub auth_time: String,
}

impl AuthContext {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            remote_user: header_or(headers, REMOTE_USER_HEADER, UNKNOWN),
            auth_type: header_or(headers, AUTH_TYPE_HEADER, NO_AUTH),
            auth_time: header_or(headers, AUTH_TIME_HEADER, UNKNOWN),
        }
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn defaults_without_proxy_headers() {
        let context = AuthContext::from_headers(&HeaderMap::new());
        assert_eq!(context.remote_user, "unknown");
        assert_eq!(context.auth_type, "none");
        assert_eq!(context.auth_time, "unknown");
    }

    #[test]
    fn reads_all_three_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Remote-User", HeaderValue::from_static("bob"));
        headers.insert("X-Auth-Type", HeaderValue::from_static("basic"));
        headers.insert(
            "X-Authenticated-Time",
            HeaderValue::from_static("2024-01-01T00:00:00Z"),
        );

        assert_eq!(
            AuthContext::from_headers(&headers),
            AuthContext {
                remote_user: "bob".to_string(),
                auth_type: "basic".to_string(),
                auth_time: "2024-01-01T00:00:00Z".to_string(),
            }
        );
    }
}
