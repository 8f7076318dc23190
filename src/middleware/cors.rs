//! CORS policy for browser clients.
//!
//! Enforced by browsers only; server-to-server callers are unaffected.
//! Applied at the Router level in app.rs, never inside handlers.
//!
//! Policy:
//! - Development: permissive (Allow-Origin: *), no credentials.
//! - Production: exact-match allowlist from CORS_ALLOWED_ORIGINS, no
//!   credentials. An empty allowlist allows nothing, which beats
//!   accidentally allowing everything.

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;

/// Build the CORS layer for this deployment.
///
/// Never combine a wildcard origin with `allow_credentials(true)`.
pub fn layer(config: &Config) -> CorsLayer {
    let allow_origin = if config.app_env.is_production() {
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        AllowOrigin::list(allowed)
    } else {
        AllowOrigin::any()
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(std::time::Duration::from_secs(60 * 10))
}
