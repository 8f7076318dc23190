//! Shared test utilities for the API test suites.

// Helpers are used across different test files, but each test binary is
// compiled independently, so some look unused from any single one.
#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use tower::ServiceExt;

use records_api::config::{AppEnv, Config};

/// The shared HS256 secret both the tests' token mint and the app config use.
pub const SECRET: &str = "test-shared-secret";

pub fn test_config(database_url: &str) -> Config {
    Config {
        addr: "0.0.0.0:0".parse().unwrap(),
        database_url: database_url.to_string(),
        app_env: AppEnv::Development,
        cors_allowed_origins: Vec::new(),
        auth_service_secret_key: SECRET.to_string(),
        auth_leeway_seconds: 0,
    }
}

#[derive(Serialize)]
struct MintedClaims {
    token_type: String,
    exp: i64,
    jti: &'static str,
    user_id: i64,
}

/// Mint a token the way the external auth service would.
pub fn mint_token(token_type: &str, exp_offset_seconds: i64) -> String {
    let claims = MintedClaims {
        token_type: token_type.to_string(),
        exp: chrono::Utc::now().timestamp() + exp_offset_seconds,
        jti: "f47ac10b",
        user_id: 3,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

/// A fresh, unexpired access token.
pub fn access_token() -> String {
    mint_token("access", 3600)
}

/// Send one request through the router and return status + parsed JSON body
/// (`Value::Null` for empty bodies such as 204).
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
