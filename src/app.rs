/*
 * Responsibility
 * - Load Config → build dependencies → assemble Router
 * - Apply middleware (CORS / http infra / auth gate)
 * - Start serving via axum::serve()
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, services::auth::build_auth_service, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,records_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get lost
        // (stderr can be hidden depending on how the process is launched).
        tracing::error!(?info, "panic");

        // In development, fail fast. In production, keep the server running
        // and leave the default behavior (stderr).
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&db).await?;

    // Process-level services: the token verifier holds the shared secret,
    // built once here and immutable afterwards.
    let auth = build_auth_service(config);

    Ok(AppState::new(db, auth))
}

/// Assemble the full router: resource routes behind the auth gate,
/// /health outside it, CORS + http infra on everything.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let protected = middleware::auth::access::apply(api::protected_routes(), state.clone());

    let router = api::public_routes()
        .merge(protected)
        .with_state(state)
        .layer(middleware::cors::layer(config));

    middleware::http::apply(router)
}
