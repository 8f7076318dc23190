/*
 * Responsibility
 * - Define the URL structure (which is unversioned: the surface is
 *   /clients and /staffs at the root)
 * - Which routes sit behind the auth gate is decided in app.rs
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{
    clients::{create_client, list_clients},
    health::health,
    staffs::{create_staff, delete_staff, get_staff, list_staffs, replace_staff, update_staff},
};

/// Resource routes. Every route here requires a verified access token.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/staffs", get(list_staffs).post(create_staff))
        .route(
            "/staffs/{staff_id}",
            get(get_staff)
                .put(replace_staff)
                .patch(update_staff)
                .delete(delete_staff),
        )
}

/// Routes served without credentials.
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
