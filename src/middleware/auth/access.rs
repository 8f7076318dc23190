//! Access-token gate: Authorization header → AuthService → AuthCtx in extensions.
//!
//! Every protected route goes through this middleware before any handler or
//! repo code runs. A request that fails here is answered with the generic
//! denial from `AppError` and never reaches the store.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Wrap the given router with the access-token gate.
///
/// Example:
/// ```ignore
/// let protected = middleware::auth::access::apply(api::protected_routes(), state.clone());
/// let app = api::public_routes().merge(protected);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor on its own, so the
    // state is passed explicitly via from_fn_with_state
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    // Header parsing and the decode/claim checks are centralized in
    // AuthService so every protected route enforces the same policy.
    let verified = match state.auth.verify_authorization_header(header) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(
                error = %err,
                "access token verification failed"
            );
            return Err(if err.is_missing() {
                AppError::MissingCredentials
            } else {
                AppError::InvalidCredentials
            });
        }
    };

    let auth_ctx = AuthCtx::new(verified.user_id, verified.jti);

    // middleware → extractor hand-off
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}
