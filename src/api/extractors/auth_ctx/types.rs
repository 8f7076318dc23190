/*
 * Responsibility
 * - The "authenticated context" type as handlers see it
 * - The middleware verifies the token and stores this in request extensions;
 *   handlers receive only this type, never the raw header
 *
 * Notes
 * - Header parsing and JWT verification live in middleware/services
 * - This is a contract type: keep it small and stable
 */

/// Context attached to an authenticated request.
///
/// - `user_id` is the token's opaque subject id, normalized to a string.
///   The record resources never resolve it; it exists for log correlation.
/// - `jti` is the token id, likewise correlation-only.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: String,
    pub jti: Option<String>,
}

impl AuthCtx {
    pub fn new(user_id: String, jti: Option<String>) -> Self {
        Self { user_id, jti }
    }
}
