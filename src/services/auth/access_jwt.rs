use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

// Errors returned by Authorization-header parsing + access-token verification.
#[derive(Debug)]
pub enum AccessJwtError {
    MissingAuthorization,
    MalformedAuthorization,
    Jwt(jsonwebtoken::errors::Error),
    WrongTokenType,
    InvalidUserId,
}

impl AccessJwtError {
    /// True only for the "no credentials presented at all" case.
    /// Everything else is some form of invalid credential.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingAuthorization)
    }
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAuthorization => write!(f, "authorization header is missing or empty"),
            Self::MalformedAuthorization => {
                write!(f, "authorization header is not of the form '<scheme> <token>'")
            }
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::WrongTokenType => write!(f, "token_type is not 'access'"),
            Self::InvalidUserId => write!(f, "invalid 'user_id' claim"),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Access token (JWT) claims, as the auth service issues them.
///
/// NOTE:
/// - `user_id` is an opaque subject id; issuers out there encode it as either
///   a JSON number or a string, so we keep it as Value and normalize later.
/// - `exp` presence/validity is enforced by `jsonwebtoken::Validation`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub token_type: String,
    pub exp: u64,

    #[serde(default)]
    pub jti: Option<String>,
    #[serde(default)]
    pub user_id: serde_json::Value,
}

/// Verified, application-facing shape of a decoded access token.
///
/// - `user_id` is normalized to a string here; the resource handlers only use
///   it for request correlation, never to look anything up.
#[derive(Debug, Clone)]
pub struct VerifiedAccessToken {
    pub user_id: String,
    pub jti: Option<String>,
}

fn user_id_as_string(user_id: &serde_json::Value) -> Option<String> {
    match user_id {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// HS256 access-token verifier.
///
/// - Holds the pre-shared symmetric secret the token issuer signs with;
///   built once at startup and never mutated afterwards.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(shared_secret: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(shared_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens from the auth service carry no `aud`; only `exp` is required.
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    /// The gate every protected endpoint goes through.
    ///
    /// Takes the raw Authorization header value (or its absence) and either
    /// returns the authenticated principal or one of:
    /// - `MissingAuthorization`: header absent or empty
    /// - `MalformedAuthorization`: not exactly `<scheme> <token>`
    /// - `Jwt(_)` / `WrongTokenType` / `InvalidUserId`: decode or claim failure
    ///
    /// The scheme word itself is not checked; the issuer's clients have never
    /// agreed on one, and the token segment is what gets verified.
    pub fn verify_authorization_header(
        &self,
        header: Option<&str>,
    ) -> Result<VerifiedAccessToken, AccessJwtError> {
        let header = match header {
            Some(h) if !h.trim().is_empty() => h,
            _ => return Err(AccessJwtError::MissingAuthorization),
        };

        // Split-and-check instead of indexing: a header with no second
        // segment is malformed input, not a server fault.
        let mut segments = header.split_whitespace();
        let token = match (segments.next(), segments.next(), segments.next()) {
            (Some(_scheme), Some(token), None) => token,
            _ => return Err(AccessJwtError::MalformedAuthorization),
        };

        self.verify_strict(token)
    }

    // Verify and decode a JWT access token (signature + exp).
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify + semantic claim validation.
    ///
    /// `jsonwebtoken::Validation` already checks:
    /// - signature
    /// - `exp` (presence and freshness, minus leeway)
    ///
    /// This method additionally checks:
    /// - `token_type` equals the literal `"access"` (a refresh token presented
    ///   here is a wrong token class, not an expired one)
    /// - `user_id` is a usable subject id (string or number)
    pub fn verify_strict(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
        let claims = self.verify(token)?;

        if claims.token_type != "access" {
            return Err(AccessJwtError::WrongTokenType);
        }

        let user_id = user_id_as_string(&claims.user_id).ok_or(AccessJwtError::InvalidUserId)?;

        Ok(VerifiedAccessToken {
            user_id,
            jti: claims.jti,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};
    use serde::Serialize;

    const SECRET: &str = "test-shared-secret";

    #[derive(Serialize)]
    struct TestClaims {
        token_type: &'static str,
        exp: i64,
        jti: &'static str,
        user_id: serde_json::Value,
    }

    fn sign(claims: &TestClaims, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn access_token(exp_offset_seconds: i64) -> String {
        sign(
            &TestClaims {
                token_type: "access",
                exp: chrono::Utc::now().timestamp() + exp_offset_seconds,
                jti: "b1946ac9",
                user_id: serde_json::json!(3),
            },
            SECRET,
        )
    }

    fn service() -> AuthService {
        AuthService::new(SECRET, 0)
    }

    #[test]
    fn missing_header_is_rejected() {
        let err = service().verify_authorization_header(None).unwrap_err();
        assert!(matches!(err, AccessJwtError::MissingAuthorization));
        assert!(err.is_missing());
    }

    #[test]
    fn empty_header_is_rejected_as_missing() {
        let err = service().verify_authorization_header(Some("   ")).unwrap_err();
        assert!(matches!(err, AccessJwtError::MissingAuthorization));
    }

    #[test]
    fn header_without_token_segment_is_malformed() {
        let err = service().verify_authorization_header(Some("Bearer")).unwrap_err();
        assert!(matches!(err, AccessJwtError::MalformedAuthorization));
        assert!(!err.is_missing());
    }

    #[test]
    fn header_with_extra_segments_is_malformed() {
        let token = access_token(3600);
        let header = format!("Bearer {token} trailing");
        let err = service()
            .verify_authorization_header(Some(&header))
            .unwrap_err();
        assert!(matches!(err, AccessJwtError::MalformedAuthorization));
    }

    #[test]
    fn valid_token_passes_regardless_of_scheme_word() {
        let token = access_token(3600);

        for scheme in ["Bearer", "JWT", "Token"] {
            let header = format!("{scheme} {token}");
            let verified = service()
                .verify_authorization_header(Some(&header))
                .unwrap();
            assert_eq!(verified.user_id, "3");
            assert_eq!(verified.jti.as_deref(), Some("b1946ac9"));
        }
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = access_token(-3600);
        let header = format!("Bearer {token}");
        let err = service()
            .verify_authorization_header(Some(&header))
            .unwrap_err();
        assert!(matches!(err, AccessJwtError::Jwt(_)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = sign(
            &TestClaims {
                token_type: "access",
                exp: chrono::Utc::now().timestamp() + 3600,
                jti: "b1946ac9",
                user_id: serde_json::json!(3),
            },
            "some-other-secret",
        );
        let header = format!("Bearer {token}");
        let err = service()
            .verify_authorization_header(Some(&header))
            .unwrap_err();
        assert!(matches!(err, AccessJwtError::Jwt(_)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let err = service()
            .verify_authorization_header(Some("Bearer not-a-jwt"))
            .unwrap_err();
        assert!(matches!(err, AccessJwtError::Jwt(_)));
    }

    #[test]
    fn refresh_token_is_wrong_token_type() {
        let token = sign(
            &TestClaims {
                token_type: "refresh",
                exp: chrono::Utc::now().timestamp() + 3600,
                jti: "b1946ac9",
                user_id: serde_json::json!(3),
            },
            SECRET,
        );
        let header = format!("Bearer {token}");
        let err = service()
            .verify_authorization_header(Some(&header))
            .unwrap_err();
        assert!(matches!(err, AccessJwtError::WrongTokenType));
    }

    #[test]
    fn string_user_id_is_accepted_as_is() {
        let token = sign(
            &TestClaims {
                token_type: "access",
                exp: chrono::Utc::now().timestamp() + 3600,
                jti: "b1946ac9",
                user_id: serde_json::json!("8f2c1a"),
            },
            SECRET,
        );
        let header = format!("Bearer {token}");
        let verified = service()
            .verify_authorization_header(Some(&header))
            .unwrap();
        assert_eq!(verified.user_id, "8f2c1a");
    }

    #[test]
    fn absent_user_id_is_rejected() {
        #[derive(Serialize)]
        struct NoSubject {
            token_type: &'static str,
            exp: i64,
        }
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &NoSubject {
                token_type: "access",
                exp: chrono::Utc::now().timestamp() + 3600,
            },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        let header = format!("Bearer {token}");
        let err = service()
            .verify_authorization_header(Some(&header))
            .unwrap_err();
        assert!(matches!(err, AccessJwtError::InvalidUserId));
    }

    #[test]
    fn leeway_tolerates_a_just_expired_token() {
        let token = access_token(-30);
        let header = format!("Bearer {token}");

        // Strict clock: rejected.
        assert!(service().verify_authorization_header(Some(&header)).is_err());

        // With leeway: accepted.
        let lenient = AuthService::new(SECRET, 120);
        assert!(lenient.verify_authorization_header(Some(&header)).is_ok());
    }
}
