//! JWT access-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs carrying a [`Claims`] payload with
//! a `permissions` array. Issuer and audience are verified on every
//! decode, so a token minted for another service is rejected even when it
//! shares the signing secret.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the token holder's identity.
    pub sub: String,
    /// Capability strings granted to this token (e.g. `"post:drinks"`).
    pub permissions: Vec<String>,
    /// Issuer; must match the configured value.
    pub iss: String,
    /// Audience; must match the configured value.
    pub aud: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for revocation / audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Expected `iss` claim.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Access token lifetime in minutes (default: 60).
    pub token_expiry_mins: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_TOKEN_EXPIRY_MINS: i64 = 60;

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default       |
    /// |-------------------------|----------|---------------|
    /// | `JWT_SECRET`            | **yes**  | --            |
    /// | `JWT_ISSUER`            | no       | `encore`      |
    /// | `JWT_AUDIENCE`          | no       | `encore-api`  |
    /// | `JWT_TOKEN_EXPIRY_MINS` | no       | `60`          |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "encore".into());
        let audience = std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "encore-api".into());

        let token_expiry_mins: i64 = std::env::var("JWT_TOKEN_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_TOKEN_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            issuer,
            audience,
            token_expiry_mins,
        }
    }
}

/// Generate an HS256 access token for the given subject and permissions.
pub fn generate_access_token(
    subject: &str,
    permissions: &[&str],
    config: &AuthConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.token_expiry_mins * 60;

    let claims = Claims {
        sub: subject.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature, expiration, issuer, and audience.
pub fn validate_token(
    token: &str,
    config: &AuthConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    /// Helper to build a test config with a known secret.
    fn test_config() -> AuthConfig {
        AuthConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            issuer: "encore".to_string(),
            audience: "encore-api".to_string(),
            token_expiry_mins: 60,
        }
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config();
        let token = generate_access_token("barista", &["get:drinks-detail"], &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, "barista");
        assert_eq!(claims.permissions, vec!["get:drinks-detail"]);
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "barista".to_string(),
            permissions: vec![],
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            exp: now - 300, // expired 5 minutes ago (well past leeway)
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = validate_token(&token, &config);
        assert!(result.is_err(), "expired token must fail validation");
    }

    #[test]
    fn test_wrong_issuer_fails() {
        let config = test_config();
        let mut other = test_config();
        other.issuer = "someone-else".to_string();

        let token = generate_access_token("barista", &[], &other)
            .expect("token generation should succeed");

        let err = validate_token(&token, &config).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidIssuer));
    }

    #[test]
    fn test_wrong_audience_fails() {
        let config = test_config();
        let mut other = test_config();
        other.audience = "another-api".to_string();

        let token = generate_access_token("barista", &[], &other)
            .expect("token generation should succeed");

        let err = validate_token(&token, &config).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidAudience));
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = AuthConfig {
            secret: "secret-alpha".to_string(),
            ..test_config()
        };
        let config_b = AuthConfig {
            secret: "secret-bravo".to_string(),
            ..test_config()
        };

        let token = generate_access_token("barista", &[], &config_a)
            .expect("token generation should succeed");

        let result = validate_token(&token, &config_b);
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }
}
