/**
 * Bearer Tokens
 *
 * Signed JWTs carrying only the account id plus issue and expiry times.
 * The signing secret and token lifetime are process-wide configuration
 * (`JWT_KEY`, `JWT_EXPIRE`), never chosen per call.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::AccountError;

/// Identity payload a token is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// Account id
    pub id: i64,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub id: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token signing and verification capability
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for `claim`
    fn issue(&self, claim: &IdentityClaim) -> Result<String, AccountError>;

    /// Check signature and expiry, returning the embedded claim
    fn verify(&self, token: &str) -> Result<IdentityClaim, AccountError>;
}

/// HS256 [`TokenIssuer`]
#[derive(Clone)]
pub struct JwtIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime_secs: i64,
}

impl JwtIssuer {
    /// Create an issuer signing with `secret`; tokens live `lifetime_secs`
    pub fn new(secret: &[u8], lifetime_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            lifetime_secs,
        }
    }
}

impl std::fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIssuer")
            .field("lifetime_secs", &self.lifetime_secs)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, claim: &IdentityClaim) -> Result<String, AccountError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: claim.id,
            iat: now,
            exp: now + self.lifetime_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            AccountError::internal("token signing failed")
        })
    }

    fn verify(&self, token: &str) -> Result<IdentityClaim, AccountError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            AccountError::unauthorized("Invalid or expired token")
        })?;

        Ok(IdentityClaim { id: data.claims.id })
    }
}
