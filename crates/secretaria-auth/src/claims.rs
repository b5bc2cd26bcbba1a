//! Access-token claim decoding.
//!
//! The backend issues JWT pairs whose access token carries the user's CPF
//! (`username`) and role (`cargo`). The client has no signing key and places
//! no trust in these claims: they drive UI gating only, and every action is
//! re-authorized server-side. Decoding therefore skips signature
//! verification deliberately.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Claims of the backend's access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Token expiration timestamp (Unix timestamp).
    pub exp: i64,
    /// Token issued-at timestamp (Unix timestamp).
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub jti: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    /// The login identifier (CPF digits).
    #[serde(default)]
    pub username: Option<String>,
    /// The backend group name driving UI gating.
    #[serde(default)]
    pub cargo: Option<String>,
}

impl AccessClaims {
    /// The role named by the `cargo` claim; `None` when missing or unknown,
    /// which every authorization check treats as deny-all.
    pub fn role(&self) -> Option<Role> {
        self.cargo.as_deref().and_then(Role::parse)
    }

    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.exp <= now_unix
    }
}

/// Decode an access token's payload without verifying its signature.
pub fn decode_access_claims(token: &str) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    decode::<AccessClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
}
