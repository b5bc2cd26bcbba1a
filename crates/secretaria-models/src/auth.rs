//! Authentication request/response models.
//!
//! Login is by CPF and password against `POST /token/`; password reset is a
//! two-step request/confirm flow.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Strip punctuation from a CPF, keeping it only when exactly 11 digits
/// remain. Anything else is not a CPF and is rejected before the request.
pub fn normalize_cpf(identifier: &str) -> Option<String> {
    let digits: String = identifier
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    (digits.len() == 11).then_some(digits)
}

/// Credentials for `POST /token/`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    pub cpf: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token pair returned by the auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body for `POST /password-reset/request/`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email)]
    pub email: String,
}

/// Body for `POST /password-reset/confirm/`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct PasswordResetConfirm {
    #[validate(length(min = 1))]
    pub token: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Success/detail envelope some auth endpoints answer with.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
