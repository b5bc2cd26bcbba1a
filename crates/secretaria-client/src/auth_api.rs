//! Unauthenticated auth endpoints: login and password reset.

use secretaria_auth::Session;
use secretaria_config::ApiConfig;
use secretaria_core::{ApiError, ValidationFailure};
use secretaria_models::{
    LoginRequest, MessageResponse, PasswordResetConfirm, PasswordResetRequest, TokenPair,
    normalize_cpf,
};
use tracing::info;

/// Client for the endpoints that work without a bearer token.
#[derive(Debug, Clone)]
pub struct AuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl AuthApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url_trimmed().to_string(),
        }
    }

    /// Exchange CPF + password for a session via `POST /token/`.
    ///
    /// The identifier is normalized to its 11 CPF digits first; anything
    /// else is rejected locally, matching the login form.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<Session, ApiError> {
        let Some(cpf) = normalize_cpf(identifier) else {
            return Err(ApiError::Validation(ValidationFailure::field(
                "cpf",
                "inform the 11 digits of the CPF",
            )));
        };
        if password.is_empty() {
            return Err(ApiError::Validation(ValidationFailure::field(
                "password",
                "password is required",
            )));
        }

        let body = LoginRequest {
            cpf,
            password: password.to_string(),
        };
        let response = self
            .http
            .post(format!("{}/token/", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(match status.as_u16() {
                400 => ApiError::Validation(ValidationFailure::from_body(&text)),
                _ => ApiError::Http {
                    status: status.as_u16(),
                    detail: detail_or(&text, "invalid CPF or password"),
                },
            });
        }

        let tokens: TokenPair =
            serde_json::from_str(&text).map_err(|e| ApiError::decode(e.to_string()))?;
        let session = Session::from_tokens(tokens.access, tokens.refresh)
            .map_err(|e| ApiError::decode(e.to_string()))?;
        info!(role = ?session.role, "Login succeeded");
        Ok(session)
    }

    /// `POST /password-reset/request/`. Always answers with a neutral
    /// message, whether or not the email matched an account.
    pub async fn request_password_reset(&self, email: &str) -> Result<String, ApiError> {
        let body = PasswordResetRequest {
            email: email.to_string(),
        };
        validator::Validate::validate(&body)?;
        self.post_reset("password-reset/request", &body).await
    }

    /// `POST /password-reset/confirm/`.
    pub async fn confirm_password_reset(
        &self,
        token: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let body = PasswordResetConfirm {
            token: token.to_string(),
            password: password.to_string(),
        };
        validator::Validate::validate(&body)?;
        self.post_reset("password-reset/confirm", &body).await
    }

    async fn post_reset<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let response = self
            .http
            .post(format!("{}/{}/", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(match status.as_u16() {
                400 => ApiError::Validation(ValidationFailure::from_body(&text)),
                _ => ApiError::Http {
                    status: status.as_u16(),
                    detail: detail_or(&text, "password reset failed"),
                },
            });
        }

        let message: MessageResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::decode(e.to_string()))?;
        Ok(message
            .success
            .or(message.detail)
            .unwrap_or_else(|| "ok".to_string()))
    }
}

fn detail_or(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .or_else(|| v.get("error"))
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string())
}
