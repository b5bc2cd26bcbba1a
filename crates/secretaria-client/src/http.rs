//! The authenticated HTTP transport.
//!
//! One [`ApiClient`] per session: the session is injected at construction
//! and its bearer token rides on every request. Responses are mapped onto
//! the [`ApiError`] taxonomy here so screens never see transport details.

use std::time::Instant;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use secretaria_auth::{Role, Session};
use secretaria_config::ApiConfig;
use secretaria_core::{ApiError, ListEnvelope, ValidationFailure};

/// HTTP client bound to one authenticated session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url_trimmed().to_string(),
            session,
        }
    }

    /// The session's role, consulted by every authorization pre-check.
    pub fn role(&self) -> Option<Role> {
        self.session.role
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{}/", self.base_url, path)
    }

    fn record_url(&self, path: &str, id: impl std::fmt::Display) -> String {
        format!("{}/{}/{}/", self.base_url, path, id)
    }

    /// GET a collection, normalizing either list-response shape.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Vec<T>, ApiError> {
        let mut request = self
            .http
            .get(self.collection_url(path))
            .bearer_auth(&self.session.access);
        if !query.is_empty() {
            request = request.query(query);
        }
        let body = self.execute(Method::GET, path, request).await?;
        let envelope: ListEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| ApiError::decode(e.to_string()))?;
        Ok(envelope.into_records())
    }

    /// POST a new record to a collection.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.collection_url(path))
            .bearer_auth(&self.session.access)
            .json(body);
        self.execute(Method::POST, path, request).await.map(drop)
    }

    /// PUT a full record replacement.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        id: impl std::fmt::Display,
        body: &B,
    ) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.record_url(path, id))
            .bearer_auth(&self.session.access)
            .json(body);
        self.execute(Method::PUT, path, request).await.map(drop)
    }

    /// PATCH a partial record update.
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        id: impl std::fmt::Display,
        body: &B,
    ) -> Result<(), ApiError> {
        let request = self
            .http
            .patch(self.record_url(path, id))
            .bearer_auth(&self.session.access)
            .json(body);
        self.execute(Method::PATCH, path, request).await.map(drop)
    }

    /// DELETE a record.
    pub async fn delete(&self, path: &str, id: impl std::fmt::Display) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(self.record_url(path, id))
            .bearer_auth(&self.session.access);
        self.execute(Method::DELETE, path, request).await.map(drop)
    }

    /// POST to a record action sub-path (e.g. `emprestimos/{id}/devolver/`).
    pub async fn post_action(
        &self,
        path: &str,
        id: impl std::fmt::Display,
        action: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{}/{}/{}/", self.base_url, path, id, action);
        let request = self
            .http
            .post(url)
            .bearer_auth(&self.session.access)
            .json(&serde_json::json!({}));
        self.execute(Method::POST, path, request).await.map(drop)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<String, ApiError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let start = Instant::now();
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "Outgoing request"
        );

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    error = %e,
                    "Request failed before a response arrived"
                );
                return Err(ApiError::network(e.to_string()));
            }
        };

        let status = response.status();
        let latency = start.elapsed();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        match status.as_u16() {
            200..=299 => {
                info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Request completed"
                );
            }
            400..=499 => {
                warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Request rejected"
                );
            }
            _ => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Backend error"
                );
            }
        }

        map_status(status, body)
    }
}

/// Map a response onto the error taxonomy; success passes the body through.
fn map_status(status: StatusCode, body: String) -> Result<String, ApiError> {
    if status.is_success() {
        return Ok(body);
    }
    match status {
        StatusCode::BAD_REQUEST => Err(ApiError::Validation(ValidationFailure::from_body(&body))),
        StatusCode::FORBIDDEN => Err(ApiError::denied(detail_from_body(&body))),
        _ => Err(ApiError::Http {
            status: status.as_u16(),
            detail: detail_from_body(&body),
        }),
    }
}

/// Pull the `detail` message out of an error body, falling back to the raw
/// text so nothing the backend said is lost.
fn detail_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .or_else(|| v.get("error"))
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "no detail provided".to_string()
            } else {
                body.trim().to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_maps_to_authorization_denied() {
        let err = map_status(
            StatusCode::FORBIDDEN,
            r#"{"detail": "Você não tem permissão para criar empréstimos."}"#.to_string(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::denied("Você não tem permissão para criar empréstimos.")
        );
    }

    #[test]
    fn bad_request_carries_field_errors_verbatim() {
        let err = map_status(
            StatusCode::BAD_REQUEST,
            r#"{"exemplares_disponiveis": ["Não há exemplares disponíveis."]}"#.to_string(),
        )
        .unwrap_err();
        let failure = err.validation().expect("validation error");
        assert_eq!(
            failure.field_errors["exemplares_disponiveis"],
            vec!["Não há exemplares disponíveis.".to_string()]
        );
    }

    #[test]
    fn other_statuses_map_to_http_errors() {
        let err = map_status(StatusCode::UNAUTHORIZED, String::new()).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 401,
                detail: "no detail provided".to_string()
            }
        );
    }

    #[test]
    fn success_passes_the_body_through() {
        let body = map_status(StatusCode::OK, "[]".to_string()).unwrap();
        assert_eq!(body, "[]");
    }
}
