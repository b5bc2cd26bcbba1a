//! Client-side error taxonomy.
//!
//! Every failure a screen can observe is one of the variants below. Network
//! and HTTP errors are recoverable by re-invoking the operation; validation
//! errors are local to the form that produced them and never tear down an
//! already-loaded list.

use std::collections::BTreeMap;
use std::fmt;

/// A field-keyed validation failure.
///
/// Mirrors the backend's 400 bodies, which map each offending field to a
/// list of messages (`{"horario_fim": ["..."], ...}`) and sometimes carry a
/// single `detail` string instead. Locally produced validation errors use
/// the same shape so callers render both identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Per-field messages, keyed by wire field name.
    pub field_errors: BTreeMap<String, Vec<String>>,
    /// Non-field message, when the backend sent a bare `detail`.
    pub detail: Option<String>,
}

impl ValidationFailure {
    /// Single-field failure.
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut field_errors = BTreeMap::new();
        field_errors.insert(name.into(), vec![message.into()]);
        Self {
            field_errors,
            detail: None,
        }
    }

    /// Non-field failure.
    pub fn detail(message: impl Into<String>) -> Self {
        Self {
            field_errors: BTreeMap::new(),
            detail: Some(message.into()),
        }
    }

    /// Parse a backend 400 body.
    ///
    /// Accepts `{"field": ["msg", ...]}`, `{"field": "msg"}` and
    /// `{"detail": "msg"}`; anything unparseable is preserved verbatim as
    /// the detail message so nothing the backend said is dropped.
    pub fn from_body(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return Self::detail(body.trim());
        };
        // Non-field failures arrive as a bare list of messages.
        if let Some(items) = value.as_array() {
            let messages: Vec<String> = items
                .iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            return Self::detail(messages.join("; "));
        }
        let Some(map) = value.as_object() else {
            return Self::detail(body.trim());
        };

        let mut failure = Self::default();
        for (key, val) in map {
            let messages: Vec<String> = match val {
                serde_json::Value::String(s) => vec![s.clone()],
                serde_json::Value::Array(items) => items
                    .iter()
                    .map(|v| match v {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
                other => vec![other.to_string()],
            };
            if key == "detail" || key == "error" {
                failure.detail = messages.into_iter().next();
            } else {
                failure.field_errors.insert(key.clone(), messages);
            }
        }
        failure
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty() && self.detail.is_none()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(detail) = &self.detail {
            write!(f, "{detail}")?;
            if !self.field_errors.is_empty() {
                write!(f, "; ")?;
            }
        }
        let mut first = true;
        for (field, messages) in &self.field_errors {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

impl From<validator::ValidationErrors> for ValidationFailure {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut failure = Self::default();
        for (field, kinds) in errors.field_errors() {
            for error in kinds.iter() {
                // Struct-level checks land under "__all__"; their code names
                // the wire field they belong to.
                let key = if field == "__all__" {
                    error.code.to_string()
                } else {
                    field.to_string()
                };
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", error.code));
                failure.field_errors.entry(key).or_default().push(message);
            }
        }
        failure
    }
}

/// Errors surfaced at the screen boundary.
///
/// All variants are owned data so screen state can hold a clone of the last
/// error without tying itself to a transport error's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No session is available; the operation short-circuits before any
    /// network call.
    AuthenticationMissing,
    /// The local rule table or the backend (403) denied the action.
    AuthorizationDenied { detail: String },
    /// Local DTO validation or a backend 400 with a field-keyed body.
    Validation(ValidationFailure),
    /// The request never produced an HTTP response.
    Network { detail: String },
    /// Any other non-success status.
    Http { status: u16, detail: String },
    /// The response arrived but its body was not what the client expected.
    Decode { detail: String },
}

impl ApiError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode {
            detail: detail.into(),
        }
    }

    pub fn denied(detail: impl Into<String>) -> Self {
        Self::AuthorizationDenied {
            detail: detail.into(),
        }
    }

    /// Whether re-invoking the failed operation is a sensible recovery.
    ///
    /// Authorization and validation failures will fail the same way again
    /// until something else changes, so they are not retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Http { .. })
    }

    /// Field-keyed messages, when this is a validation error.
    pub fn validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Validation(failure) => Some(failure),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthenticationMissing => {
                write!(f, "not authenticated: no session available")
            }
            Self::AuthorizationDenied { detail } => {
                write!(f, "permission denied: {detail}")
            }
            Self::Validation(failure) => write!(f, "validation failed: {failure}"),
            Self::Network { detail } => write!(f, "network error: {detail}"),
            Self::Http { status, detail } => write!(f, "http {status}: {detail}"),
            Self::Decode { detail } => write!(f, "unexpected response: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.into())
    }
}
