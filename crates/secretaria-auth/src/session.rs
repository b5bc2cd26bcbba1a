//! The session context object and its on-disk store.
//!
//! The session (token pair plus the decoded role) is built once at login and
//! passed explicitly into the API client and every screen controller —
//! business logic never reads ambient storage. The store persists it across
//! runs and removes it on explicit logout.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::claims::decode_access_claims;
use crate::roles::Role;

/// The authenticated session handed to the API client and screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access: String,
    pub refresh: String,
    /// Decoded from the access token's `cargo` claim; `None` when the claim
    /// is missing or unknown, which denies every gated action.
    pub role: Option<Role>,
    /// The login identifier (CPF digits) from the token.
    pub username: Option<String>,
}

impl Session {
    /// Build a session from a freshly issued token pair.
    ///
    /// Fails only when the access token is not a decodable JWT; an unknown
    /// role is not an error, it just fails closed.
    pub fn from_tokens(access: String, refresh: String) -> Result<Self, SessionError> {
        let claims = decode_access_claims(&access)
            .map_err(|e| SessionError::InvalidToken(e.to_string()))?;
        Ok(Self {
            role: claims.role(),
            username: claims.username.clone(),
            access,
            refresh,
        })
    }

    /// Whether the access token's expiry has passed.
    ///
    /// There is no refresh loop: an expired session is treated as logged
    /// out and the user is sent back to login.
    pub fn is_expired(&self, now_unix: i64) -> bool {
        decode_access_claims(&self.access)
            .map(|claims| claims.is_expired(now_unix))
            .unwrap_or(true)
    }
}

/// Persists the session as a JSON file, the desktop analogue of the
/// browser's local storage.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if any.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Storage(e.to_string())),
        };
        let session =
            serde_json::from_str(&raw).map_err(|e| SessionError::Corrupt(e.to_string()))?;
        Ok(Some(session))
    }

    /// Persist the session, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Storage(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| SessionError::Storage(e.to_string()))
    }

    /// Remove the persisted session; logging out twice is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }
}

/// Failures building or persisting a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The access token is not a decodable JWT.
    InvalidToken(String),
    /// The session file could not be read or written.
    Storage(String),
    /// The session file exists but does not parse.
    Corrupt(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken(detail) => write!(f, "invalid access token: {detail}"),
            Self::Storage(detail) => write!(f, "session storage error: {detail}"),
            Self::Corrupt(detail) => write!(f, "corrupt session file: {detail}"),
        }
    }
}

impl std::error::Error for SessionError {}
