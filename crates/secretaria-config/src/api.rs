use std::env;
use std::path::PathBuf;

/// Backend location and local session persistence.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the REST backend, including the `/api` prefix.
    pub base_url: String,
    /// Where the logged-in session (token pair + role) is persisted.
    pub session_file: PathBuf,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("SECRETARIA_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string()),
            session_file: env::var("SECRETARIA_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
        }
    }

    /// Base URL with any trailing slash removed, for joining paths.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn default_session_file() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".secretaria").join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_for_joining() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api/".to_string(),
            session_file: PathBuf::from("/tmp/session.json"),
        };
        assert_eq!(config.base_url_trimmed(), "http://localhost:8000/api");
    }
}
