// src/api/error.rs

use thiserror::Error;

/// Failure of one backend call. `Display` is the exact human-readable
/// message controllers store and renderers show inline.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Profile not found for username: {username}")]
    NotFound { username: String },

    /// Non-2xx status. `message` is the backend body's `message` field when
    /// it had one, else a generic status line.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_username() {
        let err = ApiError::NotFound {
            username: "doesnotexist".to_string(),
        };
        assert!(err.to_string().contains("doesnotexist"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn status_error_displays_its_message_verbatim() {
        let err = ApiError::Status {
            status: 502,
            message: "Upstream search provider unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream search provider unavailable");
        assert_eq!(err.status(), Some(502));
    }
}
