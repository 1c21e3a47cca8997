use thiserror::Error;

/// Everything that can go wrong talking to a backend service.
///
/// The taxonomy is deliberately flat: no response at all, an HTTP rejection,
/// or a body that did not decode. Call sites turn all three into a toast or
/// an inline alert; nothing is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("request failed with status {status}{}", body_suffix(.body))]
    Status { status: u16, body: Option<String> },

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(text) => format!(": {text}"),
        None => String::new(),
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                body: None,
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Why a sign-in or sign-up attempt was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("Invalid username or password")]
    BadCredentials,

    #[error("{0}")]
    Rejected(String),

    #[error("Username or email already exists")]
    AlreadyExists,

    #[error("Account temporarily locked")]
    LockedOut,

    #[error("Network error. Please check your internet connection.")]
    Unreachable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_includes_server_text() {
        let err = ApiError::Status {
            status: 409,
            body: Some("Username already exists".into()),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 409: Username already exists"
        );
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_status_error_without_body() {
        let err = ApiError::Status {
            status: 500,
            body: None,
        };
        assert_eq!(err.to_string(), "request failed with status 500");
    }

    #[test]
    fn test_transport_is_the_only_fallback_trigger() {
        assert!(ApiError::Transport("connection refused".into()).is_transport());
        assert!(!ApiError::Status {
            status: 401,
            body: None
        }
        .is_transport());
        assert!(!ApiError::Decode("missing field".into()).is_transport());
    }
}
