use serde::{Deserialize, Serialize};

/// Login request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response. The auth service has shipped the token under
/// two different keys over time; accept both.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    pub fn bearer_token(&self) -> Option<&str> {
        self.jwt.as_deref().or(self.token.as_deref())
    }
}

/// Registration request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_prefers_jwt_key() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"jwt": "aaa", "token": "bbb"}"#).unwrap();
        assert_eq!(response.bearer_token(), Some("aaa"));
    }

    #[test]
    fn test_bearer_token_falls_back_to_token_key() {
        let response: LoginResponse = serde_json::from_str(r#"{"token": "bbb"}"#).unwrap();
        assert_eq!(response.bearer_token(), Some("bbb"));
    }

    #[test]
    fn test_bearer_token_absent() {
        let response: LoginResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(response.bearer_token(), None);
    }
}
