//! User and authentication payloads.

use serde::{Deserialize, Serialize};
use store::Session;

/// Login payload for the token endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration payload.
#[derive(Clone, Debug, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A user record as returned by the API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Successful response from the token endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

impl TokenResponse {
    /// Convert into the session record the client persists.
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            username: self.username,
            user_id: self.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_exact_field_set() {
        let payload = Credentials {
            username: "mara".to_string(),
            password: "hunter2".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["password", "username"]);
    }

    #[test]
    fn new_user_serializes_exact_field_set() {
        let payload = NewUser {
            username: "mara".to_string(),
            email: "mara@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["email", "password", "username"]);
    }

    #[test]
    fn token_response_becomes_session() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"token": "abc123", "user_id": 7, "username": "mara"}"#,
        )
        .unwrap();
        let session = response.into_session();
        assert_eq!(session.token, "abc123");
        assert_eq!(session.username, "mara");
        assert_eq!(session.user_id, 7);
    }
}
