//! Authenticated user model

use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// The user identity returned by login, registration and `/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Login name; older payloads call it `name`
    #[serde(alias = "name")]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Greeting shown once the user is signed in
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_user() {
        let json = r#"{"id": 3, "username": "meadow", "email": "m@farm.test", "created_at": null}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::new(3));
        assert_eq!(user.greeting(), "Welcome, meadow");
    }

    #[test]
    fn test_name_alias() {
        let user: User = serde_json::from_str(r#"{"id": 1, "name": "hollis"}"#).unwrap();
        assert_eq!(user.username, "hollis");
        assert!(user.email.is_empty());
    }
}
