//! User record types.

use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// Serialized with camelCase keys in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub hobby: String,
}

impl User {
    /// Build a record from an assigned id and a validated triple.
    pub fn from_new(id: String, new_user: NewUser) -> Self {
        Self {
            id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            hobby: new_user.hobby,
        }
    }

    /// The fixture record every fresh registry starts with.
    pub fn fixture() -> Self {
        Self {
            id: "1".to_string(),
            first_name: "Anshika".to_string(),
            last_name: "Agarwal".to_string(),
            hobby: "Teaching".to_string(),
        }
    }
}

/// A validated, trimmed `(firstName, lastName, hobby)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub hobby: String,
}

/// Untrusted write payload for `POST /user` and `PUT /user/{id}`.
///
/// Missing keys and `null` both deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub hobby: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_camel_case_in_order() {
        let json = serde_json::to_string(&User::fixture()).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","firstName":"Anshika","lastName":"Agarwal","hobby":"Teaching"}"#
        );
    }

    #[test]
    fn test_payload_treats_null_and_missing_as_absent() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"firstName":null,"hobby":"Chess"}"#).unwrap();
        assert_eq!(payload.first_name, None);
        assert_eq!(payload.last_name, None);
        assert_eq!(payload.hobby.as_deref(), Some("Chess"));
    }

    #[test]
    fn test_payload_ignores_unknown_keys() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"id":"42","firstName":"Jane"}"#).unwrap();
        assert_eq!(payload.first_name.as_deref(), Some("Jane"));
    }
}
