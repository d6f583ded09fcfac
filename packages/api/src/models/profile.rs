//! # Profile of the current session
//!
//! Returned by `GET /api/profile/`. Anonymous visitors get
//! `is_anonymous: true` and the server may leave `username` out entirely, so
//! both name fields default to the empty string.

use serde::{Deserialize, Serialize};

/// What the API knows about whoever is looking at the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub is_anonymous: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: String,
}

impl Profile {
    /// Display name, falling back to the username when the server sent none.
    pub fn display_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_profile_without_username() {
        let profile: Profile =
            serde_json::from_str(r#"{"is_anonymous": true, "display_name": ""}"#).unwrap();
        assert!(profile.is_anonymous);
        assert_eq!(profile.username, "");
    }

    #[test]
    fn test_display_name_fallback() {
        let profile = Profile {
            is_anonymous: false,
            username: "spqr1".into(),
            display_name: String::new(),
        };
        assert_eq!(profile.display_name(), "spqr1");

        let named = Profile {
            display_name: "Simon Quentin".into(),
            ..profile
        };
        assert_eq!(named.display_name(), "Simon Quentin");
    }
}
