//! # Lecture capture preferences
//!
//! Two shapes of the same record:
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Preference`] | A record as stored by the server: owning user, both flags, and when it was expressed. |
//! | [`UpdatingPreference`] | The locally editable copy held while a signed-in user changes their mind. `expressed_at` is only present when it came from the server. |
//!
//! [`PreferencePatch`] is a partial edit applied to an [`UpdatingPreference`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user a preference belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    pub display_name: String,
}

/// A preference as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preference {
    pub user: UserSummary,
    pub allow_capture: bool,
    pub request_hold: bool,
    pub expressed_at: DateTime<Utc>,
}

/// An in-progress preference. This is also the body posted back to the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatingPreference {
    pub allow_capture: bool,
    pub request_hold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expressed_at: Option<DateTime<Utc>>,
}

impl Default for UpdatingPreference {
    /// Capture allowed, no hold requested.
    fn default() -> Self {
        Self {
            allow_capture: true,
            request_hold: false,
            expressed_at: None,
        }
    }
}

impl From<Preference> for UpdatingPreference {
    fn from(p: Preference) -> Self {
        Self {
            allow_capture: p.allow_capture,
            request_hold: p.request_hold,
            expressed_at: Some(p.expressed_at),
        }
    }
}

impl From<&Preference> for UpdatingPreference {
    fn from(p: &Preference) -> Self {
        p.clone().into()
    }
}

impl UpdatingPreference {
    /// Start from an existing record, or the default when there is none.
    pub fn from_existing(existing: Option<&Preference>) -> Self {
        existing.map(Self::from).unwrap_or_default()
    }

    /// Shallow-merge a patch into this preference.
    pub fn apply(&mut self, patch: PreferencePatch) {
        if let Some(allow_capture) = patch.allow_capture {
            self.allow_capture = allow_capture;
        }
        if let Some(request_hold) = patch.request_hold {
            self.request_hold = request_hold;
        }
    }
}

/// A partial edit. `None` fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencePatch {
    pub allow_capture: Option<bool>,
    pub request_hold: Option<bool>,
}

impl PreferencePatch {
    pub fn allow_capture(value: bool) -> Self {
        Self {
            allow_capture: Some(value),
            ..Self::default()
        }
    }

    pub fn request_hold(value: bool) -> Self {
        Self {
            request_hold: Some(value),
            ..Self::default()
        }
    }
}

/// The user's preference when a query for a single user returned exactly one
/// record. Zero or several records mean there is nothing usable.
pub fn single_preference(results: &[Preference]) -> Option<&Preference> {
    match results {
        [only] => Some(only),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn alice() -> Preference {
        Preference {
            user: UserSummary {
                username: "alice".into(),
                display_name: "Alice A".into(),
            },
            allow_capture: false,
            request_hold: true,
            expressed_at: Utc.with_ymd_and_hms(2019, 1, 7, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_decode_server_record() {
        let p: Preference = serde_json::from_str(
            r#"{
                "user": {"username": "alice", "display_name": "Alice A"},
                "allow_capture": false,
                "request_hold": true,
                "expressed_at": "2019-01-07T12:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(p, alice());
    }

    #[test]
    fn test_default_patch_allow_capture() {
        let mut pref = UpdatingPreference::default();
        pref.apply(PreferencePatch::allow_capture(false));
        assert!(!pref.allow_capture);
        assert!(!pref.request_hold);
        assert!(pref.expressed_at.is_none());
    }

    #[test]
    fn test_from_existing() {
        let pref = UpdatingPreference::from_existing(Some(&alice()));
        assert!(!pref.allow_capture);
        assert!(pref.request_hold);
        assert_eq!(pref.expressed_at, Some(alice().expressed_at));

        assert_eq!(
            UpdatingPreference::from_existing(None),
            UpdatingPreference::default()
        );
    }

    #[test]
    fn test_body_omits_missing_expressed_at() {
        let body = serde_json::to_value(UpdatingPreference::default()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "allow_capture": true, "request_hold": false })
        );
    }

    #[test]
    fn test_single_preference() {
        assert!(single_preference(&[]).is_none());
        assert_eq!(single_preference(&[alice()]), Some(&alice()));
        assert!(single_preference(&[alice(), alice()]).is_none());
    }
}
