//! Filters and responses for `GET /api/preferences/`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::Preference;

/// Sort order accepted by the list endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Ordering {
    #[serde(rename = "expressed_at")]
    ExpressedAt,
    #[serde(rename = "-expressed_at")]
    ExpressedAtDesc,
}

impl Ordering {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ordering::ExpressedAt => "expressed_at",
            Ordering::ExpressedAtDesc => "-expressed_at",
        }
    }
}

/// Filter for the preference list. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreferenceListQuery {
    pub user: Option<String>,
    pub ordering: Option<Ordering>,
    pub expressed_at_after: Option<DateTime<Utc>>,
    pub expressed_at_before: Option<DateTime<Utc>>,
    /// Results per page; the server caps this at 300.
    pub page_size: Option<u32>,
}

impl PreferenceListQuery {
    /// Only the (most recent) preference of one user.
    pub fn for_user(username: impl Into<String>) -> Self {
        Self {
            user: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn with_ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = Some(ordering);
        self
    }

    /// Restrict to preferences expressed within `[after, before]`. Either bound may be open.
    pub fn expressed_between(
        mut self,
        after: Option<DateTime<Utc>>,
        before: Option<DateTime<Utc>>,
    ) -> Self {
        self.expressed_at_after = after;
        self.expressed_at_before = before;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// The defined fields as query string pairs, in a stable order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(user) = &self.user {
            pairs.push(("user", user.clone()));
        }
        if let Some(ordering) = self.ordering {
            pairs.push(("ordering", ordering.as_str().to_string()));
        }
        if let Some(after) = self.expressed_at_after {
            pairs.push(("expressed_at_after", iso(after)));
        }
        if let Some(before) = self.expressed_at_before {
            pairs.push(("expressed_at_before", iso(before)));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        pairs
    }
}

fn iso(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// One page of the preference list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreferenceListResponse {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Preference>,
}

impl PreferenceListResponse {
    /// Cursor URL of the following page. An empty string counts as no page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }
}
