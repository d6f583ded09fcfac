//! Loading the full, merged result of a preference query.

use api::{single_preference, Preference, PreferenceListQuery};
use dioxus::prelude::*;

use crate::client::use_api_client;

/// Results of a preference query plus whether they are still being loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub results: Vec<Preference>,
    pub is_loading: bool,
}

impl QueryState {
    /// A fetch is under way: no results yet.
    pub fn loading() -> Self {
        Self {
            results: Vec::new(),
            is_loading: true,
        }
    }

    /// Every page has arrived.
    pub fn loaded(results: Vec<Preference>) -> Self {
        Self {
            results,
            is_loading: false,
        }
    }

    /// The result when exactly one preference matched.
    pub fn single(&self) -> Option<&Preference> {
        single_preference(&self.results)
    }
}

/// Query the preferences API and return the *full* list of matches.
///
/// All pages are fetched and merged before the state leaves loading. When
/// `query` changes (by value) the previous fetch is dropped and the state goes
/// straight back to loading with an empty list, in the same render. A failed
/// fetch is logged and the state stays loading.
pub fn use_preference_query(query: PreferenceListQuery) -> QueryState {
    let client = use_api_client();
    let mut fetched = use_signal(|| Option::<(PreferenceListQuery, Vec<Preference>)>::None);

    let _ = use_resource(use_reactive((&query,), move |(query,)| {
        let client = client.clone();
        async move {
            match client.preference_list_all(&query).await {
                Ok(results) => fetched.set(Some((query, results))),
                Err(e) => tracing::error!(user = ?query.user, "Failed to load preferences: {}", e),
            }
        }
    }));

    // Results belong to the query that produced them.
    let state = match &*fetched.read() {
        Some((done, results)) if *done == query => QueryState::loaded(results.clone()),
        _ => QueryState::loading(),
    };
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client, mount, settle, Recorder};
    use api::{MemoryTransport, Method, UserSummary};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn pref(username: &str) -> Preference {
        Preference {
            user: UserSummary {
                username: username.into(),
                display_name: username.into(),
            },
            allow_capture: true,
            request_hold: false,
            expressed_at: Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn script_bob(transport: &MemoryTransport) {
        transport.respond_json(
            Method::Get,
            "http://testserver/api/preferences/?user=bob",
            200,
            &json!({ "next": "/api/preferences/?cursor=2", "results": [pref("A")] }),
        );
        transport.respond_json(
            Method::Get,
            "http://testserver/api/preferences/?cursor=2",
            200,
            &json!({ "next": null, "results": [pref("B")] }),
        );
    }

    #[component]
    fn BobQuery() -> Element {
        let state = use_preference_query(PreferenceListQuery::for_user("bob"));
        use_context::<Recorder<QueryState>>().push(state);
        rsx! {}
    }

    /// Queries for bob, then switches to carol once bob's list has loaded.
    #[component]
    fn SwitchingQuery() -> Element {
        let mut user = use_signal(|| "bob".to_string());
        let state = use_preference_query(PreferenceListQuery::for_user(user()));
        use_context::<Recorder<(String, QueryState)>>().push((user(), state.clone()));

        let loaded = !state.is_loading;
        use_effect(use_reactive((&loaded,), move |(loaded,)| {
            if loaded && *user.peek() == "bob" {
                user.set("carol".to_string());
            }
        }));

        rsx! {}
    }

    #[test]
    fn test_single() {
        assert!(QueryState::loaded(vec![]).single().is_none());
        assert_eq!(QueryState::loaded(vec![pref("alice")]).single(), Some(&pref("alice")));
        assert!(QueryState::loaded(vec![pref("a"), pref("b")]).single().is_none());
    }

    #[tokio::test]
    async fn test_two_pages_for_bob() {
        let transport = MemoryTransport::new();
        script_bob(&transport);
        let seen = Recorder::<QueryState>::default();

        let mut dom = mount(|| rsx! { BobQuery {} }, client(&transport), seen.clone());
        assert_eq!(seen.all(), vec![QueryState::loading()]);

        settle(&mut dom).await;

        // Loading until the last page is in: no render ever shows page one alone.
        let seen = seen.all();
        let (last, before) = seen.split_last().unwrap();
        assert!(before.iter().all(|s| *s == QueryState::loading()));
        assert_eq!(*last, QueryState::loaded(vec![pref("A"), pref("B")]));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_page_stays_loading() {
        let transport = MemoryTransport::new();
        transport.respond_json(
            Method::Get,
            "http://testserver/api/preferences/?user=bob",
            200,
            &json!({ "next": "/api/preferences/?cursor=2", "results": [pref("A")] }),
        );
        transport.respond(Method::Get, "http://testserver/api/preferences/?cursor=2", 502, "");
        let seen = Recorder::<QueryState>::default();

        let mut dom = mount(|| rsx! { BobQuery {} }, client(&transport), seen.clone());
        settle(&mut dom).await;

        assert!(seen.all().iter().all(|s| *s == QueryState::loading()));
    }

    #[tokio::test]
    async fn test_changed_filter_restarts_from_empty() {
        let transport = MemoryTransport::new();
        script_bob(&transport);
        transport.respond_json(
            Method::Get,
            "http://testserver/api/preferences/?user=carol",
            200,
            &json!({ "next": null, "results": [pref("C")] }),
        );
        let seen = Recorder::<(String, QueryState)>::default();

        let mut dom = mount(|| rsx! { SwitchingQuery {} }, client(&transport), seen.clone());
        settle(&mut dom).await;

        let seen = seen.all();
        let carol: Vec<&QueryState> = seen
            .iter()
            .filter(|(user, _)| user == "carol")
            .map(|(_, state)| state)
            .collect();
        assert_eq!(*carol[0], QueryState::loading());
        assert_eq!(
            carol.last().copied(),
            Some(&QueryState::loaded(vec![pref("C")]))
        );
        assert!(carol
            .iter()
            .all(|s| !s.results.contains(&pref("A")) && !s.results.contains(&pref("B"))));

        // The new filter starts over at page one.
        let urls: Vec<String> = transport.requests().iter().map(|r| r.url.to_string()).collect();
        assert_eq!(
            urls,
            vec![
                "http://testserver/api/preferences/?user=bob",
                "http://testserver/api/preferences/?cursor=2",
                "http://testserver/api/preferences/?user=carol",
            ]
        );
    }
}
