//! The signed-in user's own preference, or a sign-in prompt.

use api::{PreferenceListQuery, Profile};
use dioxus::prelude::*;

use super::use_preference_query;
use crate::components::{AnonymousPreferenceDialog, LoadingIndicator, NewPreferenceDialog};
use crate::profile::{use_profile, Visitor};

/// Waits for the profile, then either invites an anonymous visitor to sign in
/// or loads the user's existing preference so they can change it.
#[component]
pub fn OwnPreference() -> Element {
    let profile = use_profile();

    match Visitor::from_profile(profile().as_ref()) {
        Visitor::Pending => rsx! { LoadingIndicator {} },
        Visitor::Anonymous => rsx! { AnonymousPreferenceDialog {} },
        Visitor::SignedIn(profile) => rsx! { PreferenceEditor { profile } },
    }
}

#[component]
fn PreferenceEditor(profile: Profile) -> Element {
    let state = use_preference_query(PreferenceListQuery::for_user(profile.username.clone()));

    if state.is_loading {
        return rsx! { LoadingIndicator {} };
    }

    rsx! {
        NewPreferenceDialog {
            profile,
            existing_preference: state.single().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileProvider;
    use crate::testing::{client, mount, settle, Recorder};
    use api::{MemoryTransport, Method, Preference, UserSummary};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    const PROFILE_URL: &str = "http://testserver/api/profile/";

    fn app() -> Element {
        rsx! {
            ProfileProvider { OwnPreference {} }
        }
    }

    #[tokio::test]
    async fn test_anonymous_visitor_is_asked_to_sign_in() {
        let transport = MemoryTransport::new();
        transport.respond_json(
            Method::Get,
            PROFILE_URL,
            200,
            &json!({ "is_anonymous": true, "display_name": "" }),
        );

        let mut dom = mount(app, client(&transport), Recorder::<()>::default());
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("Sign in with Raven"));

        settle(&mut dom).await;
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Sign in with Raven"));
        assert!(!html.contains("Express preference"));
        // Anonymous visitors never query preferences.
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_signed_in_user_edits_existing_preference() {
        let transport = MemoryTransport::new();
        transport.respond_json(
            Method::Get,
            PROFILE_URL,
            200,
            &json!({ "is_anonymous": false, "username": "spqr1", "display_name": "S. Q." }),
        );
        let existing = Preference {
            user: UserSummary {
                username: "spqr1".into(),
                display_name: "S. Q.".into(),
            },
            allow_capture: false,
            request_hold: true,
            expressed_at: Utc.with_ymd_and_hms(2019, 1, 7, 12, 30, 0).unwrap(),
        };
        transport.respond_json(
            Method::Get,
            "http://testserver/api/preferences/?user=spqr1",
            200,
            &json!({ "next": null, "results": [existing] }),
        );

        let mut dom = mount(app, client(&transport), Recorder::<()>::default());
        settle(&mut dom).await;
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Welcome, S. Q."));
        assert!(html.contains("You last expressed a preference at "));
        assert!(html.contains("Express preference"));
        assert!(!html.contains("Sign in with Raven"));
    }

    #[tokio::test]
    async fn test_failed_profile_keeps_loading() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, PROFILE_URL, 500, "<h1>Server Error</h1>");

        let mut dom = mount(app, client(&transport), Recorder::<()>::default());
        settle(&mut dom).await;
        let html = dioxus_ssr::render(&dom);

        assert!(!html.contains("Sign in with Raven"));
        assert!(!html.contains("Welcome"));
        assert_eq!(transport.requests().len(), 1);
    }
}
