//! Profile context and hooks for the UI.

use api::Profile;
use dioxus::prelude::*;

use crate::client::use_api_client;

/// Who is looking at the page, as far as the UI is concerned.
#[derive(Debug, Clone, PartialEq)]
pub enum Visitor {
    /// The profile has not arrived (yet).
    Pending,
    Anonymous,
    SignedIn(Profile),
}

impl Visitor {
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        match profile {
            None => Visitor::Pending,
            Some(p) if p.is_anonymous => Visitor::Anonymous,
            Some(p) => Visitor::SignedIn(p.clone()),
        }
    }
}

/// Get the current profile. `None` until the profile has been fetched.
pub fn use_profile() -> Signal<Option<Profile>> {
    use_context::<Signal<Option<Profile>>>()
}

/// Provider component that fetches the profile once, on mount.
///
/// There is no refresh. If the fetch fails the error is logged and the profile
/// stays `None`, so consumers keep showing their loading state.
#[component]
pub fn ProfileProvider(children: Element) -> Element {
    let client = use_api_client();
    let mut profile = use_signal(|| Option::<Profile>::None);

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            match client.profile_get().await {
                Ok(p) => profile.set(Some(p)),
                Err(e) => tracing::error!("Failed to fetch profile: {}", e),
            }
        }
    });

    use_context_provider(|| profile);

    rsx! {
        {children}
    }
}
