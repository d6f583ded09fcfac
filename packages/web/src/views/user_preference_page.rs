use api::PreferenceListQuery;
use dioxus::prelude::*;
use ui::{use_preference_query, LoadingIndicator, Page, PagePaper, UserPreference};

/// Public, read-only view of one user's preference.
#[component]
pub fn UserPreferencePage(user: String) -> Element {
    let state = use_preference_query(PreferenceListQuery::for_user(user.clone()));

    rsx! {
        document::Title { "Lecture Capture Preferences: {user}" }
        Page {
            PagePaper {
                if state.is_loading {
                    LoadingIndicator {}
                } else {
                    UserPreference {
                        username: user.clone(),
                        preference: state.single().cloned(),
                    }
                }
            }
        }
    }
}
