use api::Preference;
use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleXmark};
use crate::Icon;

/// Read-only view of someone's preference, or a note that they have none.
///
/// The display name comes from the preference when there is one, otherwise
/// the bare username is shown.
#[component]
pub fn UserPreference(username: String, preference: Option<Preference>) -> Element {
    let Some(preference) = preference else {
        return rsx! {
            p { class: "body", "There is no preference recorded for {username}." }
        };
    };

    rsx! {
        h2 { class: "headline", "Preferences for {preference.user.display_name}" }
        ul {
            class: "body preference-summary",
            li {
                FlagIcon { set: preference.allow_capture }
                strong { if preference.allow_capture { "DOES " } else { "DOES NOT " } }
                "agree to having lectures recorded."
            }
            li {
                FlagIcon { set: preference.request_hold }
                strong { if preference.request_hold { "DOES " } else { "DOES NOT " } }
                "wish to hold recordings for trimming."
            }
        }
    }
}

#[component]
fn FlagIcon(set: bool) -> Element {
    if set {
        rsx! {
            span { class: "flag flag--yes", Icon { icon: FaCircleCheck, width: 14, height: 14 } }
        }
    } else {
        rsx! {
            span { class: "flag flag--no", Icon { icon: FaCircleXmark, width: 14, height: 14 } }
        }
    }
}
