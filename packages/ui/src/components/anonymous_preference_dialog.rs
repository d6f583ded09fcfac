use dioxus::prelude::*;

use super::Spacer;
use crate::icons::FaRightToBracket;
use crate::Icon;

/// Where the sign-in button sends the visitor.
pub const SIGN_IN_URL: &str = "/accounts/login";

/// Shown to visitors who are not signed in: what the site is for, and a
/// sign-in button.
#[component]
pub fn AnonymousPreferenceDialog() -> Element {
    rsx! {
        h2 { class: "headline", "Lecture Capture Preferences" }
        Spacer {}
        p {
            class: "body-strong",
            "This site allows those giving lectures in the University of Cambridge to opt-in to having their lectures be captured for the benefit of students."
        }
        p {
            class: "body",
            "Captured lectures are normally only available to students enrolled on the appropriate course."
        }
        Spacer {}
        div {
            class: "actions",
            a {
                class: "button button-outlined",
                href: SIGN_IN_URL,
                Icon { icon: FaRightToBracket, width: 16, height: 16 }
                "Sign in with Raven"
            }
        }
    }
}
