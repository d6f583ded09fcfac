//! The landing page: the signed-in user's own preference.

use dioxus::prelude::*;
use ui::{OwnPreference, Page, PagePaper};

/// Index page component.
#[component]
pub fn Index() -> Element {
    rsx! {
        Page {
            PagePaper {
                OwnPreference {}
            }
        }
    }
}
