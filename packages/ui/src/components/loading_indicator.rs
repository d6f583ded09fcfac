use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

/// A centred spinner, shown inside a [`crate::components::PagePaper`] while data loads.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "loading-indicator",
            role: "progressbar",
            span {
                class: "loading-indicator-spinner",
                Icon { icon: FaSpinner, width: 32, height: 32 }
            }
        }
    }
}
