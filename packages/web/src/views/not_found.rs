use dioxus::prelude::*;
use ui::{Page, PagePaper, Spacer};

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Page {
            PagePaper {
                h2 { class: "headline", "Page not found" }
                p { class: "body", "There is nothing at /{path}." }
                Spacer {}
                Link { to: Route::Index {}, "Go to your preferences" }
            }
        }
    }
}
