use dioxus::prelude::*;

/// Page chrome: the coloured banner, the app bar and a centred content column.
#[component]
pub fn Page(children: Element) -> Element {
    rsx! {
        div {
            class: "page",
            div { class: "page-banner" }
            header {
                class: "page-app-bar",
                h1 { class: "page-app-bar-title", "Lecture Capture Preferences" }
            }
            div {
                class: "page-container",
                main {
                    class: "page-content",
                    {children}
                }
            }
        }
    }
}

/// A card holding page content. Goes full-bleed on small screens.
#[component]
pub fn PagePaper(children: Element) -> Element {
    rsx! {
        section {
            class: "page-paper",
            {children}
        }
    }
}

/// A small vertical gap between blocks of content.
#[component]
pub fn Spacer() -> Element {
    rsx! {
        div { class: "spacer" }
    }
}
