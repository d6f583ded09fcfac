use api::ApiConfig;
use dioxus::prelude::*;

use views::{Index, PageNotFound, UserPreferencePage};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Index {},
    #[route("/preferences/user/:user")]
    UserPreferencePage { user: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Read once: the CSRF token and origin do not change while the page is open.
    let config = use_hook(|| {
        ApiConfig::detect().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default API configuration: {}", e);
            ApiConfig::default()
        })
    });

    rsx! {
        document::Title { "Lecture Capture Preferences" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::ApiProvider {
            config,
            ui::ProfileProvider {
                Router::<Route> {}
            }
        }
    }
}
