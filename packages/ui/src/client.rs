//! The API client as a context value.
//!
//! The app builds one [`Client`] when it starts and hands it down with
//! [`ApiProvider`]; hooks further down fetch it with [`use_api_client`].

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

/// Transport behind [`Client`]: HTTP in the app, scripted in unit tests.
#[cfg(not(test))]
pub type ClientTransport = api::HttpTransport;
#[cfg(test)]
pub type ClientTransport = api::MemoryTransport;

/// The client type shared through context.
pub type Client = ApiClient<ClientTransport>;

/// Get the API client provided by the nearest [`ApiProvider`].
pub fn use_api_client() -> Client {
    use_context::<Client>()
}

/// Provide an API client talking to the API described by `config`.
#[component]
pub fn ApiProvider(config: ApiConfig, children: Element) -> Element {
    use_context_provider(|| Client::new(ClientTransport::new(), config.clone()));

    rsx! {
        {children}
    }
}
