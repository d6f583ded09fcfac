//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{use_api_client, ApiProvider, Client, ClientTransport};

mod profile;
pub use profile::{use_profile, ProfileProvider, Visitor};

pub mod containers;
pub use containers::{
    use_preference_query, use_update_preference, OwnPreference, QueryState, SubmitError,
    UpdatePreference, UpdateState,
};

pub mod components;
pub use components::{
    AnonymousPreferenceDialog, LoadingIndicator, NewPreferenceDialog, Page, PagePaper, Spacer,
    UserPreference,
};

#[cfg(test)]
mod testing;
