//! # API crate — typed client for the lecture capture preferences REST API
//!
//! The backend exposes three endpoints under `/api/`:
//!
//! | Endpoint | Client method |
//! |----------|---------------|
//! | `GET /api/profile/` | [`ApiClient::profile_get`] |
//! | `GET /api/preferences/?user=&ordering=&expressed_at_after=&expressed_at_before=&page_size=` | [`ApiClient::preference_list`], [`ApiClient::preference_list_page`], [`ApiClient::preference_pages`], [`ApiClient::preference_list_all`] |
//! | `POST /api/preferences/` | [`ApiClient::preference_update`] |
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: headers, status classification, logging, JSON decoding |
//! | [`config`] | [`ApiConfig`]: API location and CSRF token, read from the page or the environment |
//! | [`models`] | Profile, preference and list types as they appear on the wire |
//! | [`transport`] | The [`Transport`] seam and the reqwest-backed [`HttpTransport`] |
//!
//! [`MemoryTransport`] is a scripted in-memory transport for tests.

pub mod client;
pub mod config;
mod error;
mod memory;
pub mod models;
mod pages;
pub mod transport;

pub use client::{append_query, ApiClient};
pub use config::ApiConfig;
pub use error::ApiError;
pub use memory::MemoryTransport;
pub use models::{
    single_preference, Ordering, Preference, PreferenceListQuery, PreferenceListResponse,
    PreferencePatch, Profile, UpdatingPreference, UserSummary,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
