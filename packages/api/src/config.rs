//! # Where the API lives and how to authenticate to it
//!
//! The preferences API is served from the same host as the page, under `/api/`.
//! Every mutating request must carry Django's anti-forgery token, which the
//! server embeds in the page as a hidden input named `csrfmiddlewaretoken`.
//!
//! | Constructor | Used by |
//! |-------------|---------|
//! | [`ApiConfig::from_document`] | Browser builds (`wasm32` + `web` feature). Reads the page location and the hidden CSRF input. |
//! | [`ApiConfig::from_env`] | Native builds and local tooling. Reads `PREFERENCES_BASE_URL` and `PREFERENCES_CSRF_TOKEN`, loading `.env` first. |
//! | [`ApiConfig::detect`] | Picks whichever of the above applies to the current target. |
//!
//! A missing CSRF token is never an error: the token is simply empty and the
//! server decides whether to reject the request.

use url::Url;

use crate::ApiError;

/// Origin used when nothing else is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Name of the hidden form field holding Django's CSRF token.
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Location of the API endpoints plus the anti-forgery token to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    profile_url: Url,
    preference_list_url: Url,
    csrf_token: String,
}

impl ApiConfig {
    /// Build a config for the site at `origin` (e.g. `https://example.cam.ac.uk`).
    pub fn new(origin: &str, csrf_token: impl Into<String>) -> Result<Self, ApiError> {
        let origin = Url::parse(origin)?;
        let base_url = origin.join("/api/")?;
        Ok(Self {
            profile_url: base_url.join("profile/")?,
            preference_list_url: base_url.join("preferences/")?,
            base_url,
            csrf_token: csrf_token.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn profile_url(&self) -> &Url {
        &self.profile_url
    }

    pub fn preference_list_url(&self) -> &Url {
        &self.preference_list_url
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    /// Read the configuration from the page this code is running in.
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    pub fn from_document() -> Result<Self, ApiError> {
        use wasm_bindgen::JsCast;

        let window =
            web_sys::window().ok_or_else(|| ApiError::Config("no global window".to_string()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|e| ApiError::Config(format!("cannot read page origin: {e:?}")))?;

        let csrf_token = window
            .document()
            .and_then(|doc| doc.get_elements_by_name(CSRF_FIELD_NAME).get(0))
            .and_then(|node| node.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        if csrf_token.is_empty() {
            tracing::warn!("No {CSRF_FIELD_NAME} field on the page; sending an empty CSRF token");
        }

        Self::new(&origin, csrf_token)
    }

    /// Read the configuration from the environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let origin =
            std::env::var("PREFERENCES_BASE_URL").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        let csrf_token = std::env::var("PREFERENCES_CSRF_TOKEN").unwrap_or_default();

        Self::new(&origin, csrf_token)
    }

    /// Configuration for the current target.
    pub fn detect() -> Result<Self, ApiError> {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            Self::from_document()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_env()
        }
        #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
        {
            Ok(Self::default())
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, "").expect("DEFAULT_ORIGIN is a valid URL")
    }
}
