//! Editing and submitting the signed-in user's preference.

use api::{ApiError, Preference, PreferencePatch, UpdatingPreference};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use thiserror::Error;

use crate::client::{use_api_client, Client};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("a preference submission is already in progress")]
    AlreadySubmitting,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// An in-progress preference and the state of its submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateState {
    pub preference: UpdatingPreference,
    pub is_submitting: bool,
    /// When the preference was last synchronised with the API, if ever.
    pub last_submitted_at: Option<DateTime<Utc>>,
}

impl UpdateState {
    /// Start from `initial`, or the default preference.
    pub fn new(initial: Option<&Preference>) -> Self {
        Self {
            preference: UpdatingPreference::from_existing(initial),
            ..Self::default()
        }
    }

    /// Merge a local edit. Nothing is sent.
    pub fn update(&mut self, patch: PreferencePatch) {
        self.preference.apply(patch);
    }

    /// Mark a submission as started and return the complete record to send.
    ///
    /// Only one submission may be outstanding at a time.
    pub fn begin_submit(&mut self) -> Result<UpdatingPreference, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.is_submitting = true;
        Ok(self.preference.clone())
    }

    /// The server stored the preference: adopt its record verbatim.
    pub fn complete_submit(&mut self, stored: Preference, at: DateTime<Utc>) {
        self.preference = stored.into();
        self.is_submitting = false;
        self.last_submitted_at = Some(at);
    }

    /// The submission failed. Local edits are kept.
    pub fn fail_submit(&mut self) {
        self.is_submitting = false;
    }
}

/// Handle returned by [`use_update_preference`].
#[derive(Clone, Copy)]
pub struct UpdatePreference {
    state: Signal<UpdateState>,
    client: Signal<Client>,
}

impl UpdatePreference {
    pub fn state(&self) -> UpdateState {
        self.state.read().clone()
    }

    pub fn update(&self, patch: PreferencePatch) {
        let mut state = self.state;
        state.write().update(patch);
    }

    /// Send the whole local preference to the API.
    ///
    /// Ignored (with a warning) while a previous submission is in flight.
    pub fn submit(&self) {
        let mut state = self.state;
        let body = match state.write().begin_submit() {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Not submitting preference: {}", e);
                return;
            }
        };
        let client = self.client.peek().clone();

        spawn(async move {
            match client.preference_update(&body).await.map_err(SubmitError::from) {
                Ok(stored) => state.write().complete_submit(stored, Utc::now()),
                Err(e) => {
                    tracing::error!("Failed to submit preference: {}", e);
                    state.write().fail_submit();
                }
            }
        });
    }
}

/// Allow a signed-in user to edit their preference and submit it.
///
/// `initial` is only read on the first render.
pub fn use_update_preference(initial: Option<Preference>) -> UpdatePreference {
    let client = use_api_client();
    let state = use_signal(|| UpdateState::new(initial.as_ref()));
    let client = use_signal(move || client);

    UpdatePreference { state, client }
}
