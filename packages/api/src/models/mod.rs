//! Data models exchanged with the preferences API.

mod list;
mod preference;
mod profile;

pub use list::{Ordering, PreferenceListQuery, PreferenceListResponse};
pub use preference::{
    single_preference, Preference, PreferencePatch, UpdatingPreference, UserSummary,
};
pub use profile::Profile;
