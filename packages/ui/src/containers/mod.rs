//! Hooks holding the data behind the preference views.

mod query_preferences;
pub use query_preferences::{use_preference_query, QueryState};

mod update_preference;
pub use update_preference::{use_update_preference, SubmitError, UpdatePreference, UpdateState};

mod own_preference;
pub use own_preference::OwnPreference;
