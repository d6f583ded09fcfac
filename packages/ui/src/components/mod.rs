//! Presentational components. None of these fetch anything themselves.

mod page;
pub use page::{Page, PagePaper, Spacer};

mod loading_indicator;
pub use loading_indicator::LoadingIndicator;

mod anonymous_preference_dialog;
pub use anonymous_preference_dialog::AnonymousPreferenceDialog;

mod new_preference_dialog;
pub use new_preference_dialog::NewPreferenceDialog;

mod user_preference;
pub use user_preference::UserPreference;
