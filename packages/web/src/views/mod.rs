mod index;
pub use index::Index;

mod user_preference_page;
pub use user_preference_page::UserPreferencePage;

mod not_found;
pub use not_found::PageNotFound;
