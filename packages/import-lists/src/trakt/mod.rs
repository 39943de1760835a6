// ABOUTME: Trakt import list providers
// ABOUTME: Shared base settings, the shared rule set, and the three list sources

pub mod list;
pub mod list_type;
pub mod popular;
pub mod settings;
pub mod user;
pub mod validator;

pub use list::TraktListSettings;
pub use list_type::ListType;
pub use popular::{TraktPopularListType, TraktPopularSettings};
pub use settings::{TraktSettings, TraktSettingsBase};
pub use user::{TraktUserListType, TraktUserSettings};
