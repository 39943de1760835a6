// ABOUTME: Import list provider settings for Marquee
// ABOUTME: Trakt settings records, their validation rules, and their form tables

pub mod config;
pub mod constants;
pub mod error;
pub mod trakt;

// Re-export main types
pub use config::{ensure_valid, parse_settings};
pub use error::{ImportListError, ImportListResult};
pub use trakt::{
    ListType, TraktListSettings, TraktPopularListType, TraktPopularSettings, TraktSettings,
    TraktSettingsBase, TraktUserListType, TraktUserSettings,
};
