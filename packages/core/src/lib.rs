// ABOUTME: Core types and traits shared by Marquee provider settings
// ABOUTME: Validation results, field descriptor tables, and the provider config capability

pub mod error;
pub mod fields;
pub mod provider;
pub mod validation;

// Re-export main types
pub use error::{CoreError, CoreResult};
pub use fields::{sort_fields, FieldDefinition, FieldKind, HiddenType, SelectOption};
pub use provider::ProviderConfig;
pub use url::Url;
pub use validation::{
    is_present, parse_root_url, validate_root_url, ValidationFailure, ValidationResult,
    ROOT_URL_MESSAGE,
};
