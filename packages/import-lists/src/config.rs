// ABOUTME: Loading provider settings from configuration payloads
// ABOUTME: Missing keys fall back to defaults; save paths reject invalid settings

use crate::error::{ImportListError, ImportListResult};
use marquee_core::ProviderConfig;
use serde::de::DeserializeOwned;

/// Deserialize a camelCase settings payload from the configuration UI
pub fn parse_settings<T: DeserializeOwned>(json: &str) -> ImportListResult<T> {
    let settings = serde_json::from_str(json)?;
    Ok(settings)
}

/// Validate before save, turning failures into an error
pub fn ensure_valid<C: ProviderConfig + ?Sized>(config: &C) -> ImportListResult<()> {
    config.validate().into_result().map_err(|result| {
        tracing::warn!(failures = result.errors().len(), "Rejected import list settings");
        ImportListError::Validation(result)
    })
}
