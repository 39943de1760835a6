// ABOUTME: Field-scoped validation results for provider settings
// ABOUTME: Collects every rule failure instead of stopping at the first one

use crate::error::{CoreError, CoreResult};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use url::Url;

/// Message reported when a root URL is malformed or ends with a slash
pub const ROOT_URL_MESSAGE: &str = "Must be valid URL that does not end with a /";

/// A single rule violation, scoped to the property the UI should highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub property_name: String,
    pub error_message: String,
}

impl ValidationFailure {
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_name, self.error_message)
    }
}

/// Outcome of validating a settings record. No failures means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    errors: Vec<ValidationFailure>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationFailure] {
        &self.errors
    }

    pub fn add_failure(&mut self, property_name: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationFailure::new(property_name, message));
    }

    /// Append every failure from another result, keeping their order
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    pub fn has_failure_for(&self, property_name: &str) -> bool {
        self.errors
            .iter()
            .any(|failure| failure.property_name == property_name)
    }

    pub fn messages_for(&self, property_name: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|failure| failure.property_name == property_name)
            .map(|failure| failure.error_message.as_str())
            .collect()
    }

    pub fn into_result(self) -> Result<(), ValidationResult> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }

        for (i, failure) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationResult {}

/// True when the value is set and not only whitespace
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Parse an absolute http(s) root URL. Trailing slashes and surrounding
/// whitespace are rejected so paths can be appended verbatim.
pub fn parse_root_url(value: &str) -> CoreResult<Url> {
    if value.is_empty() {
        return Err(CoreError::InvalidUrl("URL cannot be empty".to_string()));
    }

    if value.trim() != value {
        return Err(CoreError::InvalidUrl(
            "URL cannot start or end with whitespace".to_string(),
        ));
    }

    if value.ends_with('/') {
        return Err(CoreError::InvalidUrl(format!(
            "{} must not end with a /",
            value
        )));
    }

    let url = Url::parse(value).map_err(|e| CoreError::InvalidUrl(format!("{}: {}", value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CoreError::InvalidUrl(format!(
            "{} must use http:// or https://",
            value
        )));
    }

    if !url.has_host() {
        return Err(CoreError::InvalidUrl(format!("{} has no host", value)));
    }

    Ok(url)
}

/// Record a failure under `property_name` unless `value` is a valid root URL
pub fn validate_root_url(property_name: &str, value: &str, result: &mut ValidationResult) {
    if let Err(e) = parse_root_url(value) {
        tracing::debug!(property = property_name, error = %e, "Rejected root URL");
        result.add_failure(property_name, ROOT_URL_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_failures_accumulate_in_order() {
        let mut result = ValidationResult::new();
        result.add_failure("rating", "Not a valid rating");
        result.add_failure("limit", "Must be integer greater than 0");

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 2);
        assert_eq!(result.errors()[0].property_name, "rating");
        assert_eq!(result.errors()[1].property_name, "limit");
    }

    #[test]
    fn test_messages_for_property() {
        let mut result = ValidationResult::new();
        result.add_failure("signIn", "Must authenticate with Trakt");
        result.add_failure("signIn", "Must authenticate with Trakt");
        result.add_failure("years", "Not a valid year or range of years");

        assert!(result.has_failure_for("signIn"));
        assert!(!result.has_failure_for("rating"));
        assert_eq!(result.messages_for("signIn").len(), 2);
        assert_eq!(
            result.messages_for("years"),
            vec!["Not a valid year or range of years"]
        );
    }

    #[test]
    fn test_merge_keeps_both_sides() {
        let mut first = ValidationResult::new();
        first.add_failure("rating", "Not a valid rating");
        let mut second = ValidationResult::new();
        second.add_failure("username", "Username must not be empty");

        first.merge(second);

        assert_eq!(first.errors().len(), 2);
        assert!(first.has_failure_for("username"));
    }

    #[test]
    fn test_display_joins_failures() {
        let mut result = ValidationResult::new();
        assert_eq!(result.to_string(), "valid");

        result.add_failure("rating", "Not a valid rating");
        result.add_failure("limit", "Must be integer greater than 0");
        assert_eq!(
            result.to_string(),
            "rating: Not a valid rating; limit: Must be integer greater than 0"
        );
    }

    #[test]
    fn test_serializes_with_is_valid_flag() {
        let mut result = ValidationResult::new();
        result.add_failure("rating", "Not a valid rating");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isValid": false,
                "errors": [{ "propertyName": "rating", "errorMessage": "Not a valid rating" }]
            })
        );

        let back: ValidationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(Some("token")));
        assert!(!is_present(Some("")));
        assert!(!is_present(Some("   ")));
        assert!(!is_present(None));
    }

    #[test]
    fn test_parse_root_url() {
        assert!(parse_root_url("https://api.trakt.tv").is_ok());
        assert!(parse_root_url("http://localhost:7878").is_ok());
        assert!(parse_root_url("https://api.trakt.tv/").is_err());
        assert!(parse_root_url("api.trakt.tv").is_err());
        assert!(parse_root_url("ftp://api.trakt.tv").is_err());
        assert!(parse_root_url(" https://api.trakt.tv").is_err());
        assert!(parse_root_url("").is_err());
    }

    #[test]
    fn test_validate_root_url_reports_property() {
        let mut result = ValidationResult::new();
        validate_root_url("link", "https://api.trakt.tv", &mut result);
        assert!(result.is_valid());

        validate_root_url("link", "not a url", &mut result);
        assert_eq!(result.messages_for("link"), vec![ROOT_URL_MESSAGE]);
    }
}
