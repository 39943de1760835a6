// ABOUTME: Capability trait implemented by every provider settings record
// ABOUTME: Lets hosts validate and render settings without knowing the provider

use crate::fields::FieldDefinition;
use crate::validation::ValidationResult;

pub trait ProviderConfig: Send + Sync {
    /// Run every rule and report all failures
    fn validate(&self) -> ValidationResult;

    /// Form table for this provider, sorted by order
    fn field_definitions(&self) -> Vec<FieldDefinition>;
}
