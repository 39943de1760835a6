// ABOUTME: Settings for importing a named Trakt user list
// ABOUTME: Adds the list owner and slug on top of the shared Trakt settings

use crate::constants;
use crate::trakt::settings::{base_field_definitions, TraktSettings, TraktSettingsBase};
use crate::trakt::validator;
use marquee_core::{is_present, sort_fields, FieldDefinition, ProviderConfig, ValidationResult};
use serde::{Deserialize, Serialize};

pub const USERNAME_MESSAGE: &str = "Username must not be empty";
pub const LISTNAME_MESSAGE: &str = "List name must not be empty";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraktListSettings {
    #[serde(flatten)]
    pub base: TraktSettingsBase,
    pub username: String,
    pub listname: String,
}

impl TraktListSettings {
    pub fn new(username: impl Into<String>, listname: impl Into<String>) -> Self {
        Self {
            base: TraktSettingsBase::default(),
            username: username.into(),
            listname: listname.into(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validator::validate(self, |result| {
            if !is_present(Some(self.username.as_str())) {
                result.add_failure(constants::USERNAME, USERNAME_MESSAGE);
            }

            if !is_present(Some(self.listname.as_str())) {
                result.add_failure(constants::LISTNAME, LISTNAME_MESSAGE);
            }
        })
    }

    pub fn field_definitions(&self) -> Vec<FieldDefinition> {
        let mut fields = vec![
            FieldDefinition::new(1, constants::USERNAME, "Username")
                .help_text("Username for the List to import from"),
            FieldDefinition::new(2, constants::LISTNAME, "List Name")
                .help_text("List name for import, list must be public or you must have access to the list"),
        ];
        fields.extend(base_field_definitions(2));
        sort_fields(fields)
    }
}

impl TraktSettings for TraktListSettings {
    fn base(&self) -> &TraktSettingsBase {
        &self.base
    }

    fn provider_name(&self) -> &'static str {
        "Trakt List"
    }
}

impl ProviderConfig for TraktListSettings {
    fn validate(&self) -> ValidationResult {
        TraktListSettings::validate(self)
    }

    fn field_definitions(&self) -> Vec<FieldDefinition> {
        TraktListSettings::field_definitions(self)
    }
}
