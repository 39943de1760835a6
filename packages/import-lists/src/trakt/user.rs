// ABOUTME: Settings for importing a Trakt user's own lists
// ABOUTME: Watchlist, watched, or collection of the signed-in or named user

use crate::constants;
use crate::trakt::list_type::{deserialize_list_type, ListType};
use crate::trakt::settings::{base_field_definitions, TraktSettings, TraktSettingsBase};
use crate::trakt::validator;
use marquee_core::{is_present, sort_fields, FieldDefinition, ProviderConfig, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraktUserListType {
    #[default]
    UserWatchList = 0,
    UserWatchedList = 1,
    UserCollectionList = 2,
}

impl ListType for TraktUserListType {
    const ALL: &'static [Self] = &[
        TraktUserListType::UserWatchList,
        TraktUserListType::UserWatchedList,
        TraktUserListType::UserCollectionList,
    ];

    fn value(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            TraktUserListType::UserWatchList => "UserWatchList",
            TraktUserListType::UserWatchedList => "UserWatchedList",
            TraktUserListType::UserCollectionList => "UserCollectionList",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TraktUserListType::UserWatchList => "User Watch List",
            TraktUserListType::UserWatchedList => "User Watched List",
            TraktUserListType::UserCollectionList => "User Collection List",
        }
    }
}

impl Serialize for TraktUserListType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for TraktUserListType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_list_type(deserializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraktUserSettings {
    #[serde(flatten)]
    pub base: TraktSettingsBase,
    pub trakt_list_type: TraktUserListType,
    pub username: Option<String>,
}

impl TraktUserSettings {
    pub fn new(trakt_list_type: TraktUserListType) -> Self {
        Self {
            base: TraktSettingsBase::default(),
            trakt_list_type,
            username: None,
        }
    }

    /// Whose list to import: the explicit username, else the signed-in user
    pub fn effective_username(&self) -> Option<&str> {
        if is_present(self.username.as_deref()) {
            self.username.as_deref()
        } else if is_present(self.base.auth_user.as_deref()) {
            self.base.auth_user.as_deref()
        } else {
            None
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validator::validate(self, |_| {})
    }

    pub fn field_definitions(&self) -> Vec<FieldDefinition> {
        let mut fields = vec![
            FieldDefinition::new(1, constants::TRAKT_LIST_TYPE, "List Type")
                .help_text("Type of list you're seeking to import from")
                .select_options(TraktUserListType::select_options()),
            FieldDefinition::new(2, constants::USERNAME, "Username")
                .help_text("Username for the List to import from (empty to use Auth User)"),
        ];
        fields.extend(base_field_definitions(2));
        sort_fields(fields)
    }
}

impl TraktSettings for TraktUserSettings {
    fn base(&self) -> &TraktSettingsBase {
        &self.base
    }

    fn provider_name(&self) -> &'static str {
        "Trakt User"
    }
}

impl ProviderConfig for TraktUserSettings {
    fn validate(&self) -> ValidationResult {
        TraktUserSettings::validate(self)
    }

    fn field_definitions(&self) -> Vec<FieldDefinition> {
        TraktUserSettings::field_definitions(self)
    }
}
