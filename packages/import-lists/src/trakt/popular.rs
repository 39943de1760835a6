// ABOUTME: Settings for importing Trakt's curated movie charts
// ABOUTME: Chart selection plus the shared Trakt settings

use crate::constants;
use crate::trakt::list_type::{deserialize_list_type, ListType};
use crate::trakt::settings::{base_field_definitions, TraktSettings, TraktSettingsBase};
use crate::trakt::validator;
use marquee_core::{sort_fields, FieldDefinition, ProviderConfig, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraktPopularListType {
    Trending = 0,
    #[default]
    Popular = 1,
    Anticipated = 2,
    BoxOffice = 3,
    TopWatchedByWeek = 4,
    TopWatchedByMonth = 5,
    TopWatchedByYear = 6,
    TopWatchedByAllTime = 7,
    RecommendedByWeek = 8,
    RecommendedByMonth = 9,
    RecommendedByYear = 10,
    RecommendedByAllTime = 11,
}

impl ListType for TraktPopularListType {
    const ALL: &'static [Self] = &[
        TraktPopularListType::Trending,
        TraktPopularListType::Popular,
        TraktPopularListType::Anticipated,
        TraktPopularListType::BoxOffice,
        TraktPopularListType::TopWatchedByWeek,
        TraktPopularListType::TopWatchedByMonth,
        TraktPopularListType::TopWatchedByYear,
        TraktPopularListType::TopWatchedByAllTime,
        TraktPopularListType::RecommendedByWeek,
        TraktPopularListType::RecommendedByMonth,
        TraktPopularListType::RecommendedByYear,
        TraktPopularListType::RecommendedByAllTime,
    ];

    fn value(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            TraktPopularListType::Trending => "Trending",
            TraktPopularListType::Popular => "Popular",
            TraktPopularListType::Anticipated => "Anticipated",
            TraktPopularListType::BoxOffice => "BoxOffice",
            TraktPopularListType::TopWatchedByWeek => "TopWatchedByWeek",
            TraktPopularListType::TopWatchedByMonth => "TopWatchedByMonth",
            TraktPopularListType::TopWatchedByYear => "TopWatchedByYear",
            TraktPopularListType::TopWatchedByAllTime => "TopWatchedByAllTime",
            TraktPopularListType::RecommendedByWeek => "RecommendedByWeek",
            TraktPopularListType::RecommendedByMonth => "RecommendedByMonth",
            TraktPopularListType::RecommendedByYear => "RecommendedByYear",
            TraktPopularListType::RecommendedByAllTime => "RecommendedByAllTime",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TraktPopularListType::Trending => "Trending Movies",
            TraktPopularListType::Popular => "Popular Movies",
            TraktPopularListType::Anticipated => "Top Anticipated Movies",
            TraktPopularListType::BoxOffice => "Top Box Office Movies",
            TraktPopularListType::TopWatchedByWeek => "Top Watched Movies By Week",
            TraktPopularListType::TopWatchedByMonth => "Top Watched Movies By Month",
            TraktPopularListType::TopWatchedByYear => "Top Watched Movies By Year",
            TraktPopularListType::TopWatchedByAllTime => "Top Watched Movies Of All Time",
            TraktPopularListType::RecommendedByWeek => "Recommended Movies By Week",
            TraktPopularListType::RecommendedByMonth => "Recommended Movies By Month",
            TraktPopularListType::RecommendedByYear => "Recommended Movies By Year",
            TraktPopularListType::RecommendedByAllTime => "Recommended Movies Of All Time",
        }
    }
}

impl Serialize for TraktPopularListType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for TraktPopularListType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_list_type(deserializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraktPopularSettings {
    #[serde(flatten)]
    pub base: TraktSettingsBase,
    pub trakt_list_type: TraktPopularListType,
}

impl TraktPopularSettings {
    pub fn new(trakt_list_type: TraktPopularListType) -> Self {
        Self {
            base: TraktSettingsBase::default(),
            trakt_list_type,
        }
    }

    // Every list type is a valid chart, so only the shared rules apply.
    pub fn validate(&self) -> ValidationResult {
        validator::validate(self, |_| {})
    }

    pub fn field_definitions(&self) -> Vec<FieldDefinition> {
        let mut fields = vec![FieldDefinition::new(1, constants::TRAKT_LIST_TYPE, "List Type")
            .help_text("Type of list you're seeking to import from")
            .select_options(TraktPopularListType::select_options())];
        fields.extend(base_field_definitions(1));
        sort_fields(fields)
    }
}

impl TraktSettings for TraktPopularSettings {
    fn base(&self) -> &TraktSettingsBase {
        &self.base
    }

    fn provider_name(&self) -> &'static str {
        "Trakt Popular List"
    }
}

impl ProviderConfig for TraktPopularSettings {
    fn validate(&self) -> ValidationResult {
        TraktPopularSettings::validate(self)
    }

    fn field_definitions(&self) -> Vec<FieldDefinition> {
        TraktPopularSettings::field_definitions(self)
    }
}
