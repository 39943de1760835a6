// ABOUTME: Shared settings record for every Trakt import list
// ABOUTME: OAuth tokens, movie filters, and the base form table

use crate::constants::{
    self, DEFAULT_CERTIFICATION, DEFAULT_LIMIT, DEFAULT_RATING, SIGN_IN_ACTION, TRAKT_API_URL,
};
use crate::error::ImportListResult;
use crate::trakt::validator;
use chrono::{DateTime, Datelike, Utc};
use marquee_core::{
    is_present, parse_root_url, FieldDefinition, FieldKind, ProviderConfig, Url, ValidationResult,
};
use serde::{Deserialize, Serialize};

/// Read access to the fields every Trakt provider shares.
///
/// The base rule set is written once against this trait; concrete providers
/// implement it by handing out their embedded [`TraktSettingsBase`].
pub trait TraktSettings {
    fn base(&self) -> &TraktSettingsBase;

    /// Name used in logs
    fn provider_name(&self) -> &'static str;

    fn link(&self) -> &str {
        TRAKT_API_URL
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraktSettingsBase {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires: Option<DateTime<Utc>>,
    pub auth_user: Option<String>,
    pub rating: String,
    pub certification: String,
    pub genres: String,
    pub years: String,
    pub limit: i32,
    #[serde(rename = "traktAdditionalParameters")]
    pub additional_parameters: Option<String>,
    pub sign_in: String,
}

impl Default for TraktSettingsBase {
    fn default() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            expires: None,
            auth_user: None,
            rating: DEFAULT_RATING.to_string(),
            certification: DEFAULT_CERTIFICATION.to_string(),
            genres: String::new(),
            years: String::new(),
            limit: DEFAULT_LIMIT,
            additional_parameters: None,
            sign_in: SIGN_IN_ACTION.to_string(),
        }
    }
}

impl TraktSettingsBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both tokens present and an expiry recorded
    pub fn is_authenticated(&self) -> bool {
        is_present(self.access_token.as_deref())
            && is_present(self.refresh_token.as_deref())
            && self.has_expiry()
    }

    /// The settings UI sends `0001-01-01T00:00:00Z` before any sign-in, so
    /// anything at or before year 1 counts as unset.
    pub fn has_expiry(&self) -> bool {
        self.expires.is_some_and(|expires| expires.year() > 1)
    }

    /// Store the outcome of a completed OAuth sign-in
    pub fn set_tokens(
        &mut self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires: DateTime<Utc>,
    ) {
        self.access_token = Some(access_token.into());
        self.refresh_token = Some(refresh_token.into());
        self.expires = Some(expires);
    }

    /// Parsed API root for request builders
    pub fn api_url(&self) -> ImportListResult<Url> {
        Ok(parse_root_url(self.link())?)
    }

    pub fn validate(&self) -> ValidationResult {
        validator::validate(self, |_| {})
    }

    pub fn field_definitions(&self) -> Vec<FieldDefinition> {
        base_field_definitions(0)
    }
}

impl TraktSettings for TraktSettingsBase {
    fn base(&self) -> &TraktSettingsBase {
        self
    }

    fn provider_name(&self) -> &'static str {
        "Trakt"
    }
}

impl ProviderConfig for TraktSettingsBase {
    fn validate(&self) -> ValidationResult {
        TraktSettingsBase::validate(self)
    }

    fn field_definitions(&self) -> Vec<FieldDefinition> {
        TraktSettingsBase::field_definitions(self)
    }
}

/// Base form table. `offset` pushes the filter fields down so a provider can
/// slot its own fields in front of them; hidden token fields and the sign-in
/// button keep their positions.
pub(crate) fn base_field_definitions(offset: i32) -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new(0, constants::ACCESS_TOKEN, "Access Token").hidden(),
        FieldDefinition::new(0, constants::REFRESH_TOKEN, "Refresh Token").hidden(),
        FieldDefinition::new(0, constants::EXPIRES, "Expires").hidden(),
        FieldDefinition::new(0, constants::AUTH_USER, "Auth User").hidden(),
        FieldDefinition::new(1 + offset, constants::RATING, "Rating")
            .help_text("Filter movies by rating range (0-100)"),
        FieldDefinition::new(2 + offset, constants::CERTIFICATION, "Certification").help_text(
            "Filter movies by a certification (NR,G,PG,PG-13,R,NC-17), (Comma Separated)",
        ),
        FieldDefinition::new(3 + offset, constants::GENRES, "Genres").help_text(
            "Filter movies by Trakt Genre Slug (Comma Separated) Only for Popular Lists",
        ),
        FieldDefinition::new(4 + offset, constants::YEARS, "Years")
            .help_text("Filter movies by year or year range"),
        FieldDefinition::new(5 + offset, constants::LIMIT, "Limit")
            .kind(FieldKind::Number)
            .help_text("Limit the number of movies to get"),
        FieldDefinition::new(
            6 + offset,
            constants::ADDITIONAL_PARAMETERS,
            "Additional Parameters",
        )
        .advanced()
        .help_text("Additional Trakt API parameters"),
        FieldDefinition::new(99, constants::SIGN_IN, "Authenticate with Trakt")
            .kind(FieldKind::OAuth),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::HiddenType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = TraktSettingsBase::new();

        assert_eq!(settings.rating, "0-100");
        assert_eq!(settings.certification, "NR,G,PG,PG-13,R,NC-17");
        assert_eq!(settings.genres, "");
        assert_eq!(settings.years, "");
        assert_eq!(settings.limit, 100);
        assert_eq!(settings.sign_in, "startOAuth");
        assert!(settings.access_token.is_none());
        assert!(settings.expires.is_none());
        assert_eq!(settings.link(), "https://api.trakt.tv");
    }

    #[test]
    fn test_is_authenticated() {
        let mut settings = TraktSettingsBase::new();
        assert!(!settings.is_authenticated());

        settings.access_token = Some("access".to_string());
        settings.refresh_token = Some("refresh".to_string());
        assert!(!settings.is_authenticated());

        settings.expires = Some(Utc::now());
        assert!(settings.is_authenticated());

        settings.refresh_token = Some("  ".to_string());
        assert!(!settings.is_authenticated());
    }

    #[test]
    fn test_placeholder_expiry_is_unset() {
        let mut settings = TraktSettingsBase::new();
        settings.access_token = Some("access".to_string());
        settings.refresh_token = Some("refresh".to_string());

        settings.expires = Some("0001-01-01T00:00:00Z".parse().unwrap());
        assert!(!settings.has_expiry());
        assert!(!settings.is_authenticated());

        settings.expires = Some(DateTime::<Utc>::MIN_UTC);
        assert!(!settings.has_expiry());

        settings.expires = Some("2030-06-01T12:00:00Z".parse().unwrap());
        assert!(settings.has_expiry());
        assert!(settings.is_authenticated());
    }

    #[test]
    fn test_set_tokens() {
        let mut settings = TraktSettingsBase::new();
        let expires = Utc::now();
        settings.set_tokens("access", "refresh", expires);

        assert_eq!(settings.access_token.as_deref(), Some("access"));
        assert_eq!(settings.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(settings.expires, Some(expires));
    }

    #[test]
    fn test_api_url() {
        let url = TraktSettingsBase::new().api_url().unwrap();
        assert_eq!(url.host_str(), Some("api.trakt.tv"));
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_base_field_table() {
        let fields = TraktSettingsBase::new().field_definitions();
        assert_eq!(fields.len(), 11);

        let hidden: Vec<&str> = fields
            .iter()
            .filter(|f| f.is_hidden())
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(
            hidden,
            vec!["accessToken", "refreshToken", "expires", "authUser"]
        );

        let sign_in = fields.iter().find(|f| f.name == "signIn").unwrap();
        assert_eq!(sign_in.order, 99);
        assert_eq!(sign_in.kind, FieldKind::OAuth);
        assert_eq!(sign_in.hidden, HiddenType::Visible);

        let extra = fields
            .iter()
            .find(|f| f.name == "traktAdditionalParameters")
            .unwrap();
        assert!(extra.advanced);
        assert_eq!(extra.order, 6);
    }

    #[test]
    fn test_offset_moves_only_filter_fields() {
        let fields = base_field_definitions(2);
        let order_of = |name: &str| fields.iter().find(|f| f.name == name).unwrap().order;

        assert_eq!(order_of("accessToken"), 0);
        assert_eq!(order_of("rating"), 3);
        assert_eq!(order_of("traktAdditionalParameters"), 8);
        assert_eq!(order_of("signIn"), 99);
    }
}
