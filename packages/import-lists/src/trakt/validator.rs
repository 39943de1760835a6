// ABOUTME: Rule set shared by every Trakt import list
// ABOUTME: Every rule runs on each save so all field errors surface together

use crate::constants;
use crate::trakt::settings::TraktSettings;
use lazy_static::lazy_static;
use marquee_core::{is_present, validate_root_url, ValidationResult};
use regex::Regex;

pub const SIGN_IN_MESSAGE: &str = "Must authenticate with Trakt";
pub const RATING_MESSAGE: &str = "Not a valid rating";
pub const CERTIFICATION_MESSAGE: &str = "Not a valid certification";
pub const YEARS_MESSAGE: &str = "Not a valid year or range of years";
pub const LIMIT_MESSAGE: &str = "Must be integer greater than 0";

lazy_static! {
    static ref RATING_REGEX: Regex =
        Regex::new(r"(?i)^\d+-\d+$").expect("rating pattern is valid");

    // Only the first alternative is anchored to the start and only the last to
    // the end, so any single board token anywhere in the list passes.
    static ref CERTIFICATION_REGEX: Regex =
        Regex::new(r"(?i)^\bNR\b|\bG\b|\bPG\b|\bPG-13\b|\bR\b|\bNC-17\b$")
            .expect("certification pattern is valid");

    static ref YEARS_REGEX: Regex =
        Regex::new(r"(?i)^\d+(-\d+)?$").expect("years pattern is valid");
}

/// Run the shared rules followed by `extra_rules`, then log the outcome
pub fn validate<S, F>(settings: &S, extra_rules: F) -> ValidationResult
where
    S: TraktSettings + ?Sized,
    F: FnOnce(&mut ValidationResult),
{
    let mut result = ValidationResult::new();
    validate_base(settings, &mut result);
    extra_rules(&mut result);

    tracing::debug!(
        provider = settings.provider_name(),
        failures = result.errors().len(),
        "Validated import list settings"
    );

    result
}

/// Append a failure for every shared rule the settings break
pub fn validate_base<S>(settings: &S, result: &mut ValidationResult)
where
    S: TraktSettings + ?Sized,
{
    let base = settings.base();

    validate_root_url(constants::LINK, settings.link(), result);

    let has_access_token = is_present(base.access_token.as_deref());
    let has_refresh_token = is_present(base.refresh_token.as_deref());

    if !has_access_token {
        result.add_failure(constants::SIGN_IN, SIGN_IN_MESSAGE);
    }

    if has_access_token && !has_refresh_token {
        result.add_failure(constants::SIGN_IN, SIGN_IN_MESSAGE);
    }

    if has_access_token && has_refresh_token && !base.has_expiry() {
        result.add_failure(constants::SIGN_IN, SIGN_IN_MESSAGE);
    }

    if is_present(Some(base.rating.as_str())) && !RATING_REGEX.is_match(&base.rating) {
        result.add_failure(constants::RATING, RATING_MESSAGE);
    }

    if is_present(Some(base.certification.as_str()))
        && !CERTIFICATION_REGEX.is_match(&base.certification)
    {
        result.add_failure(constants::CERTIFICATION, CERTIFICATION_MESSAGE);
    }

    if is_present(Some(base.years.as_str())) && !YEARS_REGEX.is_match(&base.years) {
        result.add_failure(constants::YEARS, YEARS_MESSAGE);
    }

    if base.limit <= 0 {
        result.add_failure(constants::LIMIT, LIMIT_MESSAGE);
    }
}
