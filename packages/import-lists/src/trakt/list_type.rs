// ABOUTME: Numbered list-type choices shared by the Trakt select fields
// ABOUTME: Stored as the select value; variant names are accepted on input

use marquee_core::SelectOption;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// A select-field enum whose wire form is its option value
pub trait ListType: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn value(self) -> i32;

    /// Variant name, also accepted when parsing
    fn name(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_value(value: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.value() == value)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    fn select_options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|kind| SelectOption::new(kind.value(), kind.label()))
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListType {
    Value(i32),
    Name(String),
}

pub(crate) fn deserialize_list_type<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: ListType,
{
    match RawListType::deserialize(deserializer)? {
        RawListType::Value(value) => T::from_value(value)
            .ok_or_else(|| D::Error::custom(format!("unknown list type value {}", value))),
        RawListType::Name(name) => T::from_name(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown list type {:?}", name))),
    }
}
