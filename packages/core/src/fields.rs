// ABOUTME: Declarative field descriptors for provider settings forms
// ABOUTME: Plain data tables consumed by a generic configuration UI

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Input widget used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Textbox,
    Number,
    Select,
    #[serde(rename = "oAuth")]
    OAuth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HiddenType {
    #[default]
    Visible,
    Hidden,
}

/// One choice of a `FieldKind::Select` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: i32,
    pub name: String,
}

impl SelectOption {
    pub fn new(value: i32, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub order: i32,
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub hidden: HiddenType,
    pub advanced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub select_options: Vec<SelectOption>,
}

impl FieldDefinition {
    /// A visible textbox; use the builder methods to adjust the rest
    pub fn new(order: i32, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            order,
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Textbox,
            hidden: HiddenType::Visible,
            advanced: false,
            help_text: None,
            select_options: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = HiddenType::Hidden;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn select_options(mut self, options: Vec<SelectOption>) -> Self {
        self.kind = FieldKind::Select;
        self.select_options = options;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden == HiddenType::Hidden
    }
}

/// Stable sort by `order`, so fields sharing an order keep declaration order.
/// Duplicate names are logged; the table is still returned.
pub fn sort_fields(mut fields: Vec<FieldDefinition>) -> Vec<FieldDefinition> {
    let mut seen = HashSet::new();
    for field in &fields {
        if !seen.insert(field.name.as_str()) {
            tracing::warn!(field = %field.name, "Duplicate field name in settings table");
        }
    }

    fields.sort_by_key(|field| field.order);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults() {
        let field = FieldDefinition::new(1, "rating", "Rating");
        assert_eq!(field.kind, FieldKind::Textbox);
        assert_eq!(field.hidden, HiddenType::Visible);
        assert!(!field.advanced);
        assert!(field.help_text.is_none());
    }

    #[test]
    fn test_select_options_switch_kind() {
        let field = FieldDefinition::new(1, "listType", "List Type")
            .select_options(vec![SelectOption::new(0, "Trending"), SelectOption::new(1, "Popular")]);
        assert_eq!(field.kind, FieldKind::Select);
        assert_eq!(field.select_options.len(), 2);
    }

    #[test]
    fn test_sort_fields_is_stable() {
        let fields = vec![
            FieldDefinition::new(99, "signIn", "Sign In"),
            FieldDefinition::new(0, "accessToken", "Access Token").hidden(),
            FieldDefinition::new(1, "rating", "Rating"),
            FieldDefinition::new(0, "refreshToken", "Refresh Token").hidden(),
        ];

        let names: Vec<String> = sort_fields(fields).into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["accessToken", "refreshToken", "rating", "signIn"]);
    }

    #[test]
    fn test_serialization_shape() {
        let field = FieldDefinition::new(6, "traktAdditionalParameters", "Additional Parameters")
            .advanced()
            .help_text("Additional Trakt API parameters");

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "order": 6,
                "name": "traktAdditionalParameters",
                "label": "Additional Parameters",
                "kind": "textbox",
                "hidden": "visible",
                "advanced": true,
                "helpText": "Additional Trakt API parameters"
            })
        );
    }

    #[test]
    fn test_oauth_kind_name() {
        let json = serde_json::to_value(FieldKind::OAuth).unwrap();
        assert_eq!(json, serde_json::json!("oAuth"));
    }
}
