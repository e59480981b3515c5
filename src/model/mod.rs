//! # Form Model
//!
//! The input representation for the engine: a form configuration holding an
//! ordered list of field descriptors. This is exactly what the admin form
//! builder produces, already validated, and the engine never mutates it.
//!
//! Field types form a closed set. A tag the engine doesn't know about is kept
//! as [`FieldType::Other`] rather than rejected, so a form authored against a
//! newer builder still renders (as a generic text box).

use serde::{Deserialize, Serialize};

use crate::error::{PaperFormError, Result};

/// Options substituted for a choice field authored with none.
pub const DEFAULT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// A complete form ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Identifier printed in the footer so scans can be matched to the form.
    pub form_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The fields, in the order they should appear on paper.
    pub fields: Vec<FieldDescriptor>,
    /// Public URL of the online version. Carried through, never drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    /// Base64 QR code image. Carried through, never drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

impl FormConfig {
    /// Parse and validate a form from JSON.
    ///
    /// Structural problems (root not an object, `fields` missing or not an
    /// array) are reported as [`PaperFormError::InvalidForm`] before serde
    /// gets a chance to produce a less obvious message.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let root = value
            .as_object()
            .ok_or_else(|| PaperFormError::InvalidForm("form must be a JSON object".to_string()))?;
        match root.get("fields") {
            Some(serde_json::Value::Array(_)) => {}
            Some(_) => {
                return Err(PaperFormError::InvalidForm(
                    "`fields` must be an array".to_string(),
                ))
            }
            None => {
                return Err(PaperFormError::InvalidForm(
                    "missing `fields` array".to_string(),
                ))
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// A single authored form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Choices for select, radio and checkbox fields. Ignored elsewhere.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldDescriptor {
    pub fn new(id: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field_type,
            required: false,
            options: vec![],
            placeholder: None,
        }
    }

    /// Builder-style helper for choice fields.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The label as printed: required fields get a trailing asterisk.
    pub fn label_text(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }

    /// True when a choice field was authored without options.
    pub fn has_missing_options(&self) -> bool {
        self.field_type.is_choice() && self.options.is_empty()
    }

    /// The options to lay out, substituting [`DEFAULT_OPTIONS`] when a choice
    /// field has none so the control is never drawn empty.
    pub fn effective_options(&self) -> Vec<&str> {
        if self.options.is_empty() {
            DEFAULT_OPTIONS.to_vec()
        } else {
            self.options.iter().map(String::as_str).collect()
        }
    }
}

/// The kind of input a field collects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Email,
    Phone,
    Url,
    Date,
    Boolean,
    Select,
    Radio,
    Checkbox,
    File,
    /// A tag this engine doesn't recognize, kept verbatim for diagnostics.
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Url => "url",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::File => "file",
            FieldType::Other(tag) => tag.as_str(),
        }
    }

    /// Select, radio and checkbox: fields that render a row of options.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }

    /// Types that span both columns. Textarea is the only one; any addition
    /// must be listed here explicitly.
    pub fn is_full_width(&self) -> bool {
        matches!(self, FieldType::Textarea)
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => FieldType::Text,
            "textarea" => FieldType::Textarea,
            "number" => FieldType::Number,
            "email" => FieldType::Email,
            "phone" => FieldType::Phone,
            "url" => FieldType::Url,
            "date" => FieldType::Date,
            "boolean" => FieldType::Boolean,
            "select" => FieldType::Select,
            "radio" => FieldType::Radio,
            "checkbox" => FieldType::Checkbox,
            "file" => FieldType::File,
            _ => FieldType::Other(tag),
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_form() {
        let json = r#"{
            "formId": "f-1",
            "title": "Sign Up",
            "publicUrl": "https://example.org/f/1",
            "fields": [
                { "id": "a", "label": "Name", "type": "text", "required": true },
                { "id": "b", "label": "Color", "type": "radio", "options": ["Red", "Blue"] }
            ]
        }"#;
        let form = FormConfig::from_json(json).unwrap();
        assert_eq!(form.form_id, "f-1");
        assert_eq!(form.fields.len(), 2);
        assert_eq!(form.fields[0].field_type, FieldType::Text);
        assert!(form.fields[0].required);
        assert_eq!(form.fields[1].options, vec!["Red", "Blue"]);
        assert_eq!(form.public_url.as_deref(), Some("https://example.org/f/1"));
    }

    #[test]
    fn unknown_type_is_kept() {
        let json = r#"{ "id": "x", "label": "Sig", "type": "signature" }"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.field_type, FieldType::Other("signature".to_string()));
        assert!(!field.required);
    }

    #[test]
    fn field_type_round_trips_as_tag() {
        let json = serde_json::to_string(&FieldType::Checkbox).unwrap();
        assert_eq!(json, "\"checkbox\"");
    }

    #[test]
    fn missing_fields_is_invalid_form() {
        let err = FormConfig::from_json(r#"{ "formId": "f", "title": "T" }"#).unwrap_err();
        assert!(matches!(err, PaperFormError::InvalidForm(_)));
        assert!(err.to_string().contains("fields"));
    }

    #[test]
    fn non_array_fields_is_invalid_form() {
        let err =
            FormConfig::from_json(r#"{ "formId": "f", "title": "T", "fields": {} }"#).unwrap_err();
        assert!(matches!(err, PaperFormError::InvalidForm(_)));
    }

    #[test]
    fn non_object_root_is_invalid_form() {
        let err = FormConfig::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, PaperFormError::InvalidForm(_)));
    }

    #[test]
    fn bad_field_is_parse_error() {
        let json = r#"{ "formId": "f", "title": "T", "fields": [ { "id": "a" } ] }"#;
        let err = FormConfig::from_json(json).unwrap_err();
        assert!(matches!(err, PaperFormError::ParseError { .. }));
    }

    #[test]
    fn required_label_gets_asterisk() {
        let f = FieldDescriptor::new("n", "Name", FieldType::Text).required();
        assert_eq!(f.label_text(), "Name *");
    }

    #[test]
    fn empty_choice_gets_default_options() {
        let f = FieldDescriptor::new("c", "Pick", FieldType::Radio);
        assert!(f.has_missing_options());
        assert_eq!(f.effective_options(), vec!["Option 1", "Option 2"]);

        let g = f.clone().with_options(["A"]);
        assert!(!g.has_missing_options());
        assert_eq!(g.effective_options(), vec!["A"]);
    }

    #[test]
    fn only_textarea_is_full_width() {
        assert!(FieldType::Textarea.is_full_width());
        assert!(!FieldType::Text.is_full_width());
        assert!(!FieldType::Other("wide".to_string()).is_full_width());
    }
}
