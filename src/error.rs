//! Structured error types for the paper-form engine.
//!
//! Only three things can actually fail: parsing the JSON input, a form whose
//! shape is structurally wrong, and writing the finished file to disk.
//! Everything that happens during layout and rendering degrades to a
//! [`LayoutWarning`](crate::layout::LayoutWarning) instead.

use thiserror::Error;

/// The unified error type returned by all public API functions.
#[derive(Debug, Error)]
pub enum PaperFormError {
    /// JSON input failed to parse as a valid form configuration.
    #[error("Failed to parse form: {source}{}", format_hint(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// The form configuration is structurally invalid (e.g. no `fields` array).
    #[error("Invalid form: {0}")]
    InvalidForm(String),
    /// The finished PDF could not be written to disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for PaperFormError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the form schema. \
                 Check field names and types."
                    .to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        PaperFormError::ParseError { source: e, hint }
    }
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PaperFormError>;
