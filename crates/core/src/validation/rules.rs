//! Rule-set and result types.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// A submitted form: field name to JSON value. `null` counts as absent.
pub type Record = serde_json::Map<String, Value>;

/// Field-specific check run after the built-in rules pass.
///
/// Receives the field's value and the whole record; returns `Some(message)`
/// to reject the field.
pub type CustomCheck = fn(&Value, &Record) -> Option<String>;

/// A regular expression that only accepts a full match of its input.
#[derive(Debug, Clone)]
pub struct FullMatch {
    source: String,
    regex: Regex,
}

impl FullMatch {
    /// Compile `source`, anchoring it at both ends.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The expression as written, without the added anchors.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// The validation rules for one field of a schema.
#[derive(Clone)]
pub struct FieldRules {
    pub field: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<FullMatch>,
    pub custom: Option<CustomCheck>,
}

impl FieldRules {
    /// An optional field with no checks.
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            required: false,
            min_length: None,
            pattern: None,
            custom: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn pattern(mut self, pattern: FullMatch) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn custom(mut self, check: CustomCheck) -> Self {
        self.custom = Some(check);
        self
    }

    /// Serializable summary of these rules, for clients rendering hints.
    pub fn describe(&self) -> FieldDescription {
        FieldDescription {
            field: self.field,
            required: self.required,
            min_length: self.min_length,
            pattern: self.pattern.as_ref().map(|p| p.source().to_string()),
            has_custom: self.custom.is_some(),
        }
    }
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("field", &self.field)
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("pattern", &self.pattern.as_ref().map(FullMatch::source))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

/// Outcome of validating one record against one schema.
///
/// `is_valid` is always `errors.is_empty()`; build it with
/// [`ValidationResult::from_errors`] to keep the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert a failed result into [`CoreError::Validation`].
    ///
    /// The error message lists every `field: message` pair in field order.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_valid {
            return Ok(());
        }
        let joined = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        Err(CoreError::Validation(joined))
    }
}

/// Client-facing view of a [`FieldRules`].
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescription {
    pub field: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub has_custom: bool,
}

/// Client-facing view of a whole form schema.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaDescription {
    pub name: &'static str,
    pub fields: Vec<FieldDescription>,
}
