//! Submission validation
//!
//! Fields carry [`Rule`]s; [`validate`] checks a submitted record against
//! the fields of the creation or update form and collects every failure
//! into [`ValidationErrors`].

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use validator::{ValidateEmail, ValidateUrl};

use super::field::Field;
use super::item::FieldContext;
use crate::query::value_text;

/// A validation rule attached to a field
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be present and non-blank
    Required,
    /// Minimum length in characters
    MinLength(usize),
    /// Maximum length in characters
    MaxLength(usize),
    /// Value must be an email address
    Email,
    /// Value must be a URL
    Url,
    /// Value must be a number or a numeric string
    Numeric,
    /// Value must match the regular expression
    Pattern(Regex),
}

impl Rule {
    /// Build a pattern rule
    ///
    /// # Errors
    ///
    /// Returns the regex compile error for an invalid pattern.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Pattern)
    }

    /// Machine-readable code for the rule
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::Email => "email",
            Self::Url => "url",
            Self::Numeric => "numeric",
            Self::Pattern(_) => "pattern",
        }
    }

    /// Check a value, returning the error message on failure
    ///
    /// Blank values pass every rule except [`Rule::Required`].
    #[must_use]
    pub fn check(&self, label: &str, value: Option<&Value>) -> Option<String> {
        let blank = value.is_none_or(is_blank);
        if blank {
            return matches!(self, Self::Required).then(|| format!("{label} is required"));
        }

        let text = value.map(value_text).unwrap_or_default();
        let passed = match self {
            Self::Required => true,
            Self::MinLength(min) => text.chars().count() >= *min,
            Self::MaxLength(max) => text.chars().count() <= *max,
            Self::Email => text.validate_email(),
            Self::Url => text.validate_url(),
            Self::Numeric => {
                matches!(value, Some(Value::Number(_))) || text.trim().parse::<f64>().is_ok()
            }
            Self::Pattern(regex) => regex.is_match(&text),
        };

        if passed {
            return None;
        }

        Some(match self {
            Self::Required => format!("{label} is required"),
            Self::MinLength(min) => format!("{label} must be at least {min} characters"),
            Self::MaxLength(max) => format!("{label} must be at most {max} characters"),
            Self::Email => format!("{label} must be a valid email address"),
            Self::Url => format!("{label} must be a valid URL"),
            Self::Numeric => format!("{label} must be a number"),
            Self::Pattern(_) => format!("{label} has an invalid format"),
        })
    }
}

/// Whether a submitted value counts as empty
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// A single validation error for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The error message
    pub message: String,
    /// Code of the rule that failed
    pub code: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Collection of validation errors keyed by field name
///
/// # Examples
///
/// ```rust
/// use acton_admin::forms::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("email", "email is required", "required");
/// errors.add("password", "password must be at least 8 characters", "min_length");
///
/// assert!(errors.has_errors());
/// assert_eq!(errors.for_field("email").len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    /// Create a new empty error collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error for a field
    pub fn add(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(FieldError {
                message: message.into(),
                code: code.into(),
            });
    }

    /// Check if there are any errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if a specific field has errors
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get all errors for a specific field
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[FieldError] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Get the total number of errors
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .errors
            .values()
            .flatten()
            .map(|e| e.message.as_str())
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Validate a submission against the fields of a form
///
/// # Errors
///
/// Returns every failed rule, grouped by field name.
pub fn validate(
    fields: &[Field],
    data: &Map<String, Value>,
    context: FieldContext,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for field in fields {
        let item = &field.item;
        let value = data.get(&item.name);
        for rule in item.rules_for(context) {
            if let Some(message) = rule.check(&item.label, value) {
                errors.add(&item.name, message, rule.code());
            }
        }
    }

    if errors.has_errors() {
        Err(errors)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Text;
    use serde_json::json;

    #[test]
    fn test_required() {
        assert!(Rule::Required.check("Title", None).is_some());
        assert!(Rule::Required.check("Title", Some(&json!("  "))).is_some());
        assert!(Rule::Required.check("Title", Some(&json!("x"))).is_none());
        assert!(Rule::Required.check("Count", Some(&json!(0))).is_none());
    }

    #[test]
    fn test_blank_values_skip_other_rules() {
        assert!(Rule::Email.check("Email", None).is_none());
        assert!(Rule::MinLength(3).check("Name", Some(&json!(""))).is_none());
    }

    #[test]
    fn test_lengths_count_characters() {
        assert!(Rule::MaxLength(2).check("Name", Some(&json!("文章"))).is_none());
        assert_eq!(
            Rule::MinLength(3).check("Name", Some(&json!("ab"))).as_deref(),
            Some("Name must be at least 3 characters")
        );
    }

    #[test]
    fn test_email_and_url() {
        assert!(Rule::Email.check("Email", Some(&json!("a@example.com"))).is_none());
        assert!(Rule::Email.check("Email", Some(&json!("nope"))).is_some());
        assert!(Rule::Url.check("Site", Some(&json!("https://example.com"))).is_none());
        assert!(Rule::Url.check("Site", Some(&json!("not a url"))).is_some());
    }

    #[test]
    fn test_numeric() {
        assert!(Rule::Numeric.check("Sort", Some(&json!(3))).is_none());
        assert!(Rule::Numeric.check("Sort", Some(&json!("3.5"))).is_none());
        assert!(Rule::Numeric.check("Sort", Some(&json!("three"))).is_some());
    }

    #[test]
    fn test_pattern() {
        let rule = Rule::pattern(r"^[a-z-]+$").unwrap();
        assert!(rule.check("Slug", Some(&json!("hello-world"))).is_none());
        assert!(rule.check("Slug", Some(&json!("Hello World"))).is_some());
        assert!(Rule::pattern("(").is_err());
    }

    #[test]
    fn test_validate_collects_per_field() {
        let fields: Vec<Field> = vec![
            Text::labeled("title", "Title")
                .rules([Rule::Required, Rule::MaxLength(5)])
                .into(),
            Text::new("email").creation_rules([Rule::Email]).into(),
        ];

        let mut data = Map::new();
        data.insert("title".into(), json!("too long title"));
        data.insert("email".into(), json!("bad"));

        let errors = validate(&fields, &data, FieldContext::Creation).unwrap_err();
        assert_eq!(errors.count(), 2);
        assert_eq!(errors.for_field("title")[0].code, "max_length");
        assert!(errors.has_field_error("email"));

        // creation-only rule does not apply on update
        let errors = validate(&fields, &data, FieldContext::Update).unwrap_err();
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn test_validate_ok() {
        let fields: Vec<Field> = vec![Text::new("title").rules([Rule::Required]).into()];
        let mut data = Map::new();
        data.insert("title".into(), json!("Hello"));
        assert!(validate(&fields, &data, FieldContext::Creation).is_ok());
    }
}
