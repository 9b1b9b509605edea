//! Resource-level filters
//!
//! Unlike search bar controls, filters are free to reshape the whole
//! query. Their values arrive in the `filter` JSON parameter, keyed by
//! [`QueryFilter::key`].

use serde_json::Value;

use super::request::AdminRequest;
use crate::error::AdminError;
use crate::forms::{options_from, SelectOption};
use crate::query::{value_text, Condition, ConditionValue, IndexQuery, Operator};

/// Applies a submitted value to the index query
pub trait QueryFilter: Send + Sync {
    /// Key of the value in the `filter` parameter
    fn key(&self) -> &str;

    /// Text shown next to the filter
    fn name(&self) -> &str;

    /// Choices offered to the user
    fn options(&self) -> Vec<SelectOption> {
        Vec::new()
    }

    /// Narrow the query with the submitted value
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::BadRequest`] when the value cannot be applied.
    fn apply(
        &self,
        request: &AdminRequest,
        query: IndexQuery,
        value: &Value,
    ) -> Result<IndexQuery, AdminError>;
}

/// Exact match on one column, picked from fixed options
///
/// ```rust
/// use acton_admin::resource::SelectFilter;
///
/// let status = SelectFilter::new("status", "Status").options([(1, "Published"), (0, "Draft")]);
/// ```
#[derive(Debug, Clone)]
pub struct SelectFilter {
    column: String,
    name: String,
    options: Vec<SelectOption>,
}

impl SelectFilter {
    /// Filter on `column`
    #[must_use]
    pub fn new(column: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Set the choices from a value → label mapping
    #[must_use]
    pub fn options<I, K, L>(mut self, mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<Value>,
        L: Into<String>,
    {
        self.options = options_from(mapping);
        self
    }
}

impl QueryFilter for SelectFilter {
    fn key(&self) -> &str {
        &self.column
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> Vec<SelectOption> {
        self.options.clone()
    }

    fn apply(
        &self,
        _request: &AdminRequest,
        query: IndexQuery,
        value: &Value,
    ) -> Result<IndexQuery, AdminError> {
        if crate::forms::validation::is_blank(value) {
            return Ok(query);
        }
        let text = value_text(value);
        if !self.options.is_empty() && !self.options.iter().any(|o| value_text(&o.value) == text) {
            return Err(AdminError::BadRequest(format!(
                "`{value}` is not an option of filter `{}`",
                self.column
            )));
        }
        Ok(query.condition(Condition::new(
            &self.column,
            Operator::Equal,
            ConditionValue::Single(text),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_filter_applies_equal() {
        let filter = SelectFilter::new("status", "Status").options([(1, "On"), (0, "Off")]);
        let request = AdminRequest::new("x");

        let query = filter.apply(&request, IndexQuery::new(), &json!(1)).unwrap();
        assert_eq!(query.conditions.len(), 1);
        assert_eq!(query.conditions[0].value, ConditionValue::Single("1".into()));

        let untouched = filter.apply(&request, IndexQuery::new(), &json!("")).unwrap();
        assert!(untouched.conditions.is_empty());
    }

    #[test]
    fn test_select_filter_rejects_unknown_option() {
        let filter = SelectFilter::new("status", "Status").options([(1, "On")]);
        let result = filter.apply(&AdminRequest::new("x"), IndexQuery::new(), &json!(7));
        assert!(matches!(result, Err(AdminError::BadRequest(_))));
    }

    #[test]
    fn test_select_filter_accepts_text_form_of_option() {
        let filter = SelectFilter::new("status", "Status").options([(1, "On"), (0, "Off")]);
        let query = filter
            .apply(&AdminRequest::new("x"), IndexQuery::new(), &json!("1"))
            .unwrap();
        assert_eq!(query.conditions[0].value, ConditionValue::Single("1".into()));
    }
}
