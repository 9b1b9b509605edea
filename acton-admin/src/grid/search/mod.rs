//! Grid search filters
//!
//! A [`SearchItem`] describes one control in the search bar above an index
//! table, and turns the value the user submitted for it into a query
//! [`Condition`].
//!
//! # Examples
//!
//! ```rust
//! use acton_admin::grid::search::SearchItem;
//! use acton_admin::query::Operator;
//!
//! let status = SearchItem::not_in("status").label("Status");
//! assert_eq!(status.operator, Operator::NotIn);
//! assert_eq!(status.placeholder, "Select Status");
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Labels;
use crate::error::AdminError;
use crate::forms::{options_from, resolve_label, SelectOption};
use crate::query::{value_text, Condition, ConditionValue, Operator};

/// Default width of a search control, in pixels
pub const DEFAULT_WIDTH: u32 = 157;

/// One control of the grid search bar
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    /// Component rendered for the control
    pub component: String,
    /// Column searched
    pub name: String,
    /// Label text
    pub label: String,
    /// Comparison applied to the column
    pub operator: Operator,
    /// Placeholder text
    pub placeholder: String,
    /// Inline style
    pub style: Map<String, Value>,
    /// Options for select-like controls
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip)]
    placeholder_prefix: String,
    #[serde(skip)]
    custom_placeholder: bool,
}

impl SearchItem {
    fn build(component: &str, name: impl Into<String>, operator: Operator, prefix: &str) -> Self {
        let name = name.into();
        let label = name.clone();
        let mut style = Map::new();
        style.insert("width".to_string(), Value::from(DEFAULT_WIDTH));

        Self {
            component: component.to_string(),
            placeholder: format!("{prefix}{label}"),
            name,
            label,
            operator,
            style,
            options: Vec::new(),
            placeholder_prefix: prefix.to_string(),
            custom_placeholder: false,
        }
    }

    /// Exact match on the column, typed into a text input
    #[must_use]
    pub fn equal(name: impl Into<String>) -> Self {
        Self::build("input", name, Operator::Equal, &Labels::default().enter_prefix)
    }

    /// Substring match on the column, typed into a text input
    #[must_use]
    pub fn like(name: impl Into<String>) -> Self {
        Self::build("input", name, Operator::Like, &Labels::default().enter_prefix)
    }

    /// Column must be one of the selected options
    #[must_use]
    pub fn in_list(name: impl Into<String>) -> Self {
        Self::build("select", name, Operator::In, &Labels::default().select_prefix)
    }

    /// Column must be none of the entered values
    #[must_use]
    pub fn not_in(name: impl Into<String>) -> Self {
        Self::build("input", name, Operator::NotIn, &Labels::default().select_prefix)
    }

    /// Column must fall within the picked range
    #[must_use]
    pub fn between(name: impl Into<String>) -> Self {
        Self::build(
            "datetimeRange",
            name,
            Operator::Between,
            &Labels::default().select_prefix,
        )
    }

    /// Set the label (an empty label falls back to the name)
    ///
    /// The placeholder follows the label unless it was set explicitly.
    #[must_use]
    pub fn label(mut self, label: impl AsRef<str>) -> Self {
        self.label = resolve_label(&self.name, label.as_ref());
        if !self.custom_placeholder {
            self.placeholder = format!("{}{}", self.placeholder_prefix, self.label);
        }
        self
    }

    /// Set the placeholder text
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self.custom_placeholder = true;
        self
    }

    /// Set the control width (pixels as a number, or any CSS length)
    #[must_use]
    pub fn width(mut self, width: impl Into<Value>) -> Self {
        self.style.insert("width".to_string(), width.into());
        self
    }

    /// Set the options from a value → label mapping, keeping its order
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

    /// Re-apply the placeholder prefix from configured labels
    #[must_use]
    pub fn localized(mut self, labels: &Labels) -> Self {
        self.placeholder_prefix = match self.operator {
            Operator::Equal | Operator::Like => labels.enter_prefix.clone(),
            Operator::In | Operator::NotIn | Operator::Between => labels.select_prefix.clone(),
        };
        if !self.custom_placeholder {
            self.placeholder = format!("{}{}", self.placeholder_prefix, self.label);
        }
        self
    }

    /// Turn a submitted search value into a condition
    ///
    /// Blank values produce no condition. List operators accept a JSON
    /// array or a comma-separated string; `between` needs a two-element
    /// array.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::BadRequest`] when a range is malformed.
    pub fn condition(&self, value: &Value) -> Result<Option<Condition>, AdminError> {
        if crate::forms::validation::is_blank(value) {
            return Ok(None);
        }

        let value = match self.operator {
            Operator::Equal | Operator::Like => ConditionValue::Single(value_text(value)),
            Operator::In | Operator::NotIn => {
                let values = list_values(value);
                if values.is_empty() {
                    return Ok(None);
                }
                ConditionValue::List(values)
            }
            Operator::Between => match value.as_array().map(Vec::as_slice) {
                Some([low, high]) => ConditionValue::Range(value_text(low), value_text(high)),
                _ => {
                    return Err(AdminError::BadRequest(format!(
                        "search `{}` expects a [from, to] range",
                        self.name
                    )))
                }
            },
        };

        Ok(Some(Condition::new(&self.name, self.operator, value)))
    }
}

fn list_values(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|v| !crate::forms::validation::is_blank(v))
            .map(value_text)
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect(),
        other => vec![value_text(other)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_in_defaults() {
        let item = SearchItem::not_in("status");
        assert_eq!(item.component, "input");
        assert_eq!(item.name, "status");
        assert_eq!(item.label, "status");
        assert_eq!(item.operator, Operator::NotIn);
        assert_eq!(item.placeholder, "Select status");
        assert_eq!(item.style.get("width"), Some(&json!(157)));
    }

    #[test]
    fn test_label_updates_placeholder() {
        let item = SearchItem::not_in("status").label("Status");
        assert_eq!(item.label, "Status");
        assert_eq!(item.placeholder, "Select Status");

        let item = SearchItem::not_in("status").placeholder("Exclude").label("Status");
        assert_eq!(item.placeholder, "Exclude");

        let item = SearchItem::like("title").label("");
        assert_eq!(item.label, "title");
        assert_eq!(item.placeholder, "Enter title");
    }

    #[test]
    fn test_localized() {
        let labels = Labels {
            select_prefix: "请选择".into(),
            ..Labels::default()
        };
        let item = SearchItem::not_in("status").label("状态").localized(&labels);
        assert_eq!(item.placeholder, "请选择状态");
    }

    #[test]
    fn test_serialization() {
        let item = SearchItem::in_list("status").options([(1, "On"), (0, "Off")]);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "component": "select",
                "name": "status",
                "label": "status",
                "operator": "in",
                "placeholder": "Select status",
                "style": {"width": 157},
                "options": [{"label": "On", "value": 1}, {"label": "Off", "value": 0}],
            })
        );
    }

    #[test]
    fn test_condition_single() {
        let item = SearchItem::like("title");
        let condition = item.condition(&json!("rust")).unwrap().unwrap();
        assert_eq!(condition.operator, Operator::Like);
        assert_eq!(condition.value, ConditionValue::Single("rust".into()));

        assert!(item.condition(&json!("")).unwrap().is_none());
        assert!(item.condition(&Value::Null).unwrap().is_none());
    }

    #[test]
    fn test_condition_lists() {
        let item = SearchItem::not_in("status");
        let from_csv = item.condition(&json!("1, 2,,3")).unwrap().unwrap();
        assert_eq!(
            from_csv.value,
            ConditionValue::List(vec!["1".into(), "2".into(), "3".into()])
        );

        let from_array = item.condition(&json!([1, 2])).unwrap().unwrap();
        assert_eq!(
            from_array.value,
            ConditionValue::List(vec!["1".into(), "2".into()])
        );

        assert!(item.condition(&json!(" , ")).unwrap().is_none());
    }

    #[test]
    fn test_condition_range() {
        let item = SearchItem::between("created_at");
        let condition = item
            .condition(&json!(["2024-01-01", "2024-12-31"]))
            .unwrap()
            .unwrap();
        assert_eq!(
            condition.value,
            ConditionValue::Range("2024-01-01".into(), "2024-12-31".into())
        );

        assert!(matches!(
            item.condition(&json!(["2024-01-01"])),
            Err(AdminError::BadRequest(_))
        ));
    }
}
