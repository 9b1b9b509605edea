//! Attributes shared by every form field
//!
//! Each concrete field builder wraps a [`FormItem`] and exposes the common
//! setters through [`form_item_setters!`], so `Datetime`, `Icon`, `Search`
//! and the basic inputs all chain the same way.

use serde::Serialize;
use serde_json::{Map, Value};

use super::validation::Rule;

/// Page a field is being resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldContext {
    /// Index (list) page columns
    Index,
    /// Creation form
    Creation,
    /// Update form
    Update,
}

/// Which pages a field appears on
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Shown as an index column
    pub index: bool,
    /// Shown on the creation form
    pub creation: bool,
    /// Shown on the update form
    pub update: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            index: true,
            creation: true,
            update: true,
        }
    }
}

impl Visibility {
    /// Whether the field is visible in the given context
    #[must_use]
    pub const fn shows(&self, context: FieldContext) -> bool {
        match context {
            FieldContext::Index => self.index,
            FieldContext::Creation => self.creation,
            FieldContext::Update => self.update,
        }
    }
}

/// Option for select-like components
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Display text
    pub label: String,
    /// Submitted value
    pub value: Value,
}

impl SelectOption {
    /// Create a new select option
    #[must_use]
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Convert a value → label mapping into `{label, value}` options
///
/// Iteration order of the mapping is preserved, so pass a `Vec` of pairs,
/// an array, or any other ordered collection.
///
/// ```rust
/// use acton_admin::forms::options_from;
///
/// let options = options_from([(1, "Draft"), (2, "Published")]);
/// assert_eq!(options[1].label, "Published");
/// assert_eq!(options[1].value, 2);
/// ```
pub fn options_from<I, K, L>(mapping: I) -> Vec<SelectOption>
where
    I: IntoIterator<Item = (K, L)>,
    K: Into<Value>,
    L: Into<String>,
{
    mapping
        .into_iter()
        .map(|(value, label)| SelectOption::new(value, label))
        .collect()
}

/// Label to display for a field: the given label, or the name when empty
#[must_use]
pub fn resolve_label(name: &str, label: &str) -> String {
    if label.is_empty() {
        name.to_string()
    } else {
        label.to_string()
    }
}

/// Common attributes of a form field
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormItem {
    /// Field name (submission key)
    pub name: String,
    /// Label text
    pub label: String,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Value used when nothing has been entered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Inline style of the input
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub style: Map<String, Value>,
    /// Help text shown below the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Rules checked on every submission
    #[serde(skip)]
    pub rules: Vec<Rule>,
    /// Rules checked only when creating
    #[serde(skip)]
    pub creation_rules: Vec<Rule>,
    /// Rules checked only when updating
    #[serde(skip)]
    pub update_rules: Vec<Rule>,
    /// Pages the field appears on
    #[serde(skip)]
    pub visibility: Visibility,
}

impl FormItem {
    /// Create an item whose label falls back to `name` when `label` is empty
    #[must_use]
    pub fn new(name: impl Into<String>, label: &str) -> Self {
        let name = name.into();
        let label = resolve_label(&name, label);
        Self {
            name,
            label,
            placeholder: None,
            value: None,
            default_value: None,
            style: Map::new(),
            help: None,
            rules: Vec::new(),
            creation_rules: Vec::new(),
            update_rules: Vec::new(),
            visibility: Visibility::default(),
        }
    }

    /// Replace the label (empty resets it to the name)
    pub fn set_label(&mut self, label: &str) {
        self.label = resolve_label(&self.name, label);
    }

    /// Set the `width` style entry
    pub fn set_width(&mut self, width: Value) {
        self.style.insert("width".to_string(), width);
    }

    /// Rules that apply to a submission in the given context
    pub fn rules_for(&self, context: FieldContext) -> impl Iterator<Item = &Rule> {
        let extra: &[Rule] = match context {
            FieldContext::Creation => &self.creation_rules,
            FieldContext::Update => &self.update_rules,
            FieldContext::Index => &[],
        };
        self.rules.iter().chain(extra)
    }
}

/// Implements the setters every field builder shares
///
/// The builder must have an `item: FormItem` field.
macro_rules! form_item_setters {
    () => {
        /// Set the label (an empty label falls back to the field name)
        #[must_use]
        pub fn label(mut self, label: impl AsRef<str>) -> Self {
            self.item.set_label(label.as_ref());
            self
        }

        /// Set the placeholder text
        #[must_use]
        pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
            self.item.placeholder = Some(placeholder.into());
            self
        }

        /// Set the current value
        #[must_use]
        pub fn value(mut self, value: impl Into<serde_json::Value>) -> Self {
            self.item.value = Some(value.into());
            self
        }

        /// Set the value used when nothing has been entered
        #[must_use]
        pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
            self.item.default_value = Some(value.into());
            self
        }

        /// Replace the inline style
        #[must_use]
        pub fn style(mut self, style: serde_json::Map<String, serde_json::Value>) -> Self {
            self.item.style = style;
            self
        }

        /// Set the input width (pixels as a number, or any CSS length)
        #[must_use]
        pub fn width(mut self, width: impl Into<serde_json::Value>) -> Self {
            self.item.set_width(width.into());
            self
        }

        /// Set the help text
        #[must_use]
        pub fn help(mut self, help: impl Into<String>) -> Self {
            self.item.help = Some(help.into());
            self
        }

        /// Rules checked on every submission
        #[must_use]
        pub fn rules(mut self, rules: impl IntoIterator<Item = $crate::forms::Rule>) -> Self {
            self.item.rules.extend(rules);
            self
        }

        /// Rules checked only when creating
        #[must_use]
        pub fn creation_rules(
            mut self,
            rules: impl IntoIterator<Item = $crate::forms::Rule>,
        ) -> Self {
            self.item.creation_rules.extend(rules);
            self
        }

        /// Rules checked only when updating
        #[must_use]
        pub fn update_rules(
            mut self,
            rules: impl IntoIterator<Item = $crate::forms::Rule>,
        ) -> Self {
            self.item.update_rules.extend(rules);
            self
        }

        /// Show the field on the index page only
        #[must_use]
        pub const fn only_on_index(mut self) -> Self {
            self.item.visibility.index = true;
            self.item.visibility.creation = false;
            self.item.visibility.update = false;
            self
        }

        /// Show the field on the forms only
        #[must_use]
        pub const fn only_on_forms(mut self) -> Self {
            self.item.visibility.index = false;
            self.item.visibility.creation = true;
            self.item.visibility.update = true;
            self
        }

        /// Hide the field from the index page
        #[must_use]
        pub const fn hide_from_index(mut self) -> Self {
            self.item.visibility.index = false;
            self
        }

        /// Hide the field from the creation form
        #[must_use]
        pub const fn hide_when_creating(mut self) -> Self {
            self.item.visibility.creation = false;
            self
        }

        /// Hide the field from the update form
        #[must_use]
        pub const fn hide_when_updating(mut self) -> Self {
            self.item.visibility.update = false;
            self
        }
    };
}

pub(crate) use form_item_setters;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_defaults_to_name() {
        let item = FormItem::new("created_at", "");
        assert_eq!(item.label, "created_at");

        let item = FormItem::new("created_at", "Created");
        assert_eq!(item.label, "Created");
    }

    #[test]
    fn test_set_label_empty_resets_to_name() {
        let mut item = FormItem::new("title", "Title");
        item.set_label("");
        assert_eq!(item.label, "title");
    }

    #[test]
    fn test_options_preserve_mapping_order() {
        let options = options_from(vec![("z", "Last"), ("a", "First"), ("m", "Middle")]);
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Last", "First", "Middle"]);
        assert_eq!(options[0].value, json!("z"));
    }

    #[test]
    fn test_option_serializes_label_then_value() {
        let option = SelectOption::new(1, "On");
        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            json!({"label": "On", "value": 1})
        );
    }

    #[test]
    fn test_visibility() {
        let visibility = Visibility {
            index: false,
            ..Visibility::default()
        };
        assert!(!visibility.shows(FieldContext::Index));
        assert!(visibility.shows(FieldContext::Creation));
        assert!(visibility.shows(FieldContext::Update));
    }

    #[test]
    fn test_rules_for_context() {
        let mut item = FormItem::new("email", "");
        item.rules.push(Rule::Required);
        item.creation_rules.push(Rule::Email);
        item.update_rules.push(Rule::MaxLength(10));

        assert_eq!(item.rules_for(FieldContext::Creation).count(), 2);
        assert_eq!(item.rules_for(FieldContext::Update).count(), 2);
        assert_eq!(item.rules_for(FieldContext::Index).count(), 1);
    }
}
