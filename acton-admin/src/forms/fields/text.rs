//! Basic inputs: text, textarea and select

use serde_json::Value;

use crate::forms::field::{Field, FieldKind};
use crate::forms::item::{form_item_setters, options_from, FormItem, SelectOption};

/// Single-line text input
#[derive(Debug, Clone)]
pub struct Text {
    /// Shared attributes
    pub item: FormItem,
}

impl Text {
    /// Create an input labeled with its name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::labeled(name, "")
    }

    /// Create an input with a label (empty falls back to the name)
    #[must_use]
    pub fn labeled(name: impl Into<String>, label: &str) -> Self {
        Self {
            item: FormItem::new(name, label),
        }
    }

    form_item_setters!();
}

impl From<Text> for Field {
    fn from(text: Text) -> Self {
        Self {
            item: text.item,
            kind: FieldKind::Text {},
        }
    }
}

/// Multi-line text input
#[derive(Debug, Clone)]
pub struct Textarea {
    /// Shared attributes
    pub item: FormItem,
    /// Visible text lines
    pub rows: Option<u32>,
}

impl Textarea {
    /// Create a textarea labeled with its name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::labeled(name, "")
    }

    /// Create a textarea with a label (empty falls back to the name)
    #[must_use]
    pub fn labeled(name: impl Into<String>, label: &str) -> Self {
        Self {
            item: FormItem::new(name, label),
            rows: None,
        }
    }

    form_item_setters!();

    /// Set the number of visible lines
    #[must_use]
    pub const fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }
}

impl From<Textarea> for Field {
    fn from(textarea: Textarea) -> Self {
        Self {
            item: textarea.item,
            kind: FieldKind::Textarea {
                rows: textarea.rows,
            },
        }
    }
}

/// Dropdown select
#[derive(Debug, Clone)]
pub struct Select {
    /// Shared attributes
    pub item: FormItem,
    /// Available options
    pub options: Vec<SelectOption>,
}

impl Select {
    /// Create a select labeled with its name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::labeled(name, "")
    }

    /// Create a select with a label (empty falls back to the name)
    #[must_use]
    pub fn labeled(name: impl Into<String>, label: &str) -> Self {
        Self {
            item: FormItem::new(name, label),
            options: Vec::new(),
        }
    }

    form_item_setters!();

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
}

impl From<Select> for Field {
    fn from(select: Select) -> Self {
        Self {
            item: select.item,
            kind: FieldKind::Select {
                options: select.options,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldContext;

    #[test]
    fn test_text_visibility_setters() {
        let field: Field = Text::new("password").hide_from_index().into();
        assert!(!field.shown_on(FieldContext::Index));
        assert!(field.shown_on(FieldContext::Creation));

        let field: Field = Text::new("id").only_on_index().into();
        assert!(field.shown_on(FieldContext::Index));
        assert!(!field.shown_on(FieldContext::Creation));
        assert!(!field.shown_on(FieldContext::Update));
    }

    #[test]
    fn test_textarea_rows() {
        let field: Field = Textarea::labeled("body", "Body").rows(6).into();
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["component"], "textarea");
        assert_eq!(json["rows"], 6);
    }

    #[test]
    fn test_select_options() {
        let field: Field = Select::new("status")
            .options([(1, "Enabled"), (0, "Disabled")])
            .into();
        let options = field.kind.select_options().unwrap();
        assert_eq!(options[0].label, "Enabled");
        assert_eq!(options[1].value, 0);
    }
}
