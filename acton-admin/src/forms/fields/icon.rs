//! Icon picker field

use serde_json::Value;

use crate::forms::field::{Field, FieldKind};
use crate::forms::icons::ICONS;
use crate::forms::item::{form_item_setters, FormItem};

/// Icon picker offering the bundled icon catalog
#[derive(Debug, Clone)]
pub struct Icon {
    /// Shared attributes
    pub item: FormItem,
    /// Selectable icon names
    pub options: Vec<String>,
}

impl Icon {
    /// Create a picker labeled with its name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::labeled(name, "")
    }

    /// Create a picker with a label (empty falls back to the name)
    ///
    /// The value starts at `0` (no icon) and every catalog icon is offered.
    #[must_use]
    pub fn labeled(name: impl Into<String>, label: &str) -> Self {
        let mut item = FormItem::new(name, label);
        item.value = Some(Value::from(0));
        Self {
            item,
            options: ICONS.iter().map(ToString::to_string).collect(),
        }
    }

    form_item_setters!();

    /// Replace the offered icons
    #[must_use]
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Stretch the input to the full width
    #[must_use]
    pub fn full_width(self) -> Self {
        self.width("100%")
    }
}

impl From<Icon> for Field {
    fn from(icon: Icon) -> Self {
        Self {
            item: icon.item,
            kind: FieldKind::Icon {
                options: icon.options,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let icon = Icon::new("icon");
        assert_eq!(icon.item.label, "icon");
        assert_eq!(icon.item.value, Some(json!(0)));
        assert_eq!(icon.options.len(), ICONS.len());
        assert_eq!(icon.options[0], "icon-database");
    }

    #[test]
    fn test_options_replace_catalog() {
        let icon = Icon::labeled("icon", "Menu icon").options(["icon-home", "icon-user"]);
        assert_eq!(icon.options, vec!["icon-home", "icon-user"]);
    }

    #[test]
    fn test_width() {
        let icon = Icon::new("icon").full_width();
        assert_eq!(icon.item.style.get("width"), Some(&json!("100%")));

        let icon = Icon::new("icon").width(200);
        assert_eq!(icon.item.style.get("width"), Some(&json!(200)));
    }
}
