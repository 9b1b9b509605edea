//! Select field with type-ahead search

use serde_json::Value;

use crate::forms::field::{Field, FieldKind};
use crate::forms::item::{form_item_setters, options_from, FormItem, SelectOption};

/// Searchable select, with static options or a remote lookup URL
///
/// ```rust
/// use acton_admin::forms::Search;
///
/// let search = Search::labeled("category_id", "Category")
///     .options([(1, "News"), (2, "Blog")])
///     .mode("multiple");
/// assert_eq!(search.options[0].label, "News");
/// ```
#[derive(Debug, Clone)]
pub struct Search {
    /// Shared attributes
    pub item: FormItem,
    /// Available options
    pub options: Vec<SelectOption>,
    /// Select mode
    pub mode: Option<String>,
    /// Remote lookup URL
    pub url: Option<String>,
}

impl Search {
    /// Create a search select labeled with its name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::labeled(name, "")
    }

    /// Create a search select with a label (empty falls back to the name)
    #[must_use]
    pub fn labeled(name: impl Into<String>, label: &str) -> Self {
        Self {
            item: FormItem::new(name, label),
            options: Vec::new(),
            mode: None,
            url: None,
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

    /// Set the select mode; the default value becomes an empty list
    #[must_use]
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self.item.default_value = Some(Value::Array(Vec::new()));
        self
    }

    /// Load options from a remote URL as the user types
    #[must_use]
    pub fn ajax(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Stretch the input to the full width
    #[must_use]
    pub fn full_width(self) -> Self {
        self.width("100%")
    }
}

impl From<Search> for Field {
    fn from(search: Search) -> Self {
        Self {
            item: search.item,
            kind: FieldKind::Search {
                options: search.options,
                mode: search.mode,
                url: search.url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_defaults_to_name() {
        assert_eq!(Search::new("tags").item.label, "tags");
        assert_eq!(Search::labeled("tags", "").item.label, "tags");
        assert_eq!(Search::labeled("tags", "Tags").item.label, "Tags");
    }

    #[test]
    fn test_options_keep_mapping_order() {
        let search = Search::new("status").options(vec![
            ("published", "Published"),
            ("draft", "Draft"),
            ("archived", "Archived"),
        ]);

        let pairs: Vec<_> = search
            .options
            .iter()
            .map(|o| (o.label.as_str(), o.value.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Published", json!("published")),
                ("Draft", json!("draft")),
                ("Archived", json!("archived")),
            ]
        );
    }

    #[test]
    fn test_mode_resets_default_value() {
        let search = Search::new("tags").default_value("x").mode("multiple");
        assert_eq!(search.mode.as_deref(), Some("multiple"));
        assert_eq!(search.item.default_value, Some(json!([])));
    }

    #[test]
    fn test_ajax_and_width() {
        let field: Field = Search::new("author_id")
            .ajax("/api/admin/user/suggest")
            .full_width()
            .into();

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["component"], "search");
        assert_eq!(json["url"], "/api/admin/user/suggest");
        assert_eq!(json["style"], json!({"width": "100%"}));
        assert_eq!(json["options"], json!([]));
    }
}
