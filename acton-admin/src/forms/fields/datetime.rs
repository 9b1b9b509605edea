//! Date and time picker field

use serde_json::{json, Value};

use crate::forms::field::{Field, FieldKind};
use crate::forms::item::{form_item_setters, FormItem};

/// Default display format of the picked value
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// Default format of the time panel
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm:ss";

/// Date and time picker
///
/// ```rust
/// use acton_admin::forms::{Datetime, Field};
///
/// let field: Field = Datetime::labeled("published_at", "Published")
///     .format("YYYY-MM-DD HH:mm")
///     .into();
/// assert_eq!(field.component(), "datetime");
/// ```
#[derive(Debug, Clone)]
pub struct Datetime {
    /// Shared attributes
    pub item: FormItem,
    /// Display format
    pub format: String,
    /// Time panel settings
    pub show_time: Value,
}

impl Datetime {
    /// Create a picker labeled with its name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::labeled(name, "")
    }

    /// Create a picker with a label (empty falls back to the name)
    #[must_use]
    pub fn labeled(name: impl Into<String>, label: &str) -> Self {
        Self {
            item: FormItem::new(name, label),
            format: DEFAULT_FORMAT.to_string(),
            show_time: json!({ "format": DEFAULT_TIME_FORMAT }),
        }
    }

    form_item_setters!();

    /// Set the time panel settings (`false` hides the panel)
    #[must_use]
    pub fn show_time(mut self, show_time: impl Into<Value>) -> Self {
        self.show_time = show_time.into();
        self
    }

    /// Set the display format
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

impl From<Datetime> for Field {
    fn from(datetime: Datetime) -> Self {
        Self {
            item: datetime.item,
            kind: FieldKind::Datetime {
                format: datetime.format,
                show_time: datetime.show_time,
            },
        }
    }
}
