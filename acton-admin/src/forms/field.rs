//! Resolved form field
//!
//! A [`Field`] is what every builder in [`super::fields`] turns into: the
//! shared [`FormItem`] attributes plus the component-specific options in
//! [`FieldKind`]. It serializes flat, with the component name under
//! `component`.

use serde::Serialize;
use serde_json::Value;

use super::item::{FieldContext, FormItem, SelectOption};

/// Component type and component-specific options
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "component", rename_all = "camelCase")]
pub enum FieldKind {
    /// Single-line text input
    Text {},
    /// Multi-line text input
    Textarea {
        /// Number of visible text lines
        #[serde(skip_serializing_if = "Option::is_none")]
        rows: Option<u32>,
    },
    /// Dropdown select
    Select {
        /// Available options
        options: Vec<SelectOption>,
    },
    /// Date and time picker
    #[serde(rename_all = "camelCase")]
    Datetime {
        /// Display format of the value
        format: String,
        /// Time panel settings, or `false` to hide it
        show_time: Value,
    },
    /// Icon picker
    Icon {
        /// Selectable icon names
        options: Vec<String>,
    },
    /// Select with type-ahead search
    Search {
        /// Available options
        options: Vec<SelectOption>,
        /// Select mode (`multiple`, `tags`)
        #[serde(skip_serializing_if = "Option::is_none")]
        mode: Option<String>,
        /// Remote lookup URL
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl FieldKind {
    /// Component name as sent to the renderer
    #[must_use]
    pub const fn component(&self) -> &'static str {
        match self {
            Self::Text {} => "text",
            Self::Textarea { .. } => "textarea",
            Self::Select { .. } => "select",
            Self::Datetime { .. } => "datetime",
            Self::Icon { .. } => "icon",
            Self::Search { .. } => "search",
        }
    }

    /// Column value type used when the field is shown on the index table
    #[must_use]
    pub const fn value_type(&self) -> &'static str {
        match self {
            Self::Text {} | Self::Textarea { .. } => "text",
            Self::Select { .. } | Self::Search { .. } => "select",
            Self::Datetime { .. } => "dateTime",
            Self::Icon { .. } => "icon",
        }
    }

    /// Options offered by select-like components
    #[must_use]
    pub fn select_options(&self) -> Option<&[SelectOption]> {
        match self {
            Self::Select { options } | Self::Search { options, .. } => Some(options.as_slice()),
            _ => None,
        }
    }
}

/// A form field ready to be placed on a page
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    /// Shared attributes
    #[serde(flatten)]
    pub item: FormItem,
    /// Component and its options
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Field {
    /// Field name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Field label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.item.label
    }

    /// Component name
    #[must_use]
    pub const fn component(&self) -> &'static str {
        self.kind.component()
    }

    /// Whether the field appears in the given context
    #[must_use]
    pub const fn shown_on(&self, context: FieldContext) -> bool {
        self.item.visibility.shows(context)
    }
}
