//! Index table description

use serde::Serialize;

use super::action::Action;
use crate::forms::{Field, SelectOption};
use crate::grid::search::SearchItem;
use crate::query::Record;

/// Title bar above a table
#[derive(Debug, Clone, Serialize)]
pub struct ToolBar {
    /// Title text
    pub title: String,
    /// Buttons on the right-hand side
    pub actions: Vec<Action>,
}

impl ToolBar {
    /// Create a toolbar with a title
    #[must_use]
    pub fn make(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            actions: Vec::new(),
        }
    }

    /// Set the buttons
    #[must_use]
    pub fn actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }
}

/// One table column
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Header text
    pub title: String,
    /// Record key displayed in the column
    pub data_index: String,
    /// How the value is displayed
    pub value_type: String,
    /// Value → label mapping for select-like values
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value_enum: Vec<SelectOption>,
    /// Per-row buttons (action column only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl Column {
    /// Plain text column
    #[must_use]
    pub fn make(title: impl Into<String>, data_index: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            data_index: data_index.into(),
            value_type: "text".to_string(),
            value_enum: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Column showing a field's value the way the field presents it
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        Self {
            value_type: field.kind.value_type().to_string(),
            value_enum: field.kind.select_options().map(<[_]>::to_vec).unwrap_or_default(),
            ..Self::make(field.label(), field.name())
        }
    }

    /// Trailing column holding per-row buttons
    #[must_use]
    pub fn actions(title: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            value_type: "option".to_string(),
            actions,
            ..Self::make(title, "actions")
        }
    }
}

/// Filter control offered above a table
#[derive(Debug, Clone, Serialize)]
pub struct FilterItem {
    /// Key of the value in the `filter` parameter
    pub key: String,
    /// Text shown next to the control
    pub name: String,
    /// Choices offered to the user
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FilterItem {
    /// Create a filter control
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            options,
        }
    }
}

/// Paging state of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, starting at 1
    pub current: u64,
    /// Rows per page
    pub page_size: u64,
    /// Rows across all pages
    pub total: u64,
}

/// Index table
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Component key
    pub key: String,
    /// Title text
    pub title: String,
    /// Toolbar above the table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_bar: Option<ToolBar>,
    /// Columns
    pub columns: Vec<Column>,
    /// Buttons applied to the selected rows
    pub batch_actions: Vec<Action>,
    /// Search bar controls
    pub searches: Vec<SearchItem>,
    /// Filter controls
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FilterItem>,
    /// Paging state; absent when every row is listed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Rows
    pub datasource: Vec<Record>,
}

impl Table {
    /// Create an empty table with a component key
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: String::new(),
            tool_bar: None,
            columns: Vec::new(),
            batch_actions: Vec::new(),
            searches: Vec::new(),
            filters: Vec::new(),
            pagination: None,
            datasource: Vec::new(),
        }
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the toolbar
    #[must_use]
    pub fn tool_bar(mut self, tool_bar: ToolBar) -> Self {
        self.tool_bar = Some(tool_bar);
        self
    }

    /// Set the columns
    #[must_use]
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Set the batch buttons
    #[must_use]
    pub fn batch_actions(mut self, actions: Vec<Action>) -> Self {
        self.batch_actions = actions;
        self
    }

    /// Set the search bar controls
    #[must_use]
    pub fn searches(mut self, searches: Vec<SearchItem>) -> Self {
        self.searches = searches;
        self
    }

    /// Set the filter controls
    #[must_use]
    pub fn filters(mut self, filters: Vec<FilterItem>) -> Self {
        self.filters = filters;
        self
    }

    /// Set the paging state
    #[must_use]
    pub const fn pagination(mut self, current: u64, page_size: u64, total: u64) -> Self {
        self.pagination = Some(Pagination {
            current,
            page_size,
            total,
        });
        self
    }

    /// Set the rows
    #[must_use]
    pub fn datasource(mut self, rows: Vec<Record>) -> Self {
        self.datasource = rows;
        self
    }
}
