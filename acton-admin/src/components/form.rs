//! Form description

use serde::Serialize;
use serde_json::{Map, Value};

use super::action::Action;
use crate::forms::Field;
use crate::query::Record;

/// A form submitted to an API endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    /// Endpoint the form submits to
    pub api: String,
    /// Inline style
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub style: Map<String, Value>,
    /// Inputs
    pub items: Vec<Field>,
    /// Buttons below the inputs
    pub actions: Vec<Action>,
    /// Values the inputs start with
    pub initial_values: Record,
}

impl Form {
    /// Create an empty form submitting to `api`
    #[must_use]
    pub fn api(api: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            style: Map::new(),
            items: Vec::new(),
            actions: Vec::new(),
            initial_values: Record::new(),
        }
    }

    /// Set the inline style
    #[must_use]
    pub fn style(mut self, style: Map<String, Value>) -> Self {
        self.style = style;
        self
    }

    /// Set the inputs
    #[must_use]
    pub fn items(mut self, items: Vec<Field>) -> Self {
        self.items = items;
        self
    }

    /// Set the buttons
    #[must_use]
    pub fn actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    /// Set the starting values
    #[must_use]
    pub fn initial_values(mut self, values: Record) -> Self {
        self.initial_values = values;
        self
    }
}
