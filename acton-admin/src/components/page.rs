//! Top-level page layout

use serde::Serialize;

use super::card::Card;
use super::form::Form;
use super::table::Table;

/// Any component that can fill a page or a card
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "component", rename_all = "camelCase")]
pub enum Component {
    /// Index table
    Table(Table),
    /// Form
    Form(Form),
    /// Card
    Card(Card),
}

impl Component {
    /// The table, if this is one
    #[must_use]
    pub const fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// The card, if this is one
    #[must_use]
    pub const fn as_card(&self) -> Option<&Card> {
        match self {
            Self::Card(card) => Some(card),
            _ => None,
        }
    }

    /// The form, if this is one
    #[must_use]
    pub const fn as_form(&self) -> Option<&Form> {
        match self {
            Self::Form(form) => Some(form),
            _ => None,
        }
    }
}

/// A complete page: layout title plus content
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    component: &'static str,
    /// Browser/layout title
    pub title: String,
    /// Page content
    pub content: Component,
}

impl Page {
    /// Wrap content in the page layout
    #[must_use]
    pub fn new(title: impl Into<String>, content: Component) -> Self {
        Self {
            component: "page",
            title: title.into(),
            content,
        }
    }
}
