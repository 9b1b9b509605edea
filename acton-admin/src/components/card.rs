//! Card description

use serde::Serialize;

use super::action::Action;
use super::page::Component;

/// Titled panel wrapping another component
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Title text
    pub title: String,
    /// Draw a divider under the title
    pub header_bordered: bool,
    /// Button in the top-right corner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Action>,
    /// Wrapped component
    pub body: Box<Component>,
}

impl Card {
    /// Create a card with a title wrapping `body`
    #[must_use]
    pub fn title(title: impl Into<String>, body: Component) -> Self {
        Self {
            title: title.into(),
            header_bordered: false,
            extra: None,
            body: Box::new(body),
        }
    }

    /// Draw a divider under the title
    #[must_use]
    pub const fn header_bordered(mut self) -> Self {
        self.header_bordered = true;
        self
    }

    /// Set the top-right button
    #[must_use]
    pub fn extra(mut self, extra: Action) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Replace the wrapped component
    #[must_use]
    pub fn body(mut self, body: Component) -> Self {
        self.body = Box::new(body);
        self
    }
}
