//! Buttons and links

use serde::Serialize;

/// A button or link placed on a page
///
/// ```rust
/// use acton_admin::components::Action;
///
/// let back = Action::make("Back").show_style("link").action_type("back");
/// assert_eq!(back.action_type, "back");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Button text
    pub name: String,
    /// Visual style (`primary`, `link`, `dashed`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_style: Option<String>,
    /// Behaviour on click (`ajax`, `link`, `submit`, `reset`, `back`)
    pub action_type: String,
    /// Target of a link action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Endpoint called by an ajax action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
    /// Confirmation asked before running
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,
}

impl Action {
    /// Create an ajax action with the given text
    #[must_use]
    pub fn make(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            show_style: None,
            action_type: "ajax".to_string(),
            href: None,
            api: None,
            confirm: None,
        }
    }

    /// Set the visual style
    #[must_use]
    pub fn show_style(mut self, style: impl Into<String>) -> Self {
        self.show_style = Some(style.into());
        self
    }

    /// Set the click behaviour
    #[must_use]
    pub fn action_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_type = action_type.into();
        self
    }

    /// Turn the action into a link to `href`
    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self.action_type = "link".to_string();
        self
    }

    /// Set the endpoint called on click
    #[must_use]
    pub fn api(mut self, api: impl Into<String>) -> Self {
        self.api = Some(api.into());
        self
    }

    /// Ask for confirmation first
    #[must_use]
    pub fn confirm(mut self, message: impl Into<String>) -> Self {
        self.confirm = Some(message.into());
        self
    }
}
