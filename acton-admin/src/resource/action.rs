//! Named resource actions
//!
//! An action is a button on the index page (toolbar, batch bar or row)
//! together with the server-side handler it triggers through
//! `{resource}/action/{uri_key}`.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use super::request::AdminRequest;
use crate::components::Action;
use crate::config::Labels;
use crate::error::AdminError;
use crate::query::{Model, ModelStore, Record};

/// Outcome kind reported to the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// The operation succeeded
    Success,
    /// The operation failed
    Error,
}

/// Response body of actions and form submissions
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    /// Outcome
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Message shown to the user
    pub message: String,
    /// Payload, e.g. the saved record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Page the frontend should navigate to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl ActionResult {
    /// Successful outcome
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            message: message.into(),
            data: None,
            redirect: None,
        }
    }

    /// Failed outcome
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            ..Self::success(message)
        }
    }

    /// Attach a payload
    #[must_use]
    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Ask the frontend to navigate
    #[must_use]
    pub fn redirect(mut self, url: impl Into<String>) -> Self {
        self.redirect = Some(url.into());
        self
    }

    /// Whether the outcome is a success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

/// What an action handler gets to work with
pub struct ActionContext<'a> {
    /// Incoming request
    pub request: &'a AdminRequest,
    /// Store holding the resource's rows
    pub store: &'a dyn ModelStore,
    /// Model the resource manages
    pub model: &'a Model,
    /// Selected primary keys
    pub ids: Vec<String>,
    /// Configured UI strings
    pub labels: &'a Labels,
}

impl ActionContext<'_> {
    fn require_ids(&self, action: &str) -> Result<&[String], AdminError> {
        if self.ids.is_empty() {
            return Err(AdminError::BadRequest(format!(
                "action `{action}` needs at least one selected id"
            )));
        }
        Ok(&self.ids)
    }
}

/// A named action exposed by a resource
///
/// Link-only actions keep the default [`handle`](Self::handle), which
/// rejects direct calls.
#[async_trait]
pub trait ResourceAction: Send + Sync {
    /// Button text
    fn name(&self, labels: &Labels) -> String;

    /// Key used in the action URL
    fn uri_key(&self) -> &str;

    /// Show on the index toolbar
    fn show_on_index(&self) -> bool {
        false
    }

    /// Show on the bar that appears when rows are selected
    fn show_on_table_alert(&self) -> bool {
        false
    }

    /// Show on each row
    fn show_on_row(&self) -> bool {
        false
    }

    /// Button description; `base` is the resource path (`admin/article`)
    fn component(&self, base: &str, labels: &Labels) -> Action {
        Action::make(self.name(labels)).api(format!("{base}/action/{}", self.uri_key()))
    }

    /// Run the action
    ///
    /// # Errors
    ///
    /// The default implementation always returns
    /// [`AdminError::BadRequest`].
    async fn handle(&self, _ctx: ActionContext<'_>) -> Result<ActionResult, AdminError> {
        Err(AdminError::BadRequest(format!(
            "action `{}` cannot be run directly",
            self.uri_key()
        )))
    }
}

/// Toolbar link to the creation page
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateLink;

impl ResourceAction for CreateLink {
    fn name(&self, labels: &Labels) -> String {
        labels.create.clone()
    }

    fn uri_key(&self) -> &str {
        "create"
    }

    fn show_on_index(&self) -> bool {
        true
    }

    fn component(&self, base: &str, labels: &Labels) -> Action {
        Action::make(self.name(labels))
            .show_style("primary")
            .href(format!("/{base}/create"))
    }
}

/// Row link to the update page
#[derive(Debug, Clone, Copy, Default)]
pub struct EditLink;

impl ResourceAction for EditLink {
    fn name(&self, labels: &Labels) -> String {
        labels.edit.clone()
    }

    fn uri_key(&self) -> &str {
        "edit"
    }

    fn show_on_row(&self) -> bool {
        true
    }

    fn component(&self, base: &str, labels: &Labels) -> Action {
        Action::make(self.name(labels))
            .show_style("link")
            .href(format!("/{base}/edit?id={{id}}"))
    }
}

/// Delete the selected rows
#[derive(Debug, Clone, Copy, Default)]
pub struct Delete;

#[async_trait]
impl ResourceAction for Delete {
    fn name(&self, labels: &Labels) -> String {
        labels.delete.clone()
    }

    fn uri_key(&self) -> &str {
        "delete"
    }

    fn show_on_table_alert(&self) -> bool {
        true
    }

    fn show_on_row(&self) -> bool {
        true
    }

    fn component(&self, base: &str, labels: &Labels) -> Action {
        Action::make(self.name(labels))
            .show_style("link")
            .api(format!("{base}/action/{}", self.uri_key()))
            .confirm(labels.delete_confirm.clone())
    }

    async fn handle(&self, ctx: ActionContext<'_>) -> Result<ActionResult, AdminError> {
        let ids = ctx.require_ids(self.uri_key())?;
        let deleted = ctx.store.delete(ctx.model, ids).await?;
        tracing::info!(table = %ctx.model.table, deleted, "Deleted records");
        Ok(ActionResult::success(ctx.labels.succeeded.clone()).data(json!({ "affected": deleted })))
    }
}

/// Set one column of the selected rows to a fixed value
///
/// ```rust
/// use acton_admin::resource::ChangeStatus;
///
/// let disable = ChangeStatus::new("disable", "Disable", "status", 0);
/// ```
#[derive(Debug, Clone)]
pub struct ChangeStatus {
    uri_key: String,
    name: String,
    column: String,
    value: Value,
    on_row: bool,
}

impl ChangeStatus {
    /// Batch action setting `column` to `value`
    #[must_use]
    pub fn new(
        uri_key: impl Into<String>,
        name: impl Into<String>,
        column: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            uri_key: uri_key.into(),
            name: name.into(),
            column: column.into(),
            value: value.into(),
            on_row: false,
        }
    }

    /// Also show the action on each row
    #[must_use]
    pub const fn on_row(mut self) -> Self {
        self.on_row = true;
        self
    }
}

#[async_trait]
impl ResourceAction for ChangeStatus {
    fn name(&self, _labels: &Labels) -> String {
        self.name.clone()
    }

    fn uri_key(&self) -> &str {
        &self.uri_key
    }

    fn show_on_table_alert(&self) -> bool {
        true
    }

    fn show_on_row(&self) -> bool {
        self.on_row
    }

    async fn handle(&self, ctx: ActionContext<'_>) -> Result<ActionResult, AdminError> {
        let ids = ctx.require_ids(&self.uri_key)?;
        let mut changes = Record::new();
        changes.insert(self.column.clone(), self.value.clone());

        let updated = ctx.store.update_many(ctx.model, ids, changes).await?;
        tracing::info!(
            table = %ctx.model.table,
            column = %self.column,
            updated,
            "Changed status"
        );
        Ok(ActionResult::success(ctx.labels.succeeded.clone()).data(json!({ "affected": updated })))
    }
}
