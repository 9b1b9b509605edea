//! Resources: a model bound to generated admin pages
//!
//! Implement [`Resource`] for each model exposed in the admin. Only the
//! title, the model and the field list are required; everything else has
//! a default that can be overridden, including the lifecycle operations
//! themselves.
//!
//! # Example
//!
//! ```rust
//! use acton_admin::prelude::*;
//!
//! struct ArticleResource;
//!
//! impl Resource for ArticleResource {
//!     fn title(&self) -> &str {
//!         "Article"
//!     }
//!
//!     fn model(&self) -> Model {
//!         Model::new("articles")
//!     }
//!
//!     fn fields(&self, _request: &AdminRequest) -> Vec<Field> {
//!         vec![
//!             Text::labeled("title", "Title").rules([Rule::Required]).into(),
//!             Datetime::labeled("created_at", "Created").hide_when_creating().into(),
//!         ]
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde_json::{Map, Value};

mod action;
mod endpoint;
mod filter;
mod request;

pub use action::{
    ActionContext, ActionResult, ChangeStatus, CreateLink, Delete, EditLink, MessageKind,
    ResourceAction,
};
pub use endpoint::{derive_endpoint, replace_first, replace_last};
pub use filter::{QueryFilter, SelectFilter};
pub use request::AdminRequest;

use crate::components::{
    Action, Card, Column, Component, FilterItem, Form, Page, Table, ToolBar,
};
use crate::config::Labels;
use crate::error::AdminError;
use crate::forms::{validate, Field, FieldContext};
use crate::grid::search::SearchItem;
use crate::query::{value_text, IndexQuery, Model, Record};
use crate::state::AdminState;

/// A model exposed through the admin
#[async_trait]
pub trait Resource: Send + Sync {
    /// Singular display name (`"Article"`)
    fn title(&self) -> &str;

    /// Table the resource manages
    fn model(&self) -> Model;

    /// Every field of the resource, across all pages
    fn fields(&self, request: &AdminRequest) -> Vec<Field>;

    /// Rows per index page; `None` lists every row
    fn pagination(&self) -> Option<u64> {
        None
    }

    /// Fixed creation form endpoint, replacing the derived one
    fn creation_api_override(&self) -> Option<String> {
        None
    }

    /// Fixed update form endpoint, replacing the derived one
    fn update_api_override(&self) -> Option<String> {
        None
    }

    /// Search bar controls
    fn searches(&self, _request: &AdminRequest) -> Vec<SearchItem> {
        Vec::new()
    }

    /// Filters applied from the `filter` parameter
    fn filters(&self, _request: &AdminRequest) -> Vec<Box<dyn QueryFilter>> {
        Vec::new()
    }

    /// Named actions; the default offers create, edit and delete
    fn actions(&self, _request: &AdminRequest) -> Vec<Box<dyn ResourceAction>> {
        vec![Box::new(CreateLink), Box::new(EditLink), Box::new(Delete)]
    }

    /// Final say over the index query; the default sorts newest first
    fn index_query(&self, _request: &AdminRequest, query: IndexQuery) -> IndexQuery {
        query.order_by_desc(self.model().primary_key)
    }

    /// Initial values of the creation form
    fn before_creating(&self, _request: &AdminRequest) -> Record {
        Record::new()
    }

    /// Initial values of the update form, given the stored record
    fn before_editing(&self, _request: &AdminRequest, record: Record) -> Record {
        record
    }

    /// Last chance to change or refuse submitted data before it is written
    ///
    /// # Errors
    ///
    /// Any error aborts the save and is returned to the client.
    fn before_saving(&self, _request: &AdminRequest, data: Record) -> Result<Record, AdminError> {
        Ok(data)
    }

    /// Transform the record returned after a save
    fn after_saved(&self, _request: &AdminRequest, record: Record) -> Record {
        record
    }

    /// Fields shown as index columns
    fn index_fields(&self, request: &AdminRequest) -> Vec<Field> {
        fields_for(self.fields(request), FieldContext::Index)
    }

    /// Fields of the creation form
    fn creation_fields(&self, request: &AdminRequest) -> Vec<Field> {
        fields_for(self.fields(request), FieldContext::Creation)
    }

    /// Fields of the update form
    fn update_fields(&self, request: &AdminRequest) -> Vec<Field> {
        fields_for(self.fields(request), FieldContext::Update)
    }

    /// Endpoint the creation form submits to
    fn creation_api(&self, state: &AdminState, request: &AdminRequest) -> String {
        self.creation_api_override().unwrap_or_else(|| {
            derive_endpoint(
                request.path(),
                &state.config().admin.api_prefix,
                "/create",
                "/store",
            )
        })
    }

    /// Endpoint the update form submits to
    fn update_api(&self, state: &AdminState, request: &AdminRequest) -> String {
        self.update_api_override().unwrap_or_else(|| {
            derive_endpoint(
                request.path(),
                &state.config().admin.api_prefix,
                "/edit",
                "/save",
            )
        })
    }

    /// Buttons on the index toolbar
    fn index_actions(&self, state: &AdminState, request: &AdminRequest) -> Vec<Action> {
        action_buttons(self.actions(request), state, request, |a| a.show_on_index())
    }

    /// Buttons on the selected-rows bar
    fn table_alert_actions(&self, state: &AdminState, request: &AdminRequest) -> Vec<Action> {
        action_buttons(self.actions(request), state, request, |a| {
            a.show_on_table_alert()
        })
    }

    /// Buttons on each row
    fn row_actions(&self, state: &AdminState, request: &AdminRequest) -> Vec<Action> {
        action_buttons(self.actions(request), state, request, |a| a.show_on_row())
    }

    /// Index toolbar: list title plus index actions
    fn tool_bar(&self, state: &AdminState, request: &AdminRequest) -> ToolBar {
        ToolBar::make(format!("{}{}", self.title(), state.config().labels.list_suffix))
            .actions(self.index_actions(state, request))
    }

    /// Index columns, with a trailing action column when rows have buttons
    fn columns(&self, state: &AdminState, request: &AdminRequest) -> Vec<Column> {
        let mut columns: Vec<Column> = self
            .index_fields(request)
            .iter()
            .map(Column::from_field)
            .collect();
        let row_actions = self.row_actions(state, request);
        if !row_actions.is_empty() {
            columns.push(Column::actions(
                state.config().labels.actions.clone(),
                row_actions,
            ));
        }
        columns
    }

    /// Top-right button of form cards
    fn form_extra(&self, labels: &Labels) -> Action {
        Action::make(labels.back.clone())
            .show_style("link")
            .action_type("back")
    }

    /// Buttons below forms
    fn form_actions(&self, labels: &Labels) -> Vec<Action> {
        vec![
            Action::make(labels.reset.clone()).action_type("reset"),
            Action::make(labels.submit.clone())
                .show_style("primary")
                .action_type("submit"),
            Action::make(labels.back.clone()).action_type("back"),
        ]
    }

    /// Wrap content in the page layout
    fn set_layout_content(&self, content: Component) -> Page {
        Page::new(self.title(), content)
    }

    /// Index query built from search bar values and filters
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::BadRequest`] for malformed search or filter
    /// values.
    fn build_index_query(&self, request: &AdminRequest) -> Result<IndexQuery, AdminError> {
        let mut query = IndexQuery::new();

        let search = request.search_values()?;
        for item in self.searches(request) {
            if let Some(value) = search.get(&item.name) {
                if let Some(condition) = item.condition(value)? {
                    query.push(condition);
                }
            }
        }

        let filter_values = request.filter_values()?;
        for filter in self.filters(request) {
            if let Some(value) = filter_values.get(filter.key()) {
                query = filter.apply(request, query, value)?;
            }
        }

        Ok(self.index_query(request, query))
    }

    /// Index page: a table of rows
    ///
    /// # Errors
    ///
    /// Returns an error for malformed search values or a failing store.
    async fn index(&self, state: &AdminState, request: &AdminRequest) -> Result<Page, AdminError> {
        let config = state.config();
        let model = self.model();
        let query = self.build_index_query(request)?;
        let searches = self
            .searches(request)
            .into_iter()
            .map(|item| item.localized(&config.labels))
            .collect();
        let filters = self
            .filters(request)
            .iter()
            .map(|filter| FilterItem::new(filter.key(), filter.name(), filter.options()))
            .collect();

        let mut table = Table::key("table")
            .title(format!("{}{}", self.title(), config.labels.list_suffix))
            .tool_bar(self.tool_bar(state, request))
            .columns(self.columns(state, request))
            .batch_actions(self.table_alert_actions(state, request))
            .searches(searches)
            .filters(filters);

        if let Some(per_page) = self.pagination() {
            let page_size = request.page_size(per_page, config.admin.max_page_size);
            let page = state
                .store()
                .paginate(&model, &query, request.current(), page_size)
                .await?;
            tracing::debug!(
                resource = self.title(),
                current = page.current,
                total = page.total,
                "Fetched index page"
            );
            table = table
                .pagination(page.current, page.per_page, page.total)
                .datasource(page.items);
        } else {
            let rows = state.store().fetch(&model, &query).await?;
            tracing::debug!(resource = self.title(), rows = rows.len(), "Fetched index rows");
            table = table.datasource(rows);
        }

        Ok(self.set_layout_content(Component::Table(table)))
    }

    /// Creation page: a card wrapping the creation form
    ///
    /// # Errors
    ///
    /// The default implementation does not fail.
    async fn create(&self, state: &AdminState, request: &AdminRequest) -> Result<Page, AdminError> {
        let labels = &state.config().labels;
        let form = Form::api(self.creation_api(state, request))
            .style(form_style(state))
            .items(self.creation_fields(request))
            .actions(self.form_actions(labels))
            .initial_values(self.before_creating(request));

        tracing::debug!(resource = self.title(), api = %form.api, "Built creation form");

        let card = Card::title(
            format!("{}{}", labels.create_prefix, self.title()),
            Component::Form(form),
        )
        .header_bordered()
        .extra(self.form_extra(labels));

        Ok(self.set_layout_content(Component::Card(card)))
    }

    /// Update page: a card wrapping the update form, filled with the record
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::BadRequest`] without an `id` parameter and
    /// [`AdminError::NotFound`] when no row has it.
    async fn edit(&self, state: &AdminState, request: &AdminRequest) -> Result<Page, AdminError> {
        let labels = &state.config().labels;
        let model = self.model();
        let id = request
            .id()
            .ok_or_else(|| AdminError::BadRequest("missing `id` parameter".to_string()))?;
        let record = state
            .store()
            .find(&model, id)
            .await?
            .ok_or_else(|| AdminError::NotFound(format!("{} #{id}", model.table)))?;

        let form = Form::api(self.update_api(state, request))
            .style(form_style(state))
            .items(self.update_fields(request))
            .actions(self.form_actions(labels))
            .initial_values(self.before_editing(request, record));

        tracing::debug!(resource = self.title(), id, api = %form.api, "Built update form");

        let card = Card::title(
            format!("{}{}", labels.edit_prefix, self.title()),
            Component::Form(form),
        )
        .header_bordered()
        .extra(self.form_extra(labels));

        Ok(self.set_layout_content(Component::Card(card)))
    }

    /// Run a named action on the selected rows
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnknownAction`] when no action has this key,
    /// otherwise whatever the action returns.
    async fn action(
        &self,
        state: &AdminState,
        request: &AdminRequest,
        uri_key: &str,
    ) -> Result<ActionResult, AdminError> {
        let actions = self.actions(request);
        let action = actions
            .iter()
            .find(|action| action.uri_key() == uri_key)
            .ok_or_else(|| AdminError::UnknownAction(uri_key.to_string()))?;

        let model = self.model();
        let ids = request.ids();
        tracing::info!(resource = self.title(), action = uri_key, ids = ?ids, "Running action");

        action
            .handle(ActionContext {
                request,
                store: state.store(),
                model: &model,
                ids,
                labels: &state.config().labels,
            })
            .await
    }

    /// Create a record from a creation form submission
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] when the data breaks field rules,
    /// or whatever `before_saving` and the store return.
    async fn store(
        &self,
        state: &AdminState,
        request: &AdminRequest,
        data: Record,
    ) -> Result<ActionResult, AdminError> {
        let fields = self.creation_fields(request);
        let data = submitted(&fields, data);
        validate(&fields, &data, FieldContext::Creation).map_err(AdminError::Validation)?;
        let data = self.before_saving(request, data)?;

        let model = self.model();
        let record = state.store().insert(&model, data).await?;
        let id = record.get(&model.primary_key).map(value_text);
        tracing::info!(resource = self.title(), id = ?id, "Created record");

        let record = self.after_saved(request, record);
        Ok(saved(state, request, record))
    }

    /// Update a record from an update form submission
    ///
    /// The id comes from the `id` parameter, or failing that from the
    /// primary key in the submitted data.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::BadRequest`] without an id,
    /// [`AdminError::Validation`] when the data breaks field rules, or
    /// whatever `before_saving` and the store return.
    async fn save(
        &self,
        state: &AdminState,
        request: &AdminRequest,
        data: Record,
    ) -> Result<ActionResult, AdminError> {
        let model = self.model();
        let id = request
            .id()
            .map(ToString::to_string)
            .or_else(|| data.get(&model.primary_key).map(value_text))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AdminError::BadRequest("missing `id` parameter".to_string()))?;

        let fields = self.update_fields(request);
        let data = submitted(&fields, data);
        validate(&fields, &data, FieldContext::Update).map_err(AdminError::Validation)?;
        let data = self.before_saving(request, data)?;

        let record = state.store().update(&model, &id, data).await?;
        tracing::info!(resource = self.title(), id = %id, "Updated record");

        let record = self.after_saved(request, record);
        Ok(saved(state, request, record))
    }
}

fn fields_for(fields: Vec<Field>, context: FieldContext) -> Vec<Field> {
    fields
        .into_iter()
        .filter(|field| field.shown_on(context))
        .collect()
}

fn action_buttons(
    actions: Vec<Box<dyn ResourceAction>>,
    state: &AdminState,
    request: &AdminRequest,
    placed: impl Fn(&dyn ResourceAction) -> bool,
) -> Vec<Action> {
    let config = state.config();
    let base = request.resource_path(&config.admin.api_prefix);
    actions
        .iter()
        .map(Box::as_ref)
        .filter(|action| placed(*action))
        .map(|action| action.component(&base, &config.labels))
        .collect()
}

fn form_style(state: &AdminState) -> Map<String, Value> {
    let mut style = Map::new();
    style.insert(
        "marginTop".to_string(),
        Value::from(state.config().admin.form_margin_top.clone()),
    );
    style
}

/// Keep only the submitted keys that belong to a form field
fn submitted(fields: &[Field], mut data: Record) -> Record {
    data.retain(|key, _| fields.iter().any(|field| field.name() == key));
    data
}

fn saved(state: &AdminState, request: &AdminRequest, record: Record) -> ActionResult {
    let config = state.config();
    let base = request.resource_path(&config.admin.api_prefix);
    ActionResult::success(config.labels.saved.clone())
        .data(Value::Object(record))
        .redirect(format!("/{base}/index"))
}
