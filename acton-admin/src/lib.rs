//! acton-admin: resource-driven admin pages for axum
//!
//! A [`Resource`](resource::Resource) binds a database model to generated
//! admin pages. From a title, a model and a list of fields the crate
//! builds:
//!
//! - an index page: a table with search bar, toolbar, batch and row
//!   actions, and pagination
//! - creation and update pages: a card wrapping a form whose submit
//!   endpoint is derived from the request path
//! - JSON endpoints that validate and persist form submissions and run
//!   named actions
//!
//! Pages are returned as serializable [`components`] for a frontend to
//! render.
//!
//! # Quick Start
//!
//! ```rust,no_run
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
//!     fn pagination(&self) -> Option<u64> {
//!         Some(10)
//!     }
//!
//!     fn fields(&self, _request: &AdminRequest) -> Vec<Field> {
//!         vec![
//!             Text::labeled("title", "Title").rules([Rule::Required]).into(),
//!             Icon::labeled("icon", "Icon").into(),
//!             Datetime::labeled("created_at", "Created").hide_when_creating().into(),
//!         ]
//!     }
//!
//!     fn searches(&self, _request: &AdminRequest) -> Vec<SearchItem> {
//!         vec![SearchItem::like("title").label("Title")]
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     acton_admin::observability::init()?;
//!
//!     let config = AdminConfig::load_for_service("my-admin")?;
//!     let state = AdminState::new(MemoryStore::new(), config)
//!         .resource("article", ArticleResource);
//!
//!     let app = axum::Router::new()
//!         .nest("/api/admin", acton_admin::handlers::routes())
//!         .with_state(state);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `postgres` - `PostgreSQL` store through sqlx (default)

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::module_name_repetitions)]

pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod grid;
pub mod handlers;
pub mod observability;
pub mod query;
pub mod resource;
pub mod state;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use acton_admin::prelude::*;
    //! ```

    pub use crate::components::{
        Action, Card, Column, Component, FilterItem, Form, Page, Table, ToolBar,
    };
    pub use crate::config::{AdminConfig, Labels};
    pub use crate::error::AdminError;
    pub use crate::forms::{
        Datetime, Field, FieldContext, Icon, Rule, Search, Select, Text, Textarea,
        ValidationErrors,
    };
    pub use crate::grid::search::SearchItem;
    #[cfg(feature = "postgres")]
    pub use crate::query::PgStore;
    pub use crate::query::{
        Condition, ConditionValue, IndexQuery, MemoryStore, Model, ModelStore, Operator, Record,
    };
    pub use crate::resource::{
        ActionContext, ActionResult, AdminRequest, ChangeStatus, CreateLink, Delete, EditLink,
        QueryFilter, Resource, ResourceAction, SelectFilter,
    };
    pub use crate::state::AdminState;

    pub use async_trait::async_trait;
}
