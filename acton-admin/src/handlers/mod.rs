//! HTTP handlers
//!
//! Mount [`routes`] under the prefix the admin frontend calls:
//!
//! ```rust
//! use acton_admin::{config::AdminConfig, handlers, query::MemoryStore, state::AdminState};
//! use axum::Router;
//!
//! let state = AdminState::new(MemoryStore::new(), AdminConfig::default());
//! let app: Router = Router::new()
//!     .nest("/api/admin", handlers::routes())
//!     .with_state(state);
//! ```

pub mod resource;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AdminState;

/// Router exposing every registered resource
///
/// | Method | Path | Operation |
/// |---|---|---|
/// | GET | `/{resource}/index` | index page |
/// | GET | `/{resource}/create` | creation page |
/// | GET | `/{resource}/edit?id=` | update page |
/// | POST | `/{resource}/store` | create a record |
/// | POST | `/{resource}/save?id=` | update a record |
/// | POST | `/{resource}/action/{uri_key}?id=` | run an action |
pub fn routes() -> Router<AdminState> {
    Router::new()
        .route("/{resource}/index", get(resource::index))
        .route("/{resource}/create", get(resource::create))
        .route("/{resource}/edit", get(resource::edit))
        .route("/{resource}/store", post(resource::store))
        .route("/{resource}/save", post(resource::save))
        .route("/{resource}/action/{uri_key}", post(resource::action))
}
