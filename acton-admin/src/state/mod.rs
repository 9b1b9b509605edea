//! Shared admin state
//!
//! Holds the store, the configuration and the registered resources.
//! Cloning is cheap; everything sits behind an `Arc`.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::AdminConfig;
use crate::error::AdminError;
use crate::query::ModelStore;
use crate::resource::Resource;

/// Resources by URL name (`article` in `/admin/article/index`)
#[derive(Clone, Default)]
pub struct ResourceRegistry {
    resources: BTreeMap<String, Arc<dyn Resource>>,
}

impl ResourceRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource, replacing any previous one with the same name
    pub fn register(&mut self, name: impl Into<String>, resource: impl Resource + 'static) {
        let name = name.into();
        if self
            .resources
            .insert(name.clone(), Arc::new(resource))
            .is_some()
        {
            tracing::warn!(resource = %name, "Replaced registered resource");
        }
    }

    /// Resource registered under `name`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnknownResource`] when nothing is registered
    /// under this name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Resource>, AdminError> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| AdminError::UnknownResource(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }
}

/// Application state for admin handlers
///
/// # Example
///
/// ```rust
/// use acton_admin::{config::AdminConfig, query::MemoryStore, state::AdminState};
///
/// let state = AdminState::new(MemoryStore::new(), AdminConfig::default());
/// let app: axum::Router = axum::Router::new()
///     .nest("/api/admin", acton_admin::handlers::routes())
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AdminState {
    store: Arc<dyn ModelStore>,
    config: Arc<AdminConfig>,
    resources: Arc<ResourceRegistry>,
}

impl AdminState {
    /// State over a store with no resources registered yet
    #[must_use]
    pub fn new(store: impl ModelStore + 'static, config: AdminConfig) -> Self {
        Self::from_shared(Arc::new(store), config)
    }

    /// State over a store shared with the rest of the application
    #[must_use]
    pub fn from_shared(store: Arc<dyn ModelStore>, config: AdminConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            resources: Arc::new(ResourceRegistry::new()),
        }
    }

    /// Register a resource under a URL name
    #[must_use]
    pub fn resource(mut self, name: impl Into<String>, resource: impl Resource + 'static) -> Self {
        Arc::make_mut(&mut self.resources).register(name, resource);
        self
    }

    /// Row storage
    #[must_use]
    pub fn store(&self) -> &dyn ModelStore {
        self.store.as_ref()
    }

    /// Configuration
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Registered resources
    #[must_use]
    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    /// Resource registered under `name`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnknownResource`] when nothing is registered
    /// under this name.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Resource>, AdminError> {
        self.resources.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Field;
    use crate::query::{MemoryStore, Model};
    use crate::resource::AdminRequest;

    struct Empty;

    impl Resource for Empty {
        fn title(&self) -> &str {
            "Empty"
        }

        fn model(&self) -> Model {
            Model::new("empty")
        }

        fn fields(&self, _request: &AdminRequest) -> Vec<Field> {
            Vec::new()
        }
    }

    #[test]
    fn test_lookup() {
        let state = AdminState::new(MemoryStore::new(), AdminConfig::default())
            .resource("empty", Empty)
            .resource("other", Empty);

        assert_eq!(state.lookup("empty").unwrap().title(), "Empty");
        assert!(matches!(
            state.lookup("missing"),
            Err(AdminError::UnknownResource(name)) if name == "missing"
        ));
        assert_eq!(state.resources().names().collect::<Vec<_>>(), vec!["empty", "other"]);
    }

    #[test]
    fn test_clones_share_store() {
        let state = AdminState::new(MemoryStore::new(), AdminConfig::default());
        let clone = state.clone();
        assert!(std::ptr::addr_eq(state.store(), clone.store()));
    }
}
