//! The request as resources see it

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, OriginalUri, Query},
    http::{request::Parts, Uri},
};
use serde_json::{Map, Value};

use super::endpoint::replace_first;
use crate::error::AdminError;

/// Last path segment of each lifecycle route
const OPERATIONS: [&str; 5] = ["index", "create", "edit", "store", "save"];

/// Path and query parameters of an admin request
///
/// Extracted in handlers from the full request URI, so paths keep the
/// prefix the admin router was nested under.
///
/// ```rust
/// use acton_admin::resource::AdminRequest;
///
/// let request = AdminRequest::new("/api/admin/article/edit").with_param("id", "7");
/// assert_eq!(request.path(), "api/admin/article/edit");
/// assert_eq!(request.id(), Some("7"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdminRequest {
    path: String,
    query: HashMap<String, String>,
}

impl AdminRequest {
    /// Request for a path with no query parameters
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: path.as_ref().trim_start_matches('/').to_string(),
            query: HashMap::new(),
        }
    }

    /// Build from a URI, parsing its query string
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::BadRequest`] when the query string is malformed.
    pub fn from_uri(uri: &Uri) -> Result<Self, AdminError> {
        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(uri)
            .map_err(|e| AdminError::BadRequest(e.body_text()))?;
        Ok(Self {
            query,
            ..Self::new(uri.path())
        })
    }

    /// Add a query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Request path without the leading `/`
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A non-empty query parameter
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The `id` parameter
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.param("id")
    }

    /// Selected ids: the `id` parameter split on commas
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.id()
            .map(|ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Requested page (`current`), starting at 1
    #[must_use]
    pub fn current(&self) -> u64 {
        self.param("current")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1)
    }

    /// Requested page size (`pageSize`), falling back to `default` and
    /// never above `max`
    #[must_use]
    pub fn page_size(&self, default: u64, max: u64) -> u64 {
        self.param("pageSize")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(default)
            .clamp(1, max.max(1))
    }

    /// Values submitted through the search bar (`search` JSON object)
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::BadRequest`] when the parameter is not a JSON
    /// object.
    pub fn search_values(&self) -> Result<Map<String, Value>, AdminError> {
        self.json_object("search")
    }

    /// Values submitted through resource filters (`filter` JSON object)
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::BadRequest`] when the parameter is not a JSON
    /// object.
    pub fn filter_values(&self) -> Result<Map<String, Value>, AdminError> {
        self.json_object("filter")
    }

    fn json_object(&self, key: &str) -> Result<Map<String, Value>, AdminError> {
        let Some(raw) = self.param(key) else {
            return Ok(Map::new());
        };
        match serde_json::from_str(raw) {
            Ok(Value::Object(values)) => Ok(values),
            Ok(_) => Err(AdminError::BadRequest(format!(
                "`{key}` parameter must be a JSON object"
            ))),
            Err(e) => Err(AdminError::BadRequest(format!(
                "`{key}` parameter is not valid JSON: {e}"
            ))),
        }
    }

    /// Path of the resource this request targets, without the API prefix
    /// or the operation (`api/admin/article/index` → `admin/article`)
    ///
    /// Trailing segments are stripped from the end: a lifecycle operation,
    /// or `action/{uri_key}`.
    #[must_use]
    pub fn resource_path(&self, api_prefix: &str) -> String {
        let path = replace_first(&self.path, api_prefix, "");
        let segments: Vec<&str> = path.split('/').collect();
        let strip = match segments.as_slice() {
            [.., last] if OPERATIONS.contains(last) => 1,
            [.., "action", _] => 2,
            [_, _, ..] => 1,
            _ => 0,
        };
        segments[..segments.len() - strip].join("/")
    }
}

impl<S> FromRequestParts<S> for AdminRequest
where
    S: Send + Sync,
{
    type Rejection = AdminError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // nested routers see a stripped uri
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map_or(&parts.uri, |original| &original.0);
        Self::from_uri(uri)
    }
}
