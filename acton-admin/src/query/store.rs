//! Storage trait implemented by every backend

use async_trait::async_trait;

use super::{IndexQuery, Model, Paginated, Record};
use crate::error::AdminError;

/// Row storage used by resources
///
/// Ids are passed as text so that integer, UUID and string keys all go
/// through the same interface.
#[async_trait]
pub trait ModelStore: Send + Sync {
    /// Every row matching the query
    async fn fetch(&self, model: &Model, query: &IndexQuery) -> Result<Vec<Record>, AdminError>;

    /// One page of rows matching the query (`page` starts at 1)
    async fn paginate(
        &self,
        model: &Model,
        query: &IndexQuery,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated, AdminError>;

    /// Row with the given primary key
    async fn find(&self, model: &Model, id: &str) -> Result<Option<Record>, AdminError>;

    /// Insert a row, returning it as stored
    async fn insert(&self, model: &Model, record: Record) -> Result<Record, AdminError>;

    /// Overwrite the given columns of one row, returning it as stored
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] when no row has this key.
    async fn update(&self, model: &Model, id: &str, changes: Record)
        -> Result<Record, AdminError>;

    /// Overwrite the given columns of several rows, returning how many changed
    async fn update_many(
        &self,
        model: &Model,
        ids: &[String],
        changes: Record,
    ) -> Result<u64, AdminError>;

    /// Delete rows by primary key, returning how many were removed
    async fn delete(&self, model: &Model, ids: &[String]) -> Result<u64, AdminError>;
}
