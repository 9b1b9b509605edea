//! In-process store

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use super::{value_text, IndexQuery, Model, ModelStore, Order, Paginated, Record};
use crate::error::AdminError;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Record>,
    next_id: u64,
}

impl Table {
    fn position(&self, primary_key: &str, id: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.get(primary_key).map(value_text).as_deref() == Some(id))
    }

    fn assign_id(&mut self, primary_key: &str, record: &mut Record) {
        match record.get(primary_key) {
            None | Some(Value::Null) => {
                self.next_id += 1;
                record.insert(primary_key.to_string(), Value::from(self.next_id));
            }
            Some(id) => self.next_id = self.next_id.max(numeric_id(id).unwrap_or(0)),
        }
    }

    fn add(&mut self, model: &Model, mut record: Record) -> Result<Record, AdminError> {
        let taken = record
            .get(&model.primary_key)
            .filter(|id| !id.is_null())
            .map(value_text)
            .filter(|id| self.position(&model.primary_key, id).is_some());
        if let Some(id) = taken {
            return Err(AdminError::Conflict(format!(
                "{} #{id} already exists",
                model.table
            )));
        }

        self.assign_id(&model.primary_key, &mut record);
        self.rows.push(record.clone());
        Ok(record)
    }
}

/// Integer form of a key given as a number or a numeric string
fn numeric_id(id: &Value) -> Option<u64> {
    match id {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Rows kept in memory, in insertion order
///
/// Numeric primary keys are assigned on insert when the record has none.
///
/// # Examples
///
/// ```rust
/// use acton_admin::query::{IndexQuery, MemoryStore, Model, ModelStore};
/// use serde_json::json;
///
/// # async fn example() -> anyhow::Result<()> {
/// let store = MemoryStore::new();
/// let model = Model::new("articles");
/// store.seed(&model, [json!({"title": "Hello"})]);
///
/// let rows = store.fetch(&model, &IndexQuery::new()).await?;
/// assert_eq!(rows[0]["id"], 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Table>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert rows without going through the async interface
    ///
    /// Values that are not JSON objects and rows whose key is already
    /// taken are skipped.
    pub fn seed(&self, model: &Model, rows: impl IntoIterator<Item = Value>) {
        let mut tables = self.tables.write();
        let table = tables.entry(model.table.clone()).or_default();
        for row in rows {
            let Value::Object(record) = row else {
                continue;
            };
            if let Err(err) = table.add(model, record) {
                tracing::warn!(table = %model.table, error = %err, "Skipping seed row");
            }
        }
    }

    /// Number of rows in a table
    #[must_use]
    pub fn len(&self, model: &Model) -> usize {
        self.tables
            .read()
            .get(&model.table)
            .map_or(0, |table| table.rows.len())
    }

    /// Whether a table has no rows
    #[must_use]
    pub fn is_empty(&self, model: &Model) -> bool {
        self.len(model) == 0
    }

    fn select(&self, model: &Model, query: &IndexQuery) -> Vec<Record> {
        let tables = self.tables.read();
        let mut rows: Vec<Record> = tables
            .get(&model.table)
            .map(|table| {
                table
                    .rows
                    .iter()
                    .filter(|row| query.matches(row))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if !query.order.is_empty() {
            rows.sort_by(|a, b| compare_rows(a, b, &query.order));
        }
        rows
    }
}

fn compare_rows(a: &Record, b: &Record, order: &[Order]) -> Ordering {
    order
        .iter()
        .map(|o| {
            let ordering = compare_values(a.get(&o.column), b.get(&o.column));
            if o.descending {
                ordering.reverse()
            } else {
                ordering
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .zip(y.as_f64())
            .and_then(|(x, y)| x.partial_cmp(&y))
            .unwrap_or(Ordering::Equal),
        (Some(x), Some(y)) => value_text(x).cmp(&value_text(y)),
    }
}

#[async_trait]
impl ModelStore for MemoryStore {
    async fn fetch(&self, model: &Model, query: &IndexQuery) -> Result<Vec<Record>, AdminError> {
        Ok(self.select(model, query))
    }

    async fn paginate(
        &self,
        model: &Model,
        query: &IndexQuery,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated, AdminError> {
        let rows = self.select(model, query);
        let total = rows.len() as u64;
        let skip = usize::try_from(page.saturating_sub(1).saturating_mul(per_page))
            .unwrap_or(usize::MAX);
        let take = usize::try_from(per_page).unwrap_or(usize::MAX);

        Ok(Paginated {
            items: rows.into_iter().skip(skip).take(take).collect(),
            current: page,
            per_page,
            total,
        })
    }

    async fn find(&self, model: &Model, id: &str) -> Result<Option<Record>, AdminError> {
        let tables = self.tables.read();
        Ok(tables.get(&model.table).and_then(|table| {
            table
                .position(&model.primary_key, id)
                .map(|index| table.rows[index].clone())
        }))
    }

    async fn insert(&self, model: &Model, record: Record) -> Result<Record, AdminError> {
        let mut tables = self.tables.write();
        tables.entry(model.table.clone()).or_default().add(model, record)
    }

    async fn update(
        &self,
        model: &Model,
        id: &str,
        mut changes: Record,
    ) -> Result<Record, AdminError> {
        changes.remove(&model.primary_key);

        let mut tables = self.tables.write();
        let table = tables
            .get_mut(&model.table)
            .ok_or_else(|| AdminError::NotFound(format!("{} #{id}", model.table)))?;
        let index = table
            .position(&model.primary_key, id)
            .ok_or_else(|| AdminError::NotFound(format!("{} #{id}", model.table)))?;

        let row = &mut table.rows[index];
        row.extend(changes);
        Ok(row.clone())
    }

    async fn update_many(
        &self,
        model: &Model,
        ids: &[String],
        mut changes: Record,
    ) -> Result<u64, AdminError> {
        changes.remove(&model.primary_key);

        let mut tables = self.tables.write();
        let Some(table) = tables.get_mut(&model.table) else {
            return Ok(0);
        };

        let mut updated = 0;
        for row in &mut table.rows {
            let key = row.get(&model.primary_key).map(value_text);
            if key.is_some_and(|key| ids.contains(&key)) {
                row.extend(changes.clone());
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn delete(&self, model: &Model, ids: &[String]) -> Result<u64, AdminError> {
        let mut tables = self.tables.write();
        let Some(table) = tables.get_mut(&model.table) else {
            return Ok(0);
        };

        let before = table.rows.len();
        table.rows.retain(|row| {
            let key = row.get(&model.primary_key).map(value_text);
            !key.is_some_and(|key| ids.contains(&key))
        });
        Ok((before - table.rows.len()) as u64)
    }
}
