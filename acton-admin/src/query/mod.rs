//! Index queries and the storage seam
//!
//! Resources never talk to a database directly. They describe what the
//! index page needs as an [`IndexQuery`] and hand it to a [`ModelStore`]:
//!
//! - [`MemoryStore`] keeps rows in process (tests, demos, prototypes)
//! - [`PgStore`] runs the query against `PostgreSQL` through sqlx
//!
//! Rows travel as JSON objects ([`Record`]) so that pages can be built
//! without knowing the model's Rust type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod memory;
#[cfg(feature = "postgres")]
mod postgres;
mod store;

pub use memory::MemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::PgStore;
pub use store::ModelStore;

/// One model row
pub type Record = Map<String, Value>;

/// Reference to the table a resource manages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Table name
    pub table: String,
    /// Primary key column
    pub primary_key: String,
}

impl Model {
    /// Model backed by `table` with an `id` primary key
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            primary_key: "id".to_string(),
        }
    }

    /// Use a different primary key column
    #[must_use]
    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = column.into();
        self
    }
}

/// Comparison applied by a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /// Exact match
    Equal,
    /// Case-insensitive substring match
    Like,
    /// Value is one of a list
    In,
    /// Value is none of a list
    NotIn,
    /// Value lies within an inclusive range
    Between,
}

/// Right-hand side of a condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionValue {
    /// A single value
    Single(String),
    /// A list of values
    List(Vec<String>),
    /// Inclusive lower and upper bound
    Range(String, String),
}

/// A single `column <operator> value` filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Column to compare
    pub column: String,
    /// Comparison
    pub operator: Operator,
    /// Compared value
    pub value: ConditionValue,
}

impl Condition {
    /// Create a condition
    #[must_use]
    pub fn new(column: impl Into<String>, operator: Operator, value: ConditionValue) -> Self {
        Self {
            column: column.into(),
            operator,
            value,
        }
    }

    /// Whether a row satisfies this condition
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        let field = record.get(&self.column).filter(|v| !v.is_null());
        let text = field.map(value_text);

        match (&self.operator, &self.value) {
            (Operator::Equal, ConditionValue::Single(expected)) => {
                text.as_deref() == Some(expected.as_str())
            }
            (Operator::Like, ConditionValue::Single(needle)) => text.is_some_and(|t| {
                t.to_lowercase().contains(&needle.to_lowercase())
            }),
            (Operator::In, ConditionValue::List(values)) => {
                text.is_some_and(|t| values.iter().any(|v| *v == t))
            }
            (Operator::NotIn, ConditionValue::List(values)) => {
                text.is_none_or(|t| values.iter().all(|v| *v != t))
            }
            (Operator::Between, ConditionValue::Range(low, high)) => {
                text.is_some_and(|t| within(&t, low, high))
            }
            // An operator paired with the wrong value shape matches nothing
            _ => false,
        }
    }
}

/// Sort instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Column to sort by
    pub column: String,
    /// Sort descending
    pub descending: bool,
}

/// Everything the index page asks of the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexQuery {
    /// Filters, all of which must hold
    pub conditions: Vec<Condition>,
    /// Sort instructions, applied in order
    pub order: Vec<Order>,
}

impl IndexQuery {
    /// Empty query (every row, store order)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition
    #[must_use]
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add a condition in place
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Sort ascending by a column
    #[must_use]
    pub fn order_by(mut self, column: impl Into<String>) -> Self {
        self.order.push(Order {
            column: column.into(),
            descending: false,
        });
        self
    }

    /// Sort descending by a column
    #[must_use]
    pub fn order_by_desc(mut self, column: impl Into<String>) -> Self {
        self.order.push(Order {
            column: column.into(),
            descending: true,
        });
        self
    }

    /// Whether a row satisfies every condition
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }
}

/// One page of rows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated {
    /// Rows on this page
    pub items: Vec<Record>,
    /// Page number, starting at 1
    pub current: u64,
    /// Page size
    pub per_page: u64,
    /// Rows matching the query across all pages
    pub total: u64,
}

/// Text form of a stored value, as compared by conditions
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Both bounds as numbers, when they parse as such
#[must_use]
pub fn numeric_range(low: &str, high: &str) -> Option<(f64, f64)> {
    Some((low.trim().parse().ok()?, high.trim().parse().ok()?))
}

fn within(text: &str, low: &str, high: &str) -> bool {
    if let (Some((low, high)), Ok(n)) = (numeric_range(low, high), text.trim().parse::<f64>()) {
        return low <= n && n <= high;
    }
    low <= text && text <= high
}
