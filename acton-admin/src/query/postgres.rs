//! `PostgreSQL` store
//!
//! Rows are read back with `to_jsonb`, and written through
//! `jsonb_populate_record` so that `PostgreSQL` coerces JSON values to the
//! column types. Table and column names cannot be bound as parameters and
//! are checked against [`quote_ident`] before being spliced into SQL.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{
    numeric_range, Condition, ConditionValue, IndexQuery, Model, ModelStore, Operator, Order,
    Paginated, Record,
};
use crate::error::AdminError;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$")
        .unwrap_or_else(|e| unreachable!("identifier pattern is valid: {e}"))
});

/// Quote a table or column name, rejecting anything but plain identifiers
///
/// A single `schema.table` qualifier is allowed.
///
/// # Errors
///
/// Returns [`AdminError::InvalidIdentifier`] for any other input.
pub fn quote_ident(name: &str) -> Result<String, AdminError> {
    if !IDENTIFIER.is_match(name) {
        return Err(AdminError::InvalidIdentifier(name.to_string()));
    }
    Ok(name
        .split('.')
        .map(|part| format!("\"{part}\""))
        .collect::<Vec<_>>()
        .join("."))
}

/// Store backed by a `PostgreSQL` connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn push_conditions(
    builder: &mut QueryBuilder<'_, Postgres>,
    conditions: &[Condition],
) -> Result<(), AdminError> {
    for (index, condition) in conditions.iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        let column = format!("t.{}", quote_ident(&condition.column)?);

        match (&condition.operator, &condition.value) {
            (Operator::Equal, ConditionValue::Single(value)) => {
                builder.push(format!("{column}::text = "));
                builder.push_bind(value.clone());
            }
            (Operator::Like, ConditionValue::Single(value)) => {
                builder.push(format!("{column}::text ILIKE "));
                builder.push_bind(format!("%{}%", escape_like(value)));
            }
            (Operator::In, ConditionValue::List(values)) => {
                builder.push(format!("{column}::text = ANY("));
                builder.push_bind(values.clone());
                builder.push(")");
            }
            (Operator::NotIn, ConditionValue::List(values)) => {
                builder.push(format!("({column} IS NULL OR NOT ({column}::text = ANY("));
                builder.push_bind(values.clone());
                builder.push(")))");
            }
            (Operator::Between, ConditionValue::Range(low, high)) => {
                if let Some((low, high)) = numeric_range(low, high) {
                    builder.push(format!("{column}::numeric BETWEEN "));
                    builder.push_bind(low);
                    builder.push(" AND ");
                    builder.push_bind(high);
                } else {
                    builder.push(format!("{column}::text BETWEEN "));
                    builder.push_bind(low.clone());
                    builder.push(" AND ");
                    builder.push_bind(high.clone());
                }
            }
            _ => {
                return Err(AdminError::BadRequest(format!(
                    "operator {:?} cannot compare column {} with {:?}",
                    condition.operator, condition.column, condition.value
                )));
            }
        }
    }
    Ok(())
}

fn push_order(builder: &mut QueryBuilder<'_, Postgres>, order: &[Order]) -> Result<(), AdminError> {
    for (index, o) in order.iter().enumerate() {
        builder.push(if index == 0 { " ORDER BY " } else { ", " });
        builder.push(format!(
            "t.{} {}",
            quote_ident(&o.column)?,
            if o.descending { "DESC" } else { "ASC" }
        ));
    }
    Ok(())
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn column_list<'a>(keys: impl Iterator<Item = &'a String>) -> Result<String, AdminError> {
    Ok(keys
        .map(|key| quote_ident(key))
        .collect::<Result<Vec<_>, _>>()?
        .join(", "))
}

fn into_record(value: Value) -> Result<Record, AdminError> {
    Ok(serde_json::from_value(value)?)
}

fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl ModelStore for PgStore {
    async fn fetch(&self, model: &Model, query: &IndexQuery) -> Result<Vec<Record>, AdminError> {
        let table = quote_ident(&model.table)?;
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT to_jsonb(t) FROM {table} AS t"));
        push_conditions(&mut builder, &query.conditions)?;
        push_order(&mut builder, &query.order)?;

        let rows: Vec<Value> = builder.build_query_scalar().fetch_all(&self.pool).await?;
        tracing::debug!(table = %model.table, rows = rows.len(), "Fetched rows");

        rows.into_iter().map(into_record).collect()
    }

    async fn paginate(
        &self,
        model: &Model,
        query: &IndexQuery,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated, AdminError> {
        let table = quote_ident(&model.table)?;

        let mut count =
            QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {table} AS t"));
        push_conditions(&mut count, &query.conditions)?;
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT to_jsonb(t) FROM {table} AS t"));
        push_conditions(&mut builder, &query.conditions)?;
        push_order(&mut builder, &query.order)?;
        builder.push(" LIMIT ");
        builder.push_bind(clamp_i64(per_page));
        builder.push(" OFFSET ");
        builder.push_bind(clamp_i64(page.saturating_sub(1).saturating_mul(per_page)));

        let rows: Vec<Value> = builder.build_query_scalar().fetch_all(&self.pool).await?;

        Ok(Paginated {
            items: rows.into_iter().map(into_record).collect::<Result<_, _>>()?,
            current: page,
            per_page,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn find(&self, model: &Model, id: &str) -> Result<Option<Record>, AdminError> {
        let table = quote_ident(&model.table)?;
        let primary_key = quote_ident(&model.primary_key)?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT to_jsonb(t) FROM {table} AS t WHERE t.{primary_key}::text = "
        ));
        builder.push_bind(id.to_string());

        let row: Option<Value> = builder
            .build_query_scalar()
            .fetch_optional(&self.pool)
            .await?;
        row.map(into_record).transpose()
    }

    async fn insert(&self, model: &Model, record: Record) -> Result<Record, AdminError> {
        let table = quote_ident(&model.table)?;

        let mut builder = if record.is_empty() {
            QueryBuilder::<Postgres>::new(format!(
                "INSERT INTO {table} AS t DEFAULT VALUES RETURNING to_jsonb(t)"
            ))
        } else {
            let columns = column_list(record.keys())?;
            let mut builder = QueryBuilder::<Postgres>::new(format!(
                "INSERT INTO {table} AS t ({columns}) \
                 SELECT {columns} FROM jsonb_populate_record(NULL::{table}, "
            ));
            builder.push_bind(Value::Object(record));
            builder.push(") RETURNING to_jsonb(t)");
            builder
        };

        let row: Value = builder.build_query_scalar().fetch_one(&self.pool).await?;
        tracing::debug!(table = %model.table, "Inserted row");
        into_record(row)
    }

    async fn update(
        &self,
        model: &Model,
        id: &str,
        mut changes: Record,
    ) -> Result<Record, AdminError> {
        changes.remove(&model.primary_key);
        if changes.is_empty() {
            return self
                .find(model, id)
                .await?
                .ok_or_else(|| AdminError::NotFound(format!("{} #{id}", model.table)));
        }

        let table = quote_ident(&model.table)?;
        let primary_key = quote_ident(&model.primary_key)?;
        let columns = column_list(changes.keys())?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "UPDATE {table} AS t SET ({columns}) = \
             (SELECT {columns} FROM jsonb_populate_record(NULL::{table}, "
        ));
        builder.push_bind(Value::Object(changes));
        builder.push(format!(")) WHERE t.{primary_key}::text = "));
        builder.push_bind(id.to_string());
        builder.push(" RETURNING to_jsonb(t)");

        let row: Option<Value> = builder
            .build_query_scalar()
            .fetch_optional(&self.pool)
            .await?;
        tracing::debug!(table = %model.table, id, "Updated row");

        row.map(into_record)
            .transpose()?
            .ok_or_else(|| AdminError::NotFound(format!("{} #{id}", model.table)))
    }

    async fn update_many(
        &self,
        model: &Model,
        ids: &[String],
        mut changes: Record,
    ) -> Result<u64, AdminError> {
        changes.remove(&model.primary_key);
        if changes.is_empty() || ids.is_empty() {
            return Ok(0);
        }

        let table = quote_ident(&model.table)?;
        let primary_key = quote_ident(&model.primary_key)?;
        let columns = column_list(changes.keys())?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "UPDATE {table} AS t SET ({columns}) = \
             (SELECT {columns} FROM jsonb_populate_record(NULL::{table}, "
        ));
        builder.push_bind(Value::Object(changes));
        builder.push(format!(")) WHERE t.{primary_key}::text = ANY("));
        builder.push_bind(ids.to_vec());
        builder.push(")");

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, model: &Model, ids: &[String]) -> Result<u64, AdminError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let table = quote_ident(&model.table)?;
        let primary_key = quote_ident(&model.primary_key)?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "DELETE FROM {table} AS t WHERE t.{primary_key}::text = ANY("
        ));
        builder.push_bind(ids.to_vec());
        builder.push(")");

        let result = builder.build().execute(&self.pool).await?;
        tracing::debug!(table = %model.table, deleted = result.rows_affected(), "Deleted rows");
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("articles").unwrap(), "\"articles\"");
        assert_eq!(quote_ident("admin.users").unwrap(), "\"admin\".\"users\"");
        assert!(quote_ident("users; DROP TABLE users").is_err());
        assert!(quote_ident("\"quoted\"").is_err());
        assert!(quote_ident("1column").is_err());
    }

    #[test]
    fn test_where_clause() {
        let query = IndexQuery::new()
            .condition(Condition::new(
                "title",
                Operator::Like,
                ConditionValue::Single("50%".into()),
            ))
            .condition(Condition::new(
                "status",
                Operator::NotIn,
                ConditionValue::List(vec!["0".into()]),
            ))
            .order_by_desc("id");

        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT to_jsonb(t) FROM \"articles\" AS t");
        push_conditions(&mut builder, &query.conditions).unwrap();
        push_order(&mut builder, &query.order).unwrap();

        assert_eq!(
            builder.sql(),
            "SELECT to_jsonb(t) FROM \"articles\" AS t \
             WHERE t.\"title\"::text ILIKE $1 \
             AND (t.\"status\" IS NULL OR NOT (t.\"status\"::text = ANY($2))) \
             ORDER BY t.\"id\" DESC"
        );
    }

    #[test]
    fn test_numeric_between() {
        let conditions = [Condition::new(
            "views",
            Operator::Between,
            ConditionValue::Range("1".into(), "10".into()),
        )];
        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1 FROM \"articles\" AS t");
        push_conditions(&mut builder, &conditions).unwrap();
        assert!(builder.sql().ends_with("t.\"views\"::numeric BETWEEN $1 AND $2"));
    }

    #[test]
    fn test_rejects_bad_column() {
        let conditions = [Condition::new(
            "id = id OR 1",
            Operator::Equal,
            ConditionValue::Single("1".into()),
        )];
        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1");
        assert!(matches!(
            push_conditions(&mut builder, &conditions),
            Err(AdminError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
    }
}
