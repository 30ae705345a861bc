//! Construction-time validation and per-request execution.
//!
//! [`TableQuery::new`] is the validator: it either yields a query handle or
//! a [`ConfigError`] describing the misconfiguration. [`TableQuery::get_result`]
//! runs extraction, composition, and execution, and never fails: every
//! error becomes the `{error: [...]}` variant of the envelope.

use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::query::{
    SelectQuery, Value, compose_order, compose_page, compose_static_where, compose_where,
    has_client_fragments,
};
use crate::request::TableRequest;
use crate::source::{Row, TableSource};
use crate::validate::{is_valid_column_name, is_valid_condition};
use miniserde::json::{Array, Number, Object, Value as JsonValue};

/// Translates one table-widget request into queries against a source.
///
/// Construct once per inbound request, call [`get_result`](Self::get_result)
/// once, serialize the envelope. Nothing is shared across requests.
///
/// # Example
///
/// ```
/// use grid_sql::{TableConfig, TableQuery};
/// # use grid_sql::{Row, SelectQuery, SourceError, TableSource, WhereClause};
/// # struct Empty(Vec<String>);
/// # impl TableSource for Empty {
/// #     fn source(&self) -> &str { "resets" }
/// #     fn attributes(&self) -> &[String] { &self.0 }
/// #     fn select(&self, _: &SelectQuery) -> Result<Vec<Row>, SourceError> { Ok(Vec::new()) }
/// #     fn count(&self, _: Option<&WhereClause>) -> Result<u64, SourceError> { Ok(0) }
/// # }
/// # let source = Empty(vec!["id".into(), "usersId".into(), "ipAddress".into()]);
/// let mut data = grid_sql::json::Object::new();
/// data.insert("limit".to_string(), grid_sql::json::Value::String("10".into()));
///
/// let config = TableConfig::new("id,usersId,ipAddress")
///     .s_columns("ipAddress")
///     .data(data);
///
/// let query = TableQuery::new(&source, config)?;
/// let result = query.get_result();
/// assert!(!result.is_error());
/// # Ok::<(), grid_sql::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct TableQuery<'a, S: TableSource> {
    source: &'a S,
    config: TableConfig,
}

impl<'a, S: TableSource> TableQuery<'a, S> {
    /// Validate the configuration against the source and build the handle.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoColumns`] when the display-column list is empty
    /// - [`ConfigError::NoData`] when the request payload map is empty
    /// - [`ConfigError::UnknownColumn`] when a display column is not among
    ///   the source's attributes
    /// - [`ConfigError::UnsafeColumn`] / [`ConfigError::UnsafeCondition`]
    ///   when configured names or static fragments fail validation
    pub fn new(source: &'a S, config: TableConfig) -> Result<Self, ConfigError> {
        if config.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        if config.data.is_empty() {
            return Err(ConfigError::NoData);
        }

        let attributes = source.attributes();
        for column in &config.columns {
            if !attributes.iter().any(|attr| attr == column) {
                return Err(ConfigError::UnknownColumn {
                    column: column.clone(),
                    source: source.source().to_string(),
                    attributes: attributes.to_vec(),
                });
            }
        }

        if let Some(s_columns) = &config.s_columns {
            for column in s_columns {
                if !is_valid_column_name(column) {
                    return Err(ConfigError::UnsafeColumn {
                        column: column.clone(),
                    });
                }
            }
        }
        if let Some(column) = &config.search_column
            && !is_valid_column_name(column)
        {
            return Err(ConfigError::UnsafeColumn {
                column: column.clone(),
            });
        }
        for condition in &config.conditions {
            if !is_valid_condition(condition) {
                return Err(ConfigError::UnsafeCondition {
                    condition: condition.clone(),
                });
            }
        }

        Ok(Self { source, config })
    }

    /// Extract, compose, execute, and reconcile the two counts.
    ///
    /// Never fails: any error during the pipeline is returned as the
    /// error-variant envelope, with no partial data.
    #[must_use]
    pub fn get_result(&self) -> TableResult {
        match self.run() {
            Ok(result) => result,
            Err(err) => TableResult::from(err),
        }
    }

    fn run(&self) -> Result<TableResult, ConfigError> {
        let request = TableRequest::from_data(&self.config.data)?;

        let filter = compose_where(&self.config, &request)?;
        let static_filter = compose_static_where(&self.config)?;
        let order = compose_order(&self.config, &request)?;
        let page = compose_page(&self.config, &request);

        let query = SelectQuery {
            columns: self.config.columns.to_vec(),
            filter: filter.clone(),
            order,
            page,
        };
        let rows = self.source.select(&query)?;

        let total_not_filtered = self.source.count(static_filter.as_ref())?;
        let total = if has_client_fragments(&self.config, &request) {
            self.source.count(filter.as_ref())?
        } else {
            total_not_filtered
        };

        Ok(TableResult::Rows {
            total,
            total_not_filtered,
            rows,
        })
    }
}

/// The result envelope the HTTP layer serializes.
///
/// Exactly one of the two variants exists per call; an error envelope never
/// carries counts or rows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableResult {
    /// One page of rows plus the reconciled counts.
    Rows {
        /// Count matching all active search/filter criteria (plus static
        /// conditions); equals `total_not_filtered` when no client
        /// filtering is active.
        total: u64,
        /// Count matching only the static conditions.
        total_not_filtered: u64,
        /// The page of records, display columns only.
        rows: Vec<Row>,
    },
    /// Terminal failure; messages are user-visible.
    Error {
        /// The recorded error messages.
        messages: Vec<String>,
    },
}

impl TableResult {
    /// True for the error variant.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Encode as the wire envelope: `{"error": [...]}` or
    /// `{"total": n, "totalNotFiltered": n, "rows": [...]}`.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut envelope = Object::new();
        match self {
            Self::Error { messages } => {
                let mut errors = Array::new();
                for message in messages {
                    errors.push(JsonValue::String(message.clone()));
                }
                envelope.insert("error".to_string(), JsonValue::Array(errors));
            },
            Self::Rows {
                total,
                total_not_filtered,
                rows,
            } => {
                envelope.insert("total".to_string(), JsonValue::Number(Number::U64(*total)));
                envelope.insert(
                    "totalNotFiltered".to_string(),
                    JsonValue::Number(Number::U64(*total_not_filtered)),
                );
                let mut records = Array::new();
                for row in rows {
                    records.push(row_to_json(row));
                }
                envelope.insert("rows".to_string(), JsonValue::Array(records));
            },
        }
        JsonValue::Object(envelope)
    }

    /// Encode straight to a JSON string.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        miniserde::json::to_string(&self.to_json())
    }
}

impl From<ConfigError> for TableResult {
    fn from(err: ConfigError) -> Self {
        Self::Error {
            messages: vec![err.to_string()],
        }
    }
}

fn row_to_json(row: &Row) -> JsonValue {
    let mut record = Object::new();
    for (column, value) in row {
        record.insert(column.clone(), value_to_json(value));
    }
    JsonValue::Object(record)
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::Number(Number::I64(*i)),
        Value::Float(f) => JsonValue::Number(Number::F64(*f)),
        Value::String(s) => JsonValue::String(s.clone()),
    }
}
