//! Table configuration: column allow-lists, static conditions, and the raw
//! request payload.
//!
//! Configuration is immutable once handed to [`TableQuery::new`]; validation
//! happens there, not here.
//!
//! [`TableQuery::new`]: crate::TableQuery::new

use crate::query::Value;
use miniserde::json::{Object, Value as JsonValue};
use std::fmt;

/// An ordered list of column names.
///
/// Accepts either a comma-delimited string or an explicit sequence; both
/// normalize to the same ordered list of trimmed, non-empty names.
///
/// # Example
///
/// ```
/// use grid_sql::ColumnList;
///
/// let from_csv = ColumnList::from("id, name ,status");
/// let from_list = ColumnList::from(vec!["id".to_string(), "name".into(), "status".into()]);
/// assert_eq!(from_csv, from_list);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnList(Vec<String>);

impl ColumnList {
    fn normalize<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|name| name.as_ref().trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no columns survived normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership test against the normalized names.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|column| column == name)
    }

    /// The normalized names, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Clone the normalized names into a plain vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    /// Iterate the normalized names.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<&str> for ColumnList {
    fn from(csv: &str) -> Self {
        Self::normalize(csv.split(','))
    }
}

impl From<String> for ColumnList {
    fn from(csv: String) -> Self {
        Self::from(csv.as_str())
    }
}

impl From<Vec<String>> for ColumnList {
    fn from(names: Vec<String>) -> Self {
        Self::normalize(names)
    }
}

impl From<&[&str]> for ColumnList {
    fn from(names: &[&str]) -> Self {
        Self::normalize(names.iter().copied())
    }
}

impl<const N: usize> From<&[&str; N]> for ColumnList {
    fn from(names: &[&str; N]) -> Self {
        Self::normalize(names.iter().copied())
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Configuration for one [`TableQuery`].
///
/// Mirrors the table widget's server-side contract: display columns,
/// searchable columns, an optional free-text search target, caller-supplied
/// static conditions with their binds, the raw request payload, and an
/// optional row cap.
///
/// # Example
///
/// ```
/// use grid_sql::TableConfig;
/// use grid_sql::json::{Number, Object, Value};
///
/// let mut data = Object::new();
/// data.insert("limit".to_string(), Value::Number(Number::U64(10)));
///
/// let config = TableConfig::new("id,usersId,ipAddress,createdAt")
///     .s_columns("ipAddress")
///     .search_column("ipAddress")
///     .conditions(&["usersId = :uid"])
///     .bind("uid", 7)
///     .max_rows(1000)
///     .data(data);
/// ```
///
/// [`TableQuery`]: crate::TableQuery
#[derive(Clone)]
pub struct TableConfig {
    pub(crate) columns: ColumnList,
    pub(crate) s_columns: Option<ColumnList>,
    pub(crate) search_column: Option<String>,
    pub(crate) conditions: Vec<String>,
    pub(crate) bind: Vec<(String, Value)>,
    pub(crate) data: Object,
    pub(crate) max_rows: Option<u32>,
}

impl TableConfig {
    /// Start a configuration with the display columns (string or list form).
    pub fn new(columns: impl Into<ColumnList>) -> Self {
        Self {
            columns: columns.into(),
            s_columns: None,
            search_column: None,
            conditions: Vec::new(),
            bind: Vec::new(),
            data: Object::new(),
            max_rows: None,
        }
    }

    /// Columns the client may filter on (string or list form).
    #[must_use]
    pub fn s_columns(mut self, columns: impl Into<ColumnList>) -> Self {
        self.s_columns = Some(columns.into());
        self
    }

    /// Column targeted by the free-text search box.
    #[must_use]
    pub fn search_column(mut self, column: impl Into<String>) -> Self {
        self.search_column = Some(column.into());
        self
    }

    /// Append caller-supplied condition fragments, e.g. `usersId = :uid`.
    ///
    /// Conditions only apply together with their binds; see [`bind`](Self::bind).
    #[must_use]
    pub fn conditions(mut self, conditions: &[&str]) -> Self {
        self.conditions
            .extend(conditions.iter().map(|c| (*c).to_string()));
        self
    }

    /// Append one named bind value for the static conditions.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bind.push((name.into(), value.into()));
        self
    }

    /// The raw request payload map.
    #[must_use]
    pub fn data(mut self, data: Object) -> Self {
        self.data = data;
        self
    }

    /// Cap on the number of rows any single request may fetch.
    #[must_use]
    pub fn max_rows(mut self, cap: u32) -> Self {
        self.max_rows = Some(cap);
        self
    }
}

// miniserde's Object has no Debug impl, so the payload is rendered as JSON.
impl fmt::Debug for TableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("columns", &self.columns)
            .field("s_columns", &self.s_columns)
            .field("search_column", &self.search_column)
            .field("conditions", &self.conditions)
            .field("bind", &self.bind)
            .field(
                "data",
                &miniserde::json::to_string(&JsonValue::Object(self.data.clone())),
            )
            .field("max_rows", &self.max_rows)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_and_list_forms_normalize_identically() {
        let csv = ColumnList::from("id,usersId,ipAddress");
        let list = ColumnList::from(vec![
            "id".to_string(),
            "usersId".to_string(),
            "ipAddress".to_string(),
        ]);
        assert_eq!(csv, list);
        assert_eq!(csv.as_slice(), ["id", "usersId", "ipAddress"]);
    }

    #[test]
    fn test_csv_entries_are_trimmed() {
        let columns = ColumnList::from(" id , name ,  status");
        assert_eq!(columns.as_slice(), ["id", "name", "status"]);
    }

    #[test]
    fn test_list_entries_are_trimmed() {
        let columns = ColumnList::from(vec![" id ".to_string(), "name ".to_string()]);
        assert_eq!(columns.as_slice(), ["id", "name"]);
    }

    #[test]
    fn test_empty_entries_are_dropped() {
        let columns = ColumnList::from("id,,name,");
        assert_eq!(columns.as_slice(), ["id", "name"]);
    }

    #[test]
    fn test_empty_string_normalizes_empty() {
        assert!(ColumnList::from("").is_empty());
        assert!(ColumnList::from("  ,  ").is_empty());
    }

    #[test]
    fn test_contains() {
        let columns = ColumnList::from("id,name");
        assert!(columns.contains("id"));
        assert!(columns.contains("name"));
        assert!(!columns.contains("status"));
        assert!(!columns.contains("Id"));
    }

    #[test]
    fn test_order_is_preserved() {
        let columns = ColumnList::from("z,a,m");
        assert_eq!(columns.as_slice(), ["z", "a", "m"]);
    }

    #[test]
    fn test_array_ref_form() {
        let columns = ColumnList::from(&["id", "name"]);
        assert_eq!(columns.as_slice(), ["id", "name"]);
    }

    #[test]
    fn test_builder_accumulates_conditions_and_binds() {
        let config = TableConfig::new("id,usersId")
            .conditions(&["usersId = :uid", "type = :kind"])
            .bind("uid", 7)
            .bind("kind", "reset");
        assert_eq!(config.conditions.len(), 2);
        assert_eq!(config.bind.len(), 2);
        assert_eq!(config.bind[0], ("uid".to_string(), Value::Int(7)));
        assert_eq!(
            config.bind[1],
            ("kind".to_string(), Value::String("reset".into()))
        );
    }

    #[test]
    fn test_builder_defaults() {
        let config = TableConfig::new("id");
        assert!(config.s_columns.is_none());
        assert!(config.search_column.is_none());
        assert!(config.conditions.is_empty());
        assert!(config.bind.is_empty());
        assert!(config.data.is_empty());
        assert!(config.max_rows.is_none());
    }
}
