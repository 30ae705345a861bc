//! Property-based fuzzing tests using proptest

use grid_sql::json::{Object, Value as JsonValue};
use grid_sql::{
    ColumnList, Row, SelectQuery, SourceError, TableConfig, TableQuery, TableSource, WhereClause,
};
use proptest::prelude::*;

struct NullSource {
    attributes: Vec<String>,
}

impl TableSource for NullSource {
    fn source(&self) -> &str {
        "fuzz"
    }

    fn attributes(&self) -> &[String] {
        &self.attributes
    }

    fn select(&self, _query: &SelectQuery) -> Result<Vec<Row>, SourceError> {
        Ok(Vec::new())
    }

    fn count(&self, _filter: Option<&WhereClause>) -> Result<u64, SourceError> {
        Ok(0)
    }
}

fn null_source() -> NullSource {
    NullSource {
        attributes: vec!["id".into(), "name".into(), "status".into()],
    }
}

proptest! {
    /// Comma-joined and list forms of a column list normalize identically.
    #[test]
    fn column_list_round_trips(
        names in proptest::collection::vec("[a-zA-Z_][a-zA-Z0-9_]{0,15}", 1..8)
    ) {
        let csv = names.join(",");
        let from_csv = ColumnList::from(csv.as_str());
        let from_list = ColumnList::from(names.clone());
        prop_assert_eq!(from_csv, from_list);
    }

    /// Whitespace padding around entries never changes the normalized list.
    #[test]
    fn column_list_ignores_padding(
        names in proptest::collection::vec("[a-z]{1,10}", 1..6)
    ) {
        let padded = names
            .iter()
            .map(|name| format!("  {name} "))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(
            ColumnList::from(padded.as_str()),
            ColumnList::from(names.clone())
        );
    }

    /// Arbitrary filter payloads never panic the pipeline; the worst case
    /// is an error envelope.
    #[test]
    fn arbitrary_filter_strings_dont_panic(filter in ".*") {
        let mut data = Object::new();
        data.insert("filter".to_string(), JsonValue::String(filter));
        let source = null_source();
        let config = TableConfig::new("id,name").s_columns("status").data(data);
        let query = TableQuery::new(&source, config).unwrap();
        let _ = query.get_result();
    }

    /// Arbitrary scalar request fields never panic.
    #[test]
    fn arbitrary_scalar_fields_dont_panic(
        sort in ".*",
        order in ".*",
        limit in ".*",
        offset in ".*",
        search in ".*",
    ) {
        let mut data = Object::new();
        data.insert("sort".to_string(), JsonValue::String(sort));
        data.insert("order".to_string(), JsonValue::String(order));
        data.insert("limit".to_string(), JsonValue::String(limit));
        data.insert("offset".to_string(), JsonValue::String(offset));
        data.insert("search".to_string(), JsonValue::String(search));
        let source = null_source();
        let config = TableConfig::new("id,name").search_column("name").data(data);
        let query = TableQuery::new(&source, config).unwrap();
        let _ = query.get_result();
    }

    /// Numeric limits, with or against the cap, never produce an error
    /// envelope.
    #[test]
    fn numeric_limits_never_error(limit in 0u32..10_000, cap in 1u32..500) {
        let mut data = Object::new();
        data.insert("limit".to_string(), JsonValue::String(limit.to_string()));
        let source = null_source();
        let config = TableConfig::new("id,name").max_rows(cap).data(data);
        let query = TableQuery::new(&source, config).unwrap();
        let result = query.get_result();
        prop_assert!(!result.is_error());
    }
}
