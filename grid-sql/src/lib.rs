// =============================================================================
// CRATE-LEVEL QUALITY LINTS (following Tokio/Serde standards)
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Code items in docs - extensive doc changes needed
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods return Self by design
#![allow(clippy::must_use_candidate)] // Builder methods - fluent API doesn't need must_use

//! # grid-sql - Paginated-Table Requests to Parameterized SQL
//!
//! Translates the untrusted, flat payload a paginated-table widget posts
//! (bootstrap-table style: `search`, `sort`, `order`, `offset`, `limit`, and
//! a JSON-encoded `filter` object) into a parameterized, bound query;
//! executes it through a pluggable [`TableSource`]; and returns rows plus
//! reconciled filtered/unfiltered counts.
//!
//! Client-supplied column names never reach clause text unchecked: filter
//! keys must be in the `s_columns` allow-list, sort columns in the display
//! `columns` list, and every value travels as a named bind.
//!
//! ## Quick Start
//!
//! ```
//! use grid_sql::{TableConfig, TableQuery, TableResult};
//! # use grid_sql::{Row, SelectQuery, SourceError, TableSource, WhereClause};
//! # struct Resets(Vec<String>);
//! # impl TableSource for Resets {
//! #     fn source(&self) -> &str { "resets" }
//! #     fn attributes(&self) -> &[String] { &self.0 }
//! #     fn select(&self, _: &SelectQuery) -> Result<Vec<Row>, SourceError> { Ok(Vec::new()) }
//! #     fn count(&self, _: Option<&WhereClause>) -> Result<u64, SourceError> { Ok(0) }
//! # }
//! # let source = Resets(vec![
//! #     "id".into(), "usersId".into(), "ipAddress".into(), "type".into(), "createdAt".into(),
//! # ]);
//! # let body = r#"{"limit":"10","sort":"createdAt","order":"desc"}"#;
//! # let grid_sql::json::Value::Object(payload) =
//! #     grid_sql::json::from_str(body).unwrap() else { unreachable!() };
//! let config = TableConfig::new("id,usersId,ipAddress,type,createdAt")
//!     .s_columns("ipAddress,type")
//!     .search_column("ipAddress")
//!     .conditions(&["usersId = :uid"])
//!     .bind("uid", 7)
//!     .max_rows(1000)
//!     .data(payload);
//!
//! let result = match TableQuery::new(&source, config) {
//!     Ok(query) => query.get_result(),
//!     Err(err) => TableResult::from(err),
//! };
//! let body = result.to_json_string();
//! assert!(body.contains("totalNotFiltered"));
//! ```
//!
//! ## Request contract
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `search` | Free text; wrapped in `%...%` against `search_column` |
//! | `filter` | JSON-encoded object string, column -> scalar, `LIKE`-matched |
//! | `sort` / `order` | Single ORDER BY term, `order` is `asc`/`desc` any case |
//! | `limit` / `offset` | Page window; `limit` capped at `max_rows` |
//!
//! A filter value of `"<<all>>"` clears that column's restriction; empty
//! strings and nulls are ignored, while `0` is a real filter value.
//!
//! ## Result envelope
//!
//! Either `{"error": [messages]}` or
//! `{"total": n, "totalNotFiltered": n, "rows": [records]}`, never both.
//! `total` counts rows matching search+filter+static conditions,
//! `totalNotFiltered` only the static conditions.

mod config;
mod error;
mod query;
mod request;
mod source;
mod table;
mod validate;

pub use config::{ColumnList, TableConfig};
pub use error::{ConfigError, SourceError};
pub use query::{OrderBy, Page, SelectQuery, SortDir, Value, WhereClause};
pub use source::{Row, TableSource};
pub use table::{TableQuery, TableResult};
pub use validate::{is_valid_column_name, is_valid_condition};

/// Re-export miniserde's json module for payload construction and parsing.
///
/// Use this to build the `data` map or parse a request body:
///
/// ```
/// use grid_sql::json;
///
/// let json::Value::Object(payload) = json::from_str(r#"{"limit":"10"}"#).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(payload.len(), 1);
/// ```
pub use miniserde::json;

/// Prelude module for convenient imports.
///
/// ```
/// use grid_sql::prelude::*;
/// let columns = ColumnList::from("id,name");
/// assert_eq!(columns.len(), 2);
/// ```
pub mod prelude {
    pub use crate::{
        ColumnList, ConfigError, OrderBy, Page, Row, SelectQuery, SortDir, SourceError,
        TableConfig, TableQuery, TableResult, TableSource, Value, WhereClause, json,
    };
}


// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================

#[cfg(test)]
mod api_contracts {
    use static_assertions::assert_impl_all;

    // Configuration types
    assert_impl_all!(crate::ColumnList: Clone, std::fmt::Debug, PartialEq, Eq, Default);
    assert_impl_all!(crate::TableConfig: Clone, std::fmt::Debug);

    // Query types
    assert_impl_all!(crate::Value: Clone, std::fmt::Debug, PartialEq);
    assert_impl_all!(crate::SortDir: Copy, Clone, std::fmt::Debug, PartialEq, Eq);
    assert_impl_all!(crate::OrderBy: Clone, std::fmt::Debug, PartialEq, Eq);
    assert_impl_all!(crate::Page: Copy, Clone, std::fmt::Debug, PartialEq, Eq);
    assert_impl_all!(crate::WhereClause: Clone, std::fmt::Debug, PartialEq);
    assert_impl_all!(crate::SelectQuery: Clone, std::fmt::Debug, PartialEq);

    // Result types
    assert_impl_all!(crate::Row: Clone, std::fmt::Debug, PartialEq, Default);
    assert_impl_all!(crate::TableResult: Clone, std::fmt::Debug, PartialEq);

    // Error types
    assert_impl_all!(crate::ConfigError: Clone, std::fmt::Debug, PartialEq, std::error::Error);
    assert_impl_all!(crate::SourceError: Clone, std::fmt::Debug, PartialEq, Eq, std::error::Error);
}
