//! Error types for configuration, composition, and execution failures.

use std::fmt;

/// The single error kind covering all validation and usage failures.
///
/// Every variant renders the user-visible message that ends up in the
/// `{error: [...]}` envelope. These reflect caller misconfiguration or
/// malformed client input and must be corrected, not retried.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The display-column list is missing or empty.
    NoColumns,
    /// The request data map is missing or empty.
    NoData,
    /// A display column is not part of the source's attribute set.
    UnknownColumn {
        /// The offending column name.
        column: String,
        /// The source (table) name, for the message.
        source: String,
        /// The attribute set the column was checked against.
        attributes: Vec<String>,
    },
    /// A configured searchable/search column is not a safe SQL identifier.
    UnsafeColumn {
        /// The offending column name.
        column: String,
    },
    /// A static condition fragment contains disallowed SQL.
    UnsafeCondition {
        /// The offending fragment.
        condition: String,
    },
    /// The `filter` field is not a JSON object of scalar values.
    FilterNotDecodable,
    /// A filter key is outside the searchable-columns allow-list.
    FilterColumnDenied {
        /// The offending filter key.
        column: String,
    },
    /// The sort direction is something other than asc/desc.
    SortOrderDenied {
        /// The direction the client sent.
        order: String,
    },
    /// The sort column is outside the display-columns allow-list.
    SortColumnDenied {
        /// The column the client sent.
        column: String,
    },
    /// Static condition count and static bind count differ.
    ConditionBindMismatch,
    /// The table source failed while executing a query.
    Source(SourceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColumns => write!(f, "No columns"),
            Self::NoData => write!(f, "No data array"),
            Self::UnknownColumn {
                column,
                source,
                attributes,
            } => {
                write!(f, "{column} is no {source} model columns: {attributes:?}")
            },
            Self::UnsafeColumn { column } => {
                write!(f, "{column} is not a valid column identifier")
            },
            Self::UnsafeCondition { condition } => {
                write!(f, "{condition} is not an allowed condition fragment")
            },
            Self::FilterNotDecodable => {
                write!(f, "filter is not a JSON object of scalar values")
            },
            Self::FilterColumnDenied { column } => {
                write!(f, "{column} filter column is no access model columns")
            },
            Self::SortOrderDenied { order } => {
                write!(f, "{order} is not access (\"asc\" and \"desc\" orders)")
            },
            Self::SortColumnDenied { column } => {
                write!(f, "{column} sort column is no access model columns")
            },
            Self::ConditionBindMismatch => write!(f, "Count condition != count bind"),
            Self::Source(err) => write!(f, "query execution failed: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SourceError> for ConfigError {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}

/// Failure reported by a [`TableSource`] implementation.
///
/// Carries the backend's own message; the executor wraps it into
/// [`ConfigError::Source`] so it surfaces through the error envelope like
/// every other failure.
///
/// [`TableSource`]: crate::TableSource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError(String);

impl SourceError {
    /// Wrap a backend error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The backend's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for SourceError {}
