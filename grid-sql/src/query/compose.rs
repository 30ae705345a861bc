//! Per-request clause composition.
//!
//! Builds the ordered WHERE fragments plus named binds out of the extracted
//! request, the configured allow-lists, and the caller's static conditions.
//! Fragment order is fixed: search, filters, static conditions.

use super::types::{OrderBy, Page, SortDir, Value, WhereClause};
use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::request::{FilterValue, TableRequest};

/// Sentinel filter value meaning "no restriction on this column".
const ALL_SENTINEL: &str = "<<all>>";

/// Bind name for the free-text search value.
const SEARCH_BIND: &str = "search_value";

/// Compose the full WHERE clause: search, honored filters, static conditions.
///
/// Returns `None` when no fragment applies (no WHERE at all, not an empty one).
pub(crate) fn compose_where(
    config: &TableConfig,
    request: &TableRequest,
) -> Result<Option<WhereClause>, ConfigError> {
    let mut fragments = Vec::new();
    let mut binds = Vec::new();

    // Search only applies when a target column is configured; otherwise the
    // search text is silently ignored.
    if let (Some(search), Some(column)) = (&request.search, &config.search_column) {
        fragments.push(format!("{column} LIKE :{SEARCH_BIND}"));
        binds.push((SEARCH_BIND.to_string(), Value::String(format!("%{search}%"))));
    }

    for (key, value) in &request.filter {
        if skip_filter(value) {
            continue;
        }
        let allowed = config
            .s_columns
            .as_ref()
            .is_some_and(|columns| columns.contains(key));
        if !allowed {
            return Err(ConfigError::FilterColumnDenied {
                column: key.clone(),
            });
        }
        let bind_name = format!("{key}A");
        fragments.push(format!("{key} LIKE :{bind_name}"));
        binds.push((bind_name, value.to_bind()));
    }

    append_static(config, &mut fragments, &mut binds)?;

    Ok(WhereClause::from_parts(fragments, binds))
}

/// WHERE clause for the unfiltered count: static conditions only.
pub(crate) fn compose_static_where(
    config: &TableConfig,
) -> Result<Option<WhereClause>, ConfigError> {
    let mut fragments = Vec::new();
    let mut binds = Vec::new();
    append_static(config, &mut fragments, &mut binds)?;
    Ok(WhereClause::from_parts(fragments, binds))
}

/// Static conditions apply only when conditions and binds are both present,
/// and their counts must agree.
fn append_static(
    config: &TableConfig,
    fragments: &mut Vec<String>,
    binds: &mut Vec<(String, Value)>,
) -> Result<(), ConfigError> {
    if config.conditions.is_empty() || config.bind.is_empty() {
        return Ok(());
    }
    if config.conditions.len() != config.bind.len() {
        return Err(ConfigError::ConditionBindMismatch);
    }
    fragments.extend(config.conditions.iter().cloned());
    binds.extend(config.bind.iter().cloned());
    Ok(())
}

/// A filter pair is skipped when its value is the `<<all>>` sentinel, null,
/// or the empty string. Zero values (`0`, `0.0`) and `false` are honored.
fn skip_filter(value: &FilterValue) -> bool {
    match value {
        FilterValue::Null => true,
        FilterValue::Str(s) => s.is_empty() || s == ALL_SENTINEL,
        FilterValue::Bool(_) | FilterValue::Int(_) | FilterValue::Float(_) => false,
    }
}

/// True when the request would contribute at least one client-controlled
/// fragment (search or honored filter) to the WHERE clause.
pub(crate) fn has_client_fragments(config: &TableConfig, request: &TableRequest) -> bool {
    (request.search.is_some() && config.search_column.is_some())
        || request.filter.iter().any(|(_, value)| !skip_filter(value))
}

/// Compose the ORDER BY term; both sort column and direction must be present.
pub(crate) fn compose_order(
    config: &TableConfig,
    request: &TableRequest,
) -> Result<Option<OrderBy>, ConfigError> {
    let (Some(sort), Some(order)) = (&request.sort, &request.order) else {
        return Ok(None);
    };
    let dir = SortDir::parse(order).ok_or_else(|| ConfigError::SortOrderDenied {
        order: order.clone(),
    })?;
    if !config.columns.contains(sort) {
        return Err(ConfigError::SortColumnDenied {
            column: sort.clone(),
        });
    }
    Ok(Some(OrderBy {
        column: sort.clone(),
        dir,
    }))
}

/// Compose LIMIT/OFFSET. A requested limit is capped at `max_rows`; without
/// a requested limit the cap alone applies, with no offset. An offset only
/// takes effect alongside a limit, and only when non-zero.
pub(crate) fn compose_page(config: &TableConfig, request: &TableRequest) -> Option<Page> {
    match request.limit.filter(|&limit| limit != 0) {
        Some(limit) => {
            let limit = match config.max_rows {
                Some(cap) if limit > cap => cap,
                _ => limit,
            };
            Some(Page {
                limit,
                offset: request.offset.filter(|&offset| offset != 0),
            })
        },
        None => config.max_rows.map(|cap| Page {
            limit: cap,
            offset: None,
        }),
    }
}
