//! Query composition: clause building plus the types shared with sources.

mod compose;
mod types;

pub(crate) use compose::{
    compose_order, compose_page, compose_static_where, compose_where, has_client_fragments,
};
pub use types::{OrderBy, Page, SelectQuery, SortDir, Value, WhereClause};
