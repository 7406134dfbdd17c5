use thiserror::Error;

use crate::server::model::query::FieldKind;

/// Malformed list request input.
///
/// Every variant is a client error and results in a 400 Bad Request; the
/// message is safe to return because it only echoes caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// A filter, `select` or `sort` names a field the resource does not declare.
    #[error("Unknown field '{field}'")]
    UnknownField { field: String },

    /// A filter value does not parse as the field's declared type.
    #[error("Invalid value '{value}' for field '{field}': expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: FieldKind,
    },

    /// An `in` filter was given no values.
    #[error("Empty value list for field '{field}'")]
    EmptyInList { field: String },

    /// `(page - 1) * limit` does not fit the database offset.
    #[error("Page {page} with limit {limit} is out of range")]
    WindowOutOfRange { page: u64, limit: u64 },
}
