//! Case-insensitive substring search over a fixed set of record fields.

use std::borrow::Cow;

/// Reads one searchable text field of a record. `None` means the field is absent.
pub type FieldAccessor<R> = fn(&R) -> Option<Cow<'_, str>>;

/// Trims and lower-cases a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns `true` when `query` is blank or any field contains it, ignoring case.
pub fn matches<R>(query: &str, record: &R, fields: &[FieldAccessor<R>]) -> bool {
    matches_normalized(&normalize_query(query), record, fields)
}

/// Same as [`matches`] for a query that went through [`normalize_query`].
pub(crate) fn matches_normalized<R>(query: &str, record: &R, fields: &[FieldAccessor<R>]) -> bool {
    if query.is_empty() {
        return true;
    }

    fields.iter().any(|field| {
        field(record)
            .map(|value| value.to_lowercase().contains(query))
            .unwrap_or(false)
    })
}
