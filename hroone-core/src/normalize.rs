//! Case folding for identifier-like and text fields.
//!
//! Every field that participates in matching (user ids, product names,
//! sizes) goes through here exactly once, before it reaches a store or a
//! comparison. Handlers and domain types must not lowercase ad hoc.

/// Fold a field to its canonical lowercase form.
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Fold an optional field, preserving `None`.
pub fn fold_opt(value: Option<String>) -> Option<String> {
    value.map(|v| fold(&v))
}
