//! Form endpoint derivation
//!
//! Page requests arrive on `api/admin/{resource}/create` (or `/edit`); the
//! form they return submits to the sibling `store` (or `save`) endpoint,
//! expressed without the API prefix.

/// Replace the first occurrence of `search` in `subject`
///
/// An empty `search` leaves the subject unchanged.
#[must_use]
pub fn replace_first(subject: &str, search: &str, replace: &str) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    subject.find(search).map_or_else(
        || subject.to_string(),
        |at| format!("{}{replace}{}", &subject[..at], &subject[at + search.len()..]),
    )
}

/// Replace the last occurrence of `search` in `subject`
///
/// An empty `search` leaves the subject unchanged.
#[must_use]
pub fn replace_last(subject: &str, search: &str, replace: &str) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    subject.rfind(search).map_or_else(
        || subject.to_string(),
        |at| format!("{}{replace}{}", &subject[..at], &subject[at + search.len()..]),
    )
}

/// Derive a sibling endpoint from a request path
///
/// Strips a leading `/`, removes the first occurrence of `api_prefix`,
/// then swaps the last `from` for `to`.
///
/// ```rust
/// use acton_admin::resource::derive_endpoint;
///
/// assert_eq!(
///     derive_endpoint("/api/admin/article/create", "api/", "/create", "/store"),
///     "admin/article/store"
/// );
/// ```
#[must_use]
pub fn derive_endpoint(path: &str, api_prefix: &str, from: &str, to: &str) -> String {
    let path = path.trim_start_matches('/');
    replace_last(&replace_first(path, api_prefix, ""), from, to)
}
