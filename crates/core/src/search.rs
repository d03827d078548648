//! Catalog search helpers.
//!
//! Search is a case-insensitive substring match pushed down to SQL `LIKE`.
//! These helpers validate the raw query and build an escaped pattern.

use crate::error::CoreError;

/// Minimum number of characters in a search query (after trimming).
pub const MIN_QUERY_LEN: usize = 2;

/// Escape character used in every `LIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Trim a raw query and check its length.
pub fn normalize_query(raw: &str) -> Result<String, CoreError> {
    let query = raw.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(CoreError::Validation(format!(
            "Search query must be at least {MIN_QUERY_LEN} characters"
        )));
    }
    Ok(query.to_string())
}

/// Build a `%term%` pattern with `LIKE` wildcards in `term` escaped.
///
/// ```
/// use tmnt_core::search::like_pattern;
/// assert_eq!(like_pattern("turtle"), "%turtle%");
/// assert_eq!(like_pattern("100%"), "%100\\%%");
/// ```
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
