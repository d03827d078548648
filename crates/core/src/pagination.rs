//! Pagination parameters and slice semantics for list endpoints.
//!
//! Missing values fall back to defaults; out-of-range values are rejected
//! with [`CoreError::Validation`] rather than clamped.

use std::ops::Range;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page size used when the caller does not supply `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a caller may request.
pub const MAX_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A validated `limit`/`offset` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Build a page from optional user input.
    ///
    /// - `limit` must be within `1..=MAX_LIMIT` (default [`DEFAULT_LIMIT`]).
    /// - `offset` must be `>= 0` (default `0`).
    pub fn from_params(limit: Option<i64>, offset: Option<i64>) -> Result<Self, CoreError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(CoreError::Validation(format!(
                "limit must be between 1 and {MAX_LIMIT}, got {limit}"
            )));
        }

        let offset = offset.unwrap_or(0);
        if offset < 0 {
            return Err(CoreError::Validation(format!(
                "offset must not be negative, got {offset}"
            )));
        }

        Ok(Self { limit, offset })
    }

    /// Index range selected from a collection of `total` matching records.
    ///
    /// Always yields `min(limit, max(0, total - offset))` indices; an offset
    /// past the end produces an empty range.
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX).min(total);
        let len = usize::try_from(self.limit).unwrap_or(0);
        start..start.saturating_add(len).min(total)
    }

    /// Apply this page to an already-filtered, ordered sequence.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let range = self.window(items.len());
        items
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect()
    }
}

/// Validate an optional season filter (`>= 1` when present).
pub fn validate_season_filter(season: Option<i64>) -> Result<Option<i64>, CoreError> {
    match season {
        Some(s) if s < 1 => Err(CoreError::Validation(format!(
            "season must be a positive number, got {s}"
        ))),
        other => Ok(other),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
