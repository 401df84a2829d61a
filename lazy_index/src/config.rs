// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for [`LazyIndex`](crate::LazyIndex).

/// Relative tolerances applied around queries and reported bounds.
///
/// Both default to `0.001` (0.1%).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexConfig {
    /// Relative growth of the broad-phase window, applied both to the query
    /// rectangle (about its center) and to the max-extent widening. Absorbs
    /// float rounding at window boundaries; does not affect which items match.
    pub search_expansion: f64,
    /// Relative growth of [`LazyIndex::bounds_expanded`](crate::LazyIndex::bounds_expanded)
    /// about its center.
    pub bounds_expansion: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            search_expansion: 0.001,
            bounds_expansion: 0.001,
        }
    }
}

impl IndexConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the broad-phase expansion. Negative or non-finite values become `0`.
    #[must_use]
    pub fn with_search_expansion(mut self, factor: f64) -> Self {
        self.search_expansion = sanitize(factor);
        self
    }

    /// Set the reported-bounds expansion. Negative or non-finite values become `0`.
    #[must_use]
    pub fn with_bounds_expansion(mut self, factor: f64) -> Self {
        self.bounds_expansion = sanitize(factor);
        self
    }

    /// Copy with every field passed through the builder clamping.
    pub(crate) fn sanitized(self) -> Self {
        Self {
            search_expansion: sanitize(self.search_expansion),
            bounds_expansion: sanitize(self.bounds_expansion),
        }
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
