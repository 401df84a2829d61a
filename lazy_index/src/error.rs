// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for index mutation and invariant checking.

use thiserror::Error;

/// Caller errors returned by [`LazyIndex`](crate::LazyIndex) mutations.
///
/// None of these are retried internally; a failed call leaves the index unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum IndexError {
    /// The box has zero (or negative, or NaN) width or height.
    #[error("degenerate box: width {width} and height {height} must both be positive")]
    DegenerateBox {
        /// Width of the rejected box.
        width: f64,
        /// Height of the rejected box.
        height: f64,
    },

    /// The box has an infinite or NaN coordinate.
    #[error("box coordinates must be finite")]
    NonFiniteBox,

    /// The item handle is already indexed.
    #[error("item is already present in the index")]
    DuplicateItem,

    /// The item handle is not indexed.
    #[error("item not found in the index")]
    NotFound,
}

/// Which axis map a [`ConsistencyError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal edges.
    X,
    /// Vertical edges.
    Y,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// A broken internal invariant.
///
/// This signals a bookkeeping bug, not a caller error. Mutations that run into one
/// panic instead of continuing with an index that would miss or repeat results;
/// [`LazyIndex::check_invariants`](crate::LazyIndex::check_invariants) reports it as a value.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConsistencyError {
    /// A live item has no entry (or the wrong edge kind) at one of its edge coordinates.
    #[error("{axis} axis is missing the {edge} edge of an item at {coord}")]
    MissingEdge {
        /// Axis map that was searched.
        axis: Axis,
        /// Which edge was expected.
        edge: crate::axis::Edge,
        /// Expected coordinate.
        coord: f64,
    },

    /// An axis map entry does not correspond to a live item edge.
    #[error("{axis} axis holds a stray entry at {coord}")]
    StrayEntry {
        /// Axis map holding the entry.
        axis: Axis,
        /// Coordinate of the entry.
        coord: f64,
    },

    /// An axis map keeps a bucket with no items in it.
    #[error("{axis} axis keeps an empty bucket at {coord}")]
    EmptyBucket {
        /// Axis map holding the bucket.
        axis: Axis,
        /// Coordinate of the bucket.
        coord: f64,
    },

    /// An axis map does not hold exactly two entries per live item.
    #[error("{axis} axis holds {entries} entries for {items} items")]
    EntryCount {
        /// Axis map that was counted.
        axis: Axis,
        /// Entries found.
        entries: usize,
        /// Items in the bounds table.
        items: usize,
    },

    /// A running maximum is smaller than a live item's extent.
    #[error("running maximum on the {axis} axis ({max}) is below a live extent ({extent})")]
    MaximumTooSmall {
        /// Axis of the maximum.
        axis: Axis,
        /// Stored running maximum.
        max: f64,
        /// Extent of the offending item.
        extent: f64,
    },
}

/// Log and panic on a broken invariant found during a mutation.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: ConsistencyError) -> ! {
    tracing::error!(%err, "lazy index invariant violated");
    panic!("lazy index invariant violated: {err}");
}
