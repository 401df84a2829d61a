// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lazy_index --heading-base-level=0

//! Lazy Index: a dual-axis 2D AABB index that never rebuilds a tree.
//!
//! Lazy Index answers "which items overlap this rectangle" for viewport culling and
//! pointer picking, with cheap inserts, removals, and moves for items that change every
//! frame.
//!
//! - Insert, move, and remove axis-aligned bounding boxes (AABBs) for caller-owned item handles.
//! - Query a rectangle or a point; matches (and optionally broad-phase false positives) are
//!   delivered through callbacks or collected into an iterator.
//! - Check the [health](LazyIndex::estimate_health) of the index when item sizes are skewed.
//!
//! ## How it works
//!
//! Each axis keeps a sorted multimap from edge coordinate to the items with an edge there
//! (min or max). A bounds table maps every item to its authoritative box. A query scans
//! both axis maps over the query rectangle widened by the largest indexed width and
//! height, intersects the two candidate sets, and tests each candidate's real box against
//! the rectangle. Widening guarantees no false negatives: an item overlapping the
//! rectangle always has an edge on each axis inside the window.
//!
//! The running maxima only grow. Removing the widest item does not shrink them, which
//! keeps removal O(log n); call [`LazyIndex::recompute_maxima`] after bulk removals.
//!
//! # Example
//!
//! ```rust
//! use lazy_index::{Aabb2D, LazyIndex};
//!
//! let mut idx: LazyIndex<u32> = LazyIndex::new();
//! idx.insert(1, Aabb2D::from_xywh(0.0, 0.0, 10.0, 10.0)).unwrap();
//! idx.insert(2, Aabb2D::from_xywh(5.0, 5.0, 10.0, 10.0)).unwrap();
//! idx.insert(3, Aabb2D::from_xywh(100.0, 100.0, 5.0, 5.0)).unwrap();
//!
//! // Viewport culling.
//! let mut visible: Vec<_> = idx.query_rect(Aabb2D::from_xywh(0.0, 0.0, 15.0, 15.0)).collect();
//! visible.sort();
//! assert_eq!(visible, [1, 2]);
//!
//! // Move an item and pick at a point.
//! idx.move_item(1, Aabb2D::from_xywh(200.0, 200.0, 5.0, 5.0)).unwrap();
//! assert_eq!(idx.query_point(202.0, 202.0).collect::<Vec<_>>(), [1]);
//! ```
//!
//! Callbacks can also observe the broad-phase false positives, for example to draw
//! them in a debug overlay:
//!
//! ```rust
//! use lazy_index::{Aabb2D, LazyIndex};
//!
//! let mut idx: LazyIndex<&str> = LazyIndex::new();
//! idx.insert("road", Aabb2D::from_xywh(0.0, 0.0, 100.0, 2.0)).unwrap();
//! idx.insert("car", Aabb2D::from_xywh(60.0, 5.0, 2.0, 2.0)).unwrap();
//!
//! let mut drawn = Vec::new();
//! let mut skipped = Vec::new();
//! let mut on_false_positive = |item: &'static str| skipped.push(item);
//! let stats = idx.query(
//!     Aabb2D::from_xywh(55.0, 0.0, 4.0, 4.0),
//!     true,
//!     |item| drawn.push(item),
//!     Some(&mut on_false_positive),
//! );
//! assert_eq!(drawn, ["road"]);
//! assert_eq!(skipped, ["car"]);
//! assert_eq!(stats.candidates, 2);
//! ```
//!
//! ## Item handles
//!
//! Items are opaque handles: `P: Copy + Ord + Debug`. Use an id, an index into your own
//! storage, or a generational key. The index never owns or inspects the items themselves.
//!
//! ## Errors
//!
//! Caller mistakes ([`IndexError`]) come back as values and leave the index unchanged.
//! A broken internal invariant ([`ConsistencyError`]) is a bug: mutations panic on it, and
//! [`LazyIndex::check_invariants`] reports it for tests and debugging.
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. Share across threads behind your own lock.
//!
//! ### Float semantics
//!
//! Boxes must be finite with positive width and height. Intervals are closed: touching
//! boxes overlap. Zero-area query rectangles act as point or line picks.
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to dependencies.
//! - `kurbo`: `From` conversions between [`Aabb2D`] and `kurbo::Rect`.
//! - `serde`: `Serialize`/`Deserialize` for [`IndexConfig`].

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod axis;
pub mod bounds;
pub mod config;
pub mod error;
pub mod health;
pub mod index;
pub mod query;
pub mod types;

pub use axis::{AxisMap, Edge};
pub use bounds::BoundsTable;
pub use config::IndexConfig;
pub use error::{Axis, ConsistencyError, IndexError};
pub use health::Health;
pub use index::LazyIndex;
pub use query::QueryStats;
pub use types::Aabb2D;
