// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `LazyIndex` type: insert, remove, and move items while keeping both axis maps,
//! the bounds table, and the running maxima in step.

use core::fmt::Debug;

use crate::axis::{AxisMap, Edge};
use crate::bounds::BoundsTable;
use crate::config::IndexConfig;
use crate::error::{Axis, ConsistencyError, IndexError, fatal};
use crate::types::Aabb2D;

/// Lazy dual-axis spatial index over item handles `P`.
///
/// Items are caller-owned; the index stores only the handle and its box.
/// See the [crate docs](crate) for the query model.
pub struct LazyIndex<P: Copy + Ord + Debug> {
    pub(crate) axis_x: AxisMap<P>,
    pub(crate) axis_y: AxisMap<P>,
    pub(crate) bounds: BoundsTable<P>,
    pub(crate) max_width: f64,
    pub(crate) max_height: f64,
    pub(crate) config: IndexConfig,
}

impl<P: Copy + Ord + Debug> Default for LazyIndex<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy + Ord + Debug> Debug for LazyIndex<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LazyIndex")
            .field("items", &self.bounds.len())
            .field("max_width", &self.max_width)
            .field("max_height", &self.max_height)
            .field("axis_x", &self.axis_x)
            .field("axis_y", &self.axis_y)
            .finish_non_exhaustive()
    }
}

impl<P: Copy + Ord + Debug> LazyIndex<P> {
    /// Create an empty index with the default [`IndexConfig`].
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create an empty index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            axis_x: AxisMap::new(),
            axis_y: AxisMap::new(),
            bounds: BoundsTable::default(),
            max_width: 0.0,
            max_height: 0.0,
            config: config.sanitized(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// True if no items are indexed.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Whether `item` is indexed.
    pub fn contains(&self, item: P) -> bool {
        self.bounds.contains(item)
    }

    /// Current box of `item`.
    pub fn get(&self, item: P) -> Option<Aabb2D> {
        self.bounds.get(item)
    }

    /// Iterate `(item, box)` for every live item, in item order.
    pub fn iter(&self) -> impl Iterator<Item = (P, Aabb2D)> + '_ {
        self.bounds.iter()
    }

    /// Running maximum width. Never shrinks except through [`Self::recompute_maxima`].
    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    /// Running maximum height. Never shrinks except through [`Self::recompute_maxima`].
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Insert `item` with box `aabb`.
    ///
    /// Fails with [`IndexError::DegenerateBox`] when either extent is not positive,
    /// [`IndexError::NonFiniteBox`] for infinite or NaN coordinates, and
    /// [`IndexError::DuplicateItem`] when `item` is already present. A failed insert
    /// leaves the index unchanged.
    pub fn insert(&mut self, item: P, aabb: Aabb2D) -> Result<(), IndexError> {
        validate(&aabb)?;
        if !self.bounds.insert(item, aabb) {
            return Err(IndexError::DuplicateItem);
        }
        self.link(item, &aabb);
        Ok(())
    }

    /// Remove `item`, returning the box it had.
    ///
    /// The bounds table is authoritative. `bounds_hint` is the caller's idea of the
    /// item's box; a hint that does not cover the stored box is logged and ignored.
    ///
    /// The running maxima are left alone; call [`Self::recompute_maxima`] after bulk
    /// removals if tight bounds matter.
    pub fn remove(&mut self, item: P, bounds_hint: Option<Aabb2D>) -> Result<Aabb2D, IndexError> {
        let aabb = self.bounds.remove(item).ok_or(IndexError::NotFound)?;
        if let Some(hint) = bounds_hint
            && !hint.contains(&aabb)
        {
            tracing::warn!(?item, ?hint, stored = ?aabb, "ignoring stale bounds hint on remove");
        }
        self.unlink(item, &aabb);
        Ok(aabb)
    }

    /// Move `item` to `new_box`, returning the previous box.
    ///
    /// Equivalent to [`Self::remove`] followed by [`Self::insert`] with nothing
    /// observable in between. `new_box` is validated first, so a failed move leaves
    /// the index unchanged.
    pub fn move_item(&mut self, item: P, new_box: Aabb2D) -> Result<Aabb2D, IndexError> {
        validate(&new_box)?;
        let old = self
            .bounds
            .replace(item, new_box)
            .ok_or(IndexError::NotFound)?;
        self.unlink(item, &old);
        self.link(item, &new_box);
        Ok(old)
    }

    /// Tighten `max_width`/`max_height` to the live items. O(n).
    pub fn recompute_maxima(&mut self) {
        let (w, h) = self
            .bounds
            .iter()
            .fold((0.0_f64, 0.0_f64), |(w, h), (_, a)| {
                (w.max(a.width()), h.max(a.height()))
            });
        tracing::debug!(
            old_width = self.max_width,
            old_height = self.max_height,
            width = w,
            height = h,
            "recomputed running maxima"
        );
        self.max_width = w;
        self.max_height = h;
    }

    /// Overall indexed extent, from the smallest and largest edge on each axis.
    ///
    /// `None` when empty.
    pub fn bounds(&self) -> Option<Aabb2D> {
        Some(Aabb2D::new(
            self.axis_x.first_key()?,
            self.axis_y.first_key()?,
            self.axis_x.last_key()?,
            self.axis_y.last_key()?,
        ))
    }

    /// [`Self::bounds`] grown about its center by [`IndexConfig::bounds_expansion`].
    ///
    /// Handy as an initial viewport that is guaranteed to show every item.
    pub fn bounds_expanded(&self) -> Option<Aabb2D> {
        let b = self.bounds()?;
        Some(b.scale_about_center(1.0 + self.config.bounds_expansion))
    }

    /// Remove everything and reset the running maxima.
    pub fn clear(&mut self) {
        self.axis_x.clear();
        self.axis_y.clear();
        self.bounds.clear();
        self.max_width = 0.0;
        self.max_height = 0.0;
    }

    /// Verify the index invariant. O(n log n).
    ///
    /// Checks that every live item has exactly its four edge entries, that no other
    /// entries or empty buckets exist, and that the running maxima cover every extent.
    pub fn check_invariants(&self) -> Result<(), ConsistencyError> {
        let items = self.bounds.len();
        for (axis, map) in [(Axis::X, &self.axis_x), (Axis::Y, &self.axis_y)] {
            if map.entry_count() != 2 * items {
                return Err(ConsistencyError::EntryCount {
                    axis,
                    entries: map.entry_count(),
                    items,
                });
            }
            if let Some((coord, _)) = map.buckets().find(|&(_, n)| n == 0) {
                return Err(ConsistencyError::EmptyBucket { axis, coord });
            }
        }
        for (item, a) in self.bounds.iter() {
            let edges = [
                (Axis::X, &self.axis_x, Edge::Min, a.min_x),
                (Axis::X, &self.axis_x, Edge::Max, a.max_x),
                (Axis::Y, &self.axis_y, Edge::Min, a.min_y),
                (Axis::Y, &self.axis_y, Edge::Max, a.max_y),
            ];
            for (axis, map, edge, coord) in edges {
                if map.get(coord, item) != Some(edge) {
                    return Err(ConsistencyError::MissingEdge { axis, edge, coord });
                }
            }
            if a.width() > self.max_width {
                return Err(ConsistencyError::MaximumTooSmall {
                    axis: Axis::X,
                    max: self.max_width,
                    extent: a.width(),
                });
            }
            if a.height() > self.max_height {
                return Err(ConsistencyError::MaximumTooSmall {
                    axis: Axis::Y,
                    max: self.max_height,
                    extent: a.height(),
                });
            }
        }
        // Entry counts and edge lookups already match; this only fires on an entry whose
        // item has no table row.
        for (axis, map) in [(Axis::X, &self.axis_x), (Axis::Y, &self.axis_y)] {
            if let Some((coord, _, _)) = map.iter().find(|&(_, p, _)| !self.bounds.contains(p)) {
                return Err(ConsistencyError::StrayEntry { axis, coord });
            }
        }
        Ok(())
    }

    fn link(&mut self, item: P, a: &Aabb2D) {
        let linked = self.axis_x.insert(a.min_x, item, Edge::Min)
            & self.axis_x.insert(a.max_x, item, Edge::Max)
            & self.axis_y.insert(a.min_y, item, Edge::Min)
            & self.axis_y.insert(a.max_y, item, Edge::Max);
        if !linked {
            // Only reachable if an entry outlived its bounds table row.
            fatal(ConsistencyError::StrayEntry {
                axis: Axis::X,
                coord: a.min_x,
            });
        }
        self.max_width = self.max_width.max(a.width());
        self.max_height = self.max_height.max(a.height());
    }

    fn unlink(&mut self, item: P, a: &Aabb2D) {
        let edges = [
            (Axis::X, Edge::Min, a.min_x),
            (Axis::X, Edge::Max, a.max_x),
            (Axis::Y, Edge::Min, a.min_y),
            (Axis::Y, Edge::Max, a.max_y),
        ];
        for (axis, edge, coord) in edges {
            let map = match axis {
                Axis::X => &mut self.axis_x,
                Axis::Y => &mut self.axis_y,
            };
            if map.remove(coord, item) != Some(edge) {
                fatal(ConsistencyError::MissingEdge { axis, edge, coord });
            }
        }
    }
}

fn validate(a: &Aabb2D) -> Result<(), IndexError> {
    if !a.is_finite() {
        return Err(IndexError::NonFiniteBox);
    }
    let (width, height) = (a.width(), a.height());
    if !(width > 0.0 && height > 0.0) {
        return Err(IndexError::DegenerateBox { width, height });
    }
    Ok(())
}
