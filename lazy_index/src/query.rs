// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range queries: broad phase over the axis maps, narrow phase against the bounds table.
//!
//! The axis maps only index edges, so an item whose edges both fall outside the
//! query rectangle (a long road crossing a small viewport) would be missed by a
//! plain range scan. The scan window is therefore widened by the largest extent
//! currently indexed on each axis: any overlapping item then has at least one
//! edge per axis inside the window.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::axis::Edge;
use crate::error::{Axis, ConsistencyError, fatal};
use crate::index::LazyIndex;
use crate::types::Aabb2D;

/// Dispatch counts for a single [`LazyIndex::query`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Broad-phase candidates dispatched (matches plus false positives).
    pub candidates: usize,
    /// Dispatches to the match callback.
    pub matches: usize,
    /// Candidates whose box missed the query rectangle.
    pub false_positives: usize,
}

impl QueryStats {
    /// Fraction of candidates that were false positives, or `0` with no candidates.
    pub fn false_positive_ratio(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.false_positives as f64 / self.candidates as f64
        }
    }
}

impl<P: Copy + Ord + Debug> LazyIndex<P> {
    /// The broad-phase window scanned for `rect`.
    ///
    /// `rect` grown about its center by [`IndexConfig::search_expansion`](crate::IndexConfig::search_expansion),
    /// then widened on each side by the running maximum extent (itself grown by the
    /// same factor).
    pub fn search_rect(&self, rect: Aabb2D) -> Aabb2D {
        let grow = 1.0 + self.config.search_expansion;
        rect.scale_about_center(grow)
            .inflate(self.max_width * grow, self.max_height * grow)
    }

    /// Visit items overlapping `rect`.
    ///
    /// Every live item whose box overlaps `rect` (closed intervals) reaches
    /// `on_match`; broad-phase candidates that do not overlap go to
    /// `on_false_positive` when given, and are dropped otherwise.
    ///
    /// With `dedupe`, each candidate is dispatched once. Without it, a candidate is
    /// dispatched once per pair of its x and y edges inside the window, so up to
    /// four times. Dispatch follows ascending y edge coordinate.
    ///
    /// An inverted `rect` visits nothing. Zero-area rectangles act as point or line picks.
    pub fn query<M>(
        &self,
        rect: Aabb2D,
        dedupe: bool,
        mut on_match: M,
        mut on_false_positive: Option<&mut dyn FnMut(P)>,
    ) -> QueryStats
    where
        M: FnMut(P),
    {
        let mut stats = QueryStats::default();
        if rect.is_empty() || self.is_empty() {
            return stats;
        }
        let window = self.search_rect(rect);

        let mut x_hits: BTreeMap<P, usize> = BTreeMap::new();
        for (_, item, _) in self.axis_x.range(window.min_x, window.max_x) {
            *x_hits.entry(item).or_insert(0) += 1;
        }

        for (coord, item, _) in self.axis_y.range(window.min_y, window.max_y) {
            if x_hits.is_empty() {
                break;
            }
            let repeats = if dedupe {
                match x_hits.remove(&item) {
                    Some(_) => 1,
                    None => continue,
                }
            } else {
                match x_hits.get(&item) {
                    Some(&n) => n,
                    None => continue,
                }
            };
            let Some(aabb) = self.bounds.get(item) else {
                fatal(ConsistencyError::StrayEntry {
                    axis: Axis::Y,
                    coord,
                });
            };
            let hit = aabb.intersects(&rect);
            for _ in 0..repeats {
                stats.candidates += 1;
                if hit {
                    stats.matches += 1;
                    on_match(item);
                } else {
                    stats.false_positives += 1;
                    if let Some(f) = on_false_positive.as_deref_mut() {
                        f(item);
                    }
                }
            }
        }

        tracing::trace!(
            ?rect,
            ?window,
            candidates = stats.candidates,
            matches = stats.matches,
            false_positives = stats.false_positives,
            "range query"
        );
        stats
    }

    /// Items overlapping `rect`, each once.
    pub fn query_rect(&self, rect: Aabb2D) -> impl Iterator<Item = P> + '_ {
        let mut out = Vec::new();
        self.query(rect, true, |p| out.push(p), None);
        out.into_iter()
    }

    /// Items whose box contains the point, each once.
    pub fn query_point(&self, x: f64, y: f64) -> impl Iterator<Item = P> + '_ {
        self.query_rect(Aabb2D::new(x, y, x, y))
    }

    /// Visit every live item in ascending x order.
    ///
    /// With `dedupe`, `on_each` fires once per item (at its min x edge) and the scan
    /// stops as soon as every item has been seen. Without it, `on_each` fires for
    /// every x edge entry, so twice per item.
    pub fn for_all_items<F>(&self, dedupe: bool, mut on_each: F)
    where
        F: FnMut(P),
    {
        let total = self.len();
        let mut seen = 0;
        for (_, item, edge) in self.axis_x.iter() {
            if !dedupe {
                on_each(item);
                continue;
            }
            if edge != Edge::Min {
                continue;
            }
            on_each(item);
            seen += 1;
            if seen >= total {
                break;
            }
        }
    }
}
