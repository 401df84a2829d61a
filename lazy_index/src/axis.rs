// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis coordinate multimap: sorted edge coordinates to the items with an edge there.
//!
//! Each key owns a bucket of items, so any number of items may share an edge
//! coordinate. Every bucket entry remembers whether the coordinate is the item's
//! min or max edge, which lets full scans fire once per item and lets removal
//! verify it is unlinking the edge it expects.

use alloc::collections::BTreeMap;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::Bound;

/// Which edge of an item a coordinate belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The item's minimum on this axis.
    Min,
    /// The item's maximum on this axis.
    Max,
}

impl core::fmt::Display for Edge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Min => f.write_str("min"),
            Self::Max => f.write_str("max"),
        }
    }
}

/// An f64 wrapper that implements `Ord` using `total_cmp`.
///
/// `-0.0` is folded into `0.0` on construction so both land in one bucket.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Coord(f64);

impl Coord {
    #[inline]
    pub(crate) fn new(v: f64) -> Self {
        Self(v + 0.0)
    }

    #[inline]
    pub(crate) fn get(self) -> f64 {
        self.0
    }
}

impl Eq for Coord {}

impl PartialOrd for Coord {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Ordered multimap from edge coordinate to the items with an edge at it.
pub struct AxisMap<P: Copy + Ord + Debug> {
    buckets: BTreeMap<Coord, BTreeMap<P, Edge>>,
    entries: usize,
}

impl<P: Copy + Ord + Debug> Default for AxisMap<P> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
            entries: 0,
        }
    }
}

impl<P: Copy + Ord + Debug> Debug for AxisMap<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisMap")
            .field("keys", &self.buckets.len())
            .field("entries", &self.entries)
            .field("first", &self.first_key())
            .field("last", &self.last_key())
            .finish_non_exhaustive()
    }
}

impl<P: Copy + Ord + Debug> AxisMap<P> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `item`'s `edge` at `coord`.
    ///
    /// Returns false (and leaves the map untouched) if `item` already has an
    /// entry at this exact coordinate.
    pub fn insert(&mut self, coord: f64, item: P, edge: Edge) -> bool {
        let bucket = self.buckets.entry(Coord::new(coord)).or_default();
        if bucket.contains_key(&item) {
            return false;
        }
        bucket.insert(item, edge);
        self.entries += 1;
        true
    }

    /// Remove `item` from the bucket at `coord`, dropping the bucket if it empties.
    ///
    /// Returns the edge kind that was stored, or `None` if there was no such entry.
    pub fn remove(&mut self, coord: f64, item: P) -> Option<Edge> {
        let key = Coord::new(coord);
        let bucket = self.buckets.get_mut(&key)?;
        let edge = bucket.remove(&item)?;
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        self.entries -= 1;
        Some(edge)
    }

    /// Edge kind stored for `item` at `coord`, if any.
    pub fn get(&self, coord: f64, item: P) -> Option<Edge> {
        self.buckets
            .get(&Coord::new(coord))
            .and_then(|b| b.get(&item).copied())
    }

    /// Ordered scan of entries whose coordinate lies in `[lo, hi]`.
    ///
    /// Yields nothing if `lo > hi` or either bound is NaN.
    pub fn range(&self, lo: f64, hi: f64) -> impl Iterator<Item = (f64, P, Edge)> + '_ {
        let valid = lo <= hi;
        let (lo, hi) = if valid { (lo, hi) } else { (0.0, 0.0) };
        self.buckets
            .range((
                Bound::Included(Coord::new(lo)),
                Bound::Included(Coord::new(hi)),
            ))
            .filter(move |_| valid)
            .flat_map(|(k, bucket)| bucket.iter().map(move |(&p, &e)| (k.get(), p, e)))
    }

    /// Ordered scan of every entry.
    pub fn iter(&self) -> impl Iterator<Item = (f64, P, Edge)> + '_ {
        self.buckets
            .iter()
            .flat_map(|(k, bucket)| bucket.iter().map(move |(&p, &e)| (k.get(), p, e)))
    }

    /// Ordered scan of buckets as `(coord, bucket size)`.
    pub fn buckets(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.buckets.iter().map(|(k, b)| (k.get(), b.len()))
    }

    /// Smallest coordinate held.
    pub fn first_key(&self) -> Option<f64> {
        self.buckets.first_key_value().map(|(k, _)| k.get())
    }

    /// Largest coordinate held.
    pub fn last_key(&self) -> Option<f64> {
        self.buckets.last_key_value().map(|(k, _)| k.get())
    }

    /// Number of distinct coordinates.
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of `(coordinate, item)` entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// True if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.entries = 0;
    }
}
