// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Authoritative item to box table.

use alloc::collections::BTreeMap;
use core::fmt::Debug;

use crate::types::Aabb2D;

/// Maps each live item to its current box.
///
/// The axis maps only know edge coordinates; exact overlap tests and removals
/// read the box from here.
pub struct BoundsTable<P: Copy + Ord + Debug> {
    boxes: BTreeMap<P, Aabb2D>,
}

impl<P: Copy + Ord + Debug> Default for BoundsTable<P> {
    fn default() -> Self {
        Self {
            boxes: BTreeMap::new(),
        }
    }
}

impl<P: Copy + Ord + Debug> Debug for BoundsTable<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundsTable")
            .field("items", &self.boxes.len())
            .finish_non_exhaustive()
    }
}

impl<P: Copy + Ord + Debug> BoundsTable<P> {
    /// Insert `item` with `aabb`. Returns false if the item was already present.
    pub fn insert(&mut self, item: P, aabb: Aabb2D) -> bool {
        use alloc::collections::btree_map::Entry;
        match self.boxes.entry(item) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(aabb);
                true
            }
        }
    }

    /// Replace the box of a present item, returning the old one.
    pub fn replace(&mut self, item: P, aabb: Aabb2D) -> Option<Aabb2D> {
        let slot = self.boxes.get_mut(&item)?;
        Some(core::mem::replace(slot, aabb))
    }

    /// Remove `item`, returning its box.
    pub fn remove(&mut self, item: P) -> Option<Aabb2D> {
        self.boxes.remove(&item)
    }

    /// The box of `item`.
    #[inline]
    pub fn get(&self, item: P) -> Option<Aabb2D> {
        self.boxes.get(&item).copied()
    }

    /// Whether `item` is present.
    pub fn contains(&self, item: P) -> bool {
        self.boxes.contains_key(&item)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True if empty.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterate `(item, box)` in item order.
    pub fn iter(&self) -> impl Iterator<Item = (P, Aabb2D)> + '_ {
        self.boxes.iter().map(|(&p, &a)| (p, a))
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }
}
