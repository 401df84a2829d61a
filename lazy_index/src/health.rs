// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Health estimate for the widened-window broad phase.
//!
//! Every query window grows by the largest indexed extent, so a single outlier
//! (one road spanning the whole map among thousands of small agents) makes every
//! window nearly as wide as the map. The health of an axis compares the mean
//! normalized extent with the normalized maximum: near `1.0` means items are
//! close to the maximum size and widening costs little; near `0.0` means a few
//! items dominate the maximum and queries degrade toward full scans.

use core::fmt::Debug;

use crate::index::LazyIndex;

/// Per-axis health in `[0, 1]`, higher is better.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Health {
    /// Horizontal health (driven by `max_width`).
    pub x: f64,
    /// Vertical health (driven by `max_height`).
    pub y: f64,
}

impl Health {
    /// The lower of the two components.
    pub fn worst(&self) -> f64 {
        self.x.min(self.y)
    }
}

impl From<Health> for (f64, f64) {
    fn from(h: Health) -> Self {
        (h.x, h.y)
    }
}

impl<P: Copy + Ord + Debug> LazyIndex<P> {
    /// Estimate how well the current running maxima fit the item size distribution.
    ///
    /// Per axis: `1 - |max / span - mean(extent / span)|`, clamped to `[0, 1]`, where
    /// `span` is the distance between the first and last edge on that axis. Stale
    /// maxima left behind by removals lower the estimate. An empty index is fully
    /// healthy. O(n).
    pub fn estimate_health(&self) -> Health {
        let (Some(b), n) = (self.bounds(), self.len()) else {
            return Health { x: 1.0, y: 1.0 };
        };
        let (span_x, span_y) = (b.width(), b.height());
        let (sum_x, sum_y) = self
            .bounds
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sx, sy), (_, a)| {
                (sx + a.width(), sy + a.height())
            });
        let count = n as f64;
        let health = Health {
            x: axis_health(sum_x / count, self.max_width, span_x),
            y: axis_health(sum_y / count, self.max_height, span_y),
        };
        tracing::debug!(
            items = n,
            health_x = health.x,
            health_y = health.y,
            max_width = self.max_width,
            max_height = self.max_height,
            "estimated index health"
        );
        health
    }
}

fn axis_health(mean_extent: f64, max_extent: f64, span: f64) -> f64 {
    if !(span > 0.0) {
        return 1.0;
    }
    let diff = max_extent / span - mean_extent / span;
    let diff = if diff < 0.0 { -diff } else { diff };
    (1.0 - diff).clamp(0.0, 1.0)
}
