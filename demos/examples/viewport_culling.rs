// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport culling.
//!
//! Scatter agents across a map, move them every frame, and ask the index which ones fall
//! inside a scrolling viewport. Prints how much of the broad phase was wasted.
//!
//! Run:
//! - `cargo run -p lazy_index_demos --example viewport_culling`
//! - `RUST_LOG=info,lazy_index=trace cargo run -p lazy_index_demos --example viewport_culling`

use kurbo::{Rect, Vec2};
use lazy_index::{Aabb2D, LazyIndex};
use tracing_subscriber::EnvFilter;

const AGENTS: u32 = 2_000;
const FRAMES: u32 = 8;

fn main() -> Result<(), lazy_index::IndexError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut idx: LazyIndex<u32> = LazyIndex::new();
    let mut agents = Vec::with_capacity(AGENTS as usize);
    for id in 0..AGENTS {
        let x = f64::from((id * 37) % 1000);
        let y = f64::from((id * 91) % 1000);
        let rect = Rect::from_origin_size((x, y), (6.0, 6.0));
        let heading = Vec2::new(f64::from(id % 7) - 3.0, f64::from(id % 5) - 2.0);
        idx.insert(id, rect.into())?;
        agents.push((rect, heading));
    }

    for frame in 0..FRAMES {
        for (id, (rect, heading)) in (0_u32..).zip(agents.iter_mut()) {
            *rect = *rect + *heading;
            idx.move_item(id, Aabb2D::from(*rect))?;
        }

        let viewport = Rect::from_origin_size((f64::from(frame) * 40.0, 200.0), (320.0, 240.0));
        let mut visible = 0_usize;
        let stats = idx.query(viewport.into(), true, |_| visible += 1, None);
        tracing::info!(
            frame,
            visible,
            candidates = stats.candidates,
            false_positive_pct = stats.false_positive_ratio() * 100.0,
            "culled viewport"
        );
    }

    if let Some(b) = idx.bounds() {
        tracing::info!(bounds = ?Rect::from(b), "world bounds");
    }
    Ok(())
}
