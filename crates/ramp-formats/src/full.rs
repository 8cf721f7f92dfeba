//! Full `.gradient`: an editor metadata header carrying the exact stops,
//! followed by a 512-entry sample table that older readers understand.
//!
//! ```text
//! # editor_version=1.0
//! # editable_stops:
//! # pos=0.000000 color=#ff6b6b
//! # pos=1.000000 color=#45b7d1
//!
//! gradient:
//!  title="CustomGradient" smooth=no
//!  index=0 color=16739179
//!  …
//!  index=511 color=4568017
//! ```

use std::fmt::Write as _;

use ramp_engine::paint::{sample, ColorStop, InterpolationMode};

use crate::TABLE_SIZE;

pub const EDITOR_VERSION: &str = "1.0";

/// Encodes both representations. The table is sampled with `mode` at
/// `t = i / 511`.
pub fn encode_full(stops: &[ColorStop], mode: InterpolationMode) -> String {
    let mut out = String::with_capacity(64 + stops.len() * 32 + TABLE_SIZE * 28);

    let _ = writeln!(out, "# editor_version={EDITOR_VERSION}");
    out.push_str("# editable_stops:\n");
    for s in stops {
        let _ = writeln!(out, "# pos={:.6} color={}", s.position, s.color);
    }

    out.push_str("\ngradient:\n");
    out.push_str(" title=\"CustomGradient\" smooth=no\n");
    for (i, packed) in sample_table(stops, mode).iter().enumerate() {
        let _ = writeln!(out, " index={i} color={packed}");
    }
    out
}

/// The packed `(r << 16) | (g << 8) | b` colors of the sample table.
pub fn sample_table(stops: &[ColorStop], mode: InterpolationMode) -> Vec<u32> {
    let last = (TABLE_SIZE - 1) as f64;
    (0..TABLE_SIZE)
        .map(|i| sample(stops, i as f64 / last, mode).packed())
        .collect()
}
