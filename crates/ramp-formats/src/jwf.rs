//! JWildfire plain gradient: a `JWFGradient` header, then `pos r g b` lines
//! with `pos` in 0..=255.

use std::fmt::Write as _;

use ramp_engine::paint::ColorStop;

use crate::parser::sorted;

pub const JWF_HEADER: &str = "JWFGradient";

/// Encodes stops sorted by position. Positions are rounded to 1/255 steps.
pub fn encode_jwf(stops: &[ColorStop]) -> String {
    let mut out = String::with_capacity(16 + stops.len() * 16);
    out.push_str(JWF_HEADER);
    out.push('\n');
    for s in sorted(stops.to_vec()) {
        let pos = (s.position * 255.0).round() as u32;
        let _ = writeln!(out, "{pos} {} {} {}", s.color.r, s.color.g, s.color.b);
    }
    out
}
