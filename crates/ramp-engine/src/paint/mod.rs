//! Color and gradient model.
//!
//! Scope:
//! - 8-bit sRGB colors and HSV conversion
//! - color stops and the ordered, observable stop set
//! - the interpolation engine every consumer samples through

pub mod color;
pub mod gradient;
pub mod hsv;
pub mod interp;

pub use color::{Channel, Color, ParseColorError};
pub use gradient::{ColorStop, ObserverId, StopId, StopSet, StopSetError, StopSetEvent};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use interp::{sample, InterpolationMode};
