//! Ramp engine crate.
//!
//! Owns the gradient model shared by the codecs and the editor widgets:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `Color`, `Hsv`, `ColorStop`, `StopSet`, `InterpolationMode`, `sample` |
//! | [`coords`] | `Vec2`, `Rect` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//!
//! # Quick start
//!
//! ```rust
//! use ramp_engine::paint::{Color, ColorStop, InterpolationMode, StopSet};
//!
//! let mut stops = StopSet::from_stops(vec![
//!     ColorStop::new(0.0, Color::new(255, 0, 0)),
//!     ColorStop::new(1.0, Color::new(0, 0, 255)),
//! ])
//! .unwrap();
//!
//! let id = stops.insert_at(0.5, None, InterpolationMode::Linear);
//! assert_eq!(stops.get(id).unwrap().color, Color::new(128, 0, 128));
//! ```

pub mod coords;
pub mod logging;
pub mod paint;

pub use paint::{Color, ColorStop, InterpolationMode, StopId, StopSet};
