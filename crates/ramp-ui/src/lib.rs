//! Ramp UI: editor widget state and the session tying it to a stop set.
//!
//! Nothing here draws. Widgets own geometry, hit-testing and drag state;
//! a front end feeds them [`UiEvent`]s in widget-local pixels and reads back
//! positions to paint.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`event`] | `UiEvent`, `EventResult` |
//! | [`widgets::hsv_wheel`] | `HsvWheel`, `WheelGeometry`, `DragMode` |
//! | [`widgets::ramp_bar`] | `GradientRamp` |
//! | [`config`] | `EditorConfig` |
//! | [`session`] | `EditorSession`, `SessionError` |
//!
//! # Quick start
//!
//! ```rust
//! use ramp_ui::prelude::*;
//!
//! let mut session = EditorSession::new(EditorConfig::default()).unwrap();
//!
//! // Click in the middle of the bar: a stop is inserted and selected, and
//! // the wheel picks up its color.
//! session.ramp_event(&UiEvent::Press { pos: Vec2::new(300.0, 50.0) });
//! assert_eq!(session.stops().len(), 4);
//! assert_eq!(Some(session.wheel().color()), session.selected_stop().map(|s| s.color));
//! ```

pub mod config;
pub mod event;
pub mod session;
pub mod widgets;

pub use config::EditorConfig;
pub use session::{EditorSession, SessionError};

/// The types a front end needs to drive a session.
pub mod prelude {
    pub use crate::config::EditorConfig;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::session::{EditorSession, SessionError};
    pub use crate::widgets::{
        hsv_wheel::{DragMode, HsvWheel, WheelGeometry},
        ramp_bar::GradientRamp,
    };

    pub use ramp_engine::coords::{Rect, Vec2};
    pub use ramp_engine::paint::{Channel, Color, ColorStop, InterpolationMode, StopId};
    pub use ramp_formats::{ErrorKind, Format};
}
