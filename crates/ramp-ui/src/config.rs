use ramp_engine::coords::Rect;
use ramp_engine::paint::{Color, ColorStop, InterpolationMode};

use crate::widgets::hsv_wheel::WheelGeometry;
use crate::widgets::ramp_bar::GradientRamp;

/// Startup settings for an [`EditorSession`](crate::session::EditorSession).
///
/// # Example
/// ```rust
/// use ramp_engine::paint::InterpolationMode;
/// use ramp_ui::config::EditorConfig;
///
/// let config = EditorConfig::default().mode(InterpolationMode::EaseInOut).png_size(512, 64);
/// assert_eq!(config.stops.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub stops: Vec<ColorStop>,
    pub mode: InterpolationMode,
    pub wheel: WheelGeometry,
    pub ramp_area: Rect,
    /// Manhattan radius for grabbing a stop handle.
    pub hit_radius: f64,
    pub png_size: (u32, u32),
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            stops: default_stops(),
            mode: InterpolationMode::Linear,
            wheel: WheelGeometry::default(),
            ramp_area: GradientRamp::default().area(),
            hit_radius: GradientRamp::DEFAULT_HIT_RADIUS,
            png_size: (1200, 200),
        }
    }
}

impl EditorConfig {
    pub fn stops(mut self, v: Vec<ColorStop>) -> Self { self.stops = v; self }
    pub fn mode(mut self, v: InterpolationMode) -> Self { self.mode = v; self }
    pub fn wheel(mut self, v: WheelGeometry) -> Self { self.wheel = v; self }
    pub fn ramp_area(mut self, v: Rect) -> Self { self.ramp_area = v; self }
    pub fn hit_radius(mut self, v: f64) -> Self { self.hit_radius = v; self }
    pub fn png_size(mut self, width: u32, height: u32) -> Self {
        self.png_size = (width, height);
        self
    }
}

/// Coral, teal, sky.
pub fn default_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::new(0xff, 0x6b, 0x6b)),
        ColorStop::new(0.5, Color::new(0x4e, 0xcd, 0xc4)),
        ColorStop::new(1.0, Color::new(0x45, 0xb7, 0xd1)),
    ]
}
