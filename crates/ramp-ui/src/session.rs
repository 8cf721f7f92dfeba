use std::fmt;
use std::path::Path;

use ramp_engine::coords::Rect;
use ramp_engine::paint::{
    Channel, Color, ColorStop, InterpolationMode, ObserverId, StopId, StopSet, StopSetError,
    StopSetEvent,
};
use ramp_formats::{CodecError, ErrorKind, ExportOptions, Format};

use crate::config::EditorConfig;
use crate::event::{EventResult, UiEvent};
use crate::widgets::hsv_wheel::{HsvWheel, WheelGeometry};
use crate::widgets::ramp_bar::GradientRamp;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum SessionError {
    /// A selected-stop edit with nothing selected.
    NoSelection,
    /// The stop set refused the edit.
    Stops(StopSetError),
    Codec(CodecError),
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::NoSelection | SessionError::Stops(_) => ErrorKind::InvariantViolation,
            SessionError::Codec(e) => e.kind(),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoSelection => f.write_str("no stop is selected"),
            SessionError::Stops(e) => write!(f, "{e}"),
            SessionError::Codec(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::NoSelection => None,
            SessionError::Stops(e) => Some(e),
            SessionError::Codec(e) => Some(e),
        }
    }
}

impl From<StopSetError> for SessionError {
    fn from(e: StopSetError) -> Self { SessionError::Stops(e) }
}

impl From<CodecError> for SessionError {
    fn from(e: CodecError) -> Self { SessionError::Codec(e) }
}

// ── Session ───────────────────────────────────────────────────────────────

/// One open gradient: the stops, the widgets editing them and the current
/// interpolation mode.
///
/// The wheel always shows the selected stop's color. Selection changes load
/// it into the wheel without a change event; wheel edits are written back
/// to the selected stop.
pub struct EditorSession {
    stops: StopSet,
    wheel: HsvWheel,
    ramp: GradientRamp,
    mode: InterpolationMode,
    png_size: (u32, u32),
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Result<Self, SessionError> {
        let stops = StopSet::from_stops(config.stops)?;
        let wheel = HsvWheel::new(stops.first().color).with_geometry(config.wheel);
        let ramp = GradientRamp::new(config.ramp_area).hit_radius(config.hit_radius);
        log::debug!("editor session with {} stops, mode {}", stops.len(), config.mode);
        Ok(Self { stops, wheel, ramp, mode: config.mode, png_size: config.png_size })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn stops(&self) -> &StopSet { &self.stops }
    #[inline]
    pub fn wheel(&self) -> &HsvWheel { &self.wheel }
    #[inline]
    pub fn ramp(&self) -> &GradientRamp { &self.ramp }
    #[inline]
    pub fn mode(&self) -> InterpolationMode { self.mode }

    pub fn set_mode(&mut self, mode: InterpolationMode) {
        if self.mode != mode {
            log::debug!("interpolation mode: {mode}");
            self.mode = mode;
        }
    }

    pub fn set_png_size(&mut self, width: u32, height: u32) {
        self.png_size = (width, height);
    }

    /// Re-places both widgets, e.g. after a window resize.
    pub fn layout(&mut self, ramp_area: Rect, wheel_area: Rect) {
        self.ramp.set_area(ramp_area);
        let old = self.wheel.geometry();
        self.wheel.set_geometry(
            WheelGeometry::fit(wheel_area)
                .ring_half_width(old.ring_half_width)
                .triangle_inset(old.triangle_inset),
        );
    }

    /// Observes every stop mutation, including the ones made by the widgets.
    pub fn subscribe(&mut self, f: impl FnMut(&StopSetEvent) + 'static) -> ObserverId {
        self.stops.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.stops.unsubscribe(id)
    }

    /// Color of the gradient at `t` in the current mode.
    pub fn sample(&self, t: f64) -> Color {
        self.stops.sample(t, self.mode)
    }

    // ── Selection and stop edits ──────────────────────────────────────────

    pub fn select(&mut self, id: Option<StopId>) -> Result<(), SessionError> {
        self.stops.select(id)?;
        self.sync_wheel();
        Ok(())
    }

    pub fn selected_stop(&self) -> Option<ColorStop> {
        self.stops.selected_stop().copied()
    }

    /// Inserts a stop showing the color already at `position`.
    pub fn insert_at(&mut self, position: f64) -> StopId {
        self.stops.insert_at(position, None, self.mode)
    }

    /// Refused with [`ErrorKind::InvariantViolation`] when only two stops remain.
    pub fn delete_selected(&mut self) -> Result<ColorStop, SessionError> {
        let id = self.selected_id()?;
        self.stops.delete(id).map_err(|e| {
            log::warn!("delete refused: {e}");
            SessionError::from(e)
        })
    }

    pub fn set_selected_channel(&mut self, channel: Channel, value: u8) -> Result<(), SessionError> {
        let color = self.selected_stop().ok_or(SessionError::NoSelection)?.color;
        self.set_selected_color(color.with_channel(channel, value))
    }

    /// Moves the selected stop; `position` is clamped to [0, 1].
    pub fn set_selected_position(&mut self, position: f64) -> Result<(), SessionError> {
        let id = self.selected_id()?;
        self.stops.move_to(id, position)?;
        Ok(())
    }

    pub fn set_selected_color(&mut self, color: Color) -> Result<(), SessionError> {
        let id = self.selected_id()?;
        self.stops.recolor(id, color)?;
        self.wheel.set_color(color);
        Ok(())
    }

    fn selected_id(&self) -> Result<StopId, SessionError> {
        self.stops.selected().ok_or(SessionError::NoSelection)
    }

    fn sync_wheel(&mut self) {
        if let Some(stop) = self.stops.selected_stop() {
            self.wheel.set_color(stop.color);
        }
    }

    // ── Pointer input ─────────────────────────────────────────────────────

    pub fn ramp_event(&mut self, event: &UiEvent) -> EventResult {
        let before = self.stops.selected();
        let result = self.ramp.on_event(event, &mut self.stops, self.mode);
        if self.stops.selected() != before {
            self.sync_wheel();
        }
        result
    }

    pub fn wheel_event(&mut self, event: &UiEvent) -> EventResult {
        let before = self.wheel.color();
        let result = self.wheel.on_event(event);
        let color = self.wheel.color();
        if color != before {
            if let Some(id) = self.stops.selected() {
                // The id came from the set itself, so this cannot miss.
                let _ = self.stops.recolor(id, color);
            }
        }
        result
    }

    // ── Files and export ──────────────────────────────────────────────────

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::default()
            .mode(self.mode)
            .png_size(self.png_size.0, self.png_size.1)
    }

    /// Replaces the stops with the contents of `path`. On error nothing changes.
    pub fn load(&mut self, path: &Path) -> Result<(), SessionError> {
        let stops = ramp_formats::load_file(path)?;
        self.stops.replace(stops)?;
        Ok(())
    }

    pub fn save(&self, path: &Path, format: Format) -> Result<(), SessionError> {
        ramp_formats::save_file(path, format, self.stops.stops(), &self.export_options())?;
        Ok(())
    }

    pub fn encode(&self, format: Format) -> Result<Vec<u8>, SessionError> {
        Ok(ramp_formats::encode(format, self.stops.stops(), &self.export_options())?)
    }

    pub fn css(&self) -> String {
        ramp_formats::css::encode_css(self.stops.stops())
    }

    pub fn png(&self, width: u32, height: u32) -> Result<Vec<u8>, SessionError> {
        Ok(ramp_formats::png::encode_png(self.stops.stops(), self.mode, width, height)?)
    }
}
