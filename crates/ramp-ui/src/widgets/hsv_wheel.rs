use std::f64::consts::{FRAC_PI_3, TAU};

use ramp_engine::coords::{Rect, Vec2};
use ramp_engine::paint::{rgb_to_hsv, Color, Hsv};

use crate::event::{EventResult, UiEvent};

// ── Geometry ──────────────────────────────────────────────────────────────

/// Placement of the hue ring and the saturation/value triangle.
///
/// The triangle is inscribed at `radius - triangle_inset` with the white
/// vertex on top, black bottom-left and the pure hue bottom-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WheelGeometry {
    pub center: Vec2,
    pub radius: f64,
    /// The ring accepts presses within `radius ± ring_half_width`.
    pub ring_half_width: f64,
    pub triangle_inset: f64,
}

impl WheelGeometry {
    pub const RING_HALF_WIDTH: f64 = 12.0;
    pub const TRIANGLE_INSET: f64 = 18.0;
    /// Gap between the ring and the edge of the rectangle passed to [`fit`](Self::fit).
    pub const FIT_MARGIN: f64 = 8.0;
    /// The hue handle sits this far inside `radius`.
    pub const HUE_HANDLE_INSET: f64 = 5.0;

    pub fn new(center: Vec2, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            ring_half_width: Self::RING_HALF_WIDTH,
            triangle_inset: Self::TRIANGLE_INSET,
        }
    }

    /// Centers the wheel in `rect` with radius `min(w, h) / 2 - 8`.
    pub fn fit(rect: Rect) -> Self {
        let radius = rect.size.x.min(rect.size.y) / 2.0 - Self::FIT_MARGIN;
        Self::new(rect.center(), radius)
    }

    pub fn ring_half_width(mut self, v: f64) -> Self { self.ring_half_width = v; self }
    pub fn triangle_inset(mut self, v: f64) -> Self { self.triangle_inset = v; self }

    pub fn triangle_radius(&self) -> f64 {
        (self.radius - self.triangle_inset).max(0.0)
    }

    /// `[white, black, hue]` vertices.
    pub fn triangle(&self) -> [Vec2; 3] {
        let r = self.triangle_radius();
        let (sin, cos) = FRAC_PI_3.sin_cos();
        let c = self.center;
        [
            Vec2::new(c.x, c.y - r),
            Vec2::new(c.x - r * sin, c.y + r * cos),
            Vec2::new(c.x + r * sin, c.y + r * cos),
        ]
    }

    pub fn on_ring(&self, p: Vec2) -> bool {
        let d = p.distance(self.center);
        d >= self.radius - self.ring_half_width && d <= self.radius + self.ring_half_width
    }

    /// Edge-sign test; points on an edge count as inside.
    pub fn in_triangle(&self, p: Vec2) -> bool {
        if self.triangle_radius() <= 0.0 {
            return false;
        }
        let [white, black, hue] = self.triangle();
        let d1 = edge_sign(p, white, black);
        let d2 = edge_sign(p, black, hue);
        let d3 = edge_sign(p, hue, white);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    /// Hue in [0, 1) of the angle from the center to `p`, counter-clockwise
    /// from the positive x axis (screen y grows downward).
    pub fn hue_at(&self, p: Vec2) -> f64 {
        let angle = (self.center.y - p.y).atan2(p.x - self.center.x);
        let hue = angle.rem_euclid(TAU) / TAU;
        if hue >= 1.0 { 0.0 } else { hue }
    }

    /// `(saturation, value)` at `p`, or `None` for a collapsed triangle.
    ///
    /// Each barycentric weight is clamped to [0, 1] on its own, without
    /// renormalizing, and then `saturation = w`, `value = u + w` are clamped
    /// once more. Outside the triangle this bends the mapping toward the
    /// nearest corner instead of projecting onto the nearest edge.
    pub fn sv_at(&self, p: Vec2) -> Option<(f64, f64)> {
        let [white, black, hue] = self.triangle();
        // The black weight only matters through u + v + w = 1, which is
        // allowed to break here.
        let (u, _, w) = barycentric(p, white, black, hue)?;
        let u = u.clamp(0.0, 1.0);
        let w = w.clamp(0.0, 1.0);
        Some((w, (u + w).min(1.0)))
    }

    /// Screen position of `(saturation, value)`; inverse of [`sv_at`](Self::sv_at)
    /// inside the triangle.
    pub fn sv_to_pos(&self, saturation: f64, value: f64) -> Vec2 {
        let [white, black, hue] = self.triangle();
        let w = saturation;
        let u = (value - saturation).clamp(0.0, 1.0);
        let v = 1.0 - u - w;
        white * u + black * v + hue * w
    }

    pub fn hue_handle_pos(&self, hue: f64) -> Vec2 {
        let r = self.radius - Self::HUE_HANDLE_INSET;
        let (sin, cos) = (hue * TAU).sin_cos();
        Vec2::new(self.center.x + r * cos, self.center.y - r * sin)
    }
}

impl Default for WheelGeometry {
    /// A 180×180 widget: center (90, 90), radius 82.
    fn default() -> Self {
        Self::fit(Rect::new(0.0, 0.0, 180.0, 180.0))
    }
}

/// Which side of the edge `b → a` the point `p` lies on.
fn edge_sign(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    (p - b).cross(a - b)
}

/// Weights `(u, v, w)` of `p` against vertices `(a, b, c)`.
fn barycentric(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<(f64, f64, f64)> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;
    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);
    let denom = d00 * d11 - d01 * d01;
    if denom.abs() <= f64::EPSILON {
        return None;
    }
    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    Some((1.0 - v - w, v, w))
}

// ── Widget state ──────────────────────────────────────────────────────────

/// What a press started.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    Idle,
    Hue,
    Sv,
}

/// Hue ring plus saturation/value triangle.
///
/// Holds the current [`Hsv`] and the color it converts to. Pointer edits fire
/// `on_color_changed`; [`set_color`](Self::set_color) does not.
///
/// # Example
/// ```rust
/// use ramp_engine::coords::Vec2;
/// use ramp_engine::paint::Color;
/// use ramp_ui::event::UiEvent;
/// use ramp_ui::widgets::hsv_wheel::HsvWheel;
///
/// let mut wheel = HsvWheel::new(Color::new(255, 0, 0));
/// // Straight up from the default center lands on hue 1/4.
/// wheel.on_event(&UiEvent::Press { pos: Vec2::new(90.0, 8.0) });
/// assert!((wheel.hsv().hue - 0.25).abs() < 1e-9);
/// ```
pub struct HsvWheel {
    geometry: WheelGeometry,
    hsv: Hsv,
    color: Color,
    drag: DragMode,
    on_color_changed: Option<Box<dyn FnMut(Color)>>,
}

impl HsvWheel {
    pub fn new(color: Color) -> Self {
        Self {
            geometry: WheelGeometry::default(),
            hsv: rgb_to_hsv(color, 0.0),
            color,
            drag: DragMode::Idle,
            on_color_changed: None,
        }
    }

    pub fn with_geometry(mut self, g: WheelGeometry) -> Self {
        self.geometry = g;
        self
    }

    pub fn on_color_changed(mut self, f: impl FnMut(Color) + 'static) -> Self {
        self.on_color_changed = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn geometry(&self) -> WheelGeometry { self.geometry }
    pub fn set_geometry(&mut self, g: WheelGeometry) { self.geometry = g; }

    #[inline]
    pub fn color(&self) -> Color { self.color }
    #[inline]
    pub fn hsv(&self) -> Hsv { self.hsv }
    #[inline]
    pub fn drag_mode(&self) -> DragMode { self.drag }

    /// Loads a color from outside (e.g. a newly selected stop). Keeps the
    /// current hue when `color` is gray. Fires no change event.
    pub fn set_color(&mut self, color: Color) {
        self.hsv = rgb_to_hsv(color, self.hsv.hue);
        self.color = color;
    }

    pub fn on_ring(&self, p: Vec2) -> bool { self.geometry.on_ring(p) }
    pub fn in_triangle(&self, p: Vec2) -> bool { self.geometry.in_triangle(p) }

    pub fn set_hue_from_pos(&mut self, p: Vec2) {
        let hue = self.geometry.hue_at(p);
        self.apply(Hsv::new(hue, self.hsv.saturation, self.hsv.value));
    }

    pub fn set_sv_from_pos(&mut self, p: Vec2) {
        if let Some((s, v)) = self.geometry.sv_at(p) {
            self.apply(Hsv::new(self.hsv.hue, s, v));
        }
    }

    /// Where the saturation/value selector dot is drawn.
    pub fn sv_to_pos(&self) -> Vec2 {
        self.geometry.sv_to_pos(self.hsv.saturation, self.hsv.value)
    }

    /// Where the hue selector is drawn on the ring.
    pub fn hue_handle_pos(&self) -> Vec2 {
        self.geometry.hue_handle_pos(self.hsv.hue)
    }

    pub fn on_event(&mut self, event: &UiEvent) -> EventResult {
        match *event {
            UiEvent::Press { pos } => {
                if self.on_ring(pos) {
                    self.drag = DragMode::Hue;
                    self.set_hue_from_pos(pos);
                } else if self.in_triangle(pos) {
                    self.drag = DragMode::Sv;
                    self.set_sv_from_pos(pos);
                } else {
                    return EventResult::Ignored;
                }
                EventResult::Consumed
            }
            // Out-of-shape positions keep editing; the mappings clamp.
            UiEvent::Drag { pos, .. } => match self.drag {
                DragMode::Hue => { self.set_hue_from_pos(pos); EventResult::Consumed }
                DragMode::Sv  => { self.set_sv_from_pos(pos);  EventResult::Consumed }
                DragMode::Idle => EventResult::Ignored,
            },
            UiEvent::DragEnd { .. } => {
                let was = std::mem::take(&mut self.drag);
                if was == DragMode::Idle { EventResult::Ignored } else { EventResult::Consumed }
            }
            UiEvent::DoubleClick { .. } => EventResult::Ignored,
        }
    }

    fn apply(&mut self, hsv: Hsv) {
        self.hsv = hsv;
        self.color = hsv.to_rgb();
        if let Some(f) = &mut self.on_color_changed { f(self.color); }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    const EPS: f64 = 1e-9;

    fn geo() -> WheelGeometry { WheelGeometry::default() }

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < EPS }

    #[test]
    fn default_fits_180_square() {
        let g = geo();
        assert_eq!(g.center, Vec2::new(90.0, 90.0));
        assert_eq!(g.radius, 82.0);
        assert_eq!(g.triangle_radius(), 64.0);
        let [white, black, hue] = g.triangle();
        assert_eq!(white, Vec2::new(90.0, 26.0));
        assert!(black.x < 90.0 && hue.x > 90.0);
        assert!(close(black.y, 90.0 + 32.0) && close(hue.y, 90.0 + 32.0));
    }

    #[test]
    fn fit_uses_short_side() {
        let g = WheelGeometry::fit(Rect::new(10.0, 0.0, 300.0, 100.0));
        assert_eq!(g.center, Vec2::new(160.0, 50.0));
        assert_eq!(g.radius, 42.0);
        assert_eq!(WheelGeometry::fit(Rect::new(0.0, 0.0, 4.0, 4.0)).radius, 0.0);
    }

    #[test]
    fn ring_hit_test() {
        let g = geo();
        assert!(g.on_ring(Vec2::new(172.0, 90.0)));
        assert!(g.on_ring(Vec2::new(90.0, 90.0 - 70.0)));
        assert!(g.on_ring(Vec2::new(90.0 - 94.0, 90.0)));
        assert!(!g.on_ring(Vec2::new(90.0, 90.0)));
        assert!(!g.on_ring(Vec2::new(90.0 + 95.0, 90.0)));
    }

    #[test]
    fn triangle_hit_test() {
        let g = geo();
        assert!(g.in_triangle(g.center));
        for vertex in g.triangle() {
            assert!(g.in_triangle(vertex));
        }
        assert!(!g.in_triangle(Vec2::new(90.0, 20.0)));
        assert!(!g.in_triangle(Vec2::new(172.0, 90.0)));
        assert!(!g.in_triangle(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn collapsed_triangle_hits_nothing() {
        let g = WheelGeometry::new(Vec2::new(10.0, 10.0), 10.0);
        assert_eq!(g.triangle_radius(), 0.0);
        assert!(!g.in_triangle(Vec2::new(10.0, 10.0)));
        assert_eq!(g.sv_at(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn hue_follows_angle() {
        let g = geo();
        assert!(close(g.hue_at(Vec2::new(150.0, 90.0)), 0.0));
        assert!(close(g.hue_at(Vec2::new(90.0, 10.0)), 0.25));
        assert!(close(g.hue_at(Vec2::new(10.0, 90.0)), 0.5));
        assert!(close(g.hue_at(Vec2::new(90.0, 170.0)), 0.75));
        let h = g.hue_at(Vec2::new(150.0, 90.000_000_000_001));
        assert!((0.0..1.0).contains(&h));
    }

    #[test]
    fn sv_at_vertices() {
        let g = geo();
        let [white, black, hue] = g.triangle();
        let check = |p: Vec2, s: f64, v: f64| {
            let (gs, gv) = g.sv_at(p).unwrap();
            assert!(close(gs, s) && close(gv, v), "{p:?}: ({gs}, {gv})");
        };
        check(white, 0.0, 1.0);
        check(black, 0.0, 0.0);
        check(hue, 1.0, 1.0);
        check(g.center, 1.0 / 3.0, 2.0 / 3.0);
    }

    #[test]
    fn inverse_mapping_round_trips_inside() {
        let g = geo();
        for i in 0..=10 {
            for j in i..=10 {
                let (s, v) = (i as f64 / 10.0, j as f64 / 10.0);
                let (bs, bv) = g.sv_at(g.sv_to_pos(s, v)).unwrap();
                assert!((bs - s).abs() < 1e-9 && (bv - v).abs() < 1e-9, "({s}, {v})");
            }
        }
    }

    #[test]
    fn clamping_does_not_renormalize() {
        let g = geo();
        let [white, black, hue] = g.triangle();

        // Far beyond the white corner: only u survives.
        assert_eq!(g.sv_at(white + Vec2::new(0.0, -500.0)), Some((0.0, 1.0)));

        // Outside the white–hue edge: u and w both exceed 1/2, so value is
        // clamped while saturation keeps w.
        let mid = (white + hue) * 0.5;
        let outward = (mid - black) * 0.5;
        let (s, v) = g.sv_at(mid + outward).unwrap();
        assert!(s > 0.5 && s <= 1.0);
        assert_eq!(v, 1.0);

        for p in [Vec2::new(-1e6, 3e5), Vec2::new(1e6, 1e6), Vec2::new(0.0, 1e9)] {
            let (s, v) = g.sv_at(p).unwrap();
            assert!((0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn hue_handle_inside_ring() {
        let g = geo();
        let p = g.hue_handle_pos(0.25);
        assert!(close(p.x, 90.0) && close(p.y, 90.0 - 77.0));
        assert!(g.on_ring(p));
    }

    #[test]
    fn press_on_ring_drags_hue() {
        let mut wheel = HsvWheel::new(Color::new(255, 0, 0));
        let start = Vec2::new(90.0, 10.0);
        assert!(wheel.on_event(&UiEvent::Press { pos: start }).is_consumed());
        assert_eq!(wheel.drag_mode(), DragMode::Hue);
        assert!(close(wheel.hsv().hue, 0.25));

        // Leaving the ring keeps dragging the hue.
        wheel.on_event(&UiEvent::Drag { pos: Vec2::new(0.0, 90.0), start });
        assert!(close(wheel.hsv().hue, 0.5));
        assert_eq!(wheel.color(), Color::new(0, 255, 255));

        assert!(wheel.on_event(&UiEvent::DragEnd { pos: Vec2::new(-50.0, -50.0), start }).is_consumed());
        assert_eq!(wheel.drag_mode(), DragMode::Idle);
        assert_eq!(
            wheel.on_event(&UiEvent::Drag { pos: Vec2::new(150.0, 90.0), start }),
            EventResult::Ignored
        );
        assert!(close(wheel.hsv().hue, 0.5));
    }

    #[test]
    fn press_in_triangle_drags_sv() {
        let mut wheel = HsvWheel::new(Color::new(255, 0, 0));
        let [white, black, _] = wheel.geometry().triangle();
        wheel.on_event(&UiEvent::Press { pos: white });
        assert_eq!(wheel.drag_mode(), DragMode::Sv);
        assert_eq!(wheel.color(), Color::WHITE);

        wheel.on_event(&UiEvent::Drag { pos: black + Vec2::new(-40.0, 40.0), start: white });
        assert_eq!(wheel.color(), Color::BLACK);
        assert!(close(wheel.hsv().hue, 0.0));
    }

    #[test]
    fn press_elsewhere_is_ignored() {
        let mut wheel = HsvWheel::new(Color::new(1, 2, 3));
        assert_eq!(wheel.on_event(&UiEvent::Press { pos: Vec2::new(0.0, 0.0) }), EventResult::Ignored);
        assert_eq!(wheel.drag_mode(), DragMode::Idle);
        assert_eq!(wheel.color(), Color::new(1, 2, 3));
        assert_eq!(
            wheel.on_event(&UiEvent::DragEnd { pos: Vec2::zero(), start: Vec2::zero() }),
            EventResult::Ignored
        );
    }

    #[test]
    fn pointer_edits_notify_and_set_color_does_not() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut wheel = HsvWheel::new(Color::new(255, 0, 0))
            .on_color_changed(move |c| sink.borrow_mut().push(c));

        wheel.set_color(Color::new(0, 0, 255));
        assert!(seen.borrow().is_empty());

        wheel.set_hue_from_pos(Vec2::new(150.0, 90.0));
        wheel.set_sv_from_pos(wheel.geometry().center);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[0], Color::new(255, 0, 0));
        assert_eq!(*seen.borrow().last().unwrap(), wheel.color());
    }

    #[test]
    fn gray_keeps_previous_hue() {
        let mut wheel = HsvWheel::new(Color::new(0, 255, 0));
        let hue = wheel.hsv().hue;
        wheel.set_color(Color::new(128, 128, 128));
        assert!(close(wheel.hsv().hue, hue));
        assert_eq!(wheel.hsv().saturation, 0.0);
        assert_eq!(wheel.color(), Color::new(128, 128, 128));
    }

    #[test]
    fn sv_selector_tracks_color() {
        let mut wheel = HsvWheel::new(Color::new(255, 0, 0));
        let [white, black, hue] = wheel.geometry().triangle();
        assert_eq!(wheel.sv_to_pos(), hue);
        wheel.set_color(Color::WHITE);
        assert_eq!(wheel.sv_to_pos(), white);
        wheel.set_color(Color::BLACK);
        assert_eq!(wheel.sv_to_pos(), black);
    }
}
