use ramp_engine::coords::{Rect, Vec2};
use ramp_engine::paint::{InterpolationMode, StopId, StopSet};

use crate::event::{EventResult, UiEvent};

/// The gradient strip with one handle per stop underneath it.
///
/// Holds no stops of its own: every event is applied to the [`StopSet`] the
/// caller passes in.
///
/// - press on a handle: select that stop and start dragging it
/// - press inside the bar: insert a stop with the color already shown there
/// - drag: move the dragged stop
/// - double click: delete the selected stop while more than two remain
#[derive(Debug, Clone)]
pub struct GradientRamp {
    area: Rect,
    hit_radius: f64,
    dragging: Option<StopId>,
}

impl GradientRamp {
    pub const DEFAULT_HIT_RADIUS: f64 = 18.0;
    /// Handles sit this far below the bar.
    pub const HANDLE_OFFSET: f64 = 20.0;

    pub fn new(area: Rect) -> Self {
        Self { area, hit_radius: Self::DEFAULT_HIT_RADIUS, dragging: None }
    }

    pub fn hit_radius(mut self, v: f64) -> Self { self.hit_radius = v; self }

    pub fn area(&self) -> Rect { self.area }
    pub fn set_area(&mut self, area: Rect) { self.area = area; }

    /// The gradient strip: the widget area minus 20px on the left, top and
    /// right and 40px at the bottom for the handles.
    pub fn bar(&self) -> Rect {
        self.area.inset(20.0, 20.0, 20.0, 40.0)
    }

    pub fn handle_pos(&self, position: f64) -> Vec2 {
        let bar = self.bar();
        Vec2::new(bar.x_at(position), bar.bottom() + Self::HANDLE_OFFSET)
    }

    /// Stop position under pointer `x`, clamped to [0, 1].
    pub fn position_at(&self, x: f64) -> f64 {
        self.bar().fraction_x(x)
    }

    /// First stop, in position order, whose handle is within the hit radius
    /// (Manhattan distance) of `p`.
    pub fn stop_at(&self, stops: &StopSet, p: Vec2) -> Option<StopId> {
        stops
            .iter()
            .find(|(_, s)| self.handle_pos(s.position).manhattan_distance(p) < self.hit_radius)
            .map(|(id, _)| id)
    }

    #[inline]
    pub fn dragging(&self) -> Option<StopId> { self.dragging }

    pub fn on_event(
        &mut self,
        event: &UiEvent,
        stops: &mut StopSet,
        mode: InterpolationMode,
    ) -> EventResult {
        match *event {
            UiEvent::Press { pos } => {
                if let Some(id) = self.stop_at(stops, pos) {
                    let _ = stops.select(Some(id));
                    self.dragging = Some(id);
                    return EventResult::Consumed;
                }
                if self.bar().contains(pos) {
                    let position = self.position_at(pos.x);
                    let id = stops.insert_at(position, None, mode);
                    let _ = stops.select(Some(id));
                    log::debug!("inserted {id} at {position:.3}");
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            UiEvent::Drag { pos, .. } => match self.dragging {
                Some(id) => {
                    if stops.move_to(id, self.position_at(pos.x)).is_err() {
                        // The stop went away underneath us (e.g. a load).
                        self.dragging = None;
                        return EventResult::Ignored;
                    }
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            UiEvent::DragEnd { .. } => {
                if self.dragging.take().is_some() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            UiEvent::DoubleClick { .. } => {
                let Some(id) = stops.selected() else {
                    return EventResult::Ignored;
                };
                match stops.delete(id) {
                    Ok(_) => {
                        if self.dragging == Some(id) {
                            self.dragging = None;
                        }
                        EventResult::Consumed
                    }
                    Err(e) => {
                        log::warn!("not deleting {id}: {e}");
                        EventResult::Ignored
                    }
                }
            }
        }
    }
}

impl Default for GradientRamp {
    /// A 600×120 strip at the origin.
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 600.0, 120.0))
    }
}
