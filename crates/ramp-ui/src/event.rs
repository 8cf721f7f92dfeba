use ramp_engine::coords::Vec2;

/// Pointer events routed to the editor widgets, in widget-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Primary button pressed at `pos`.
    Press { pos: Vec2 },
    /// Pointer moved while the primary button is held.
    /// `pos` is the current cursor position; `start` is where the press began.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released.
    ///
    /// Fires even when `pos` is outside the widget, so an active drag always
    /// ends here.
    DragEnd { pos: Vec2, start: Vec2 },
    /// Second press of a double click at `pos`.
    DoubleClick { pos: Vec2 },
}

impl UiEvent {
    pub fn pos(&self) -> Vec2 {
        match *self {
            UiEvent::Press { pos }
            | UiEvent::Drag { pos, .. }
            | UiEvent::DragEnd { pos, .. }
            | UiEvent::DoubleClick { pos } => pos,
        }
    }
}

/// Result returned by the widgets' `on_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Event was not handled; the caller may route it elsewhere.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
