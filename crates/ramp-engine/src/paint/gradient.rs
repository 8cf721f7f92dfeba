use std::fmt;

use super::interp::{sample, InterpolationMode};
use super::Color;

/// A single gradient stop.
///
/// `position` is clamped to [0, 1] by every constructor and mutation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub fn new(position: f64, color: Color) -> Self {
        Self { position: clamp_position(position), color }
    }
}

#[inline]
pub(crate) fn clamp_position(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Stable identity of a stop inside one [`StopSet`].
///
/// Ids are handed out in increasing order and never reused, so they survive
/// re-sorting and double as the insertion-order tie-breaker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(u64);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

/// Handle returned by [`StopSet::subscribe`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// One logical mutation of a [`StopSet`]. Observers receive exactly one per call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopSetEvent {
    Inserted(StopId),
    Removed(StopId),
    Moved(StopId),
    Recolored(StopId),
    /// The whole set was swapped out (file load).
    Replaced,
    SelectionChanged(Option<StopId>),
}

/// A refused [`StopSet`] operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopSetError {
    /// The set would end up with fewer than [`StopSet::MIN_STOPS`] stops.
    TooFewStops { min: usize, len: usize },
    /// The id does not name a stop of this set.
    UnknownStop(StopId),
}

impl fmt::Display for StopSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopSetError::TooFewStops { min, len } => {
                write!(f, "a gradient needs at least {min} stops (would have {len})")
            }
            StopSetError::UnknownStop(id) => write!(f, "no such stop: {id}"),
        }
    }
}

impl std::error::Error for StopSetError {}

type Observer = Box<dyn FnMut(&StopSetEvent)>;

/// Ordered collection of color stops.
///
/// Invariants:
/// - always at least [`MIN_STOPS`](Self::MIN_STOPS) stops
/// - sorted ascending by position, ties in insertion order
/// - the selection, if any, names a live stop by [`StopId`]
///
/// Positions need not be unique.
pub struct StopSet {
    // Parallel vectors so `stops` can be handed to the sampler as a slice.
    stops: Vec<ColorStop>,
    ids: Vec<StopId>,
    next_id: u64,
    selected: Option<StopId>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl StopSet {
    pub const MIN_STOPS: usize = 2;

    /// Builds a set from an initial list, in any order.
    pub fn from_stops(stops: Vec<ColorStop>) -> Result<Self, StopSetError> {
        let mut set = Self {
            stops: Vec::new(),
            ids: Vec::new(),
            next_id: 0,
            selected: None,
            observers: Vec::new(),
            next_observer: 0,
        };
        set.fill(stops)?;
        Ok(set)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops in ascending position order.
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Ids in the same order as [`stops`](Self::stops).
    #[inline]
    pub fn ids(&self) -> &[StopId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (StopId, &ColorStop)> + '_ {
        self.ids.iter().copied().zip(self.stops.iter())
    }

    /// Current index of `id`, which changes whenever the set is re-sorted.
    pub fn index_of(&self, id: StopId) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    pub fn get(&self, id: StopId) -> Option<&ColorStop> {
        self.index_of(id).map(|i| &self.stops[i])
    }

    #[inline]
    pub fn first(&self) -> ColorStop {
        self.stops[0]
    }

    #[inline]
    pub fn last(&self) -> ColorStop {
        self.stops[self.stops.len() - 1]
    }

    #[inline]
    pub fn selected(&self) -> Option<StopId> {
        self.selected
    }

    pub fn selected_stop(&self) -> Option<&ColorStop> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Color of the gradient at `t`; see [`sample`].
    #[inline]
    pub fn sample(&self, t: f64, mode: InterpolationMode) -> Color {
        sample(&self.stops, t, mode)
    }

    // ── Observers ─────────────────────────────────────────────────────────

    /// Registers a callback run synchronously after every mutation.
    pub fn subscribe(&mut self, f: impl FnMut(&StopSetEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(f)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(i, _)| *i != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: StopSetEvent) {
        log::trace!("stop set: {event:?}");
        for (_, f) in &mut self.observers {
            f(&event);
        }
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Inserts a stop at `position` (clamped).
    ///
    /// Without an explicit color the stop takes the color the gradient
    /// already shows there, sampled before insertion.
    pub fn insert_at(
        &mut self,
        position: f64,
        color: Option<Color>,
        mode: InterpolationMode,
    ) -> StopId {
        let position = clamp_position(position);
        let color = color.unwrap_or_else(|| self.sample(position, mode));
        let id = self.push(ColorStop { position, color });
        self.resort();
        self.notify(StopSetEvent::Inserted(id));
        id
    }

    /// Removes a stop, refusing when the set would drop below two stops.
    ///
    /// Clears the selection when it named the removed stop.
    pub fn delete(&mut self, id: StopId) -> Result<ColorStop, StopSetError> {
        let index = self.index_of(id).ok_or(StopSetError::UnknownStop(id))?;
        if self.stops.len() <= Self::MIN_STOPS {
            log::debug!("refusing to delete {id}: only {} stops left", self.stops.len());
            return Err(StopSetError::TooFewStops {
                min: Self::MIN_STOPS,
                len: self.stops.len() - 1,
            });
        }
        let removed = self.stops.remove(index);
        self.ids.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.notify(StopSetEvent::Removed(id));
        Ok(removed)
    }

    /// Moves a stop to `position` (clamped) and re-sorts. Returns the stop's
    /// new index.
    pub fn move_to(&mut self, id: StopId, position: f64) -> Result<usize, StopSetError> {
        let index = self.index_of(id).ok_or(StopSetError::UnknownStop(id))?;
        self.stops[index].position = clamp_position(position);
        self.resort();
        self.notify(StopSetEvent::Moved(id));
        self.index_of(id).ok_or(StopSetError::UnknownStop(id))
    }

    /// Replaces a stop's color; its position is untouched.
    pub fn recolor(&mut self, id: StopId, color: Color) -> Result<(), StopSetError> {
        let index = self.index_of(id).ok_or(StopSetError::UnknownStop(id))?;
        self.stops[index].color = color;
        self.notify(StopSetEvent::Recolored(id));
        Ok(())
    }

    /// Selects a stop, or clears the selection with `None`.
    pub fn select(&mut self, id: Option<StopId>) -> Result<(), StopSetError> {
        if let Some(id) = id {
            self.index_of(id).ok_or(StopSetError::UnknownStop(id))?;
        }
        if self.selected != id {
            self.selected = id;
            self.notify(StopSetEvent::SelectionChanged(id));
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.notify(StopSetEvent::SelectionChanged(None));
        }
    }

    /// Swaps in a whole new list (used by file loads). All old ids become
    /// invalid and the selection is cleared. On error the set is unchanged.
    pub fn replace(&mut self, stops: Vec<ColorStop>) -> Result<(), StopSetError> {
        self.fill(stops)?;
        self.notify(StopSetEvent::Replaced);
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn fill(&mut self, stops: Vec<ColorStop>) -> Result<(), StopSetError> {
        if stops.len() < Self::MIN_STOPS {
            return Err(StopSetError::TooFewStops { min: Self::MIN_STOPS, len: stops.len() });
        }
        self.stops.clear();
        self.ids.clear();
        self.selected = None;
        for s in stops {
            self.push(ColorStop::new(s.position, s.color));
        }
        self.resort();
        Ok(())
    }

    fn push(&mut self, stop: ColorStop) -> StopId {
        let id = StopId(self.next_id);
        self.next_id += 1;
        self.stops.push(stop);
        self.ids.push(id);
        id
    }

    fn resort(&mut self) {
        let mut order: Vec<usize> = (0..self.stops.len()).collect();
        order.sort_by(|&a, &b| {
            self.stops[a]
                .position
                .total_cmp(&self.stops[b].position)
                .then(self.ids[a].cmp(&self.ids[b]))
        });
        self.stops = order.iter().map(|&i| self.stops[i]).collect();
        self.ids = order.iter().map(|&i| self.ids[i]).collect();
    }
}

impl fmt::Debug for StopSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopSet")
            .field("stops", &self.stops)
            .field("ids", &self.ids)
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}
