use serde::{Deserialize, Serialize};

use crate::core::{Point, Slice};

/// Phase of a single-pointer gesture as forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Raw pointer event in drawing-area local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self { phase, x, y }
    }

    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }

    #[must_use]
    pub const fn position(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Whether the engine keeps tracking the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureResponse {
    Accepted,
    Rejected,
}

impl GestureResponse {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

/// Selection notification payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionChange {
    Selected(Slice),
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// No gesture in progress.
    Idle,
    /// Pointer is down inside the pie and has not moved past the threshold.
    Pressed,
    /// Gesture crossed the drag threshold and is rotating the chart.
    Rotating,
}

/// Single-gesture tracker for tap-vs-drag detection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTracker {
    active: bool,
    dragging: bool,
    previous: Point,
}

impl GestureTracker {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        match (self.active, self.dragging) {
            (false, _) => InteractionMode::Idle,
            (true, false) => InteractionMode::Pressed,
            (true, true) => InteractionMode::Rotating,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn previous(self) -> Point {
        self.previous
    }

    pub fn begin(&mut self, at: Point) {
        self.active = true;
        self.dragging = false;
        self.previous = at;
    }

    /// Drops the gesture; later move/up events are ignored until the next down.
    pub fn cancel(&mut self) {
        self.active = false;
        self.dragging = false;
    }

    /// Advances a drag when `to` is farther than `threshold_px` from the last
    /// accepted position.
    ///
    /// Returns the position the step started from, or `None` when the move
    /// stays within the threshold. Sub-threshold moves do not advance the
    /// reference point, so they accumulate until one crosses it.
    pub fn drag_step(&mut self, to: Point, threshold_px: f64) -> Option<Point> {
        if !self.active || self.previous.distance_to(to) <= threshold_px {
            return None;
        }
        let from = self.previous;
        self.dragging = true;
        self.previous = to;
        Some(from)
    }

    /// Ends the gesture. Returns `Some(true)` for a tap, `Some(false)` for a
    /// finished drag and `None` when no gesture was being tracked.
    pub fn finish(&mut self) -> Option<bool> {
        if !self.active {
            return None;
        }
        let was_tap = !self.dragging;
        self.cancel();
        Some(was_tap)
    }
}
