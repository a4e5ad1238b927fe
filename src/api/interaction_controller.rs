use tracing::{debug, trace};

use crate::core::{Point, pointer_angle, slice_index_at_angle};
use crate::interaction::{GestureResponse, PointerEvent, PointerPhase};
use crate::render::Renderer;

use super::{PieChartEngine, PluginEvent};

impl<R: Renderer> PieChartEngine<R> {
    /// Dispatches one host pointer event to the matching phase handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureResponse {
        trace!(phase = ?event.phase, x = event.x, y = event.y, "pie pointer event");
        match event.phase {
            PointerPhase::Down => self.pointer_down(event.x, event.y),
            PointerPhase::Move => self.pointer_move(event.x, event.y),
            PointerPhase::Up => self.pointer_up(event.x, event.y),
        }
    }

    /// Starts a gesture.
    ///
    /// A press outside the pie clears the selection, notifies "none" and
    /// rejects the gesture. Nothing is tracked before slices are configured.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> GestureResponse {
        if self.state.geometry().is_empty() {
            return GestureResponse::Rejected;
        }

        let point = Point::new(x, y);
        if !self.contains_point(point) {
            debug!(x, y, "pointer down outside pie; clearing selection");
            self.gesture.cancel();
            self.state.clear_selection();
            self.request_redraw();
            self.notify_selection();
            return GestureResponse::Rejected;
        }

        self.gesture.begin(point);
        GestureResponse::Accepted
    }

    /// Rotates the chart once the pointer has travelled past the drag
    /// threshold. Leaving the pie ends tracking for the rest of the gesture.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> GestureResponse {
        if !self.gesture.is_active() {
            return GestureResponse::Rejected;
        }

        let point = Point::new(x, y);
        if !self.contains_point(point) {
            debug!(x, y, "pointer left pie; dropping gesture");
            self.gesture.cancel();
            return GestureResponse::Rejected;
        }
        if !self.config.rotation_enabled {
            return GestureResponse::Accepted;
        }

        if let Some(from) = self.gesture.drag_step(point, self.config.drag_threshold_px) {
            let center = self.center();
            let delta = pointer_angle(center, point) - pointer_angle(center, from);
            self.state.rotate_by(delta);
            trace!(delta, rotation = self.state.rotation(), "rotate pie");
            self.request_redraw();
            self.emit_plugin_event(PluginEvent::RotationChanged {
                rotation: self.state.rotation(),
            });
        }
        GestureResponse::Accepted
    }

    /// Ends a gesture. A release without any drag step is a tap that toggles
    /// the slice under the pointer and notifies the resulting selection.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> GestureResponse {
        let Some(was_tap) = self.gesture.finish() else {
            return GestureResponse::Rejected;
        };
        if !was_tap {
            return GestureResponse::Accepted;
        }

        match self.slice_at(x, y) {
            Some(index) => {
                self.state.toggle_selection(index);
            }
            None => self.state.clear_selection(),
        }
        self.request_redraw();
        self.notify_selection();
        GestureResponse::Accepted
    }

    /// Whether a pixel lies strictly inside the (unshifted) pie circle.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.distance_to(self.center()) < self.config.radius
    }

    /// Index of the slice under a pixel, or `None` outside the pie.
    #[must_use]
    pub fn slice_at(&self, x: f64, y: f64) -> Option<usize> {
        let point = Point::new(x, y);
        if !self.contains_point(point) {
            return None;
        }
        let angle = pointer_angle(self.center(), point);
        slice_index_at_angle(self.state.geometry().drawable(), angle, self.state.rotation())
    }
}
