use tracing::trace;

use crate::render::Renderer;

use super::PieChartEngine;

impl<R: Renderer> PieChartEngine<R> {
    /// Whether state changed since the last successful render.
    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        self.pending_invalidation
    }

    /// Returns and clears the redraw request, for hosts that schedule their
    /// own draw callbacks.
    pub fn take_pending_invalidation(&mut self) -> bool {
        std::mem::take(&mut self.pending_invalidation)
    }

    pub(super) fn request_redraw(&mut self) {
        if !self.pending_invalidation {
            trace!("request pie redraw");
        }
        self.pending_invalidation = true;
    }
}
