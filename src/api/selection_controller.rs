use crate::render::Renderer;

use super::PieChartEngine;

impl<R: Renderer> PieChartEngine<R> {
    /// Selects one slice programmatically and notifies like a tap.
    ///
    /// Returns `false` for unknown indices and zero-value slices.
    pub fn select_slice(&mut self, index: usize) -> bool {
        if !self.state.select(index) {
            return false;
        }
        self.request_redraw();
        self.notify_selection();
        true
    }

    /// Clears any selection and notifies "none".
    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
        self.request_redraw();
        self.notify_selection();
    }
}
