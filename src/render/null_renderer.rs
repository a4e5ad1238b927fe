use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It validates every frame and keeps a copy of the last one so tests can
/// assert on emitted primitives. Text is measured with the default
/// estimator.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_arc_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_arc_count = frame.arcs.len();
        self.last_path_count = frame.paths.len();
        self.last_text_count = frame.texts.len();
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
