//! GTK4 host adapter.
//!
//! Wraps a `DrawingArea` whose draw callback renders the engine through
//! Cairo and whose drag gesture forwards down/move/up phases in widget-local
//! coordinates. A press and release without motion arrives as a tap.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::PieChartEngine;
use crate::core::{SliceConfig, Viewport};
use crate::error::ChartResult;
use crate::interaction::PointerEvent;
use crate::render::{CairoContextRenderer, Renderer};

pub type SharedPieEngine<R> = Rc<RefCell<PieChartEngine<R>>>;

pub struct GtkPieChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: SharedPieEngine<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkPieChartAdapter<R> {
    #[must_use]
    pub fn new(engine: PieChartEngine<R>) -> Self {
        let preferred_height = engine.preferred_height().ceil() as i32;
        let engine = Rc::new(RefCell::new(engine));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_content_height(preferred_height);
        attach_draw_func(&drawing_area, Rc::clone(&engine));
        attach_drag_gesture(&drawing_area, Rc::clone(&engine));

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> SharedPieEngine<R> {
        Rc::clone(&self.engine)
    }

    /// Replaces the slices and schedules a redraw.
    pub fn set_slices(&self, configs: Vec<SliceConfig>) -> ChartResult<()> {
        self.engine.borrow_mut().set_slices(configs)?;
        self.drawing_area.queue_draw();
        Ok(())
    }
}

fn attach_draw_func<R>(drawing_area: &gtk::DrawingArea, engine: SharedPieEngine<R>)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    drawing_area.set_draw_func(move |_widget, context, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        let Ok(mut chart) = engine.try_borrow_mut() else {
            return;
        };

        let viewport = Viewport::new(width as u32, height as u32);
        if chart.viewport() != viewport {
            if let Err(err) = chart.set_viewport(viewport) {
                warn!(error = %err, width, height, "skip pie viewport update");
            }
        }
        if let Err(err) = chart.render_on_cairo_context(context) {
            warn!(error = %err, "pie draw callback failed");
        }
    });
}

fn attach_drag_gesture<R>(drawing_area: &gtk::DrawingArea, engine: SharedPieEngine<R>)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    let drag = gtk::GestureDrag::new();
    {
        let engine = Rc::clone(&engine);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_begin(move |_, x, y| {
            forward(&engine, &drawing_area, PointerEvent::down(x, y));
        });
    }
    {
        let engine = Rc::clone(&engine);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            if let Some((start_x, start_y)) = gesture.start_point() {
                let event = PointerEvent::moved(start_x + offset_x, start_y + offset_y);
                forward(&engine, &drawing_area, event);
            }
        });
    }
    {
        let drawing_area = drawing_area.clone();
        drag.connect_drag_end(move |gesture, offset_x, offset_y| {
            if let Some((start_x, start_y)) = gesture.start_point() {
                let event = PointerEvent::up(start_x + offset_x, start_y + offset_y);
                forward(&engine, &drawing_area, event);
            }
        });
    }
    drawing_area.add_controller(drag);
}

fn forward<R: Renderer>(
    engine: &SharedPieEngine<R>,
    drawing_area: &gtk::DrawingArea,
    event: PointerEvent,
) {
    let Ok(mut chart) = engine.try_borrow_mut() else {
        return;
    };
    chart.handle_pointer(event);
    if chart.has_pending_invalidation() {
        drawing_area.queue_draw();
    }
}
