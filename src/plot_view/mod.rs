pub mod actions;
pub mod input;

use crate::axis_renderer::AxisRenderer;
use crate::data_types::{DataPoint, PlotMode};
use crate::plot::Plot;
use crate::theme::PlotTheme;
use crate::utils::to_pixels;
use gpui::prelude::*;
use gpui::*;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

pub use actions::{ClearPoints, UndoPoint};

/// GPUI view around one [`Plot`].
///
/// Listeners are attached fresh on every render through `cx.listener`, and
/// not at all in view mode, so a mode switch never leaves a handler from the
/// previous mode behind.
pub struct PlotView {
    // Shared with the paint closure, which learns the final bounds.
    plot: Rc<RefCell<Plot>>,
    pub theme: PlotTheme,
    focus_handle: FocusHandle,
}

impl Focusable for PlotView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl PlotView {
    pub fn new(plot: Plot, theme: PlotTheme, cx: &mut Context<Self>) -> Self {
        Self {
            plot: Rc::new(RefCell::new(plot)),
            theme,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Borrow of the underlying plot. Must not be held across calls that
    /// mutate the view.
    pub fn plot(&self) -> Ref<'_, Plot> {
        self.plot.borrow()
    }

    pub fn mode(&self) -> PlotMode {
        self.plot.borrow().mode()
    }

    pub fn set_mode(&mut self, mode: PlotMode, cx: &mut Context<Self>) {
        self.plot.borrow_mut().set_mode(mode);
        cx.notify();
    }

    pub fn set_placed_points(&mut self, points: Vec<DataPoint>, cx: &mut Context<Self>) {
        self.plot.borrow_mut().set_placed_points(points);
        cx.notify();
    }

    pub fn clear_placed_points(&mut self, cx: &mut Context<Self>) {
        self.plot.borrow_mut().clear_placed_points();
        cx.notify();
    }

    pub fn undo_last_point(&mut self, cx: &mut Context<Self>) -> Option<DataPoint> {
        let removed = self.plot.borrow_mut().undo_last_point();
        if removed.is_some() {
            cx.notify();
        }
        removed
    }

    pub fn placed_points(&self) -> Vec<DataPoint> {
        self.plot.borrow().placed_points()
    }

    fn render_readout(&self, root_origin: Point<Pixels>) -> Option<AnyElement> {
        let plot = self.plot.borrow();
        if !plot.config().show_readout {
            return None;
        }
        let crosshair = plot.crosshair()?;
        let center = to_pixels(crosshair.screen);
        Some(
            div()
                .absolute()
                .left(center.x - root_origin.x + px(10.0))
                .top(center.y - root_origin.y - px(24.0))
                .px_1()
                .rounded_sm()
                .bg(self.theme.readout_background)
                .text_color(self.theme.readout_text)
                .text_size(px(11.0))
                .child(crosshair.readout.clone())
                .into_any_element(),
        )
    }
}

impl Render for PlotView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (mode, root_origin, labels, titles) = {
            let plot = self.plot.borrow();
            let root_origin = plot.outer_bounds().origin;
            let labels = AxisRenderer::render_labels(
                &AxisRenderer::labels(plot.mapper()),
                root_origin,
                &self.theme,
            );
            let titles = AxisRenderer::render_titles(plot.mapper(), root_origin, &self.theme);
            (plot.mode(), root_origin, labels, titles)
        };
        let readout = self.render_readout(root_origin);

        let plot = self.plot.clone();
        let theme = self.theme.clone();

        div()
            .id("plot-view")
            .track_focus(&self.focus_handle)
            .size_full()
            .relative()
            .bg(self.theme.background)
            .on_action(cx.listener(Self::handle_undo_point))
            .on_action(cx.listener(Self::handle_clear_points))
            .child(
                canvas(|_, _, _| {}, move |bounds, (), window, _cx| {
                    let mut plot = plot.borrow_mut();
                    if plot.resize(bounds) {
                        // Labels are laid out at render time from these bounds.
                        window.refresh();
                    }
                    let config = plot.config().clone();
                    plot.scene().paint(window, &theme, &config);
                })
                .size_full(),
            )
            .children(labels)
            .children(titles)
            .children(readout)
            .when(mode.is_interactive(), |d| {
                let fh = self.focus_handle.clone();
                d.cursor(CursorStyle::Crosshair)
                    .on_mouse_down(MouseButton::Left, move |_, window, _| {
                        window.focus(&fh);
                    })
                    .on_mouse_move(cx.listener(Self::handle_mouse_move))
                    .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
                    .on_hover(cx.listener(Self::handle_hover))
            })
    }
}
