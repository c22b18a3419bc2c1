//! Adapters from GPUI pointer events to [`PointerInput`].

use crate::overlay::{OverlayOutcome, PointerInput, TouchPhase};
use crate::utils::to_f64;
use gpui::*;

use super::PlotView;

pub fn from_mouse_move(event: &MouseMoveEvent) -> PointerInput {
    PointerInput::Move(to_f64(event.position))
}

pub fn from_mouse_up(event: &MouseUpEvent) -> PointerInput {
    PointerInput::Commit(to_f64(event.position))
}

/// Leaving the surface cancels; entering it is followed by a move anyway.
pub fn from_hover(hovered: bool) -> Option<PointerInput> {
    (!hovered).then_some(PointerInput::Cancel)
}

pub fn from_touch(phase: TouchPhase, position: Point<Pixels>) -> PointerInput {
    PointerInput::from_touch(phase, to_f64(position))
}

impl PlotView {
    pub(super) fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.dispatch(from_mouse_move(event), cx);
    }

    pub(super) fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.dispatch(from_mouse_up(event), cx);
    }

    pub(super) fn handle_hover(&mut self, hovered: &bool, _window: &mut Window, cx: &mut Context<Self>) {
        if let Some(input) = from_hover(*hovered) {
            self.dispatch(input, cx);
        }
    }

    /// Entry point for platforms that deliver raw touches.
    pub fn handle_touch(
        &mut self,
        phase: TouchPhase,
        position: Point<Pixels>,
        cx: &mut Context<Self>,
    ) -> OverlayOutcome {
        self.dispatch(from_touch(phase, position), cx)
    }

    pub(super) fn dispatch(&mut self, input: PointerInput, cx: &mut Context<Self>) -> OverlayOutcome {
        let outcome = self.plot.borrow_mut().handle_input(input);
        if outcome.needs_repaint() {
            cx.notify();
        }
        outcome
    }
}
