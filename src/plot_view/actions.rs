use crate::data_types::PlotMode;
use gpui::*;

use super::PlotView;

actions!(gpui_plot_quiz, [UndoPoint, ClearPoints]);

impl PlotView {
    pub(super) fn handle_undo_point(&mut self, _: &UndoPoint, _win: &mut Window, cx: &mut Context<Self>) {
        if self.mode() != PlotMode::Plot {
            return;
        }
        self.undo_last_point(cx);
    }

    pub(super) fn handle_clear_points(
        &mut self,
        _: &ClearPoints,
        _win: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.mode() != PlotMode::Plot {
            return;
        }
        self.clear_placed_points(cx);
    }
}
