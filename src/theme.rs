use gpui::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct PlotTheme {
    pub background: Hsla,
    pub major_grid: Hsla,
    pub minor_grid: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_title: Hsla,
    pub axis_label_size: Pixels,
    pub zero_line: Hsla,
    pub positive_shade: Hsla,
    pub negative_shade: Hsla,
    pub default_line: Hsla,
    pub crosshair_line: Hsla,
    pub preview_line: Hsla,
    pub placed_point: Hsla,
    pub readout_background: Hsla,
    pub readout_text: Hsla,
    /// Colors for `LineSpec::color_token`.
    pub palette: HashMap<String, Hsla>,
}

impl PlotTheme {
    /// Unknown or empty tokens fall back to `default_line`.
    pub fn line_color(&self, token: &str) -> Hsla {
        self.palette.get(token).copied().unwrap_or(self.default_line)
    }

    pub fn with_token(mut self, token: impl Into<String>, color: Hsla) -> Self {
        self.palette.insert(token.into(), color);
        self
    }
}

impl Default for PlotTheme {
    fn default() -> Self {
        let palette = [
            ("primary", gpui::blue()),
            ("secondary", gpui::green()),
            ("accent", gpui::yellow()),
            ("danger", gpui::red()),
        ]
        .into_iter()
        .map(|(token, color)| (token.to_string(), color))
        .collect();

        Self {
            background: gpui::white(),
            major_grid: gpui::black().alpha(0.25),
            minor_grid: gpui::black().alpha(0.08),
            axis_line: gpui::black().alpha(0.6),
            axis_label: gpui::black().alpha(0.8),
            axis_title: gpui::black(),
            axis_label_size: px(11.0),
            zero_line: gpui::black().alpha(0.7),
            positive_shade: gpui::green().alpha(0.3),
            negative_shade: gpui::red().alpha(0.3),
            default_line: gpui::blue(),
            crosshair_line: gpui::black().alpha(0.35),
            preview_line: gpui::red().alpha(0.6),
            placed_point: gpui::red(),
            readout_background: gpui::black().alpha(0.8),
            readout_text: gpui::white(),
            palette,
        }
    }
}
