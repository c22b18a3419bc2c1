use crate::data_types::{DataPoint, PlotConfig};
use crate::rendering::{paint_markers, paint_polyline};
use crate::theme::PlotTheme;
use crate::transform::CoordinateMapper;
use gpui::*;

use super::PlotLayer;

/// User-placed points and the preview line through them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacedGeometry {
    /// Preview polyline, x ascending.
    pub preview: Vec<Point<f64>>,
    /// One marker per placed point, in insertion order.
    pub markers: Vec<Point<f64>>,
}

impl PlacedGeometry {
    /// `preview` must already be x-sorted; `placed` is in insertion order.
    pub fn new(placed: &[DataPoint], preview: &[DataPoint], mapper: &CoordinateMapper) -> Self {
        Self {
            preview: preview.iter().map(|p| mapper.to_screen(*p)).collect(),
            markers: placed.iter().map(|p| mapper.to_screen(*p)).collect(),
        }
    }
}

impl PlotLayer for PlacedGeometry {
    fn paint(&self, window: &mut Window, theme: &PlotTheme, config: &PlotConfig) {
        paint_polyline(window, &self.preview, config.preview_line_width, theme.preview_line);
        paint_markers(window, &self.markers, config.placed_marker_radius, theme.placed_point);
    }
}
