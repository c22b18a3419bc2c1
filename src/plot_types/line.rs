use crate::data_types::{DataPoint, LineSpec, PlotConfig};
use crate::rendering::{paint_markers, paint_polyline};
use crate::theme::PlotTheme;
use crate::transform::CoordinateMapper;
use gpui::*;

use super::PlotLayer;

/// Screen-space geometry of one authored line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineGeometry {
    pub id: String,
    pub color_token: String,
    /// Polyline vertices in author order. Empty when the line has fewer than
    /// two points.
    pub path: Vec<Point<f64>>,
    /// One marker per authored vertex.
    pub markers: Vec<Point<f64>>,
}

impl LineGeometry {
    pub fn from_spec(line: &LineSpec, mapper: &CoordinateMapper) -> Self {
        Self::from_points(&line.id, &line.color_token, &line.points, mapper)
    }

    /// Points are taken in the order given and never re-sorted.
    pub fn from_points(
        id: &str,
        color_token: &str,
        points: &[DataPoint],
        mapper: &CoordinateMapper,
    ) -> Self {
        let markers: Vec<Point<f64>> = points.iter().map(|p| mapper.to_screen(*p)).collect();
        let path = if markers.len() >= 2 {
            markers.clone()
        } else {
            Vec::new()
        };
        Self {
            id: id.to_string(),
            color_token: color_token.to_string(),
            path,
            markers,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl PlotLayer for LineGeometry {
    fn paint(&self, window: &mut Window, theme: &PlotTheme, config: &PlotConfig) {
        let color = theme.line_color(&self.color_token);
        paint_polyline(window, &self.path, config.line_width, color);
        paint_markers(window, &self.markers, config.vertex_marker_radius, color);
    }
}
