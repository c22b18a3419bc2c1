use gpui::{px, Pixels, Point};
use serde::{Deserialize, Serialize};

use super::data::DataPoint;
use crate::gutter_manager::Gutters;

/// Layout and stroke settings of a plot instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Space around the plot rectangle reserved for axis labels.
    pub gutters: Gutters,
    /// How far beyond the plot rectangle pointer input is still accepted.
    pub hit_margin: Pixels,
    pub line_width: f32,
    pub vertex_marker_radius: f32,
    pub placed_marker_radius: f32,
    pub preview_line_width: f32,
    pub major_grid_width: f32,
    pub minor_grid_width: f32,
    pub zero_line_width: f32,
    pub dash_length: f32,
    pub dash_gap: f32,
    pub show_readout: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            gutters: Gutters::default(),
            hit_margin: px(12.0),
            line_width: 2.0,
            vertex_marker_radius: 3.0,
            placed_marker_radius: 5.0,
            preview_line_width: 1.5,
            major_grid_width: 1.0,
            minor_grid_width: 0.5,
            zero_line_width: 1.5,
            dash_length: 6.0,
            dash_gap: 4.0,
            show_readout: true,
        }
    }
}

/// Crosshair tracked by the overlay while the pointer is inside the hit region.
#[derive(Clone, Debug, PartialEq)]
pub struct Crosshair {
    /// Quantized value under the pointer.
    pub data: DataPoint,
    /// Screen position of `data`, not of the raw pointer.
    pub screen: Point<f64>,
    /// Formatted live readout, e.g. `t = 5, v = 2.5`.
    pub readout: String,
}
