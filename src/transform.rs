//! Data-space / screen-space mapping, grid snapping and clamping.

use crate::data_types::{AxisSpec, DataPoint};
use crate::utils::{format_value, PixelsExt};
use gpui::*;

/// Linear map between one axis's data range and a pixel span.
///
/// Works in f64 throughout so that a round trip through screen space returns
/// the original value; `Pixels` is only f32.
#[derive(Clone, Debug, PartialEq)]
struct AxisScale {
    d_min: f64,
    d_max: f64,
    r_start: f64,
    r_end: f64,
}

impl AxisScale {
    fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d_min: domain.0,
            d_max: domain.1,
            r_start: range.0,
            r_end: range.1,
        }
    }

    fn map(&self, value: f64) -> f64 {
        let t = (value - self.d_min) / (self.d_max - self.d_min);
        self.r_start + t * (self.r_end - self.r_start)
    }

    fn invert(&self, pixel: f64) -> f64 {
        let span = self.r_end - self.r_start;
        if span.abs() < f64::EPSILON {
            return self.d_min;
        }
        let t = (pixel - self.r_start) / span;
        self.d_min + t * (self.d_max - self.d_min)
    }
}

/// Bidirectional transform for one plot instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateMapper {
    x_axis: AxisSpec,
    y_axis: AxisSpec,
    x_scale: AxisScale,
    y_scale: AxisScale,
    bounds: Bounds<Pixels>,
}

impl CoordinateMapper {
    /// `plot_rect` is the drawable area, label gutters already excluded.
    pub fn new(x_axis: AxisSpec, y_axis: AxisSpec, plot_rect: Bounds<Pixels>) -> Self {
        let left = plot_rect.origin.x.as_f32() as f64;
        let top = plot_rect.origin.y.as_f32() as f64;
        let width = plot_rect.size.width.as_f32() as f64;
        let height = plot_rect.size.height.as_f32() as f64;

        let x_scale = AxisScale::new((x_axis.min, x_axis.max), (left, left + width));
        // Y grows downwards on screen.
        let y_scale = AxisScale::new((y_axis.min, y_axis.max), (top + height, top));

        Self {
            x_axis,
            y_axis,
            x_scale,
            y_scale,
            bounds: plot_rect,
        }
    }

    pub fn x_axis(&self) -> &AxisSpec {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &AxisSpec {
        &self.y_axis
    }

    pub fn plot_rect(&self) -> Bounds<Pixels> {
        self.bounds
    }

    pub fn to_screen(&self, point: DataPoint) -> Point<f64> {
        Point::new(self.x_scale.map(point.x), self.y_scale.map(point.y))
    }

    pub fn to_data(&self, point: Point<f64>) -> DataPoint {
        DataPoint::new(self.x_scale.invert(point.x), self.y_scale.invert(point.y))
    }

    pub fn x_to_screen(&self, x: f64) -> f64 {
        self.x_scale.map(x)
    }

    pub fn y_to_screen(&self, y: f64) -> f64 {
        self.y_scale.map(y)
    }

    /// Rounds each component to the nearest multiple of its axis's snap step.
    pub fn snap(&self, point: DataPoint) -> DataPoint {
        DataPoint::new(self.x_axis.snap(point.x), self.y_axis.snap(point.y))
    }

    /// Clamps each component into its axis range.
    pub fn clamp(&self, point: DataPoint) -> DataPoint {
        DataPoint::new(self.x_axis.clamp(point.x), self.y_axis.clamp(point.y))
    }

    /// Snap then clamp: the only way a placed point is ever produced.
    pub fn quantize(&self, point: DataPoint) -> DataPoint {
        self.clamp(self.snap(point))
    }

    pub fn screen_to_quantized(&self, point: Point<f64>) -> DataPoint {
        self.quantize(self.to_data(point))
    }

    pub fn contains_screen(&self, point: Point<f64>) -> bool {
        let left = self.x_scale.r_start;
        let right = self.x_scale.r_end;
        let top = self.y_scale.r_end;
        let bottom = self.y_scale.r_start;
        point.x >= left && point.x <= right && point.y >= top && point.y <= bottom
    }

    /// Human readable value pair, formatted to the snap precision of each axis.
    pub fn readout(&self, point: DataPoint) -> String {
        let x = format_value(point.x, self.x_axis.snap_step());
        let y = format_value(point.y, self.y_axis.snap_step());
        match (self.x_axis.label.is_empty(), self.y_axis.label.is_empty()) {
            (false, false) => format!("{} = {}, {} = {}", self.x_axis.label, x, self.y_axis.label, y),
            _ => format!("({}, {})", x, y),
        }
    }
}
