use gpui::{px, Pixels, Point};

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Screen point in f64 to the GPUI pixel point painters expect.
pub fn to_pixels(point: Point<f64>) -> Point<Pixels> {
    Point::new(px(point.x as f32), px(point.y as f32))
}

pub fn to_f64(point: Point<Pixels>) -> Point<f64> {
    Point::new(point.x.as_f32() as f64, point.y.as_f32() as f64)
}

/// Relative tolerance used when comparing quotients against integers.
const MULTIPLE_EPSILON: f64 = 1e-9;

/// True when `value` is an integer multiple of `step`, tolerating the
/// rounding noise of repeated float arithmetic.
pub fn is_multiple_of(value: f64, step: f64) -> bool {
    let ratio = value / step;
    (ratio - ratio.round()).abs() <= MULTIPLE_EPSILON * ratio.abs().max(1.0)
}

/// Number of decimals needed to print multiples of `step` exactly.
pub fn decimals_for(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step.abs();
    while decimals < 6 && !is_multiple_of(scaled, 1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

pub fn format_value(value: f64, step: f64) -> String {
    let decimals = decimals_for(step);
    let formatted = format!("{:.*}", decimals, value);
    // "-0" and "-0.0" read badly on an axis
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}
