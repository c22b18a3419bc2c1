// Painting helpers shared by the plot layers. Everything in here consumes
// screen-space geometry that was computed elsewhere.

use crate::utils::to_pixels;
use gpui::*;

/// A straight screen-space segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point<f64>,
    pub to: Point<f64>,
}

impl Segment {
    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

/// Splits `segment` into dashes of `dash` length separated by `gap`.
/// The last dash is cut short at the segment end.
pub fn dash_segments(segment: Segment, dash: f64, gap: f64) -> Vec<Segment> {
    let length = segment.length();
    if length <= 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    let period = dash + gap.max(0.0);
    let (dx, dy) = (
        (segment.to.x - segment.from.x) / length,
        (segment.to.y - segment.from.y) / length,
    );
    let at = |d: f64| Point::new(segment.from.x + dx * d, segment.from.y + dy * d);

    let mut dashes = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + dash).min(length);
        dashes.push(Segment {
            from: at(start),
            to: at(end),
        });
        start += period;
    }
    dashes
}

pub fn paint_segments(window: &mut Window, segments: &[Segment], width: f32, color: Hsla) {
    if segments.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(width));
    for segment in segments {
        builder.move_to(to_pixels(segment.from));
        builder.line_to(to_pixels(segment.to));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}

/// Connected polyline through `points` in the order given.
pub fn paint_polyline(window: &mut Window, points: &[Point<f64>], width: f32, color: Hsla) {
    if points.len() < 2 {
        return;
    }
    let mut builder = PathBuilder::stroke(px(width));
    builder.move_to(to_pixels(points[0]));
    for p in &points[1..] {
        builder.line_to(to_pixels(*p));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}

/// Filled closed polygon.
pub fn paint_polygon(window: &mut Window, points: &[Point<f64>], color: Hsla) {
    if points.len() < 3 {
        return;
    }
    let mut builder = PathBuilder::fill();
    builder.move_to(to_pixels(points[0]));
    for p in &points[1..] {
        builder.line_to(to_pixels(*p));
    }
    builder.line_to(to_pixels(points[0]));
    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}

/// Round markers centred on each point.
pub fn paint_markers(window: &mut Window, points: &[Point<f64>], radius: f32, color: Hsla) {
    for p in points {
        let center = to_pixels(*p);
        let rect = Bounds::new(
            point(center.x - px(radius), center.y - px(radius)),
            size(px(radius * 2.0), px(radius * 2.0)),
        );
        window.paint_quad(fill(rect, color).corner_radii(Corners::all(px(radius))));
    }
}
