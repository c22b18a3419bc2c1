//! Signed area shading between the primary line and the zero baseline.
//!
//! Each shade range goes through three steps: the line is cut to the range
//! (with interpolated points where a segment crosses a range edge), the cut
//! is sorted by x, then split wherever it crosses y = 0 so that every piece
//! keeps one sign. Each piece is closed down to the baseline as a polygon.

use crate::data_types::{DataPoint, PlotConfig, ShadeRange};
use crate::rendering::paint_polygon;
use crate::theme::PlotTheme;
use crate::transform::CoordinateMapper;
use gpui::*;

use super::PlotLayer;

/// Smallest y difference for which a zero crossing is interpolated.
const CROSSING_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShadeSign {
    /// Region above the baseline.
    Positive,
    /// Region below the baseline.
    Negative,
}

/// A closed region between a constant-sign piece of the line and y = 0.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadedRegion {
    pub sign: ShadeSign,
    /// The piece of the line, x ascending.
    pub path: Vec<DataPoint>,
    /// Closed outline: baseline under the first point, the path, baseline
    /// under the last point.
    pub polygon: Vec<DataPoint>,
}

pub struct AreaShader;

impl AreaShader {
    /// Shaded regions for every range, in range order.
    pub fn shade(line: &[DataPoint], ranges: &[ShadeRange]) -> Vec<ShadedRegion> {
        ranges
            .iter()
            .flat_map(|range| Self::shade_range(line, *range))
            .collect()
    }

    pub fn shade_range(line: &[DataPoint], range: ShadeRange) -> Vec<ShadedRegion> {
        let mut extracted = Self::extract(line, range);
        if extracted.len() < 2 {
            tracing::trace!(
                from_x = range.from_x,
                to_x = range.to_x,
                points = extracted.len(),
                "shade range does not cover the line"
            );
            return Vec::new();
        }
        Self::sort_by_x(&mut extracted);
        Self::split_at_zero(&extracted)
            .into_iter()
            .map(Self::close_region)
            .collect()
    }

    /// Authored points inside `[from_x, to_x]` plus one interpolated point for
    /// every authored segment that strictly straddles either edge. Order is
    /// unspecified.
    pub fn extract(line: &[DataPoint], range: ShadeRange) -> Vec<DataPoint> {
        let mut out: Vec<DataPoint> = line.iter().copied().filter(|p| range.contains(p.x)).collect();

        for pair in line.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            for edge in [range.from_x, range.to_x] {
                if (a.x - edge) * (b.x - edge) < 0.0 {
                    out.push(DataPoint::new(edge, Self::interpolate_y(a, b, edge)));
                }
            }
        }
        out
    }

    /// Stable x-ascending sort. Authored order is not assumed to be monotonic.
    pub fn sort_by_x(points: &mut Vec<DataPoint>) {
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        points.dedup();
    }

    /// Splits an x-sorted path into maximal pieces of constant sign. Zero is
    /// non-negative. Every crossing point is shared by the piece it closes and
    /// the piece it opens.
    pub fn split_at_zero(points: &[DataPoint]) -> Vec<Vec<DataPoint>> {
        let mut pieces = Vec::new();
        let Some((&first, rest)) = points.split_first() else {
            return pieces;
        };
        let mut current = vec![first];

        for &next in rest {
            let prev = current[current.len() - 1];
            if Self::non_negative(prev.y) == Self::non_negative(next.y) {
                current.push(next);
                continue;
            }

            let dy = next.y - prev.y;
            if dy.abs() < CROSSING_EPSILON {
                current.push(next);
                continue;
            }

            if next.y == 0.0 {
                // An authored vertex on the baseline closes the piece itself.
                current.push(next);
                Self::push_piece(&mut pieces, std::mem::take(&mut current));
                current.push(next);
                continue;
            }

            let crossing = if prev.y == 0.0 {
                prev
            } else {
                let x = prev.x + (0.0 - prev.y) * (next.x - prev.x) / dy;
                let crossing = DataPoint::new(x, 0.0);
                current.push(crossing);
                crossing
            };
            Self::push_piece(&mut pieces, std::mem::take(&mut current));
            current = vec![crossing, next];
        }

        Self::push_piece(&mut pieces, current);
        pieces
    }

    /// Pieces without two distinct points enclose no area.
    fn push_piece(pieces: &mut Vec<Vec<DataPoint>>, piece: Vec<DataPoint>) {
        if piece.windows(2).any(|w| w[0] != w[1]) {
            pieces.push(piece);
        }
    }

    fn close_region(path: Vec<DataPoint>) -> ShadedRegion {
        // The farthest point from the baseline decides, so that a sub-epsilon
        // dip left in by the crossing guard does not flip a region.
        let extreme = path
            .iter()
            .map(|p| p.y)
            .fold(0.0_f64, |acc, y| if y.abs() > acc.abs() { y } else { acc });
        let sign = if extreme < 0.0 {
            ShadeSign::Negative
        } else {
            ShadeSign::Positive
        };
        let mut polygon = Vec::with_capacity(path.len() + 2);
        if let (Some(first), Some(last)) = (path.first(), path.last()) {
            polygon.push(DataPoint::new(first.x, 0.0));
            polygon.extend(path.iter().copied());
            polygon.push(DataPoint::new(last.x, 0.0));
        }
        ShadedRegion { sign, path, polygon }
    }

    fn interpolate_y(a: DataPoint, b: DataPoint, x: f64) -> f64 {
        a.y + (x - a.x) * (b.y - a.y) / (b.x - a.x)
    }

    fn non_negative(y: f64) -> bool {
        y >= 0.0
    }
}

/// Shaded regions mapped to screen space.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadeGeometry {
    pub sign: ShadeSign,
    pub polygon: Vec<Point<f64>>,
}

impl ShadeGeometry {
    pub fn from_region(region: &ShadedRegion, mapper: &CoordinateMapper) -> Self {
        Self {
            sign: region.sign,
            polygon: region.polygon.iter().map(|p| mapper.to_screen(*p)).collect(),
        }
    }
}

impl PlotLayer for ShadeGeometry {
    fn paint(&self, window: &mut Window, theme: &PlotTheme, _config: &PlotConfig) {
        let color = match self.sign {
            ShadeSign::Positive => theme.positive_shade,
            ShadeSign::Negative => theme.negative_shade,
        };
        paint_polygon(window, &self.polygon, color);
    }
}
