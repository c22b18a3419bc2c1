use crate::data_types::{AxisId, AxisSpec, PlotConfig};
use crate::rendering::{paint_segments, Segment};
use crate::theme::PlotTheme;
use crate::transform::CoordinateMapper;
use crate::utils::{format_value, is_multiple_of, to_pixels};
use gpui::prelude::*;
use gpui::*;

/// Upper bound on generated ticks per axis. A snap step this fine relative to
/// the range would only paint a solid block.
const MAX_TICKS: usize = 2_000;

/// Slack when deciding whether the last tick still lands on `max`.
const TICK_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub major: bool,
}

pub struct AxisTicks;

impl AxisTicks {
    /// Ticks from `min` to `max` every `snap_step`. A tick is major when it
    /// sits a whole number of `step`s away from `min`.
    pub fn compute(axis: &AxisSpec) -> Vec<Tick> {
        let snap_step = axis.snap_step();
        let (count, step) = match Self::count(axis.span(), snap_step) {
            Some(count) => (count, snap_step),
            None => {
                tracing::warn!(
                    span = axis.span(),
                    snap_step,
                    "snap step too fine for the axis range, drawing major ticks only"
                );
                match Self::count(axis.span(), axis.step) {
                    Some(count) => (count, axis.step),
                    None => return Vec::new(),
                }
            }
        };

        (0..=count)
            .map(|i| {
                let value = if i == count && Self::lands_on_max(axis, step, count) {
                    axis.max
                } else {
                    axis.min + i as f64 * step
                };
                Tick {
                    value,
                    major: is_multiple_of(value - axis.min, axis.step),
                }
            })
            .collect()
    }

    /// Values that carry a label: one every `step`.
    pub fn label_values(axis: &AxisSpec) -> Vec<f64> {
        Self::compute(axis)
            .into_iter()
            .filter(|t| t.major)
            .map(|t| t.value)
            .collect()
    }

    fn count(span: f64, step: f64) -> Option<usize> {
        let n = (span / step + TICK_EPSILON).floor();
        if n.is_finite() && n >= 0.0 && (n as usize) < MAX_TICKS {
            Some(n as usize)
        } else {
            None
        }
    }

    fn lands_on_max(axis: &AxisSpec, step: f64, count: usize) -> bool {
        let last = axis.min + count as f64 * step;
        (axis.max - last).abs() <= TICK_EPSILON * axis.span().max(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub axis: AxisId,
    pub from: Point<f64>,
    pub to: Point<f64>,
    pub major: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub axis: AxisId,
    pub text: String,
    /// Screen position of the tick the label belongs to.
    pub anchor: Point<f64>,
}

pub struct AxisRenderer;

impl AxisRenderer {
    /// Vertical lines for x ticks and horizontal lines for y ticks, spanning
    /// the plot rectangle.
    pub fn grid_lines(mapper: &CoordinateMapper) -> Vec<GridLine> {
        let rect = mapper.plot_rect();
        let top = mapper.y_to_screen(mapper.y_axis().max);
        let bottom = mapper.y_to_screen(mapper.y_axis().min);
        let left = mapper.x_to_screen(mapper.x_axis().min);
        let right = mapper.x_to_screen(mapper.x_axis().max);

        if rect.size.width <= px(0.0) || rect.size.height <= px(0.0) {
            return Vec::new();
        }

        let vertical = AxisTicks::compute(mapper.x_axis()).into_iter().map(|tick| {
            let x = mapper.x_to_screen(tick.value);
            GridLine {
                axis: AxisId::X,
                from: Point::new(x, top),
                to: Point::new(x, bottom),
                major: tick.major,
            }
        });
        let horizontal = AxisTicks::compute(mapper.y_axis()).into_iter().map(|tick| {
            let y = mapper.y_to_screen(tick.value);
            GridLine {
                axis: AxisId::Y,
                from: Point::new(left, y),
                to: Point::new(right, y),
                major: tick.major,
            }
        });
        vertical.chain(horizontal).collect()
    }

    pub fn labels(mapper: &CoordinateMapper) -> Vec<AxisLabel> {
        let x_axis = mapper.x_axis();
        let y_axis = mapper.y_axis();
        let baseline = mapper.y_to_screen(y_axis.min);
        let left = mapper.x_to_screen(x_axis.min);

        let x_labels = AxisTicks::label_values(x_axis).into_iter().map(|value| AxisLabel {
            axis: AxisId::X,
            text: format_value(value, x_axis.step),
            anchor: Point::new(mapper.x_to_screen(value), baseline),
        });
        let y_labels = AxisTicks::label_values(y_axis).into_iter().map(|value| AxisLabel {
            axis: AxisId::Y,
            text: format_value(value, y_axis.step),
            anchor: Point::new(left, mapper.y_to_screen(value)),
        });
        x_labels.chain(y_labels).collect()
    }

    /// Horizontal line at y = 0, only when asked for and when zero lies
    /// strictly inside the y range.
    pub fn zero_baseline(mapper: &CoordinateMapper, visible: bool) -> Option<Segment> {
        if !visible || !mapper.y_axis().straddles(0.0) {
            return None;
        }
        let y = mapper.y_to_screen(0.0);
        Some(Segment {
            from: Point::new(mapper.x_to_screen(mapper.x_axis().min), y),
            to: Point::new(mapper.x_to_screen(mapper.x_axis().max), y),
        })
    }

    pub fn paint_grid(
        window: &mut Window,
        lines: &[GridLine],
        theme: &PlotTheme,
        config: &PlotConfig,
    ) {
        let (major, minor): (Vec<_>, Vec<_>) = lines.iter().partition(|l| l.major);
        let to_segments = |lines: Vec<&GridLine>| -> Vec<Segment> {
            lines
                .into_iter()
                .map(|l| Segment {
                    from: l.from,
                    to: l.to,
                })
                .collect()
        };
        paint_segments(window, &to_segments(minor), config.minor_grid_width, theme.minor_grid);
        paint_segments(window, &to_segments(major), config.major_grid_width, theme.major_grid);
    }

    /// Label elements positioned relative to `root_origin`, the top-left of
    /// the element the labels are children of.
    pub fn render_labels(
        labels: &[AxisLabel],
        root_origin: Point<Pixels>,
        theme: &PlotTheme,
    ) -> Vec<AnyElement> {
        const LABEL_WIDTH: f32 = 48.0;
        const LABEL_HEIGHT: f32 = 16.0;

        labels
            .iter()
            .map(|label| {
                let anchor = to_pixels(label.anchor);
                let local = point(anchor.x - root_origin.x, anchor.y - root_origin.y);
                let el = div()
                    .absolute()
                    .h(px(LABEL_HEIGHT))
                    .flex()
                    .items_center()
                    .text_size(theme.axis_label_size)
                    .text_color(theme.axis_label);
                match label.axis {
                    AxisId::X => el
                        .left(local.x - px(LABEL_WIDTH / 2.0))
                        .top(local.y + px(4.0))
                        .w(px(LABEL_WIDTH))
                        .justify_center(),
                    AxisId::Y => el
                        .left(local.x - px(LABEL_WIDTH + 6.0))
                        .top(local.y - px(LABEL_HEIGHT / 2.0))
                        .w(px(LABEL_WIDTH))
                        .justify_end(),
                }
                .child(label.text.clone())
                .into_any_element()
            })
            .collect()
    }

    /// Axis titles: x centred under the tick labels, y above the y labels.
    pub fn render_titles(
        mapper: &CoordinateMapper,
        root_origin: Point<Pixels>,
        theme: &PlotTheme,
    ) -> Vec<AnyElement> {
        let rect = mapper.plot_rect();
        let mut titles = Vec::new();
        if !mapper.x_axis().label.is_empty() {
            titles.push(
                div()
                    .absolute()
                    .left(rect.origin.x - root_origin.x)
                    .w(rect.size.width)
                    .top(rect.origin.y + rect.size.height - root_origin.y + px(20.0))
                    .flex()
                    .justify_center()
                    .text_size(theme.axis_label_size)
                    .text_color(theme.axis_title)
                    .child(mapper.x_axis().label.clone())
                    .into_any_element(),
            );
        }
        if !mapper.y_axis().label.is_empty() {
            titles.push(
                div()
                    .absolute()
                    .left(px(2.0))
                    .top(rect.origin.y - root_origin.y - px(16.0))
                    .text_size(theme.axis_label_size)
                    .text_color(theme.axis_title)
                    .child(mapper.y_axis().label.clone())
                    .into_any_element(),
            );
        }
        titles
    }
}
