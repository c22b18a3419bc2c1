//! Plot Model
//!
//! A `Plot` is one plot instance: it owns the `PlotSpec`, the coordinate mapper,
//! the placed points and the interaction overlay, and nothing is shared
//! between instances. Apart from `PlotScene::paint` it only uses GPUI
//! geometry types, so the whole interaction flow can be driven and tested
//! without a window.
//!
//! Observers are registered at construction and called synchronously, in the
//! order the changes happen.

use crate::axis_renderer::{AxisLabel, AxisRenderer, GridLine};
use crate::data_types::{Crosshair, DataPoint, PlotConfig, PlotMode, PlotSpec};
use crate::error::SpecError;
use crate::gutter_manager::GutterManager;
use crate::overlay::{InteractionOverlay, OverlayOutcome, PointerInput};
use crate::placed_points::{PlacedPointStore, PointsObserver};
use crate::plot_types::{
    AreaShader, LineGeometry, PlacedGeometry, PlotLayer, ShadeGeometry, ShadedRegion,
};
use crate::rendering::{dash_segments, paint_segments, Segment};
use crate::theme::PlotTheme;
use crate::transform::CoordinateMapper;
use gpui::*;

pub type ValueObserver = Box<dyn FnMut(DataPoint)>;

/// Caller-supplied callbacks.
#[derive(Default)]
pub struct PlotObservers {
    on_points_change: Option<PointsObserver>,
    on_value_read: Option<ValueObserver>,
}

impl PlotObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the full ordered list after every change to the placed
    /// points.
    pub fn on_points_change(mut self, f: impl FnMut(&[DataPoint]) + 'static) -> Self {
        self.on_points_change = Some(Box::new(f));
        self
    }

    /// Called once per commit in read mode.
    pub fn on_value_read(mut self, f: impl FnMut(DataPoint) + 'static) -> Self {
        self.on_value_read = Some(Box::new(f));
        self
    }
}

/// Crosshair lines through the tracked value, clipped to the plot rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct CrosshairGeometry {
    pub vertical: Segment,
    pub horizontal: Segment,
    pub center: Point<f64>,
    pub readout: String,
}

impl CrosshairGeometry {
    fn new(crosshair: &Crosshair, mapper: &CoordinateMapper) -> Self {
        let x_axis = mapper.x_axis();
        let y_axis = mapper.y_axis();
        let center = crosshair.screen;
        Self {
            vertical: Segment {
                from: Point::new(center.x, mapper.y_to_screen(y_axis.max)),
                to: Point::new(center.x, mapper.y_to_screen(y_axis.min)),
            },
            horizontal: Segment {
                from: Point::new(mapper.x_to_screen(x_axis.min), center.y),
                to: Point::new(mapper.x_to_screen(x_axis.max), center.y),
            },
            center,
            readout: crosshair.readout.clone(),
        }
    }
}

/// Everything drawn for one frame, in screen space.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotScene {
    pub plot_rect: Bounds<Pixels>,
    pub grid: Vec<GridLine>,
    pub frame: Vec<Segment>,
    pub labels: Vec<AxisLabel>,
    pub zero_line: Vec<Segment>,
    pub shades: Vec<ShadeGeometry>,
    pub lines: Vec<LineGeometry>,
    pub placed: PlacedGeometry,
    pub crosshair: Option<CrosshairGeometry>,
}

impl PlotScene {
    /// Paint order: grid, frame, shading, zero line, lines, placed points,
    /// crosshair.
    pub fn paint(&self, window: &mut Window, theme: &PlotTheme, config: &PlotConfig) {
        AxisRenderer::paint_grid(window, &self.grid, theme, config);
        paint_segments(window, &self.frame, config.major_grid_width, theme.axis_line);
        for shade in &self.shades {
            shade.paint(window, theme, config);
        }
        paint_segments(window, &self.zero_line, config.zero_line_width, theme.zero_line);
        for line in &self.lines {
            line.paint(window, theme, config);
        }
        self.placed.paint(window, theme, config);
        if let Some(crosshair) = &self.crosshair {
            paint_segments(
                window,
                &[crosshair.vertical, crosshair.horizontal],
                1.0,
                theme.crosshair_line,
            );
        }
    }
}

pub struct Plot {
    spec: PlotSpec,
    config: PlotConfig,
    mapper: CoordinateMapper,
    outer_bounds: Bounds<Pixels>,
    store: PlacedPointStore,
    overlay: InteractionOverlay,
    /// Regions depend only on the `PlotSpec`, so they are computed once.
    shaded: Vec<ShadedRegion>,
    /// x-sorted copy of the placed points, refreshed after every change.
    preview: Vec<DataPoint>,
    on_value_read: Option<ValueObserver>,
}

impl Plot {
    /// Validates `spec`. Until the first `resize` the plot rectangle is empty.
    pub fn new(
        spec: PlotSpec,
        config: PlotConfig,
        observers: PlotObservers,
    ) -> Result<Self, SpecError> {
        spec.validate()?;

        let outer_bounds = Bounds::default();
        let mapper = CoordinateMapper::new(
            spec.x_axis.clone(),
            spec.y_axis.clone(),
            GutterManager::plot_rect(outer_bounds, &config.gutters),
        );
        let shaded = match spec.primary_line() {
            Some(line) => AreaShader::shade(&line.points, &spec.shade_ranges),
            None => Vec::new(),
        };
        let mut store = PlacedPointStore::new();
        store.set_observer(observers.on_points_change);
        let overlay = InteractionOverlay::new(spec.mode, config.hit_margin);

        tracing::info!(
            lines = spec.lines.len(),
            shade_ranges = spec.shade_ranges.len(),
            regions = shaded.len(),
            mode = ?spec.mode,
            "plot created"
        );

        Ok(Self {
            spec,
            config,
            mapper,
            outer_bounds,
            store,
            overlay,
            shaded,
            preview: Vec::new(),
            on_value_read: observers.on_value_read,
        })
    }

    pub fn spec(&self) -> &PlotSpec {
        &self.spec
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn outer_bounds(&self) -> Bounds<Pixels> {
        self.outer_bounds
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn mode(&self) -> PlotMode {
        self.spec.mode
    }

    pub fn crosshair(&self) -> Option<&Crosshair> {
        self.overlay.crosshair()
    }

    pub fn shaded_regions(&self) -> &[ShadedRegion] {
        &self.shaded
    }

    /// Placed points sorted by x, as drawn by the preview line.
    pub fn preview(&self) -> &[DataPoint] {
        &self.preview
    }

    /// Recomputes the plot rectangle from the outer bounds. Repeating it with
    /// the same bounds changes nothing. Returns whether anything changed.
    pub fn resize(&mut self, outer_bounds: Bounds<Pixels>) -> bool {
        if outer_bounds == self.outer_bounds {
            return false;
        }
        self.outer_bounds = outer_bounds;
        self.mapper = CoordinateMapper::new(
            self.spec.x_axis.clone(),
            self.spec.y_axis.clone(),
            GutterManager::plot_rect(outer_bounds, &self.config.gutters),
        );
        // Cached screen position would be stale.
        self.overlay = InteractionOverlay::new(self.spec.mode, self.config.hit_margin);
        tracing::trace!(?outer_bounds, "plot resized");
        true
    }

    /// Switches mode and replaces the overlay, so nothing from the previous
    /// mode stays attached.
    pub fn set_mode(&mut self, mode: PlotMode) {
        tracing::debug!(from = ?self.spec.mode, to = ?mode, "plot mode changed");
        self.spec.mode = mode;
        self.overlay = InteractionOverlay::new(mode, self.config.hit_margin);
    }

    pub fn handle_input(&mut self, input: PointerInput) -> OverlayOutcome {
        let outcome = self.overlay.handle(input, &self.mapper, &mut self.store);
        match outcome {
            OverlayOutcome::ValueRead(value) => {
                if let Some(observer) = self.on_value_read.as_mut() {
                    observer(value);
                }
            }
            OverlayOutcome::PointAdded(_) | OverlayOutcome::PointRemoved(_) => {
                self.refresh_preview();
            }
            _ => {}
        }
        outcome
    }

    /// Replaces the placed points, quantizing each one first.
    pub fn set_placed_points(&mut self, points: impl IntoIterator<Item = DataPoint>) {
        let quantized: Vec<DataPoint> = points.into_iter().map(|p| self.mapper.quantize(p)).collect();
        tracing::debug!(count = quantized.len(), "placed points restored");
        self.store.replace_all(quantized);
        self.refresh_preview();
    }

    pub fn clear_placed_points(&mut self) {
        self.store.clear();
        self.refresh_preview();
    }

    /// Copy in insertion order.
    pub fn placed_points(&self) -> Vec<DataPoint> {
        self.store.list()
    }

    /// Removes the most recently placed point, whichever it was.
    pub fn undo_last_point(&mut self) -> Option<DataPoint> {
        let removed = self.store.remove_last();
        if removed.is_some() {
            self.refresh_preview();
        }
        removed
    }

    fn refresh_preview(&mut self) {
        self.preview = self.store.sorted_by_x();
    }

    pub fn scene(&self) -> PlotScene {
        let mapper = &self.mapper;
        let x_axis = mapper.x_axis();
        let y_axis = mapper.y_axis();

        let zero_line = AxisRenderer::zero_baseline(mapper, self.spec.zero_line_visible)
            .map(|line| {
                dash_segments(
                    line,
                    self.config.dash_length as f64,
                    self.config.dash_gap as f64,
                )
            })
            .unwrap_or_default();

        let left = mapper.x_to_screen(x_axis.min);
        let bottom = mapper.y_to_screen(y_axis.min);
        let frame = vec![
            Segment {
                from: Point::new(left, mapper.y_to_screen(y_axis.max)),
                to: Point::new(left, bottom),
            },
            Segment {
                from: Point::new(left, bottom),
                to: Point::new(mapper.x_to_screen(x_axis.max), bottom),
            },
        ];

        PlotScene {
            plot_rect: mapper.plot_rect(),
            grid: AxisRenderer::grid_lines(mapper),
            frame,
            labels: AxisRenderer::labels(mapper),
            zero_line,
            shades: self
                .shaded
                .iter()
                .map(|region| ShadeGeometry::from_region(region, mapper))
                .collect(),
            lines: self
                .spec
                .lines
                .iter()
                .map(|line| LineGeometry::from_spec(line, mapper))
                .collect(),
            placed: PlacedGeometry::new(self.store.as_slice(), &self.preview, mapper),
            crosshair: self
                .overlay
                .crosshair()
                .map(|crosshair| CrosshairGeometry::new(crosshair, mapper)),
        }
    }
}

impl std::fmt::Debug for Plot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plot")
            .field("mode", &self.spec.mode)
            .field("plot_rect", &self.mapper.plot_rect())
            .field("store", &self.store)
            .finish()
    }
}
