//! Pointer-driven interaction on top of a plot.
//!
//! All pointer sources (mouse, touch) are first normalized to
//! [`PointerInput`]; the overlay implements the mode logic once against that.

use crate::data_types::{Crosshair, DataPoint, PlotMode};
use crate::gutter_manager::GutterManager;
use crate::placed_points::PlacedPointStore;
use crate::transform::CoordinateMapper;
use crate::utils::to_pixels;
use gpui::{Pixels, Point};

/// Source-independent pointer event in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// Hover, or a finger moving while down.
    Move(Point<f64>),
    /// Primary activation: mouse click release or touch release.
    Commit(Point<f64>),
    /// The pointer left the surface or the touch was interrupted.
    Cancel,
}

/// Phases of a single touch, in the order a platform reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

impl PointerInput {
    /// Touch has no hover, so a touch tracks while down and commits on
    /// release.
    pub fn from_touch(phase: TouchPhase, position: Point<f64>) -> Self {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => Self::Move(position),
            TouchPhase::Ended => Self::Commit(position),
            TouchPhase::Cancelled => Self::Cancel,
        }
    }
}

/// What handling one input did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayOutcome {
    /// Inert mode, or the pointer was outside the hit region with no
    /// crosshair showing.
    Ignored,
    /// Crosshair moved to this quantized value.
    Tracked(DataPoint),
    /// Crosshair cleared, by a cancel or by the pointer leaving the hit
    /// region.
    Cancelled,
    /// Read mode commit.
    ValueRead(DataPoint),
    /// Plot mode commit that appended a point.
    PointAdded(DataPoint),
    /// Plot mode commit that toggled an existing point off.
    PointRemoved(DataPoint),
}

impl OverlayOutcome {
    pub fn needs_repaint(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub fn changed_points(&self) -> bool {
        matches!(self, Self::PointAdded(_) | Self::PointRemoved(_))
    }
}

/// Mode state machine. A new overlay is built for every mode switch, so no
/// crosshair or pointer state survives from the previous mode.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionOverlay {
    mode: PlotMode,
    hit_margin: Pixels,
    crosshair: Option<Crosshair>,
}

impl InteractionOverlay {
    pub fn new(mode: PlotMode, hit_margin: Pixels) -> Self {
        Self {
            mode,
            hit_margin,
            crosshair: None,
        }
    }

    pub fn mode(&self) -> PlotMode {
        self.mode
    }

    pub fn crosshair(&self) -> Option<&Crosshair> {
        self.crosshair.as_ref()
    }

    /// True when `position` is inside the plot rectangle grown by the hit
    /// margin.
    pub fn in_hit_region(&self, mapper: &CoordinateMapper, position: Point<f64>) -> bool {
        GutterManager::hit_region(mapper.plot_rect(), self.hit_margin).contains(&to_pixels(position))
    }

    pub fn handle(
        &mut self,
        input: PointerInput,
        mapper: &CoordinateMapper,
        store: &mut PlacedPointStore,
    ) -> OverlayOutcome {
        if !self.mode.is_interactive() {
            return OverlayOutcome::Ignored;
        }

        match input {
            PointerInput::Cancel => self.clear_crosshair(),
            PointerInput::Move(position) => match self.track(position, mapper) {
                Some(value) => OverlayOutcome::Tracked(value),
                None => self.clear_crosshair(),
            },
            PointerInput::Commit(position) => {
                let Some(value) = self.track(position, mapper) else {
                    return self.clear_crosshair();
                };
                match self.mode {
                    PlotMode::Read => {
                        tracing::debug!(x = value.x, y = value.y, "value read");
                        OverlayOutcome::ValueRead(value)
                    }
                    PlotMode::Plot => Self::toggle(value, store),
                    PlotMode::View => OverlayOutcome::Ignored,
                }
            }
        }
    }

    /// Drops the crosshair. Ignored when there was none to drop.
    fn clear_crosshair(&mut self) -> OverlayOutcome {
        if self.crosshair.take().is_some() {
            OverlayOutcome::Cancelled
        } else {
            OverlayOutcome::Ignored
        }
    }

    /// Quantizes the pointer position and moves the crosshair there.
    fn track(&mut self, position: Point<f64>, mapper: &CoordinateMapper) -> Option<DataPoint> {
        if !self.in_hit_region(mapper, position) {
            tracing::trace!(x = position.x, y = position.y, "pointer outside hit region");
            return None;
        }
        let value = mapper.screen_to_quantized(position);
        self.crosshair = Some(Crosshair {
            data: value,
            screen: mapper.to_screen(value),
            readout: mapper.readout(value),
        });
        Some(value)
    }

    fn toggle(value: DataPoint, store: &mut PlacedPointStore) -> OverlayOutcome {
        if store.remove_exact(value) {
            tracing::debug!(x = value.x, y = value.y, "placed point removed");
            OverlayOutcome::PointRemoved(value)
        } else {
            store.add(value);
            tracing::debug!(x = value.x, y = value.y, "placed point added");
            OverlayOutcome::PointAdded(value)
        }
    }
}
