//! gpui_plot_quiz: interactive 2D plots for GPUI with grid snapping, signed
//! area shading and point placement.

pub mod axis_renderer;
pub mod data_types;
pub mod error;
pub mod gutter_manager;
pub mod overlay;
pub mod placed_points;
pub mod plot;
pub mod plot_types;
pub mod plot_view;
pub mod rendering;
pub mod theme;
pub mod transform;
pub mod utils;

pub use data_types::{AxisId, AxisSpec, DataPoint, LineSpec, PlotConfig, PlotMode, PlotSpec, ShadeRange};
pub use error::SpecError;
pub use overlay::{InteractionOverlay, OverlayOutcome, PointerInput, TouchPhase};
pub use placed_points::PlacedPointStore;
pub use plot::{Plot, PlotObservers, PlotScene};
pub use plot_types::{AreaShader, ShadeSign, ShadedRegion};
pub use plot_view::{ClearPoints, PlotView, UndoPoint};
pub use theme::PlotTheme;
pub use transform::CoordinateMapper;
