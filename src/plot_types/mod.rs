// Plot layers: pure geometry plus how each paints itself

pub mod area;
pub mod line;
pub mod placed;

pub use area::{AreaShader, ShadeGeometry, ShadeSign, ShadedRegion};
pub use line::LineGeometry;
pub use placed::PlacedGeometry;

use crate::data_types::PlotConfig;
use crate::theme::PlotTheme;
use gpui::*;

/// Anything in a `PlotScene` that knows how to paint itself.
pub trait PlotLayer {
    fn paint(&self, window: &mut Window, theme: &PlotTheme, config: &PlotConfig);
}
