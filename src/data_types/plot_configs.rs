use serde::{Deserialize, Serialize};

use super::axis::{AxisId, AxisSpec};
use super::data::{LineSpec, ShadeRange};
use crate::error::SpecError;

/// Interaction mode of a plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotMode {
    /// Inert. No pointer capture.
    #[default]
    View,
    /// Every commit emits the snapped value under the pointer.
    Read,
    /// Commits toggle placed points.
    Plot,
}

impl PlotMode {
    pub fn is_interactive(self) -> bool {
        !matches!(self, Self::View)
    }
}

/// Everything needed to draw one plot. Only `mode` changes after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotSpec {
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    #[serde(default)]
    pub lines: Vec<LineSpec>,
    #[serde(default)]
    pub shade_ranges: Vec<ShadeRange>,
    #[serde(default)]
    pub zero_line_visible: bool,
    #[serde(default)]
    pub mode: PlotMode,
}

impl PlotSpec {
    pub fn new(x_axis: AxisSpec, y_axis: AxisSpec) -> Self {
        Self {
            x_axis,
            y_axis,
            lines: Vec::new(),
            shade_ranges: Vec::new(),
            zero_line_visible: false,
            mode: PlotMode::View,
        }
    }

    pub fn with_line(mut self, line: LineSpec) -> Self {
        self.lines.push(line);
        self
    }

    pub fn with_shade_range(mut self, range: ShadeRange) -> Self {
        self.shade_ranges.push(range);
        self
    }

    pub fn with_zero_line(mut self, visible: bool) -> Self {
        self.zero_line_visible = visible;
        self
    }

    pub fn with_mode(mut self, mode: PlotMode) -> Self {
        self.mode = mode;
        self
    }

    /// The line shade ranges refer to.
    pub fn primary_line(&self) -> Option<&LineSpec> {
        self.lines.first()
    }

    /// Rejects axes with an empty range or a non-positive step, and shade
    /// ranges that are empty or reversed.
    pub fn validate(&self) -> Result<(), SpecError> {
        self.x_axis.validate(AxisId::X)?;
        self.y_axis.validate(AxisId::Y)?;
        for (index, range) in self.shade_ranges.iter().enumerate() {
            if !(range.from_x.is_finite() && range.to_x.is_finite()) || range.to_x <= range.from_x {
                return Err(SpecError::InvalidShadeRange {
                    index,
                    from_x: range.from_x,
                    to_x: range.to_x,
                });
            }
        }
        Ok(())
    }
}
