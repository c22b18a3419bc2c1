use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Which axis a value or error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    X,
    Y,
}

impl std::fmt::Display for AxisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Numeric range, tick interval and quantization interval of one axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    pub min: f64,
    pub max: f64,
    /// Interval between major ticks and axis labels.
    pub step: f64,
    /// Quantization interval for snapping. Falls back to `step` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_step: Option<f64>,
    #[serde(default)]
    pub label: String,
}

impl AxisSpec {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            snap_step: None,
            label: String::new(),
        }
    }

    pub fn with_snap_step(mut self, snap_step: f64) -> Self {
        self.snap_step = Some(snap_step);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Effective quantization interval.
    pub fn snap_step(&self) -> f64 {
        self.snap_step.unwrap_or(self.step)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Strictly inside `(min, max)`.
    pub fn straddles(&self, value: f64) -> bool {
        self.min < value && value < self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Rounds to the nearest multiple of the snap step.
    pub fn snap(&self, value: f64) -> f64 {
        let step = self.snap_step();
        (value / step).round() * step
    }

    pub fn validate(&self, axis: AxisId) -> Result<(), SpecError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SpecError::NonFiniteBound { axis });
        }
        if self.max <= self.min {
            return Err(SpecError::InvalidRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SpecError::InvalidStep {
                axis,
                step: self.step,
            });
        }
        let snap_step = self.snap_step();
        if !(snap_step.is_finite() && snap_step > 0.0) {
            return Err(SpecError::InvalidSnapStep {
                axis,
                snap_step,
            });
        }
        Ok(())
    }
}
