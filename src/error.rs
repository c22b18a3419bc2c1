use thiserror::Error;

use crate::data_types::AxisId;

/// A malformed `PlotSpec`. This is a configuration bug on the caller's side,
/// so it is reported once at construction and never at runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("{axis} axis bounds must be finite")]
    NonFiniteBound { axis: AxisId },

    #[error("{axis} axis max ({max}) must be greater than min ({min})")]
    InvalidRange { axis: AxisId, min: f64, max: f64 },

    #[error("{axis} axis step must be positive, got {step}")]
    InvalidStep { axis: AxisId, step: f64 },

    #[error("{axis} axis snap step must be positive, got {snap_step}")]
    InvalidSnapStep { axis: AxisId, snap_step: f64 },

    #[error("shade range #{index} is empty: to_x ({to_x}) must be greater than from_x ({from_x})")]
    InvalidShadeRange { index: usize, from_x: f64, to_x: f64 },
}
