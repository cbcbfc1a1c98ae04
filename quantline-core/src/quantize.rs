use crate::fitter::RealModel;
use crate::sample::SampleSet;
use quantline_math::{quantize_trunc, ScaleError};
use thiserror::Error;

/// Affine model with both parameters scaled by the configured factor.
///
/// `slope` and `intercept` are `trunc(real * scale)`; the downstream
/// evaluator receives exactly these integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizedModel {
    pub slope: i128,
    pub intercept: i128,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantizeError {
    #[error("fitted model is not finite (slope {slope}, intercept {intercept})")]
    InvalidModel { slope: f64, intercept: f64 },
    #[error("scaled model {field} overflows the integer range")]
    ModelOverflow { field: &'static str },
    #[error("sample {index}: measured output {value} is not finite")]
    NonFiniteSample { index: usize, value: f64 },
    #[error("sample {index}: scaled output overflows the integer range")]
    SampleOverflow { index: usize },
}

/// Scale a real model into integer parameters, truncating toward zero.
///
/// Non-finite parameters are rejected before any scaling happens.
pub fn quantize_model(model: &RealModel, scale: i64) -> Result<QuantizedModel, QuantizeError> {
    if !model.slope.is_finite() || !model.intercept.is_finite() {
        return Err(QuantizeError::InvalidModel {
            slope: model.slope,
            intercept: model.intercept,
        });
    }

    let slope = quantize_trunc(model.slope, scale)
        .map_err(|_| QuantizeError::ModelOverflow { field: "slope" })?;
    let intercept = quantize_trunc(model.intercept, scale)
        .map_err(|_| QuantizeError::ModelOverflow { field: "intercept" })?;

    Ok(QuantizedModel { slope, intercept })
}

/// Scale the measured outputs of a sample set. Inputs pass through
/// untouched; they are already integral and dimensionless, and scaling them
/// too would break the unit alignment the replay stage depends on.
pub fn quantize_outputs(samples: &SampleSet, scale: i64) -> Result<Vec<i128>, QuantizeError> {
    let mut out = Vec::with_capacity(samples.len());
    for (index, sample) in samples.iter().enumerate() {
        let y = quantize_trunc(sample.y, scale).map_err(|err| match err {
            ScaleError::NonFinite(value) => QuantizeError::NonFiniteSample { index, value },
            ScaleError::OutOfRange { .. } => QuantizeError::SampleOverflow { index },
        })?;
        out.push(y);
    }
    Ok(out)
}
