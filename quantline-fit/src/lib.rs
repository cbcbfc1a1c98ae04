//! # quantline-fit
//!
//! Closed-form ordinary least squares, the reference implementation of the
//! [`Fitter`] seam. Deterministic: sums are accumulated in sample order
//! with no data-dependent branching, so the same sample set always yields
//! the same model bits.

use quantline_core::{FitError, Fitter, RealModel, SampleSet};

/// Ordinary least squares over `(x, y)` pairs.
///
/// `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`, `intercept = (Σy − slope·Σx) / n`.
/// A degenerate denominator (all inputs equal) yields slope zero and the
/// mean output as intercept, which keeps the result finite; an empty set
/// is rejected outright.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastSquaresFitter;

impl Fitter for LeastSquaresFitter {
    fn fit(&self, samples: &SampleSet) -> Result<RealModel, FitError> {
        if samples.is_empty() {
            return Err(FitError::EmptySampleSet);
        }

        let n = samples.len() as f64;
        let (sum_x, sum_xx, sum_xy, sum_y) = samples.iter().fold(
            (0.0f64, 0.0f64, 0.0f64, 0.0f64),
            |(sum_x, sum_xx, sum_xy, sum_y), s| {
                let x = s.x as f64;
                (sum_x + x, sum_xx + x * x, sum_xy + x * s.y, sum_y + s.y)
            },
        );

        let denominator = n * sum_xx - sum_x * sum_x;
        let slope = if denominator == 0.0 {
            0.0
        } else {
            (n * sum_xy - sum_x * sum_y) / denominator
        };
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(RealModel { slope, intercept })
    }
}
