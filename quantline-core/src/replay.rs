use crate::quantize::QuantizedModel;
use thiserror::Error;

/// Per-sample result of the integer replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayRecord {
    /// `slope * x + intercept`, already in scaled units: the pre-scaled
    /// parameters put the product in the same units as the scaled outputs,
    /// so it is never re-scaled here.
    pub predicted: i128,
    /// `measured - predicted`.
    pub residual: i128,
    /// `residual * residual`; non-negative by construction.
    pub squared: i128,
}

/// All replay records plus the accumulated error sum, in sample order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub records: Vec<ReplayRecord>,
    /// Exact sum of every `squared` value.
    pub sse: i128,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("replay columns differ in length: {xs} inputs vs {ys} outputs")]
    LengthMismatch { xs: usize, ys: usize },
    #[error("integer overflow computing {stage} at sample {index}")]
    Overflow { stage: &'static str, index: usize },
}

/// Recompute predicted outputs, residuals and the error sum exactly as the
/// downstream integer evaluator will: integer multiply, add and subtract
/// only, every step checked.
///
/// No floating point touches this function. The evaluator that later checks
/// the exported threshold must reach the identical sum with the identical
/// arithmetic, so any float contamination or silent wrap here would
/// invalidate the artifact without a visible symptom. Overflow aborts the
/// whole run; there is no partial mode.
///
/// Mismatched column lengths are rejected before any arithmetic runs;
/// truncating the longer column would quietly drop samples from the sum.
pub fn replay(
    model: &QuantizedModel,
    xs: &[i64],
    ys: &[i128],
) -> Result<ReplayOutcome, ReplayError> {
    if xs.len() != ys.len() {
        return Err(ReplayError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let mut records = Vec::with_capacity(xs.len());
    let mut sse: i128 = 0;

    for (index, (&x, &y)) in xs.iter().zip(ys.iter()).enumerate() {
        let predicted = model
            .slope
            .checked_mul(i128::from(x))
            .and_then(|p| p.checked_add(model.intercept))
            .ok_or(ReplayError::Overflow {
                stage: "predicted output",
                index,
            })?;

        let residual = y.checked_sub(predicted).ok_or(ReplayError::Overflow {
            stage: "residual",
            index,
        })?;

        let squared = residual
            .checked_mul(residual)
            .ok_or(ReplayError::Overflow {
                stage: "squared residual",
                index,
            })?;

        sse = sse.checked_add(squared).ok_or(ReplayError::Overflow {
            stage: "error accumulation",
            index,
        })?;

        records.push(ReplayRecord {
            predicted,
            residual,
            squared,
        });
    }

    Ok(ReplayOutcome { records, sse })
}
