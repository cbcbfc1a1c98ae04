use crate::config::{ConfigError, PipelineConfig};
use crate::fitter::{FitError, Fitter};
use crate::quantize::{quantize_model, quantize_outputs, QuantizeError, QuantizedModel};
use crate::replay::{replay, ReplayError, ReplayRecord};
use crate::sample::{SampleError, SampleSet};
use crate::threshold::{derive_threshold, ThresholdError};
use thiserror::Error;

/// One error type for the whole run. Every variant is fatal: a partially
/// successful run would export a threshold that disagrees with its own
/// inputs, which is worse than no artifact at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error(transparent)]
    Samples(#[from] SampleError),
    #[error("fit failed: {0}")]
    Fit(#[from] FitError),
    #[error(transparent)]
    Quantize(#[from] QuantizeError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Threshold(#[from] ThresholdError),
}

/// Everything a single run produces, ready for artifact encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    pub model: QuantizedModel,
    /// Inputs, unscaled, in original order.
    pub xs: Vec<i64>,
    /// Outputs, scaled, in original order.
    pub ys: Vec<i128>,
    pub records: Vec<ReplayRecord>,
    pub sse: i128,
    pub threshold: i128,
}

/// Run the full pipeline: fit → quantize → replay → threshold.
///
/// Each stage consumes the previous stage's complete output; nothing is
/// mutated in place and nothing survives the run.
pub fn run_pipeline<F: Fitter>(
    fitter: &F,
    samples: &SampleSet,
    config: &PipelineConfig,
) -> Result<PipelineRun, PipelineError> {
    config.validate()?;

    let real = fitter.fit(samples)?;
    let model = quantize_model(&real, config.scale_factor)?;
    let ys = quantize_outputs(samples, config.scale_factor)?;
    let xs = samples.inputs();

    let outcome = replay(&model, &xs, &ys)?;
    let threshold = derive_threshold(outcome.sse, config.buffer_num, config.buffer_den)?;

    Ok(PipelineRun {
        model,
        xs,
        ys,
        records: outcome.records,
        sse: outcome.sse,
        threshold,
    })
}
