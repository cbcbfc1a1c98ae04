use crate::sample::SampleSet;
use thiserror::Error;

/// Real-valued affine model, straight from the fitter.
///
/// Never persisted; consumed immediately by the quantization stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealModel {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    #[error("cannot fit a model to an empty sample set")]
    EmptySampleSet,
}

/// External-collaborator seam for the regression solver.
///
/// Any deterministic implementation with ordinary-least-squares semantics
/// qualifies; the pipeline only relies on it returning two real numbers
/// (finiteness is enforced downstream by the quantization stage).
pub trait Fitter {
    fn fit(&self, samples: &SampleSet) -> Result<RealModel, FitError>;
}
