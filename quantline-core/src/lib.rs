//! # quantline-core
//!
//! The quantline pipeline: fit → quantize → integer replay → threshold.
//!
//! This crate defines the sample store ([`SampleSet`]), the external-fitter
//! seam ([`Fitter`]), and the three integer stages that must agree
//! bit-for-bit with a downstream integer-only evaluator:
//!
//! - [`quantize::quantize_model`] / [`quantize::quantize_outputs`]:
//!   real values → scaled `i128` with truncation toward zero
//! - [`replay::replay`]: predicted outputs, residuals, squared residuals
//!   and the accumulated error sum, in pure checked integer arithmetic
//! - [`threshold::derive_threshold`]: acceptance bound with a proportional
//!   buffer, same truncation discipline
//!
//! [`run_pipeline`] wires the stages together. Every stage is a pure
//! function of its inputs; a single run shares no mutable state with any
//! other run.

pub mod config;
pub mod fitter;
pub mod pipeline;
pub mod quantize;
pub mod replay;
pub mod sample;
pub mod threshold;

pub use config::{ConfigError, PipelineConfig};
pub use fitter::{FitError, Fitter, RealModel};
pub use pipeline::{run_pipeline, PipelineError, PipelineRun};
pub use quantize::{quantize_model, quantize_outputs, QuantizeError, QuantizedModel};
pub use replay::{replay, ReplayError, ReplayOutcome, ReplayRecord};
pub use sample::{Sample, SampleError, SampleSet};
pub use threshold::{derive_threshold, ThresholdError};
