//! # quantline
//!
//! Turns a real-valued linear fit into an exact, reproducible set of
//! integer inputs for a downstream fixed-point evaluator. One pipeline,
//! one model shape:
//!
//! ```text
//! samples → fit → quantize → integer replay → threshold → artifact
//! ```
//!
//! The producer's integer arithmetic and the consumer's must agree
//! bit-for-bit; see the member crates for the individual stages. This
//! crate just re-exports the public surface.
//!
//! ```
//! use quantline::{run_pipeline, Artifact, LeastSquaresFitter, PipelineConfig, SampleSet};
//!
//! let samples = SampleSet::from_columns(&[1, 2, 3], &[9.2, 12.8, 17.1]).unwrap();
//! let run = run_pipeline(&LeastSquaresFitter, &samples, &PipelineConfig::default()).unwrap();
//! let json = Artifact::from_run(&run).to_json().unwrap();
//! assert!(json.contains("\"threshold\""));
//! ```

pub use quantline_artifact::{Artifact, ArtifactError, DataCommitment, DecodedArtifact};
pub use quantline_core::{
    derive_threshold, quantize_model, quantize_outputs, replay, run_pipeline, ConfigError,
    FitError, Fitter, PipelineConfig, PipelineError, PipelineRun, QuantizeError, QuantizedModel,
    RealModel, ReplayError, ReplayOutcome, ReplayRecord, Sample, SampleError, SampleSet,
    ThresholdError,
};
pub use quantline_fit::LeastSquaresFitter;
pub use quantline_math::{quantize_trunc, unscale, ScaleError, DEFAULT_SCALE};
