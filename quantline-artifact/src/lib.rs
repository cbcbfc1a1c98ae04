//! # quantline-artifact
//!
//! The hand-off record for the downstream integer evaluator.
//!
//! Every numeric field is a canonical base-10 decimal string, never a
//! native JSON number: the consumer may operate over integer domains wider
//! than anything a JSON number round-trips safely (large fixed-point or
//! field elements), so string encoding is a hard compatibility contract,
//! not a style choice. This crate performs no arithmetic, only lossless
//! rendering, stable field naming, scoped file I/O, and the consumer-side
//! [`DataCommitment`] over the decoded columns.

pub mod commitment;

pub use commitment::DataCommitment;

use quantline_core::PipelineRun;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("artifact serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("artifact I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("artifact field does not decode as a decimal integer: {0}")]
    Decode(#[from] ParseIntError),
}

/// The exported record. Field names (`x`, `y`, `m`, `c`, `threshold`) and
/// per-element decimal-string encoding are the compatibility contract with
/// the evaluator; field order is fixed by this struct so repeated encodes
/// of the same run are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Inputs, unscaled, in sample order.
    pub x: Vec<String>,
    /// Outputs, scaled, in sample order.
    pub y: Vec<String>,
    /// Scaled slope.
    pub m: String,
    /// Scaled intercept.
    pub c: String,
    /// Acceptance bound.
    pub threshold: String,
}

/// Integer values recovered from an [`Artifact`], for consumer-side checks
/// and round-trip tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedArtifact {
    pub x: Vec<i64>,
    pub y: Vec<i128>,
    pub m: i128,
    pub c: i128,
    pub threshold: i128,
}

impl Artifact {
    /// Render a pipeline run. `to_string` on Rust integers is already the
    /// canonical form: no leading zeros, a single leading `-` for
    /// negatives, no separators.
    pub fn from_run(run: &PipelineRun) -> Self {
        Self {
            x: run.xs.iter().map(|v| v.to_string()).collect(),
            y: run.ys.iter().map(|v| v.to_string()).collect(),
            m: run.model.slope.to_string(),
            c: run.model.intercept.to_string(),
            threshold: run.threshold.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, ArtifactError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse every field back to the integer that produced it.
    pub fn decode(&self) -> Result<DecodedArtifact, ArtifactError> {
        Ok(DecodedArtifact {
            x: self
                .x
                .iter()
                .map(|s| s.parse::<i64>())
                .collect::<Result<_, _>>()?,
            y: self
                .y
                .iter()
                .map(|s| s.parse::<i128>())
                .collect::<Result<_, _>>()?,
            m: self.m.parse()?,
            c: self.c.parse()?,
            threshold: self.threshold.parse()?,
        })
    }

    /// Write the JSON encoding to `path`. The handle is scoped to this
    /// call and released on every path, success or failure.
    pub fn write_to(&self, path: &Path) -> Result<(), ArtifactError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantline_core::{QuantizedModel, ReplayRecord};

    fn sample_run() -> PipelineRun {
        PipelineRun {
            model: QuantizedModel {
                slope: 3988,
                intercept: -5190,
            },
            xs: vec![-1, 0, 10],
            ys: vec![-9200, 0, 45300],
            records: vec![
                ReplayRecord {
                    predicted: -9178,
                    residual: -22,
                    squared: 484,
                },
                ReplayRecord {
                    predicted: -5190,
                    residual: 5190,
                    squared: 26936100,
                },
                ReplayRecord {
                    predicted: 34690,
                    residual: 10610,
                    squared: 112572100,
                },
            ],
            sse: 139508684,
            threshold: 146484118,
        }
    }

    #[test]
    fn test_canonical_rendering() {
        let artifact = Artifact::from_run(&sample_run());
        assert_eq!(artifact.x, vec!["-1", "0", "10"]);
        assert_eq!(artifact.y, vec!["-9200", "0", "45300"]);
        assert_eq!(artifact.m, "3988");
        assert_eq!(artifact.c, "-5190");
        assert_eq!(artifact.threshold, "146484118");
    }

    #[test]
    fn test_json_field_names_are_the_contract() {
        let artifact = Artifact::from_run(&sample_run());
        let json = artifact.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        for field in ["x", "y", "m", "c", "threshold"] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        // Strings, not JSON numbers.
        assert!(value["m"].is_string());
        assert!(value["y"][0].is_string());
    }

    #[test]
    fn test_round_trip_including_negatives_and_zero() {
        let run = sample_run();
        let artifact = Artifact::from_run(&run);
        let decoded = artifact.decode().unwrap();
        assert_eq!(decoded.x, run.xs);
        assert_eq!(decoded.y, run.ys);
        assert_eq!(decoded.m, run.model.slope);
        assert_eq!(decoded.c, run.model.intercept);
        assert_eq!(decoded.threshold, run.threshold);
    }

    #[test]
    fn test_json_round_trip() {
        let artifact = Artifact::from_run(&sample_run());
        let json = artifact.to_json().unwrap();
        let back = Artifact::from_json(&json).unwrap();
        assert_eq!(artifact, back);
    }

    #[test]
    fn test_repeated_encoding_is_byte_identical() {
        let artifact = Artifact::from_run(&sample_run());
        let a = artifact.to_json().unwrap();
        let b = artifact.to_json().unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_write_to_disk() {
        let artifact = Artifact::from_run(&sample_run());
        let tmp = tempfile::NamedTempFile::new().unwrap();
        artifact.write_to(tmp.path()).unwrap();
        let contents = std::fs::read_to_string(tmp.path()).unwrap();
        assert_eq!(Artifact::from_json(&contents).unwrap(), artifact);
    }

    #[test]
    fn test_corrupt_field_fails_decode() {
        let mut artifact = Artifact::from_run(&sample_run());
        artifact.m = "not-a-number".to_string();
        assert!(matches!(artifact.decode(), Err(ArtifactError::Decode(_))));
    }
}
