use thiserror::Error;

/// One paired observation: an integral input and a real measured output.
///
/// Inputs are signed; the reference scenario only uses small positive
/// values but nothing here assumes positivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: i64,
    pub y: f64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("sample columns differ in length: {xs} inputs vs {ys} outputs")]
    LengthMismatch { xs: usize, ys: usize },
}

/// Ordered sequence of samples.
///
/// Order carries no mathematical weight (the error sum is commutative) but
/// defines the accumulation and logging order, which must stay reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, f64)>) -> Self {
        Self {
            samples: pairs.into_iter().map(|(x, y)| Sample { x, y }).collect(),
        }
    }

    /// Build from separate input/output columns.
    ///
    /// Lengths are checked here, before any arithmetic stage runs.
    pub fn from_columns(xs: &[i64], ys: &[f64]) -> Result<Self, SampleError> {
        if xs.len() != ys.len() {
            return Err(SampleError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(Self {
            samples: xs
                .iter()
                .zip(ys.iter())
                .map(|(&x, &y)| Sample { x, y })
                .collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// The input column, in sample order.
    pub fn inputs(&self) -> Vec<i64> {
        self.samples.iter().map(|s| s.x).collect()
    }
}
