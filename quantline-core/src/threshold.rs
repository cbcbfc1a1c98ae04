use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("buffer denominator must be positive, got {0}")]
    InvalidDenominator(i64),
    #[error("integer overflow applying buffer {num}/{den} to error sum {sse}")]
    Overflow { sse: i128, num: i64, den: i64 },
}

/// Acceptance bound: `sse + trunc(sse * num / den)`.
///
/// Division of `i128` truncates toward zero, the same convention as the
/// quantization stage, so the consumer can reproduce the bound with plain
/// integer arithmetic. The multiply is checked; a wrapped buffer would be
/// as bad as a wrapped error sum.
pub fn derive_threshold(sse: i128, num: i64, den: i64) -> Result<i128, ThresholdError> {
    if den <= 0 {
        return Err(ThresholdError::InvalidDenominator(den));
    }

    let buffer = sse
        .checked_mul(i128::from(num))
        .map(|scaled| scaled / i128::from(den))
        .ok_or(ThresholdError::Overflow { sse, num, den })?;

    sse.checked_add(buffer)
        .ok_or(ThresholdError::Overflow { sse, num, den })
}
