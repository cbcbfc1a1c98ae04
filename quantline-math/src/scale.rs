use thiserror::Error;

/// Reference scale factor: three decimal digits of fixed-point resolution.
pub const DEFAULT_SCALE: i64 = 1000;

// 2^127 exactly; any finite f64 at or above it does not fit an i128.
const I128_MAX_F64: f64 = i128::MAX as f64;
// -2^127 exactly, which is i128::MIN itself.
const I128_MIN_F64: f64 = i128::MIN as f64;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("value {0} is not finite and cannot be scaled")]
    NonFinite(f64),
    #[error("value {value} scaled by {scale} exceeds the i128 range")]
    OutOfRange { value: f64, scale: i64 },
}

/// Convert a real value to a scaled integer: `trunc(value * scale)`.
///
/// Truncation is toward zero for positive and negative values alike
/// (`3.7 → 3700`, `-3.7 → -3700` at scale 1000), matching native integer
/// truncation in the downstream evaluator. This is deliberately NOT floor:
/// floor would give `-3701` for negative inputs and silently diverge from
/// the consumer's arithmetic.
pub fn quantize_trunc(value: f64, scale: i64) -> Result<i128, ScaleError> {
    if !value.is_finite() {
        return Err(ScaleError::NonFinite(value));
    }

    let scaled = value * scale as f64;

    // The product can overflow f64 itself for huge inputs.
    if !scaled.is_finite() {
        return Err(ScaleError::OutOfRange { value, scale });
    }
    if scaled >= I128_MAX_F64 || scaled < I128_MIN_F64 {
        return Err(ScaleError::OutOfRange { value, scale });
    }

    Ok(scaled.trunc() as i128)
}

/// Inverse of [`quantize_trunc`] for human-readable diagnostics only.
/// Never feed the result back into the integer pipeline.
pub fn unscale(value: i128, scale: i64) -> f64 {
    value as f64 / scale as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_toward_zero_both_signs() {
        // 3.7 * 1000 = 3700.0000000000005 in f64; trunc lands on 3700.
        assert_eq!(quantize_trunc(3.7, 1000).unwrap(), 3700);
        assert_eq!(quantize_trunc(-3.7, 1000).unwrap(), -3700);

        // Fractional remainder is dropped, never rounded.
        assert_eq!(quantize_trunc(0.9995, 1000).unwrap(), 999);
        assert_eq!(quantize_trunc(-0.9995, 1000).unwrap(), -999);
    }

    #[test]
    fn test_near_zero() {
        assert_eq!(quantize_trunc(0.0, 1000).unwrap(), 0);
        assert_eq!(quantize_trunc(0.0004, 1000).unwrap(), 0);
        assert_eq!(quantize_trunc(-0.0004, 1000).unwrap(), 0);
        assert_eq!(quantize_trunc(-0.0, 1000).unwrap(), 0);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            quantize_trunc(f64::NAN, 1000),
            Err(ScaleError::NonFinite(_))
        ));
        assert!(matches!(
            quantize_trunc(f64::INFINITY, 1000),
            Err(ScaleError::NonFinite(_))
        ));
        assert!(matches!(
            quantize_trunc(f64::NEG_INFINITY, 1000),
            Err(ScaleError::NonFinite(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range() {
        // Finite product beyond 2^127.
        assert!(matches!(
            quantize_trunc(2.0e35, 1000),
            Err(ScaleError::OutOfRange { .. })
        ));
        assert!(matches!(
            quantize_trunc(-2.0e35, 1000),
            Err(ScaleError::OutOfRange { .. })
        ));
        // Product overflows f64 entirely.
        assert!(matches!(
            quantize_trunc(1.0e308, 1000),
            Err(ScaleError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_large_but_representable() {
        // 2^100 * 2^10 = 2^110, exact in f64 and comfortably inside i128.
        let v = quantize_trunc((2.0f64).powi(100), 1024).unwrap();
        assert_eq!(v, 1i128 << 110);
    }

    #[test]
    fn test_unscale_roundtrip_diagnostic() {
        let q = quantize_trunc(4.004, 1000).unwrap();
        assert_eq!(q, 4004);
        assert!((unscale(q, 1000) - 4.004).abs() < 1e-12);
    }
}
