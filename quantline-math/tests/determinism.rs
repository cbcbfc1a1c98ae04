use quantline_math::quantize_trunc;

// Determinism tests for scaled-integer conversion.
// These use rational values exactly representable in binary to avoid
// any cross-platform rounding ambiguity.

#[test]
fn test_binary_exact_rationals() {
    // scale 1024 = 2^10, so v * scale is exact for dyadic rationals
    let scale = 1024i64;

    let cases: [(f64, i128); 9] = [
        (0.0, 0),
        (1.0, 1024),
        (-1.0, -1024),
        (0.5, 512),
        (-0.5, -512),
        (0.25, 256),
        (-0.25, -256),
        (127.0, 130048),
        (-128.0, -131072),
    ];

    for (v, expected) in cases {
        assert_eq!(
            quantize_trunc(v, scale).unwrap(),
            expected,
            "scaled encoding mismatch for {}",
            v
        );
    }
}

#[test]
fn test_reference_scale_exact_integers() {
    // Integer inputs scale exactly at any factor.
    let scale = 1000i64;
    for v in [-1_000_000i64, -7, -1, 0, 1, 7, 1_000_000] {
        assert_eq!(quantize_trunc(v as f64, scale).unwrap(), (v as i128) * 1000);
    }
}
