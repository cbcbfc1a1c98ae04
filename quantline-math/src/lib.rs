//! # quantline-math
//!
//! Fixed-point scaling primitives for the quantline pipeline.
//!
//! This crate provides [`quantize_trunc`], conversion of an `f64` into a
//! scaled `i128` with truncation toward zero, plus the inverse [`unscale`]
//! for diagnostics. Every conversion rejects non-finite input and range
//! excess explicitly; nothing wraps, nothing saturates. A downstream
//! integer-only evaluator replays these values bit-for-bit, so a silently
//! clamped result would be a correctness bug rather than a precision loss.
//!
//! **Zero external dependencies** (besides `thiserror` for error types): auditable in isolation.

pub mod scale;

pub use scale::{quantize_trunc, unscale, ScaleError, DEFAULT_SCALE};
