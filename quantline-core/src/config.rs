use quantline_math::DEFAULT_SCALE;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("scale factor must be positive, got {0}")]
    NonPositiveScale(i64),
    #[error("buffer denominator must be positive, got {0}")]
    NonPositiveDenominator(i64),
    #[error("buffer numerator must be non-negative, got {0}")]
    NegativeNumerator(i64),
}

/// Immutable per-run configuration.
///
/// Passed by reference into the pipeline rather than held in globals, so
/// independent runs with different settings can execute concurrently and
/// be tested in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Fixed-point resolution: real values become `trunc(v * scale_factor)`.
    pub scale_factor: i64,
    /// Buffer fraction numerator (reference: 5).
    pub buffer_num: i64,
    /// Buffer fraction denominator (reference: 100).
    pub buffer_den: i64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE,
            buffer_num: 5,
            buffer_den: 100,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale_factor <= 0 {
            return Err(ConfigError::NonPositiveScale(self.scale_factor));
        }
        if self.buffer_den <= 0 {
            return Err(ConfigError::NonPositiveDenominator(self.buffer_den));
        }
        if self.buffer_num < 0 {
            return Err(ConfigError::NegativeNumerator(self.buffer_num));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PipelineConfig::default();
        assert_eq!(config.scale_factor, 1000);
        assert_eq!(config.buffer_num, 5);
        assert_eq!(config.buffer_den, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = PipelineConfig::default();
        config.scale_factor = 0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveScale(0)));

        let mut config = PipelineConfig::default();
        config.buffer_den = -100;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveDenominator(-100))
        );

        let mut config = PipelineConfig::default();
        config.buffer_num = -5;
        assert_eq!(config.validate(), Err(ConfigError::NegativeNumerator(-5)));
    }
}
