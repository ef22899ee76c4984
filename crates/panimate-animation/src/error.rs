use panimate_graphics::{ParseAngleError, ParseColorError};
use thiserror::Error;

/// Invalid animation or gesture configuration, reported when it is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("interpolation needs at least two breakpoints, got {count}")]
    TooFewBreakpoints { count: usize },

    #[error("input range has {inputs} entries but output range has {outputs}")]
    RangeLengthMismatch { inputs: usize, outputs: usize },

    #[error("input range must be strictly increasing: {previous} is followed by {next}")]
    NonMonotonicInput { previous: f32, next: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFiniteValue { field: &'static str, value: f32 },

    #[error("at least one release threshold or a tap slop must be configured")]
    NoThresholds,

    #[error("{side} threshold must be {expected}, got {value}")]
    ThresholdSign {
        side: &'static str,
        expected: &'static str,
        value: f32,
    },

    #[error("invalid spring: {reason}")]
    InvalidSpring { reason: &'static str },

    #[error(transparent)]
    InvalidAngle(#[from] ParseAngleError),

    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),
}
