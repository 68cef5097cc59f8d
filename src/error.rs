//! Error types for the reward scoring engine.

use std::fmt;

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, RewardError>;

/// Errors raised by snapshot validation, configuration, and batch scoring.
///
/// Malformed input always fails fast: returning a fabricated scalar instead
/// would silently corrupt the training signal.
#[derive(Debug, Clone, PartialEq)]
pub enum RewardError {
    /// Fewer than two waypoints; no segment direction exists.
    TooFewWaypoints { len: usize },
    /// A closest-waypoint index does not point into the waypoint list.
    WaypointIndexOutOfRange { index: usize, len: usize },
    /// Track width must be positive and finite.
    NonPositiveTrackWidth { value: f32 },
    /// Speed must be non-negative and finite.
    NegativeSpeed { value: f32 },
    /// Distance from center must be non-negative and finite.
    NegativeDistance { value: f32 },
    /// An angle field is not a finite number.
    NonFiniteAngle { field: &'static str, value: f32 },
    /// Invalid engine configuration (bad window, references, bands).
    InvalidConfig {
        param: &'static str,
        message: String,
    },
    /// Batch output buffer does not match the snapshot count.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for RewardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewWaypoints { len } => {
                write!(f, "waypoint list has {} entries, need at least 2", len)
            }
            Self::WaypointIndexOutOfRange { index, len } => {
                write!(
                    f,
                    "closest-waypoint index {} out of range for {} waypoints",
                    index, len
                )
            }
            Self::NonPositiveTrackWidth { value } => {
                write!(f, "track width must be positive, got {}", value)
            }
            Self::NegativeSpeed { value } => {
                write!(f, "speed must be non-negative, got {}", value)
            }
            Self::NegativeDistance { value } => {
                write!(f, "distance from center must be non-negative, got {}", value)
            }
            Self::NonFiniteAngle { field, value } => {
                write!(f, "{} must be finite, got {}", field, value)
            }
            Self::InvalidConfig { param, message } => {
                write!(f, "invalid configuration for '{}': {}", param, message)
            }
            Self::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "output buffer size mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for RewardError {}
