//! Configuration for the reward engine.
//!
//! The four scoring variants are the same algorithm under different
//! constants and policy switches, so all of them are expressible as values
//! of [`RewardConfig`]; see [`crate::reward::presets`] for the named
//! variant tables. Configurations are validated once, at engine
//! construction, never per step.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Result, RewardError};
use crate::track::AngleWrap;

// ============================================================================
// Curvature Configuration
// ============================================================================

/// Lookahead curvature estimation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvatureConfig {
    /// Sliding window length over the direction profile. At least 2.
    pub window: usize,
    /// Successive-difference policy at the ±180° seam.
    pub wrap: AngleWrap,
}

impl Default for CurvatureConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_CURVATURE_WINDOW,
            wrap: AngleWrap::Raw,
        }
    }
}

impl CurvatureConfig {
    /// Create the default curvature configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sliding window length.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the seam policy for successive bearing differences.
    pub fn with_wrap(mut self, wrap: AngleWrap) -> Self {
        self.wrap = wrap;
        self
    }
}

// ============================================================================
// Speed Shaping
// ============================================================================

/// Speed shaping parameters.
///
/// The score is linear in speed²:
/// `(speed² - min_speed_ref²) / (max_speed_ref² - min_speed_ref²) * weight`,
/// deliberately unclamped so speeds outside the reference band produce a
/// strong differential signal. When the curvature signal exceeds
/// `slow_down_threshold`, the score is multiplied by
/// `curvature_penalty_factor`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedShaping {
    /// Weight of the speed score in the combined total.
    pub weight: f32,
    /// Speed (m/s) mapping to a score of `weight`.
    pub max_speed_ref: f32,
    /// Speed (m/s) mapping to a score of zero.
    pub min_speed_ref: f32,
    /// Curvature signal above which the penalty factor applies.
    pub slow_down_threshold: f32,
    /// Attenuation applied past the slow-down threshold.
    pub curvature_penalty_factor: f32,
}

impl Default for SpeedShaping {
    fn default() -> Self {
        Self {
            weight: DEFAULT_SPEED_WEIGHT,
            max_speed_ref: DEFAULT_MAX_SPEED_REF,
            min_speed_ref: DEFAULT_MIN_SPEED_REF,
            slow_down_threshold: DEFAULT_SLOW_DOWN_THRESHOLD,
            curvature_penalty_factor: DEFAULT_CURVATURE_PENALTY_FACTOR,
        }
    }
}

impl SpeedShaping {
    /// Create the default speed shaping configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the speed-score weight.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the reference speed band (m/s).
    pub fn with_speed_refs(mut self, min: f32, max: f32) -> Self {
        self.min_speed_ref = min;
        self.max_speed_ref = max;
        self
    }

    /// Set the curvature slow-down threshold.
    pub fn with_slow_down_threshold(mut self, threshold: f32) -> Self {
        self.slow_down_threshold = threshold;
        self
    }

    /// Set the attenuation factor applied past the threshold.
    pub fn with_curvature_penalty(mut self, factor: f32) -> Self {
        self.curvature_penalty_factor = factor;
        self
    }
}

// ============================================================================
// Heading / Steering Alignment
// ============================================================================

/// Heading and steering alignment weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadingAlignment {
    /// Weight of the heading-alignment score.
    pub heading_weight: f32,
    /// Weight of the steering-alignment score.
    pub steering_weight: f32,
}

impl Default for HeadingAlignment {
    fn default() -> Self {
        Self {
            heading_weight: DEFAULT_HEADING_WEIGHT,
            steering_weight: DEFAULT_STEERING_WEIGHT,
        }
    }
}

impl HeadingAlignment {
    /// Create the default alignment configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading weight.
    pub fn with_heading_weight(mut self, weight: f32) -> Self {
        self.heading_weight = weight;
        self
    }

    /// Set the steering weight.
    pub fn with_steering_weight(mut self, weight: f32) -> Self {
        self.steering_weight = weight;
        self
    }
}

// ============================================================================
// Lateral Shaping
// ============================================================================

/// Step-function banding around the track centerline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CenterlineBandConfig {
    /// Band edges as fractions of track width, tightest first,
    /// non-decreasing.
    pub band_fractions: [f32; 5],
    /// Step reward per band.
    pub band_rewards: [f32; 5],
    /// Absolute steering angle (degrees) above which the banded reward is
    /// attenuated.
    pub steering_penalty_threshold: f32,
    /// Attenuation applied past the steering threshold.
    pub steering_penalty_factor: f32,
}

impl Default for CenterlineBandConfig {
    fn default() -> Self {
        Self {
            band_fractions: CENTERLINE_BAND_FRACTIONS,
            band_rewards: CENTERLINE_BAND_REWARDS,
            steering_penalty_threshold: DEFAULT_STEERING_PENALTY_THRESHOLD,
            steering_penalty_factor: DEFAULT_STEERING_PENALTY_FACTOR,
        }
    }
}

/// Triangular band peaking at a line offset from the track center.
///
/// The target offset is `(0.5 - target_percentage) * track_width`, placed
/// on the side selected by `is_left_of_center`. The numeric form is an
/// opaque tunable carried over as-is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OffsetTargetConfig {
    /// Fraction controlling the target line offset from center. In [0, 1].
    pub target_percentage: f32,
}

impl Default for OffsetTargetConfig {
    fn default() -> Self {
        Self {
            target_percentage: DEFAULT_TARGET_PERCENTAGE,
        }
    }
}

/// Lateral-position shaping policy. Exactly one policy is active per
/// configuration; the two banding schemes are never blended in one call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum LateralShaping {
    /// No lateral term.
    #[default]
    Disabled,
    /// Step-function bands around the centerline.
    CenterlineBands(CenterlineBandConfig),
    /// Triangular band peaking at an offset target line.
    OffsetTarget(OffsetTargetConfig),
}

// ============================================================================
// Combination Policy
// ============================================================================

/// Final combination policy for the sub-scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CombinePolicy {
    /// Off-track short-circuits to the floor immediately; otherwise the
    /// sub-scores sum.
    #[default]
    Additive,
    /// A tiered base absorbs the off-track case instead of short-circuiting:
    /// `1e-3` off-track, [`TIERED_BASE_SLOW`] below `speed_threshold`,
    /// [`TIERED_BASE_FULL`] otherwise, halved past `direction_threshold`.
    Tiered {
        /// Speed (m/s) below which the base drops to the slow tier.
        speed_threshold: f32,
        /// Heading misalignment (degrees) above which the base is halved.
        direction_threshold: f32,
    },
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Complete configuration for a [`crate::RewardEngine`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Lookahead curvature estimation.
    pub curvature: CurvatureConfig,
    /// Speed shaping.
    pub speed: SpeedShaping,
    /// Heading/steering alignment.
    pub alignment: HeadingAlignment,
    /// Lateral-position shaping.
    pub lateral: LateralShaping,
    /// Final combination policy.
    pub combine: CombinePolicy,
}

impl RewardConfig {
    /// Create the default configuration (additive combination, no lateral
    /// term, default weights).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the curvature configuration.
    pub fn with_curvature(mut self, curvature: CurvatureConfig) -> Self {
        self.curvature = curvature;
        self
    }

    /// Set the speed shaping configuration.
    pub fn with_speed(mut self, speed: SpeedShaping) -> Self {
        self.speed = speed;
        self
    }

    /// Set the alignment weights.
    pub fn with_alignment(mut self, alignment: HeadingAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the lateral shaping policy.
    pub fn with_lateral(mut self, lateral: LateralShaping) -> Self {
        self.lateral = lateral;
        self
    }

    /// Set the combination policy.
    pub fn with_combine(mut self, combine: CombinePolicy) -> Self {
        self.combine = combine;
        self
    }

    /// Validate the configuration.
    ///
    /// Rejects windows that would make the per-window divisor zero, speed
    /// reference bands with a non-positive denominator, non-monotone band
    /// tables, and out-of-range target percentages.
    pub fn validate(&self) -> Result<()> {
        if self.curvature.window < 2 {
            return Err(RewardError::InvalidConfig {
                param: "curvature.window",
                message: format!("window must be at least 2, got {}", self.curvature.window),
            });
        }
        if !self.speed.max_speed_ref.is_finite()
            || !self.speed.min_speed_ref.is_finite()
            || self.speed.max_speed_ref <= self.speed.min_speed_ref
        {
            return Err(RewardError::InvalidConfig {
                param: "speed.max_speed_ref",
                message: format!(
                    "max_speed_ref ({}) must exceed min_speed_ref ({})",
                    self.speed.max_speed_ref, self.speed.min_speed_ref
                ),
            });
        }
        if self.speed.min_speed_ref < 0.0 {
            return Err(RewardError::InvalidConfig {
                param: "speed.min_speed_ref",
                message: format!("must be non-negative, got {}", self.speed.min_speed_ref),
            });
        }
        if !self.speed.curvature_penalty_factor.is_finite()
            || self.speed.curvature_penalty_factor < 0.0
        {
            return Err(RewardError::InvalidConfig {
                param: "speed.curvature_penalty_factor",
                message: format!(
                    "must be finite and non-negative, got {}",
                    self.speed.curvature_penalty_factor
                ),
            });
        }
        match &self.lateral {
            LateralShaping::Disabled => {}
            LateralShaping::CenterlineBands(bands) => {
                if bands
                    .band_fractions
                    .windows(2)
                    .any(|pair| pair[1] < pair[0])
                {
                    return Err(RewardError::InvalidConfig {
                        param: "lateral.band_fractions",
                        message: "band fractions must be non-decreasing".to_string(),
                    });
                }
            }
            LateralShaping::OffsetTarget(target) => {
                if !(0.0..=1.0).contains(&target.target_percentage) {
                    return Err(RewardError::InvalidConfig {
                        param: "lateral.target_percentage",
                        message: format!(
                            "must lie in [0, 1], got {}",
                            target.target_percentage
                        ),
                    });
                }
            }
        }
        if let CombinePolicy::Tiered {
            speed_threshold,
            direction_threshold,
        } = self.combine
        {
            if !speed_threshold.is_finite() || speed_threshold < 0.0 {
                return Err(RewardError::InvalidConfig {
                    param: "combine.speed_threshold",
                    message: format!("must be finite and non-negative, got {}", speed_threshold),
                });
            }
            if !direction_threshold.is_finite() || direction_threshold < 0.0 {
                return Err(RewardError::InvalidConfig {
                    param: "combine.direction_threshold",
                    message: format!(
                        "must be finite and non-negative, got {}",
                        direction_threshold
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(RewardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_window_below_two() {
        let config = RewardConfig::new().with_curvature(CurvatureConfig::new().with_window(1));
        assert!(matches!(
            config.validate(),
            Err(RewardError::InvalidConfig {
                param: "curvature.window",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_inverted_speed_refs() {
        let config = RewardConfig::new().with_speed(SpeedShaping::new().with_speed_refs(8.0, 3.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_equal_speed_refs() {
        let config = RewardConfig::new().with_speed(SpeedShaping::new().with_speed_refs(5.0, 5.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_decreasing_band_fractions() {
        let mut bands = CenterlineBandConfig::default();
        bands.band_fractions = [0.5, 0.3, 0.2, 0.1, 0.01];
        let config = RewardConfig::new().with_lateral(LateralShaping::CenterlineBands(bands));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_target_percentage_out_of_range() {
        let config = RewardConfig::new().with_lateral(LateralShaping::OffsetTarget(
            OffsetTargetConfig {
                target_percentage: 1.5,
            },
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = RewardConfig::new()
            .with_curvature(CurvatureConfig::new().with_window(3))
            .with_speed(SpeedShaping::new().with_weight(50.0))
            .with_alignment(HeadingAlignment::new().with_steering_weight(25.0));
        assert_eq!(config.curvature.window, 3);
        assert_eq!(config.speed.weight, 50.0);
        assert_eq!(config.alignment.steering_weight, 25.0);
        assert!(config.validate().is_ok());
    }
}
