//! Preset configurations for the four scoring variants.
//!
//! The variants are one algorithm under different constants and policy
//! switches; each preset returns the corresponding [`RewardConfig`] value.

use crate::config::{
    CenterlineBandConfig, CombinePolicy, CurvatureConfig, HeadingAlignment, LateralShaping,
    OffsetTargetConfig, RewardConfig, SpeedShaping,
};
use crate::constants::{DEFAULT_DIRECTION_THRESHOLD, DEFAULT_SPEED_THRESHOLD};

/// Speed-focused variant: additive combination, no lateral term.
///
/// # Constants
/// - Weights: speed 100, heading 100, steering 100
/// - Speed references: 5..10 m/s
/// - Curvature: window 2, slow-down threshold 0.5, attenuation 0.8
///
/// Off-track short-circuits to the floor.
pub fn sprint() -> RewardConfig {
    RewardConfig::new()
        .with_curvature(CurvatureConfig::new().with_window(2))
        .with_speed(
            SpeedShaping::new()
                .with_weight(100.0)
                .with_speed_refs(5.0, 10.0)
                .with_slow_down_threshold(0.5)
                .with_curvature_penalty(0.8),
        )
        .with_alignment(
            HeadingAlignment::new()
                .with_heading_weight(100.0)
                .with_steering_weight(100.0),
        )
        .with_lateral(LateralShaping::Disabled)
        .with_combine(CombinePolicy::Additive)
}

/// Tangent-following variant: additive combination with a longer lookahead
/// and a reduced steering weight.
///
/// # Constants
/// - Weights: speed 100, heading 100, steering 50
/// - Speed references: 5..10 m/s
/// - Curvature: window 3, slow-down threshold 0.5, attenuation 0.5
pub fn tangential() -> RewardConfig {
    RewardConfig::new()
        .with_curvature(CurvatureConfig::new().with_window(3))
        .with_speed(
            SpeedShaping::new()
                .with_weight(100.0)
                .with_speed_refs(5.0, 10.0)
                .with_slow_down_threshold(0.5)
                .with_curvature_penalty(0.5),
        )
        .with_alignment(
            HeadingAlignment::new()
                .with_heading_weight(100.0)
                .with_steering_weight(50.0),
        )
        .with_lateral(LateralShaping::Disabled)
        .with_combine(CombinePolicy::Additive)
}

/// Centerline-holding variant: the reward is the banded lateral score
/// alone, with the steering penalty discouraging zig-zag corrections.
///
/// # Constants
/// - Bands: {1%, 8%, 20%, 30%, 50%} of track width, rewards
///   {1.0, 0.5, 0.2, 0.1, 0.01}
/// - Steering penalty: ×0.8 beyond 15°
/// - Speed/heading/steering weights: 0
pub fn centerline() -> RewardConfig {
    RewardConfig::new()
        .with_speed(SpeedShaping::new().with_weight(0.0))
        .with_alignment(
            HeadingAlignment::new()
                .with_heading_weight(0.0)
                .with_steering_weight(0.0),
        )
        .with_lateral(LateralShaping::CenterlineBands(
            CenterlineBandConfig::default(),
        ))
        .with_combine(CombinePolicy::Additive)
}

/// Offset-line variant: tiered base plus all four sub-scores, with the
/// lateral term peaking at a target line offset from center.
///
/// # Constants
/// - Weights: speed 1.0, heading 1.0, steering 0.5
/// - Base tiers: 1e-3 off-track, 0.5 below 1 m/s, 1.0 otherwise, halved
///   beyond 30° misalignment
/// - Target line: quarter-width offset (`target_percentage` 0.25)
///
/// The only variant without the off-track short-circuit: the floor is
/// folded into the base tier instead.
pub fn offset_line() -> RewardConfig {
    RewardConfig::new()
        .with_curvature(CurvatureConfig::new().with_window(2))
        .with_speed(
            SpeedShaping::new()
                .with_weight(1.0)
                .with_speed_refs(5.0, 10.0),
        )
        .with_alignment(
            HeadingAlignment::new()
                .with_heading_weight(1.0)
                .with_steering_weight(0.5),
        )
        .with_lateral(LateralShaping::OffsetTarget(OffsetTargetConfig::default()))
        .with_combine(CombinePolicy::Tiered {
            speed_threshold: DEFAULT_SPEED_THRESHOLD,
            direction_threshold: DEFAULT_DIRECTION_THRESHOLD,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_validate() {
        for config in [sprint(), tangential(), centerline(), offset_line()] {
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_sprint_constants() {
        let config = sprint();
        assert_eq!(config.curvature.window, 2);
        assert_eq!(config.speed.weight, 100.0);
        assert_eq!(config.speed.curvature_penalty_factor, 0.8);
        assert_eq!(config.alignment.steering_weight, 100.0);
        assert_eq!(config.lateral, LateralShaping::Disabled);
        assert_eq!(config.combine, CombinePolicy::Additive);
    }

    #[test]
    fn test_tangential_constants() {
        let config = tangential();
        assert_eq!(config.curvature.window, 3);
        assert_eq!(config.speed.curvature_penalty_factor, 0.5);
        assert_eq!(config.alignment.steering_weight, 50.0);
    }

    #[test]
    fn test_centerline_disables_alignment_terms() {
        let config = centerline();
        assert_eq!(config.speed.weight, 0.0);
        assert_eq!(config.alignment.heading_weight, 0.0);
        assert!(matches!(
            config.lateral,
            LateralShaping::CenterlineBands(_)
        ));
    }

    #[test]
    fn test_offset_line_is_tiered() {
        let config = offset_line();
        assert!(matches!(config.combine, CombinePolicy::Tiered { .. }));
        assert!(matches!(config.lateral, LateralShaping::OffsetTarget(_)));
    }
}
