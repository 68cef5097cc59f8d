//! Leaf sub-scorers for the reward engine.
//!
//! Each scorer is a pure function of the step snapshot fields it needs,
//! implemented on its configuration struct. The combiner in
//! [`crate::reward`] wires them together in fixed order.

use crate::config::{CenterlineBandConfig, HeadingAlignment, OffsetTargetConfig, SpeedShaping};
use crate::constants::{HALF_TURN_DEG, OFF_TRACK_FLOOR, WHEEL_GATED_BANDS};

impl SpeedShaping {
    /// Normalized speed-band score, attenuated when the curvature signal
    /// exceeds the slow-down threshold.
    ///
    /// `(speed² - min_ref²) / (max_ref² - min_ref²) * weight`, unclamped:
    /// speeds below `min_speed_ref` score negative, speeds above
    /// `max_speed_ref` score past the weight. An absent curvature signal
    /// counts as a straight track and never triggers the penalty.
    #[inline]
    pub fn score(&self, speed: f32, curvature: Option<f32>) -> f32 {
        let max_sq = self.max_speed_ref * self.max_speed_ref;
        let min_sq = self.min_speed_ref * self.min_speed_ref;
        let raw = (speed * speed - min_sq) / (max_sq - min_sq) * self.weight;
        match curvature {
            Some(signal) if signal > self.slow_down_threshold => {
                raw * self.curvature_penalty_factor
            }
            _ => raw,
        }
    }
}

impl HeadingAlignment {
    /// Heading score from the circular heading/track misalignment.
    ///
    /// `(1 - direction_diff / 180) * heading_weight`; full weight when
    /// aligned, zero when reversed.
    #[inline]
    pub fn heading_score(&self, direction_diff: f32) -> f32 {
        (1.0 - direction_diff / HALF_TURN_DEG) * self.heading_weight
    }

    /// Steering score rewarding steering input whose magnitude matches the
    /// heading misalignment, not steering toward zero misalignment. This
    /// exact comparison is the anti-zigzag heuristic: steering tracks the
    /// error instead of oscillating around it.
    #[inline]
    pub fn steering_score(&self, steering_angle: f32, direction_diff: f32) -> f32 {
        (1.0 - (steering_angle - direction_diff).abs() / HALF_TURN_DEG) * self.steering_weight
    }
}

impl CenterlineBandConfig {
    /// Step-function reward over distance-from-center bands.
    ///
    /// Falls through widening bands to the first match; the two tightest
    /// bands also require all wheels on track. Below every band the
    /// off-track floor applies. The steering penalty multiplies whatever
    /// band value was selected, floor included.
    pub fn score(
        &self,
        distance_from_center: f32,
        track_width: f32,
        all_wheels_on_track: bool,
        steering_angle: f32,
    ) -> f32 {
        let mut reward = OFF_TRACK_FLOOR;
        for (i, (&fraction, &band_reward)) in self
            .band_fractions
            .iter()
            .zip(self.band_rewards.iter())
            .enumerate()
        {
            if i < WHEEL_GATED_BANDS && !all_wheels_on_track {
                continue;
            }
            if distance_from_center <= fraction * track_width {
                reward = band_reward;
                break;
            }
        }
        if steering_angle.abs() > self.steering_penalty_threshold {
            reward *= self.steering_penalty_factor;
        }
        reward
    }
}

impl OffsetTargetConfig {
    /// Triangular band peaking at the offset target line.
    ///
    /// The target sits `(0.5 - target_percentage) * track_width` from the
    /// geometric center, on the positive side when the vehicle is left of
    /// center; the reward falls off linearly with distance from the target
    /// and floors at the off-track minimum.
    #[inline]
    pub fn score(
        &self,
        distance_from_center: f32,
        track_width: f32,
        is_left_of_center: bool,
    ) -> f32 {
        let magnitude = (0.5 - self.target_percentage) * track_width;
        let target = if is_left_of_center {
            magnitude
        } else {
            -magnitude
        };
        let band = 1.0 - (distance_from_center - target).abs() / (0.5 * track_width);
        band.max(OFF_TRACK_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_score_at_references() {
        let shaping = SpeedShaping::default(); // weight 100, refs 5..10
        assert!(shaping.score(5.0, None).abs() < 1e-4);
        assert!((shaping.score(10.0, None) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_speed_score_unclamped() {
        let shaping = SpeedShaping::default();
        assert!(shaping.score(0.0, None) < 0.0);
        assert!(shaping.score(12.0, None) > 100.0);
    }

    #[test]
    fn test_curvature_penalty_strictly_above_threshold() {
        let shaping = SpeedShaping::default(); // threshold 0.5, factor 0.8
        let base = shaping.score(8.0, None);
        assert!((shaping.score(8.0, Some(0.5)) - base).abs() < 1e-4);
        assert!((shaping.score(8.0, Some(0.6)) - base * 0.8).abs() < 1e-3);
    }

    #[test]
    fn test_heading_score_endpoints() {
        let alignment = HeadingAlignment::default(); // weights 100/100
        assert!((alignment.heading_score(0.0) - 100.0).abs() < 1e-4);
        assert!(alignment.heading_score(180.0).abs() < 1e-4);
        assert!((alignment.heading_score(90.0) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_steering_score_tracks_error_magnitude() {
        let alignment = HeadingAlignment::default();
        // Perfect match: steering equals the misalignment.
        assert!((alignment.steering_score(20.0, 20.0) - 100.0).abs() < 1e-4);
        // Counter-steering away from the error is worse than no steering.
        assert!(alignment.steering_score(-20.0, 20.0) < alignment.steering_score(0.0, 20.0));
    }

    #[test]
    fn test_band_fallthrough_when_off_track() {
        let bands = CenterlineBandConfig::default();
        // Inside the tightest band, but off track: the gated bands are
        // skipped and the 20% band matches instead.
        let reward = bands.score(0.02, 4.0, false, 0.0);
        assert!((reward - 0.2).abs() < 1e-6, "reward: {}", reward);
    }

    #[test]
    fn test_band_floor_beyond_half_width() {
        let bands = CenterlineBandConfig::default();
        let reward = bands.score(2.5, 4.0, true, 0.0);
        assert!((reward - 1e-3).abs() < 1e-9, "reward: {}", reward);
    }

    #[test]
    fn test_steering_penalty_applies_to_band_value() {
        let bands = CenterlineBandConfig::default();
        let straight = bands.score(0.02, 4.0, true, 0.0);
        let steered = bands.score(0.02, 4.0, true, 20.0);
        assert!((steered - straight * 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_offset_target_peak_and_floor() {
        let target = OffsetTargetConfig {
            target_percentage: 0.25,
        };
        // Offset = 0.25 * width = 1.0 on the left side.
        let peak = target.score(1.0, 4.0, true);
        assert!((peak - 1.0).abs() < 1e-5, "peak: {}", peak);
        // Far from the target the triangular band floors out.
        let floor = target.score(4.0, 4.0, false);
        assert!((floor - 1e-3).abs() < 1e-9, "floor: {}", floor);
    }
}
