//! Universally-quantified invariants, checked with proptest.

use proptest::prelude::*;

use super::straight_snapshot;
use crate::config::SpeedShaping;
use crate::reward::{presets, RewardEngine};
use crate::track::{heading_difference, wrap_degrees};

proptest! {
    /// Off-track steps under the additive policy score exactly the floor,
    /// regardless of every other field.
    #[test]
    fn off_track_always_scores_the_floor(
        speed in 0.0f32..12.0,
        heading in -540.0f32..540.0,
        steering in -30.0f32..30.0,
        distance in 0.0f32..3.0,
        is_left in any::<bool>(),
    ) {
        let engine = RewardEngine::new(presets::sprint()).unwrap();
        let mut snap = straight_snapshot();
        snap.speed = speed;
        snap.heading = heading;
        snap.steering_angle = steering;
        snap.distance_from_center = distance;
        snap.is_left_of_center = is_left;
        snap.all_wheels_on_track = false;
        prop_assert_eq!(engine.score(&snap).unwrap(), 1e-3);
    }

    /// The direction difference is invariant under full-turn heading
    /// offsets.
    #[test]
    fn heading_difference_ignores_full_turns(
        track_direction in -180.0f32..180.0,
        heading in -180.0f32..180.0,
        turns in -3i32..=3,
    ) {
        let offset = heading + 360.0 * turns as f32;
        let base = heading_difference(track_direction, heading);
        let shifted = heading_difference(track_direction, offset);
        prop_assert!((base - shifted).abs() < 1e-2, "{} vs {}", base, shifted);
    }

    /// Speed shaping is monotonically non-decreasing in speed when the
    /// slow-down branch is not triggered.
    #[test]
    fn speed_score_is_monotone_without_penalty(
        lower in 0.0f32..12.0,
        delta in 0.0f32..5.0,
    ) {
        let shaping = SpeedShaping::default();
        let slow = shaping.score(lower, Some(0.0));
        let fast = shaping.score(lower + delta, Some(0.0));
        prop_assert!(fast >= slow - 1e-4, "{} -> {}", slow, fast);
    }

    /// Wrapped angles land in (-180, 180].
    #[test]
    fn wrap_degrees_stays_in_half_open_range(angle in -10_000.0f32..10_000.0) {
        let wrapped = wrap_degrees(angle);
        prop_assert!(wrapped > -180.0 - 1e-3 && wrapped <= 180.0 + 1e-3, "{}", wrapped);
    }

    /// The circular distance is bounded to [0, 180].
    #[test]
    fn heading_difference_is_bounded(
        track_direction in -180.0f32..180.0,
        heading in -10_000.0f32..10_000.0,
    ) {
        let diff = heading_difference(track_direction, heading);
        prop_assert!((0.0..=180.0 + 1e-3).contains(&diff), "{}", diff);
    }

    /// Centerline banding always lands on a band value or the floor, with
    /// at most one steering attenuation applied.
    #[test]
    fn centerline_score_is_a_known_step(
        distance in 0.0f32..4.0,
        steering in -30.0f32..30.0,
    ) {
        let engine = RewardEngine::new(presets::centerline()).unwrap();
        let mut snap = straight_snapshot();
        snap.distance_from_center = distance;
        snap.steering_angle = steering;
        let total = engine.score(&snap).unwrap();

        let steps = [1.0f32, 0.5, 0.2, 0.1, 0.01, 1e-3];
        let hit = steps.iter().any(|&s| {
            (total - s).abs() < 1e-6 || (total - s * 0.8).abs() < 1e-6
        });
        prop_assert!(hit, "unexpected banded score {}", total);
    }
}
