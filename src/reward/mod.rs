//! Reward engine: the combiner that merges the sub-scorers into the
//! per-step scalar consumed by the trainer.
//!
//! The engine is constructed once from a validated [`RewardConfig`] and
//! invoked once per simulation step. Each call is pure: a full
//! [`StepSnapshot`] in, one scalar (or a named breakdown) out, no state
//! retained between calls. Sub-scorers run in fixed order (curvature
//! before speed, since speed shaping is conditioned on curvature), then
//! the configured combination policy merges the results.
//!
//! # Example
//!
//! ```ignore
//! use raceline_reward::{presets, RewardEngine};
//!
//! let engine = RewardEngine::new(presets::sprint())?;
//! let reward = engine.score(&snapshot)?;
//! ```

pub mod components;
pub mod presets;

use serde::Serialize;

use crate::config::{CombinePolicy, LateralShaping, RewardConfig};
use crate::constants::{DIRECTION_PENALTY_FACTOR, OFF_TRACK_FLOOR, TIERED_BASE_FULL, TIERED_BASE_SLOW};
use crate::error::{Result, RewardError};
use crate::snapshot::StepSnapshot;
use crate::track::{curvature_signal, heading_difference, segment_bearings};

// ============================================================================
// Reward Components
// ============================================================================

/// Named sub-scores for one scored step, plus the combined total.
///
/// Serialized for telemetry consumers that want the breakdown rather than
/// just the scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RewardComponents {
    /// Speed-band score, curvature-adjusted.
    pub speed: f32,
    /// Heading-alignment score.
    pub heading: f32,
    /// Steering-alignment score.
    pub steering: f32,
    /// Lateral-position score (zero when shaping is disabled).
    pub lateral: f32,
    /// Tiered base (zero under the additive policy).
    pub base: f32,
    /// Combined scalar handed to the trainer.
    pub total: f32,
}

impl RewardComponents {
    /// The off-track short-circuit result: every sub-score zero, total at
    /// the floor.
    fn off_track() -> Self {
        Self {
            total: OFF_TRACK_FLOOR,
            ..Self::default()
        }
    }
}

// ============================================================================
// Reward Engine
// ============================================================================

/// The combiner. Validates the snapshot, runs the sub-scorers in fixed
/// order, and merges them per the configured policy.
///
/// `Clone + Send + Sync`: parallel rollouts may score concurrently with no
/// coordination, since nothing is shared or mutated across calls.
#[derive(Clone, Debug)]
pub struct RewardEngine {
    config: RewardConfig,
}

impl RewardEngine {
    /// Build an engine from a configuration, validating it once up front.
    pub fn new(config: RewardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Score one step, returning the combined scalar.
    pub fn score(&self, snapshot: &StepSnapshot) -> Result<f32> {
        self.score_components(snapshot).map(|c| c.total)
    }

    /// Score one step, returning the named sub-scores with the total.
    pub fn score_components(&self, snapshot: &StepSnapshot) -> Result<RewardComponents> {
        snapshot.validate()?;

        // Terminal branch, not an additive term: under the additive policy
        // an off-track step scores the floor with no further computation.
        if matches!(self.config.combine, CombinePolicy::Additive) && !snapshot.all_wheels_on_track
        {
            return Ok(RewardComponents::off_track());
        }

        let curvature = if self.config.speed.weight == 0.0 {
            None
        } else {
            let bearings = segment_bearings(&snapshot.waypoints);
            curvature_signal(&bearings, self.config.curvature.window, self.config.curvature.wrap)
        };
        let speed = self.config.speed.score(snapshot.speed, curvature);

        let direction_diff = heading_difference(snapshot.track_direction(), snapshot.heading);
        let heading = self.config.alignment.heading_score(direction_diff);
        let steering = self
            .config
            .alignment
            .steering_score(snapshot.steering_angle, direction_diff);

        let lateral = match &self.config.lateral {
            LateralShaping::Disabled => 0.0,
            LateralShaping::CenterlineBands(bands) => bands.score(
                snapshot.distance_from_center,
                snapshot.track_width,
                snapshot.all_wheels_on_track,
                snapshot.steering_angle,
            ),
            LateralShaping::OffsetTarget(target) => target.score(
                snapshot.distance_from_center,
                snapshot.track_width,
                snapshot.is_left_of_center,
            ),
        };

        let base = match self.config.combine {
            CombinePolicy::Additive => 0.0,
            CombinePolicy::Tiered {
                speed_threshold,
                direction_threshold,
            } => {
                let mut base = if !snapshot.all_wheels_on_track {
                    OFF_TRACK_FLOOR
                } else if snapshot.speed < speed_threshold {
                    TIERED_BASE_SLOW
                } else {
                    TIERED_BASE_FULL
                };
                if direction_diff > direction_threshold {
                    base *= DIRECTION_PENALTY_FACTOR;
                }
                base
            }
        };

        let total = base + speed + heading + steering + lateral;
        Ok(RewardComponents {
            speed,
            heading,
            steering,
            lateral,
            base,
            total,
        })
    }

    /// Score a batch of snapshots into a caller-provided buffer.
    ///
    /// Fails fast on the first malformed snapshot or on a buffer size
    /// mismatch; no partial results are reported.
    pub fn score_all(&self, snapshots: &[StepSnapshot], output: &mut [f32]) -> Result<()> {
        if snapshots.len() != output.len() {
            return Err(RewardError::BufferSizeMismatch {
                expected: snapshots.len(),
                actual: output.len(),
            });
        }
        for (snapshot, slot) in snapshots.iter().zip(output.iter_mut()) {
            *slot = self.score(snapshot)?;
        }
        Ok(())
    }
}
