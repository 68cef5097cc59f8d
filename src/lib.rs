//! Track-following reward scoring engine for reinforcement-learning
//! trainers.
//!
//! Scores a single simulation step of a vehicle following a track
//! centerline, producing one scalar per step. The engine is pure and
//! stateless across calls: each invocation receives a full
//! [`StepSnapshot`] of the vehicle and track state and returns either the
//! scalar or a descriptive error. Nothing is cached, persisted, or shared
//! between calls, so parallel rollouts may score concurrently without
//! coordination.
//!
//! # Architecture
//!
//! Four leaf sub-scorers feed a combiner, in fixed order:
//!
//! - **Curvature estimation** ([`track`]): per-segment bearings over the
//!   waypoint polyline, aggregated through a sliding window into a single
//!   turn-sharpness signal.
//! - **Speed shaping**: a normalized speed-band score, attenuated when
//!   the curvature signal says a turn is coming.
//! - **Heading/steering alignment**: circular-distance scoring of the
//!   vehicle yaw and steering input against the local track direction.
//! - **Lateral shaping**: step-function bands around the centerline, or a
//!   triangular band around an offset target line.
//! - **Combiner** ([`RewardEngine`]): additive merge with an off-track
//!   short-circuit, or a tiered-base merge that folds the off-track floor
//!   into the base.
//!
//! All weights and thresholds live in [`RewardConfig`]; the four scoring
//! variants are provided as [`presets`].
//!
//! # Example
//!
//! ```ignore
//! use raceline_reward::{presets, RewardEngine, StepSnapshot};
//!
//! let engine = RewardEngine::new(presets::sprint())?;
//!
//! // One call per simulation step; the trainer supplies the snapshot.
//! let snapshot: StepSnapshot = serde_json::from_str(step_json)?;
//! let reward = engine.score(&snapshot)?;
//!
//! // Or keep the breakdown for telemetry.
//! let components = engine.score_components(&snapshot)?;
//! println!("speed {} heading {}", components.speed, components.heading);
//! ```

// Core modules
pub mod config;
pub mod constants;
pub mod error;
pub mod snapshot;
pub mod track;

// Scoring
pub mod reward;

// Comprehensive test suite
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use config::{
    CenterlineBandConfig, CombinePolicy, CurvatureConfig, HeadingAlignment, LateralShaping,
    OffsetTargetConfig, RewardConfig, SpeedShaping,
};
pub use error::{Result, RewardError};
pub use reward::{presets, RewardComponents, RewardEngine};
pub use snapshot::{StepSnapshot, Waypoint};
pub use track::{
    curvature_signal, heading_difference, segment_bearings, wrap_degrees, AngleWrap,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
