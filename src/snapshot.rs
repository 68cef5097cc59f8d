//! Step snapshot supplied by the external trainer once per simulation step.
//!
//! The snapshot is a full copy of the vehicle and track state relevant to
//! scoring. It is created fresh per invocation and discarded afterwards;
//! the engine holds no state across calls. Field names match the trainer's
//! parameter dictionary on the wire.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RewardError};

// ============================================================================
// Waypoint
// ============================================================================

/// A fixed (x, y) point marking the track centerline, in meters.
///
/// Consecutive waypoints form the track's polyline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// X coordinate (m)
    pub x: f32,
    /// Y coordinate (m)
    pub y: f32,
}

impl Waypoint {
    /// Create a waypoint from coordinates in meters.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Bearing angle of the vector from `self` to `other`, in degrees
    /// (-180, 180], via four-quadrant inverse tangent.
    #[inline]
    pub fn bearing_to(&self, other: &Waypoint) -> f32 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

impl From<(f32, f32)> for Waypoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Step Snapshot
// ============================================================================

/// Immutable snapshot of vehicle and track state for one simulation step.
///
/// The waypoint sequence is treated strictly linearly: looped tracks must
/// supply already-wrapped `closest_waypoints` indices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepSnapshot {
    /// Vehicle position (m).
    pub position: Waypoint,
    /// Vehicle speed (m/s), non-negative.
    pub speed: f32,
    /// Vehicle yaw in degrees. Any finite angle is accepted; the engine
    /// wraps it into (-180, 180] before use.
    pub heading: f32,
    /// Signed steering angle in degrees.
    pub steering_angle: f32,
    /// True when every wheel is on the track surface.
    pub all_wheels_on_track: bool,
    /// True when the vehicle is left of the track centerline.
    pub is_left_of_center: bool,
    /// Distance from the track centerline (m), non-negative.
    pub distance_from_center: f32,
    /// Track width (m), positive.
    pub track_width: f32,
    /// Ordered centerline polyline, at least two points.
    pub waypoints: Vec<Waypoint>,
    /// Indices (prev, next) of the segment the vehicle currently straddles.
    pub closest_waypoints: (usize, usize),
    /// Percentage of track completed. Informational only.
    #[serde(default)]
    pub progress: f32,
    /// Steps completed this episode. Informational only.
    #[serde(default)]
    pub steps: u32,
}

impl StepSnapshot {
    /// Fail-fast structural validation.
    ///
    /// Rejects short waypoint lists, out-of-range closest-waypoint indices,
    /// and non-finite or out-of-domain scalars. A snapshot that passes is
    /// scoreable by every configuration.
    pub fn validate(&self) -> Result<()> {
        let len = self.waypoints.len();
        if len < 2 {
            return Err(RewardError::TooFewWaypoints { len });
        }
        let (prev, next) = self.closest_waypoints;
        if prev >= len {
            return Err(RewardError::WaypointIndexOutOfRange { index: prev, len });
        }
        if next >= len {
            return Err(RewardError::WaypointIndexOutOfRange { index: next, len });
        }
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return Err(RewardError::NonPositiveTrackWidth {
                value: self.track_width,
            });
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(RewardError::NegativeSpeed { value: self.speed });
        }
        if !self.distance_from_center.is_finite() || self.distance_from_center < 0.0 {
            return Err(RewardError::NegativeDistance {
                value: self.distance_from_center,
            });
        }
        if !self.heading.is_finite() {
            return Err(RewardError::NonFiniteAngle {
                field: "heading",
                value: self.heading,
            });
        }
        if !self.steering_angle.is_finite() {
            return Err(RewardError::NonFiniteAngle {
                field: "steering_angle",
                value: self.steering_angle,
            });
        }
        Ok(())
    }

    /// Instantaneous track direction: bearing of the closest segment, from
    /// the previous waypoint to the next, in degrees (-180, 180].
    ///
    /// Indices must have passed [`StepSnapshot::validate`].
    #[inline]
    pub fn track_direction(&self) -> f32 {
        let (prev, next) = self.closest_waypoints;
        self.waypoints[prev].bearing_to(&self.waypoints[next])
    }
}
