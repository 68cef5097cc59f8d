//! Comprehensive test suite for the reward scoring engine.
//!
//! Organized by concern:
//! - `curvature_tests` - direction profile and windowed curvature signal
//! - `reward_tests` - individual sub-scorer behavior
//! - `scoring_tests` - end-to-end engine scenarios and wire format
//! - `edge_case_tests` - malformed input and boundary policies
//! - `property_tests` - universally-quantified invariants

mod property_tests;

use crate::snapshot::{StepSnapshot, Waypoint};

/// A straight six-waypoint track along the x-axis with the vehicle on the
/// first segment, centered, aligned, at the zero-score reference speed.
pub fn straight_snapshot() -> StepSnapshot {
    StepSnapshot {
        position: Waypoint::new(0.5, 0.0),
        speed: 5.0,
        heading: 0.0,
        steering_angle: 0.0,
        all_wheels_on_track: true,
        is_left_of_center: true,
        distance_from_center: 0.0,
        track_width: 4.0,
        waypoints: (0..6).map(|i| Waypoint::new(i as f32, 0.0)).collect(),
        closest_waypoints: (0, 1),
        progress: 0.0,
        steps: 0,
    }
}

/// A square-wave track whose bearings change by 90° per segment, enough to
/// exceed any slow-down threshold.
pub fn sharp_snapshot() -> StepSnapshot {
    let mut snap = straight_snapshot();
    snap.waypoints = vec![
        Waypoint::new(0.0, 0.0),
        Waypoint::new(1.0, 0.0),
        Waypoint::new(1.0, 1.0),
        Waypoint::new(0.0, 1.0),
        Waypoint::new(0.0, 2.0),
        Waypoint::new(1.0, 2.0),
    ];
    snap
}
