//! Track centerline geometry: segment bearings, circular angle math, and
//! the windowed curvature signal.
//!
//! The curvature signal is a proxy for upcoming turn sharpness: the mean,
//! over all sliding windows across the direction profile, of the average
//! absolute successive bearing change inside each window. A degenerate
//! profile (shorter than one window plus its successor) yields no signal
//! rather than a fault; callers treat that as a straight track.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{FULL_TURN_DEG, HALF_TURN_DEG};
use crate::snapshot::Waypoint;

// ============================================================================
// Angle Helpers
// ============================================================================

/// Wrap an angle in degrees into (-180, 180].
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let r = angle.rem_euclid(FULL_TURN_DEG);
    if r > HALF_TURN_DEG {
        r - FULL_TURN_DEG
    } else {
        r
    }
}

/// True circular distance between the track direction and a heading, in
/// degrees, bounded to [0, 180].
///
/// Invariant under `heading -> heading + 360k` for any integer `k`.
#[inline]
pub fn heading_difference(track_direction: f32, heading: f32) -> f32 {
    let mut diff = (track_direction - wrap_degrees(heading)).abs();
    if diff > HALF_TURN_DEG {
        diff = FULL_TURN_DEG - diff;
    }
    diff
}

// ============================================================================
// Direction Profile
// ============================================================================

/// Per-segment bearing angles for the centerline polyline, one per adjacent
/// waypoint pair, each in degrees (-180, 180].
///
/// Length is `waypoints.len() - 1`; empty when fewer than two waypoints.
pub fn segment_bearings(waypoints: &[Waypoint]) -> Vec<f32> {
    waypoints
        .windows(2)
        .map(|pair| pair[0].bearing_to(&pair[1]))
        .collect()
}

// ============================================================================
// Curvature Signal
// ============================================================================

/// Successive-difference policy at the ±180° bearing seam.
///
/// `Raw` takes bearing differences as-is, so a seam crossing (179° to
/// -179°) reads as a 358° jump; `Circular` folds every difference into
/// [0, 180]. The two policies diverge only near the seam, where `Raw`
/// over-reports sharpness and triggers the slow-down earlier. Both are
/// kept as independent, selectable behaviors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleWrap {
    /// Unwrapped successive differences.
    #[default]
    Raw,
    /// Fold each difference to true circular distance.
    Circular,
}

/// Windowed curvature signal over a direction profile.
///
/// For every start index `i` in `0..profile_len - window`, averages the
/// absolute successive differences inside the window `[i, i + window)`,
/// then averages across windows. Returns `None` when
/// `bearings.len() <= window`: there is no complete window to aggregate,
/// and the caller must treat the track as straight, not as an error.
///
/// `window` must be at least 2 (enforced at configuration time).
pub fn curvature_signal(bearings: &[f32], window: usize, wrap: AngleWrap) -> Option<f32> {
    debug_assert!(window >= 2, "curvature window below 2");
    if bearings.len() <= window {
        debug!(
            "direction profile ({} entries) no longer than curvature window ({}); no signal",
            bearings.len(),
            window
        );
        return None;
    }

    let spans = bearings.len() - window;
    let per_window = 1.0 / (window - 1) as f32;
    let mut acc = 0.0f32;
    for i in 0..spans {
        let mut sum = 0.0f32;
        for j in 1..window {
            let mut d = (bearings[i + j] - bearings[i + j - 1]).abs();
            if wrap == AngleWrap::Circular && d > HALF_TURN_DEG {
                d = FULL_TURN_DEG - d;
            }
            sum += d;
        }
        acc += sum * per_window;
    }
    Some(acc / spans as f32)
}
