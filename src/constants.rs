//! Scoring constants shared across the reward variants.
//!
//! Every literal the variants embed is named here so configurations can be
//! built, compared, and documented against a single table. Band fractions
//! and the offset-target geometry are opaque tunables with no derivation.

// ============================================================================
// Floors and Tiers
// ============================================================================

/// Minimal reward assigned when the vehicle is not fully on the track
/// surface. Also the floor of the triangular offset-target band.
pub const OFF_TRACK_FLOOR: f32 = 1e-3;

/// Tiered base reward when the vehicle is on track but below the speed
/// threshold.
pub const TIERED_BASE_SLOW: f32 = 0.5;

/// Tiered base reward when the vehicle is on track at or above the speed
/// threshold.
pub const TIERED_BASE_FULL: f32 = 1.0;

/// Factor applied to the tiered base when the heading misalignment exceeds
/// the direction threshold.
pub const DIRECTION_PENALTY_FACTOR: f32 = 0.5;

// ============================================================================
// Default Weights
// ============================================================================

/// Default speed-score weight.
pub const DEFAULT_SPEED_WEIGHT: f32 = 100.0;

/// Default heading-alignment weight.
pub const DEFAULT_HEADING_WEIGHT: f32 = 100.0;

/// Default steering-alignment weight.
pub const DEFAULT_STEERING_WEIGHT: f32 = 100.0;

// ============================================================================
// Speed Band References
// ============================================================================

/// Speed (m/s) that maps to a speed score equal to the full weight.
pub const DEFAULT_MAX_SPEED_REF: f32 = 10.0;

/// Speed (m/s) that maps to a speed score of zero.
pub const DEFAULT_MIN_SPEED_REF: f32 = 5.0;

// ============================================================================
// Curvature Shaping
// ============================================================================

/// Sliding window length over the direction profile.
pub const DEFAULT_CURVATURE_WINDOW: usize = 2;

/// Curvature signal (mean absolute bearing change, degrees) above which the
/// speed score is attenuated.
pub const DEFAULT_SLOW_DOWN_THRESHOLD: f32 = 0.5;

/// Attenuation applied to the speed score past the slow-down threshold.
pub const DEFAULT_CURVATURE_PENALTY_FACTOR: f32 = 0.8;

// ============================================================================
// Centerline Banding
// ============================================================================

/// Band edges as fractions of track width, tightest first.
pub const CENTERLINE_BAND_FRACTIONS: [f32; 5] = [0.01, 0.08, 0.20, 0.30, 0.50];

/// Step reward per band, paired with [`CENTERLINE_BAND_FRACTIONS`].
pub const CENTERLINE_BAND_REWARDS: [f32; 5] = [1.0, 0.5, 0.2, 0.1, 0.01];

/// Number of tightest bands that additionally require all wheels on track.
pub const WHEEL_GATED_BANDS: usize = 2;

/// Absolute steering angle (degrees) above which the banded reward is
/// attenuated.
pub const DEFAULT_STEERING_PENALTY_THRESHOLD: f32 = 15.0;

/// Attenuation applied to the banded reward past the steering threshold.
pub const DEFAULT_STEERING_PENALTY_FACTOR: f32 = 0.8;

// ============================================================================
// Offset-Target Banding and Tiered Combination
// ============================================================================

/// Default fraction for the offset-target line; the offset from the track
/// center is `(0.5 - target_percentage) * track_width`.
pub const DEFAULT_TARGET_PERCENTAGE: f32 = 0.25;

/// Speed (m/s) below which the tiered base drops to [`TIERED_BASE_SLOW`].
pub const DEFAULT_SPEED_THRESHOLD: f32 = 1.0;

/// Heading misalignment (degrees) above which the tiered base is halved.
pub const DEFAULT_DIRECTION_THRESHOLD: f32 = 30.0;

// ============================================================================
// Angle Ranges
// ============================================================================

/// Half turn in degrees; alignment scores normalize against this.
pub const HALF_TURN_DEG: f32 = 180.0;

/// Full turn in degrees.
pub const FULL_TURN_DEG: f32 = 360.0;
