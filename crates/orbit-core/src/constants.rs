//! Tuned "feel" constants shared by every front-end.
//!
//! These values are part of how the views behave, not incidental detail:
//! changing them changes how heavy a press feels or how far a puck flies.

use std::ops::Range;

// Frame timing
pub const MAX_FRAME_DT: f32 = 0.05; // seconds; caps hitches so the springs stay stable
pub const DEFAULT_SETTLE_THRESHOLD: f32 = 0.5; // native units (px or progress)

// ---------------- Slingshot ----------------
pub const SLINGSHOT_ZONE_HEIGHT: f32 = 280.0; // gesture zone height in CSS px
pub const SLINGSHOT_ANCHOR_INSET: f32 = 70.0; // anchor distance above the zone bottom
pub const MAX_PULL: f32 = 150.0; // vertical drag band [0, MAX_PULL]
pub const MAX_HORIZONTAL: f32 = 140.0; // horizontal drag band [-MAX_HORIZONTAL, MAX_HORIZONTAL]
pub const MAX_AMOUNT: f32 = 200.0; // amount at full pull

// Release
pub const LAUNCH_PULL_THRESHOLD: f32 = 0.15; // pull strength needed to commit
pub const LAUNCH_BASE_HEIGHT: f32 = 200.0;
pub const LAUNCH_HEIGHT_PER_PULL: f32 = 1.5;
pub const LAUNCH_IMPULSE_X: f32 = 3.0; // fling velocity per px of sideways pull
pub const LAUNCH_IMPULSE_Y: f32 = 8.0; // fling velocity per px of pull
pub const LAUNCH_SETTLE_THRESHOLD: f32 = 0.3;
pub const LAUNCH_TARGET_CUTOFF_Y: f32 = -50.0; // targets above this line were launches
pub const RETURN_BOUNCE_VELOCITY_Y: f32 = -50.0;

// Landing position of a launched expense in universe space (0..1)
pub const LANDING_X: Range<f32> = 0.2..0.8;
pub const LANDING_Y: Range<f32> = 0.1..0.5;

// ---------------- Gravity well ----------------
pub const WELL_CENTER_LIFT: f32 = 40.0; // well centre sits this far above mid-height
pub const WELL_SPREAD_FRACTION: f32 = 0.22; // seeding circle radius as a fraction of min(w, h)
pub const REPULSION_MARGIN: f32 = 20.0; // bubbles push apart inside r_a + r_b + margin
pub const REPULSION_STIFFNESS: f32 = 2.0; // force per px of penetration
pub const CENTER_ATTRACTION: f32 = 0.3;
pub const VELOCITY_RETENTION: f32 = 0.95; // per-frame multiplicative damping
pub const COLLISION_MARGIN: f32 = 10.0; // drop-on-bubble reach
pub const MIN_SEPARATION: f32 = 1.0; // floor for distance divisors
pub const BASE_BUBBLE_RADIUS: f32 = 25.0;
pub const RADIUS_PER_BALANCE: f32 = 0.5;
pub const STREAM_LIFETIME_MS: u64 = 2000;
pub const STREAM_FLOW_RATE: f32 = 0.8; // progress per second

// ---------------- Seal ----------------
pub const SEAL_COMPLETE_PROGRESS: f32 = 0.98;
pub const HAPTIC_PULSE_MS: u32 = 100;
pub const SHATTER_PARTICLE_COUNT: usize = 24;
pub const SHATTER_SPEED: Range<f32> = 40.0..100.0;
pub const SHATTER_SIZE: Range<f32> = 2.0..5.0;

// ---------------- Universe ----------------
pub const STAR_COUNT: usize = 120;
pub const STAR_SEED: u64 = 42;
pub const STAR_FIELD_HEIGHT: f32 = 0.7; // stars occupy the top fraction of the canvas
pub const ORB_BASE_RADIUS: f32 = 8.0;
pub const ORB_RADIUS_PER_AMOUNT: f32 = 0.15;
pub const ORB_MAX_RADIUS: f32 = 40.0;
pub const ORB_GROWTH_RATE: f32 = 4.0; // exponential approach rate per second
pub const ORB_PULSE_AMPLITUDE: f32 = 2.0; // px
pub const ORB_PULSE_RATE: f32 = 0.002; // radians per ms
pub const ORB_FIELD_HEIGHT: f32 = 0.6;
pub const ORB_TOP_MARGIN: f32 = 40.0;
pub const ORB_GLYPH_MIN_RADIUS: f32 = 8.0;
