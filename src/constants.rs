/// Painting layout, colours and type for the canvas views.
///
/// Physics feel lives in `orbit_core::constants`; everything here only
/// changes how a frame looks.
// Type
pub const FONT_SANS: &str = "sans-serif";
pub const FONT_MONO: &str = "monospace";
pub const CAPTION_PX: f64 = 11.0;

// Slingshot zone
pub const AMOUNT_PX: f64 = 36.0;
pub const AMOUNT_TOP: f64 = 16.0; // top of the amount readout
pub const CATEGORY_PX: f64 = 13.0;
pub const DIAL_RADIUS: f64 = 55.0;
pub const DIAL_TICK_RADIUS: f64 = 50.0; // ticks sit just inside the rim
pub const DIAL_TICK_SIZE: f64 = 3.0;
pub const DIAL_HUB_RADIUS: f64 = 5.0;
pub const PUCK_RADIUS: f64 = 28.0;
pub const PUCK_GLYPH_PX: f64 = 22.0;
pub const ANCHOR_DOT_RADIUS: f64 = 5.0;
pub const HINT_BOTTOM: f64 = 14.0;
pub const HINT_PULL: &str = "PULL BACK TO LAUNCH";
pub const HINT_LAUNCHING: &str = "LAUNCHING";

// Gravity well
pub const STREAM_PARTICLES: usize = 8;
pub const STREAM_PARTICLE_SIZE: f64 = 3.0;
pub const STREAM_BEND: f64 = 15.0; // control point offset of the connector curve
pub const BUBBLE_GLOW_SPREAD: f64 = 2.0;
pub const BUBBLE_NAME_MIN_PX: f64 = 10.0;
pub const BUBBLE_BALANCE_MIN_PX: f64 = 9.0;
pub const WELL_INSTRUCTION: &str = "DRAG A BUBBLE ONTO ANOTHER TO SETTLE DEBTS";
pub const WELL_INSTRUCTION_BOTTOM: f64 = 30.0;

// Seal
pub const SEAL_ZONE_TOP: f64 = 0.45; // fraction of height
pub const SEAL_RING_FRACTION: f64 = 0.15; // of min(width, height)
pub const SEAL_RING_WIDTH: f64 = 6.0;
pub const SEAL_RING_SHRINK: f64 = 0.2; // ring contracts this much while shattering
pub const SEAL_ACCENT: [u8; 3] = [100, 255, 180];
pub const FINGERPRINT_ARCS: usize = 4;
pub const SEAL_GLYPH: &str = "\u{1F510}";
pub const SEAL_TITLE: &str = "WALLET MODE";
pub const SEAL_TITLE_DONE: &str = "SEALED";
pub const SEAL_CAPTION: &str = "PRESS AND HOLD";
pub const SEAL_CAPTION_DONE: &str = "TRANSACTION CONFIRMED";

// Universe
pub const SKY_COSMOS: [&str; 2] = ["#0a0e1a", "#020307"];
pub const SKY_WALLET: [&str; 2] = ["#0a0a0f", "#050506"];
pub const SKY_FOCUS_Y: f64 = 0.3;
pub const SKY_REACH: f64 = 1.2; // gradient radius as a multiple of width
pub const NEBULA_CENTER: (f64, f64) = (0.6, 0.2);
pub const NEBULA_REACH: f64 = 0.25;
pub const ORB_GLOW_SPREAD: f64 = 2.5;
pub const ORB_CORE_ALPHA: f32 = 0.8;
