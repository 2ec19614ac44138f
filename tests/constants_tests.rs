// Host-side tests for painting constants and how they fit the physics.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use orbit_core::constants::{MAX_PULL, SLINGSHOT_ANCHOR_INSET, SLINGSHOT_ZONE_HEIGHT};

#[test]
#[allow(clippy::assertions_on_constants)]
fn dial_ticks_sit_inside_the_dial() {
    assert!(DIAL_TICK_RADIUS + DIAL_TICK_SIZE <= DIAL_RADIUS);
    assert!(DIAL_HUB_RADIUS < DIAL_TICK_RADIUS - DIAL_TICK_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn slingshot_layout_fits_the_zone() {
    let zone = SLINGSHOT_ZONE_HEIGHT as f64;
    let anchor_y = zone - SLINGSHOT_ANCHOR_INSET as f64;
    // the readout stays clear of the dial
    assert!(AMOUNT_TOP + AMOUNT_PX + CATEGORY_PX < anchor_y - DIAL_RADIUS + 40.0);
    // at full pull the puck's top edge is still on the canvas
    assert!(anchor_y - MAX_PULL as f64 - PUCK_RADIUS >= 0.0);
    // the hint sits below the anchor dot
    assert!(zone - HINT_BOTTOM > anchor_y);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fractions_are_fractions() {
    for f in [SEAL_ZONE_TOP, SEAL_RING_FRACTION, SEAL_RING_SHRINK, SKY_FOCUS_Y, NEBULA_REACH] {
        assert!(f > 0.0 && f < 1.0, "{f}");
    }
    assert!(NEBULA_CENTER.0 >= 0.0 && NEBULA_CENTER.0 <= 1.0);
    assert!(NEBULA_CENTER.1 >= 0.0 && NEBULA_CENTER.1 <= 1.0);
    assert!(ORB_CORE_ALPHA > 0.0 && ORB_CORE_ALPHA <= 1.0);
}

#[test]
fn sky_colours_are_hex() {
    for c in SKY_COSMOS.iter().chain(SKY_WALLET.iter()) {
        assert!(c.starts_with('#') && c.len() == 7, "{c}");
        assert!(u32::from_str_radix(&c[1..], 16).is_ok());
    }
}

#[test]
fn captions_are_uppercase() {
    for caption in [
        HINT_PULL,
        HINT_LAUNCHING,
        WELL_INSTRUCTION,
        SEAL_TITLE,
        SEAL_TITLE_DONE,
        SEAL_CAPTION,
        SEAL_CAPTION_DONE,
    ] {
        assert_eq!(caption, caption.to_uppercase());
    }
}
