// Host-side tests for colour and label formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/render/style.rs");
}

use orbit_core::Category;
use style::*;

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(parse_hex("#FF6B6B"), Some([255, 107, 107]));
    assert_eq!(parse_hex("#4ecdc4"), Some([78, 205, 196]));
    assert_eq!(parse_hex("#fff"), Some([255, 255, 255]));
    assert_eq!(parse_hex("FF6B6B"), None);
    assert_eq!(parse_hex("#FF6B6B80"), None);
    assert_eq!(parse_hex("#GG0000"), None);
}

#[test]
fn every_category_colour_parses() {
    for c in Category::ALL {
        assert!(parse_hex(c.color()).is_some(), "{:?}", c);
    }
}

#[test]
fn rgba_trims_and_clamps_alpha() {
    assert_eq!(rgba([1, 2, 3], 0.5), "rgba(1,2,3,0.5)");
    assert_eq!(rgba([1, 2, 3], 1.0), "rgba(1,2,3,1)");
    assert_eq!(rgba([1, 2, 3], 0.0), "rgba(1,2,3,0)");
    assert_eq!(rgba([1, 2, 3], 3.0), "rgba(1,2,3,1)");
    assert_eq!(rgba([1, 2, 3], -1.0), "rgba(1,2,3,0)");
    assert_eq!(rgba([1, 2, 3], f32::NAN), "rgba(1,2,3,0)");
    assert_eq!(white(0.25), "rgba(255,255,255,0.25)");
}

#[test]
fn host_colours_get_alpha_or_pass_through() {
    assert_eq!(with_alpha("#45B7D1", 0.5), "rgba(69,183,209,0.5)");
    assert_eq!(with_alpha("tomato", 0.5), "tomato");
}

#[test]
fn ripple_colours_accept_rgb_and_hex() {
    assert_eq!(ripple_stroke("rgb(255,107,107)", 0.4), "rgba(255,107,107,0.4)");
    assert_eq!(ripple_stroke(" rgb(1, 2, 3) ", 1.0), "rgba(1, 2, 3,1)");
    assert_eq!(ripple_stroke("#FFFFFF", 0.2), "rgba(255,255,255,0.2)");
}

#[test]
fn balance_labels_show_sign_and_cents_only_when_needed() {
    assert_eq!(balance_label(30.0), "+$30");
    assert_eq!(balance_label(0.0), "+$0");
    assert_eq!(balance_label(-0.0), "+$0");
    assert_eq!(balance_label(-80.0), "-$80");
    assert_eq!(balance_label(12.5), "+$12.5");
    assert_eq!(amount_label(200), "$200");
}

#[test]
fn font_strings() {
    assert_eq!(font("", 11.0, "sans-serif"), "11px sans-serif");
    assert_eq!(font("bold", 13.4, "sans-serif"), "bold 13px sans-serif");
}
