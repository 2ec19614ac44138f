#![cfg(target_arch = "wasm32")]
//! Browser front-end for Orbit.
//!
//! A host page creates one of the exported views on a `<canvas>`:
//! [`SlingshotView`], [`GravityWellView`], [`SealView`] or
//! [`UniverseCanvas`]. Each runs its own animation loop on top of the
//! simulations in `orbit_core` and paints with Canvas2D. Calling `free()` on a
//! view stops its loop and removes its listeners.

use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod frame;
mod input;
mod render;
mod views;

pub use views::{GravityWellView, SealView, SlingshotView, UniverseCanvas};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");
    Ok(())
}
