//! The `#[wasm_bindgen]` classes a host page mounts on its canvases.
//!
//! Each view owns its simulation state behind an `Rc<RefCell<_>>`, one
//! [`LoopHandle`](crate::frame::LoopHandle) and one set of pointer listeners.
//! Calling `free()` from JS drops all three. Host callbacks are always
//! invoked after the state borrow is released, so a callback may call back
//! into the view.

use anyhow::anyhow;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

mod gravity_well;
mod seal;
mod slingshot;
mod universe;

pub use gravity_well::GravityWellView;
pub use seal::SealView;
pub use slingshot::SlingshotView;
pub use universe::UniverseCanvas;

#[allow(deprecated)]
pub(crate) fn to_js<T: Serialize>(value: &T) -> anyhow::Result<JsValue> {
    JsValue::from_serde(value).map_err(|e| anyhow!("serialize: {e}"))
}

#[allow(deprecated)]
pub(crate) fn from_js<T: DeserializeOwned>(value: &JsValue) -> anyhow::Result<T> {
    value.into_serde().map_err(|e| anyhow!("deserialize: {e}"))
}

pub(crate) fn js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

/// Invoke a host callback. Failures are logged, never propagated.
pub(crate) fn notify(callback: &js_sys::Function, name: &str, arg: anyhow::Result<JsValue>) {
    let result = match arg {
        Ok(arg) => callback.call1(&JsValue::NULL, &arg),
        Err(e) => {
            log::error!("[{name}] payload: {e:#}");
            return;
        }
    };
    if let Err(e) = result {
        log::warn!("[{name}] callback threw: {:?}", e);
    }
}

pub(crate) fn entropy_rng() -> anyhow::Result<rand::rngs::StdRng> {
    use rand::SeedableRng;
    rand::rngs::StdRng::from_rng(rand::rngs::OsRng).map_err(|e| anyhow!("entropy: {e}"))
}
