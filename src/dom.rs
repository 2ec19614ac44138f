use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("canvas has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Size the canvas to `width`×`height` CSS px with a device-pixel backing store.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width: f64, height: f64) {
    let dpr = device_pixel_ratio();
    canvas.set_width((width * dpr).max(1.0) as u32);
    canvas.set_height((height * dpr).max(1.0) as u32);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", width));
    _ = style.set_property("height", &format!("{}px", height));
    _ = style.set_property("touch-action", "none");
}

/// Wall-clock ms since the Unix epoch.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Short haptic pulse where the platform supports it.
pub fn vibrate(ms: u32) {
    if let Some(w) = web::window() {
        let _ = w.navigator().vibrate_with_duration(ms);
    }
}

/// Resolve after `ms` on the window timer queue.
pub async fn sleep_ms(ms: u64) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let delay = ms.min(i32::MAX as u64) as i32;
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay);
    });
    scheduled.map_err(|e| anyhow!("setTimeout failed: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
