use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in CSS px relative to the element's top-left corner.
#[inline]
pub fn pointer_local_px(ev: &web::PointerEvent, element: &web::Element) -> Vec2 {
    let rect = element.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// Pointer listeners registered on one element. Dropping the set removes
/// every listener from the element.
pub struct PointerListeners {
    target: web::EventTarget,
    registered: Vec<(&'static str, PointerClosure)>,
}

impl PointerListeners {
    pub fn new(target: &web::EventTarget) -> Self {
        Self {
            target: target.clone(),
            registered: Vec::new(),
        }
    }

    pub fn on(
        &mut self,
        kind: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> anyhow::Result<()> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        self.target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener({kind}) failed: {:?}", e))?;
        self.registered.push((kind, closure));
        Ok(())
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        for (kind, closure) in self.registered.drain(..) {
            _ = self
                .target
                .remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
}

/// Route subsequent move/up events to `canvas` until release.
pub fn capture(canvas: &web::HtmlCanvasElement, ev: &web::PointerEvent) {
    _ = canvas.set_pointer_capture(ev.pointer_id());
    ev.prevent_default();
}
