//! requestAnimationFrame loop ownership.
//!
//! Every view runs one loop. The [`LoopHandle`] returned by [`start_loop`] is
//! the only strong owner of the frame closure: dropping it cancels the
//! pending frame and frees the closure together with whatever state it
//! captured, so a disposed view cannot paint again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct LoopHandle {
    tick: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    /// Cancel the pending frame and release the closure.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::debug!("[frame] loop stopped");
        }
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &FrameSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

/// Call `on_frame` once per display frame until the handle is dropped.
pub fn start_loop(mut on_frame: impl FnMut() + 'static) -> LoopHandle {
    let tick: FrameSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    // the closure only holds weak references back to its own slot
    let tick_weak = Rc::downgrade(&tick);
    let pending_weak = Rc::downgrade(&pending);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (Some(tick), Some(pending)) = (tick_weak.upgrade(), pending_weak.upgrade()) else {
            return;
        };
        pending.set(None);
        on_frame();
        pending.set(request_frame(&tick));
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));

    LoopHandle { tick, pending }
}
