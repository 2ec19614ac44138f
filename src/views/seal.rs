use super::{entropy_rng, js_error};
use crate::dom;
use crate::frame::{start_loop, LoopHandle};
use crate::input::PointerListeners;
use crate::render::{self, Surface};
use orbit_core::constants::HAPTIC_PULSE_MS;
use orbit_core::{FrameClock, Seal, SealEvent, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct SealState {
    seal: Seal,
    surface: Surface,
    clock: FrameClock,
    on_seal: Option<js_sys::Function>,
}

impl SealState {
    fn frame(&mut self) -> Vec<SealEvent> {
        let mut events = Vec::new();
        self.seal.advance(self.clock.tick(), dom::now_ms(), &mut events);
        let painted = self.surface.begin().and_then(|ctx| {
            render::seal::paint(ctx, &self.seal, self.surface.width(), self.surface.height())
        });
        if let Err(e) = painted {
            log::error!("[seal] paint error: {:?}", e);
        }
        events
    }
}

/// Press-and-hold confirmation.
#[wasm_bindgen]
pub struct SealView {
    state: Rc<RefCell<SealState>>,
    _listeners: PointerListeners,
    _frames: LoopHandle,
}

#[wasm_bindgen]
impl SealView {
    /// `on_seal()` fires once each time a hold completes.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: web::HtmlCanvasElement,
        width: f64,
        height: f64,
        on_seal: Option<js_sys::Function>,
    ) -> Result<SealView, JsValue> {
        Self::mount(canvas, width, height, on_seal).map_err(js_error)
    }

    pub fn completed(&self) -> bool {
        self.state.borrow().seal.state().completed
    }

    pub fn holding(&self) -> bool {
        self.state.borrow().seal.state().holding
    }

    #[wasm_bindgen(js_name = setOnSeal)]
    pub fn set_on_seal(&self, on_seal: Option<js_sys::Function>) {
        self.state.borrow_mut().on_seal = on_seal;
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.state.borrow_mut().surface.resize(width, height);
    }
}

impl SealView {
    fn mount(
        canvas: web::HtmlCanvasElement,
        width: f64,
        height: f64,
        on_seal: Option<js_sys::Function>,
    ) -> anyhow::Result<SealView> {
        let state = Rc::new(RefCell::new(SealState {
            seal: Seal::new(entropy_rng()?),
            surface: Surface::new(canvas.clone(), width, height)?,
            clock: FrameClock::default(),
            on_seal,
        }));

        let mut listeners = PointerListeners::new(&canvas);
        {
            let state = state.clone();
            listeners.on("pointerdown", move |ev: web::PointerEvent| {
                ev.prevent_default();
                state.borrow_mut().seal.pointer_down();
            })?;
        }
        // leaving the canvas counts as letting go
        for kind in ["pointerup", "pointercancel", "pointerleave"] {
            let state = state.clone();
            listeners.on(kind, move |_ev: web::PointerEvent| {
                state.borrow_mut().seal.pointer_up();
            })?;
        }

        let frames = {
            let state = state.clone();
            start_loop(move || {
                let (events, callback) = {
                    let mut s = state.borrow_mut();
                    (s.frame(), s.on_seal.clone())
                };
                for event in events {
                    match event {
                        SealEvent::Completed => {
                            dom::vibrate(HAPTIC_PULSE_MS);
                            if let Some(cb) = &callback {
                                if let Err(e) = cb.call0(&JsValue::NULL) {
                                    log::warn!("[onSeal] callback threw: {:?}", e);
                                }
                            }
                        }
                    }
                }
            })
        };

        log::info!("[seal] mounted {}x{}", width, height);
        Ok(SealView {
            state,
            _listeners: listeners,
            _frames: frames,
        })
    }
}
