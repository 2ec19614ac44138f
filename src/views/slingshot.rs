use super::{entropy_rng, js_error, notify, to_js};
use crate::dom;
use crate::frame::{start_loop, LoopHandle};
use crate::input::{capture, pointer_client_px, PointerListeners};
use crate::render::{self, Surface};
use orbit_core::constants::SLINGSHOT_ZONE_HEIGHT;
use orbit_core::{Expense, FrameClock, Simulation, Slingshot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct SlingshotState {
    sling: Slingshot,
    surface: Surface,
    clock: FrameClock,
    on_launch: Option<js_sys::Function>,
}

impl SlingshotState {
    fn frame(&mut self) -> Vec<Expense> {
        let mut launched = Vec::new();
        self.sling
            .advance(self.clock.tick(), dom::now_ms(), &mut launched);
        let painted = self.surface.begin().and_then(|ctx| {
            render::slingshot::paint(ctx, &self.sling, self.surface.width(), self.surface.height())
        });
        if let Err(e) = painted {
            log::error!("[slingshot] paint error: {:?}", e);
        }
        launched
    }
}

/// Pull-back launcher. Mount on a canvas spanning the bottom of the screen;
/// the canvas is sized to the full `width` and the fixed zone height.
#[wasm_bindgen]
pub struct SlingshotView {
    state: Rc<RefCell<SlingshotState>>,
    _listeners: PointerListeners,
    _frames: LoopHandle,
}

#[wasm_bindgen]
impl SlingshotView {
    /// `on_launch(expense)` fires once per launch with
    /// `{id, amount, category, timestamp, x, y}`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: web::HtmlCanvasElement,
        width: f64,
        on_launch: Option<js_sys::Function>,
    ) -> Result<SlingshotView, JsValue> {
        Self::mount(canvas, width, on_launch).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setOnLaunch)]
    pub fn set_on_launch(&self, on_launch: Option<js_sys::Function>) {
        self.state.borrow_mut().on_launch = on_launch;
    }

    pub fn resize(&self, width: f64) {
        self.state
            .borrow_mut()
            .surface
            .resize(width, SLINGSHOT_ZONE_HEIGHT as f64);
    }

    /// Amount selected by the current pull.
    pub fn amount(&self) -> u32 {
        self.state.borrow().sling.amount()
    }

    /// Lowercase id of the selected category.
    pub fn category(&self) -> String {
        self.state.borrow().sling.category().id().to_string()
    }

    #[wasm_bindgen(js_name = isLaunching)]
    pub fn is_launching(&self) -> bool {
        self.state.borrow().sling.is_launching()
    }
}

impl SlingshotView {
    fn mount(
        canvas: web::HtmlCanvasElement,
        width: f64,
        on_launch: Option<js_sys::Function>,
    ) -> anyhow::Result<SlingshotView> {
        let surface = Surface::new(canvas.clone(), width, SLINGSHOT_ZONE_HEIGHT as f64)?;
        let state = Rc::new(RefCell::new(SlingshotState {
            sling: Slingshot::new(entropy_rng()?),
            surface,
            clock: FrameClock::default(),
            on_launch,
        }));

        let mut listeners = PointerListeners::new(&canvas);
        {
            let state = state.clone();
            let canvas = canvas.clone();
            listeners.on("pointerdown", move |ev: web::PointerEvent| {
                capture(&canvas, &ev);
                state.borrow_mut().sling.pointer_down(pointer_client_px(&ev));
            })?;
        }
        {
            let state = state.clone();
            listeners.on("pointermove", move |ev: web::PointerEvent| {
                state.borrow_mut().sling.pointer_move(pointer_client_px(&ev));
            })?;
        }
        for kind in ["pointerup", "pointercancel"] {
            let state = state.clone();
            listeners.on(kind, move |_ev: web::PointerEvent| {
                state.borrow_mut().sling.pointer_up();
            })?;
        }

        let frames = {
            let state = state.clone();
            start_loop(move || {
                let (launched, callback) = {
                    let mut s = state.borrow_mut();
                    (s.frame(), s.on_launch.clone())
                };
                if let Some(cb) = callback {
                    for expense in &launched {
                        notify(&cb, "onLaunch", to_js(expense));
                    }
                }
            })
        };

        log::info!("[slingshot] mounted width={}", width);
        Ok(SlingshotView {
            state,
            _listeners: listeners,
            _frames: frames,
        })
    }
}
