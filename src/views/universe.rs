use super::{entropy_rng, from_js, js_error};
use crate::dom;
use crate::frame::{start_loop, LoopHandle};
use crate::render::{self, Surface};
use orbit_core::{Expense, FrameClock, Ripple, Simulation, Universe};
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct UniverseState {
    universe: Universe,
    surface: Surface,
    clock: FrameClock,
}

impl UniverseState {
    fn frame(&mut self) {
        let mut none: Vec<Infallible> = Vec::new();
        self.universe
            .advance(self.clock.tick(), dom::now_ms(), &mut none);
        let painted = self
            .surface
            .begin()
            .and_then(|ctx| render::universe::paint(ctx, &self.universe));
        if let Err(e) = painted {
            log::error!("[universe] paint error: {:?}", e);
        }
    }
}

/// Background starfield with one orb per expense. Purely reactive: the host
/// pushes expenses, ripples and wallet mode in.
#[wasm_bindgen]
pub struct UniverseCanvas {
    state: Rc<RefCell<UniverseState>>,
    _frames: LoopHandle,
}

#[wasm_bindgen]
impl UniverseCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: web::HtmlCanvasElement,
        width: f64,
        height: f64,
    ) -> Result<UniverseCanvas, JsValue> {
        Self::mount(canvas, width, height).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setExpenses)]
    pub fn set_expenses(&self, expenses: JsValue) -> Result<(), JsValue> {
        let expenses: Vec<Expense> = from_js(&expenses).map_err(js_error)?;
        self.state.borrow_mut().universe.set_expenses(expenses);
        Ok(())
    }

    /// Ripples are owned by the host and replaced wholesale each call.
    #[wasm_bindgen(js_name = setRipples)]
    pub fn set_ripples(&self, ripples: JsValue) -> Result<(), JsValue> {
        let ripples: Vec<Ripple> = from_js(&ripples).map_err(js_error)?;
        self.state.borrow_mut().universe.set_ripples(ripples);
        Ok(())
    }

    #[wasm_bindgen(js_name = setWalletMode)]
    pub fn set_wallet_mode(&self, on: bool) {
        self.state.borrow_mut().universe.set_wallet_mode(on);
    }

    pub fn resize(&self, width: f64, height: f64) {
        let mut s = self.state.borrow_mut();
        s.surface.resize(width, height);
        s.universe.set_viewport(width as f32, height as f32);
    }
}

impl UniverseCanvas {
    fn mount(canvas: web::HtmlCanvasElement, width: f64, height: f64) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(UniverseState {
            universe: Universe::new(width as f32, height as f32, entropy_rng()?),
            surface: Surface::new(canvas, width, height)?,
            clock: FrameClock::default(),
        }));
        let frames = {
            let state = state.clone();
            start_loop(move || state.borrow_mut().frame())
        };
        log::info!("[universe] mounted {}x{}", width, height);
        Ok(UniverseCanvas {
            state,
            _frames: frames,
        })
    }
}
