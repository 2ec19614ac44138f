use super::{from_js, js_error, notify, to_js};
use crate::dom;
use crate::frame::{start_loop, LoopHandle};
use crate::input::{capture, pointer_local_px, PointerListeners};
use crate::render::{self, Surface};
use orbit_core::constants::STREAM_LIFETIME_MS;
use orbit_core::{demo_group, FrameClock, GravityWell, GroupUser, Settlement, Simulation};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct WellState {
    well: GravityWell,
    surface: Surface,
    clock: FrameClock,
    on_settle: Option<js_sys::Function>,
}

impl WellState {
    fn frame(&mut self) {
        let mut none = Vec::new();
        self.well.advance(self.clock.tick(), dom::now_ms(), &mut none);
        let painted = self.surface.begin().and_then(|ctx| {
            render::gravity_well::paint(ctx, &self.well, self.surface.width(), self.surface.height())
        });
        if let Err(e) = painted {
            log::error!("[well] paint error: {:?}", e);
        }
    }
}

/// Sweep expired streams once a new stream's lifetime is up, so expiry does
/// not wait on a throttled animation loop. The timer cannot be cancelled; a
/// view freed in the meantime is simply gone.
fn schedule_stream_expiry(state: Weak<RefCell<WellState>>) {
    spawn_local(async move {
        if let Err(e) = dom::sleep_ms(STREAM_LIFETIME_MS).await {
            log::warn!("[well] stream timer: {e:#}");
            return;
        }
        if let Some(state) = state.upgrade() {
            let expired = state.borrow_mut().well.expire_due(dom::now_ms());
            log::debug!("[well] expired {expired} streams");
        }
    });
}

/// Group debts as bubbles; drag one onto another to settle.
#[wasm_bindgen]
pub struct GravityWellView {
    state: Rc<RefCell<WellState>>,
    _listeners: PointerListeners,
    _frames: LoopHandle,
}

#[wasm_bindgen]
impl GravityWellView {
    /// `users` is an array of `{id, name, balance, color}`; `null` or
    /// `undefined` shows a demo group. `on_settle(settlement)` receives
    /// `{fromId, toId, transfer, users}` after every drop onto another bubble.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: web::HtmlCanvasElement,
        width: f64,
        height: f64,
        users: JsValue,
        on_settle: Option<js_sys::Function>,
    ) -> Result<GravityWellView, JsValue> {
        Self::mount(canvas, width, height, &users, on_settle).map_err(js_error)
    }

    /// Replace the group, e.g. after the host persisted a settlement.
    #[wasm_bindgen(js_name = setUsers)]
    pub fn set_users(&self, users: JsValue) -> Result<(), JsValue> {
        let users = parse_users(&users).map_err(js_error)?;
        self.state.borrow_mut().well.set_users(users);
        Ok(())
    }

    /// The view's working copy of the group.
    pub fn users(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.borrow().well.users()).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setOnSettle)]
    pub fn set_on_settle(&self, on_settle: Option<js_sys::Function>) {
        self.state.borrow_mut().on_settle = on_settle;
    }

    pub fn resize(&self, width: f64, height: f64) {
        let mut s = self.state.borrow_mut();
        s.surface.resize(width, height);
        s.well.set_viewport(width as f32, height as f32);
    }
}

fn parse_users(users: &JsValue) -> anyhow::Result<Vec<GroupUser>> {
    if users.is_null() || users.is_undefined() {
        Ok(demo_group())
    } else {
        from_js(users)
    }
}

impl GravityWellView {
    fn mount(
        canvas: web::HtmlCanvasElement,
        width: f64,
        height: f64,
        users: &JsValue,
        on_settle: Option<js_sys::Function>,
    ) -> anyhow::Result<GravityWellView> {
        let users = parse_users(users)?;
        let group_size = users.len();
        let state = Rc::new(RefCell::new(WellState {
            well: GravityWell::new(users, width as f32, height as f32),
            surface: Surface::new(canvas.clone(), width, height)?,
            clock: FrameClock::default(),
            on_settle,
        }));

        let mut listeners = PointerListeners::new(&canvas);
        {
            let state = state.clone();
            let canvas = canvas.clone();
            listeners.on("pointerdown", move |ev: web::PointerEvent| {
                let point = pointer_local_px(&ev, &canvas);
                if state.borrow_mut().well.pointer_down(point) {
                    capture(&canvas, &ev);
                }
            })?;
        }
        {
            let state = state.clone();
            let canvas = canvas.clone();
            listeners.on("pointermove", move |ev: web::PointerEvent| {
                let mut s = state.borrow_mut();
                if s.well.dragged_id().is_some() {
                    s.well.pointer_move(pointer_local_px(&ev, &canvas));
                }
            })?;
        }
        for kind in ["pointerup", "pointercancel"] {
            let state = state.clone();
            listeners.on(kind, move |_ev: web::PointerEvent| {
                let (settlement, callback) = {
                    let mut s = state.borrow_mut();
                    (s.well.pointer_up(dom::now_ms()), s.on_settle.clone())
                };
                if let Some(settlement) = settlement {
                    settled(&state, settlement, callback);
                }
            })?;
        }

        let frames = {
            let state = state.clone();
            start_loop(move || state.borrow_mut().frame())
        };

        log::info!("[well] mounted {}x{} users={}", width, height, group_size);
        Ok(GravityWellView {
            state,
            _listeners: listeners,
            _frames: frames,
        })
    }
}

fn settled(
    state: &Rc<RefCell<WellState>>,
    settlement: Settlement,
    callback: Option<js_sys::Function>,
) {
    schedule_stream_expiry(Rc::downgrade(state));
    if let Some(cb) = callback {
        notify(&cb, "onSettle", to_js(&settlement));
    }
}
