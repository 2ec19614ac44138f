//! Slingshot expense launcher.
//!
//! Pull the puck down to set the amount, sideways to pick a category, and let
//! go. A strong enough pull flings the puck upward; when it settles at the
//! top an [`Expense`] is committed and the puck bounces home.
//!
//! The drag offset is the only authoritative state during a drag: amount and
//! category are projections of it ([`amount_for_pull`],
//! [`category_index_for_offset`]) refreshed on every move.

use crate::constants::{
    LANDING_X, LANDING_Y, LAUNCH_BASE_HEIGHT, LAUNCH_HEIGHT_PER_PULL, LAUNCH_IMPULSE_X,
    LAUNCH_IMPULSE_Y, LAUNCH_PULL_THRESHOLD, LAUNCH_SETTLE_THRESHOLD, LAUNCH_TARGET_CUTOFF_Y,
    MAX_AMOUNT, MAX_HORIZONTAL, MAX_PULL, RETURN_BOUNCE_VELOCITY_Y,
};
use crate::driver::Simulation;
use crate::model::{Category, Expense};
use crate::spring::{is_settled_2d, spring_step_2d, SNAPPY};
use glam::Vec2;
use rand::prelude::*;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlingshotPhase {
    Idle,
    /// Pointer captured; the puck follows the finger.
    Dragging,
    /// Released below the launch threshold; snapping back to the anchor.
    Settling,
    /// Released with enough pull; flying to the launch point.
    Launching,
    /// Expense committed; bouncing back to the anchor.
    Returning,
}

/// Clamp a raw drag delta (x right, y = pull) into the gesture bands.
#[inline]
pub fn clamp_drag(delta: Vec2) -> Vec2 {
    Vec2::new(
        delta.x.clamp(-MAX_HORIZONTAL, MAX_HORIZONTAL),
        delta.y.clamp(0.0, MAX_PULL),
    )
}

/// Dial slot for a horizontal offset; the centre maps to the middle category.
#[inline]
pub fn category_index_for_offset(x: f32) -> usize {
    let last = Category::ALL.len() - 1;
    let normalized = (x / MAX_HORIZONTAL + 1.0) * 0.5;
    let idx = (normalized * last as f32).round();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(last)
    }
}

#[inline]
pub fn amount_for_pull(y: f32) -> u32 {
    ((y / MAX_PULL) * MAX_AMOUNT).round().max(0.0) as u32
}

#[inline]
pub fn pull_strength(y: f32) -> f32 {
    y / MAX_PULL
}

pub struct Slingshot {
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    phase: SlingshotPhase,
    drag_start: Option<Vec2>,
    amount: u32,
    category_index: usize,
    hint_visible: bool,
    rng: StdRng,
}

impl Slingshot {
    pub fn new(rng: StdRng) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
            phase: SlingshotPhase::Idle,
            drag_start: None,
            amount: 0,
            category_index: 0,
            hint_visible: true,
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn phase(&self) -> SlingshotPhase {
        self.phase
    }

    /// Puck offset from the anchor: x right, y up.
    pub fn offset(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn category_index(&self) -> usize {
        self.category_index
    }

    pub fn category(&self) -> Category {
        Category::from_index(self.category_index)
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == SlingshotPhase::Dragging
    }

    pub fn is_launching(&self) -> bool {
        self.phase == SlingshotPhase::Launching
    }

    /// The "pull back" hint shows until the first drag.
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Pull tension in [0, 1].
    pub fn tension(&self) -> f32 {
        (self.position.y / MAX_PULL).clamp(0.0, 1.0)
    }

    /// Dial rotation in degrees, ±30 at the horizontal limits.
    pub fn dial_rotation_deg(&self) -> f32 {
        (self.position.x / MAX_HORIZONTAL) * 30.0
    }

    /// Capture the pointer at `client` (screen px). Interrupts any flight:
    /// the puck keeps its current visual offset and loses its velocity.
    pub fn pointer_down(&mut self, client: Vec2) {
        if self.phase != SlingshotPhase::Idle {
            log::debug!("[slingshot] grab interrupts {:?}", self.phase);
        }
        self.drag_start = Some(client);
        self.velocity = Vec2::ZERO;
        self.phase = SlingshotPhase::Dragging;
        self.hint_visible = false;
    }

    pub fn pointer_move(&mut self, client: Vec2) {
        let Some(start) = self.drag_start else {
            return;
        };
        // screen y grows downward; the pull axis is inverted
        let delta = Vec2::new(client.x - start.x, start.y - client.y);
        let pos = clamp_drag(delta);
        self.position = pos;
        self.category_index = category_index_for_offset(pos.x);
        self.amount = amount_for_pull(pos.y);
    }

    /// Release (pointer up or cancel). Commits to a launch or a snap-back.
    pub fn pointer_up(&mut self) {
        if self.phase != SlingshotPhase::Dragging {
            return;
        }
        self.drag_start = None;
        let pull = pull_strength(self.position.y);
        if pull > LAUNCH_PULL_THRESHOLD {
            let launch_y = -(LAUNCH_BASE_HEIGHT + self.position.y * LAUNCH_HEIGHT_PER_PULL);
            self.target = Vec2::new(0.0, launch_y);
            self.velocity = Vec2::new(
                -self.position.x * LAUNCH_IMPULSE_X,
                -self.position.y * LAUNCH_IMPULSE_Y,
            );
            self.phase = SlingshotPhase::Launching;
            log::debug!(
                "[slingshot] launch pull={:.2} target_y={:.1} amount={}",
                pull,
                launch_y,
                self.amount
            );
        } else {
            self.target = Vec2::ZERO;
            self.phase = SlingshotPhase::Settling;
            log::debug!("[slingshot] snap back pull={:.2}", pull);
        }
    }

    fn commit_expense(&mut self, now_ms: f64) -> Expense {
        let id = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();
        Expense {
            id: id.to_string(),
            amount: self.amount,
            category: self.category(),
            timestamp: now_ms,
            x: self.rng.gen_range(LANDING_X),
            y: self.rng.gen_range(LANDING_Y),
        }
    }
}

impl Simulation for Slingshot {
    type Event = Expense;

    fn advance(&mut self, dt: f32, now_ms: f64, events: &mut Vec<Expense>) {
        if matches!(self.phase, SlingshotPhase::Idle | SlingshotPhase::Dragging) {
            return;
        }
        let (position, velocity) =
            spring_step_2d(self.position, self.velocity, self.target, &SNAPPY, dt);
        self.position = position;
        self.velocity = velocity;

        if !is_settled_2d(position, velocity, self.target, LAUNCH_SETTLE_THRESHOLD) {
            return;
        }
        if self.target.y < LAUNCH_TARGET_CUTOFF_Y {
            let expense = self.commit_expense(now_ms);
            log::info!(
                "[slingshot] launched {} {} ({})",
                expense.amount,
                expense.category.id(),
                expense.id
            );
            events.push(expense);
            self.target = Vec2::ZERO;
            self.velocity = Vec2::new(0.0, RETURN_BOUNCE_VELOCITY_Y);
            self.phase = SlingshotPhase::Returning;
        } else {
            self.amount = 0;
            self.phase = SlingshotPhase::Idle;
        }
    }
}
