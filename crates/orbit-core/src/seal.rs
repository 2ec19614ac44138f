//! Press-and-hold confirmation ("seal").
//!
//! Holding fills a ring through the heavy spring, so the fill lags the press
//! and drains on an early release. Reaching [`SEAL_COMPLETE_PROGRESS`] while
//! still holding latches completion and starts the shatter spring. The next
//! press both acknowledges the completion and starts a fresh session.

use crate::constants::{
    SEAL_COMPLETE_PROGRESS, SHATTER_PARTICLE_COUNT, SHATTER_SIZE, SHATTER_SPEED,
};
use crate::driver::Simulation;
use crate::spring::{spring_step, HEAVY, SHATTER};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

/// Everything the seal animates. `completed` latches for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoldState {
    pub hold_progress: f32,
    pub hold_velocity: f32,
    pub shatter_progress: f32,
    pub shatter_velocity: f32,
    pub holding: bool,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SealPhase {
    Idle,
    Holding,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SealEvent {
    /// Fired once per session. Hosts pulse haptics and proceed with the
    /// real transaction.
    Completed,
}

/// Fragment thrown inward from the ring when the seal shatters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShatterParticle {
    pub angle: f32,
    pub speed: f32,
    pub size: f32,
}

pub struct Seal {
    state: HoldState,
    particles: Vec<ShatterParticle>,
}

impl Seal {
    pub fn new(mut rng: StdRng) -> Self {
        let particles = (0..SHATTER_PARTICLE_COUNT)
            .map(|i| ShatterParticle {
                angle: (i as f32 / SHATTER_PARTICLE_COUNT as f32) * TAU,
                speed: rng.gen_range(SHATTER_SPEED),
                size: rng.gen_range(SHATTER_SIZE),
            })
            .collect();
        Self {
            state: HoldState::default(),
            particles,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn state(&self) -> &HoldState {
        &self.state
    }

    pub fn particles(&self) -> &[ShatterParticle] {
        &self.particles
    }

    pub fn phase(&self) -> SealPhase {
        if self.state.completed {
            SealPhase::Completed
        } else if self.state.holding {
            SealPhase::Holding
        } else {
            SealPhase::Idle
        }
    }

    pub fn pointer_down(&mut self) {
        if self.state.completed {
            log::debug!("[seal] acknowledged, new session");
            self.state = HoldState::default();
        }
        self.state.holding = true;
    }

    /// Pointer up, cancel, or leave.
    pub fn pointer_up(&mut self) {
        self.state.holding = false;
    }
}

impl Simulation for Seal {
    type Event = SealEvent;

    fn advance(&mut self, dt: f32, _now_ms: f64, events: &mut Vec<SealEvent>) {
        let s = &mut self.state;
        let hold_target = if s.holding || s.completed { 1.0 } else { 0.0 };
        let (p, v) = spring_step(s.hold_progress, s.hold_velocity, hold_target, &HEAVY, dt);
        s.hold_progress = p.clamp(0.0, 1.0);
        s.hold_velocity = v;

        if s.hold_progress >= SEAL_COMPLETE_PROGRESS && s.holding && !s.completed {
            s.completed = true;
            s.shatter_progress = 0.0;
            s.shatter_velocity = 0.0;
            log::info!("[seal] sealed");
            events.push(SealEvent::Completed);
        }

        if s.completed {
            let (p, v) = spring_step(s.shatter_progress, s.shatter_velocity, 1.0, &SHATTER, dt);
            s.shatter_progress = p.clamp(0.0, 1.0);
            s.shatter_velocity = v;
        }
    }
}
