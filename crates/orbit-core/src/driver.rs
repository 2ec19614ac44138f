//! Frame timing and the simulation contract every view's loop drives.
//!
//! A front-end owns the scheduling (requestAnimationFrame on the web, a fixed
//! step in the headless runner); the simulations only see a clamped `dt`.

use crate::constants::MAX_FRAME_DT;
use instant::Instant;
use std::time::Duration;

/// Clamp a raw frame delta (seconds) into `[0, MAX_FRAME_DT]`.
#[inline]
pub fn clamp_dt(seconds: f32) -> f32 {
    if seconds.is_finite() {
        seconds.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Measures time between ticks of one loop.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::starting_at(Instant::now())
    }
}

impl FrameClock {
    pub fn starting_at(start: Instant) -> Self {
        Self { last: start }
    }

    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Returns the clamped seconds since the previous tick. A `now` earlier
    /// than the previous tick yields 0.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let raw = if now > self.last {
            now - self.last
        } else {
            Duration::ZERO
        };
        self.last = now;
        clamp_dt(raw.as_secs_f32())
    }
}

/// One view's physics. `advance` is called exactly once per frame, before
/// painting, and pushes any domain events the frame produced.
pub trait Simulation {
    type Event;

    fn advance(&mut self, dt: f32, now_ms: f64, events: &mut Vec<Self::Event>);
}

/// Step `sim` for `frames` frames of `dt` seconds starting at wall-clock
/// `start_ms`, collecting every event.
pub fn run_fixed<S: Simulation>(sim: &mut S, dt: f32, frames: usize, start_ms: f64) -> Vec<S::Event> {
    let dt = clamp_dt(dt);
    let mut events = Vec::new();
    for frame in 0..frames {
        let now_ms = start_ms + frame as f64 * dt as f64 * 1000.0;
        sim.advance(dt, now_ms, &mut events);
    }
    events
}
