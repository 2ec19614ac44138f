//! Background universe: a starfield and one glowing orb per expense.
//!
//! Purely reactive. Any change to the expense list or the viewport rebuilds
//! the orbs from scratch; the orbs then grow into their target size.

use crate::constants::{
    ORB_BASE_RADIUS, ORB_FIELD_HEIGHT, ORB_GLYPH_MIN_RADIUS, ORB_GROWTH_RATE, ORB_MAX_RADIUS,
    ORB_PULSE_AMPLITUDE, ORB_PULSE_RATE, ORB_RADIUS_PER_AMOUNT, ORB_TOP_MARGIN, STAR_COUNT,
    STAR_FIELD_HEIGHT, STAR_SEED,
};
use crate::driver::Simulation;
use crate::model::{Category, Expense};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::f32::consts::TAU;

#[inline]
pub fn orb_target_radius(amount: u32) -> f32 {
    (ORB_BASE_RADIUS + amount as f32 * ORB_RADIUS_PER_AMOUNT).min(ORB_MAX_RADIUS)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub brightness: f32,
    pub twinkle_speed: f32,
    pub twinkle_offset: f32,
}

impl Star {
    /// Alpha at `time_ms`.
    pub fn alpha(&self, time_ms: f64) -> f32 {
        let phase = time_ms * 0.001 * self.twinkle_speed as f64 + self.twinkle_offset as f64;
        self.brightness * (phase.sin() as f32 * 0.3 + 0.7)
    }
}

/// Deterministic field of `count` stars over the top of a `width`×`height` canvas.
pub fn generate_stars(count: usize, width: f32, height: f32) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(STAR_SEED);
    (0..count)
        .map(|_| Star {
            x: rng.gen::<f32>() * width,
            y: rng.gen::<f32>() * height * STAR_FIELD_HEIGHT,
            radius: rng.gen::<f32>() * 1.6 + 0.3,
            brightness: rng.gen::<f32>() * 0.4 + 0.3,
            twinkle_speed: rng.gen::<f32>() * 2.0 + 1.0,
            twinkle_offset: rng.gen::<f32>() * TAU,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseOrb {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub target_radius: f32,
    pub category: Category,
    pub opacity: f32,
    pub pulse_phase: f32,
}

impl ExpenseOrb {
    pub fn pulsed_radius(&self, time_ms: f64) -> f32 {
        let pulse = (time_ms * ORB_PULSE_RATE as f64 + self.pulse_phase as f64).sin() as f32;
        self.radius + pulse * ORB_PULSE_AMPLITUDE
    }

    pub fn shows_glyph(&self) -> bool {
        self.radius > ORB_GLYPH_MIN_RADIUS
    }
}

/// Expanding ring owned by the host (e.g. a landing splash).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ripple {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub max_radius: f32,
    pub opacity: f32,
    /// `rgb(r,g,b)`
    pub color: String,
}

impl Ripple {
    pub fn visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Thick while young, thinning as it expands.
    pub fn stroke_width(&self) -> f32 {
        let grown = if self.max_radius > 0.0 {
            (self.radius / self.max_radius).clamp(0.0, 1.0)
        } else {
            1.0
        };
        2.0 + (1.0 - grown) * 4.0
    }
}

pub struct Universe {
    width: f32,
    height: f32,
    wallet_mode: bool,
    expenses: Vec<Expense>,
    ripples: Vec<Ripple>,
    stars: Vec<Star>,
    orbs: Vec<ExpenseOrb>,
    time_ms: f64,
    rng: StdRng,
}

impl Universe {
    pub fn new(width: f32, height: f32, rng: StdRng) -> Self {
        let mut universe = Self {
            width,
            height,
            wallet_mode: false,
            expenses: Vec::new(),
            ripples: Vec::new(),
            stars: Vec::new(),
            orbs: Vec::new(),
            time_ms: 0.0,
            rng,
        };
        universe.rebuild_stars();
        universe
    }

    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::new(width, height, StdRng::seed_from_u64(seed))
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn orbs(&self) -> &[ExpenseOrb] {
        &self.orbs
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    pub fn wallet_mode(&self) -> bool {
        self.wallet_mode
    }

    /// Stars and nebula are hidden while a modal view (wallet mode) is up.
    pub fn shows_starfield(&self) -> bool {
        !self.wallet_mode
    }

    pub fn set_wallet_mode(&mut self, on: bool) {
        self.wallet_mode = on;
    }

    pub fn set_expenses(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
        self.rebuild_orbs();
    }

    pub fn set_ripples(&mut self, ripples: Vec<Ripple>) {
        self.ripples = ripples;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rebuild_stars();
        self.rebuild_orbs();
    }

    fn rebuild_stars(&mut self) {
        if self.width > 0.0 && self.height > 0.0 {
            self.stars = generate_stars(STAR_COUNT, self.width, self.height);
        }
    }

    fn rebuild_orbs(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.orbs = self
            .expenses
            .iter()
            .map(|e| ExpenseOrb {
                x: e.x * w,
                y: e.y * h * ORB_FIELD_HEIGHT + ORB_TOP_MARGIN,
                radius: 0.0,
                target_radius: orb_target_radius(e.amount),
                category: e.category,
                opacity: 0.8,
                pulse_phase: rng.gen::<f32>() * TAU,
            })
            .collect();
    }
}

impl Simulation for Universe {
    type Event = Infallible;

    fn advance(&mut self, dt: f32, _now_ms: f64, _events: &mut Vec<Infallible>) {
        self.time_ms += dt as f64 * 1000.0;
        for orb in &mut self.orbs {
            orb.radius += (orb.target_radius - orb.radius) * ORB_GROWTH_RATE * dt;
        }
    }
}
