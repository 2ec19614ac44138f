//! Damped harmonic oscillator stepping.
//!
//! Gesture-driven values (the slingshot puck, seal progress, bubble sizes) have
//! mass, stiffness and damping and are advanced with semi-implicit Euler, so
//! the velocity update feeds the position update of the same step.

use crate::OrbitError;
use glam::Vec2;

/// Physical parameters of a spring. Presets cover every interaction in the app;
/// custom springs go through [`SpringConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
}

/// Quick, slightly bouncy; the slingshot puck.
pub const SNAPPY: SpringConfig = SpringConfig {
    mass: 1.0,
    stiffness: 300.0,
    damping: 22.0,
};

/// Soft settle; bubble sizes in the gravity well.
pub const GENTLE: SpringConfig = SpringConfig {
    mass: 1.2,
    stiffness: 180.0,
    damping: 18.0,
};

/// Resists the press; seal hold progress.
pub const HEAVY: SpringConfig = SpringConfig {
    mass: 1.4,
    stiffness: 140.0,
    damping: 16.0,
};

/// Seal dissolve after completion.
pub const SHATTER: SpringConfig = SpringConfig {
    mass: 1.0,
    stiffness: 260.0,
    damping: 22.0,
};

impl SpringConfig {
    pub fn new(mass: f32, stiffness: f32, damping: f32) -> Result<Self, OrbitError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(OrbitError::InvalidSpring {
                field: "mass",
                value: mass,
            });
        }
        if !(stiffness.is_finite() && stiffness > 0.0) {
            return Err(OrbitError::InvalidSpring {
                field: "stiffness",
                value: stiffness,
            });
        }
        if !(damping.is_finite() && damping >= 0.0) {
            return Err(OrbitError::InvalidSpring {
                field: "damping",
                value: damping,
            });
        }
        Ok(Self {
            mass,
            stiffness,
            damping,
        })
    }

    /// Damping ratio; 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Advance a scalar spring by `dt` seconds. Returns `(position, velocity)`.
///
/// `dt` should already be clamped (see [`crate::FrameClock`]).
#[inline]
pub fn spring_step(
    position: f32,
    velocity: f32,
    target: f32,
    config: &SpringConfig,
    dt: f32,
) -> (f32, f32) {
    let displacement = position - target;
    let spring_force = -config.stiffness * displacement;
    let damping_force = -config.damping * velocity;
    let acceleration = (spring_force + damping_force) / config.mass;
    let new_velocity = velocity + acceleration * dt;
    let new_position = position + new_velocity * dt;
    (new_position, new_velocity)
}

/// Both distance to target and speed are strictly below `threshold`.
///
/// [`DEFAULT_SETTLE_THRESHOLD`](crate::constants::DEFAULT_SETTLE_THRESHOLD) suits pixel-scale springs.
#[inline]
pub fn is_settled(position: f32, velocity: f32, target: f32, threshold: f32) -> bool {
    (position - target).abs() < threshold && velocity.abs() < threshold
}

/// Per-axis [`spring_step`]; the axes do not interact.
#[inline]
pub fn spring_step_2d(
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    config: &SpringConfig,
    dt: f32,
) -> (Vec2, Vec2) {
    let (px, vx) = spring_step(position.x, velocity.x, target.x, config, dt);
    let (py, vy) = spring_step(position.y, velocity.y, target.y, config, dt);
    (Vec2::new(px, py), Vec2::new(vx, vy))
}

#[inline]
pub fn is_settled_2d(position: Vec2, velocity: Vec2, target: Vec2, threshold: f32) -> bool {
    is_settled(position.x, velocity.x, target.x, threshold)
        && is_settled(position.y, velocity.y, target.y, threshold)
}
