//! Gravity-well debt settling.
//!
//! Each group member is a bubble sized by the magnitude of their balance.
//! Bubbles drift toward the middle of the canvas and push each other apart;
//! dragging one bubble onto another settles as much debt between the two as
//! their balances allow.
//!
//! Positions use their own per-frame physics (centre pull, pairwise repulsion,
//! multiplicative damping). Only bubble radii go through the spring stepper.

use crate::constants::{
    BASE_BUBBLE_RADIUS, CENTER_ATTRACTION, COLLISION_MARGIN, MIN_SEPARATION, RADIUS_PER_BALANCE,
    REPULSION_MARGIN, REPULSION_STIFFNESS, STREAM_FLOW_RATE, STREAM_LIFETIME_MS,
    VELOCITY_RETENTION, WELL_CENTER_LIFT, WELL_SPREAD_FRACTION,
};
use crate::driver::Simulation;
use crate::model::{GroupUser, UserId};
use crate::spring::{spring_step, GENTLE};
use fnv::FnvHashMap;
use glam::Vec2;
use serde::Serialize;
use smallvec::SmallVec;
use std::convert::Infallible;
use std::f32::consts::{FRAC_PI_2, TAU};

#[inline]
pub fn radius_for_balance(balance: f64) -> f32 {
    BASE_BUBBLE_RADIUS + balance.abs() as f32 * RADIUS_PER_BALANCE
}

/// Settle between two balances. Returns `(from, to, transferred)`.
///
/// Value only moves when one side owes (negative) and the other is owed
/// (positive); the transfer is the smaller of the two magnitudes.
pub fn settle_balances(from: f64, to: f64) -> (f64, f64, f64) {
    if from < 0.0 && to > 0.0 {
        let transfer = from.abs().min(to);
        (from + transfer, to - transfer, transfer)
    } else if from > 0.0 && to < 0.0 {
        let transfer = from.min(to.abs());
        (from - transfer, to + transfer, transfer)
    } else {
        (from, to, 0.0)
    }
}

/// Velocity impulse pushing `b` away from `a` this frame, or `None` when the
/// pair is far enough apart. `a` receives the negation. Coincident centres
/// are pushed apart along +x.
#[inline]
pub fn repulsion_impulse(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32, dt: f32) -> Option<Vec2> {
    let delta = b - a;
    let dist = delta.length().max(MIN_SEPARATION);
    let min_dist = radius_a + radius_b + REPULSION_MARGIN;
    if dist >= min_dist {
        return None;
    }
    let normal = delta.try_normalize().unwrap_or(Vec2::X);
    let force = (min_dist - dist) * REPULSION_STIFFNESS;
    Some(normal * force * dt)
}

#[derive(Clone, Debug)]
pub struct Bubble {
    pub user: GroupUser,
    pub position: Vec2,
    /// px per frame
    pub velocity: Vec2,
    pub radius: f32,
    pub radius_velocity: f32,
    pub target_radius: f32,
}

impl StreamLine {
    #[inline]
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms - self.created_ms >= STREAM_LIFETIME_MS as f64
    }
}

impl Bubble {
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.position).length_squared() < self.radius * self.radius
    }
}

/// Decorative flow between two settled bubbles. Each stream lives for
/// [`STREAM_LIFETIME_MS`] from its own creation; duplicates for the same
/// pair are harmless and expire independently.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamLine {
    pub id: u64,
    pub created_ms: f64,
    pub from_id: UserId,
    pub to_id: UserId,
    /// Cycles through [0, 1).
    pub progress: f32,
    pub opacity: f32,
}

/// Result of dropping one bubble onto another.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub from_id: UserId,
    pub to_id: UserId,
    /// Zero when the balances did not oppose.
    pub transfer: f64,
    /// Every user after the transfer.
    pub users: Vec<GroupUser>,
}

#[derive(Clone, Debug)]
struct Grip {
    user_id: UserId,
    offset: Vec2,
}

pub struct GravityWell {
    users: Vec<GroupUser>,
    bubbles: Vec<Bubble>,
    by_id: FnvHashMap<UserId, usize>,
    streams: SmallVec<[StreamLine; 4]>,
    next_stream_id: u64,
    grip: Option<Grip>,
    width: f32,
    height: f32,
}

impl GravityWell {
    pub fn new(users: Vec<GroupUser>, width: f32, height: f32) -> Self {
        let mut well = Self {
            users,
            bubbles: Vec::new(),
            by_id: FnvHashMap::default(),
            streams: SmallVec::new(),
            next_stream_id: 0,
            grip: None,
            width,
            height,
        };
        well.reseed();
        well
    }

    pub fn users(&self) -> &[GroupUser] {
        &self.users
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn streams(&self) -> &[StreamLine] {
        &self.streams
    }

    pub fn bubble(&self, id: &str) -> Option<&Bubble> {
        self.by_id.get(id).and_then(|&i| self.bubbles.get(i))
    }

    pub fn dragged_id(&self) -> Option<&str> {
        self.grip.as_ref().map(|g| g.user_id.as_str())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0 - WELL_CENTER_LIFT)
    }

    /// New viewport: bubbles are re-seeded, not animated.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.reseed();
    }

    /// Replace the working copy of the group and re-seed.
    pub fn set_users(&mut self, users: Vec<GroupUser>) {
        self.users = users;
        self.reseed();
    }

    fn reseed(&mut self) {
        self.bubbles.clear();
        self.by_id.clear();
        self.grip = None;
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let center = self.center();
        let spread = self.width.min(self.height) * WELL_SPREAD_FRACTION;
        let n = self.users.len() as f32;
        for (i, user) in self.users.iter().enumerate() {
            let angle = (i as f32 / n) * TAU - FRAC_PI_2;
            self.by_id.insert(user.id.clone(), i);
            self.bubbles.push(Bubble {
                user: user.clone(),
                position: center + Vec2::new(angle.cos(), angle.sin()) * spread,
                velocity: Vec2::ZERO,
                radius: 0.0,
                radius_velocity: 0.0,
                target_radius: radius_for_balance(user.balance),
            });
        }
        log::debug!("[well] seeded {} bubbles", self.bubbles.len());
    }

    /// First bubble (in seeding order) under `point`.
    pub fn bubble_at(&self, point: Vec2) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.contains(point))
    }

    /// Grab the bubble under `point`, if any. Returns whether one was grabbed.
    pub fn pointer_down(&mut self, point: Vec2) -> bool {
        let Some(grip) = self.bubble_at(point).map(|b| Grip {
            user_id: b.user.id.clone(),
            offset: point - b.position,
        }) else {
            return false;
        };
        log::debug!("[well] grab {}", grip.user_id);
        self.grip = Some(grip);
        true
    }

    pub fn pointer_move(&mut self, point: Vec2) {
        let Some(grip) = &self.grip else {
            return;
        };
        let Some(&i) = self.by_id.get(&grip.user_id) else {
            return;
        };
        if let Some(bubble) = self.bubbles.get_mut(i) {
            bubble.position = point - grip.offset;
            bubble.velocity = Vec2::ZERO;
        }
    }

    /// Drop the dragged bubble at wall-clock `now_ms`. Landing within reach
    /// of another bubble settles the pair and starts a stream between them,
    /// removed by [`Self::expire_due`] once its lifetime is up.
    pub fn pointer_up(&mut self, now_ms: f64) -> Option<Settlement> {
        let grip = self.grip.take()?;
        let dragged = self.bubble(&grip.user_id)?;
        let other_id = self
            .bubbles
            .iter()
            .filter(|o| o.user.id != dragged.user.id)
            .find(|o| {
                dragged.position.distance(o.position)
                    < dragged.radius + o.radius + COLLISION_MARGIN
            })
            .map(|o| o.user.id.clone())?;

        let settlement = self.settle(&grip.user_id, &other_id)?;
        self.next_stream_id += 1;
        self.streams.push(StreamLine {
            id: self.next_stream_id,
            created_ms: now_ms,
            from_id: grip.user_id,
            to_id: other_id,
            progress: 0.0,
            opacity: 1.0,
        });
        Some(settlement)
    }

    /// Apply [`settle_balances`] between two users and refresh every bubble's
    /// user record and target size.
    pub fn settle(&mut self, from_id: &str, to_id: &str) -> Option<Settlement> {
        let from = self.users.iter().position(|u| u.id == from_id)?;
        let to = self.users.iter().position(|u| u.id == to_id)?;
        let (from_balance, to_balance, transfer) =
            settle_balances(self.users[from].balance, self.users[to].balance);
        self.users[from].balance = from_balance;
        self.users[to].balance = to_balance;

        for bubble in &mut self.bubbles {
            if let Some(user) = self.users.iter().find(|u| u.id == bubble.user.id) {
                bubble.target_radius = radius_for_balance(user.balance);
                bubble.user = user.clone();
            }
        }
        log::info!(
            "[well] settled {} -> {}: transfer={} ({} / {})",
            from_id,
            to_id,
            transfer,
            from_balance,
            to_balance
        );
        Some(Settlement {
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            transfer,
            users: self.users.clone(),
        })
    }

    /// Remove every stream whose lifetime has run out by `now_ms`. Returns
    /// how many were removed.
    pub fn expire_due(&mut self, now_ms: f64) -> usize {
        let before = self.streams.len();
        self.streams.retain(|s| !s.is_due(now_ms));
        before - self.streams.len()
    }

    /// Both endpoints of a stream, or `None` if either bubble is gone.
    pub fn stream_endpoints(&self, stream: &StreamLine) -> Option<(&Bubble, &Bubble)> {
        Some((self.bubble(&stream.from_id)?, self.bubble(&stream.to_id)?))
    }

    fn apply_repulsion(&mut self, dt: f32) {
        let n = self.bubbles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&self.bubbles[i], &self.bubbles[j]);
                if let Some(impulse) =
                    repulsion_impulse(a.position, a.radius, b.position, b.radius, dt)
                {
                    self.bubbles[i].velocity -= impulse;
                    self.bubbles[j].velocity += impulse;
                }
            }
        }
    }
}

impl Simulation for GravityWell {
    type Event = Infallible;

    fn advance(&mut self, dt: f32, now_ms: f64, _events: &mut Vec<Infallible>) {
        self.expire_due(now_ms);
        self.apply_repulsion(dt);

        let center = self.center();
        let dragged = self.grip.as_ref().map(|g| g.user_id.as_str());
        for bubble in &mut self.bubbles {
            let (r, rv) = spring_step(
                bubble.radius,
                bubble.radius_velocity,
                bubble.target_radius,
                &GENTLE,
                dt,
            );
            bubble.radius = r.max(0.0);
            bubble.radius_velocity = rv;

            if dragged == Some(bubble.user.id.as_str()) {
                continue;
            }
            bubble.velocity += (center - bubble.position) * CENTER_ATTRACTION * dt;
            bubble.velocity *= VELOCITY_RETENTION;
            bubble.position += bubble.velocity;
        }

        for stream in &mut self.streams {
            stream.progress = (stream.progress + dt * STREAM_FLOW_RATE) % 1.0;
        }
    }
}
