//! Physics and gesture state for the Orbit views.
//!
//! Nothing here touches a rendering surface: each simulation is advanced with
//! a clamped `dt` through [`Simulation::advance`] and exposes read-only state
//! for a front-end to paint.

pub mod constants;
pub mod driver;
pub mod error;
pub mod gravity_well;
pub mod model;
pub mod seal;
pub mod slingshot;
pub mod spring;
pub mod universe;

pub use driver::*;
pub use error::OrbitError;
pub use gravity_well::{Bubble, GravityWell, Settlement, StreamLine};
pub use model::*;
pub use seal::{HoldState, Seal, SealEvent, SealPhase, ShatterParticle};
pub use slingshot::{Slingshot, SlingshotPhase};
pub use spring::*;
pub use universe::{ExpenseOrb, Ripple, Star, Universe};
