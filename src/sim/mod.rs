//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Randomness only through `RandomRange`
//! - State passed explicitly, no globals
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_axis;
pub use collision::WallContact;
pub use rng::{FixedRandom, RandomRange, SeededRandom, SequenceRandom};
pub use state::{SimulationState, reset};
pub use tick::{FrameReport, TickInput, check_collision, step, update_ball, update_platform};
