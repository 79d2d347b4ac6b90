//! Simulation state
//!
//! Everything that changes between frames lives here. The state is a plain
//! value owned by whoever drives the loop and passed by reference into the
//! tick functions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Parameters;

/// Ball and platform state for one round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Ball center
    pub ball_position: Vec2,
    /// Ball velocity, magnitude kept at `Parameters::ball_speed`
    pub ball_velocity: Vec2,
    /// Horizontal center of the platform
    pub platform_position: f32,
}

impl SimulationState {
    /// Fresh round: ball at the origin heading up-right, platform centered
    pub fn reset(params: &Parameters) -> Self {
        let speed = params.ball_speed;
        Self {
            ball_position: Vec2::ZERO,
            ball_velocity: Vec2::new(speed, speed).normalize_or_zero() * speed,
            platform_position: 0.0,
        }
    }

    /// Current ball speed
    #[inline]
    pub fn ball_speed(&self) -> f32 {
        self.ball_velocity.length()
    }
}

/// Start a new round (free-function form of `SimulationState::reset`)
#[inline]
pub fn reset(params: &Parameters) -> SimulationState {
    SimulationState::reset(params)
}
