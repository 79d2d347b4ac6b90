//! Per-frame simulation step
//!
//! Order within a frame is fixed: platform, then ball and walls, then the
//! platform collision. The collision check must see this frame's platform
//! position and the ball after wall resolution.

use super::collision::{
    WallContact, ball_below_floor, ball_platform_overlap, platform_bounce_velocity,
    resolve_side_walls, resolve_top_wall,
};
use super::rng::RandomRange;
use super::state::SimulationState;
use crate::clamp_lenient;
use crate::consts::BOUNCE_ANGLE_DEG;
use crate::settings::Parameters;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Horizontal axis, conventionally in [-1, 1]
    pub axis: f32,
}

impl TickInput {
    pub fn axis(axis: f32) -> Self {
        Self { axis }
    }
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Ball bounced off a side wall
    pub wall_x: bool,
    /// Ball bounced off the top wall
    pub wall_top: bool,
    /// Ball fell past the platform and the round was reset
    pub round_lost: bool,
    /// Ball bounced off the platform
    pub platform_hit: bool,
}

/// Move the platform by the input axis and keep it inside the arena
pub fn update_platform(state: &mut SimulationState, params: &Parameters, axis: f32, dt: f32) {
    let (min, max) = params.platform_travel();
    let moved = state.platform_position + axis * params.platform_speed * dt;
    state.platform_position = clamp_lenient(moved, min, max);
}

/// Move the ball, bounce it off the walls and reset the round on a miss
pub fn update_ball(state: &mut SimulationState, params: &Parameters, dt: f32) -> WallContact {
    state.ball_position += state.ball_velocity * dt;

    let side = resolve_side_walls(&mut state.ball_position, &mut state.ball_velocity, params);
    let top = resolve_top_wall(&mut state.ball_position, &mut state.ball_velocity, params);

    let floor = ball_below_floor(state.ball_position, params);
    if floor {
        *state = SimulationState::reset(params);
    }

    WallContact { side, top, floor }
}

/// Bounce the ball off the platform if they overlap
///
/// Returns true on a hit. The bounce always sends the ball upward, even if it
/// was already rising, so a ball that sank into the platform can't get stuck.
pub fn check_collision<R: RandomRange + ?Sized>(
    state: &mut SimulationState,
    params: &Parameters,
    rng: &mut R,
) -> bool {
    if !ball_platform_overlap(state.ball_position, state.platform_position, params) {
        return false;
    }

    let angle = rng.range(-BOUNCE_ANGLE_DEG, BOUNCE_ANGLE_DEG);
    state.ball_velocity = platform_bounce_velocity(state.ball_velocity, angle, params.ball_speed);
    state.ball_position.y = params.platform_rest_y();
    true
}

/// Advance the simulation by one frame
pub fn step<R: RandomRange + ?Sized>(
    state: &mut SimulationState,
    params: &Parameters,
    input: &TickInput,
    dt: f32,
    rng: &mut R,
) -> FrameReport {
    update_platform(state, params, input.axis, dt);
    let contact = update_ball(state, params, dt);
    let platform_hit = check_collision(state, params, rng);

    FrameReport {
        wall_x: contact.side,
        wall_top: contact.top,
        round_lost: contact.floor,
        platform_hit,
    }
}
