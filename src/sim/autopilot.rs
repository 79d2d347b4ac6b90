//! Demo input source
//!
//! Steers the platform under the ball so the game can run unattended.

use super::state::SimulationState;
use crate::settings::Parameters;

/// Horizontal axis that moves the platform toward the ball's x
///
/// Saturates at full deflection when the gap is larger than one frame of
/// platform travel, and eases in proportionally when closer.
pub fn autopilot_axis(state: &SimulationState, params: &Parameters, dt: f32) -> f32 {
    let reach = params.platform_speed * dt;
    if reach <= 0.0 {
        return 0.0;
    }
    let gap = state.ball_position.x - state.platform_position;
    (gap / reach).clamp(-1.0, 1.0)
}
