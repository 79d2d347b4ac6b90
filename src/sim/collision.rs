//! Collision detection and response for the rectangular arena
//!
//! Walls reflect by flipping one velocity component and pinning the ball to
//! the boundary. The platform always sends the ball upward and adds a small
//! random deflection.

use glam::Vec2;

use crate::settings::Parameters;

/// Which boundaries the ball touched during one ball update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Bounced off the left or right wall
    pub side: bool,
    /// Bounced off the top wall
    pub top: bool,
    /// Fell below the floor line
    pub floor: bool,
}

/// Reflect off the side walls. Returns true if a bounce happened.
pub fn resolve_side_walls(pos: &mut Vec2, vel: &mut Vec2, params: &Parameters) -> bool {
    let limit = params.wall_x();
    if pos.x.abs() > limit {
        vel.x = -vel.x;
        pos.x = if pos.x >= 0.0 { limit } else { -limit };
        return true;
    }
    false
}

/// Reflect off the top wall. Returns true if a bounce happened.
pub fn resolve_top_wall(pos: &mut Vec2, vel: &mut Vec2, params: &Parameters) -> bool {
    let limit = params.ceiling_y();
    if pos.y > limit {
        vel.y = -vel.y;
        pos.y = limit;
        return true;
    }
    false
}

/// True once the ball center has dropped strictly below the floor line
#[inline]
pub fn ball_below_floor(pos: Vec2, params: &Parameters) -> bool {
    pos.y < params.floor_y()
}

/// Platform hit test (x range is inclusive at both edges)
pub fn ball_platform_overlap(pos: Vec2, platform_x: f32, params: &Parameters) -> bool {
    let half = params.platform_width / 2.0;
    pos.y - params.ball_radius <= params.platform_top()
        && pos.x >= platform_x - half
        && pos.x <= platform_x + half
}

/// Velocity after a platform bounce
///
/// Forces the ball upward, rotates counter-clockwise by `angle_deg` and
/// restores the configured speed.
pub fn platform_bounce_velocity(vel: Vec2, angle_deg: f32, speed: f32) -> Vec2 {
    let upward = Vec2::new(vel.x, vel.y.abs());
    let rotated = Vec2::from_angle(angle_deg.to_radians()).rotate(upward);
    rotated.normalize_or_zero() * speed
}
