//! Host renderer collaborator
//!
//! The game draws three flat quads: a static background, the ball and the
//! platform. The host engine owns the actual drawing; this module only says
//! what to create and where to put it each frame.

pub mod headless;

pub use headless::LogRenderer;

use glam::{Vec2, Vec3};

use crate::settings::Parameters;
use crate::sim::SimulationState;

pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const BALL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const PLATFORM_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Background sits behind the play plane
pub const BACKGROUND_DEPTH: f32 = 1.0;

/// Description of a flat colored quad
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    pub name: &'static str,
    pub position: Vec3,
    /// Width and height in world units
    pub scale: Vec2,
    pub color: [f32; 4],
}

/// Drawing backend supplied by the host
pub trait Renderer {
    type Handle: Copy;

    fn create_quad(&mut self, quad: &Quad) -> Self::Handle;
    fn set_position(&mut self, handle: Self::Handle, position: Vec3);
    fn destroy_quad(&mut self, handle: Self::Handle);
}

/// Ball quad position, shifted right by the tilt factor
pub fn ball_visual_position(state: &SimulationState, params: &Parameters) -> Vec3 {
    Vec3::new(
        state.ball_position.x + params.tilt_factor,
        state.ball_position.y,
        0.0,
    )
}

/// Platform quad position, shifted left by the tilt factor
pub fn platform_visual_position(state: &SimulationState, params: &Parameters) -> Vec3 {
    Vec3::new(
        state.platform_position - params.tilt_factor,
        -params.half_height() + params.platform_height / 2.0,
        0.0,
    )
}

/// Handles to the quads of one session
#[derive(Debug, Clone, Copy)]
pub struct Visuals<H> {
    pub background: H,
    pub ball: H,
    pub platform: H,
}

impl<H: Copy> Visuals<H> {
    /// Create the background, ball and platform quads
    pub fn create<R: Renderer<Handle = H> + ?Sized>(renderer: &mut R, params: &Parameters) -> Self {
        let background = renderer.create_quad(&Quad {
            name: "Background",
            position: Vec3::new(0.0, 0.0, BACKGROUND_DEPTH),
            scale: Vec2::new(params.screen_width, params.screen_height),
            color: BACKGROUND_COLOR,
        });
        let ball = renderer.create_quad(&Quad {
            name: "Ball",
            position: Vec3::ZERO,
            scale: Vec2::splat(params.ball_radius * 2.0),
            color: BALL_COLOR,
        });
        let platform = renderer.create_quad(&Quad {
            name: "Platform",
            position: Vec3::new(0.0, -params.half_height(), 0.0),
            scale: Vec2::new(params.platform_width, params.platform_height),
            color: PLATFORM_COLOR,
        });

        Self {
            background,
            ball,
            platform,
        }
    }

    /// Move the ball and platform quads to match the simulation
    pub fn sync<R: Renderer<Handle = H> + ?Sized>(
        &self,
        renderer: &mut R,
        state: &SimulationState,
        params: &Parameters,
    ) {
        renderer.set_position(self.ball, ball_visual_position(state, params));
        renderer.set_position(self.platform, platform_visual_position(state, params));
    }

    pub fn release<R: Renderer<Handle = H> + ?Sized>(self, renderer: &mut R) {
        renderer.destroy_quad(self.background);
        renderer.destroy_quad(self.ball);
        renderer.destroy_quad(self.platform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_positions_apply_tilt() {
        let params = Parameters::default();
        let state = SimulationState {
            ball_position: Vec2::new(1.0, 2.0),
            ball_velocity: Vec2::ZERO,
            platform_position: -1.5,
        };
        assert_eq!(ball_visual_position(&state, &params), Vec3::new(1.5, 2.0, 0.0));
        assert_eq!(platform_visual_position(&state, &params), Vec3::new(-2.0, -4.75, 0.0));
    }

    #[test]
    fn test_zero_tilt_tracks_simulation() {
        let params = Parameters {
            tilt_factor: 0.0,
            ..Default::default()
        };
        let state = SimulationState::reset(&params);
        assert_eq!(ball_visual_position(&state, &params), Vec3::ZERO);
        assert_eq!(platform_visual_position(&state, &params).x, 0.0);
    }

    #[test]
    fn test_visuals_lifecycle() {
        let params = Parameters::default();
        let mut renderer = LogRenderer::new();
        let visuals = Visuals::create(&mut renderer, &params);
        assert_eq!(renderer.live_quads(), 3);

        let background = renderer.quad(visuals.background).unwrap();
        assert_eq!(background.scale, Vec2::new(10.0, 10.0));
        assert_eq!(background.position.z, BACKGROUND_DEPTH);
        assert_eq!(renderer.quad(visuals.ball).unwrap().scale, Vec2::splat(0.5));
        assert_eq!(renderer.quad(visuals.platform).unwrap().color, PLATFORM_COLOR);

        let mut state = SimulationState::reset(&params);
        state.ball_position = Vec2::new(-2.0, 3.0);
        state.platform_position = 1.0;
        visuals.sync(&mut renderer, &state, &params);
        assert_eq!(
            renderer.quad(visuals.ball).unwrap().position,
            Vec3::new(-1.5, 3.0, 0.0)
        );
        assert_eq!(
            renderer.quad(visuals.platform).unwrap().position,
            Vec3::new(0.5, -4.75, 0.0)
        );
        // Background never moves
        assert_eq!(renderer.quad(visuals.background).unwrap().position.x, 0.0);

        visuals.release(&mut renderer);
        assert_eq!(renderer.live_quads(), 0);
    }
}
