//! Session lifecycle
//!
//! Ties the simulation to a renderer and a random source. The host loop
//! calls `frame` once per rendered frame; the session never owns the loop.

use crate::renderer::{Renderer, Visuals};
use crate::settings::Parameters;
use crate::sim::{FrameReport, RandomRange, SimulationState, TickInput, step};

/// One play session: parameters, state, visuals and randomness
pub struct Session<R: Renderer, G: RandomRange> {
    params: Parameters,
    state: SimulationState,
    renderer: R,
    rng: G,
    visuals: Visuals<R::Handle>,
    rounds: u32,
    frames: u64,
}

impl<R: Renderer, G: RandomRange> Session<R, G> {
    /// Create the visuals and start the first round
    pub fn initialize(params: Parameters, mut renderer: R, rng: G) -> Self {
        let visuals = Visuals::create(&mut renderer, &params);
        let state = SimulationState::reset(&params);
        visuals.sync(&mut renderer, &state, &params);

        log::info!(
            "Session started: arena {}x{}, ball speed {}",
            params.screen_width,
            params.screen_height,
            params.ball_speed
        );

        Self {
            params,
            state,
            renderer,
            rng,
            visuals,
            rounds: 1,
            frames: 0,
        }
    }

    /// Advance one frame and move the visuals to match
    pub fn frame(&mut self, input: &TickInput, dt: f32) -> FrameReport {
        let report = step(&mut self.state, &self.params, input, dt, &mut self.rng);
        self.visuals.sync(&mut self.renderer, &self.state, &self.params);
        self.frames += 1;

        if report.platform_hit {
            log::debug!(
                "Platform hit at x={:.2}, new velocity ({:.2}, {:.2})",
                self.state.ball_position.x,
                self.state.ball_velocity.x,
                self.state.ball_velocity.y
            );
        }
        if report.round_lost {
            log::info!("Ball missed after frame {}, round {} starts", self.frames, self.rounds + 1);
            self.rounds += 1;
        }

        report
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn visuals(&self) -> &Visuals<R::Handle> {
        &self.visuals
    }

    /// Rounds played so far, including the current one
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Release the visuals and hand the renderer back to the host
    pub fn shutdown(mut self) -> R {
        self.visuals.release(&mut self.renderer);
        log::info!("Session ended after {} frames, {} rounds", self.frames, self.rounds);
        self.renderer
    }
}
