//! Tilt Pong - a minimal ping-pong arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, walls, platform, round reset)
//! - `renderer`: Host renderer collaborator (quads positioned each frame)
//! - `session`: Lifecycle driver (initialize, per-frame update, shutdown)
//! - `settings`: Session parameters and their JSON configuration

pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Parameters;

/// Game configuration constants
pub mod consts {
    /// Frame timestep used by the native driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Maximum deflection applied on a platform bounce (degrees, either way)
    pub const BOUNCE_ANGLE_DEG: f32 = 15.0;

    /// Deployment defaults for `Parameters`
    pub const DEFAULT_BALL_SPEED: f32 = 5.0;
    pub const DEFAULT_PLATFORM_SPEED: f32 = 10.0;
    pub const DEFAULT_TILT_FACTOR: f32 = 0.5;
    pub const DEFAULT_SCREEN_WIDTH: f32 = 10.0;
    pub const DEFAULT_SCREEN_HEIGHT: f32 = 10.0;
    pub const DEFAULT_PLATFORM_WIDTH: f32 = 2.0;
    pub const DEFAULT_PLATFORM_HEIGHT: f32 = 0.5;
    pub const DEFAULT_BALL_RADIUS: f32 = 0.25;
}

/// Clamp that tolerates inverted bounds instead of panicking like `f32::clamp`
///
/// The lower bound is tested first, so with `min > max` every value below
/// `min` lands on `min` and everything else on `max`.
#[inline]
pub fn clamp_lenient(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
