//! Session parameters
//!
//! Set once before a session starts and read-only afterwards. Stored as a
//! JSON file next to the binary when customised; every field is optional in
//! the file and falls back to the deployment default.
//!
//! Parameters are not validated. A platform wider than the arena or a ball
//! taller than half the arena produces odd play, never a panic.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable session parameters (all positive, in world units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Ball speed magnitude (units/sec), constant for the whole session
    pub ball_speed: f32,
    /// Platform speed at full input deflection (units/sec)
    pub platform_speed: f32,
    /// Visual-only horizontal offset, applied oppositely to ball and platform
    pub tilt_factor: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub ball_radius: f32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            ball_speed: DEFAULT_BALL_SPEED,
            platform_speed: DEFAULT_PLATFORM_SPEED,
            tilt_factor: DEFAULT_TILT_FACTOR,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            platform_width: DEFAULT_PLATFORM_WIDTH,
            platform_height: DEFAULT_PLATFORM_HEIGHT,
            ball_radius: DEFAULT_BALL_RADIUS,
        }
    }
}

impl Parameters {
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.screen_width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.screen_height / 2.0
    }

    /// Allowed range for the platform center: (min, max)
    pub fn platform_travel(&self) -> (f32, f32) {
        let limit = self.half_width() - self.platform_width / 2.0;
        (-limit, limit)
    }

    /// Furthest |x| the ball center may reach before bouncing off a side wall
    #[inline]
    pub fn wall_x(&self) -> f32 {
        self.half_width() - self.ball_radius
    }

    /// Highest y the ball center may reach before bouncing off the top wall
    #[inline]
    pub fn ceiling_y(&self) -> f32 {
        self.half_height() - self.ball_radius
    }

    /// Ball center below this y loses the round
    #[inline]
    pub fn floor_y(&self) -> f32 {
        -self.half_height() + self.ball_radius
    }

    /// Y of the platform's top surface
    #[inline]
    pub fn platform_top(&self) -> f32 {
        -self.half_height() + self.platform_height
    }

    /// Ball center y when resting on the platform
    #[inline]
    pub fn platform_rest_y(&self) -> f32 {
        self.platform_top() + self.ball_radius
    }

    /// Parse parameters from JSON (missing fields keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load parameters from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(params) => {
                    log::debug!("Loaded parameters from {}", path.display());
                    params
                }
                Err(e) => {
                    log::warn!("Invalid parameters in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save parameters as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Parameters saved to {}", path.display());
        Ok(())
    }
}
