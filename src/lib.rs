//! Moon Lander - A 2D terrain landing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, physics, collisions, game state)
//! - `platform`: Input adapter between device events and the simulation
//! - `audio`: Sound cue commands derived from simulation events
//! - `hud`: Telemetry readout for overlays
//! - `settings`: World dimensions and session configuration

pub mod audio;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Downward acceleration (px/tick²)
    pub const GRAVITY: f32 = 0.001;
    /// Thruster acceleration along the craft's axis (negative opposes gravity when upright)
    pub const THRUST: f32 = -0.01;
    /// Rotation per tick while a rotate control is held (radians)
    pub const ROTATE_SPEED: f32 = 0.05;

    /// Lander footprint
    pub const LANDER_WIDTH: f32 = 20.0;
    pub const LANDER_HEIGHT: f32 = 30.0;

    /// Landing tolerances
    pub const SAFE_LANDING_VY: f32 = 1.2;
    pub const SAFE_LANDING_ANGLE: f32 = PI / 8.0; // ~22.5 deg

    /// Terrain sampling
    pub const TERRAIN_STEP: f32 = 20.0;
    /// Distance from the bottom of the world to the ground baseline
    pub const GROUND_MARGIN: f32 = 50.0;
    /// Terrain band relative to the ground baseline
    pub const TERRAIN_MIN_HEIGHT: f32 = 20.0;
    pub const TERRAIN_MAX_HEIGHT: f32 = 180.0;
    /// Height of the first random-walk anchor above the baseline
    pub const TERRAIN_START_HEIGHT: f32 = 100.0;
    /// Random-walk step at difficulty 0, plus growth per difficulty
    pub const TERRAIN_BASE_ROUGHNESS: f32 = 40.0;
    pub const TERRAIN_ROUGHNESS_PER_DIFFICULTY: f32 = 10.0;

    /// Pads at difficulty 0 shrink by one per difficulty (never below one)
    pub const BASE_PAD_COUNT: u32 = 3;
    pub const BASE_PAD_WIDTH: f32 = 80.0;
    pub const MIN_PAD_WIDTH: f32 = 40.0;
    pub const PAD_WIDTH_PER_DIFFICULTY: f32 = 10.0;

    /// Spawn point and randomized initial conditions
    pub const SPAWN_Y: f32 = 100.0;
    pub const SPAWN_VX_RANGE: (f32, f32) = (-1.0, 1.0);
    pub const SPAWN_VY_RANGE: (f32, f32) = (0.5, 2.0);
    pub const SPAWN_ANGLE_RANGE: (f32, f32) = (-PI / 4.0, PI / 4.0);
}

/// Normalized angle to (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle <= -PI {
        angle += 2.0 * PI;
    }
    angle
}
