//! Game state and core simulation types
//!
//! The session owns everything a tick touches: terrain, the vehicle, the
//! seeded RNG and progression counters. There is no global state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::terrain::{Terrain, generate_terrain};
use crate::consts::*;
use crate::settings::{Settings, SettingsError};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the begin command
    Start,
    /// Active descent
    Playing,
    /// Touched down safely, waiting for restart
    Landed,
    /// Crashed, waiting for restart
    Crashed,
}

/// Discrete edge events for audio and other observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Left the start screen
    Started,
    /// New episode began after a landing or crash
    Restarted { difficulty: u32 },
    /// Flame became visible
    ThrustStarted,
    /// Flame went out (key released, or the episode ended)
    ThrustStopped,
    /// Safe landing; `level` is the new landing count
    Landed { level: u32 },
    Crashed,
}

/// The player's craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Centre position (world space, y down)
    pub pos: Vec2,
    /// Velocity (px/tick)
    pub vel: Vec2,
    /// Tilt in radians, 0 = upright, clockwise positive
    pub angle: f32,
    pub thrusting: bool,
    pub rotating_left: bool,
    pub rotating_right: bool,
    pub alive: bool,
    pub landed: bool,
}

impl Vehicle {
    /// Upright, motionless craft with all controls released
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            thrusting: false,
            rotating_left: false,
            rotating_right: false,
            alive: true,
            landed: false,
        }
    }

    /// Fresh craft at the top-centre spawn point with randomized drift and tilt
    pub fn spawn<R: Rng + ?Sized>(world_width: f32, rng: &mut R) -> Self {
        let mut vehicle = Self::new(Vec2::new(world_width / 2.0, SPAWN_Y));
        vehicle.vel = Vec2::new(
            rng.random_range(SPAWN_VX_RANGE.0..SPAWN_VX_RANGE.1),
            rng.random_range(SPAWN_VY_RANGE.0..SPAWN_VY_RANGE.1),
        );
        vehicle.angle = rng.random_range(SPAWN_ANGLE_RANGE.0..SPAWN_ANGLE_RANGE.1);
        vehicle
    }

    /// Still flying: neither landed nor crashed
    #[inline]
    pub fn is_active(&self) -> bool {
        self.alive && !self.landed
    }

    /// Downward projection of the bottom vertex, accounting for tilt.
    ///
    /// Exact for the bottom corners only when upright.
    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.pos.y + self.angle.cos() * (LANDER_HEIGHT / 2.0)
    }

    /// Whether a renderer should draw the thrust flame
    #[inline]
    pub fn shows_flame(&self) -> bool {
        self.thrusting && self.is_active()
    }

    /// Stop dead (used on any contact)
    pub fn halt(&mut self) {
        self.vel = Vec2::ZERO;
    }
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Source of all terrain and spawn randomness
    #[serde(skip_serializing)]
    rng: Pcg32,
    pub world_width: f32,
    pub ground_y: f32,
    /// Probe terrain under both bottom corners as well as the centre
    pub footprint_contact: bool,
    pub phase: GamePhase,
    /// Successful landings so far
    pub level: u32,
    /// Drives terrain roughness and pad count/width; only ever increases
    pub difficulty: u32,
    /// Simulation ticks spent in `Playing`
    pub time_ticks: u64,
    pub terrain: Terrain,
    pub vehicle: Vehicle,
    /// Events emitted since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session on the start screen with the given seed.
    ///
    /// Fails if the settings describe a world terrain cannot be generated for.
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let ground_y = settings.ground_y();
        let difficulty = settings.starting_difficulty;
        let terrain = generate_terrain(settings.world_width, ground_y, difficulty, &mut rng);
        let vehicle = Vehicle::spawn(settings.world_width, &mut rng);

        log::info!(
            "Session created: seed={}, world={}x{}, difficulty={}",
            seed,
            settings.world_width,
            settings.world_height,
            difficulty
        );

        Ok(Self {
            seed,
            rng,
            world_width: settings.world_width,
            ground_y,
            footprint_contact: settings.footprint_contact,
            phase: GamePhase::Start,
            level: 0,
            difficulty,
            time_ticks: 0,
            terrain,
            vehicle,
            events: Vec::new(),
        })
    }

    /// Regenerate terrain at the current difficulty and respawn the vehicle
    pub fn reset_episode(&mut self) {
        self.terrain = generate_terrain(
            self.world_width,
            self.ground_y,
            self.difficulty,
            &mut self.rng,
        );
        self.vehicle = Vehicle::spawn(self.world_width, &mut self.rng);
    }

    /// Record a safe landing and raise the difficulty for the next episode
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.difficulty += 1;
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
