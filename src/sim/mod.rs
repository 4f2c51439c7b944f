//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, no wall-clock time
//! - Seeded RNG only, owned by the session
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod physics;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{ContactOutcome, apply_outcome, evaluate_contact};
pub use physics::step;
pub use state::{GameEvent, GamePhase, GameState, Vehicle};
pub use terrain::{LandingPad, Terrain, TerrainPoint, TerrainProfile, generate_terrain};
pub use tick::{TickInput, tick};
