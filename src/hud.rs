//! Overlay readouts
//!
//! Numbers and prompts a renderer draws on top of the scene. Layout and
//! fonts are the renderer's business.

use serde::Serialize;

use crate::sim::{GamePhase, GameState};

/// Flight instruments
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Telemetry {
    /// Gap between the craft's bottom and the terrain under its centre (px, never negative)
    pub altitude: f32,
    /// Tilt in degrees, clockwise positive
    pub orientation_deg: f32,
    /// Vertical speed (px/tick, positive = descending)
    pub vertical_speed: f32,
    /// Horizontal position (px)
    pub x: f32,
}

impl Telemetry {
    pub fn from_state(state: &GameState) -> Self {
        let vehicle = &state.vehicle;
        let ground = state.terrain.height_at(vehicle.pos.x);
        Self {
            altitude: (ground - vehicle.bottom_y()).max(0.0),
            orientation_deg: vehicle.angle.to_degrees(),
            vertical_speed: vehicle.vel.y,
            x: vehicle.pos.x,
        }
    }
}

/// Headline and prompt for the overlay; `None` during flight
pub fn status_line(phase: GamePhase) -> Option<(&'static str, &'static str)> {
    match phase {
        GamePhase::Start => Some(("MOON LANDER", "Press ENTER to start")),
        GamePhase::Landed => Some(("LANDED SAFELY!", "Press ENTER to restart")),
        GamePhase::Crashed => Some(("YOU CRASHED!", "Press ENTER to try again")),
        GamePhase::Playing => None,
    }
}
