//! Ground contact detection and landing adjudication
//!
//! Contact is decided from the tilt-projected bottom of the craft against
//! the interpolated terrain height. The first contact is final: it is either
//! a safe landing or a crash, never a bounce.

use serde::{Deserialize, Serialize};

use super::state::Vehicle;
use super::terrain::Terrain;
use crate::consts::*;
use crate::normalize_angle;

/// Result of a contact check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactOutcome {
    /// No ground contact this tick
    Airborne,
    /// Touched a pad slowly and upright enough
    Landed,
    /// Any other contact
    Crashed,
}

/// Horizontal probe offsets from the craft's centre
const CENTRE_PROBE: [f32; 1] = [0.0];
const FOOTPRINT_PROBES: [f32; 3] = [0.0, -LANDER_WIDTH / 2.0, LANDER_WIDTH / 2.0];

/// Terrain heights the craft's bottom is tested against
fn probe_heights(vehicle: &Vehicle, terrain: &Terrain, footprint: bool) -> impl Iterator<Item = f32> {
    let x = vehicle.pos.x;
    let offsets: &'static [f32] = if footprint {
        &FOOTPRINT_PROBES
    } else {
        &CENTRE_PROBE
    };
    offsets.iter().map(move |dx| terrain.height_at(x + dx))
}

/// Whether the craft's bottom is at or below the terrain
pub fn touches_ground(vehicle: &Vehicle, terrain: &Terrain, footprint: bool) -> bool {
    let bottom = vehicle.bottom_y();
    probe_heights(vehicle, terrain, footprint).any(|ground| bottom >= ground)
}

/// Whether the current velocity and tilt are within landing tolerances over a pad
pub fn is_safe_landing(vehicle: &Vehicle, terrain: &Terrain) -> bool {
    terrain.is_on_pad(vehicle.pos.x)
        && vehicle.vel.y.abs() < SAFE_LANDING_VY
        && normalize_angle(vehicle.angle).abs() < SAFE_LANDING_ANGLE
}

/// Classify the vehicle's situation this tick without modifying it
pub fn evaluate_contact(vehicle: &Vehicle, terrain: &Terrain, footprint: bool) -> ContactOutcome {
    if !vehicle.is_active() || !touches_ground(vehicle, terrain, footprint) {
        return ContactOutcome::Airborne;
    }
    if is_safe_landing(vehicle, terrain) {
        ContactOutcome::Landed
    } else {
        ContactOutcome::Crashed
    }
}

/// Apply a contact outcome to the vehicle's terminal flags
pub fn apply_outcome(vehicle: &mut Vehicle, outcome: ContactOutcome) {
    match outcome {
        ContactOutcome::Airborne => {}
        ContactOutcome::Landed => {
            vehicle.landed = true;
            vehicle.halt();
        }
        ContactOutcome::Crashed => {
            vehicle.alive = false;
            vehicle.halt();
        }
    }
}
