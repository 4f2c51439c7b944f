//! Vehicle integration
//!
//! One call advances the craft by one tick using semi-implicit Euler:
//! acceleration comes from the pre-update inputs, is folded into velocity,
//! and the new velocity moves the position. No drag, no speed cap.

use glam::Vec2;

use super::state::Vehicle;
use crate::consts::*;

/// Acceleration for the current orientation and controls
pub fn acceleration(vehicle: &Vehicle) -> Vec2 {
    let mut accel = Vec2::new(0.0, GRAVITY);
    if vehicle.thrusting {
        let (sin, cos) = vehicle.angle.sin_cos();
        accel.x += THRUST * sin;
        accel.y += THRUST * cos;
    }
    accel
}

/// Advance the vehicle by one tick. Does nothing once it has landed or crashed.
pub fn step(vehicle: &mut Vehicle) {
    if !vehicle.is_active() {
        return;
    }

    // Opposing rotate controls cancel
    if vehicle.rotating_left {
        vehicle.angle -= ROTATE_SPEED;
    }
    if vehicle.rotating_right {
        vehicle.angle += ROTATE_SPEED;
    }

    let accel = acceleration(vehicle);
    vehicle.vel += accel;
    vehicle.pos += vehicle.vel;
}
