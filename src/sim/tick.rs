//! Fixed timestep simulation tick
//!
//! Session state machine that gates physics and collision, handles
//! begin/restart commands, and emits edge events.

use super::collision::{ContactOutcome, apply_outcome, evaluate_contact};
use super::physics;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thruster held
    pub thrust: bool,
    /// Rotate counter-clockwise held
    pub rotate_left: bool,
    /// Rotate clockwise held
    pub rotate_right: bool,
    /// Leave the start screen (one-shot)
    pub begin: bool,
    /// Start a new episode after landing or crashing (one-shot)
    pub restart: bool,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    let flame_before = flame_audible(state);

    // Held controls reach the vehicle in every phase
    state.vehicle.thrusting = input.thrust;
    state.vehicle.rotating_left = input.rotate_left;
    state.vehicle.rotating_right = input.rotate_right;

    match state.phase {
        GamePhase::Start => {
            if input.begin {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Started);
                log::info!("Descent started (difficulty {})", state.difficulty);
            }
        }
        GamePhase::Landed | GamePhase::Crashed => {
            if input.restart {
                state.reset_episode();
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Restarted {
                    difficulty: state.difficulty,
                });
                log::info!(
                    "Restarted: level={}, difficulty={}, pads={}",
                    state.level,
                    state.difficulty,
                    state.terrain.pads.len()
                );
            }
        }
        GamePhase::Playing => {}
    }

    if state.phase == GamePhase::Playing {
        simulate(state);
    }

    let flame_after = flame_audible(state);
    if flame_after && !flame_before {
        state.events.push(GameEvent::ThrustStarted);
    } else if flame_before && !flame_after {
        state.events.push(GameEvent::ThrustStopped);
    }
}

/// One physics and collision step while playing
fn simulate(state: &mut GameState) {
    if !state.vehicle.is_active() {
        return;
    }

    state.time_ticks += 1;
    physics::step(&mut state.vehicle);

    let outcome = evaluate_contact(&state.vehicle, &state.terrain, state.footprint_contact);
    apply_outcome(&mut state.vehicle, outcome);

    match outcome {
        ContactOutcome::Airborne => {}
        ContactOutcome::Landed => {
            state.advance_level();
            state.phase = GamePhase::Landed;
            state.events.push(GameEvent::Landed { level: state.level });
            log::info!(
                "Landed safely at x={:.1} (level {}, difficulty now {})",
                state.vehicle.pos.x,
                state.level,
                state.difficulty
            );
        }
        ContactOutcome::Crashed => {
            state.phase = GamePhase::Crashed;
            state.events.push(GameEvent::Crashed);
            log::info!(
                "Crashed at x={:.1}, angle={:.2} rad",
                state.vehicle.pos.x,
                state.vehicle.angle
            );
        }
    }
}

/// Thrust is only audible while actively playing
fn flame_audible(state: &GameState) -> bool {
    state.phase == GamePhase::Playing && state.vehicle.shows_flame()
}
