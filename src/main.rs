//! Moon Lander entry point
//!
//! Native headless runner: loads settings, flies a few episodes with a
//! simple autopilot feeding the input adapter, and logs each outcome.
//!
//! Usage: `moon-lander [settings.json] [episodes]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use moon_lander::Settings;
use moon_lander::audio::AudioCues;
use moon_lander::hud::{Telemetry, status_line};
use moon_lander::platform::{InputAdapter, Key};
use moon_lander::sim::{GamePhase, GameState, Vehicle, tick};

/// Give up on an episode that never touches down
const MAX_TICKS_PER_EPISODE: u32 = 50_000;
/// Descent rate the autopilot holds (px/tick)
const TARGET_DESCENT: f32 = 0.6;
/// Tilt the autopilot tolerates before correcting (radians)
const TILT_DEADBAND: f32 = 0.04;

/// Keys the autopilot wants held this tick
fn autopilot(vehicle: &Vehicle) -> [(Key, bool); 3] {
    let tilt = moon_lander::normalize_angle(vehicle.angle);
    [
        (Key::Thrust, vehicle.vel.y > TARGET_DESCENT),
        (Key::RotateLeft, tilt > TILT_DEADBAND),
        (Key::RotateRight, tilt < -TILT_DEADBAND),
    ]
}

fn press(adapter: &mut InputAdapter, key: Key) {
    adapter.key_down(key);
    adapter.key_up(key);
}

fn main() {
    env_logger::init();
    log::info!("Moon Lander (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let episodes: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);

    let settings = Settings::load_or_default(settings_path.as_deref());
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });

    let mut state = match GameState::new(&settings, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start session: {e}");
            std::process::exit(1);
        }
    };
    let mut adapter = InputAdapter::new();
    let mut cues = AudioCues::new(&settings);

    if let Some((title, prompt)) = status_line(state.phase) {
        log::info!("{title} - {prompt}");
    }
    press(&mut adapter, Key::Confirm);

    let mut landings = 0u32;
    let mut crashes = 0u32;

    for episode in 1..=episodes {
        let mut ticks = 0u32;
        while state.phase == GamePhase::Playing || ticks == 0 {
            for (key, held) in autopilot(&state.vehicle) {
                if held {
                    adapter.key_down(key);
                } else {
                    adapter.key_up(key);
                }
            }
            tick(&mut state, &adapter.take_tick_input());

            for command in cues.process(&state.drain_events()) {
                log::debug!("audio: {:?}", command);
            }

            ticks += 1;
            if ticks % 500 == 0 {
                let t = Telemetry::from_state(&state);
                log::debug!(
                    "alt={:.1}px tilt={:.1}deg vy={:.2} x={:.1}",
                    t.altitude,
                    t.orientation_deg,
                    t.vertical_speed,
                    t.x
                );
            }
            if ticks >= MAX_TICKS_PER_EPISODE {
                log::warn!("Episode {episode} exceeded {MAX_TICKS_PER_EPISODE} ticks, abandoning");
                break;
            }
        }

        match state.phase {
            GamePhase::Landed => landings += 1,
            GamePhase::Crashed => crashes += 1,
            _ => break,
        }
        if let Some((title, prompt)) = status_line(state.phase) {
            log::info!("Episode {episode}: {title} after {ticks} ticks ({prompt})");
        }

        if episode < episodes {
            press(&mut adapter, Key::Confirm);
        }
    }

    match serde_json::to_string(&state.terrain.pads) {
        Ok(pads) => log::debug!("Final pads: {pads}"),
        Err(e) => log::warn!("Could not serialize pads: {e}"),
    }
    println!(
        "seed={} landings={} crashes={} level={} difficulty={}",
        seed, landings, crashes, state.level, state.difficulty
    );
}
