use glam::Vec2;
use moon_lander::Settings;
use moon_lander::consts::*;
use moon_lander::sim::terrain::{pad_count, pad_width};
use moon_lander::sim::{GameEvent, GamePhase, GameState, TickInput, Vehicle, tick};

fn settings() -> Settings {
    Settings {
        world_width: 1000.0,
        world_height: 700.0,
        ..Default::default()
    }
}

fn confirm() -> TickInput {
    TickInput {
        begin: true,
        restart: true,
        ..Default::default()
    }
}

/// Drop the craft onto the most recently placed pad with the given descent
fn touch_down(state: &mut GameState, vy: f32, angle: f32) {
    let pad = *state.terrain.pads.last().unwrap();
    let mut vehicle = Vehicle::new(Vec2::new(pad.x + pad.width / 2.0, 0.0));
    vehicle.angle = angle;
    vehicle.vel.y = vy;
    vehicle.pos.y = pad.y - angle.cos() * (LANDER_HEIGHT / 2.0) - 0.25 * vy;
    state.vehicle = vehicle;
    tick(state, &TickInput::default());
}

fn assert_terrain_invariants(state: &GameState) {
    let points = &state.terrain.profile.points;
    assert_eq!(points[0].x, 0.0);
    assert!(points.last().unwrap().x < state.world_width);
    for pair in points.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
    for p in points {
        assert!(p.y >= state.ground_y - TERRAIN_MAX_HEIGHT);
        assert!(p.y <= state.ground_y - TERRAIN_MIN_HEIGHT);
    }
    let last = state.terrain.pads.last().unwrap();
    assert_eq!(state.terrain.height_at(last.x), last.y);
    assert_eq!(state.terrain.height_at(last.right()), last.y);
}

#[test]
fn test_crash_then_restart_then_land() {
    let mut state = GameState::new(&settings(), 2024).unwrap();
    assert_eq!(state.phase, GamePhase::Start);

    tick(&mut state, &confirm());
    assert_eq!(state.phase, GamePhase::Playing);

    touch_down(&mut state, 1.5, 0.0);
    assert_eq!(state.phase, GamePhase::Crashed);
    assert!(!state.vehicle.alive);

    tick(&mut state, &confirm());
    assert_eq!(state.phase, GamePhase::Playing);
    assert!(state.vehicle.alive && !state.vehicle.landed);
    assert_eq!(state.difficulty, 0);
    assert_terrain_invariants(&state);

    touch_down(&mut state, 1.0, 0.0);
    assert_eq!(state.phase, GamePhase::Landed);
    assert_eq!(state.level, 1);
    assert_eq!(state.difficulty, 1);

    let events = state.drain_events();
    assert!(events.contains(&GameEvent::Crashed));
    assert!(events.contains(&GameEvent::Restarted { difficulty: 0 }));
    assert_eq!(events.last(), Some(&GameEvent::Landed { level: 1 }));
}

#[test]
fn test_landings_make_terrain_harder() {
    let mut state = GameState::new(&settings(), 77).unwrap();
    tick(&mut state, &confirm());

    for expected in 1..=4u32 {
        touch_down(&mut state, 0.5, 0.1);
        assert_eq!(state.phase, GamePhase::Landed);
        assert_eq!(state.level, expected);

        tick(&mut state, &confirm());
        assert_eq!(state.difficulty, expected);
        assert_eq!(state.terrain.pads.len(), pad_count(expected));
        for pad in &state.terrain.pads {
            assert_eq!(pad.width, pad_width(expected));
        }
        assert_terrain_invariants(&state);
    }
    assert_eq!(state.terrain.pads.len(), 1);
}

#[test]
fn test_tilted_and_off_pad_contacts_crash() {
    let mut state = GameState::new(&settings(), 5).unwrap();
    tick(&mut state, &confirm());
    touch_down(&mut state, 0.5, std::f32::consts::FRAC_PI_4);
    assert_eq!(state.phase, GamePhase::Crashed);

    tick(&mut state, &confirm());
    // Find a spot well away from every pad
    let x = (0..state.terrain.profile.points.len())
        .map(|i| i as f32 * TERRAIN_STEP + 10.0)
        .find(|&x| {
            state
                .terrain
                .pads
                .iter()
                .all(|p| x + LANDER_WIDTH < p.x || x - LANDER_WIDTH > p.right())
        })
        .expect("some terrain lies off the pads");
    let mut vehicle = Vehicle::new(Vec2::new(x, 0.0));
    vehicle.vel.y = 0.1;
    let ground = [x - LANDER_WIDTH / 2.0, x, x + LANDER_WIDTH / 2.0]
        .into_iter()
        .map(|probe| state.terrain.height_at(probe))
        .fold(f32::INFINITY, f32::min);
    vehicle.pos.y = ground - LANDER_HEIGHT / 2.0 - 0.05;
    state.vehicle = vehicle;
    tick(&mut state, &TickInput::default());
    assert_eq!(state.phase, GamePhase::Crashed);
}

#[test]
fn test_same_seed_same_session() {
    let inputs = [
        confirm(),
        TickInput {
            thrust: true,
            rotate_left: true,
            ..Default::default()
        },
        TickInput::default(),
        TickInput {
            rotate_right: true,
            ..Default::default()
        },
    ];

    let mut a = GameState::new(&settings(), 31337).unwrap();
    let mut b = GameState::new(&settings(), 31337).unwrap();
    for _ in 0..100 {
        for input in &inputs {
            tick(&mut a, input);
            tick(&mut b, input);
        }
    }

    assert_eq!(a.phase, b.phase);
    assert_eq!(a.vehicle, b.vehicle);
    assert_eq!(a.time_ticks, b.time_ticks);
    assert_eq!(a.terrain.profile.points, b.terrain.profile.points);
}

#[test]
fn test_different_seeds_differ() {
    let a = GameState::new(&settings(), 1).unwrap();
    let b = GameState::new(&settings(), 2).unwrap();
    assert_ne!(a.terrain.profile.points, b.terrain.profile.points);
}

#[test]
fn test_free_fall_reaches_ground() {
    let mut state = GameState::new(&settings(), 8).unwrap();
    tick(&mut state, &confirm());
    let mut ticks = 0;
    while state.phase == GamePhase::Playing && ticks < 10_000 {
        tick(&mut state, &TickInput::default());
        ticks += 1;
    }
    assert!(matches!(state.phase, GamePhase::Landed | GamePhase::Crashed));
    assert!(!state.vehicle.is_active());
    assert_eq!(state.vehicle.vel, Vec2::ZERO);
}
