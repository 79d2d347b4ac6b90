//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use tilt_pong::Parameters;
use tilt_pong::sim::{SequenceRandom, SimulationState, TickInput, check_collision, step, update_ball};

fn arena() -> impl Strategy<Value = Parameters> {
    (
        1.0f32..20.0,  // ball speed
        1.0f32..30.0,  // platform speed
        6.0f32..30.0,  // width
        6.0f32..30.0,  // height
        0.5f32..4.0,   // platform width
        0.1f32..1.0,   // platform height
        0.05f32..0.5,  // ball radius
    )
        .prop_map(|(ball_speed, platform_speed, w, h, pw, ph, r)| Parameters {
            ball_speed,
            platform_speed,
            tilt_factor: 0.5,
            screen_width: w,
            screen_height: h,
            platform_width: pw,
            platform_height: ph,
            ball_radius: r,
        })
}

fn frames() -> impl Strategy<Value = Vec<(f32, f32)>> {
    // (axis, dt) pairs; dt small enough that the ball can't cross the arena in one frame
    prop::collection::vec((-1.0f32..=1.0, 0.001f32..0.05), 1..300)
}

proptest! {
    #[test]
    fn speed_is_preserved(params in arena(), inputs in frames(), angles in prop::collection::vec(-15.0f32..=15.0, 1..16)) {
        let mut state = SimulationState::reset(&params);
        let mut rng = SequenceRandom::new(angles);
        for (axis, dt) in inputs {
            step(&mut state, &params, &TickInput::axis(axis), dt, &mut rng);
            let speed = state.ball_velocity.length();
            prop_assert!((speed - params.ball_speed).abs() <= params.ball_speed * 1e-5,
                "speed {} drifted from {}", speed, params.ball_speed);
        }
    }

    #[test]
    fn platform_stays_in_bounds(params in arena(), axes in prop::collection::vec(-3.0f32..=3.0, 1..200)) {
        let mut state = SimulationState::reset(&params);
        let mut rng = SequenceRandom::new(vec![0.0]);
        let (min, max) = params.platform_travel();
        for axis in axes {
            step(&mut state, &params, &TickInput::axis(axis), 0.05, &mut rng);
            prop_assert!(state.platform_position >= min && state.platform_position <= max);
        }
    }

    #[test]
    fn ball_stays_inside_walls(params in arena(), inputs in frames()) {
        let mut state = SimulationState::reset(&params);
        let mut rng = SequenceRandom::new(vec![-15.0, 4.0, 15.0]);
        for (axis, dt) in inputs {
            step(&mut state, &params, &TickInput::axis(axis), dt, &mut rng);
            prop_assert!(state.ball_position.x.abs() <= params.wall_x());
            prop_assert!(state.ball_position.y <= params.ceiling_y());
        }
    }

    #[test]
    fn wall_hit_flips_horizontal_velocity(x in 4.76f32..6.0, vy in -4.0f32..4.0) {
        let params = Parameters::default();
        let mut state = SimulationState {
            ball_position: Vec2::new(x, 0.0),
            ball_velocity: Vec2::new(5.0, vy),
            platform_position: 0.0,
        };
        let contact = update_ball(&mut state, &params, 0.0);
        prop_assert!(contact.side);
        prop_assert_eq!(state.ball_velocity.x, -5.0);
        prop_assert_eq!(state.ball_position.x, params.wall_x());
    }

    #[test]
    fn platform_bounce_snaps_and_keeps_speed(
        x in -1.0f32..=1.0,
        y in -4.75f32..=-4.25,
        angle in 0.0f32..std::f32::consts::TAU,
        deflection in -15.0f32..=15.0,
    ) {
        let params = Parameters::default();
        let mut state = SimulationState {
            ball_position: Vec2::new(x, y),
            ball_velocity: Vec2::from_angle(angle) * params.ball_speed,
            platform_position: 0.0,
        };
        let mut rng = SequenceRandom::new(vec![deflection]);
        prop_assert!(check_collision(&mut state, &params, &mut rng));
        prop_assert_eq!(state.ball_position.y, params.platform_rest_y());
        prop_assert!((state.ball_velocity.length() - params.ball_speed).abs() <= params.ball_speed * 1e-5);
    }
}
