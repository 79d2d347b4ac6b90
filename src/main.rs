//! Tilt Pong entry point
//!
//! Runs a headless session with the autopilot steering the platform.
//!
//! Usage: `tilt-pong [params.json] [frames] [seed]`

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use tilt_pong::consts::FRAME_DT;
    use tilt_pong::renderer::LogRenderer;
    use tilt_pong::sim::{SeededRandom, TickInput, autopilot_axis};
    use tilt_pong::{Parameters, Session};

    env_logger::init();
    log::info!("Tilt Pong (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let params = match args.first().map(String::as_str) {
        Some(path) if path != "-" => Parameters::load(Path::new(path)),
        _ => Parameters::default(),
    };
    let frames = parse_arg(args.get(1), "frames").unwrap_or(DEFAULT_FRAMES);
    let rng = SeededRandom::new(parse_arg(args.get(2), "seed").unwrap_or_else(rand::random::<u64>));
    log::info!("Running {} frames with seed: {}", frames, rng.seed());

    let mut session = Session::initialize(params, LogRenderer::new(), rng);
    let mut hits = 0u32;
    for _ in 0..frames {
        let axis = autopilot_axis(session.state(), session.params(), FRAME_DT);
        let report = session.frame(&TickInput::axis(axis), FRAME_DT);
        if report.platform_hit {
            hits += 1;
        }
    }

    let state = *session.state();
    let rounds = session.rounds();
    let renderer = session.shutdown();
    log::info!(
        "Finished: {} platform hits, {} rounds, {} quad moves, ball at ({:.2}, {:.2})",
        hits,
        rounds,
        renderer.moves(),
        state.ball_position.x,
        state.ball_position.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `Session` directly
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg(arg: Option<&String>, name: &str) -> Option<u64> {
    let raw = arg?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring {} '{}': {}", name, raw, e);
            None
        }
    }
}
