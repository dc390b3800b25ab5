//! Bounce Squares entry point
//!
//! Opens the window, seeds the simulation from the clock and runs the frame
//! loop until the window closes or Escape is pressed.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bounce_squares::Settings;
use bounce_squares::frame;
use bounce_squares::platform::WinitHost;
use bounce_squares::sim::SimState;

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn run() -> bounce_squares::Result<()> {
    let settings = Settings::default();
    settings.validate()?;
    log::debug!("Settings: {}", settings.to_json());

    let seed = clock_seed();
    let mut state = SimState::with_settings(seed, &settings);
    log::info!("Simulation initialized with seed: {}", seed);

    let host = WinitHost::create(settings.window_width, settings.window_height, &settings.title)?;

    let frames = frame::run(host, &mut state);
    log::info!(
        "Window closed after {} frames ({} collision frames)",
        frames,
        state.collisions
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Bounce Squares starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
