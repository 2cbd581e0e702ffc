//! Drift Roids headless runner
//!
//! Drives the simulation with a scripted pilot and prints the final frame as
//! JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use drift_roids::sim::InputEvent;
use drift_roids::{Session, Tuning};

/// Simulated frame time handed to the fixed-step driver (60 Hz display)
const FRAME_SECS: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "drift-roids")]
#[command(about = "Run the asteroid field simulation headless and print the final frame")]
struct Cli {
    /// Tuning JSON file (built-in defaults when omitted)
    tuning: Option<PathBuf>,
    /// Seed for obstacle generation
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,
    /// Simulated play time in seconds
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Drift Roids (headless) starting...");

    let tuning = match &cli.tuning {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    let mut session = match Session::new(tuning, cli.seed) {
        Ok(session) => session,
        Err(err) => {
            log::error!("Invalid tuning: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Session started with seed: {}", cli.seed);

    let frames = (cli.seconds.max(0.0) / FRAME_SECS).ceil() as u32;
    let mut last_level = session.state().level;
    for frame in 0..frames {
        autopilot(&mut session, frame);
        session.advance(FRAME_SECS);

        let state = session.state();
        if state.level != last_level {
            log::info!("Reached level {} (score {})", state.level + 1, state.score);
            last_level = state.level;
        }
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to serialize snapshot: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Spin slowly, pulse the thruster and tap fire
fn autopilot(session: &mut Session, frame: u32) {
    match frame % 40 {
        0 => session.push_event(InputEvent::RotateLeftStart),
        10 => session.push_event(InputEvent::RotateLeftStop),
        12 => session.push_event(InputEvent::ThrustStart),
        16 => session.push_event(InputEvent::ThrustStop),
        _ => {}
    }
    match frame % 8 {
        0 => session.push_event(InputEvent::FireStart),
        4 => session.push_event(InputEvent::FireStop),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["drift-roids"]).expect("no arguments is valid");
        assert!(cli.tuning.is_none());
        assert_eq!(cli.seed, 0x5EED);
        assert_eq!(cli.seconds, 30.0);
    }

    #[test]
    fn test_cli_parses_typed_options() {
        let cli = Cli::try_parse_from([
            "drift-roids",
            "tuning.json",
            "--seed",
            "42",
            "--seconds",
            "2.5",
        ])
        .expect("valid arguments");
        assert_eq!(cli.tuning, Some(PathBuf::from("tuning.json")));
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.seconds, 2.5);
    }

    #[test]
    fn test_cli_rejects_malformed_numbers() {
        assert!(Cli::try_parse_from(["drift-roids", "--seed", "notaseed"]).is_err());
        assert!(Cli::try_parse_from(["drift-roids", "--seconds", "soon"]).is_err());
    }

    #[test]
    fn test_autopilot_pulses_fire() {
        let mut session = Session::new(Tuning::default(), 3).expect("default tuning is valid");
        autopilot(&mut session, 0);
        session.step();
        assert_eq!(session.state().ship.projectiles.len(), 1);
        assert!(!session.state().ship.can_shoot);

        for frame in 1..8 {
            autopilot(&mut session, frame);
            session.step();
        }
        // Released on frame 4, ready for the next press
        assert!(session.state().ship.can_shoot);
    }
}
