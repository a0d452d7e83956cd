//! Artillery headless driver
//!
//! Runs a scripted session through the same `tick` entry point a windowed
//! frontend uses, recording each frame into a `DrawList`, and prints the
//! final score as JSON.
//!
//! Usage: `artillery [default|duel|range|cannon|tank] [seed] [seconds]`

use glam::Vec2;

use artillery::consts::*;
use artillery::render::{DrawList, draw_frame};
use artillery::sim::{GameState, InputEvent, TickInput, tick};
use artillery::{PlatformKind, SimConfig};

/// Ticks the trigger is held before each release
const HOLD_TICKS: u64 = 8;
/// Ticks between shots
const FIRE_PERIOD: u64 = 20;

fn config_for(variant: &str) -> Option<SimConfig> {
    match variant {
        "default" => Some(SimConfig::default()),
        "duel" => Some(SimConfig::duel()),
        "range" => Some(SimConfig::tank_range()),
        other => PlatformKind::from_str(other).map(|kind| SimConfig::default().with_player(kind)),
    }
}

/// Aim at the nearest target, lobbing a little above it
fn autopilot(state: &GameState) -> TickInput {
    let from = state.player_pos();
    let nearest = state
        .targets
        .iter()
        .map(|t| t.center())
        .min_by(|a, b| {
            a.distance_squared(from)
                .partial_cmp(&b.distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let pointer = nearest.map(|c| c - Vec2::new(0.0, 0.25 * (c.x - from.x).abs()));

    let mut events = Vec::new();
    match state.time_ticks % FIRE_PERIOD {
        0 => events.push(InputEvent::PointerDown),
        HOLD_TICKS => events.push(InputEvent::PointerUp),
        _ => {}
    }

    TickInput { events, pointer }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let variant = args.first().map(String::as_str).unwrap_or("default");
    let seed = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(12345u64);
    let seconds = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(60u64);

    let Some(config) = config_for(variant) else {
        eprintln!("unknown variant '{}', expected default, duel, range, cannon or tank", variant);
        std::process::exit(2);
    };

    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Artillery (headless) starting: variant {}, {} s", variant, seconds);

    let mut frame = DrawList::new();
    let total_ticks = seconds * TICK_RATE_HZ as u64;
    for _ in 0..total_ticks {
        let input = autopilot(&state);
        let outcome = tick(&mut state, &input, SIM_DT);

        frame.clear();
        draw_frame(&state, &mut frame);
        log::trace!("Tick {}: {} draw commands", state.time_ticks, frame.len());

        if state.time_ticks % TICK_RATE_HZ as u64 == 0 {
            log::info!(
                "{} s: wave {}, score {}",
                state.time_ticks / TICK_RATE_HZ as u64,
                state.wave_index,
                state.score.score()
            );
        }
        if outcome.quit {
            break;
        }
    }

    match serde_json::to_string_pretty(&state.score) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize score: {}", e),
    }
}
