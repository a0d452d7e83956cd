//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{self, CollisionReport};
use super::state::GameState;
use super::target::Target;
use crate::consts::*;
use crate::random_color;

/// Reposition key directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Offset for one key press
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -KEY_STEP),
            Direction::Down => Vec2::new(0.0, KEY_STEP),
            Direction::Left => Vec2::new(-KEY_STEP, 0.0),
            Direction::Right => Vec2::new(KEY_STEP, 0.0),
        }
    }
}

/// Discrete input events, applied in the order received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    Key(Direction),
    /// Trigger pressed: start charging
    PointerDown,
    /// Trigger released: fire
    PointerUp,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
    /// Pointer position; None while the window lacks input focus
    pub pointer: Option<Vec2>,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Quit was requested; the tick still ran to completion
    pub quit: bool,
    pub shells_fired: u32,
    pub destroyed: u32,
    pub hits_taken: u32,
    pub wave_spawned: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    state.time_ticks += 1;

    // 1. Player input
    apply_input(state, input, &mut outcome);

    // 2. Rival follows the player
    if let Some(rival) = &mut state.rival {
        rival.track(state.player.pos.y);
        rival.set_aim(state.player.pos);
    }

    // 3. Projectiles
    let field = state.field;
    let gravity = state.config.gravity;
    let restitution = state.restitution();
    for shell in &mut state.shells {
        shell.advance(dt, gravity, &field, restitution);
    }
    for piece in &mut state.ordnance {
        piece.advance(dt, gravity, &field, restitution);
    }

    // 4. Targets
    for target in &mut state.targets {
        target.advance(&field);
    }
    if let Some(drone) = &mut state.drone {
        drone.advance(&field);
    }

    // 5. Collisions
    let report = collision::detect(
        &state.shells,
        &state.targets,
        state.drone.as_ref(),
        &state.ordnance,
        state.player.pos,
    );
    outcome.destroyed = report.destroyed();
    outcome.hits_taken = report.hits_taken();
    resolve_collisions(state, &report);
    compact(state, &report);

    // 6. Next wave
    if state.mission_cleared() {
        spawn_wave(state);
        outcome.wave_spawned = true;
    }

    outcome
}

/// Aim, then events in order, then charge.
///
/// The aim is taken from the pointer before any reposition key is applied, so
/// a shell fired after a move in the same tick flies along the angle measured
/// from where the platform stood at the start of the tick.
fn apply_input(state: &mut GameState, input: &TickInput, outcome: &mut TickOutcome) {
    if let Some(pointer) = input.pointer {
        state.player.set_aim(pointer);
    }

    for event in &input.events {
        match *event {
            InputEvent::Quit => outcome.quit = true,
            InputEvent::Key(direction) => {
                let field = state.field;
                state.player.reposition(direction.delta(), &field);
            }
            InputEvent::PointerDown => state.player.activate(),
            InputEvent::PointerUp => {
                fire_player(state);
                outcome.shells_fired += 1;
            }
        }
    }

    state.player.gain_charge(state.config.charge_increment);
}

/// Launch a shell from the player and trigger retaliation
fn fire_player(state: &mut GameState) {
    let id = state.next_entity_id();
    let color = random_color(&mut state.rng);
    let shell = state.player.fire(id, color);
    log::debug!(
        "Shell {} fired: angle {:.2} rad, velocity ({}, {})",
        id,
        state.player.angle,
        shell.vel.x,
        shell.vel.y
    );
    state.shells.push(shell);
    state.score.shells_used += 1;

    if state.config.retaliation {
        retaliate(state);
    }
}

/// Every circle target and the drone drop a bomb; the rival fires a bullet
fn retaliate(state: &mut GameState) {
    for i in 0..state.targets.len() {
        if !state.targets[i].can_counter_fire() {
            continue;
        }
        let id = state.next_entity_id();
        if let Some(bomb) = state.targets[i].counter_fire(id, &mut state.rng) {
            state.ordnance.push(bomb);
        }
    }

    if state.drone.is_some() {
        let id = state.next_entity_id();
        let bomb = state
            .drone
            .as_ref()
            .and_then(|drone| drone.counter_fire(id, &mut state.rng));
        state.ordnance.extend(bomb);
    }

    if state.rival.is_some() {
        let id = state.next_entity_id();
        let bullet = state.rival.as_ref().map(|rival| rival.fire_bullet(id));
        state.ordnance.extend(bullet);
    }
}

/// Apply scores and marks from a collision report
fn resolve_collisions(state: &mut GameState, report: &CollisionReport) {
    if report.is_empty() {
        return;
    }

    state.score.destroyed += report.destroyed();
    state.score.hits_taken += report.hits_taken();

    for &i in &report.ordnance_hits {
        state.ordnance[i].alive = false;
    }

    if report.drone_rammed {
        log::warn!("Drone rammed the player");
    }
    if report.drone_shot || report.drone_rammed {
        state.drone = None;
    }

    if report.destroyed() > 0 || report.hits_taken() > 0 {
        log::debug!(
            "Tick {}: {} destroyed, {} hits taken, score {}",
            state.time_ticks,
            report.destroyed(),
            report.hits_taken(),
            state.score.score()
        );
    }
}

/// Remove struck targets and dead bodies
fn compact(state: &mut GameState, report: &CollisionReport) {
    // Highest index first, so earlier indices stay valid
    for &j in &report.struck_targets {
        state.targets.remove(j);
    }
    state.shells.retain(|s| s.alive);
    state.ordnance.retain(|o| o.alive);
}

/// Spawn the next wave of targets and relaunch the drone
pub fn spawn_wave(state: &mut GameState) {
    let field = state.field;
    let (min_radius, max_radius) = state.target_radius_range();

    for _ in 0..state.config.wave_targets {
        for drifting in [true, false] {
            let id = state.next_entity_id();
            let radius = state.rng.random_range(min_radius..=max_radius);
            let target = Target::random_circle(id, radius, drifting, &field, &mut state.rng);
            state.targets.push(target);
        }
    }

    for _ in 0..state.config.rect_targets {
        let id = state.next_entity_id();
        let target = Target::random_rect(id, &field, &mut state.rng);
        state.targets.push(target);
    }

    if state.config.drone {
        let id = state.next_entity_id();
        state.drone = Some(Target::random_drone(id, &field, &mut state.rng));
    }

    state.wave_index += 1;
    log::info!(
        "Wave {}: {} targets (radius {}..={}), score {}",
        state.wave_index,
        state.targets.len(),
        min_radius,
        max_radius,
        state.score.score()
    );
}
