//! Game state and score keeping
//!
//! `GameState` is the single owner of every entity. Rendering and tests read
//! it; only [`super::tick`] mutates it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{MovingBody, Restitution};
use super::geometry::Playfield;
use super::platform::Platform;
use super::target::Target;
use super::tick::spawn_wave;
use crate::config::SimConfig;
use crate::consts::TARGET_MAX_RADIUS;
use crate::error::SimResult;

/// Running tally for the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    /// Targets (and drones) shot down
    pub destroyed: u32,
    /// Shells fired by the player
    pub shells_used: u32,
    /// Bombs, bullets and drones that reached the player
    pub hits_taken: u32,
}

impl ScoreTable {
    /// destroyed - used - hits taken; goes negative easily
    pub fn score(&self) -> i64 {
        self.destroyed as i64 - self.shells_used as i64 - self.hits_taken as i64
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    pub field: Playfield,
    /// Session seed for reproducibility
    pub seed: u64,
    /// All randomness (spawns, colors, counter-fire) comes from here
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Waves spawned so far (the first wave is spawned on construction)
    pub wave_index: u32,
    pub score: ScoreTable,
    pub player: Platform,
    pub rival: Option<Platform>,
    /// Player shells in flight
    pub shells: Vec<MovingBody>,
    /// Bombs and bullets in flight
    pub ordnance: Vec<MovingBody>,
    /// Targets of the current wave
    pub targets: Vec<Target>,
    /// Diagonal drone, relaunched every wave
    pub drone: Option<Target>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Validate the config, place the platforms and spawn the first wave
    pub fn new(config: SimConfig, seed: u64) -> SimResult<Self> {
        config.validate()?;

        let field = Playfield::new(config.screen_width, config.screen_height);
        let player = Platform::player(&config);
        let rival = config.rival.then(|| Platform::rival(&field));

        let mut state = Self {
            config,
            field,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            wave_index: 0,
            score: ScoreTable::default(),
            player,
            rival,
            shells: Vec::new(),
            ordnance: Vec::new(),
            targets: Vec::new(),
            drone: None,
            next_id: 1,
        };

        log::info!(
            "New session: seed {}, player {}, rival {}, drone {}, retaliation {}",
            seed,
            state.config.player.as_str(),
            state.config.rival,
            state.config.drone,
            state.config.retaliation
        );
        spawn_wave(&mut state);

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn restitution(&self) -> Restitution {
        Restitution {
            normal: self.config.restitution_normal,
            tangent: self.config.restitution_tangent,
        }
    }

    /// No wave targets left and no shell still in the air
    pub fn mission_cleared(&self) -> bool {
        self.targets.is_empty() && self.shells.iter().all(|s| !s.alive)
    }

    /// Circle radius bounds for the next wave: targets shrink as the score
    /// rises, never below 1
    pub fn target_radius_range(&self) -> (i32, i32) {
        let s = self.score.score().max(0);
        let max = TARGET_MAX_RADIUS as i64;
        let lo = (max - 2 * s).max(1) as i32;
        let hi = (max - s).max(1) as i32;
        (lo, hi)
    }

    /// Where the player is aiming from
    pub fn player_pos(&self) -> Vec2 {
        self.player.pos
    }
}
