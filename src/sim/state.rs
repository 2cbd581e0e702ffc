//! Game state and core simulation types
//!
//! Velocities are stored per tick; `Tuning` converts per-second values
//! when entities are created.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{SHIP_NOSE_FACTOR, SHIP_SPAWN_ANGLE};
use crate::heading_vector;
use crate::tuning::Tuning;

/// Ship lifecycle state, derived from its counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipStatus {
    /// Freshly spawned and blinking; collisions are ignored
    Invincible,
    /// Vulnerable
    Normal,
    /// Explosion countdown running
    Exploding,
    /// Out of lives
    Dead,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in radians (pi/2 = up)
    pub angle: f32,
    pub radius: f32,
    /// Rotation applied each tick (radians, signed)
    pub rot: f32,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub thrusting: bool,
    /// Fire latch: cleared on fire, set again on fire release
    pub can_shoot: bool,
    pub dead: bool,
    /// Ticks left in the explosion (0 = not exploding)
    pub explode_time: u32,
    /// Remaining blink half-periods of invincibility
    pub blink_num: u32,
    /// Ticks left in the current blink phase
    pub blink_time: u32,
    pub projectiles: Vec<Projectile>,
}

impl Ship {
    /// A fresh ship at the field centre, facing up, fully invincible
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.field_center(),
            angle: SHIP_SPAWN_ANGLE,
            radius: tuning.ship_radius(),
            rot: 0.0,
            vel: Vec2::ZERO,
            thrusting: false,
            can_shoot: true,
            dead: false,
            explode_time: 0,
            blink_num: tuning.blink_count(),
            blink_time: tuning.blink_ticks(),
            projectiles: Vec::with_capacity(tuning.projectile_capacity),
        }
    }

    pub fn status(&self) -> ShipStatus {
        if self.dead {
            ShipStatus::Dead
        } else if self.explode_time > 0 {
            ShipStatus::Exploding
        } else if self.blink_num > 0 {
            ShipStatus::Invincible
        } else {
            ShipStatus::Normal
        }
    }

    #[inline]
    pub fn is_exploding(&self) -> bool {
        self.explode_time > 0
    }

    /// Whether the renderer should draw the hull this tick
    pub fn is_visible(&self) -> bool {
        !self.dead && !self.is_exploding() && self.blink_num % 2 == 0
    }

    /// Tip of the hull, where projectiles appear
    #[inline]
    pub fn nose(&self) -> Vec2 {
        self.pos + heading_vector(self.angle) * (SHIP_NOSE_FACTOR * self.radius)
    }
}

/// Obstacle size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleTier {
    Large,
    Medium,
    Small,
}

impl ObstacleTier {
    /// Tier of the two fragments left behind, if any
    pub fn split(self) -> Option<ObstacleTier> {
        match self {
            ObstacleTier::Large => Some(ObstacleTier::Medium),
            ObstacleTier::Medium => Some(ObstacleTier::Small),
            ObstacleTier::Small => None,
        }
    }
}

/// A drifting polygonal obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Polygon orientation (radians); never changes
    pub angle: f32,
    pub tier: ObstacleTier,
    pub radius: f32,
    /// Per-vertex radius multipliers; length is the vertex count
    pub offsets: Vec<f32>,
}

impl Obstacle {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len()
    }
}

/// A shot fired by the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Total distance travelled so far
    pub distance: f32,
    /// Ticks left in the impact explosion (0 = travelling)
    pub explode_time: u32,
}

impl Projectile {
    #[inline]
    pub fn is_exploding(&self) -> bool {
        self.explode_time > 0
    }
}

/// On-screen text that fades out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    /// 1.0 = opaque; hidden once negative
    pub alpha: f32,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.alpha >= 0.0
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Current level (0-based)
    pub level: u32,
    pub lives: u32,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    pub obstacles: Vec<Obstacle>,
    pub message: Message,
}

impl GameState {
    /// Build a session and spawn the first field.
    ///
    /// `tuning` must already be validated.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let ship = Ship::new(&tuning);
        let mut state = Self {
            lives: tuning.starting_lives,
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 0,
            score: 0,
            time_ticks: 0,
            ship,
            obstacles: Vec::new(),
            message: Message::new(""),
        };
        super::field::start_level(&mut state);
        log::info!("New game (seed {})", seed);
        state
    }

    /// Reset to a fresh game, continuing the RNG stream
    pub fn new_game(&mut self) {
        self.level = 0;
        self.lives = self.tuning.starting_lives;
        self.score = 0;
        self.ship = Ship::new(&self.tuning);
        super::field::start_level(self);
        log::info!("Game restarted");
    }
}
