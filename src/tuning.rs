//! Game balance and field configuration
//!
//! Everything here is a load-time constant: a `Tuning` is validated once
//! when a session is built and never mutated by the simulation.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::sim::ObstacleTier;

/// Game tuning values (per-second units; converted to per-tick on use)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    /// Playfield width in pixels
    pub field_width: f32,
    /// Playfield height in pixels
    pub field_height: f32,
    /// Simulation ticks per second
    pub tick_rate: f32,

    // === Ship ===
    /// Ship height in pixels (collision radius is half of this)
    pub ship_size: f32,
    /// Thrust acceleration
    pub ship_thrust: f32,
    /// Space friction coefficient (0 = none)
    pub friction: f32,
    /// Turn speed in degrees per second
    pub turn_speed_deg: f32,
    /// Length of one blink half-period, seconds
    pub ship_blink_secs: f32,
    /// Post-spawn invincibility window, seconds
    pub ship_invincible_secs: f32,
    /// Ship explosion duration, seconds
    pub ship_explode_secs: f32,
    /// Lives at the start of a game
    pub starting_lives: u32,

    // === Projectiles ===
    /// Max travel distance as a fraction of field width
    pub projectile_range: f32,
    /// Projectile speed in pixels per second
    pub projectile_speed: f32,
    /// Max simultaneously live projectiles per ship
    pub projectile_capacity: usize,
    /// Projectile explosion duration, seconds
    pub projectile_explode_secs: f32,

    // === Obstacles ===
    /// Large obstacles at level 0 (one more per level)
    pub obstacle_base_count: u32,
    /// Diameter of a large obstacle in pixels
    pub obstacle_size: f32,
    /// Max starting speed per axis in pixels per second
    pub obstacle_max_speed: f32,
    /// Average vertex count
    pub obstacle_vertices: u32,
    /// Jaggedness (0 = round, 1 = very jagged)
    pub obstacle_jaggedness: f32,

    // === Scoring ===
    pub score_large: u64,
    pub score_medium: u64,
    pub score_small: u64,

    // === Session ===
    /// Transient message fade-out time, seconds
    pub message_fade_secs: f32,
    /// Start a new game once the "Game Over" message has faded
    pub auto_restart: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: crate::consts::FIELD_WIDTH,
            field_height: crate::consts::FIELD_HEIGHT,
            tick_rate: 30.0,

            ship_size: 30.0,
            ship_thrust: 5.0,
            friction: 0.7,
            turn_speed_deg: 360.0,
            ship_blink_secs: 0.3,
            ship_invincible_secs: 3.0,
            ship_explode_secs: 0.5,
            starting_lives: 3,

            projectile_range: 0.6,
            projectile_speed: 500.0,
            projectile_capacity: 10,
            projectile_explode_secs: 0.1,

            obstacle_base_count: 1,
            obstacle_size: 100.0,
            obstacle_max_speed: 50.0,
            obstacle_vertices: 10,
            obstacle_jaggedness: 0.3,

            score_large: 20,
            score_medium: 50,
            score_small: 100,

            message_fade_secs: 2.5,
            auto_restart: true,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    // Written this way round so NaN is rejected too
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NonPositive { field })
    }
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), TuningError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(TuningError::OutOfRange { field, value })
    }
}

impl Tuning {
    /// Parse a tuning from JSON; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validated()
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Consume and return self if every value is usable
    pub fn validated(self) -> Result<Self, TuningError> {
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("tick_rate", self.tick_rate)?;
        positive("ship_size", self.ship_size)?;
        positive("ship_blink_secs", self.ship_blink_secs)?;
        positive("ship_explode_secs", self.ship_explode_secs)?;
        positive("projectile_range", self.projectile_range)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("projectile_explode_secs", self.projectile_explode_secs)?;
        positive("obstacle_size", self.obstacle_size)?;
        positive("message_fade_secs", self.message_fade_secs)?;

        if self.starting_lives == 0 {
            return Err(TuningError::NonPositive {
                field: "starting_lives",
            });
        }
        if self.projectile_capacity == 0 {
            return Err(TuningError::NonPositive {
                field: "projectile_capacity",
            });
        }

        in_range("ship_thrust", self.ship_thrust, 0.0, f32::MAX)?;
        in_range("turn_speed_deg", self.turn_speed_deg, 0.0, f32::MAX)?;
        in_range("ship_invincible_secs", self.ship_invincible_secs, 0.0, f32::MAX)?;
        in_range("obstacle_max_speed", self.obstacle_max_speed, 0.0, f32::MAX)?;
        in_range("obstacle_jaggedness", self.obstacle_jaggedness, 0.0, 0.99)?;
        // Per-tick friction above 1 would reverse the velocity every tick
        in_range("friction", self.friction, 0.0, self.tick_rate)?;
        // At least a triangle even for the smallest vertex roll
        in_range("obstacle_vertices", self.obstacle_vertices as f32, 6.0, 1024.0)?;

        // Every timer must last at least one tick
        for (field, secs, ticks) in [
            ("ship_blink_secs", self.ship_blink_secs, self.blink_ticks()),
            ("ship_explode_secs", self.ship_explode_secs, self.ship_explode_ticks()),
            (
                "projectile_explode_secs",
                self.projectile_explode_secs,
                self.projectile_explode_ticks(),
            ),
        ] {
            if ticks == 0 {
                return Err(TuningError::ZeroTicks { field, secs });
            }
        }

        let exclusion = self.spawn_exclusion_radius();
        let half_diagonal = self.field_size().length() / 2.0;
        if exclusion >= half_diagonal {
            return Err(TuningError::SpawnExclusionTooLarge {
                exclusion,
                half_diagonal,
            });
        }

        Ok(())
    }

    /// Fixed timestep in seconds
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Convert a duration to whole ticks, rounding up
    pub fn duration_ticks(&self, secs: f32) -> u32 {
        // The epsilon absorbs float noise: 0.1s at 30 Hz is 3 ticks, not 4
        let raw = secs as f64 * self.tick_rate as f64;
        (raw - 1e-6).ceil().max(0.0) as u32
    }

    #[inline]
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    #[inline]
    pub fn field_center(&self) -> Vec2 {
        self.field_size() / 2.0
    }

    #[inline]
    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }

    /// Rotation applied per tick while a turn key is held
    #[inline]
    pub fn turn_per_tick(&self) -> f32 {
        self.turn_speed_deg.to_radians() * self.dt()
    }

    /// Number of blink half-periods making up the invincibility window
    pub fn blink_count(&self) -> u32 {
        let raw = self.ship_invincible_secs as f64 / self.ship_blink_secs as f64;
        (raw - 1e-6).ceil().max(0.0) as u32
    }

    pub fn blink_ticks(&self) -> u32 {
        self.duration_ticks(self.ship_blink_secs)
    }

    pub fn ship_explode_ticks(&self) -> u32 {
        self.duration_ticks(self.ship_explode_secs)
    }

    pub fn projectile_explode_ticks(&self) -> u32 {
        self.duration_ticks(self.projectile_explode_secs)
    }

    /// Distance after which a projectile is discarded
    #[inline]
    pub fn projectile_max_distance(&self) -> f32 {
        self.projectile_range * self.field_width
    }

    /// Collision radius for an obstacle tier
    pub fn obstacle_radius(&self, tier: ObstacleTier) -> f32 {
        let divisor = match tier {
            ObstacleTier::Large => 2.0,
            ObstacleTier::Medium => 4.0,
            ObstacleTier::Small => 8.0,
        };
        (self.obstacle_size / divisor).ceil()
    }

    pub fn obstacle_score(&self, tier: ObstacleTier) -> u64 {
        match tier {
            ObstacleTier::Large => self.score_large,
            ObstacleTier::Medium => self.score_medium,
            ObstacleTier::Small => self.score_small,
        }
    }

    /// Minimum distance between the ship and a freshly spawned large obstacle
    #[inline]
    pub fn spawn_exclusion_radius(&self) -> f32 {
        self.obstacle_radius(ObstacleTier::Large) * 2.0 + self.ship_radius()
    }

    /// Per-tick alpha decrement for transient messages
    #[inline]
    pub fn message_fade_step(&self) -> f32 {
        1.0 / self.message_fade_secs / self.tick_rate
    }
}
