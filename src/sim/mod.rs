//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacles and projectiles by index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod input;
pub mod projectile;
pub mod ship;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, resolve_collisions};
pub use field::{advance_level_if_cleared, destroy_obstacle, spawn_field, split};
pub use input::{InputEvent, TickInput};
pub use projectile::{fire, tick_projectiles};
pub use snapshot::FrameSnapshot;
pub use state::{
    GameState, Message, Obstacle, ObstacleTier, Projectile, Ship, ShipStatus,
};
pub use tick::tick;
