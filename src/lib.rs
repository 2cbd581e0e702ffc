//! Drift Roids - A wrap-around asteroid field shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `runner`: Fixed-step driver that feeds queued input into ticks
//! - `tuning`: Data-driven game balance, validated at load time
//! - `error`: Configuration errors

pub mod error;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use runner::Session;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield size in pixels
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ship heading at spawn (pointing up the screen)
    pub const SHIP_SPAWN_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

    /// Nose offset from the ship centre, in ship radii
    pub const SHIP_NOSE_FACTOR: f32 = 4.0 / 3.0;

    /// Upper bound on rejection-sampling attempts when placing a field obstacle
    pub const MAX_SPAWN_ATTEMPTS: u32 = 1000;

    /// Maximum ticks run by one `Session::advance` call
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Wrap one axis of a body's centre around the field.
///
/// A body leaving `[-margin, size + margin]` reappears just outside the
/// opposite edge, so bodies with a radius are never clipped mid-transition.
#[inline]
pub fn wrap_axis(coord: f32, size: f32, margin: f32) -> f32 {
    if coord < -margin {
        size + margin
    } else if coord > size + margin {
        -margin
    } else {
        coord
    }
}

/// Wrap one axis exactly at the field boundary (no margin)
#[inline]
pub fn wrap_exact(coord: f32, size: f32) -> f32 {
    if coord < 0.0 {
        size
    } else if coord > size {
        0.0
    } else {
        coord
    }
}

/// Wrap a position on both axes with the given margin
#[inline]
pub fn wrap_position(pos: Vec2, size: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, size.x, margin),
        wrap_axis(pos.y, size.y, margin),
    )
}

/// Unit vector for a heading in screen space (y grows downward)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}
