//! Collision detection and scoring
//!
//! Everything here is circle-vs-circle: obstacles are treated as discs of
//! their tier radius, projectiles as points. The projectile pass scans
//! obstacles from the highest index down; the ship pass scans from the
//! lowest index up. In both the first qualifying pair wins (not the closest).

use super::field::destroy_obstacle;
use super::ship::hit;
use super::state::{GameState, ShipStatus};
use crate::distance;

/// Outcome of one collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Obstacles destroyed this tick (projectile and ship hits combined)
    pub obstacles_destroyed: u32,
    /// Whether the ship started exploding this tick
    pub ship_hit: bool,
    /// Points awarded this tick
    pub points: u64,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        self.obstacles_destroyed == 0 && !self.ship_hit
    }
}

/// Index of the first travelling projectile inside the disc, scanning the
/// newest projectile first
fn projectile_hitting(state: &GameState, obstacle: usize) -> Option<usize> {
    let target = &state.obstacles[obstacle];
    state
        .ship
        .projectiles
        .iter()
        .rposition(|p| !p.is_exploding() && distance(target.pos, p.pos) < target.radius)
}

/// Projectile vs obstacle. Each hit obstacle is split and the projectile
/// that hit it starts exploding, so it cannot hit anything else.
pub fn resolve_projectile_hits(state: &mut GameState, report: &mut CollisionReport) {
    let explode_ticks = state.tuning.projectile_explode_ticks();

    // Fragments are appended past `i`, so they are never visited this pass
    for i in (0..state.obstacles.len()).rev() {
        if let Some(j) = projectile_hitting(state, i) {
            report.points += destroy_obstacle(state, i);
            report.obstacles_destroyed += 1;
            state.ship.projectiles[j].explode_time = explode_ticks;
        }
    }
}

/// Ship vs obstacle. At most one collision is handled per tick.
pub fn resolve_ship_hit(state: &mut GameState, report: &mut CollisionReport) {
    if state.ship.status() != ShipStatus::Normal {
        return;
    }

    let ship_pos = state.ship.pos;
    let ship_radius = state.ship.radius;
    let struck = state
        .obstacles
        .iter()
        .position(|o| distance(ship_pos, o.pos) < ship_radius + o.radius);

    if let Some(i) = struck {
        hit(&mut state.ship, &state.tuning);
        report.points += destroy_obstacle(state, i);
        report.obstacles_destroyed += 1;
        report.ship_hit = true;
    }
}

/// Run both passes in their fixed order
pub fn resolve_collisions(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    resolve_projectile_hits(state, &mut report);
    resolve_ship_hit(state, &mut report);

    if !report.is_empty() {
        log::debug!(
            "Tick {}: {} obstacles destroyed, ship hit: {}",
            state.time_ticks,
            report.obstacles_destroyed,
            report.ship_hit
        );
    }
    report
}
