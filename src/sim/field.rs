//! Obstacle field: spawning, splitting and level progression

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Message, Obstacle, ObstacleTier};
use crate::consts::MAX_SPAWN_ATTEMPTS;
use crate::tuning::Tuning;
use crate::{distance, wrap_position};

/// Speed multiplier for obstacles spawned at `level`
#[inline]
pub fn level_speed_multiplier(level: u32) -> f32 {
    1.0 + 0.1 * level as f32
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Build one obstacle with random drift, orientation and silhouette
pub fn new_obstacle(
    rng: &mut Pcg32,
    tuning: &Tuning,
    level: u32,
    pos: Vec2,
    tier: ObstacleTier,
) -> Obstacle {
    let max_speed = tuning.obstacle_max_speed * level_speed_multiplier(level) * tuning.dt();
    let vx = rng.random::<f32>() * max_speed * random_sign(rng);
    let vy = rng.random::<f32>() * max_speed * random_sign(rng);
    let angle = rng.random::<f32>() * TAU;

    let vert = tuning.obstacle_vertices as f32;
    let vertex_count = (rng.random::<f32>() * (vert + 1.0) + vert / 2.0).floor() as usize;
    let jag = tuning.obstacle_jaggedness;
    let offsets = (0..vertex_count)
        .map(|_| rng.random::<f32>() * jag * 2.0 + 1.0 - jag)
        .collect();

    Obstacle {
        pos,
        vel: Vec2::new(vx, vy),
        angle,
        tier,
        radius: tuning.obstacle_radius(tier),
        offsets,
    }
}

/// Fragments left behind when `parent` is destroyed (two, or none for small)
pub fn split(rng: &mut Pcg32, tuning: &Tuning, level: u32, parent: &Obstacle) -> Vec<Obstacle> {
    match parent.tier.split() {
        Some(tier) => (0..2)
            .map(|_| new_obstacle(rng, tuning, level, parent.pos, tier))
            .collect(),
        None => Vec::new(),
    }
}

/// Replace the field with `base + level` large obstacles clear of the ship
pub fn spawn_field(state: &mut GameState) {
    let count = state.tuning.obstacle_base_count + state.level;
    let exclusion = state.tuning.spawn_exclusion_radius();
    let ship_pos = state.ship.pos;

    state.obstacles.clear();
    for _ in 0..count {
        let mut pos = random_field_point(&mut state.rng, &state.tuning);
        let mut attempts = 1;
        while distance(ship_pos, pos) < exclusion {
            if attempts >= MAX_SPAWN_ATTEMPTS {
                log::warn!(
                    "No clear spawn point after {} attempts, placing obstacle at {:?}",
                    attempts,
                    pos
                );
                break;
            }
            pos = random_field_point(&mut state.rng, &state.tuning);
            attempts += 1;
        }

        let obstacle = new_obstacle(
            &mut state.rng,
            &state.tuning,
            state.level,
            pos,
            ObstacleTier::Large,
        );
        state.obstacles.push(obstacle);
    }

    log::info!("Level {}: spawned {} obstacles", state.level + 1, count);
}

fn random_field_point(rng: &mut Pcg32, tuning: &Tuning) -> Vec2 {
    Vec2::new(
        (rng.random::<f32>() * tuning.field_width).floor(),
        (rng.random::<f32>() * tuning.field_height).floor(),
    )
}

/// Announce the current level and spawn its field
pub fn start_level(state: &mut GameState) {
    state.message = Message::new(format!("Level {}", state.level + 1));
    spawn_field(state);
}

/// Destroy the obstacle at `index`, appending its fragments.
///
/// Fragments go to the end of the list, so a reverse scan that was already
/// below the end never visits them. Returns the points awarded.
pub fn destroy_obstacle(state: &mut GameState, index: usize) -> u64 {
    let parent = state.obstacles.remove(index);
    let fragments = split(&mut state.rng, &state.tuning, state.level, &parent);
    state.obstacles.extend(fragments);

    let points = state.tuning.obstacle_score(parent.tier);
    state.score += points;
    points
}

/// Move to the next level once the field is empty
pub fn advance_level_if_cleared(state: &mut GameState) -> bool {
    if !state.obstacles.is_empty() {
        return false;
    }
    state.level += 1;
    start_level(state);
    true
}

/// Drift every obstacle and wrap it around the field
pub fn advance_obstacles(state: &mut GameState) {
    let size = state.tuning.field_size();
    for obstacle in &mut state.obstacles {
        obstacle.pos = wrap_position(obstacle.pos + obstacle.vel, size, obstacle.radius);
    }
}
