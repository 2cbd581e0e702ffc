//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Each tick runs
//! input -> physics -> collisions -> lifecycle, always in that order.

use super::collision::{CollisionReport, resolve_collisions};
use super::field::{advance_level_if_cleared, advance_obstacles};
use super::input::{TickInput, apply_event};
use super::projectile::tick_projectiles;
use super::ship::{integrate, tick_blink, tick_explode};
use super::state::GameState;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> CollisionReport {
    if input.restart {
        state.new_game();
        return CollisionReport::default();
    }

    // Input
    for &event in &input.events {
        apply_event(&mut state.ship, &state.tuning, event);
    }

    // Physics. The explosion countdown only covers ticks that began exploding.
    let was_exploding = state.ship.is_exploding();
    integrate(&mut state.ship, &state.tuning);
    tick_blink(&mut state.ship, &state.tuning);
    let max_distance = state.tuning.projectile_max_distance();
    let field = state.tuning.field_size();
    tick_projectiles(&mut state.ship.projectiles, max_distance, field);
    advance_obstacles(state);

    // Collisions
    let report = resolve_collisions(state);

    // Lifecycle
    if was_exploding {
        tick_explode(state);
    }
    if advance_level_if_cleared(state) {
        log::info!("Field cleared, entering level {}", state.level + 1);
    }
    if state.message.is_visible() {
        state.message.alpha -= state.tuning.message_fade_step();
    } else if state.ship.dead && state.tuning.auto_restart {
        state.new_game();
    }

    state.time_ticks += 1;
    report
}
