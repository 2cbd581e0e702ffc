//! Ship controller: motion, invincibility blink, explosion and respawn
//!
//! State transitions:
//! - `Invincible` -> `Normal` once the blink counter runs out
//! - `Normal` -> `Exploding` on `hit`
//! - `Exploding` -> `Invincible` (fresh ship) or `Dead` when the countdown ends

use super::state::{GameState, Message, Ship, ShipStatus};
use crate::tuning::Tuning;
use crate::{heading_vector, wrap_position};

/// Apply one tick of rotation, thrust or friction, and movement.
///
/// Friction is the per-tick multiplicative decay `v -= friction * dt * v`,
/// not a continuous-time drag. Velocity keeps decaying during an explosion
/// but the hull only turns and moves while intact.
pub fn integrate(ship: &mut Ship, tuning: &Tuning) {
    if ship.dead {
        return;
    }

    let dt = tuning.dt();
    if ship.thrusting {
        ship.vel += heading_vector(ship.angle) * (tuning.ship_thrust * dt);
    } else {
        ship.vel -= ship.vel * (tuning.friction * dt);
    }

    if !ship.is_exploding() {
        ship.angle += ship.rot;
        ship.pos += ship.vel;
    }

    ship.pos = wrap_position(ship.pos, tuning.field_size(), ship.radius);
}

/// Start the explosion if the ship is vulnerable. Returns true on effect.
pub fn hit(ship: &mut Ship, tuning: &Tuning) -> bool {
    if ship.status() != ShipStatus::Normal {
        return false;
    }
    ship.explode_time = tuning.ship_explode_ticks();
    true
}

/// Step the invincibility blink; paused while exploding
pub fn tick_blink(ship: &mut Ship, tuning: &Tuning) {
    if ship.is_exploding() || ship.blink_num == 0 {
        return;
    }
    ship.blink_time = ship.blink_time.saturating_sub(1);
    if ship.blink_time == 0 {
        ship.blink_time = tuning.blink_ticks();
        ship.blink_num -= 1;
    }
}

/// Count the explosion down; on completion spend a life and respawn or end
/// the game
pub fn tick_explode(state: &mut GameState) {
    let ship = &mut state.ship;
    if !ship.is_exploding() {
        return;
    }
    ship.explode_time -= 1;
    if ship.explode_time > 0 {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.ship.dead = true;
        state.message = Message::new("Game Over");
        log::info!(
            "Game over at level {} with score {}",
            state.level + 1,
            state.score
        );
    } else {
        respawn(state);
        log::debug!("Ship respawned, {} lives left", state.lives);
    }
}

/// Replace the ship with a fresh invincible one at the field centre
pub fn respawn(state: &mut GameState) {
    state.ship = Ship::new(&state.tuning);
}
