//! Discrete input events and the per-tick input batch
//!
//! Events are recorded between ticks and applied in arrival order at the
//! start of the next tick, never in the middle of one.

use serde::{Deserialize, Serialize};

use super::projectile::fire;
use super::state::Ship;
use crate::tuning::Tuning;

/// A key transition reported by the input backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    RotateLeftStart,
    RotateLeftStop,
    RotateRightStart,
    RotateRightStop,
    ThrustStart,
    ThrustStop,
    FireStart,
    /// Releasing fire reopens the fire latch
    FireStop,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events recorded since the previous tick, oldest first
    pub events: Vec<InputEvent>,
    /// Throw the session away and start a new game
    pub restart: bool,
}

impl TickInput {
    pub fn from_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            restart: false,
        }
    }

    pub fn restart() -> Self {
        Self {
            events: Vec::new(),
            restart: true,
        }
    }
}

/// Apply one event to the ship. Dead ships ignore input.
pub fn apply_event(ship: &mut Ship, tuning: &Tuning, event: InputEvent) {
    if ship.dead {
        return;
    }

    match event {
        // Counter-clockwise is positive in a y-down screen with `(cos a, -sin a)`
        InputEvent::RotateLeftStart => ship.rot = tuning.turn_per_tick(),
        InputEvent::RotateRightStart => ship.rot = -tuning.turn_per_tick(),
        InputEvent::RotateLeftStop | InputEvent::RotateRightStop => ship.rot = 0.0,
        InputEvent::ThrustStart => ship.thrusting = true,
        InputEvent::ThrustStop => ship.thrusting = false,
        InputEvent::FireStart => {
            fire(ship, tuning);
        }
        InputEvent::FireStop => ship.can_shoot = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_events() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);

        apply_event(&mut ship, &tuning, InputEvent::RotateLeftStart);
        assert!(ship.rot > 0.0);
        apply_event(&mut ship, &tuning, InputEvent::RotateRightStart);
        assert!(ship.rot < 0.0);
        // Releasing either key stops the turn
        apply_event(&mut ship, &tuning, InputEvent::RotateLeftStop);
        assert_eq!(ship.rot, 0.0);
    }

    #[test]
    fn test_fire_press_release_cycle() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);

        apply_event(&mut ship, &tuning, InputEvent::FireStart);
        apply_event(&mut ship, &tuning, InputEvent::FireStart);
        assert_eq!(ship.projectiles.len(), 1);

        apply_event(&mut ship, &tuning, InputEvent::FireStop);
        apply_event(&mut ship, &tuning, InputEvent::FireStart);
        assert_eq!(ship.projectiles.len(), 2);
    }

    #[test]
    fn test_dead_ship_ignores_input() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        ship.dead = true;

        for event in [
            InputEvent::ThrustStart,
            InputEvent::RotateLeftStart,
            InputEvent::FireStart,
        ] {
            apply_event(&mut ship, &tuning, event);
        }
        assert!(!ship.thrusting);
        assert_eq!(ship.rot, 0.0);
        assert!(ship.projectiles.is_empty());
    }
}
