//! Projectile lifecycle: firing, travel, impact explosions

use glam::Vec2;

use super::state::{Projectile, Ship};
use crate::tuning::Tuning;
use crate::{heading_vector, wrap_exact};

/// Fire from the ship's nose if the latch is open and capacity allows.
///
/// The latch closes even when nothing was fired; only a fire release
/// reopens it. Returns true if a projectile was added.
pub fn fire(ship: &mut Ship, tuning: &Tuning) -> bool {
    let fired = ship.can_shoot && ship.projectiles.len() < tuning.projectile_capacity;
    if fired {
        ship.projectiles.push(Projectile {
            pos: ship.nose(),
            vel: heading_vector(ship.angle) * (tuning.projectile_speed * tuning.dt()),
            distance: 0.0,
            explode_time: 0,
        });
    }
    ship.can_shoot = false;
    fired
}

/// Advance every projectile by one tick, dropping spent ones
pub fn tick_projectiles(projectiles: &mut Vec<Projectile>, max_distance: f32, field: Vec2) {
    for i in (0..projectiles.len()).rev() {
        let projectile = &mut projectiles[i];

        if projectile.distance > max_distance {
            projectiles.remove(i);
            continue;
        }

        if projectile.is_exploding() {
            projectile.explode_time -= 1;
            if projectile.explode_time == 0 {
                projectiles.remove(i);
                continue;
            }
        } else {
            projectile.pos += projectile.vel;
            projectile.distance += projectile.vel.length();
        }

        projectile.pos = Vec2::new(
            wrap_exact(projectile.pos.x, field.x),
            wrap_exact(projectile.pos.y, field.y),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> (Ship, Tuning) {
        let tuning = Tuning::default();
        (Ship::new(&tuning), tuning)
    }

    #[test]
    fn test_fire_spawns_at_nose_along_heading() {
        let (mut ship, tuning) = ship();
        assert!(fire(&mut ship, &tuning));

        let p = &ship.projectiles[0];
        // Facing up from (400, 300) with radius 15: nose is 20px above
        assert!((p.pos.x - 400.0).abs() < 1e-3);
        assert!((p.pos.y - 280.0).abs() < 1e-3);
        let speed = tuning.projectile_speed / tuning.tick_rate;
        assert!(p.vel.x.abs() < 1e-3);
        assert!((p.vel.y + speed).abs() < 1e-3);
        assert_eq!(p.distance, 0.0);
        assert_eq!(p.explode_time, 0);
    }

    #[test]
    fn test_fire_latch_allows_one_shot_per_press() {
        let (mut ship, tuning) = ship();
        assert!(fire(&mut ship, &tuning));
        assert!(!fire(&mut ship, &tuning));
        assert_eq!(ship.projectiles.len(), 1);

        ship.can_shoot = true;
        assert!(fire(&mut ship, &tuning));
        assert_eq!(ship.projectiles.len(), 2);
    }

    #[test]
    fn test_fire_respects_capacity_and_still_closes_latch() {
        let (mut ship, tuning) = ship();
        for _ in 0..tuning.projectile_capacity {
            ship.can_shoot = true;
            assert!(fire(&mut ship, &tuning));
        }
        ship.can_shoot = true;
        assert!(!fire(&mut ship, &tuning));
        assert_eq!(ship.projectiles.len(), tuning.projectile_capacity);
        assert!(!ship.can_shoot);
    }

    #[test]
    fn test_projectile_travels_and_accumulates_distance() {
        let mut projectiles = vec![Projectile {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(3.0, 4.0),
            distance: 0.0,
            explode_time: 0,
        }];
        tick_projectiles(&mut projectiles, 480.0, Vec2::new(800.0, 600.0));
        assert_eq!(projectiles[0].pos, Vec2::new(103.0, 104.0));
        assert!((projectiles[0].distance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_projectile_wraps_exactly_at_edge() {
        let mut projectiles = vec![Projectile {
            pos: Vec2::new(799.0, 1.0),
            vel: Vec2::new(2.0, -2.0),
            distance: 0.0,
            explode_time: 0,
        }];
        tick_projectiles(&mut projectiles, 480.0, Vec2::new(800.0, 600.0));
        assert_eq!(projectiles[0].pos, Vec2::new(0.0, 600.0));
    }

    #[test]
    fn test_over_range_projectile_removed_even_mid_explosion() {
        let mut projectiles = vec![
            Projectile {
                pos: Vec2::new(10.0, 10.0),
                vel: Vec2::ZERO,
                distance: 481.0,
                explode_time: 3,
            },
            Projectile {
                pos: Vec2::new(20.0, 20.0),
                vel: Vec2::new(1.0, 0.0),
                distance: 481.0,
                explode_time: 0,
            },
        ];
        tick_projectiles(&mut projectiles, 480.0, Vec2::new(800.0, 600.0));
        assert!(projectiles.is_empty());
    }

    #[test]
    fn test_explosion_counts_down_then_removes() {
        let mut projectiles = vec![Projectile {
            pos: Vec2::new(50.0, 50.0),
            vel: Vec2::new(5.0, 0.0),
            distance: 10.0,
            explode_time: 2,
        }];
        let field = Vec2::new(800.0, 600.0);

        tick_projectiles(&mut projectiles, 480.0, field);
        assert_eq!(projectiles.len(), 1);
        assert_eq!(projectiles[0].explode_time, 1);
        // Exploding projectiles hold still
        assert_eq!(projectiles[0].pos, Vec2::new(50.0, 50.0));

        tick_projectiles(&mut projectiles, 480.0, field);
        assert!(projectiles.is_empty());
    }

    #[test]
    fn test_range_limit_reached_after_expected_ticks() {
        let (mut ship, tuning) = ship();
        ship.angle = 0.0;
        fire(&mut ship, &tuning);
        let max = tuning.projectile_max_distance();
        let step = tuning.projectile_speed / tuning.tick_rate;
        // Removal happens on the tick after distance first exceeds the range
        let ticks_to_exceed = (max / step).floor() as usize + 1;

        for _ in 0..ticks_to_exceed {
            tick_projectiles(&mut ship.projectiles, max, tuning.field_size());
        }
        assert_eq!(ship.projectiles.len(), 1);
        tick_projectiles(&mut ship.projectiles, max, tuning.field_size());
        assert!(ship.projectiles.is_empty());
    }
}
