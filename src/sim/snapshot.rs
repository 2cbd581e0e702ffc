//! Read-only view of one frame for the renderer

use serde::Serialize;

use super::state::{GameState, Obstacle, Projectile, Ship};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipSnapshot {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub radius: f32,
    /// False while blinking off, exploding or dead
    pub visible: bool,
    pub exploding: bool,
    pub thrusting: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleSnapshot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub angle: f32,
    pub offsets: Vec<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileSnapshot {
    pub x: f32,
    pub y: f32,
    pub exploding: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSnapshot {
    pub text: String,
    pub alpha: f32,
}

/// Everything a renderer needs after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    /// 1-based level number as shown to the player
    pub level: u32,
    pub lives: u32,
    pub score: u64,
    pub game_over: bool,
    pub ship: ShipSnapshot,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
    /// `None` once the message has faded out
    pub message: Option<MessageSnapshot>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            level: state.level + 1,
            lives: state.lives,
            score: state.score,
            game_over: state.ship.dead,
            ship: ship_snapshot(&state.ship),
            obstacles: state.obstacles.iter().map(obstacle_snapshot).collect(),
            projectiles: state
                .ship
                .projectiles
                .iter()
                .map(projectile_snapshot)
                .collect(),
            message: state.message.is_visible().then(|| MessageSnapshot {
                text: state.message.text.clone(),
                alpha: state.message.alpha,
            }),
        }
    }
}

#[inline]
fn ship_snapshot(ship: &Ship) -> ShipSnapshot {
    ShipSnapshot {
        x: ship.pos.x,
        y: ship.pos.y,
        angle: ship.angle,
        radius: ship.radius,
        visible: ship.is_visible(),
        exploding: ship.is_exploding(),
        thrusting: ship.thrusting && !ship.dead,
    }
}

#[inline]
fn obstacle_snapshot(obstacle: &Obstacle) -> ObstacleSnapshot {
    ObstacleSnapshot {
        x: obstacle.pos.x,
        y: obstacle.pos.y,
        radius: obstacle.radius,
        angle: obstacle.angle,
        offsets: obstacle.offsets.clone(),
    }
}

#[inline]
fn projectile_snapshot(projectile: &Projectile) -> ProjectileSnapshot {
    ProjectileSnapshot {
        x: projectile.pos.x,
        y: projectile.pos.y,
        exploding: projectile.is_exploding(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_mirrors_state() {
        let state = GameState::new(Tuning::default(), 3);
        let snapshot = FrameSnapshot::capture(&state);

        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.lives, 3);
        assert_eq!(snapshot.obstacles.len(), state.obstacles.len());
        assert_eq!(snapshot.obstacles[0].offsets, state.obstacles[0].offsets);
        assert!(snapshot.ship.visible);
        assert!(!snapshot.game_over);
        let message = snapshot.message.expect("level banner");
        assert_eq!(message.text, "Level 1");
    }

    #[test]
    fn test_faded_message_is_omitted() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.message.alpha = -0.01;
        assert!(FrameSnapshot::capture(&state).message.is_none());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::new(Tuning::default(), 3);
        let json = serde_json::to_value(FrameSnapshot::capture(&state)).expect("serialize");
        assert_eq!(json["level"], 1);
        assert_eq!(json["ship"]["radius"], 15.0);
        assert!(json["obstacles"].is_array());
    }
}
