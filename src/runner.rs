//! Fixed-step driver
//!
//! Owns a `GameState`, buffers input events between ticks and converts
//! elapsed wall-clock time into whole ticks.

use crate::consts::MAX_SUBSTEPS;
use crate::error::TuningError;
use crate::sim::{FrameSnapshot, GameState, InputEvent, TickInput, tick};
use crate::tuning::Tuning;

/// A running game plus its input queue and time accumulator
pub struct Session {
    state: GameState,
    pending: TickInput,
    accumulator: f32,
}

impl Session {
    /// Validate `tuning` and start a game. Bad tuning fails here, never mid-run.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        let tuning = tuning.validated()?;
        Ok(Self {
            state: GameState::new(tuning, seed),
            pending: TickInput::default(),
            accumulator: 0.0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Record an input event for the next tick
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.events.push(event);
    }

    /// Request a fresh game at the next tick boundary
    pub fn request_restart(&mut self) {
        self.pending.restart = true;
    }

    /// Run exactly one tick with whatever input is queued
    pub fn step(&mut self) {
        let input = std::mem::take(&mut self.pending);
        tick(&mut self.state, &input);
    }

    /// Run as many ticks as `elapsed` seconds cover. Returns ticks run.
    ///
    /// At most `MAX_SUBSTEPS` ticks run per call; the backlog beyond that is
    /// dropped to prevent a spiral of death.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let dt = self.state.tuning.dt();
        self.accumulator += elapsed.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= dt && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= dt;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= dt {
            log::warn!(
                "Dropping {:.3}s of simulation backlog",
                self.accumulator
            );
            self.accumulator = 0.0;
        }
        substeps
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Tuning::default(), 2024).expect("default tuning is valid")
    }

    #[test]
    fn test_rejects_invalid_tuning() {
        let tuning = Tuning {
            tick_rate: -30.0,
            ..Default::default()
        };
        assert!(Session::new(tuning, 1).is_err());
    }

    #[test]
    fn test_rejects_explosion_shorter_than_a_tick() {
        let tuning = Tuning {
            ship_explode_secs: 1e-8,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(tuning, 1),
            Err(TuningError::ZeroTicks { .. })
        ));
    }

    #[test]
    fn test_advance_runs_whole_ticks() {
        let mut session = session();
        let dt = session.state().tuning.dt();

        assert_eq!(session.advance(dt * 0.5), 0);
        assert_eq!(session.advance(dt * 0.6), 1);
        assert_eq!(session.advance(dt * 3.0), 3);
        assert_eq!(session.state().time_ticks, 4);
    }

    #[test]
    fn test_advance_caps_substeps() {
        let mut session = session();
        assert_eq!(session.advance(10.0), MAX_SUBSTEPS);
        // Backlog was dropped
        assert_eq!(session.advance(0.0), 0);
    }

    #[test]
    fn test_events_delivered_to_next_tick_only() {
        let mut session = session();
        session.push_event(InputEvent::FireStart);
        session.push_event(InputEvent::FireStop);
        session.push_event(InputEvent::FireStart);
        session.step();
        assert_eq!(session.state().ship.projectiles.len(), 2);

        // Queue is drained; nothing new fires
        session.step();
        assert_eq!(session.state().ship.projectiles.len(), 2);
    }

    #[test]
    fn test_restart_request() {
        let mut session = session();
        for _ in 0..10 {
            session.step();
        }
        session.request_restart();
        session.step();
        assert_eq!(session.state().ship.pos, session.state().tuning.field_center());
        assert_eq!(session.state().level, 0);
    }
}
