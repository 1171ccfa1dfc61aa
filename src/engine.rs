//! Owning facade over the simulation
//!
//! The embedding layer drives this from its frame loop and pointer events:
//! `step` once per display frame, then `snapshot` to draw. Handlers take
//! canvas-local coordinates. One logical thread only; handlers and `step`
//! must interleave, never run concurrently.

use glam::Vec2;

use crate::consts::SLINGSHOT_SCALE;
use crate::sim::state::{Aim, GameState};
use crate::sim::tick;
use crate::snapshot::RenderSnapshot;

/// The simulation engine: all mutable game state behind one owner
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    state: GameState,
}

impl SimulationEngine {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            state: GameState::new(width, height, seed),
        }
    }

    /// Advance one frame
    pub fn step(&mut self) {
        tick::tick(&mut self.state);
    }

    /// Per-frame render state for the external renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    /// Full state access for embedders that read more than the snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Restore the initial state
    ///
    /// Safe at any time, including while a respawn is pending: the pending
    /// action is discarded and never fires into the fresh state.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Pointer pressed at canvas coordinates
    ///
    /// Grabbing inside the ball catches it: velocity drops to zero and a
    /// slingshot gesture begins, anchored at the ball position.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        if p.distance(self.state.ball.pos) < self.state.ball.radius {
            self.state.ball.vel = Vec2::ZERO;
            self.state.aim = Some(Aim {
                start: self.state.ball.pos,
                end: p,
            });
        }
    }

    /// Pointer moved: updates the gesture endpoint while aiming
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(aim) = &mut self.state.aim {
            aim.end = Vec2::new(x, y);
        }
    }

    /// Pointer released: launch opposite the drag, proportional to it
    pub fn pointer_up(&mut self) {
        if let Some(aim) = self.state.aim.take() {
            self.state.ball.vel = (aim.start - aim.end) * SLINGSHOT_SCALE;
            log::debug!(
                "launched at velocity ({:.2}, {:.2})",
                self.state.ball.vel.x,
                self.state.ball.vel.y
            );
        }
    }

    /// Pointer left the canvas: cancel any gesture without launching
    pub fn pointer_leave(&mut self) {
        self.state.aim = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_slingshot_launch_velocity() {
        let mut engine = SimulationEngine::new(480.0, 640.0, 7);
        engine.state.ball.pos = Vec2::new(100.0, 100.0);
        engine.pointer_down(100.0, 100.0);
        engine.pointer_move(80.0, 130.0);
        engine.pointer_up();
        let vel = engine.state.ball.vel;
        assert!((vel.x - 3.0).abs() < 1e-5);
        assert!((vel.y - -4.5).abs() < 1e-5);
    }

    #[test]
    fn test_grab_requires_touching_ball() {
        let mut engine = SimulationEngine::new(480.0, 640.0, 7);
        engine.pointer_down(0.0, 0.0);
        assert!(engine.state.aim.is_none());
        // just inside the radius
        engine.pointer_down(240.0 + BALL_RADIUS - 0.5, BALL_RADIUS);
        assert!(engine.state.aim.is_some());
    }

    #[test]
    fn test_grab_catches_ball_and_freezes_physics() {
        let mut engine = SimulationEngine::new(480.0, 640.0, 7);
        engine.state.ball.vel = Vec2::new(4.0, -6.0);
        let pos = engine.state.ball.pos;
        engine.pointer_down(pos.x, pos.y);
        assert_eq!(engine.state.ball.vel, Vec2::ZERO);
        for _ in 0..5 {
            engine.step();
        }
        assert_eq!(engine.state.ball.pos, pos);
        assert_eq!(engine.state.trail, vec![pos]);
    }

    #[test]
    fn test_pointer_leave_cancels_without_launching() {
        let mut engine = SimulationEngine::new(480.0, 640.0, 7);
        let pos = engine.state.ball.pos;
        engine.pointer_down(pos.x, pos.y);
        engine.pointer_move(50.0, 400.0);
        engine.pointer_leave();
        assert!(engine.state.aim.is_none());
        assert_eq!(engine.state.ball.vel, Vec2::ZERO);
        // gravity resumes on the next step
        engine.step();
        assert!(engine.state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_move_without_grab_is_ignored() {
        let mut engine = SimulationEngine::new(480.0, 640.0, 7);
        engine.pointer_move(10.0, 10.0);
        engine.pointer_up();
        assert!(engine.state.aim.is_none());
        assert_eq!(engine.state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_reset_cancels_pending_respawn() {
        let mut engine = SimulationEngine::new(480.0, 640.0, 7);
        for t in &mut engine.state.targets {
            t.hit = true;
        }
        engine.step();
        assert!(engine.state.respawn_at.is_some());

        engine.reset();
        assert!(engine.state.respawn_at.is_none());

        // hold the ball so nothing scores while the old deadline elapses
        let pos = engine.state.ball.pos;
        engine.pointer_down(pos.x, pos.y);
        for _ in 0..(RESPAWN_DELAY_TICKS * 2) {
            engine.step();
        }
        assert_eq!(engine.state.level, 1);
        assert_eq!(engine.state.targets.len(), INITIAL_TARGETS);
    }

    #[test]
    fn test_determinism() {
        let mut a = SimulationEngine::new(480.0, 640.0, 99);
        let mut b = SimulationEngine::new(480.0, 640.0, 99);
        for engine in [&mut a, &mut b] {
            let pos = engine.state.ball.pos;
            engine.pointer_down(pos.x, pos.y);
            engine.pointer_move(pos.x - 40.0, pos.y - 25.0);
            engine.pointer_up();
            for _ in 0..300 {
                engine.step();
            }
        }
        assert_eq!(a.state.ball.pos, b.state.ball.pos);
        assert_eq!(a.state.ball.vel, b.state.ball.vel);
        assert_eq!(a.state.score, b.state.score);
        assert_eq!(a.state.level, b.state.level);
        assert_eq!(a.state.tick, b.state.tick);
    }
}
