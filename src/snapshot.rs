//! Per-frame render state
//!
//! The simulation core never draws. Each frame the embedder captures a
//! snapshot and hands it to whatever renders: targets carry their hit flag
//! so the renderer can skip the dead ones, and the aim segment is present
//! only mid-gesture.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::state::GameState;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AimView {
    pub start: Vec2,
    pub end: Vec2,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetView {
    pub pos: Vec2,
    pub size: Vec2,
    pub hit: bool,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub ball: BallView,
    pub aim: Option<AimView>,
    /// Ball positions, oldest first
    pub trail: Vec<Vec2>,
    /// Wall-hit markers, oldest first
    pub bounces: Vec<Vec2>,
    pub targets: Vec<TargetView>,
    pub score: u64,
    pub level: u32,
    pub game_over: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            ball: BallView {
                pos: state.ball.pos,
                vel: state.ball.vel,
                radius: state.ball.radius,
            },
            aim: state.aim.map(|a| AimView {
                start: a.start,
                end: a.end,
            }),
            trail: state.trail.clone(),
            bounces: state.bounces.clone(),
            targets: state
                .targets
                .iter()
                .map(|t| TargetView {
                    pos: t.pos,
                    size: t.size,
                    hit: t.hit,
                })
                .collect(),
            score: state.score,
            level: state.level,
            game_over: state.game_over,
        }
    }
}
