//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The launched ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at rest at the top-center of an arena
    pub fn at_start(width: f32) -> Self {
        Self {
            pos: Vec2::new(width / 2.0, BALL_RADIUS),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

/// An in-progress slingshot drag
///
/// Exists only between a grab (pointer down inside the ball) and the release
/// or cancellation of that gesture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aim {
    /// Ball position captured at the grab
    pub start: Vec2,
    /// Latest pointer position
    pub end: Vec2,
}

/// A rectangular hit zone ("ragdoll")
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    pub hit: bool,
}

impl Target {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena width in pixels
    pub width: f32,
    /// Arena height in pixels
    pub height: f32,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub tick: u64,
    pub ball: Ball,
    /// Active slingshot gesture, if any
    pub aim: Option<Aim>,
    /// Current target batch, in creation order
    pub targets: Vec<Target>,
    /// Recent ball positions, oldest first (capped)
    pub trail: Vec<Vec2>,
    /// Recent wall-hit positions, oldest first (capped)
    pub bounces: Vec<Vec2>,
    pub score: u64,
    /// Starts at 1, advances by one per respawn
    pub level: u32,
    pub game_over: bool,
    /// Tick at which the pending respawn fires
    pub respawn_at: Option<u64>,
}

impl GameState {
    /// Create a fresh state for an arena of the given size
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let ball = Ball::at_start(width);
        let mut state = Self {
            width,
            height,
            seed,
            tick: 0,
            ball,
            aim: None,
            targets: Vec::new(),
            trail: vec![ball.pos],
            bounces: Vec::new(),
            score: 0,
            level: 1,
            game_over: false,
            respawn_at: None,
        };
        state.targets = state.roll_targets(INITIAL_TARGETS);
        state
    }

    /// Restore the initial state, cancelling any pending respawn
    pub fn reset(&mut self) {
        self.ball = Ball::at_start(self.width);
        self.aim = None;
        self.trail = vec![self.ball.pos];
        self.bounces.clear();
        self.score = 0;
        self.level = 1;
        self.game_over = false;
        self.respawn_at = None;
        self.tick = 0;
        self.targets = self.roll_targets(INITIAL_TARGETS);
    }

    pub fn all_targets_hit(&self) -> bool {
        self.targets.iter().all(|t| t.hit)
    }

    /// Generate a batch of randomly sized and placed targets
    ///
    /// Randomness derives from the run seed and the current level, so a
    /// given seed reproduces a run and no two live batches share a stream.
    /// Placement keeps every target fully on-canvas, below the readout
    /// margin and above the reserved bottom band.
    pub fn roll_targets(&self, count: usize) -> Vec<Target> {
        let batch_seed = self
            .seed
            .wrapping_add((self.level as u64).wrapping_mul(2654435761));
        let mut rng = Pcg32::seed_from_u64(batch_seed);

        (0..count)
            .map(|_| {
                let w = rng.random_range(TARGET_MIN_SIZE..TARGET_MAX_SIZE);
                let h = rng.random_range(TARGET_MIN_SIZE..TARGET_MAX_SIZE);
                let x = rng.random_range(0.0..self.width - w);
                let y =
                    SPAWN_TOP_MARGIN + rng.random_range(0.0..self.height - h - SPAWN_V_RESERVE);
                Target {
                    pos: Vec2::new(x, y),
                    size: Vec2::new(w, h),
                    hit: false,
                }
            })
            .collect()
    }
}
