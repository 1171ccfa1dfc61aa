//! Sling Ball - a slingshot physics toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `engine`: Owning facade driven by the embedder's frame loop and pointer events
//! - `snapshot`: Per-frame render state consumed by the external renderer
//!
//! The crate never draws. The embedding layer calls [`SimulationEngine::step`]
//! once per display frame, forwards canvas-local pointer coordinates to the
//! engine's handlers, and reads a [`RenderSnapshot`] to paint the scene.

pub mod engine;
pub mod sim;
pub mod snapshot;

pub use engine::SimulationEngine;
pub use snapshot::RenderSnapshot;

/// Game configuration constants
///
/// Tuned for a 60 Hz frame cadence; gravity and damping are per-tick values
/// and must be rescaled if the engine is driven at a different rate.
pub mod consts {
    /// Ball radius in pixels
    pub const BALL_RADIUS: f32 = 18.0;
    /// Downward acceleration, px/tick²
    pub const GRAVITY: f32 = 0.5;
    /// Fraction of axis speed kept (negated) on a wall bounce
    pub const WALL_BOUNCE: f32 = 0.7;
    /// Uniform per-tick velocity damping (air friction)
    pub const FRICTION: f32 = 0.995;
    /// Drag-to-velocity scale for the slingshot launch
    pub const SLINGSHOT_SCALE: f32 = 0.15;

    /// Maximum trail points kept for rendering
    pub const TRAIL_LENGTH: usize = 100;
    /// Maximum bounce markers kept for rendering
    pub const MAX_BOUNCE_MARKERS: usize = 10;

    /// Horizontal push applied to surviving targets when one is hit
    pub const PUSH_X: f32 = 40.0;
    /// Vertical push applied to surviving targets when one is hit
    pub const PUSH_Y: f32 = 20.0;

    /// Smallest target edge length (inclusive)
    pub const TARGET_MIN_SIZE: f32 = 20.0;
    /// Largest target edge length (exclusive)
    pub const TARGET_MAX_SIZE: f32 = 40.0;
    /// Targets never spawn above this line (coordinate readout area)
    pub const SPAWN_TOP_MARGIN: f32 = 80.0;
    /// Total vertical span excluded from the spawn band
    pub const SPAWN_V_RESERVE: f32 = 100.0;

    /// Target count per level is min(2^level, MAX_TARGETS)
    pub const MAX_TARGETS: usize = 80;
    /// Targets in the opening batch
    pub const INITIAL_TARGETS: usize = 2;
    /// Per-target footprint used by the density game-over check
    /// (fixed 40x40 regardless of the target's true random size)
    pub const DENSITY_FOOTPRINT: f32 = 40.0;
    /// Fraction of arena area the footprints may cover before game over
    pub const DENSITY_LIMIT: f32 = 0.7;

    /// Ticks between the all-hit condition and the replacement batch
    /// (1 second at the nominal 60 Hz cadence)
    pub const RESPAWN_DELAY_TICKS: u64 = 60;
}
