//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per external frame, no internal clock
//! - Seeded RNG only
//! - Stable iteration order (target-creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_target, bounce_walls, closest_point_on_rect, push_target};
pub use state::{Aim, Ball, GameState, Target};
pub use tick::tick;
