//! Wall and target collision geometry
//!
//! Everything here is axis-aligned: the arena is a rectangle, targets are
//! rectangles, and the ball is a circle tested against both.

use glam::Vec2;

use super::state::{Ball, Target};
use crate::consts::{PUSH_X, PUSH_Y, WALL_BOUNCE};

/// Closest point to `p` on the rectangle spanning `pos..pos + size`
#[inline]
pub fn closest_point_on_rect(p: Vec2, pos: Vec2, size: Vec2) -> Vec2 {
    p.clamp(pos, pos + size)
}

/// Does the ball overlap the target?
pub fn ball_hits_target(ball: &Ball, target: &Target) -> bool {
    let closest = closest_point_on_rect(ball.pos, target.pos, target.size);
    ball.pos.distance(closest) < ball.radius
}

/// Resolve wall collisions for one tick
///
/// Checked per axis, left/right before top/bottom; at most one horizontal
/// and one vertical event can fire per tick. On a hit the position is
/// clamped to the wall and the axis velocity is negated and damped.
/// Returns whether any wall was hit; the clamped ball position is where a
/// bounce marker belongs.
pub fn bounce_walls(ball: &mut Ball, width: f32, height: f32) -> bool {
    let mut bounced = false;
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x *= -WALL_BOUNCE;
        bounced = true;
    } else if ball.pos.x + ball.radius > width {
        ball.pos.x = width - ball.radius;
        ball.vel.x *= -WALL_BOUNCE;
        bounced = true;
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y *= -WALL_BOUNCE;
        bounced = true;
    } else if ball.pos.y + ball.radius > height {
        ball.pos.y = height - ball.radius;
        ball.vel.y *= -WALL_BOUNCE;
        bounced = true;
    }
    bounced
}

/// Shove a surviving target away from a freshly hit one
///
/// The center-to-center vector is normalized with a magnitude floor of 1.0
/// (coincident centers stay put instead of dividing by zero), scaled by the
/// fixed per-axis push distances, and the result is clamped back inside the
/// arena.
pub fn push_target(from: Vec2, target: &mut Target, width: f32, height: f32) {
    let delta = target.center() - from;
    let mag = delta.length().max(1.0);
    target.pos += delta / mag * Vec2::new(PUSH_X, PUSH_Y);
    target.pos = target
        .pos
        .clamp(Vec2::ZERO, Vec2::new(width, height) - target.size);
}
