//! Per-frame simulation tick
//!
//! Advances the world one frame: gravity, wall bounces, air friction,
//! target hits with push response, trail bookkeeping, and the deferred
//! respawn that replaces the target set between levels.

use crate::consts::*;

use super::collision;
use super::state::GameState;

/// Advance the simulation by one frame tick
///
/// While the game is over nothing advances; while an aim gesture is held
/// the ball stays frozen and only the pending respawn clock runs.
pub fn tick(state: &mut GameState) {
    if state.game_over {
        return;
    }

    state.tick += 1;

    // The respawn deadline elapses in real frames, aiming or not.
    if let Some(due) = state.respawn_at {
        if state.tick >= due {
            state.respawn_at = None;
            respawn(state);
            if state.game_over {
                return;
            }
        }
    }

    if state.aim.is_some() {
        // Ball is held by the cursor; keep the trail from going stale.
        state.trail.clear();
        state.trail.push(state.ball.pos);
        return;
    }

    state.ball.vel.y += GRAVITY;
    state.ball.pos += state.ball.vel;

    if collision::bounce_walls(&mut state.ball, state.width, state.height) {
        state.bounces.push(state.ball.pos);
        if state.bounces.len() > MAX_BOUNCE_MARKERS {
            state.bounces.remove(0);
        }
    }

    state.ball.vel *= FRICTION;

    resolve_target_hits(state);

    state.trail.push(state.ball.pos);
    if state.trail.len() > TRAIL_LENGTH {
        state.trail.remove(0);
    }

    if state.all_targets_hit() && state.respawn_at.is_none() {
        state.respawn_at = Some(state.tick + RESPAWN_DELAY_TICKS);
    }
}

/// Test the ball against every surviving target, in creation order
///
/// Each hit scores one point and shoves the remaining survivors; a later
/// hit in the same tick pushes the then-current set.
fn resolve_target_hits(state: &mut GameState) {
    for i in 0..state.targets.len() {
        if state.targets[i].hit {
            continue;
        }
        if !collision::ball_hits_target(&state.ball, &state.targets[i]) {
            continue;
        }
        state.targets[i].hit = true;
        state.score += 1;
        log::debug!("target {} hit, score {}", i, state.score);

        let center = state.targets[i].center();
        for j in 0..state.targets.len() {
            if j != i && !state.targets[j].hit {
                collision::push_target(center, &mut state.targets[j], state.width, state.height);
            }
        }
    }
}

/// Replace the target set for the next level
///
/// Target count doubles per level up to the cap. If the new batch's fixed
/// 40x40 footprints would cover more than the density limit of the arena,
/// the run ends instead and the old set stays in place.
pub(crate) fn respawn(state: &mut GameState) {
    state.level += 1;
    let count = 2usize.saturating_pow(state.level).min(MAX_TARGETS);

    if count as f32 * DENSITY_FOOTPRINT * DENSITY_FOOTPRINT
        > state.width * state.height * DENSITY_LIMIT
    {
        state.game_over = true;
        log::info!("level {}: target density cap reached, game over", state.level);
        return;
    }

    state.targets = state.roll_targets(count);
    log::info!("level {}: spawned {} targets", state.level, count);
}
