//! Boss movement finite state machine.
//!
//! `Descending` moves straight down to a fixed line, then the boss switches
//! permanently to `Patrolling` and sweeps side to side between the screen edges.

use astroblast_core::constants::BOSS_PATROL_SPEED;
use astroblast_core::enums::BossPhase;
use astroblast_core::types::Vec2;

/// Input to the boss FSM for one tick.
pub struct BossContext {
    pub phase: BossPhase,
    pub position: Vec2,
    /// Line the boss settles on before patrolling.
    pub target_y: f32,
    /// Descent speed (px/s).
    pub speed: f32,
    /// Lateral direction while patrolling: `1.0` right, `-1.0` left.
    pub heading: f32,
    pub viewport_width: f32,
    pub half_width: f32,
    pub dt: f32,
}

/// Output from the boss FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossUpdate {
    pub new_phase: BossPhase,
    pub new_position: Vec2,
    pub new_heading: f32,
    pub phase_changed: bool,
}

/// Evaluate the FSM for one tick.
pub fn evaluate(ctx: &BossContext) -> BossUpdate {
    match ctx.phase {
        BossPhase::Descending => evaluate_descending(ctx),
        BossPhase::Patrolling => evaluate_patrolling(ctx),
    }
}

fn evaluate_descending(ctx: &BossContext) -> BossUpdate {
    let next_y = ctx.position.y + ctx.speed * ctx.dt;
    if next_y >= ctx.target_y {
        return BossUpdate {
            new_phase: BossPhase::Patrolling,
            new_position: Vec2::new(ctx.position.x, ctx.target_y),
            new_heading: ctx.heading,
            phase_changed: true,
        };
    }
    BossUpdate {
        new_phase: BossPhase::Descending,
        new_position: Vec2::new(ctx.position.x, next_y),
        new_heading: ctx.heading,
        phase_changed: false,
    }
}

fn evaluate_patrolling(ctx: &BossContext) -> BossUpdate {
    let left = ctx.half_width;
    let right = ctx.viewport_width - ctx.half_width;

    // Screen narrower than the boss: park it in the middle.
    if right <= left {
        return BossUpdate {
            new_phase: BossPhase::Patrolling,
            new_position: Vec2::new(ctx.viewport_width / 2.0, ctx.position.y),
            new_heading: ctx.heading,
            phase_changed: false,
        };
    }

    let heading = if ctx.heading < 0.0 { -1.0 } else { 1.0 };
    let mut x = ctx.position.x + heading * BOSS_PATROL_SPEED * ctx.dt;
    let mut new_heading = heading;
    if x <= left {
        x = left;
        new_heading = 1.0;
    } else if x >= right {
        x = right;
        new_heading = -1.0;
    }

    BossUpdate {
        new_phase: BossPhase::Patrolling,
        new_position: Vec2::new(x, ctx.position.y),
        new_heading,
        phase_changed: false,
    }
}
