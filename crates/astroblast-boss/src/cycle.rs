//! The boss firing cycle.
//!
//! A repeating five-second timeline split into windows. Two windows fire
//! (an aimed three-shot spread and a fixed five-shot fan); the last two
//! seconds are a charging tell with no shots.

use astroblast_core::constants::{BOSS_CYCLE_SECS, BOSS_FAN_ANGLES_DEG, BOSS_SPREAD_OFFSET_X};
use astroblast_core::enums::FireWindow;
use astroblast_core::types::{normalize, rotated_down, Vec2};

/// Window boundaries as `(start, end, window)`, half-open, covering `[0, BOSS_CYCLE_SECS)`.
const WINDOWS: [(f32, f32, FireWindow); 5] = [
    (0.0, 0.8, FireWindow::AimedSpread),
    (0.8, 1.8, FireWindow::Pause),
    (1.8, 2.6, FireWindow::Fan),
    (2.6, 3.0, FireWindow::Tail),
    (3.0, BOSS_CYCLE_SECS, FireWindow::Charging),
];

/// Wrap any cycle position into `[0, BOSS_CYCLE_SECS)`.
pub fn wrap(cycle_pos: f32) -> f32 {
    if !cycle_pos.is_finite() {
        return 0.0;
    }
    let wrapped = cycle_pos.rem_euclid(BOSS_CYCLE_SECS);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= BOSS_CYCLE_SECS {
        0.0
    } else {
        wrapped
    }
}

/// Move the cycle forward by `dt`, wrapping at the cycle length.
pub fn advance_cycle(cycle_pos: f32, dt: f32) -> f32 {
    wrap(cycle_pos + dt)
}

/// Which window `cycle_pos` falls in.
pub fn window_at(cycle_pos: f32) -> FireWindow {
    let pos = wrap(cycle_pos);
    WINDOWS
        .iter()
        .find(|(start, end, _)| pos >= *start && pos < *end)
        .map(|(_, _, window)| *window)
        .unwrap_or(FireWindow::Charging)
}

pub fn is_charging(cycle_pos: f32) -> bool {
    window_at(cycle_pos) == FireWindow::Charging
}

/// Whether `window` emits shots at all.
pub fn fires(window: FireWindow) -> bool {
    matches!(window, FireWindow::AimedSpread | FireWindow::Fan)
}

/// Shot directions for one volley from `origin`.
///
/// The spread aims at `target` and at points offset left and right of it;
/// the fan ignores `target`. Silent windows yield no shots.
pub fn volley(window: FireWindow, origin: Vec2, target: Vec2) -> Vec<Vec2> {
    match window {
        FireWindow::AimedSpread => [-BOSS_SPREAD_OFFSET_X, 0.0, BOSS_SPREAD_OFFSET_X]
            .iter()
            .map(|dx| normalize(origin, target + Vec2::new(*dx, 0.0)))
            .collect(),
        FireWindow::Fan => BOSS_FAN_ANGLES_DEG
            .iter()
            .map(|deg| rotated_down(*deg))
            .collect(),
        FireWindow::Pause | FireWindow::Tail | FireWindow::Charging => Vec::new(),
    }
}
