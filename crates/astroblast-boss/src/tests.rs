#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use astroblast_core::constants::*;
    use astroblast_core::enums::{BossPhase, FireWindow};
    use astroblast_core::types::{Vec2, DOWN};

    use crate::cycle::{advance_cycle, fires, is_charging, volley, window_at, wrap};
    use crate::fsm::{evaluate, BossContext};

    fn make_context(phase: BossPhase, position: Vec2, heading: f32, dt: f32) -> BossContext {
        BossContext {
            phase,
            position,
            target_y: BOSS_TARGET_Y,
            speed: 40.0,
            heading,
            viewport_width: 390.0,
            half_width: BOSS_SIZE.width / 2.0,
            dt,
        }
    }

    // ---- Movement ----

    #[test]
    fn test_descending_moves_straight_down() {
        let ctx = make_context(BossPhase::Descending, Vec2::new(195.0, BOSS_SPAWN_Y), 1.0, 0.5);
        let update = evaluate(&ctx);
        assert!(!update.phase_changed);
        assert_eq!(update.new_phase, BossPhase::Descending);
        assert_relative_eq!(update.new_position.y, BOSS_SPAWN_Y + 20.0);
        assert_relative_eq!(update.new_position.x, 195.0);
    }

    #[test]
    fn test_descending_settles_on_target_line() {
        let ctx = make_context(BossPhase::Descending, Vec2::new(195.0, BOSS_TARGET_Y - 1.0), 1.0, 0.1);
        let update = evaluate(&ctx);
        assert!(update.phase_changed);
        assert_eq!(update.new_phase, BossPhase::Patrolling);
        assert_eq!(update.new_position.y, BOSS_TARGET_Y);
    }

    #[test]
    fn test_descent_reaches_patrol_in_finite_ticks() {
        let mut phase = BossPhase::Descending;
        let mut position = Vec2::new(195.0, BOSS_SPAWN_Y);
        let mut ticks = 0;
        while phase == BossPhase::Descending {
            let update = evaluate(&make_context(phase, position, 1.0, 1.0 / 30.0));
            phase = update.new_phase;
            position = update.new_position;
            ticks += 1;
            assert!(ticks < 1000, "boss never finished descending");
        }
        assert_eq!(position.y, BOSS_TARGET_Y);
    }

    #[test]
    fn test_patrol_moves_laterally() {
        let ctx = make_context(BossPhase::Patrolling, Vec2::new(195.0, BOSS_TARGET_Y), -1.0, 0.1);
        let update = evaluate(&ctx);
        assert_relative_eq!(update.new_position.x, 195.0 - BOSS_PATROL_SPEED * 0.1);
        assert_eq!(update.new_position.y, BOSS_TARGET_Y);
        assert_eq!(update.new_heading, -1.0);
        assert!(!update.phase_changed);
    }

    #[test]
    fn test_patrol_reverses_at_edges() {
        let half = BOSS_SIZE.width / 2.0;

        let ctx = make_context(BossPhase::Patrolling, Vec2::new(390.0 - half - 1.0, 150.0), 1.0, 0.1);
        let update = evaluate(&ctx);
        assert_eq!(update.new_heading, -1.0);
        assert_eq!(update.new_position.x, 390.0 - half);

        let ctx = make_context(BossPhase::Patrolling, Vec2::new(half + 1.0, 150.0), -1.0, 0.1);
        let update = evaluate(&ctx);
        assert_eq!(update.new_heading, 1.0);
        assert_eq!(update.new_position.x, half);
    }

    #[test]
    fn test_patrol_never_leaves_screen() {
        let half = BOSS_SIZE.width / 2.0;
        let mut position = Vec2::new(195.0, 150.0);
        let mut heading = 1.0;
        for _ in 0..2000 {
            let update = evaluate(&make_context(BossPhase::Patrolling, position, heading, 1.0 / 30.0));
            position = update.new_position;
            heading = update.new_heading;
            assert!(position.x >= half && position.x <= 390.0 - half);
        }
    }

    #[test]
    fn test_patrol_on_narrow_screen_parks_in_middle() {
        let mut ctx = make_context(BossPhase::Patrolling, Vec2::new(10.0, 150.0), 1.0, 0.1);
        ctx.viewport_width = 100.0;
        let update = evaluate(&ctx);
        assert_eq!(update.new_position.x, 50.0);
    }

    // ---- Firing cycle ----

    #[test]
    fn test_charging_exactly_in_last_two_seconds() {
        for i in 0..50 {
            let pos = i as f32 / 10.0;
            assert_eq!(is_charging(pos), pos >= 3.0, "cycle position {pos}");
        }
    }

    #[test]
    fn test_window_boundaries() {
        assert_eq!(window_at(0.0), FireWindow::AimedSpread);
        assert_eq!(window_at(0.79), FireWindow::AimedSpread);
        assert_eq!(window_at(0.8), FireWindow::Pause);
        assert_eq!(window_at(1.79), FireWindow::Pause);
        assert_eq!(window_at(1.8), FireWindow::Fan);
        assert_eq!(window_at(2.6), FireWindow::Tail);
        assert_eq!(window_at(2.99), FireWindow::Tail);
        assert_eq!(window_at(3.0), FireWindow::Charging);
        assert_eq!(window_at(4.99), FireWindow::Charging);
        assert_eq!(window_at(5.0), FireWindow::AimedSpread);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_relative_eq!(advance_cycle(4.9, 0.2), 0.1, epsilon = 1e-5);
        assert_relative_eq!(wrap(12.5), 2.5, epsilon = 1e-5);
        assert_eq!(wrap(f32::NAN), 0.0);
        let w = wrap(-0.5);
        assert!((0.0..BOSS_CYCLE_SECS).contains(&w));
    }

    #[test]
    fn test_only_spread_and_fan_fire() {
        assert!(fires(FireWindow::AimedSpread));
        assert!(fires(FireWindow::Fan));
        assert!(!fires(FireWindow::Pause));
        assert!(!fires(FireWindow::Tail));
        assert!(!fires(FireWindow::Charging));
    }

    #[test]
    fn test_aimed_spread_targets_player() {
        let origin = Vec2::new(200.0, 150.0);
        let target = Vec2::new(200.0, 750.0);
        let shots = volley(FireWindow::AimedSpread, origin, target);
        assert_eq!(shots.len(), 3);

        // Centre shot goes straight at the target.
        assert_relative_eq!(shots[1].x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(shots[1].y, 1.0, epsilon = 1e-6);
        // Side shots lean left and right symmetrically.
        assert!(shots[0].x < 0.0 && shots[2].x > 0.0);
        assert_relative_eq!(shots[0].x, -shots[2].x, epsilon = 1e-6);
        for shot in &shots {
            assert_relative_eq!(shot.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_fan_is_fixed_and_symmetric() {
        let a = volley(FireWindow::Fan, Vec2::new(100.0, 150.0), Vec2::new(0.0, 800.0));
        let b = volley(FireWindow::Fan, Vec2::new(300.0, 150.0), Vec2::new(390.0, 800.0));
        assert_eq!(a.len(), 5);
        assert_eq!(a, b);
        assert_relative_eq!(a[2].x, DOWN.x, epsilon = 1e-6);
        assert_relative_eq!(a[2].y, DOWN.y, epsilon = 1e-6);
        assert_relative_eq!(a[0].x, -a[4].x, epsilon = 1e-6);
        assert!(a.iter().all(|d| d.y > 0.0));
    }

    #[test]
    fn test_spread_with_player_on_top_of_boss_falls_back_down() {
        let origin = Vec2::new(200.0, 150.0);
        let shots = volley(FireWindow::AimedSpread, origin, origin);
        assert_eq!(shots[1], DOWN);
    }

    #[test]
    fn test_silent_windows_produce_no_shots() {
        let origin = Vec2::new(200.0, 150.0);
        let target = Vec2::new(200.0, 750.0);
        assert!(volley(FireWindow::Pause, origin, target).is_empty());
        assert!(volley(FireWindow::Tail, origin, target).is_empty());
        assert!(volley(FireWindow::Charging, origin, target).is_empty());
    }
}
