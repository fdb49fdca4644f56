//! A minimal pilot: sidestep incoming fire, otherwise line up under the
//! closest enemy and keep shooting.

use astroblast_core::commands::TickInput;
use astroblast_core::state::SessionSnapshot;

/// How far above the ship an enemy shot counts as a threat (px).
const THREAT_RANGE_Y: f32 = 220.0;
/// Horizontal error that maps to full stick deflection (px).
const FULL_DEFLECTION_PX: f32 = 40.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    pub fn steer(&self, snapshot: &SessionSnapshot) -> TickInput {
        let player = snapshot.player;
        let x = player.position.x;
        let lane = player.half_width();

        let threat = snapshot
            .enemy_projectiles
            .iter()
            .filter(|p| {
                let dy = player.position.y - p.position.y;
                dy > 0.0 && dy < THREAT_RANGE_Y && (p.position.x - x).abs() < lane
            })
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y));

        let target_x = match threat {
            // Step out of the lane on the side away from the shot.
            Some(shot) if shot.position.x >= x => x - lane * 2.0,
            Some(_) => x + lane * 2.0,
            None => snapshot
                .enemies
                .iter()
                .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
                .map(|e| e.position.x)
                .unwrap_or(snapshot.viewport.width / 2.0),
        };

        let intent = ((target_x - x) / FULL_DEFLECTION_PX).clamp(-1.0, 1.0);
        TickInput::new(intent, !snapshot.enemies.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astroblast_core::enums::{EnemyKind, Owner};
    use astroblast_core::entities::{Enemy, Projectile};
    use astroblast_core::types::{Vec2, DOWN};
    use astroblast_sim::{Session, SessionConfig};

    fn base_snapshot() -> SessionSnapshot {
        Session::new(SessionConfig::default()).snapshot()
    }

    #[test]
    fn test_idles_in_centre_without_enemies() {
        let input = Autopilot::new().steer(&base_snapshot());
        assert_eq!(input.move_intent, 0.0);
        assert!(!input.shoot);
    }

    #[test]
    fn test_tracks_lowest_enemy() {
        let mut snapshot = base_snapshot();
        snapshot.enemies.push(Enemy::new(1, Vec2::new(50.0, 100.0), EnemyKind::Normal));
        snapshot.enemies.push(Enemy::new(2, Vec2::new(350.0, 300.0), EnemyKind::Normal));
        let input = Autopilot::new().steer(&snapshot);
        assert_eq!(input.move_intent, 1.0);
        assert!(input.shoot);
    }

    #[test]
    fn test_dodges_incoming_fire() {
        let mut snapshot = base_snapshot();
        let player = snapshot.player.position;
        snapshot.enemies.push(Enemy::new(1, Vec2::new(player.x, 300.0), EnemyKind::Normal));
        snapshot.enemy_projectiles.push(Projectile {
            id: 2,
            position: player + Vec2::new(5.0, -100.0),
            owner: Owner::Enemy,
            direction: DOWN,
        });
        let input = Autopilot::new().steer(&snapshot);
        assert_eq!(input.move_intent, -1.0);
    }
}
