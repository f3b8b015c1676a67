// =============================================================================
// AI — enemy steering
// =============================================================================

use glam::Vec2;

use crate::entity::Enemy;
use crate::geometry::direction_toward;

/// Set every enemy's velocity for this tick.
///
/// Followers step `speed` pixels per axis toward `target` (the player's
/// position), whatever the distance. Everyone else is held still.
pub fn steer_enemies(enemies: &mut [Enemy], target: Vec2, speed: f32) {
    for enemy in enemies.iter_mut() {
        enemy.body.velocity = Vec2::ZERO;
        if enemy.follows_player {
            enemy.body.velocity = direction_toward(enemy.body.position, target) * speed;
        }
    }
}
