//! Combat resolution
//!
//! Runs once per tick after all motion. Order matters:
//! 1. projectiles against enemies (each projectile lands at most one hit)
//! 2. enemies against the player (contact damage)
//! 3. dead projectiles and enemies are dropped
//!
//! Removal happens only in step 3 so that no entry is skipped mid-iteration.

use super::entity::{Combatant, Enemy, Player};
use super::events::GameEvent;

/// Stateless resolver for AABB combat between the player and enemies
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatResolver;

impl CombatResolver {
    /// Resolve all hits for this tick, appending events to `events`
    pub fn resolve(
        &self,
        player: &mut Player,
        enemies: &mut Vec<Enemy>,
        events: &mut Vec<GameEvent>,
    ) {
        Self::projectile_hits(player, enemies, events);
        Self::contact_hits(player, enemies, events);

        player.projectiles.retain(|p| p.alive);
        enemies.retain(|e| e.is_alive());
    }

    fn projectile_hits(player: &mut Player, enemies: &mut [Enemy], events: &mut Vec<GameEvent>) {
        for projectile in player.projectiles.iter_mut().filter(|p| p.alive) {
            let shot = projectile.bounds();
            let Some(enemy) = enemies
                .iter_mut()
                .find(|e| e.is_alive() && e.bounds().overlaps(&shot))
            else {
                continue;
            };

            projectile.kill();
            if enemy.take_hit(projectile.damage) {
                log::debug!("Enemy {} killed", enemy.id);
                events.push(GameEvent::EnemyKilled {
                    enemy_id: enemy.id,
                    pos: enemy.pos,
                });
            }
        }
    }

    fn contact_hits(player: &mut Player, enemies: &mut [Enemy], events: &mut Vec<GameEvent>) {
        let body = player.bounds();
        for enemy in enemies
            .iter_mut()
            .filter(|e| e.is_alive() && e.bounds().overlaps(&body))
        {
            if !player.is_alive() {
                break;
            }
            let Some(damage) = enemy.contact_hit() else {
                continue;
            };

            let killed = player.take_hit(damage);
            events.push(GameEvent::PlayerDamaged {
                damage,
                remaining: player.health.clamped(),
            });
            if killed {
                events.push(GameEvent::PlayerKilled);
            }
        }
    }
}
