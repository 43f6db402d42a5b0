//! Arena entities: the player, enemies and projectiles
//!
//! Entities are plain data with explicit `update` methods. The tick calls them
//! in a fixed order; nothing here runs on its own.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::tick::TickInput;
use crate::tuning::{EnemyTuning, PlayerTuning, ProjectileTuning};
use crate::{axis, seek_direction};

/// Anything that can be hit: a box plus a damage sink
pub trait Combatant {
    fn bounds(&self) -> Aabb;
    fn is_alive(&self) -> bool;
    /// Apply `damage`. Returns true only for the hit that kills; hits on an
    /// already-dead combatant do nothing and return false.
    fn take_hit(&mut self, damage: i32) -> bool;
}

/// Hit points with a fixed ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Raw value; may be negative after the killing blow
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Value for display, never below zero
    pub fn clamped(&self) -> i32 {
        self.current.max(0)
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Returns true if this hit took health from positive to `<= 0`
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.current -= amount.max(0);
        self.current <= 0
    }
}

/// A shot fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: f32,
    /// Unit direction of travel
    pub dir: Vec2,
    pub speed: f32,
    pub damage: i32,
    /// Seconds until expiry
    pub lifetime: f32,
    pub alive: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, dir: Vec2, damage: i32, tuning: &ProjectileTuning) -> Self {
        Self {
            pos,
            size: tuning.size,
            dir,
            speed: tuning.speed,
            damage,
            lifetime: tuning.lifetime,
            alive: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin(self.pos, self.size)
    }

    /// Move along `dir`; expire on timeout or once fully outside `arena`
    pub fn update(&mut self, dt: f32, arena: &Aabb) {
        if !self.alive {
            return;
        }
        self.pos += self.dir * self.speed * dt;
        self.lifetime -= dt;
        if self.lifetime <= 0.0 || !arena.overlaps(&self.bounds()) {
            self.alive = false;
        }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// The player: movement, health and a gun
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub health: Health,
    pub move_speed: f32,
    /// Shots per second
    pub fire_rate: f32,
    /// Seconds until the next shot is allowed
    pub fire_cooldown: f32,
    /// Damage given to newly fired projectiles
    pub weapon_damage: i32,
    /// Live projectiles, owned exclusively by the player
    pub projectiles: Vec<Projectile>,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            pos,
            size: tuning.size,
            health: Health::new(tuning.max_health),
            move_speed: tuning.move_speed,
            fire_rate: tuning.fire_rate,
            fire_cooldown: 0.0,
            weapon_damage: tuning.weapon_damage,
            projectiles: Vec::new(),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }

    /// Movement direction from the held buttons, normalized so diagonals
    /// are no faster than straight lines
    pub fn move_direction(input: &TickInput) -> Vec2 {
        Vec2::new(
            axis(input.move_left, input.move_right),
            axis(input.move_up, input.move_down),
        )
        .normalize_or_zero()
    }

    /// Move, fire if allowed, then advance and cull projectiles
    pub fn update(
        &mut self,
        dt: f32,
        input: &TickInput,
        arena: &Aabb,
        shot: &ProjectileTuning,
    ) {
        let dir = Self::move_direction(input);
        self.pos += dir * self.move_speed * dt;
        self.pos = arena.clamp_origin(self.pos, Vec2::splat(self.size));

        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        if input.fire && self.fire_cooldown <= 0.0 {
            self.fire(input.aim, shot);
        }

        for projectile in &mut self.projectiles {
            projectile.update(dt, arena);
        }
        self.projectiles.retain(|p| p.alive);
    }

    /// Spawn a projectile from the player's centre toward `aim`.
    /// Aiming at the centre itself (or at a non-finite point) fires nothing.
    fn fire(&mut self, aim: Vec2, shot: &ProjectileTuning) {
        let origin = self.center();
        let dir = seek_direction(origin, aim);
        if dir == Vec2::ZERO {
            return;
        }
        let pos = origin - Vec2::splat(shot.size * 0.5);
        self.projectiles
            .push(Projectile::new(pos, dir, self.weapon_damage, shot));
        self.fire_cooldown = 1.0 / self.fire_rate;
    }
}

impl Combatant for Player {
    fn bounds(&self) -> Aabb {
        Aabb::from_origin(self.pos, self.size)
    }

    fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    fn take_hit(&mut self, damage: i32) -> bool {
        self.health.apply_damage(damage)
    }
}

/// A pursuing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub health: Health,
    pub move_speed: f32,
    /// Damage dealt to the player on contact
    pub contact_damage: i32,
    /// Seconds between contact hits (0 = every tick)
    pub contact_cooldown: f32,
    /// Seconds until this enemy may deal contact damage again
    pub contact_timer: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, health: i32, tuning: &EnemyTuning) -> Self {
        Self {
            id,
            pos,
            size: tuning.size,
            health: Health::new(health),
            move_speed: tuning.move_speed,
            contact_damage: tuning.contact_damage,
            contact_cooldown: tuning.contact_cooldown,
            contact_timer: 0.0,
        }
    }

    /// Seek straight toward `target`. Standing exactly on it means no move.
    pub fn update(&mut self, dt: f32, target: Vec2) {
        if !self.is_alive() {
            return;
        }
        let dir = seek_direction(self.pos, target);
        self.pos += dir * self.move_speed * dt;
        self.contact_timer = (self.contact_timer - dt).max(0.0);
    }

    /// Contact damage to deal this tick, if the cooldown allows it
    pub fn contact_hit(&mut self) -> Option<i32> {
        if self.contact_timer > 0.0 {
            return None;
        }
        self.contact_timer = self.contact_cooldown;
        Some(self.contact_damage)
    }
}

impl Combatant for Enemy {
    fn bounds(&self) -> Aabb {
        Aabb::from_origin(self.pos, self.size)
    }

    fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    fn take_hit(&mut self, damage: i32) -> bool {
        self.health.apply_damage(damage)
    }
}
