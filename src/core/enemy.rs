//! Enemy data and the live enemy set.

/// Starting (and maximum) health of a freshly spawned enemy.
pub const ENEMY_MAX_HEALTH: u32 = 3;

/// Stable handle for an enemy; survives removals of other enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub x: f32,
    pub y: f32,
    pub health: u32,
}

impl Enemy {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Vector and distance from `(px, py)` to this enemy.
    #[inline]
    pub fn offset_from(&self, px: f32, py: f32) -> (f32, f32, f32) {
        let dx = self.x - px;
        let dy = self.y - py;
        (dx, dy, dx.hypot(dy))
    }
}

/// Result of applying one point of damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Damage {
    Wounded { remaining: u32 },
    Killed,
}

/// Live enemies in spawn order. Only shrinks; there is no respawn.
#[derive(Debug, Clone, Default)]
pub struct EnemySet {
    enemies: Vec<Enemy>,
    next_id: u32,
}

impl EnemySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns everyone in `spawns` with the given starting health.
    pub fn from_spawns(spawns: &[(f32, f32)], health: u32) -> Self {
        let mut set = Self::new();
        for &(x, y) in spawns {
            set.spawn(x, y, health);
        }
        set
    }

    pub fn spawn(&mut self, x: f32, y: f32, health: u32) -> EnemyId {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        if health > 0 {
            self.enemies.push(Enemy { id, x, y, health });
        }
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    #[inline] pub fn len(&self) -> usize { self.enemies.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.enemies.is_empty() }

    /// Takes one point of health from `id`, removing it at zero.
    /// Returns `None` if `id` is not alive.
    pub fn damage(&mut self, id: EnemyId) -> Option<Damage> {
        let idx = self.enemies.iter().position(|e| e.id == id)?;
        let e = &mut self.enemies[idx];
        e.health = e.health.saturating_sub(1);
        let outcome = if e.health == 0 {
            // `remove` keeps spawn order for the sprite pass
            self.enemies.remove(idx);
            Damage::Killed
        } else {
            Damage::Wounded { remaining: e.health }
        };
        self.debug_check();
        Some(outcome)
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.enemies.iter().all(Enemy::is_alive),
            "live set holds an enemy with no health"
        );
    }
}
