//! Hitscan shooting: target selection and the weapon cooldown.
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::core::angle::{angle_between, normalize_angle};
use crate::core::enemy::{Damage, EnemyId, EnemySet, ENEMY_MAX_HEALTH};
use crate::core::grid::TileGrid;
use crate::core::player::Pose;
use crate::render::casters::march;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatTuning {
    /// How far a shot can travel, world units.
    pub shoot_range: f32,
    /// Half-angle of the aiming cone, radians.
    pub aim_cone: f32,
    pub cooldown: Duration,
    pub max_health: u32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            shoot_range: 800.0,
            aim_cone: 0.035,
            cooldown: Duration::from_millis(300),
            max_health: ENEMY_MAX_HEALTH,
        }
    }
}

/// Picks the enemy a shot along `pose.a` would hit, if any.
///
/// A candidate must be closer than the range, inside the aiming cone and
/// closer than the first wall along the heading. The nearest candidate wins;
/// on equal distance the first one in set order is kept.
pub fn select_target(
    grid: &TileGrid,
    pose: &Pose,
    enemies: &EnemySet,
    tuning: &CombatTuning,
) -> Option<EnemyId> {
    let heading = normalize_angle(pose.a);
    let wall_distance = march(grid, pose.x, pose.y, heading, tuning.shoot_range);

    let mut best: Option<(EnemyId, f32)> = None;
    for e in enemies.iter() {
        let (dx, dy, dist) = e.offset_from(pose.x, pose.y);
        let angle_diff = angle_between(dy.atan2(dx), heading);
        if dist < tuning.shoot_range && angle_diff < tuning.aim_cone && dist < wall_distance {
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((e.id, dist));
            }
        }
    }
    best.map(|(id, _)| id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Trigger pulled while the weapon was cooling down; nothing happened.
    CoolingDown,
    Miss,
    Hit { id: EnemyId, remaining: u32 },
    Kill { id: EnemyId },
}

impl ShotOutcome {
    /// Did the shot land on an enemy?
    pub fn target(&self) -> Option<EnemyId> {
        match *self {
            ShotOutcome::Hit { id, .. } | ShotOutcome::Kill { id } => Some(id),
            _ => None,
        }
    }
}

/// Rate-limited hitscan weapon.
#[derive(Debug, Clone, Default)]
pub struct Weapon {
    cooldown_remaining: Duration,
}

impl Weapon {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ready(&self) -> bool {
        self.cooldown_remaining.is_zero()
    }

    #[inline]
    pub fn cooldown_remaining(&self) -> Duration {
        self.cooldown_remaining
    }

    /// Advances the cooldown by one frame.
    pub fn tick(&mut self, dt: Duration) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(dt);
    }

    /// Fires along the pose heading. Requests during cooldown are dropped;
    /// any shot that goes off (hit or miss) restarts the cooldown.
    pub fn fire(
        &mut self,
        grid: &TileGrid,
        pose: &Pose,
        enemies: &mut EnemySet,
        tuning: &CombatTuning,
    ) -> ShotOutcome {
        if !self.ready() {
            debug!(remaining_ms = self.cooldown_remaining.as_millis() as u64, "shot dropped, cooling down");
            return ShotOutcome::CoolingDown;
        }
        self.cooldown_remaining = tuning.cooldown;

        let Some(id) = select_target(grid, pose, enemies, tuning) else {
            trace!(x = pose.x, y = pose.y, a = pose.a, "miss");
            return ShotOutcome::Miss;
        };
        match enemies.damage(id) {
            Some(Damage::Wounded { remaining }) => {
                debug!(enemy = id.0, remaining, "hit");
                ShotOutcome::Hit { id, remaining }
            }
            Some(Damage::Killed) => {
                info!(enemy = id.0, left = enemies.len(), "enemy down");
                ShotOutcome::Kill { id }
            }
            // select_target only returns live ids
            None => ShotOutcome::Miss,
        }
    }
}
