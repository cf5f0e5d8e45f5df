//! Simulation state for one game: map, player, enemies and weapon.
use std::time::Duration;

use tracing::info;

use crate::core::combat::{CombatTuning, ShotOutcome, Weapon};
use crate::core::enemy::EnemySet;
use crate::core::grid::TileGrid;
use crate::core::player::{apply_movement, FrameInput, MovementTuning, Pose};
use crate::render::{Scene, Viewport};

pub struct World {
    pub grid: TileGrid,
    pub player: Pose,
    pub enemies: EnemySet,
    pub weapon: Weapon,
    pub movement: MovementTuning,
    pub combat: CombatTuning,
}

impl World {
    pub fn new(
        grid: TileGrid,
        player: Pose,
        spawns: &[(f32, f32)],
        movement: MovementTuning,
        combat: CombatTuning,
    ) -> Self {
        let enemies = EnemySet::from_spawns(spawns, combat.max_health);
        info!(
            width = grid.width(),
            height = grid.height(),
            tile = grid.tile_size(),
            enemies = enemies.len(),
            "world ready"
        );
        Self { grid, player, enemies, weapon: Weapon::new(), movement, combat }
    }

    /// Movement, cooldown, then the shot. Runs before the frame's render
    /// pass so the sprite projection sees the post-shot enemy set.
    pub fn step(&mut self, input: &FrameInput, dt: Duration) -> Option<ShotOutcome> {
        apply_movement(&mut self.player, input, &self.grid, &self.movement, dt.as_secs_f32());
        self.weapon.tick(dt);
        input
            .shoot
            .then(|| self.weapon.fire(&self.grid, &self.player, &mut self.enemies, &self.combat))
    }

    pub fn scene(&self, view: &Viewport) -> Scene {
        let mut scene = Scene::default();
        self.render_into(&mut scene, view);
        scene
    }

    pub fn render_into(&self, scene: &mut Scene, view: &Viewport) {
        scene.rebuild(&self.grid, &self.player, &self.enemies, view, self.combat.max_health);
    }

    /// All enemies cleared.
    pub fn cleared(&self) -> bool {
        self.enemies.is_empty()
    }
}
