//! Ray-cast projection of the world onto the screen.
//!
//! Re-exports:
//! - `casters`: fixed-step ray marcher
//! - `render3d`: per-column wall projection
//! - `sprites`: enemy billboard projection

pub mod casters;
pub mod render3d;
pub mod sprites;

use std::f32::consts::FRAC_PI_3;

use crate::core::enemy::EnemySet;
use crate::core::grid::TileGrid;
use crate::core::player::Pose;
use render3d::{project_walls_into, WallProjection};
use sprites::{project_enemies, EnemyProjection};

/// Screen and camera parameters for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Pixels; also the number of wall columns.
    pub width: u32,
    pub height: u32,
    /// Full horizontal field of view, radians.
    pub fov: f32,
    /// March cap for wall columns.
    pub max_distance: f32,
    /// Shade lost per world unit of corrected distance.
    pub shade_falloff: f32,
    pub depth_sort_sprites: bool,
    pub occlude_sprites: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov: FRAC_PI_3,
            max_distance: 1000.0,
            shade_falloff: 0.7,
            depth_sort_sprites: false,
            occlude_sprites: false,
        }
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub walls: Vec<WallProjection>,
    pub sprites: Vec<EnemyProjection>,
}

impl Scene {
    /// Rebuilds this scene in place, reusing the column buffer.
    pub fn rebuild(
        &mut self,
        grid: &TileGrid,
        pose: &Pose,
        enemies: &EnemySet,
        view: &Viewport,
        max_health: u32,
    ) {
        project_walls_into(grid, pose, view, &mut self.walls);
        self.sprites = project_enemies(grid, pose, enemies, view, max_health);
    }
}
