//! Enemy billboard projection.
//!
//! Exposes:
//! - `project_enemy`: screen placement and size of a single enemy
//! - `project_enemies`: every visible enemy, in spawn order (optionally sorted)
use std::cmp::Ordering;

use crate::core::angle::{normalize_angle, wrap_signed};
use crate::core::enemy::{Enemy, EnemyId, EnemySet};
use crate::core::grid::TileGrid;
use crate::core::player::Pose;
use crate::render::casters::march;
use crate::render::render3d::MIN_PROJ_DISTANCE;
use crate::render::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProjection {
    pub id: EnemyId,
    /// Horizontal center of the sprite in pixels.
    pub screen_x: f32,
    /// Side of the (square) sprite in pixels.
    pub sprite_size: f32,
    /// `health / max_health`, in `[0, 1]`.
    pub health_fraction: f32,
    pub distance: f32,
}

/// Projects one enemy. `None` when it sits outside the view cone
/// (`|δ| >= fov/2`). Walls are not consulted here.
pub fn project_enemy(
    pose: &Pose,
    enemy: &Enemy,
    view: &Viewport,
    tile_size: f32,
    max_health: u32,
) -> Option<EnemyProjection> {
    let (dx, dy, dist) = enemy.offset_from(pose.x, pose.y);
    let to_enemy = normalize_angle(dy.atan2(dx));
    let delta = wrap_signed(to_enemy, pose.a);
    let half_fov = view.fov * 0.5;
    if delta.abs() >= half_fov {
        return None;
    }

    let half_w = view.width as f32 * 0.5;
    let screen_x = delta.tan() * half_w / half_fov.tan() + half_w;
    let sprite_size = tile_size * view.height as f32 / dist.max(MIN_PROJ_DISTANCE);
    let health_fraction = if max_health == 0 {
        0.0
    } else {
        (enemy.health as f32 / max_health as f32).clamp(0.0, 1.0)
    };

    Some(EnemyProjection { id: enemy.id, screen_x, sprite_size, health_fraction, distance: dist })
}

/// Is there a wall between the pose and the enemy?
fn occluded(grid: &TileGrid, pose: &Pose, enemy: &Enemy) -> bool {
    let (dx, dy, dist) = enemy.offset_from(pose.x, pose.y);
    march(grid, pose.x, pose.y, dy.atan2(dx), dist) < dist
}

/// Projects every enemy in view. Output order follows the enemy set unless
/// `view.depth_sort_sprites` asks for far-to-near.
pub fn project_enemies(
    grid: &TileGrid,
    pose: &Pose,
    enemies: &EnemySet,
    view: &Viewport,
    max_health: u32,
) -> Vec<EnemyProjection> {
    let mut out: Vec<EnemyProjection> = enemies
        .iter()
        .filter(|e| !view.occlude_sprites || !occluded(grid, pose, e))
        .filter_map(|e| project_enemy(pose, e, view, grid.tile_size(), max_health))
        .collect();
    if view.depth_sort_sprites {
        // stable: equal distances keep spawn order
        out.sort_by(|a, b| b.distance.partial_cmp(&a.distance).unwrap_or(Ordering::Equal));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enemy::ENEMY_MAX_HEALTH;
    use std::f32::consts::{FRAC_PI_3, PI};

    fn enemy(x: f32, y: f32, health: u32) -> Enemy {
        Enemy { id: EnemyId(0), x, y, health }
    }

    fn view() -> Viewport {
        Viewport { width: 640, height: 480, fov: FRAC_PI_3, ..Viewport::default() }
    }

    #[test]
    fn dead_ahead_is_screen_center() {
        let pose = Pose::new(96.0, 96.0, 0.0);
        let v = view();
        let p = project_enemy(&pose, &enemy(200.0, 96.0, 3), &v, 64.0, ENEMY_MAX_HEALTH)
            .expect("in view");
        assert_eq!(p.screen_x, 320.0);
        assert!((p.sprite_size - 64.0 * 480.0 / 104.0).abs() < 1e-3);
        assert_eq!(p.health_fraction, 1.0);
        assert_eq!(p.distance, 104.0);
    }

    #[test]
    fn outside_cone_is_dropped() {
        let v = view();
        let pose = Pose::new(0.0, 0.0, 0.0);
        // just past the half-fov edge, on both sides
        for a in [FRAC_PI_3 * 0.5 + 0.01, -(FRAC_PI_3 * 0.5 + 0.01), PI] {
            let e = enemy(100.0 * a.cos(), 100.0 * a.sin(), 3);
            assert!(project_enemy(&pose, &e, &v, 64.0, 3).is_none(), "angle {a}");
        }
    }

    #[test]
    fn cone_wraps_across_zero_heading() {
        let v = view();
        // heading just below 2π, enemy just above 0
        let pose = Pose::new(0.0, 0.0, -0.1);
        let e = enemy(100.0 * 0.1f32.cos(), 100.0 * 0.1f32.sin(), 3);
        let p = project_enemy(&pose, &e, &v, 64.0, 3).expect("in view");
        assert!(p.screen_x > 320.0);
    }

    #[test]
    fn left_of_heading_lands_left_of_center() {
        let v = view();
        let pose = Pose::new(0.0, 0.0, 1.0);
        let a = 1.0 - 0.3f32;
        let e = enemy(50.0 * a.cos(), 50.0 * a.sin(), 2);
        let p = project_enemy(&pose, &e, &v, 64.0, 3).expect("in view");
        let expected = (-0.3f32).tan() * 320.0 / (FRAC_PI_3 * 0.5).tan() + 320.0;
        assert!((p.screen_x - expected).abs() < 0.05);
        assert!(p.screen_x < 320.0);
        assert!((p.health_fraction - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_enemy_stays_finite() {
        let v = view();
        let pose = Pose::new(10.0, 10.0, 0.0);
        let p = project_enemy(&pose, &enemy(10.0, 10.0, 3), &v, 64.0, 3).expect("in view");
        assert!(p.sprite_size.is_finite());
        assert!(p.screen_x.is_finite());
    }

    fn hall() -> TileGrid {
        TileGrid::parse(&["1111111111", "1000100001", "1111111111"], 64.0).expect("valid map")
    }

    #[test]
    fn emits_in_spawn_order_without_occlusion_by_default() {
        let g = hall();
        let pose = Pose::new(96.0, 96.0, 0.0);
        // second enemy sits behind the pillar at column 4
        let set = EnemySet::from_spawns(&[(200.0, 96.0), (400.0, 96.0), (150.0, 96.0)], 3);
        let out = project_enemies(&g, &pose, &set, &view(), 3);
        let ids: Vec<_> = out.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn optional_occlusion_and_depth_sort() {
        let g = hall();
        let pose = Pose::new(96.0, 96.0, 0.0);
        let set = EnemySet::from_spawns(&[(150.0, 96.0), (400.0, 96.0), (200.0, 96.0)], 3);
        let v = Viewport { occlude_sprites: true, depth_sort_sprites: true, ..view() };
        let out = project_enemies(&g, &pose, &set, &v, 3);
        let ids: Vec<_> = out.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2, 0]);
    }
}
