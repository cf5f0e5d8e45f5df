//! Wall column projection (distance, fish-eye correction, height, shade).
use crate::core::angle::normalize_angle;
use crate::core::grid::TileGrid;
use crate::core::player::Pose;
use crate::render::casters::march;
use crate::render::Viewport;

/// Smallest distance used as a divisor for on-screen sizes.
pub const MIN_PROJ_DISTANCE: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallProjection {
    pub column: u32,
    /// Radial distance returned by the marcher.
    pub distance: f32,
    /// Distance projected onto the view direction.
    pub corrected_distance: f32,
    pub screen_height: f32,
    /// Y of the top edge; the column is centered vertically.
    pub top: f32,
    pub shade: u8,
}

/// Brightness for a wall at `corrected` distance.
#[inline]
pub fn shade_for(corrected: f32, falloff: f32) -> u8 {
    (255.0 - corrected * falloff).clamp(0.0, 255.0) as u8
}

pub fn project_column(
    grid: &TileGrid,
    pose: &Pose,
    column: u32,
    view: &Viewport,
) -> WallProjection {
    let columns = view.width.max(1);
    let screen_offset = column as f32 / columns as f32 - 0.5;
    let ray_a = normalize_angle(pose.a + screen_offset * view.fov);

    let d = march(grid, pose.x, pose.y, ray_a, view.max_distance);
    let corrected = d * (ray_a - pose.a).cos();

    let h = view.height as f32;
    let screen_height = grid.tile_size() * h / corrected.max(MIN_PROJ_DISTANCE);
    WallProjection {
        column,
        distance: d,
        corrected_distance: corrected,
        screen_height,
        top: (h - screen_height) * 0.5,
        shade: shade_for(corrected, view.shade_falloff),
    }
}

/// One projection per screen column, left to right.
pub fn project_walls(grid: &TileGrid, pose: &Pose, view: &Viewport) -> Vec<WallProjection> {
    let mut out = Vec::with_capacity(view.width as usize);
    project_walls_into(grid, pose, view, &mut out);
    out
}

/// Same as [`project_walls`] but reuses `out`.
pub fn project_walls_into(
    grid: &TileGrid,
    pose: &Pose,
    view: &Viewport,
    out: &mut Vec<WallProjection>,
) {
    out.clear();
    out.extend((0..view.width).map(|i| project_column(grid, pose, i, view)));
}
