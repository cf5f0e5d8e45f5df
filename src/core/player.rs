use crate::core::angle::normalize_angle;
use crate::core::grid::TileGrid;

/// Player position and heading. `a` is kept in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub a: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, a: f32) -> Self {
        Self { x, y, a: normalize_angle(a) }
    }

    /// Unit vector along the heading.
    #[inline]
    pub fn dir(&self) -> (f32, f32) {
        (self.a.cos(), self.a.sin())
    }
}

/// One frame of player intent, produced by the input collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// Extra yaw this frame (mouse look), radians.
    pub turn_delta: f32,
    pub shoot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementTuning {
    /// World units per second.
    pub move_speed: f32,
    /// Radians per second.
    pub turn_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self { move_speed: 120.0, turn_speed: 3.0 }
    }
}

/// Applies one frame of movement. A step that would end inside a wall is
/// dropped whole; there is no sliding.
pub fn apply_movement(
    pose: &mut Pose,
    input: &FrameInput,
    grid: &TileGrid,
    tuning: &MovementTuning,
    dt: f32,
) {
    let mut yaw = input.turn_delta;
    if input.turn_left { yaw -= tuning.turn_speed * dt; }
    if input.turn_right { yaw += tuning.turn_speed * dt; }
    if yaw != 0.0 {
        pose.a = normalize_angle(pose.a + yaw);
    }

    let mut step = 0.0;
    if input.forward { step += tuning.move_speed * dt; }
    if input.backward { step -= tuning.move_speed * dt; }
    if step != 0.0 {
        let (c, s) = pose.dir();
        let nx = pose.x + c * step;
        let ny = pose.y + s * step;
        if !grid.is_solid(nx, ny) {
            pose.x = nx;
            pose.y = ny;
        }
    }
}
