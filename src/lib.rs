//! First-person corridor ray caster with hitscan combat.
//!
//! The `core` and `render` modules are pure: a tile grid, a pose and an
//! enemy list go in, wall columns, sprite placements and shot outcomes come
//! out. The `app` module (feature `app`) wires them to a raylib window and
//! rodio audio.

pub mod config;
pub mod core;
pub mod logging;
pub mod render;

#[cfg(feature = "app")]
pub mod app;

pub use crate::config::{ConfigError, GameConfig};
pub use crate::core::combat::{select_target, CombatTuning, ShotOutcome, Weapon};
pub use crate::core::enemy::{Enemy, EnemyId, EnemySet};
pub use crate::core::grid::{MapError, TileGrid};
pub use crate::core::player::{FrameInput, Pose};
pub use crate::core::world::World;
pub use crate::render::casters::march;
pub use crate::render::render3d::{project_column, WallProjection};
pub use crate::render::sprites::{project_enemy, EnemyProjection};
pub use crate::render::{Scene, Viewport};
