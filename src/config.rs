//! Game configuration loaded from TOML. Every section has defaults, so a
//! partial (or missing) file is fine.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::combat::CombatTuning;
use crate::core::enemy::ENEMY_MAX_HEALTH;
use crate::core::grid::{MapError, TileGrid};
use crate::core::player::{MovementTuning, Pose};
use crate::core::world::World;
use crate::render::Viewport;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "corridor.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub view: ViewConfig,
    pub combat: CombatConfig,
    pub movement: MovementConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 800, height: 600, title: "corridor".to_string(), target_fps: 60 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Radians.
    pub fov: f32,
    pub max_view_distance: f32,
    pub shade_falloff: f32,
    pub depth_sort_sprites: bool,
    pub occlude_sprites: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let v = Viewport::default();
        Self {
            fov: v.fov,
            max_view_distance: v.max_distance,
            shade_falloff: v.shade_falloff,
            depth_sort_sprites: v.depth_sort_sprites,
            occlude_sprites: v.occlude_sprites,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub shoot_range: f32,
    pub aim_cone: f32,
    pub cooldown_ms: u64,
    pub max_health: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self { shoot_range: 800.0, aim_cone: 0.035, cooldown_ms: 300, max_health: ENEMY_MAX_HEALTH }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub move_speed: f32,
    pub turn_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        let m = MovementTuning::default();
        Self { move_speed: m.move_speed, turn_speed: m.turn_speed, mouse_sensitivity: 0.0025 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub tile_size: f32,
    /// Inline map rows; ignored when `file` is set.
    pub rows: Vec<String>,
    pub file: Option<PathBuf>,
    /// `[x, y, angle]`
    pub player: [f32; 3],
    pub enemies: Vec<[f32; 2]>,
}

impl Default for MapConfig {
    fn default() -> Self {
        let rows = [
            "1111111111",
            "1000000001",
            "1000010001",
            "1000010001",
            "1000010001",
            "1001110001",
            "1000000001",
            "1000000001",
            "1000000001",
            "1111111111",
        ];
        Self {
            tile_size: 64.0,
            rows: rows.iter().map(|r| r.to_string()).collect(),
            file: None,
            player: [96.0, 96.0, 0.0],
            enemies: vec![[288.0, 96.0], [480.0, 160.0], [160.0, 480.0], [480.0, 480.0]],
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Like [`GameConfig::load`], but a missing file means defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let cfg = Self::load(path)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fov = self.view.fov;
        if !(fov > 0.0 && fov < std::f32::consts::PI) {
            return Err(ConfigError::Invalid(format!("view.fov must be in (0, π), got {fov}")));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".to_string()));
        }
        if !(self.map.tile_size.is_finite() && self.map.tile_size > 0.0) {
            return Err(MapError::InvalidTileSize(self.map.tile_size).into());
        }
        if self.combat.max_health == 0 {
            return Err(ConfigError::Invalid("combat.max_health must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.window.width,
            height: self.window.height,
            fov: self.view.fov,
            max_distance: self.view.max_view_distance,
            shade_falloff: self.view.shade_falloff,
            depth_sort_sprites: self.view.depth_sort_sprites,
            occlude_sprites: self.view.occlude_sprites,
        }
    }

    pub fn combat_tuning(&self) -> CombatTuning {
        CombatTuning {
            shoot_range: self.combat.shoot_range,
            aim_cone: self.combat.aim_cone,
            cooldown: Duration::from_millis(self.combat.cooldown_ms),
            max_health: self.combat.max_health,
        }
    }

    pub fn movement_tuning(&self) -> MovementTuning {
        MovementTuning { move_speed: self.movement.move_speed, turn_speed: self.movement.turn_speed }
    }

    pub fn build_grid(&self) -> Result<TileGrid, MapError> {
        match &self.map.file {
            Some(path) => TileGrid::load(path, self.map.tile_size),
            None => TileGrid::parse(&self.map.rows, self.map.tile_size),
        }
    }

    /// Grid, player and enemies ready to play. The player must start on an
    /// open cell; enemies spawned inside walls are kept but logged.
    pub fn build_world(&self) -> Result<World, ConfigError> {
        let grid = self.build_grid()?;
        let [px, py, pa] = self.map.player;
        if grid.is_solid(px, py) {
            return Err(ConfigError::Invalid(format!("player starts inside a wall at ({px}, {py})")));
        }
        let spawns: Vec<(f32, f32)> = self.map.enemies.iter().map(|&[x, y]| (x, y)).collect();
        for &(x, y) in &spawns {
            if grid.is_solid(x, y) {
                warn!(x, y, "enemy spawns inside a wall");
            }
        }
        Ok(World::new(
            grid,
            Pose::new(px, py, pa),
            &spawns,
            self.movement_tuning(),
            self.combat_tuning(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_playable_world() {
        let cfg = GameConfig::default();
        cfg.validate().expect("defaults are valid");
        let world = cfg.build_world().expect("default world");
        assert_eq!(world.grid.width(), 10);
        assert_eq!(world.enemies.len(), 4);
        assert!(world.enemies.iter().all(|e| !world.grid.is_solid(e.x, e.y)));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let text = r#"
            [combat]
            cooldown_ms = 500

            [map]
            rows = ["111", "101", "111"]
            player = [96.0, 96.0, 0.0]
            enemies = []
        "#;
        let cfg = GameConfig::from_toml_str(text, Path::new("inline.toml")).expect("valid config");
        assert_eq!(cfg.combat_tuning().cooldown, Duration::from_millis(500));
        assert_eq!(cfg.combat.shoot_range, 800.0);
        assert_eq!(cfg.window.width, 800);
        let world = cfg.build_world().expect("world");
        assert_eq!(world.grid.width(), 3);
        assert!(world.cleared());
    }

    #[test]
    fn rejects_bad_values() {
        let bad_fov = "[view]\nfov = 3.5\n";
        assert!(matches!(
            GameConfig::from_toml_str(bad_fov, Path::new("x.toml")),
            Err(ConfigError::Invalid(_))
        ));
        let bad_toml = "[view\nfov = 1.0";
        assert!(matches!(
            GameConfig::from_toml_str(bad_toml, Path::new("x.toml")),
            Err(ConfigError::Parse { .. })
        ));
        let bad_tile = "[map]\ntile_size = -1.0\n";
        assert!(matches!(
            GameConfig::from_toml_str(bad_tile, Path::new("x.toml")),
            Err(ConfigError::Map(MapError::InvalidTileSize(_)))
        ));
    }

    #[test]
    fn player_in_wall_is_rejected() {
        let mut cfg = GameConfig::default();
        cfg.map.player = [10.0, 10.0, 0.0];
        assert!(matches!(cfg.build_world(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = GameConfig::load_or_default("no/such/corridor.toml").expect("defaults");
        assert_eq!(cfg.map.tile_size, 64.0);
        assert!(matches!(GameConfig::load("no/such/corridor.toml"), Err(ConfigError::Io { .. })));
    }
}
