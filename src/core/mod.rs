//! Core game types and logic (map, player, enemies, shooting).
//!
//! Re-exports:
//! - `angle`: angle normalization and wrapping
//! - `grid`: tile map loading and solid queries
//! - `player`: pose, frame input and movement
//! - `enemy`: enemy data and the live set
//! - `combat`: hitscan target selection and weapon cooldown
//! - `world`: simulation state tying it all together

pub mod angle;
pub mod grid;
pub mod player;
pub mod enemy;
pub mod combat;
pub mod world;
