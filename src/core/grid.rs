//! Tile grid loading and occupancy queries.
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("tile size must be positive and finite, got {0}")]
    InvalidTileSize(f32),

    #[error("expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("could not read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable occupancy map. Everything outside the grid is solid.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    cells: Vec<bool>,
}

impl TileGrid {
    /// Builds a grid from row-major `solid` flags.
    pub fn from_cells(
        width: usize,
        height: usize,
        tile_size: f32,
        cells: Vec<bool>,
    ) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(MapError::InvalidTileSize(tile_size));
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(MapError::DimensionMismatch { expected, actual: cells.len() });
        }
        Ok(Self { width, height, tile_size, cells })
    }

    /// Parses text rows. `1`/`#` are walls, `0`/space/`.` are floor, anything
    /// else counts as wall. Short rows are padded with wall.
    pub fn parse<S: AsRef<str>>(rows: &[S], tile_size: f32) -> Result<Self, MapError> {
        let rows: Vec<&str> = rows
            .iter()
            .map(|r| r.as_ref().trim_end_matches(['\r', '\n']))
            .filter(|r| !r.is_empty())
            .collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            let mut n = 0;
            for ch in row.chars() {
                cells.push(!matches!(ch, '0' | ' ' | '.'));
                n += 1;
            }
            cells.extend(std::iter::repeat_n(true, width - n));
        }
        Self::from_cells(width, height, tile_size, cells)
    }

    /// Reads a text map from disk (same format as [`TileGrid::parse`]).
    pub fn load(path: impl AsRef<Path>, tile_size: f32) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rows: Vec<&str> = text.lines().collect();
        Self::parse(&rows, tile_size)
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }
    #[inline] pub fn tile_size(&self) -> f32 { self.tile_size }

    /// World-space extent `(width·tile, height·tile)`.
    pub fn world_size(&self) -> (f32, f32) {
        (self.width as f32 * self.tile_size, self.height as f32 * self.tile_size)
    }

    /// Cell lookup; out-of-range cells are solid.
    pub fn cell_solid(&self, i: usize, j: usize) -> bool {
        if i >= self.width || j >= self.height {
            return true;
        }
        self.cells[j * self.width + i]
    }

    /// Is the world point inside a wall (or outside the map)?
    pub fn is_solid(&self, wx: f32, wy: f32) -> bool {
        let (max_x, max_y) = self.world_size();
        // NaN fails every comparison below, so reject it up front
        if !(wx >= 0.0 && wy >= 0.0 && wx < max_x && wy < max_y) {
            return true;
        }
        let i = (wx / self.tile_size).floor() as usize;
        let j = (wy / self.tile_size).floor() as usize;
        self.cell_solid(i, j)
    }

    /// World-space center of cell `(i, j)`.
    pub fn cell_center(&self, i: usize, j: usize) -> (f32, f32) {
        ((i as f32 + 0.5) * self.tile_size, (j as f32 + 0.5) * self.tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> TileGrid {
        TileGrid::parse(&["1111", "1001", "1111"], 64.0).expect("valid map")
    }

    #[test]
    fn outside_bounds_is_solid() {
        let g = corridor();
        assert!(g.is_solid(-0.01, 96.0));
        assert!(g.is_solid(96.0, -0.01));
        assert!(g.is_solid(1000.0, 96.0));
        assert!(g.is_solid(f32::NAN, 96.0));
    }

    #[test]
    fn upper_bound_is_exclusive() {
        let open = TileGrid::from_cells(2, 1, 64.0, vec![false, false]).expect("valid map");
        assert!(!open.is_solid(127.99, 10.0));
        assert!(open.is_solid(128.0, 10.0));
        assert!(open.is_solid(10.0, 64.0));
    }

    #[test]
    fn floor_cells_are_open() {
        let g = corridor();
        assert!(!g.is_solid(96.0, 96.0));
        assert!(!g.is_solid(160.0, 96.0));
        assert!(g.is_solid(32.0, 96.0));
        assert!(g.is_solid(96.0, 32.0));
    }

    #[test]
    fn ragged_rows_are_padded_with_wall() {
        let g = TileGrid::parse(&["111", "1 ", "111"], 10.0).expect("valid map");
        assert_eq!((g.width(), g.height()), (3, 3));
        assert!(!g.cell_solid(1, 1));
        assert!(g.cell_solid(2, 1));
    }

    #[test]
    fn unknown_glyphs_are_walls() {
        let g = TileGrid::parse(&["0x."], 1.0).expect("valid map");
        assert!(!g.cell_solid(0, 0));
        assert!(g.cell_solid(1, 0));
        assert!(!g.cell_solid(2, 0));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(TileGrid::parse::<&str>(&[], 64.0), Err(MapError::Empty)));
        assert!(matches!(
            TileGrid::parse(&["0"], 0.0),
            Err(MapError::InvalidTileSize(_))
        ));
        assert!(matches!(
            TileGrid::from_cells(2, 2, 1.0, vec![false; 3]),
            Err(MapError::DimensionMismatch { expected: 4, actual: 3 })
        ));
        assert!(matches!(
            TileGrid::load("definitely/not/here.txt", 64.0),
            Err(MapError::Io { .. })
        ));
    }
}
