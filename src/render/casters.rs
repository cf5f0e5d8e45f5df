//! Fixed-step ray marcher.
use crate::core::angle::normalize_angle;
use crate::core::grid::TileGrid;

/// Distance advanced per sample, in world units.
pub const MARCH_STEP: f32 = 1.0;

/// Walks a ray from `(ox, oy)` along `a` one unit at a time and returns the
/// distance of the first sample that lands in a wall, or `max_distance` if
/// nothing is hit before the cap.
///
/// The origin sample itself is never tested. Silhouettes at tile corners
/// depend on the unit step, so this is deliberately not a grid traversal.
pub fn march(grid: &TileGrid, ox: f32, oy: f32, a: f32, max_distance: f32) -> f32 {
    if !(max_distance > 0.0) {
        return 0.0;
    }
    let a = normalize_angle(a);
    let (cos, sin) = (a.cos(), a.sin());

    let mut d = 0.0;
    while d < max_distance {
        d = (d + MARCH_STEP).min(max_distance);
        if grid.is_solid(ox + cos * d, oy + sin * d) {
            return d;
        }
    }
    max_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn box_map() -> TileGrid {
        TileGrid::parse(
            &[
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
            ],
            64.0,
        )
        .expect("valid map")
    }

    #[test]
    fn hits_near_walls_on_each_axis() {
        let g = box_map();
        // east wall column 9 starts at x = 576
        assert_eq!(march(&g, 96.0, 96.0, 0.0, 1000.0), 480.0);
        // west wall ends at x = 64 (first solid sample is x < 64)
        assert_eq!(march(&g, 96.0, 96.0, PI, 1000.0), 33.0);
        assert_eq!(march(&g, 96.0, 96.0, FRAC_PI_2, 1000.0), 480.0);
    }

    #[test]
    fn zero_cap_returns_immediately() {
        let g = box_map();
        assert_eq!(march(&g, 96.0, 96.0, 0.0, 0.0), 0.0);
        assert_eq!(march(&g, 96.0, 96.0, 0.0, -5.0), 0.0);
    }

    #[test]
    fn open_ray_returns_cap() {
        let g = box_map();
        assert_eq!(march(&g, 96.0, 96.0, 0.0, 100.0), 100.0);
        assert_eq!(march(&g, 96.0, 96.0, 0.0, 10.5), 10.5);
    }

    #[test]
    fn negative_angles_match_their_normal_form() {
        let g = box_map();
        let a = march(&g, 300.0, 400.0, -FRAC_PI_2, 1000.0);
        let b = march(&g, 300.0, 400.0, 3.0 * FRAC_PI_2, 1000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn nothing_solid_before_the_hit() {
        let g = box_map();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let a: f32 = rng.gen_range(0.0..TAU);
            let d = march(&g, 96.0, 96.0, a, 1000.0);
            assert!(d <= 1000.0);
            let (c, s) = (a.cos(), a.sin());
            let mut t = 1.0;
            while t < d {
                assert!(!g.is_solid(96.0 + c * t, 96.0 + s * t), "solid at {t} < {d} for {a}");
                t += 1.0;
            }
            assert!(g.is_solid(96.0 + c * d, 96.0 + s * d));
        }
    }
}
