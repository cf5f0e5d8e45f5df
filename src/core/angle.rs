//! Angle helpers shared by the marcher, the projectors and the hit resolver.
use std::f32::consts::{PI, TAU};

/// Normalizes an angle into `[0, 2π)`.
///
/// `a % TAU` keeps the sign of `a`, so negatives get one `TAU` added back.
/// A tiny negative input rounds to exactly `TAU` after the add; that case is
/// folded to `0.0` so the upper bound stays exclusive. Non-finite input maps
/// to `0.0`.
#[inline]
pub fn normalize_angle(a: f32) -> f32 {
    if !a.is_finite() {
        return 0.0;
    }
    let mut r = a % TAU;
    if r < 0.0 {
        r += TAU;
    }
    if r >= TAU { 0.0 } else { r }
}

/// Signed difference `to - from` wrapped into `(-π, π]`.
///
/// Both inputs are normalized first, so a single wrap is enough.
#[inline]
pub fn wrap_signed(to: f32, from: f32) -> f32 {
    let mut d = normalize_angle(to) - normalize_angle(from);
    if d > PI {
        d -= TAU;
    } else if d <= -PI {
        d += TAU;
    }
    d
}

/// Absolute angular distance between two headings, in `[0, π]`.
#[inline]
pub fn angle_between(a: f32, b: f32) -> f32 {
    wrap_signed(a, b).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn normalize_stays_in_range_and_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..10_000 {
            let a: f32 = rng.gen_range(-1.0e4..1.0e4);
            let n = normalize_angle(a);
            assert!((0.0..TAU).contains(&n), "{a} -> {n}");
            assert_eq!(normalize_angle(n), n);
        }
    }

    #[test]
    fn normalize_handles_edges() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert_eq!(normalize_angle(-f32::EPSILON * 0.5), 0.0);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-6);
        assert_eq!(normalize_angle(f32::NAN), 0.0);
        assert_eq!(normalize_angle(f32::INFINITY), 0.0);
    }

    #[test]
    fn wrap_signed_crosses_zero_the_short_way() {
        let d = wrap_signed(0.1, TAU - 0.1);
        assert!((d - 0.2).abs() < 1e-5);
        let d = wrap_signed(TAU - 0.1, 0.1);
        assert!((d + 0.2).abs() < 1e-5);
        // exactly opposite resolves to +π, never -π
        assert!((wrap_signed(PI, 0.0) - PI).abs() < 1e-6);
    }

    #[test]
    fn angle_between_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let a: f32 = rng.gen_range(0.0..TAU);
            let b: f32 = rng.gen_range(0.0..TAU);
            let ab = angle_between(a, b);
            assert!((0.0..=PI).contains(&ab));
            assert!((ab - angle_between(b, a)).abs() < 1e-5);
        }
    }
}
