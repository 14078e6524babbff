//! Distance and clamp primitives shared by every simulation step
//!
//! Anything that can produce a non-finite coordinate goes through
//! `clamp_or_center` / `sanitize_point` before it is stored.

use glam::Vec2;

use crate::consts::MAP_SIZE;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamp `v` into `[lo, hi]`, substituting the map center for non-finite input
#[inline]
pub fn clamp_or_center(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_finite() {
        v.clamp(lo, hi)
    } else {
        log::warn!("Non-finite coordinate {v}, falling back to map center");
        MAP_SIZE / 2.0
    }
}

/// Clamp both axes of a point into `[lo, hi]`
#[inline]
pub fn clamp_point(p: Vec2, lo: f32, hi: f32) -> Vec2 {
    Vec2::new(clamp_or_center(p.x, lo, hi), clamp_or_center(p.y, lo, hi))
}

/// Replace non-finite axes with the map center, leaving finite ones untouched
#[inline]
pub fn sanitize_point(p: Vec2) -> Vec2 {
    if p.is_finite() {
        return p;
    }
    log::warn!("Non-finite position {p}, falling back to map center");
    let center = MAP_SIZE / 2.0;
    Vec2::new(
        if p.x.is_finite() { p.x } else { center },
        if p.y.is_finite() { p.y } else { center },
    )
}

/// True when `p` lies strictly inside the map on both axes
#[inline]
pub fn inside_map(p: Vec2) -> bool {
    p.x > 0.0 && p.x < MAP_SIZE && p.y > 0.0 && p.y < MAP_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::ZERO, Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_finite() {
        assert_eq!(clamp_or_center(-5.0, 20.0, 780.0), 20.0);
        assert_eq!(clamp_or_center(900.0, 20.0, 780.0), 780.0);
        assert_eq!(clamp_or_center(123.0, 20.0, 780.0), 123.0);
    }

    #[test]
    fn test_clamp_non_finite_falls_back_to_center() {
        assert_eq!(clamp_or_center(f32::NAN, 20.0, 780.0), 400.0);
        assert_eq!(clamp_or_center(f32::INFINITY, 20.0, 780.0), 400.0);
        assert_eq!(clamp_or_center(f32::NEG_INFINITY, 20.0, 780.0), 400.0);
    }

    #[test]
    fn test_sanitize_point_only_touches_bad_axes() {
        let p = sanitize_point(Vec2::new(12.0, f32::NAN));
        assert_eq!(p, Vec2::new(12.0, 400.0));
        assert_eq!(sanitize_point(Vec2::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_inside_map_is_open_interval() {
        assert!(inside_map(Vec2::new(1.0, 799.0)));
        assert!(!inside_map(Vec2::new(0.0, 100.0)));
        assert!(!inside_map(Vec2::new(100.0, 800.0)));
        assert!(!inside_map(Vec2::new(f32::NAN, 100.0)));
    }
}
