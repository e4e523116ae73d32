use std::f64::consts::{PI, TAU};

use super::Vec2;
use crate::scalar::clamp;

#[inline]
pub fn create(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

/// Vector of the given `length` pointing at `angle` (radians, CCW from +x).
#[inline]
pub fn from_polar(length: f64, angle: f64) -> Vec2 {
    Vec2::new(length * angle.cos(), length * angle.sin())
}

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

/// `a - b`.
#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Determinant of `[a b]`: positive when `b` lies counter-clockwise of `a`.
#[inline]
pub fn det(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Squared distance to the origin. Cheaper than `length` for comparisons.
#[inline]
pub fn length_squared(v: Vec2) -> f64 {
    v.x * v.x + v.y * v.y
}

#[inline]
pub fn length(v: Vec2) -> f64 {
    length_squared(v).sqrt()
}

#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f64 {
    let x = a.x - b.x;
    let y = a.y - b.y;
    x * x + y * y
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Counter-clockwise angle from the positive x-axis, in `[0, 2π]`.
///
/// Computed as `atan2(-y, -x) + π`. Signed zeros matter on the x-axis:
/// `(1, 0)` gives `0`, `(-1, 0)` gives `π`, `(-1, -1)` gives `5π/4`.
#[inline]
pub fn angle(v: Vec2) -> f64 {
    (-v.y).atan2(-v.x) + PI
}

/// Counter-clockwise angle swept from `a` to `b`, in `[0, 2π)`.
///
/// The unsigned angle comes from `acos` of the normalized dot product
/// (clamped against rounding); a negative determinant means `b` is clockwise
/// of `a`, which maps `θ` to `2π - θ`. Parallel vectors give `0`, opposite
/// vectors give `π`. NaN when either vector has zero length.
///
/// Nearly parallel input can clamp to `θ = 0` while the determinant is still
/// negative; that stays `0` so the result never reaches `2π`.
pub fn angle_between(a: Vec2, b: Vec2) -> f64 {
    let denominator = (length_squared(a) * length_squared(b)).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    let theta = clamp(dot(a, b) / denominator, -1.0, 1.0).acos();
    if det(a, b) < 0.0 && theta > 0.0 {
        TAU - theta
    } else {
        theta
    }
}
