//! Raw triangle formulas.
//!
//! Naming: side `a` is opposite angle `A` (here `angle_a`), and so on. By
//! symmetry the letters can be permuted, e.g. `with_asa_find_side_b` also
//! finds `c` when given the matching angles.
//!
//! Nothing here validates input. Impossible triangles yield NaN from
//! `sqrt`/`acos`/`asin`, and zero denominators yield ±Inf or NaN.

use std::f64::consts::PI;

/// Area from three sides (Heron's formula).
#[inline]
pub fn area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// SSS: angle `A` opposite side `a` (Law of Cosines).
#[inline]
pub fn with_sss_find_a(a: f64, b: f64, c: f64) -> f64 {
    ((b * b + c * c - a * a) / (2.0 * b * c)).acos()
}

/// SAS: side `c` opposite the angle `angle_c` enclosed by sides `a` and `b`.
#[inline]
pub fn with_sas_find_side_c(a: f64, b: f64, angle_c: f64) -> f64 {
    (a * a + b * b - 2.0 * a * b * angle_c.cos()).sqrt()
}

/// SSA: angle `B` opposite side `b`, given the pair (`a`, `angle_a`) (Law of Sines).
///
/// Returns the principal value in `[-π/2, π/2]`. When `b > a` and
/// `angle_a` is acute there may be a second triangle with `π - B`; picking
/// between the two is the caller's job (see `Triangle::from_ssa`).
#[inline]
pub fn with_ssa_find_angle_b(a: f64, b: f64, angle_a: f64) -> f64 {
    (angle_a.sin() * b / a).asin()
}

/// ASA: side `b` opposite `angle_b`, given side `a` between the two known angles.
#[inline]
pub fn with_asa_find_side_b(a: f64, angle_b: f64, angle_c: f64) -> f64 {
    let angle_a = find_angle_c(angle_b, angle_c);
    angle_b.sin() * a / angle_a.sin()
}

/// AAS: side `b` opposite `angle_b`, given side `a` and its opposite `angle_a`.
#[inline]
pub fn with_aas_find_side_b(a: f64, angle_a: f64, angle_b: f64) -> f64 {
    angle_b.sin() * a / angle_a.sin()
}

/// Remaining angle of a triangle: `π - A - B`.
#[inline]
pub fn find_angle_c(angle_a: f64, angle_b: f64) -> f64 {
    PI - angle_a - angle_b
}
