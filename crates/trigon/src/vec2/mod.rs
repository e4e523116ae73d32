//! Plane vectors (points and displacements share one type).
//!
//! Purpose
//! - One concrete value type, `Vec2 = nalgebra::Vector2<f64>`, with `Point2`
//!   as a semantic alias. Anything with `x`/`y` is a `Vec2`; there is no
//!   separate point representation.
//! - `ops` holds the pure free functions (inputs unchanged, new value out).
//! - `Planar` exposes the same operations as methods, plus in-place
//!   `translate`/`translate_back` on an exclusively borrowed value.
//!
//! Angles
//! - `angle(v)` is `atan2(-y, -x) + π`, range `[0, 2π]`; the positive x-axis
//!   maps to `0`, the negative x-axis to `π`.
//! - `angle_between(a, b)` sweeps counter-clockwise from `a` to `b`, range
//!   `[0, 2π)`; NaN when either vector has zero length.

mod ops;
mod planar;

pub use ops::{
    add, angle, angle_between, create, det, distance, distance_squared, dot, from_polar, length,
    length_squared, subtract,
};
pub use planar::Planar;

/// Plane vector (displacement).
pub type Vec2 = nalgebra::Vector2<f64>;

/// Plane point. Same representation as `Vec2`.
pub type Point2 = Vec2;

#[cfg(test)]
mod tests;
