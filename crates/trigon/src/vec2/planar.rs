//! Method-call surface over `Vec2`.
//!
//! Read-only methods delegate to `ops`. The only mutating methods take
//! `&mut self`, so a vector being translated is exclusively held by its caller.

use super::{ops, Vec2};

/// Plane-vector operations as methods on `Vec2`.
///
/// Names avoid nalgebra's inherent `dot`/`add`/`angle`-style methods so the
/// trait is never shadowed; use `ops::dot` or `Vector2::dot` for the dot product.
pub trait Planar: Sized {
    fn from_polar(length: f64, angle: f64) -> Self;
    fn det(&self, other: &Self) -> f64;
    fn length(&self) -> f64;
    fn length_squared(&self) -> f64;
    fn distance(&self, other: &Self) -> f64;
    fn distance_squared(&self, other: &Self) -> f64;
    /// Angle to the positive x-axis, see `ops::angle`.
    fn heading(&self) -> f64;
    /// CCW angle from `self` to `other`, see `ops::angle_between`.
    fn angle_to(&self, other: &Self) -> f64;
    /// Offset in place by `by`; returns `self` for chaining.
    fn translate(&mut self, by: &Self) -> &mut Self;
    /// Offset in place by `-by`; returns `self` for chaining.
    fn translate_back(&mut self, by: &Self) -> &mut Self;
}

impl Planar for Vec2 {
    #[inline]
    fn from_polar(length: f64, angle: f64) -> Self {
        ops::from_polar(length, angle)
    }
    #[inline]
    fn det(&self, other: &Self) -> f64 {
        ops::det(*self, *other)
    }
    #[inline]
    fn length(&self) -> f64 {
        ops::length(*self)
    }
    #[inline]
    fn length_squared(&self) -> f64 {
        ops::length_squared(*self)
    }
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        ops::distance(*self, *other)
    }
    #[inline]
    fn distance_squared(&self, other: &Self) -> f64 {
        ops::distance_squared(*self, *other)
    }
    #[inline]
    fn heading(&self) -> f64 {
        ops::angle(*self)
    }
    #[inline]
    fn angle_to(&self, other: &Self) -> f64 {
        ops::angle_between(*self, *other)
    }
    #[inline]
    fn translate(&mut self, by: &Self) -> &mut Self {
        self.x += by.x;
        self.y += by.y;
        self
    }
    #[inline]
    fn translate_back(&mut self, by: &Self) -> &mut Self {
        self.x -= by.x;
        self.y -= by.y;
        self
    }
}
