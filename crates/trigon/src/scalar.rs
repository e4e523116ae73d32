//! Scalar helpers shared by both areas.

/// Bound `value` to `[min, max]`.
///
/// Used to keep `acos` arguments inside `[-1, 1]` when rounding overshoots.
/// NaN input is returned unchanged. Callers guarantee `min <= max`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
