//! Checked solver: complete a `Triangle` from three known parts.
//!
//! Every constructor validates its inputs against `TrigCfg`, derives the
//! missing parts with the raw formulas, and rejects results that are not a
//! proper (non-degenerate) triangle. The SSA case can have two answers and
//! returns `SsaSolutions`.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use super::formulas::{
    area, find_angle_c, with_aas_find_side_b, with_asa_find_side_b, with_ssa_find_angle_b,
    with_sss_find_a,
};

/// Tolerances for the checked solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrigCfg {
    /// Slack in the triangle inequality: `b + c - a` must exceed this.
    pub eps_side: f64,
    /// Smallest admissible angle; also the slack for `sin(A)·b/a` overshooting 1.
    pub eps_angle: f64,
}

impl Default for TrigCfg {
    fn default() -> Self {
        Self {
            eps_side: 1e-12,
            eps_angle: 1e-12,
        }
    }
}

/// Why a set of parts does not describe a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriangleError {
    /// A side is non-finite or not positive.
    InvalidSide { name: char, value: f64 },
    /// An angle is non-finite or outside `(0, π)`.
    InvalidAngle { name: char, value: f64 },
    /// The known angles leave no room for the third one.
    AngleSum { sum: f64 },
    /// One side is at least as long as the other two together.
    Inequality { a: f64, b: f64, c: f64 },
    /// SSA input where the side opposite the known angle is too short.
    NoSsaSolution { ratio: f64 },
    /// Derived parts came out non-finite or non-positive.
    Degenerate,
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangleError::InvalidSide { name, value } => {
                write!(f, "side {name} must be positive and finite, got {value}")
            }
            TriangleError::InvalidAngle { name, value } => {
                write!(f, "angle {name} must lie in (0, π), got {value}")
            }
            TriangleError::AngleSum { sum } => {
                write!(f, "known angles sum to {sum}, leaving no third angle")
            }
            TriangleError::Inequality { a, b, c } => {
                write!(f, "sides {a}, {b}, {c} violate the triangle inequality")
            }
            TriangleError::NoSsaSolution { ratio } => write!(
                f,
                "no triangle for SSA input (sin(A)·b/a = {ratio} exceeds 1)"
            ),
            TriangleError::Degenerate => write!(f, "derived triangle is degenerate"),
        }
    }
}

impl std::error::Error for TriangleError {}

/// A fully solved triangle. Side `a` is opposite `angle_a`, etc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub angle_a: f64,
    pub angle_b: f64,
    pub angle_c: f64,
}

/// Outcome of the ambiguous SSA case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SsaSolutions {
    One(Triangle),
    /// Principal solution (acute `B`) first, then the one with `π - B`.
    Two(Triangle, Triangle),
}

impl SsaSolutions {
    pub fn len(&self) -> usize {
        match self {
            SsaSolutions::One(_) => 1,
            SsaSolutions::Two(..) => 2,
        }
    }

    /// Always `false`; an empty outcome is reported as an error instead.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn principal(&self) -> &Triangle {
        match self {
            SsaSolutions::One(t) | SsaSolutions::Two(t, _) => t,
        }
    }

    pub fn to_vec(&self) -> Vec<Triangle> {
        match *self {
            SsaSolutions::One(t) => vec![t],
            SsaSolutions::Two(t, u) => vec![t, u],
        }
    }
}

fn check_side(name: char, value: f64) -> Result<(), TriangleError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TriangleError::InvalidSide { name, value })
    }
}

fn check_angle(name: char, value: f64, cfg: &TrigCfg) -> Result<(), TriangleError> {
    if value.is_finite() && value > cfg.eps_angle && value < PI - cfg.eps_angle {
        Ok(())
    } else {
        Err(TriangleError::InvalidAngle { name, value })
    }
}

fn check_angle_pair(x: f64, y: f64, cfg: &TrigCfg) -> Result<(), TriangleError> {
    if find_angle_c(x, y) > cfg.eps_angle {
        Ok(())
    } else {
        Err(TriangleError::AngleSum { sum: x + y })
    }
}

/// Law of Cosines rearranged to avoid cancellation for small enclosed angles.
fn sas_side(a: f64, b: f64, angle_c: f64) -> f64 {
    let half = (angle_c / 2.0).sin();
    ((a - b) * (a - b) + 4.0 * a * b * half * half).sqrt()
}

impl Triangle {
    /// SSS: three sides.
    pub fn from_sss(a: f64, b: f64, c: f64, cfg: TrigCfg) -> Result<Self, TriangleError> {
        check_side('a', a)?;
        check_side('b', b)?;
        check_side('c', c)?;
        if b + c - a <= cfg.eps_side || a + c - b <= cfg.eps_side || a + b - c <= cfg.eps_side {
            return Err(TriangleError::Inequality { a, b, c });
        }
        let angle_a = with_sss_find_a(a, b, c);
        let angle_b = with_sss_find_a(b, c, a);
        Self {
            a,
            b,
            c,
            angle_a,
            angle_b,
            angle_c: find_angle_c(angle_a, angle_b),
        }
        .finish()
    }

    /// SAS: sides `a`, `b` and the enclosed angle `angle_c`.
    ///
    /// `c` uses the half-angle form `(a - b)² + 4ab·sin²(C/2)`, which stays
    /// positive for tiny `C` where `a² + b² - 2ab·cos(C)` cancels to 0.
    pub fn from_sas(a: f64, b: f64, angle_c: f64, cfg: TrigCfg) -> Result<Self, TriangleError> {
        check_side('a', a)?;
        check_side('b', b)?;
        check_angle('C', angle_c, &cfg)?;
        let c = sas_side(a, b, angle_c);
        let angle_a = with_sss_find_a(a, b, c);
        Self {
            a,
            b,
            c,
            angle_a,
            angle_b: find_angle_c(angle_a, angle_c),
            angle_c,
        }
        .finish()
    }

    /// ASA: side `a` and the two angles at its ends (`angle_b`, `angle_c`).
    pub fn from_asa(
        a: f64,
        angle_b: f64,
        angle_c: f64,
        cfg: TrigCfg,
    ) -> Result<Self, TriangleError> {
        check_side('a', a)?;
        check_angle('B', angle_b, &cfg)?;
        check_angle('C', angle_c, &cfg)?;
        check_angle_pair(angle_b, angle_c, &cfg)?;
        Self {
            a,
            b: with_asa_find_side_b(a, angle_b, angle_c),
            c: with_asa_find_side_b(a, angle_c, angle_b),
            angle_a: find_angle_c(angle_b, angle_c),
            angle_b,
            angle_c,
        }
        .finish()
    }

    /// AAS: side `a`, its opposite `angle_a`, and one more angle `angle_b`.
    pub fn from_aas(
        a: f64,
        angle_a: f64,
        angle_b: f64,
        cfg: TrigCfg,
    ) -> Result<Self, TriangleError> {
        check_side('a', a)?;
        check_angle('A', angle_a, &cfg)?;
        check_angle('B', angle_b, &cfg)?;
        check_angle_pair(angle_a, angle_b, &cfg)?;
        let angle_c = find_angle_c(angle_a, angle_b);
        Self {
            a,
            b: with_aas_find_side_b(a, angle_a, angle_b),
            c: with_aas_find_side_b(a, angle_a, angle_c),
            angle_a,
            angle_b,
            angle_c,
        }
        .finish()
    }

    /// SSA: sides `a`, `b` and the angle `angle_a` opposite `a`.
    ///
    /// Two triangles exist when `B` and `π - B` both leave a positive `C`.
    /// When `sin(A)·b/a` is within `eps_angle` of 1, `B` is taken as exactly
    /// `π/2` and there is one triangle.
    pub fn from_ssa(
        a: f64,
        b: f64,
        angle_a: f64,
        cfg: TrigCfg,
    ) -> Result<SsaSolutions, TriangleError> {
        check_side('a', a)?;
        check_side('b', b)?;
        check_angle('A', angle_a, &cfg)?;
        let ratio = angle_a.sin() * b / a;
        if ratio > 1.0 + cfg.eps_angle {
            return Err(TriangleError::NoSsaSolution { ratio });
        }
        let build = |angle_b: f64| -> Option<Triangle> {
            let angle_c = find_angle_c(angle_a, angle_b);
            if angle_c <= cfg.eps_angle {
                return None;
            }
            Triangle {
                a,
                b,
                c: with_aas_find_side_b(a, angle_a, angle_c),
                angle_a,
                angle_b,
                angle_c,
            }
            .finish()
            .ok()
        };
        if ratio >= 1.0 - cfg.eps_angle {
            // Tangent case: B is right and counts once. `asin` is too
            // ill-conditioned near 1 to decide this from the angle.
            return build(FRAC_PI_2)
                .map(SsaSolutions::One)
                .ok_or(TriangleError::AngleSum {
                    sum: angle_a + FRAC_PI_2,
                });
        }
        let principal = with_ssa_find_angle_b(a, b, angle_a);
        let first = build(principal);
        let second = build(PI - principal);
        match (first, second) {
            (Some(t), Some(u)) => Ok(SsaSolutions::Two(t, u)),
            (Some(t), None) | (None, Some(t)) => Ok(SsaSolutions::One(t)),
            (None, None) => Err(TriangleError::AngleSum {
                sum: angle_a + principal,
            }),
        }
    }

    fn finish(self) -> Result<Self, TriangleError> {
        let parts = [
            self.a,
            self.b,
            self.c,
            self.angle_a,
            self.angle_b,
            self.angle_c,
        ];
        if parts.iter().all(|p| p.is_finite() && *p > 0.0) {
            Ok(self)
        } else {
            Err(TriangleError::Degenerate)
        }
    }

    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn angles(&self) -> [f64; 3] {
        [self.angle_a, self.angle_b, self.angle_c]
    }

    /// Heron's formula on the stored sides.
    #[inline]
    pub fn area(&self) -> f64 {
        area(self.a, self.b, self.c)
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    #[inline]
    pub fn angle_sum(&self) -> f64 {
        self.angle_a + self.angle_b + self.angle_c
    }

    /// Some angle equals `π/2` within `eps`.
    pub fn is_right(&self, eps: f64) -> bool {
        self.angles().iter().any(|t| (t - FRAC_PI_2).abs() <= eps)
    }
}
