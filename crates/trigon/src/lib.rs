//! Plane vectors and triangle trigonometry.
//!
//! Two independent areas:
//! - `vec2`: arithmetic on `Vec2` (alias `Point2`), angles, polar construction.
//! - `triangle`: Law of Cosines / Law of Sines / Heron formulas, plus a checked
//!   solver that builds a full `Triangle` from SSS, SAS, ASA, AAS or SSA input.
//!
//! Conventions
//! - Angles are radians. Side `a` is opposite angle `A`, and so on.
//! - Raw formulas never validate: out-of-domain input propagates NaN.
//!   Use `triangle::solve` when validation is wanted.

pub mod api;
pub mod scalar;
pub mod triangle;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use scalar::clamp;
pub use triangle::{SsaSolutions, Triangle, TriangleError, TrigCfg};
pub use vec2::{Planar, Point2, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::scalar::clamp;
    pub use crate::triangle::formulas::{
        area, find_angle_c, with_aas_find_side_b, with_asa_find_side_b, with_sas_find_side_c,
        with_ssa_find_angle_b, with_sss_find_a,
    };
    pub use crate::triangle::rand::{draw_triangle, ReplayToken, SampleCfg};
    pub use crate::triangle::{SsaSolutions, Triangle, TriangleError, TrigCfg};
    pub use crate::vec2::{Planar, Point2, Vec2};
}
