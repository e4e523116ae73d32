//! Flat re-export surface.
//!
//! - Mirrors the operation names used in docs and the CLI so callers can write
//!   `trigon::api::with_sss_find_a` or `trigon::api::angle_between` without
//!   caring which area a function lives in.
//! - `Vec2`/`Point2` are the same type.

// Scalar
pub use crate::scalar::clamp;
// Vectors
pub use crate::vec2::{
    add, angle, angle_between, create, det, distance, distance_squared, dot, from_polar, length,
    length_squared, subtract, Planar, Point2, Vec2,
};
// Triangles
pub use crate::triangle::rand::{draw_triangle, ReplayToken, SampleCfg};
pub use crate::triangle::{
    area, find_angle_c, with_aas_find_side_b, with_asa_find_side_b, with_sas_find_side_c,
    with_ssa_find_angle_b, with_sss_find_a, SsaSolutions, Triangle, TriangleError, TrigCfg,
};
