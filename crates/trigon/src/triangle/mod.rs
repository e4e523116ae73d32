//! Triangle trigonometry.
//!
//! - `formulas`: raw Law of Cosines / Law of Sines / Heron formulas. No
//!   validation; invalid triangles give NaN.
//! - `solve`: `Triangle` completed from SSS, SAS, ASA, AAS or SSA input, with
//!   `TriangleError` for parts that do not form a proper triangle.
//! - `rand`: replayable sampler of proper triangles.

pub mod formulas;
pub mod rand;
mod solve;

pub use formulas::{
    area, find_angle_c, with_aas_find_side_b, with_asa_find_side_b, with_sas_find_side_c,
    with_ssa_find_angle_b, with_sss_find_a,
};
pub use solve::{SsaSolutions, Triangle, TriangleError, TrigCfg};
