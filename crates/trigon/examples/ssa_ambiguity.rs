//! Walk the SSA case across the range of `b` for fixed `a` and `A`.
//!
//! Prints how many triangles exist (0, 1 or 2) and the candidate `B` angles,
//! showing where the principal value from `with_ssa_find_angle_b` is not the
//! only answer.

use std::f64::consts::FRAC_PI_6;

use trigon::{Triangle, TrigCfg};

fn main() {
    let a = 1.0;
    let angle_a = FRAC_PI_6;
    for step in 1..=12 {
        let b = 0.25 * step as f64;
        match Triangle::from_ssa(a, b, angle_a, TrigCfg::default()) {
            Ok(sol) => {
                let bs: Vec<String> = sol
                    .to_vec()
                    .iter()
                    .map(|t| format!("{:.4}", t.angle_b.to_degrees()))
                    .collect();
                println!("b={b:.2} count={} B_deg=[{}]", sol.len(), bs.join(", "));
            }
            Err(err) => println!("b={b:.2} count=0 ({err})"),
        }
    }
}
