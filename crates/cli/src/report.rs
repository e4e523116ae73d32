//! Evaluate a parsed command into a JSON document.

use serde::Serialize;
use serde_json::{json, Value};
use trigon::api::{
    angle, angle_between, det, distance, dot, from_polar, length, Triangle, TrigCfg, Vec2,
};
use trigon::SsaSolutions;

use crate::args::{TriangleCase, VectorOp};

/// Unit used for angles on input and output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Units {
    Radians,
    Degrees,
}

impl Units {
    fn to_rad(self, v: f64) -> f64 {
        match self {
            Units::Radians => v,
            Units::Degrees => v.to_radians(),
        }
    }

    fn from_rad(self, v: f64) -> f64 {
        match self {
            Units::Radians => v,
            Units::Degrees => v.to_degrees(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Units::Radians => "rad",
            Units::Degrees => "deg",
        }
    }
}

#[derive(Serialize)]
struct TriangleOut {
    a: f64,
    b: f64,
    c: f64,
    angle_a: f64,
    angle_b: f64,
    angle_c: f64,
    area: f64,
    perimeter: f64,
}

impl TriangleOut {
    fn new(t: &Triangle, units: Units) -> Self {
        Self {
            a: t.a,
            b: t.b,
            c: t.c,
            angle_a: units.from_rad(t.angle_a),
            angle_b: units.from_rad(t.angle_b),
            angle_c: units.from_rad(t.angle_c),
            area: t.area(),
            perimeter: t.perimeter(),
        }
    }
}

pub fn vector(op: VectorOp, units: Units) -> Value {
    let out = match op {
        VectorOp::Angle { x, y } => {
            let value = angle(Vec2::new(x, y));
            json!({ "op": "angle", "v": [x, y], "angle": units.from_rad(value) })
        }
        VectorOp::AngleBetween { ax, ay, bx, by } => {
            let value = angle_between(Vec2::new(ax, ay), Vec2::new(bx, by));
            if value.is_nan() {
                tracing::warn!(ax, ay, bx, by, "angle_between undefined for zero-length input");
            }
            json!({
                "op": "angle_between",
                "a": [ax, ay],
                "b": [bx, by],
                // NaN serializes as null
                "angle": units.from_rad(value),
            })
        }
        VectorOp::Polar { length: r, angle: theta } => {
            let v = from_polar(r, units.to_rad(theta));
            json!({ "op": "polar", "length": r, "angle": theta, "v": [v.x, v.y] })
        }
        VectorOp::Distance { ax, ay, bx, by } => {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            json!({
                "op": "distance",
                "a": [ax, ay],
                "b": [bx, by],
                "distance": distance(a, b),
                "length_a": length(a),
                "length_b": length(b),
            })
        }
        VectorOp::Products { ax, ay, bx, by } => {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            json!({
                "op": "products",
                "a": [ax, ay],
                "b": [bx, by],
                "dot": dot(a, b),
                "det": det(a, b),
            })
        }
    };
    with_units(out, units)
}

pub fn triangle(case: TriangleCase, units: Units, cfg: TrigCfg) -> anyhow::Result<Value> {
    let r = |v: f64| units.to_rad(v);
    let (name, solutions) = match case {
        TriangleCase::Sss { a, b, c } => ("sss", vec![Triangle::from_sss(a, b, c, cfg)?]),
        TriangleCase::Sas { a, b, angle_c } => {
            ("sas", vec![Triangle::from_sas(a, b, r(angle_c), cfg)?])
        }
        TriangleCase::Asa { a, angle_b, angle_c } => (
            "asa",
            vec![Triangle::from_asa(a, r(angle_b), r(angle_c), cfg)?],
        ),
        TriangleCase::Aas { a, angle_a, angle_b } => (
            "aas",
            vec![Triangle::from_aas(a, r(angle_a), r(angle_b), cfg)?],
        ),
        TriangleCase::Ssa { a, b, angle_a } => {
            let sol = Triangle::from_ssa(a, b, r(angle_a), cfg)?;
            if let SsaSolutions::Two(t, u) = sol {
                tracing::warn!(
                    b1 = t.angle_b,
                    b2 = u.angle_b,
                    "ambiguous SSA input, two triangles"
                );
            }
            ("ssa", sol.to_vec())
        }
    };
    tracing::debug!(case = name, count = solutions.len(), "solved");
    let rows: Vec<TriangleOut> = solutions
        .iter()
        .map(|t| TriangleOut::new(t, units))
        .collect();
    Ok(with_units(
        json!({ "case": name, "triangles": serde_json::to_value(rows)? }),
        units,
    ))
}

fn with_units(mut doc: Value, units: Units) -> Value {
    if let Some(obj) = doc.as_object_mut() {
        obj.insert("units".into(), Value::from(units.name()));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigon::TriangleError;

    #[test]
    fn vector_angle_in_degrees() {
        let doc = vector(VectorOp::Angle { x: -1.0, y: 1.0 }, Units::Degrees);
        let deg = doc["angle"].as_f64().unwrap();
        assert!((deg - 135.0).abs() < 1e-9);
        assert_eq!(doc["units"], "deg");
    }

    #[test]
    fn vector_angle_between_zero_is_null() {
        let doc = vector(
            VectorOp::AngleBetween {
                ax: 0.0,
                ay: 0.0,
                bx: 1.0,
                by: 0.0,
            },
            Units::Radians,
        );
        assert!(doc["angle"].is_null());
    }

    #[test]
    fn products_report_dot_and_det() {
        let doc = vector(
            VectorOp::Products {
                ax: 1.0,
                ay: 2.0,
                bx: 3.0,
                by: 4.0,
            },
            Units::Radians,
        );
        assert_eq!(doc["dot"], 11.0);
        assert_eq!(doc["det"], -2.0);
    }

    #[test]
    fn triangle_sss_report() {
        let doc = triangle(
            TriangleCase::Sss {
                a: 4.0,
                b: 5.0,
                c: 3.0,
            },
            Units::Degrees,
            TrigCfg::default(),
        )
        .unwrap();
        let t = &doc["triangles"][0];
        assert_eq!(t["area"], 6.0);
        assert!((t["angle_b"].as_f64().unwrap() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn triangle_ssa_reports_both_solutions() {
        let doc = triangle(
            TriangleCase::Ssa {
                a: 1.5,
                b: 2.0,
                angle_a: 30.0,
            },
            Units::Degrees,
            TrigCfg::default(),
        )
        .unwrap();
        assert_eq!(doc["triangles"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn triangle_errors_propagate() {
        let err = triangle(
            TriangleCase::Sss {
                a: 1.0,
                b: 1.0,
                c: 5.0,
            },
            Units::Radians,
            TrigCfg::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TriangleError>(),
            Some(TriangleError::Inequality { .. })
        ));
    }
}
