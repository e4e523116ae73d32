use super::*;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn length_of_3_4_is_5() {
    let p = create(3.0, 4.0);
    assert_eq!(length_squared(p), 25.0);
    assert_eq!(length(p), 5.0);
    assert_eq!(p.length(), 5.0);
}

#[test]
fn add_and_subtract_are_componentwise() {
    let a = vector![1.0, 2.0];
    let b = vector![3.0, 4.0];
    assert_eq!(add(a, b), vector![4.0, 6.0]);
    assert_eq!(subtract(b, a), vector![2.0, 2.0]);
    // inputs untouched
    assert_eq!(a, vector![1.0, 2.0]);
}

#[test]
fn det_sign_tracks_orientation() {
    let x = vector![1.0, 0.0];
    let y = vector![0.0, 1.0];
    assert_eq!(det(x, y), 1.0);
    assert_eq!(det(y, x), -1.0);
    assert_eq!(det(x, vector![2.0, 0.0]), 0.0);
    assert_eq!(dot(x, y), 0.0);
}

#[test]
fn distance_matches_length_of_difference() {
    let a = vector![1.0, 1.0];
    let b = vector![4.0, 5.0];
    assert_eq!(distance_squared(a, b), 25.0);
    assert_eq!(distance(a, b), 5.0);
    assert_eq!(a.distance(&b), length(subtract(a, b)));
    assert_eq!(a.distance_squared(&b), 25.0);
    assert_eq!(b.length_squared(), 41.0);
    assert_eq!(a.det(&b), det(a, b));
    assert_eq!(a.det(&b), 1.0);
}

#[test]
fn angle_on_axes_and_diagonals() {
    assert!(close(angle(vector![1.0, 0.0]), 0.0));
    assert!(close(angle(vector![-1.0, 0.0]), PI));
    assert!(close(angle(vector![1.0, 1.0]), FRAC_PI_4));
    assert!(close(angle(vector![-1.0, 1.0]), 3.0 * FRAC_PI_4));
    assert!(close(angle(vector![0.0, 1.0]), FRAC_PI_2));
}

#[test]
fn angle_of_third_quadrant_uses_shifted_atan2() {
    // atan2(-y, -x) + π lands on 5π/4, i.e. -3π/4 taken mod 2π.
    let v = vector![-1.0, -1.0];
    assert!(close(angle(v), 5.0 * FRAC_PI_4));
    assert!(close(angle(v) - TAU, -3.0 * FRAC_PI_4));
    assert!(close(v.heading(), angle(v)));
}

#[test]
fn angle_between_counter_clockwise() {
    let x = vector![1.0, 0.0];
    assert!(close(angle_between(x, vector![1.0, 1.0]), FRAC_PI_4));
    assert!(close(angle_between(x, vector![0.0, 1.0]), FRAC_PI_2));
    assert!(close(angle_between(x, vector![-3.0, 0.0]), PI));
}

#[test]
fn angle_between_clockwise_wraps() {
    let x = vector![1.0, 0.0];
    let down = vector![0.0, -1.0];
    let diag = vector![1.0, -1.0];
    assert!(close(angle_between(x, down), 3.0 * FRAC_PI_2));
    assert!(close(angle_between(x, diag), 7.0 * FRAC_PI_4));
    assert!(close(angle_between(diag, x), FRAC_PI_4));
    assert!(close(diag.angle_to(&x), FRAC_PI_4));
}

#[test]
fn angle_between_degenerate_inputs() {
    let v = vector![2.0, -3.0];
    // Equal values are parallel, not undefined.
    assert_eq!(angle_between(v, v), 0.0);
    assert!(angle_between(v, Vec2::zeros()).is_nan());
    assert!(angle_between(Vec2::zeros(), v).is_nan());
    assert!(angle_between(Vec2::zeros(), Vec2::zeros()).is_nan());
}

#[test]
fn angle_between_nearly_parallel_clockwise_stays_zero() {
    let x = vector![1.0, 0.0];
    let below = vector![1.0, -1e-9];
    // b is clockwise of a, but the cosine rounds to exactly 1.
    assert!(det(x, below) < 0.0);
    assert_eq!(angle_between(x, below), 0.0);
    assert_eq!(angle_between(below, x), 0.0);
    assert!(angle_between(x, below) < TAU);
}

#[test]
fn polar_coordinates() {
    let a = from_polar(2.0, 0.0);
    assert_eq!(a, vector![2.0, 0.0]);

    let b = from_polar(2.0, FRAC_PI_2);
    assert!(b.x.abs() < 1e-15);
    assert_eq!(b.y, 2.0);

    let c = from_polar(2.0, FRAC_PI_4);
    assert!(close(c.x, 2f64.sqrt()));
    assert!(close(c.y, 2f64.sqrt()));

    let d = <Vec2 as Planar>::from_polar(2.0, 3.0 * FRAC_PI_2);
    assert!(d.x.abs() < 1e-15);
    assert!(close(d.y, -2.0));
}

#[test]
fn translate_chains_in_place() {
    let mut p: Point2 = vector![1.0, 2.0];
    let step = vector![0.5, -1.0];
    p.translate(&step).translate(&step);
    assert_eq!(p, vector![2.0, 0.0]);
    p.translate_back(&step);
    assert_eq!(p, vector![1.5, 1.0]);
}

#[test]
fn angle_between_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let a = from_polar(rng.gen_range(0.1..10.0), rng.gen_range(0.0..TAU));
        let b = from_polar(rng.gen_range(0.1..10.0), rng.gen_range(0.0..TAU));
        let expected = (angle(b) - angle(a)).rem_euclid(TAU);
        let got = angle_between(a, b);
        // compare on the circle to tolerate wrap at 0 / 2π
        let diff = (got - expected).rem_euclid(TAU);
        assert!(diff < 1e-7 || TAU - diff < 1e-7, "got {got}, expected {expected}");
    }
}

fn coord() -> impl Strategy<Value = f64> {
    -1e3f64..1e3
}

proptest! {
    #[test]
    fn add_commutes(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let u = vector![ax, ay];
        let v = vector![bx, by];
        prop_assert_eq!(add(u, v), add(v, u));
        let back = subtract(add(u, v), v);
        prop_assert!((back - u).norm() < 1e-9);
    }

    #[test]
    fn length_is_root_of_length_squared(x in coord(), y in coord()) {
        let v = vector![x, y];
        prop_assert!(length_squared(v) >= 0.0);
        prop_assert_eq!(length(v), length_squared(v).sqrt());
    }

    #[test]
    fn angle_between_range_and_complement(
        ra in 0.1f64..100.0, ta in 0.0f64..TAU,
        rb in 0.1f64..100.0, tb in 0.0f64..TAU,
    ) {
        let a = from_polar(ra, ta);
        let b = from_polar(rb, tb);
        let ab = angle_between(a, b);
        let ba = angle_between(b, a);
        prop_assert!((0.0..TAU).contains(&ab));
        prop_assert!((0.0..TAU).contains(&ba));
        // Skip near-parallel pairs, where one side collapses to 0.
        if ab > 1e-6 && ba > 1e-6 {
            prop_assert!((ab + ba - TAU).abs() < 1e-9);
        }
    }

    #[test]
    fn polar_round_trip(r in 0.01f64..100.0, theta in 0.0f64..TAU) {
        let v = from_polar(r, theta);
        prop_assert!((length(v) - r).abs() < 1e-9 * r.max(1.0));
        let diff = (angle(v) - theta).rem_euclid(TAU);
        prop_assert!(diff < 1e-9 || TAU - diff < 1e-9);
    }
}
