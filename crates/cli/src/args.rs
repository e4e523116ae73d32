use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trigon")]
#[command(about = "Evaluate plane-vector and triangle formulas, print JSON")]
pub struct Cmd {
    /// Write the JSON result to this file (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    /// Read and report angles in degrees instead of radians
    #[arg(long, global = true)]
    pub degrees: bool,

    /// Smallest admissible angle / sine-ratio slack for the triangle solver
    #[arg(long, global = true)]
    pub eps_angle: Option<f64>,

    /// Triangle-inequality slack for the triangle solver
    #[arg(long, global = true)]
    pub eps_side: Option<f64>,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand)]
pub enum Action {
    /// Plane-vector operations
    Vector {
        #[command(subcommand)]
        op: VectorOp,
    },
    /// Complete a triangle from three known parts
    Triangle {
        #[command(subcommand)]
        case: TriangleCase,
    },
}

#[derive(Subcommand, Clone, Copy, Debug)]
pub enum VectorOp {
    /// Counter-clockwise angle to the positive x-axis
    Angle {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Counter-clockwise angle swept from a to b
    AngleBetween {
        #[arg(allow_negative_numbers = true)]
        ax: f64,
        #[arg(allow_negative_numbers = true)]
        ay: f64,
        #[arg(allow_negative_numbers = true)]
        bx: f64,
        #[arg(allow_negative_numbers = true)]
        by: f64,
    },
    /// Vector from length and angle
    Polar {
        #[arg(allow_negative_numbers = true)]
        length: f64,
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },
    /// Distance between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        ax: f64,
        #[arg(allow_negative_numbers = true)]
        ay: f64,
        #[arg(allow_negative_numbers = true)]
        bx: f64,
        #[arg(allow_negative_numbers = true)]
        by: f64,
    },
    /// Dot product and determinant of a and b
    Products {
        #[arg(allow_negative_numbers = true)]
        ax: f64,
        #[arg(allow_negative_numbers = true)]
        ay: f64,
        #[arg(allow_negative_numbers = true)]
        bx: f64,
        #[arg(allow_negative_numbers = true)]
        by: f64,
    },
}

/// Known parts, named so that side `a` is opposite angle `A`.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum TriangleCase {
    /// Three sides
    Sss {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Two sides and the enclosed angle C
    Sas {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        angle_c: f64,
    },
    /// Side a and the angles B, C at its ends
    Asa {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        angle_b: f64,
        #[arg(allow_negative_numbers = true)]
        angle_c: f64,
    },
    /// Side a, its opposite angle A, and angle B
    Aas {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        angle_a: f64,
        #[arg(allow_negative_numbers = true)]
        angle_b: f64,
    },
    /// Sides a, b and the angle A opposite a (may give two triangles)
    Ssa {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        angle_a: f64,
    },
}
