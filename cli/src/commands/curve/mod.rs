use clap::Parser;
use complex_rs::complex::Complex;
use log::debug;
use shared::{
    dtos::evaluation::{Evaluation, Outcome},
    models::region::{
        corner::{rect_points, square_points},
        Curve, CurveKind,
    },
};

use super::arithmetic::inputs;

/// 📐 Length of a closed curve.
#[derive(Parser, Debug)]
pub struct CurveCommand {
    /// `circle`, `upper-semicircle`, `lower-semicircle`, `square`,
    /// `rectangle` or `triangle`
    #[arg(short, long, value_name = "KIND")]
    pub kind: CurveKind,

    /// 📏 Radius, or half side length of squares and rectangles
    #[arg(short, long, value_name = "RADIUS")]
    pub radius: Option<f64>,

    /// 📐 Half height of a rectangle, defaults to the radius
    #[arg(long, value_name = "RADIUS")]
    pub radius_b: Option<f64>,

    /// 📌 Center used to list the corners of squares and rectangles
    #[arg(short, long, allow_hyphen_values = true, value_name = "POINT")]
    pub center: Option<Complex>,

    /// 🔺 Triangle vertices
    #[arg(short, long, num_args = 1.., allow_hyphen_values = true, value_name = "POINT")]
    pub points: Vec<Complex>,
}

impl CurveCommand {
    pub fn run(&self) -> Vec<Evaluation> {
        let mut arguments: Vec<String> = self.radius.iter().map(f64::to_string).collect();
        arguments.extend(self.radius_b.iter().map(f64::to_string));
        arguments.extend(inputs(&self.points));
        let operation = format!("{}-length", self.kind);

        let curve = match Curve::build(self.kind, self.radius, self.radius_b, &self.points) {
            Ok(curve) => curve,
            Err(e) => {
                return vec![Evaluation::new(
                    operation,
                    arguments,
                    Outcome::Failure(e.to_string()),
                )]
            }
        };
        debug!("Measuring {:?}", curve);

        let mut evaluations = vec![Evaluation::new(
            operation,
            arguments,
            Outcome::Real(curve.length()),
        )];
        if let Some(center) = self.center {
            let corners = match curve {
                Curve::Square { radius } => Some(square_points(center, radius)),
                Curve::Rectangle {
                    half_width,
                    half_height,
                } => Some(rect_points(center, half_width, half_height)),
                _ => None,
            };
            if let Some(corners) = corners {
                evaluations.push(Evaluation::new(
                    "corners",
                    inputs(&[center]),
                    Outcome::Text(inputs(&corners).join("; ")),
                ));
            }
        }
        evaluations
    }
}
