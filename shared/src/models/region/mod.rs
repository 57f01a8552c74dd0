pub mod corner;

use std::{f64::consts::PI, fmt, str::FromStr};

use complex_rs::complex::{distance, Complex};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::ModelError, result::ModelResult};

pub const NUM_POINTS_TRIANGLE: usize = 3;
pub const NUM_POINTS_RECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveKind {
    Circle,
    UpperSemicircle,
    LowerSemicircle,
    Square,
    Rectangle,
    Triangle,
}

impl CurveKind {
    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Circle => "circle",
            CurveKind::UpperSemicircle => "upper-semicircle",
            CurveKind::LowerSemicircle => "lower-semicircle",
            CurveKind::Square => "square",
            CurveKind::Rectangle => "rectangle",
            CurveKind::Triangle => "triangle",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = ModelError;

    fn from_str(name: &str) -> ModelResult<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "circle" => Ok(CurveKind::Circle),
            "upper-semicircle" => Ok(CurveKind::UpperSemicircle),
            "lower-semicircle" => Ok(CurveKind::LowerSemicircle),
            "square" => Ok(CurveKind::Square),
            "rectangle" => Ok(CurveKind::Rectangle),
            "triangle" => Ok(CurveKind::Triangle),
            _ => Err(ModelError::UnsupportedCurve {
                name: name.to_string(),
            }),
        }
    }
}

/// A closed curve of the plane. Radii of squares and rectangles are half
/// side lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    Circle { radius: f64 },
    UpperSemicircle { radius: f64 },
    LowerSemicircle { radius: f64 },
    Square { radius: f64 },
    Rectangle { half_width: f64, half_height: f64 },
    Triangle { vertices: [Complex; 3] },
}

fn checked_radius(radius: f64) -> ModelResult<f64> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        debug!("Rejecting radius {}", radius);
        Err(ModelError::InvalidRadius { radius })
    }
}

impl Curve {
    pub fn circle(radius: f64) -> ModelResult<Self> {
        Ok(Curve::Circle {
            radius: checked_radius(radius)?,
        })
    }

    pub fn upper_semicircle(radius: f64) -> ModelResult<Self> {
        Ok(Curve::UpperSemicircle {
            radius: checked_radius(radius)?,
        })
    }

    pub fn lower_semicircle(radius: f64) -> ModelResult<Self> {
        Ok(Curve::LowerSemicircle {
            radius: checked_radius(radius)?,
        })
    }

    pub fn square(radius: f64) -> ModelResult<Self> {
        Ok(Curve::Square {
            radius: checked_radius(radius)?,
        })
    }

    pub fn rectangle(half_width: f64, half_height: f64) -> ModelResult<Self> {
        Ok(Curve::Rectangle {
            half_width: checked_radius(half_width)?,
            half_height: checked_radius(half_height)?,
        })
    }

    /// Needs exactly three pairwise distinct points.
    pub fn triangle(points: &[Complex]) -> ModelResult<Self> {
        let vertices: [Complex; 3] = points.try_into().map_err(|_| ModelError::WrongPointCount {
            expected: NUM_POINTS_TRIANGLE,
            actual: points.len(),
        })?;

        let [a, b, c] = vertices;
        if a == b || b == c || a == c {
            return Err(ModelError::DegenerateTriangle);
        }
        Ok(Curve::Triangle { vertices })
    }

    /// Builds a curve of `kind` from loosely typed arguments; the radius
    /// defaults to 0 and `radius_b` to `radius`.
    pub fn build(
        kind: CurveKind,
        radius: Option<f64>,
        radius_b: Option<f64>,
        points: &[Complex],
    ) -> ModelResult<Self> {
        let radius = radius.unwrap_or(0.0);
        match kind {
            CurveKind::Circle => Self::circle(radius),
            CurveKind::UpperSemicircle => Self::upper_semicircle(radius),
            CurveKind::LowerSemicircle => Self::lower_semicircle(radius),
            CurveKind::Square => Self::square(radius),
            CurveKind::Rectangle => Self::rectangle(radius, radius_b.unwrap_or(radius)),
            CurveKind::Triangle => Self::triangle(points),
        }
    }

    pub fn kind(&self) -> CurveKind {
        match self {
            Curve::Circle { .. } => CurveKind::Circle,
            Curve::UpperSemicircle { .. } => CurveKind::UpperSemicircle,
            Curve::LowerSemicircle { .. } => CurveKind::LowerSemicircle,
            Curve::Square { .. } => CurveKind::Square,
            Curve::Rectangle { .. } => CurveKind::Rectangle,
            Curve::Triangle { .. } => CurveKind::Triangle,
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Curve::Circle { radius } => circle_length(*radius),
            Curve::UpperSemicircle { radius } | Curve::LowerSemicircle { radius } => {
                circle_length(*radius) / 2.0
            }
            Curve::Square { radius } => square_length(*radius),
            Curve::Rectangle {
                half_width,
                half_height,
            } => rectangle_length(*half_width, *half_height),
            Curve::Triangle { vertices } => triangle_length(vertices),
        }
    }
}

pub fn circle_length(radius: f64) -> f64 {
    2.0 * PI * radius
}

pub fn rectangle_length(half_width: f64, half_height: f64) -> f64 {
    NUM_POINTS_RECT as f64 * (half_width + half_height)
}

pub fn square_length(radius: f64) -> f64 {
    rectangle_length(radius, radius)
}

pub fn triangle_length(vertices: &[Complex; 3]) -> f64 {
    let [a, b, c] = *vertices;
    distance(a, b) + distance(b, c) + distance(c, a)
}
