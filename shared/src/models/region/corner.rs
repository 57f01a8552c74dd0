use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopRight,
    BottomRight,
    TopLeft,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::TopLeft,
        Corner::BottomLeft,
    ];

    fn signs(self) -> (f64, f64) {
        match self {
            Corner::TopRight => (1.0, 1.0),
            Corner::BottomRight => (1.0, -1.0),
            Corner::TopLeft => (-1.0, 1.0),
            Corner::BottomLeft => (-1.0, -1.0),
        }
    }
}

/// Corner of the axis-aligned rectangle centred on `center` with the given
/// half side lengths.
pub fn rect_point(center: Complex, half_width: f64, half_height: f64, corner: Corner) -> Complex {
    let (x, y) = corner.signs();
    Complex::new(center.re() + x * half_width, center.im() + y * half_height)
}

pub fn rect_points(center: Complex, half_width: f64, half_height: f64) -> [Complex; 4] {
    Corner::ALL.map(|corner| rect_point(center, half_width, half_height, corner))
}

pub fn square_points(center: Complex, radius: f64) -> [Complex; 4] {
    rect_points(center, radius, radius)
}

#[cfg(test)]
mod tests {
    use complex_rs::complex::ORIGIN;

    use super::*;

    #[test]
    fn rectangle_corners() {
        let points = rect_points(Complex::new(1.0, -1.0), 2.0, 0.5);
        assert_eq!(
            points,
            [
                Complex::new(3.0, -0.5),
                Complex::new(3.0, -1.5),
                Complex::new(-1.0, -0.5),
                Complex::new(-1.0, -1.5),
            ]
        );
    }

    #[test]
    fn square_corners() {
        assert_eq!(
            rect_point(ORIGIN, 1.0, 1.0, Corner::BottomLeft),
            Complex::new(-1.0, -1.0)
        );
        assert_eq!(square_points(ORIGIN, 2.0)[0], Complex::new(2.0, 2.0));
    }
}
