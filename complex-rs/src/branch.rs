use std::{f64::consts::TAU, fmt, str::FromStr};

use ::log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    complex::{multiply, real, subtract, Complex, I, NEGATIVE_I, NEGATIVE_ONE, ONE},
    error::ComplexError,
    result::ComplexResult,
};

/// A branch of the complex logarithm, named after the ray of the real axis
/// it cuts away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Branch {
    /// Cut along `[0, +∞)`.
    #[default]
    Positive,
    /// Cut along `(−∞, 0]`.
    Negative,
}

impl Branch {
    pub const POSITIVE_IDENTIFIER: &'static str = "C\\[0, infinity)";
    pub const NEGATIVE_IDENTIFIER: &'static str = "C\\(-infinity, 0]";

    pub fn identifier(self) -> &'static str {
        match self {
            Branch::Positive => Self::POSITIVE_IDENTIFIER,
            Branch::Negative => Self::NEGATIVE_IDENTIFIER,
        }
    }

    /// Whether `p` lies on the cut of this branch.
    pub fn contains(self, p: Complex) -> bool {
        if !p.is_real() {
            return false;
        }

        match self {
            Branch::Positive => p.re() >= 0.0,
            Branch::Negative => p.re() <= 0.0,
        }
    }

    /// Angle of `p` on the continuous sheet left by the cut: `(0, 2π)` for
    /// the positive cut, `(−π, π)` for the negative one.
    fn angle(self, p: Complex) -> ComplexResult<f64> {
        let theta = p.principal_argument()?;
        match self {
            Branch::Positive if theta < 0.0 => Ok(theta + TAU),
            _ => Ok(theta),
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Branch {
    type Err = ComplexError;

    fn from_str(name: &str) -> ComplexResult<Self> {
        let trimmed = name.trim();
        if trimmed == Self::POSITIVE_IDENTIFIER || trimmed.eq_ignore_ascii_case("positive") {
            Ok(Branch::Positive)
        } else if trimmed == Self::NEGATIVE_IDENTIFIER || trimmed.eq_ignore_ascii_case("negative")
        {
            Ok(Branch::Negative)
        } else {
            Err(ComplexError::UnsupportedBranch {
                name: name.to_string(),
            })
        }
    }
}

/// Whether `p` lies on the cut of `branch`. Points off the real axis never do.
pub fn point_in_branch(p: Complex, branch: Branch) -> bool {
    branch.contains(p)
}

/// `radius · (cos θ + i·sin θ)`.
pub fn polar_form(radius: f64, theta: f64) -> Complex {
    Complex::from_polar(radius, theta)
}

/// The rotation `e^(iθ) = cos θ + i·sin θ`.
pub fn rotation(theta: f64) -> Complex {
    Complex::from_polar(1.0, theta)
}

/// `e^z = e^(Re z) · (cos(Im z) + i·sin(Im z))`.
pub fn complex_exponential(z: Complex) -> Complex {
    Complex::from_polar(z.re().exp(), z.im())
}

/// Values that `e^x` is defined for: a real angle is read as the pure
/// rotation `e^(iθ)`, a complex value as the general exponential.
pub trait Exponential {
    fn exponential(self) -> Complex;
}

impl Exponential for f64 {
    fn exponential(self) -> Complex {
        rotation(self)
    }
}

impl Exponential for Complex {
    fn exponential(self) -> Complex {
        complex_exponential(self)
    }
}

pub fn exponential<T: Exponential>(value: T) -> Complex {
    value.exponential()
}

/// The logarithm `ln|p| + i·θ` on `branch`, θ being the angle on the sheet
/// the branch leaves continuous.
///
/// Fails with [`ComplexError::BranchCutViolation`] when `p` lies on the cut.
/// The origin lies on both cuts, so its undefined argument is never reached.
pub fn log(p: Complex, branch: Branch) -> ComplexResult<Complex> {
    if point_in_branch(p, branch) {
        debug!("{:?} lies on the cut of the {:?} branch", p, branch);
        return Err(ComplexError::BranchCutViolation { point: p, branch });
    }

    let theta = branch.angle(p)?;
    Ok(Complex::new(p.modulus().ln(), theta))
}

/// `p^q = e^(q · log(p))` on `branch`.
pub fn general_power(p: Complex, q: Complex, branch: Branch) -> ComplexResult<Complex> {
    let logarithm = log(p, branch)?;
    Ok(complex_exponential(multiply(q, logarithm)))
}

/// `sin z = (e^(iz) − e^(−iz)) / 2i`.
pub fn sine(z: Complex) -> Complex {
    let difference = subtract(
        complex_exponential(multiply(I, z)),
        complex_exponential(multiply(NEGATIVE_I, z)),
    );
    // 1 / 2i == -i / 2
    multiply(difference, Complex::new(0.0, -0.5))
}

/// `cos z = (e^(iz) + e^(−iz)) / 2`.
pub fn cosine(z: Complex) -> Complex {
    let sum = complex_exponential(multiply(I, z)) + complex_exponential(multiply(NEGATIVE_I, z));
    multiply(sum, real(0.5))
}

/// `i^n`, read off `n mod 4`.
pub fn i_power(n: u64) -> Complex {
    match n % 4 {
        0 => ONE,
        1 => I,
        2 => NEGATIVE_ONE,
        _ => NEGATIVE_I,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{E, FRAC_PI_2, PI};

    use super::*;
    use crate::complex::ORIGIN;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn branch_membership() {
        assert!(point_in_branch(ONE, Branch::Positive));
        assert!(point_in_branch(ORIGIN, Branch::Positive));
        assert!(point_in_branch(ORIGIN, Branch::Negative));
        assert!(point_in_branch(NEGATIVE_ONE, Branch::Negative));
        assert!(!point_in_branch(NEGATIVE_ONE, Branch::Positive));
        assert!(!point_in_branch(ONE, Branch::Negative));
        assert!(!point_in_branch(Complex::new(2.0, 1e-3), Branch::Positive));
        assert!(!point_in_branch(I, Branch::Negative));
    }

    #[test]
    fn branch_identifiers() {
        assert_eq!("C\\[0, infinity)".parse::<Branch>(), Ok(Branch::Positive));
        assert_eq!("C\\(-infinity, 0]".parse::<Branch>(), Ok(Branch::Negative));
        assert_eq!("Negative".parse::<Branch>(), Ok(Branch::Negative));
        assert_eq!(Branch::default(), Branch::Positive);
        assert_eq!(Branch::Negative.to_string(), Branch::NEGATIVE_IDENTIFIER);
        assert_eq!(
            "C\\(-infinity, infinity)".parse::<Branch>(),
            Err(ComplexError::UnsupportedBranch {
                name: "C\\(-infinity, infinity)".to_string()
            })
        );
    }

    #[test]
    fn exponential_of_an_angle_is_a_rotation() {
        assert_eq!(exponential(FRAC_PI_2), I);
        assert_eq!(exponential(PI), NEGATIVE_ONE);
        for step in 0..32 {
            let theta = f64::from(step) * 0.7 - 11.0;
            assert!((exponential(theta).modulus() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn general_exponential() {
        assert_eq!(exponential(ORIGIN), ONE);
        assert!(exponential(ONE).approx_eq(Complex::new(E, 0.0), EPSILON));
        let z = exponential(Complex::new(1.0, PI));
        assert!(z.approx_eq(Complex::new(-E, 0.0), EPSILON));
    }

    #[test]
    fn polar_form_scales_the_rotation() {
        assert!(polar_form(2.0, FRAC_PI_2).approx_eq(Complex::new(0.0, 2.0), EPSILON));
        assert_eq!(polar_form(0.0, 1.3), ORIGIN);
    }

    #[test]
    fn log_rejects_points_on_the_cut() {
        assert_eq!(
            log(ONE, Branch::Positive),
            Err(ComplexError::BranchCutViolation {
                point: ONE,
                branch: Branch::Positive
            })
        );
        assert_eq!(
            log(NEGATIVE_ONE, Branch::Negative),
            Err(ComplexError::BranchCutViolation {
                point: NEGATIVE_ONE,
                branch: Branch::Negative
            })
        );
        assert!(log(ORIGIN, Branch::Positive).is_err());
        assert!(log(ORIGIN, Branch::Negative).is_err());
    }

    #[test]
    fn log_off_the_cut() {
        let z = log(NEGATIVE_ONE, Branch::Positive).unwrap();
        assert!(z.approx_eq(Complex::new(0.0, PI), EPSILON));

        let z = log(I, Branch::Positive).unwrap();
        assert!(z.approx_eq(Complex::new(0.0, FRAC_PI_2), EPSILON));

        let z = log(NEGATIVE_I, Branch::Positive).unwrap();
        assert!(z.approx_eq(Complex::new(0.0, 3.0 * FRAC_PI_2), EPSILON));

        let z = log(NEGATIVE_I, Branch::Negative).unwrap();
        assert!(z.approx_eq(Complex::new(0.0, -FRAC_PI_2), EPSILON));

        let z = log(Complex::new(E, 0.0), Branch::Negative).unwrap();
        assert!(z.approx_eq(ONE, EPSILON));
    }

    #[test]
    fn general_power_propagates_cut_violations() {
        assert!(matches!(
            general_power(ONE, I, Branch::Positive),
            Err(ComplexError::BranchCutViolation { .. })
        ));

        // i^i = e^(-π/2)
        let z = general_power(I, I, Branch::Positive).unwrap();
        assert!(z.approx_eq(Complex::new((-FRAC_PI_2).exp(), 0.0), EPSILON));

        let z = general_power(NEGATIVE_ONE, Complex::new(2.0, 0.0), Branch::Positive).unwrap();
        assert!(z.approx_eq(ONE, EPSILON));
    }

    #[test]
    fn trigonometric_functions() {
        assert_eq!(sine(ORIGIN), ORIGIN);
        assert_eq!(cosine(ORIGIN), ONE);

        let z = Complex::new(0.5, -1.25);
        let expected_sine = Complex::new(
            0.5f64.sin() * 1.25f64.cosh(),
            -(0.5f64.cos() * 1.25f64.sinh()),
        );
        assert!(sine(z).approx_eq(expected_sine, EPSILON));

        let s = sine(z);
        let c = cosine(z);
        assert!((s * s + c * c).approx_eq(ONE, EPSILON));
    }

    #[test]
    fn powers_of_i() {
        assert_eq!(i_power(0), ONE);
        assert_eq!(i_power(1), I);
        assert_eq!(i_power(2), NEGATIVE_ONE);
        assert_eq!(i_power(3), NEGATIVE_I);
        assert_eq!(i_power(4), ONE);
        assert_eq!(i_power(101), I);
        assert_eq!(i_power(u64::MAX), NEGATIVE_I);
    }
}
