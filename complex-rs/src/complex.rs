use std::{
    cmp::Ordering,
    f64::consts::{FRAC_PI_2, PI},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::ComplexError, result::ComplexResult};

/// Number of decimal places every component is rounded to on construction.
pub const PRECISION: i32 = 12;

const SCALE: f64 = 1e12;

// Past 2^50 the scaled value no longer carries a fractional part we could
// round away, and re-rounding would stop being idempotent.
const MAX_SCALED: f64 = 1_125_899_906_842_624.0;

/// The additive identity.
pub const ORIGIN: Complex = Complex { re: 0.0, im: 0.0 };
/// The multiplicative identity.
pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
pub const NEGATIVE_ONE: Complex = Complex { re: -1.0, im: 0.0 };
/// The imaginary unit.
pub const I: Complex = Complex { re: 0.0, im: 1.0 };
pub const NEGATIVE_I: Complex = Complex { re: 0.0, im: -1.0 };

/// An immutable point of the complex plane.
///
/// Both components are rounded to [`PRECISION`] decimal places when the value
/// is built, so equality compares the rounded components exactly and
/// floating-point noise such as `cos(π) + i·1.2e-16` collapses to `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ComplexParts")]
pub struct Complex {
    re: f64,
    im: f64,
}

#[derive(Deserialize)]
struct ComplexParts {
    re: f64,
    im: f64,
}

impl From<ComplexParts> for Complex {
    fn from(parts: ComplexParts) -> Self {
        Complex::new(parts.re, parts.im)
    }
}

fn scale_by(radius: f64, factor: f64) -> f64 {
    if factor == 0.0 {
        0.0
    } else {
        radius * factor
    }
}

fn round_component(value: f64) -> f64 {
    let scaled = value * SCALE;
    if !scaled.is_finite() || scaled.abs() >= MAX_SCALED {
        return value;
    }

    let rounded = scaled.round() / SCALE;
    // -0.0 and 0.0 must render and serialize the same way
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self {
            re: round_component(re),
            im: round_component(im),
        }
    }

    /// Builds `radius · (cos θ + i·sin θ)`.
    ///
    /// A vanishing trigonometric factor yields a zero component even when
    /// `radius` overflowed to infinity.
    pub fn from_polar(radius: f64, theta: f64) -> Self {
        Self::new(scale_by(radius, theta.cos()), scale_by(radius, theta.sin()))
    }

    pub fn re(self) -> f64 {
        self.re
    }

    pub fn im(self) -> f64 {
        self.im
    }

    pub fn is_origin(self) -> bool {
        self == ORIGIN
    }

    pub fn is_real(self) -> bool {
        self.im == 0.0
    }

    pub fn modulus_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Euclidean norm `sqrt(re² + im²)`.
    pub fn modulus(self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Angle of the point restricted to `(−π/2, π/2]`.
    ///
    /// Only the half-plane is resolved: off the imaginary axis the result is
    /// `atan(im / re)`, so `-1 + i` and `1 - i` share the angle `-π/4`. Use
    /// [`Complex::principal_argument`] when the quadrant matters.
    ///
    /// Fails with [`ComplexError::UndefinedArgument`] at the origin.
    pub fn argument(self) -> ComplexResult<f64> {
        if self.re != 0.0 {
            return Ok((self.im / self.re).atan());
        }

        if self.im > 0.0 {
            Ok(FRAC_PI_2)
        } else if self.im < 0.0 {
            Ok(-FRAC_PI_2)
        } else {
            debug!("Argument requested for the origin");
            Err(ComplexError::UndefinedArgument)
        }
    }

    /// Angle of the point in `(−π, π]`, i.e. [`Complex::argument`] moved to
    /// the right quadrant for points of the left half-plane.
    pub fn principal_argument(self) -> ComplexResult<f64> {
        let restricted = self.argument()?;
        if self.re >= 0.0 {
            return Ok(restricted);
        }

        if self.im >= 0.0 {
            Ok(restricted + PI)
        } else {
            Ok(restricted - PI)
        }
    }

    /// Multiplicative inverse `conj(p) / |p|²`.
    pub fn inverse(self) -> ComplexResult<Self> {
        if self.is_origin() {
            debug!("Inverse requested for the origin");
            return Err(ComplexError::DivisionByZero);
        }

        let modulus_squared = self.modulus_squared();
        Ok(Self::new(
            self.re / modulus_squared,
            -self.im / modulus_squared,
        ))
    }

    /// Integer power through the polar form `|p|^n · e^(i·n·θ)`.
    ///
    /// θ is the full-quadrant [`Complex::principal_argument`], not the
    /// restricted [`Complex::argument`], so `(-1)^1` stays `-1`.
    ///
    /// `ORIGIN^0` is `ONE`, `ORIGIN^n` is `ORIGIN` for `n > 0` and `ORIGIN^-n`
    /// is a division by zero. Negative exponents are raised directly and
    /// rounded once, like [`divide`].
    pub fn power(self, n: i32) -> ComplexResult<Self> {
        if n == 0 {
            return Ok(ONE);
        }

        if self.is_origin() {
            if n < 0 {
                debug!("Negative power {} requested for the origin", n);
                return Err(ComplexError::DivisionByZero);
            }
            return Ok(ORIGIN);
        }

        let exponent = f64::from(n);
        let theta = self.principal_argument()?;
        Ok(Self::from_polar(
            self.modulus().powf(exponent),
            theta * exponent,
        ))
    }

    pub fn distance(self, other: Self) -> f64 {
        distance(self, other)
    }

    /// Componentwise comparison within `tolerance`.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
    }
}

/// Embeds a real number into the complex plane.
pub fn real(value: f64) -> Complex {
    Complex::new(value, 0.0)
}

/// Embeds `value · i` into the complex plane.
pub fn imaginary(value: f64) -> Complex {
    Complex::new(0.0, value)
}

pub fn add(p: Complex, q: Complex) -> Complex {
    Complex::new(p.re + q.re, p.im + q.im)
}

pub fn subtract(p: Complex, q: Complex) -> Complex {
    Complex::new(p.re - q.re, p.im - q.im)
}

pub fn negate(p: Complex) -> Complex {
    Complex::new(-p.re, -p.im)
}

pub fn multiply(p: Complex, q: Complex) -> Complex {
    Complex::new(p.re * q.re - p.im * q.im, p.re * q.im + q.re * p.im)
}

/// `p / q`, computed as `p · conj(q) · real(1 / |q|²)`.
///
/// The product is expanded and rounded once so a small divisor does not
/// amplify an intermediate rounding step.
pub fn divide(p: Complex, q: Complex) -> ComplexResult<Complex> {
    if q.is_origin() {
        debug!("Refusing to divide {:?} by the origin", p);
        return Err(ComplexError::DivisionByZero);
    }

    let denominator = q.modulus_squared();
    Ok(Complex::new(
        (p.re * q.re + p.im * q.im) / denominator,
        (p.im * q.re - p.re * q.im) / denominator,
    ))
}

/// Euclidean distance `|p − q|`.
pub fn distance(p: Complex, q: Complex) -> f64 {
    subtract(p, q).modulus()
}

/// `p > q` in the lexicographic order: real parts first, then imaginary parts.
pub fn lexicographically_greater(p: Complex, q: Complex) -> bool {
    p.re > q.re || (p.re == q.re && p.im > q.im)
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.re.partial_cmp(&other.re)? {
            Ordering::Equal => self.im.partial_cmp(&other.im),
            ordering => Some(ordering),
        }
    }
}

impl std::ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl std::ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(self, rhs)
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        multiply(self, rhs)
    }
}

impl std::ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        negate(self)
    }
}
