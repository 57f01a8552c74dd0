use std::fmt;

use crate::complex::Complex;

/// Decimal places shown when the formatter carries no precision.
pub const DISPLAY_DECIMALS: usize = 10;

// Beyond this f64 has no fractional digits left to show.
const MAX_DISPLAY_DECIMALS: usize = 15;

fn round_for_display(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_DISPLAY_DECIMALS) as i32);
    let rounded = (value * scale).round() / scale;
    if !rounded.is_finite() {
        value
    } else if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Renders `a + i * b`, dropping whichever part is zero.
///
/// `{:.3}` rounds both parts to three places, plain `{}` to
/// [`DISPLAY_DECIMALS`].
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(DISPLAY_DECIMALS);
        let re = round_for_display(self.re(), decimals);
        let im = round_for_display(self.im(), decimals);

        match (re == 0.0, im) {
            (true, im) if im < 0.0 => write!(f, "- i * {}", -im),
            (false, im) if im < 0.0 => write!(f, "{} - i * {}", re, -im),
            (_, im) if im == 0.0 => write!(f, "{}", re),
            (true, im) => write!(f, "i * {}", im),
            (false, im) => write!(f, "{} + i * {}", re, im),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::complex::{Complex, I, NEGATIVE_I, ORIGIN};

    #[test]
    fn renders_both_parts() {
        assert_eq!(Complex::new(2.0, 3.0).to_string(), "2 + i * 3");
        assert_eq!(Complex::new(2.5, -0.25).to_string(), "2.5 - i * 0.25");
    }

    #[test]
    fn drops_zero_parts() {
        assert_eq!(ORIGIN.to_string(), "0");
        assert_eq!(Complex::new(-4.0, 0.0).to_string(), "-4");
        assert_eq!(I.to_string(), "i * 1");
        assert_eq!(NEGATIVE_I.to_string(), "- i * 1");
        assert_eq!(Complex::new(0.0, -7.5).to_string(), "- i * 7.5");
    }

    #[test]
    fn rounds_to_the_display_precision() {
        let third = Complex::new(1.0 / 3.0, 2.0 / 3.0);
        assert_eq!(third.to_string(), "0.3333333333 + i * 0.6666666667");
        assert_eq!(format!("{:.3}", third), "0.333 + i * 0.667");
        assert_eq!(format!("{:.2}", Complex::new(1.0, 0.001)), "1");
        assert_eq!(format!("{:.0}", Complex::new(-0.4, 2.6)), "i * 3");
    }
}
