use std::str::FromStr;

use crate::{complex::Complex, error::ComplexError, result::ComplexResult};

/// Parses `3`, `-2.5i`, `1+2i`, `1e-3-4i`, `i`, `-i` and the displayed form
/// `1 + i * 2`. Whitespace is ignored and `j` is accepted for `i`.
impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(literal: &str) -> ComplexResult<Self> {
        let compact: String = literal
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == 'j' { 'i' } else { c })
            .collect();
        if compact.is_empty() {
            return Err(invalid(literal));
        }

        let compact = match compact.find("i*") {
            Some(index) => format!("{}{}i", &compact[..index], &compact[index + 2..]),
            None => compact,
        };

        let Some(body) = compact.strip_suffix('i') else {
            return Ok(Complex::new(parse_component(&compact, literal)?, 0.0));
        };

        let (re_text, im_text) = match split_index(body) {
            Some(index) => body.split_at(index),
            None => ("", body),
        };
        let re = match re_text {
            "" => 0.0,
            text => parse_component(text, literal)?,
        };
        let im = match im_text {
            "" | "+" => 1.0,
            "-" => -1.0,
            text => parse_component(text, literal)?,
        };
        Ok(Complex::new(re, im))
    }
}

fn invalid(literal: &str) -> ComplexError {
    ComplexError::InvalidLiteral {
        literal: literal.to_string(),
    }
}

// Sign that starts the imaginary part: the last `+`/`-` that is neither
// leading nor part of an exponent.
fn split_index(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&index| matches!(bytes[index], b'+' | b'-') && !matches!(bytes[index - 1], b'e' | b'E'))
}

fn parse_component(text: &str, literal: &str) -> ComplexResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid(literal)),
    }
}
