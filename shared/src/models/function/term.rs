use std::fmt;

use log::debug;

use crate::{error::ModelError, result::ModelResult};

pub(super) const EXPONENT: char = '^';
const FACTOR_SEPARATOR: char = '*';

/// One additive term reduced to `coefficient * z^degree`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub coefficient: String,
    pub degree: u32,
    pub variable: char,
}

impl Term {
    /// Splits `text` on `*`: a bare variable adds 1 to the degree, `z^k` adds
    /// `k`, anything else (numbers, `sin{z}`) is kept as coefficient. A
    /// leading `-` on any factor flips the sign of the whole term.
    pub fn parse(text: &str, variable: char) -> ModelResult<Self> {
        let (mut negative, body) = match text.strip_prefix('-') {
            Some(body) => (true, body),
            None => (false, text),
        };

        let mut coefficients = Vec::new();
        let mut degree: u32 = 0;
        for factor in body.split(FACTOR_SEPARATOR) {
            let factor = match factor.strip_prefix('-') {
                Some(unsigned) => {
                    negative = !negative;
                    unsigned
                }
                None => factor,
            };
            if factor.is_empty() {
                return Err(ModelError::EmptyTerm {
                    function: text.to_string(),
                });
            }

            let mut chars = factor.chars();
            if chars.next() != Some(variable) {
                coefficients.push(factor);
                continue;
            }

            let rest = chars.as_str();
            let power = match rest.strip_prefix(EXPONENT) {
                None if rest.is_empty() => 1,
                None => {
                    coefficients.push(factor);
                    continue;
                }
                Some(exponent) => exponent.parse::<u32>().map_err(|_| {
                    debug!("Rejecting exponent {:?} in {:?}", exponent, text);
                    ModelError::InvalidExponent {
                        term: text.to_string(),
                        exponent: exponent.to_string(),
                    }
                })?,
            };
            degree = degree.saturating_add(power);
        }

        let coefficient = match (negative, coefficients.is_empty()) {
            (false, true) => "1".to_string(),
            (true, true) => "-1".to_string(),
            (false, false) => coefficients.join(" * "),
            (true, false) => format!("-{}", coefficients.join(" * ")),
        };

        Ok(Self {
            coefficient,
            degree,
            variable,
        })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} * {}{}{}",
            self.coefficient, self.variable, EXPONENT, self.degree
        )
    }
}
