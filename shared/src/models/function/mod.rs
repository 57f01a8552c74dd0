pub mod term;

use std::fmt;

use log::debug;

use crate::{error::ModelError, result::ModelResult};

use self::term::{Term, EXPONENT};

const DENOMINATOR: char = '/';
const TERM_SEPARATOR: char = '+';

/// A rational expression in one variable, reduced to sorted
/// `coefficient * z^degree` terms.
///
/// Parentheses are dropped before splitting, so `1/(z^2+1)` and `1/z^2+1`
/// both read as one over `z^2 + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifiedFunction {
    variable: char,
    numerator: Vec<Term>,
    denominator: Option<Vec<Term>>,
}

impl SimplifiedFunction {
    pub fn parse(function: &str, variable: char) -> ModelResult<Self> {
        let cleaned = clean(function);
        let sides: Vec<&str> = cleaned.split(DENOMINATOR).collect();

        let (numerator, denominator) = match sides.as_slice() {
            [numerator] => (*numerator, None),
            [numerator, denominator] => (*numerator, Some(*denominator)),
            _ => {
                return Err(ModelError::TooManyDenominators {
                    function: function.to_string(),
                    count: sides.len() - 1,
                })
            }
        };

        let simplified = Self {
            variable,
            numerator: simplify_terms(numerator, variable, function)?,
            denominator: denominator
                .map(|side| simplify_terms(side, variable, function))
                .transpose()?,
        };
        debug!("Simplified {:?} into {}", function, simplified);
        Ok(simplified)
    }

    pub fn variable(&self) -> char {
        self.variable
    }

    pub fn numerator(&self) -> &[Term] {
        &self.numerator
    }

    pub fn denominator(&self) -> Option<&[Term]> {
        self.denominator.as_deref()
    }

    pub fn max_degree_numerator(&self) -> u32 {
        max_degree(&self.numerator)
    }

    pub fn max_degree_denominator(&self) -> Option<u32> {
        self.denominator.as_deref().map(max_degree)
    }

    /// Whether the integral of the function over a large closed curve
    /// vanishes as the curve grows.
    ///
    /// For large `|z|` the function behaves like its leading terms while the
    /// curve length grows linearly, so the bound `length · max|f|` goes to
    /// zero once `deg(numerator) + 1 < deg(denominator)`. Polynomials never
    /// qualify.
    pub fn approaches_zero(&self) -> bool {
        match self.max_degree_denominator() {
            Some(denominator) => self.max_degree_numerator().saturating_add(1) < denominator,
            None => false,
        }
    }
}

fn clean(function: &str) -> String {
    let mut cleaned = String::with_capacity(function.len());
    for c in function
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
    {
        // a binary minus starts a new, negated term
        let binary_minus = c == '-'
            && cleaned
                .chars()
                .last()
                .is_some_and(|previous| !matches!(previous, '+' | '*' | '{' | DENOMINATOR | EXPONENT));
        if binary_minus {
            cleaned.push(TERM_SEPARATOR);
        }
        cleaned.push(c);
    }
    cleaned
}

fn simplify_terms(side: &str, variable: char, function: &str) -> ModelResult<Vec<Term>> {
    let mut terms = side
        .split(TERM_SEPARATOR)
        .map(|term| {
            if term.is_empty() {
                Err(ModelError::EmptyTerm {
                    function: function.to_string(),
                })
            } else {
                Term::parse(term, variable)
            }
        })
        .collect::<ModelResult<Vec<Term>>>()?;
    terms.sort_by_key(|term| term.degree);
    Ok(terms)
}

fn max_degree(terms: &[Term]) -> u32 {
    terms.iter().map(|term| term.degree).max().unwrap_or(0)
}

fn write_terms(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    f.write_str("(")?;
    for (index, term) in terms.iter().enumerate() {
        if index > 0 {
            f.write_str(" + ")?;
        }
        write!(f, "{}", term)?;
    }
    f.write_str(")")
}

impl fmt::Display for SimplifiedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, &self.numerator)?;
        if let Some(denominator) = &self.denominator {
            write!(f, "{}", DENOMINATOR)?;
            write_terms(f, denominator)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_terms_by_degree() {
        let function = SimplifiedFunction::parse("z^3 + 2 * z + 5", 'z').unwrap();
        assert_eq!(function.to_string(), "(5 * z^0 + 2 * z^1 + 1 * z^3)");
        assert_eq!(function.max_degree_numerator(), 3);
        assert_eq!(function.max_degree_denominator(), None);
    }

    #[test]
    fn rational_functions() {
        let function = SimplifiedFunction::parse("(z + 1) / (z^3 - 4*z)", 'z').unwrap();
        assert_eq!(
            function.to_string(),
            "(1 * z^0 + 1 * z^1)/(-4 * z^1 + 1 * z^3)"
        );
        assert_eq!(function.denominator().map(<[Term]>::len), Some(2));
        assert_eq!(function.max_degree_denominator(), Some(3));
    }

    #[test]
    fn parentheses_are_dropped_before_splitting() {
        let with = SimplifiedFunction::parse("1/(z^2+1)", 'z').unwrap();
        let without = SimplifiedFunction::parse("1/z^2+1", 'z').unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn vanishing_integrals() {
        let cases = [
            ("1/(z^2+1)", true),
            ("z/(z^2+1)", false),
            ("z/(z^3+1)", true),
            ("z^2+1", false),
            ("sin{z}*z/(z^4)", true),
            ("2*z^4/(z^5)", false),
            ("2*-z^4/(z^5)", false),
            ("3/(-2*-z^3)", true),
        ];
        for (source, expected) in cases {
            let function = SimplifiedFunction::parse(source, 'z').unwrap();
            assert_eq!(function.approaches_zero(), expected, "{source}");
        }
    }

    #[test]
    fn other_variables() {
        let function = SimplifiedFunction::parse("w^2 - w", 'w').unwrap();
        assert_eq!(function.variable(), 'w');
        assert_eq!(function.to_string(), "(-1 * w^1 + 1 * w^2)");
    }

    #[test]
    fn rejects_malformed_functions() {
        assert!(matches!(
            SimplifiedFunction::parse("1/z/z", 'z'),
            Err(ModelError::TooManyDenominators { count: 2, .. })
        ));
        assert!(matches!(
            SimplifiedFunction::parse("z + + 1", 'z'),
            Err(ModelError::EmptyTerm { .. })
        ));
        assert!(matches!(
            SimplifiedFunction::parse("", 'z'),
            Err(ModelError::EmptyTerm { .. })
        ));
        assert!(matches!(
            SimplifiedFunction::parse("z^a", 'z'),
            Err(ModelError::InvalidExponent { .. })
        ));
    }
}
