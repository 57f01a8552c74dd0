use complex_rs::{complex::Complex, result::ComplexResult};
use serde::{Deserialize, Serialize};

use super::report::Report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Value(Complex),
    Real(f64),
    Flag(bool),
    Text(String),
    Failure(String),
}

impl From<ComplexResult<Complex>> for Outcome {
    fn from(result: ComplexResult<Complex>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

impl From<ComplexResult<f64>> for Outcome {
    fn from(result: ComplexResult<f64>) -> Self {
        match result {
            Ok(value) => Outcome::Real(value),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

/// One operation applied to its inputs, with what came out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: String,
    pub inputs: Vec<String>,
    pub outcome: Outcome,
}

impl Evaluation {
    pub fn new(operation: impl Into<String>, inputs: Vec<String>, outcome: Outcome) -> Self {
        Self {
            operation: operation.into(),
            inputs,
            outcome,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failure(_))
    }

    /// `operation(inputs) = outcome`, complex values shown with `decimals`
    /// places.
    pub fn render(&self, decimals: usize) -> String {
        let outcome = match &self.outcome {
            Outcome::Value(value) => format!("{:.*}", decimals, value),
            Outcome::Real(value) => format!("{}", value),
            Outcome::Flag(flag) => flag.to_string(),
            Outcome::Text(text) => text.clone(),
            Outcome::Failure(reason) => format!("error: {}", reason),
        };
        format!("{}({}) = {}", self.operation, self.inputs.join(", "), outcome)
    }
}

impl Report for Evaluation {
    const NAME: &'static str = "Evaluation";
}

#[cfg(test)]
mod tests {
    use complex_rs::{
        complex::{divide, ONE, ORIGIN},
        error::ComplexError,
    };

    use super::*;

    #[test]
    fn outcomes_from_results() {
        assert_eq!(Outcome::from(divide(ONE, ONE)), Outcome::Value(ONE));
        assert_eq!(
            Outcome::from(divide(ONE, ORIGIN)),
            Outcome::Failure(ComplexError::DivisionByZero.to_string())
        );
        assert_eq!(Outcome::from(ONE.argument()), Outcome::Real(0.0));
    }

    #[test]
    fn renders_for_humans() {
        let evaluation = Evaluation::new(
            "multiply",
            vec!["1 + i * 1".to_string(), "2".to_string()],
            Outcome::Value(Complex::new(2.0, 2.0 / 3.0)),
        );
        assert_eq!(
            evaluation.render(2),
            "multiply(1 + i * 1, 2) = 2 + i * 0.67"
        );
        assert!(!evaluation.is_failure());
    }

    #[test]
    fn json_is_wrapped_under_the_type_name() {
        let evaluation = Evaluation::new(
            "inverse",
            vec!["0".to_string()],
            Outcome::Failure("division by zero".to_string()),
        );
        let json = evaluation.to_json().unwrap();
        assert_eq!(json["Evaluation"]["operation"], "inverse");
        assert_eq!(
            json["Evaluation"]["outcome"]["Failure"],
            "division by zero"
        );

        let decoded = Evaluation::from_json(&json.to_string()).unwrap();
        assert_eq!(decoded, evaluation);
        assert!(decoded.is_failure());
    }
}
