use clap::{Parser, ValueEnum};
use complex_rs::{
    branch::{cosine, exponential, i_power, sine},
    complex::{add, distance, divide, multiply, negate, subtract, Complex},
};
use shared::dtos::evaluation::{Evaluation, Outcome};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Distance,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperation {
    Modulus,
    Argument,
    PrincipalArgument,
    Conjugate,
    Inverse,
    Negate,
    Exp,
    Sin,
    Cos,
}

/// ➕ Binary arithmetic on `P` and `Q`.
///
/// Complex numbers are written `3`, `-2i`, `1+2i` or `1 + i * 2`.
#[derive(Parser, Debug)]
pub struct ArithCommand {
    #[arg(value_enum)]
    pub operation: BinaryOperation,

    #[arg(allow_hyphen_values = true, value_name = "P")]
    pub p: Complex,

    #[arg(allow_hyphen_values = true, value_name = "Q")]
    pub q: Complex,
}

impl ArithCommand {
    pub fn run(&self) -> Evaluation {
        let (p, q) = (self.p, self.q);
        let outcome = match self.operation {
            BinaryOperation::Add => Outcome::Value(add(p, q)),
            BinaryOperation::Subtract => Outcome::Value(subtract(p, q)),
            BinaryOperation::Multiply => Outcome::Value(multiply(p, q)),
            BinaryOperation::Divide => divide(p, q).into(),
            BinaryOperation::Distance => Outcome::Real(distance(p, q)),
        };
        Evaluation::new(operation_name(self.operation), inputs(&[p, q]), outcome)
    }
}

#[derive(Parser, Debug)]
pub struct UnaryCommand {
    #[arg(value_enum)]
    pub operation: UnaryOperation,

    #[arg(allow_hyphen_values = true, value_name = "P")]
    pub p: Complex,
}

impl UnaryCommand {
    pub fn run(&self) -> Evaluation {
        let p = self.p;
        let outcome = match self.operation {
            UnaryOperation::Modulus => Outcome::Real(p.modulus()),
            UnaryOperation::Argument => p.argument().into(),
            UnaryOperation::PrincipalArgument => p.principal_argument().into(),
            UnaryOperation::Conjugate => Outcome::Value(p.conjugate()),
            UnaryOperation::Inverse => p.inverse().into(),
            UnaryOperation::Negate => Outcome::Value(negate(p)),
            UnaryOperation::Exp => Outcome::Value(exponential(p)),
            UnaryOperation::Sin => Outcome::Value(sine(p)),
            UnaryOperation::Cos => Outcome::Value(cosine(p)),
        };
        Evaluation::new(operation_name(self.operation), inputs(&[p]), outcome)
    }
}

/// 🔢 `P^N` for an integer `N`; negative exponents invert.
#[derive(Parser, Debug)]
pub struct PowerCommand {
    #[arg(allow_hyphen_values = true, value_name = "P")]
    pub p: Complex,

    #[arg(allow_negative_numbers = true, value_name = "N")]
    pub n: i32,
}

impl PowerCommand {
    pub fn run(&self) -> Evaluation {
        Evaluation::new(
            "power",
            vec![self.p.to_string(), self.n.to_string()],
            self.p.power(self.n).into(),
        )
    }
}

#[derive(Parser, Debug)]
pub struct IPowerCommand {
    #[arg(value_name = "N")]
    pub n: u64,
}

impl IPowerCommand {
    pub fn run(&self) -> Evaluation {
        Evaluation::new(
            "i-power",
            vec![self.n.to_string()],
            Outcome::Value(i_power(self.n)),
        )
    }
}

pub(crate) fn inputs(values: &[Complex]) -> Vec<String> {
    values.iter().map(Complex::to_string).collect()
}

fn operation_name<T: ValueEnum>(operation: T) -> String {
    operation
        .to_possible_value()
        .map(|value| value.get_name().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use complex_rs::complex::{ONE, ORIGIN};

    use super::*;

    #[test]
    fn divide_by_the_origin_fails() {
        let command = ArithCommand {
            operation: BinaryOperation::Divide,
            p: ONE,
            q: ORIGIN,
        };
        let evaluation = command.run();
        assert_eq!(evaluation.operation, "divide");
        assert!(evaluation.is_failure());
    }

    #[test]
    fn distance_is_real() {
        let command = ArithCommand {
            operation: BinaryOperation::Distance,
            p: ORIGIN,
            q: Complex::new(3.0, 4.0),
        };
        assert_eq!(command.run().outcome, Outcome::Real(5.0));
    }

    #[test]
    fn unary_operation_names_are_kebab_case() {
        let command = UnaryCommand {
            operation: UnaryOperation::PrincipalArgument,
            p: Complex::new(-1.0, 0.0),
        };
        let evaluation = command.run();
        assert_eq!(evaluation.operation, "principal-argument");
        assert_eq!(evaluation.outcome, Outcome::Real(std::f64::consts::PI));
    }
}
