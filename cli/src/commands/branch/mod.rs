use clap::Parser;
use complex_rs::{
    branch::{general_power, log, Branch},
    complex::Complex,
};
use shared::dtos::evaluation::Evaluation;

use super::arithmetic::inputs;

/// 🪵 `log P` on a branch.
#[derive(Parser, Debug)]
pub struct LogCommand {
    #[arg(allow_hyphen_values = true, value_name = "P")]
    pub p: Complex,

    /// 🌿 Branch of the logarithm
    ///
    /// `positive` cuts [0, ∞), `negative` cuts (-∞, 0]. The identifiers
    /// `C\[0, infinity)` and `C\(-infinity, 0]` are accepted too.
    #[arg(short, long, default_value = "positive")]
    pub branch: Branch,
}

impl LogCommand {
    pub fn run(&self) -> Evaluation {
        let mut arguments = inputs(&[self.p]);
        arguments.push(self.branch.to_string());
        Evaluation::new("log", arguments, log(self.p, self.branch).into())
    }
}

/// 🚀 `P^Q = e^(Q log P)` on a branch.
#[derive(Parser, Debug)]
pub struct PowCommand {
    #[arg(allow_hyphen_values = true, value_name = "P")]
    pub p: Complex,

    #[arg(allow_hyphen_values = true, value_name = "Q")]
    pub q: Complex,

    #[arg(short, long, default_value = "positive")]
    pub branch: Branch,
}

impl PowCommand {
    pub fn run(&self) -> Evaluation {
        let mut arguments = inputs(&[self.p, self.q]);
        arguments.push(self.branch.to_string());
        Evaluation::new(
            "pow",
            arguments,
            general_power(self.p, self.q, self.branch).into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use complex_rs::complex::ONE;

    use super::*;

    #[test]
    fn log_on_the_cut_fails() {
        let command = LogCommand {
            p: ONE,
            branch: Branch::Positive,
        };
        assert!(command.run().is_failure());
    }

    #[test]
    fn pow_off_the_cut() {
        let command = PowCommand {
            p: Complex::new(-1.0, 0.0),
            q: Complex::new(2.0, 0.0),
            branch: Branch::Positive,
        };
        let evaluation = command.run();
        assert!(!evaluation.is_failure());
        assert_eq!(evaluation.inputs.len(), 3);
    }
}
