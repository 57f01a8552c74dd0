use clap::Parser;
use shared::{
    dtos::evaluation::{Evaluation, Outcome},
    models::function::SimplifiedFunction,
};

/// ✂️ Simplify a rational function of one variable.
///
/// Terms are separated by `+`/`-`, factors by `*`, at most one `/` splits
/// numerator from denominator, function arguments go in braces: `sin{z}`.
#[derive(Parser, Debug)]
pub struct SimplifyCommand {
    #[arg(allow_hyphen_values = true, value_name = "FUNCTION")]
    pub function: String,

    #[arg(short, long, default_value_t = 'z')]
    pub variable: char,
}

impl SimplifyCommand {
    pub fn run(&self) -> Vec<Evaluation> {
        let arguments = vec![self.function.clone()];
        match SimplifiedFunction::parse(&self.function, self.variable) {
            Ok(function) => vec![
                Evaluation::new(
                    "simplify",
                    arguments.clone(),
                    Outcome::Text(function.to_string()),
                ),
                Evaluation::new(
                    "approaches-zero",
                    arguments,
                    Outcome::Flag(function.approaches_zero()),
                ),
            ],
            Err(e) => vec![Evaluation::new(
                "simplify",
                arguments,
                Outcome::Failure(e.to_string()),
            )],
        }
    }
}
