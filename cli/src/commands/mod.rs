use clap::Subcommand;
use shared::{config::Config, dtos::evaluation::Evaluation};

use self::{
    arithmetic::{ArithCommand, IPowerCommand, PowerCommand, UnaryCommand},
    branch::{LogCommand, PowCommand},
    curve::CurveCommand,
    simplify::SimplifyCommand,
    verify::VerifyCommand,
};

pub mod arithmetic;
pub mod branch;
pub mod curve;
pub mod simplify;
pub mod verify;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// ➕ Binary arithmetic
    ///
    /// Add, subtract, multiply or divide two complex numbers, or measure
    /// the distance between them.
    Arith(ArithCommand),

    /// 🔁 Unary functions
    ///
    /// Modulus, arguments, conjugate, inverse, negation, exponential, sine
    /// and cosine of one complex number.
    Unary(UnaryCommand),

    /// 🔢 Integer power
    ///
    /// Raise a complex number to an integer power through its polar form.
    Power(PowerCommand),

    /// 🪵 Logarithm
    ///
    /// Logarithm on the branch that cuts the positive or negative real axis.
    Log(LogCommand),

    /// 🚀 Complex power
    ///
    /// Compute p^q = e^(q log p) on a branch of the logarithm.
    Pow(PowCommand),

    /// 🔄 Powers of i
    IPower(IPowerCommand),

    /// 📐 Curve length
    ///
    /// Perimeter of a circle, semicircle, square, rectangle or triangle.
    Curve(CurveCommand),

    /// ✂️ Simplify a rational function
    ///
    /// Reduce every term to `coefficient * z^degree` and check whether the
    /// integral over a growing curve vanishes.
    Simplify(SimplifyCommand),

    /// ✅ Verify identities
    ///
    /// Check the arithmetic identities on randomly sampled points.
    Verify(VerifyCommand),
}

impl Commands {
    pub fn run(&self, config: &Config) -> Vec<Evaluation> {
        match self {
            Commands::Arith(command) => vec![command.run()],
            Commands::Unary(command) => vec![command.run()],
            Commands::Power(command) => vec![command.run()],
            Commands::Log(command) => vec![command.run()],
            Commands::Pow(command) => vec![command.run()],
            Commands::IPower(command) => vec![command.run()],
            Commands::Curve(command) => command.run(),
            Commands::Simplify(command) => command.run(),
            Commands::Verify(command) => command.run(config),
        }
    }
}
