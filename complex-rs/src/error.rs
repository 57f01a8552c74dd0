use thiserror::Error;

use crate::{branch::Branch, complex::Complex};

/// Failures raised by the arithmetic and branch engine.
///
/// Every variant is a local input error: nothing is retried and no partial
/// result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplexError {
    #[error("division by zero: the divisor is the origin")]
    DivisionByZero,

    #[error("the argument of the origin is undefined")]
    UndefinedArgument,

    #[error("unsupported branch {name:?}")]
    UnsupportedBranch { name: String },

    #[error("the point {point} lies on the cut of the branch {branch}")]
    BranchCutViolation { point: Complex, branch: Branch },

    #[error("invalid complex literal {literal:?}")]
    InvalidLiteral { literal: String },
}
