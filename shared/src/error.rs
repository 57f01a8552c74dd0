use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("found {count} '/' in {function:?}, only 0 or 1 are supported")]
    TooManyDenominators { function: String, count: usize },

    #[error("empty term in {function:?}")]
    EmptyTerm { function: String },

    #[error("invalid exponent {exponent:?} in the term {term:?}")]
    InvalidExponent { term: String, exponent: String },

    #[error("invalid radius {radius}: it must be finite and non-negative")]
    InvalidRadius { radius: f64 },

    #[error("a triangle needs {expected} points but {actual} were given")]
    WrongPointCount { expected: usize, actual: usize },

    #[error("the triangle has coincident vertices")]
    DegenerateTriangle,

    #[error("unsupported curve {name:?}")]
    UnsupportedCurve { name: String },
}
