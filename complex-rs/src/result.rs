use super::error::ComplexError;

pub type ComplexResult<T> = Result<T, ComplexError>;
