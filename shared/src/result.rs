use super::error::ModelError;

pub type ModelResult<T> = Result<T, ModelError>;
