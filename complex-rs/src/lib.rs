pub mod branch;
pub mod complex;
pub mod error;
pub mod format;
pub mod parse;
pub mod result;
