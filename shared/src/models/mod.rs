pub mod function;
pub mod region;
