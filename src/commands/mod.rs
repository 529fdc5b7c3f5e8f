//! Command implementations

pub mod generate;

pub use generate::{GenerateError, run_generate};
