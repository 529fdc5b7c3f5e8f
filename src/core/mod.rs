//! Core domain types for idea generation
//!
//! This module contains the word store and the option types. Nothing here touches
//! stdout, stderr or the process exit code.

pub mod options;
mod store;

pub use options::{GenerateConfig, Options, OptionsError};
pub use store::{WordStore, WordStoreError};
