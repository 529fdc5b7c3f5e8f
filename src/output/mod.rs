//! Terminal output formatting
//!
//! Phrases go to stdout; status and error lines go to stderr so the phrases can be redirected.

pub mod display;
pub mod formatters;

pub use display::{print_error, print_status, write_phrase};
