//! I Need Ideas
//!
//! Generates random short phrases ("ideas") by sampling words from a word list.
//!
//! # Quick Start
//!
//! ```rust
//! use ineedideas::core::GenerateConfig;
//! use ineedideas::generator::Generator;
//! use ineedideas::wordlists::loader::store_from_slice;
//!
//! let store = store_from_slice(&["brave", "little", "toaster"]);
//! let config = GenerateConfig::new(2, 4, 1).unwrap();
//! let mut generator = Generator::from_seed(7);
//!
//! let phrase = generator.phrase(&store, &config).unwrap();
//! assert!((2..=4).contains(&phrase.len()));
//! println!("{phrase}");
//! ```

// Core domain types
pub mod core;

// Phrase generation
pub mod generator;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
