//! Core utilities and types for the dataclass generator.
//!
//! This crate provides the identifier case helpers and the file writer
//! shared by the other dataclass crates.

mod file;
mod utils;

// File operations
pub use file::File;
// String utilities
pub use utils::{capitalize, decapitalize, has_private_form, is_public};
