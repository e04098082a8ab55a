//! Interface and struct projections of a field list.
//!
//! Both specs are filled by `add` in field order and render independently;
//! the struct satisfies the interface because both see the same calls.

mod interface;
mod structure;

pub use interface::InterfaceSpec;
pub use structure::{Accessor, StructSpec};
