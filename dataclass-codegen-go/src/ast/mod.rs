//! Go AST builders for the declarations the generator emits.
//!
//! Each node describes itself as code fragments, which are rendered via
//! CodeBuilder with the configured indentation.

mod funcs;
mod interfaces;
mod literals;
mod structs;

pub use funcs::{Func, Param, Receiver};
pub use interfaces::{Interface, Method};
pub use literals::StructLit;
pub use structs::{Field, Struct};
