// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod fields;
pub mod syntax;
mod type_name;

pub use error::{Error, FIELD_SOURCE_NAME, Result, SourceContext};
pub use fields::{FIELD_SEPARATOR, FieldDeclaration, FieldList, FieldParser};
pub use type_name::TypeName;
