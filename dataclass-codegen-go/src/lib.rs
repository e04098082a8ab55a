mod file;
mod generator;
mod naming;
mod spec;

pub mod ast;

pub use ast::{Field, Func, Interface, Method, Param, Receiver, Struct, StructLit};
pub use file::GoFile;
pub use generator::{Generator, GeneratorConfig};
pub use naming::GO_NAMING;
pub use spec::{Accessor, InterfaceSpec, StructSpec};
