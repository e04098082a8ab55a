use dataclass_codegen::{CodeBuilder, Indent};

use crate::ast::{Interface, Method};

/// The read-only accessor interface: one `Name() Type` method per field.
#[derive(Debug, Clone)]
pub struct InterfaceSpec {
    name: String,
    methods: Vec<Method>,
    indent: Indent,
}

impl InterfaceSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            indent: Indent::GO,
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Append the accessor for `field_name`. The name is expected to be public already.
    pub fn add(&mut self, field_name: &str, type_expr: &str) {
        self.methods.push(Method::new(field_name, type_expr));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn to_ast(&self) -> Interface {
        self.methods
            .iter()
            .cloned()
            .fold(Interface::new(&self.name), Interface::method)
    }

    pub fn generate(&self) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        builder.emit(&self.to_ast());
        builder.build()
    }
}
