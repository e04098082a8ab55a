//! Go struct builder.

use dataclass_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Go struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Go struct declarations.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("type {} struct{{}}", self.name))];
        }

        let body = self
            .fields
            .iter()
            .map(|f| CodeFragment::line(format!("{} {}", f.name, f.ty)))
            .collect();

        vec![CodeFragment::block(
            format!("type {} struct {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
