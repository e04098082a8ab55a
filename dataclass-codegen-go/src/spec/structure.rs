use dataclass_codegen::{CodeBuilder, Indent};
use dataclass_core::capitalize;

use crate::{
    GO_NAMING,
    ast::{Field, Func, Param, Receiver, Struct, StructLit},
};

const RECEIVER: &str = "s";

/// A generated accessor method: `PublicName()` returning `private_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub public_name: String,
    pub private_name: String,
    pub returns: String,
}

/// The private backing struct, its accessors, and the constructor.
#[derive(Debug, Clone)]
pub struct StructSpec {
    name: String,
    fields: Vec<Field>,
    accessors: Vec<Accessor>,
    indent: Indent,
}

impl StructSpec {
    /// Spec for the struct backing `interface_name`; the struct is its private form.
    pub fn new(interface_name: &str) -> Self {
        Self {
            name: GO_NAMING.private_name(interface_name),
            fields: Vec::new(),
            accessors: Vec::new(),
            indent: Indent::GO,
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn add(&mut self, field_name: &str, type_expr: &str) {
        let private_name = GO_NAMING.private_name(field_name);
        self.fields.push(Field::new(&private_name, type_expr));
        self.accessors.push(Accessor {
            public_name: capitalize(field_name),
            private_name,
            returns: type_expr.to_string(),
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }

    pub fn struct_ast(&self) -> Struct {
        self.fields
            .iter()
            .cloned()
            .fold(Struct::new(&self.name), Struct::field)
    }

    pub fn accessor_asts(&self) -> impl Iterator<Item = Func> + '_ {
        self.accessors.iter().map(|a| {
            Func::new(&a.public_name)
                .receiver(Receiver::pointer(RECEIVER, &self.name))
                .returns(&a.returns)
                .body_line(format!("return {}.{}", RECEIVER, a.private_name))
                .inline()
        })
    }

    /// `func New<I>(...) <I>` returning the struct as the interface.
    pub fn constructor_ast(&self, interface_name: &str) -> Func {
        let lit = self
            .fields
            .iter()
            .fold(StructLit::new(&self.name).address_of(), |lit, f| {
                lit.field(&f.name, &f.name)
            });

        self.fields
            .iter()
            .fold(Func::new(format!("New{}", interface_name)), |func, f| {
                func.param(Param::new(&f.name, &f.ty))
            })
            .returns(interface_name)
            .body_fragments(lit.to_fragments_after("return "))
            .params_per_line()
    }

    pub fn generate(&self, interface_name: &str) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        builder.emit(&self.struct_ast());
        for accessor in self.accessor_asts() {
            builder.emit(&accessor);
        }
        builder.emit(&self.constructor_ast(interface_name));
        builder.build()
    }
}
