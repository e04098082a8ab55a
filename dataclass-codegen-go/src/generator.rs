use dataclass_codegen::Indent;
use dataclass_schema::{FieldList, FieldParser, Result, TypeName};
use tracing::debug;

use crate::spec::{InterfaceSpec, StructSpec};

/// Generation settings passed in at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Log each parsing and emission step at debug level.
    pub debug: bool,
    /// Indentation of the emitted code.
    pub indent: Indent,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            debug: false,
            indent: Indent::GO,
        }
    }
}

impl GeneratorConfig {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

/// Go dataclass generator: an interface, its private struct, accessors and constructor.
///
/// # Example
///
/// ```
/// use dataclass_codegen_go::{Generator, GeneratorConfig};
/// use dataclass_schema::TypeName;
///
/// let name = TypeName::parse("OneType").unwrap();
/// let code = Generator::new(name, GeneratorConfig::default())
///     .generate("OneField int")
///     .unwrap();
/// assert!(code.starts_with("type OneType interface {\n\tOneField() int\n}\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    type_name: TypeName,
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(type_name: TypeName, config: GeneratorConfig) -> Self {
        Self { type_name, config }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn parse_fields(&self, raw: &str) -> Result<FieldList> {
        FieldParser::new(self.config.debug).parse(raw)
    }

    /// Parse `raw_fields` and emit the declarations.
    pub fn generate(&self, raw_fields: &str) -> Result<String> {
        let fields = self.parse_fields(raw_fields)?;
        Ok(self.emit(&fields))
    }

    /// Emit the interface followed by the struct, its accessors and the constructor.
    pub fn emit(&self, fields: &FieldList) -> String {
        let name = self.type_name.as_str();
        let mut interface = InterfaceSpec::new(name).with_indent(self.config.indent);
        let mut structure = StructSpec::new(name).with_indent(self.config.indent);

        for field in fields {
            if self.config.debug {
                debug!(
                    name = field.name(),
                    type_expr = field.type_expr(),
                    "adding field"
                );
            }
            interface.add(field.name(), field.type_expr());
            structure.add(field.name(), field.type_expr());
        }

        if self.config.debug {
            debug!(
                interface = name,
                structure = structure.name(),
                fields = fields.len(),
                "emitting declarations"
            );
        }

        let mut out = interface.generate();
        out.push_str(&structure.generate(name));
        out
    }
}
