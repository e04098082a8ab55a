//! Go-specific naming conventions.

use dataclass_codegen::NamingConvention;
use dataclass_core::decapitalize;

fn escape_go_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    public_to_private: decapitalize,
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_go_reserved,
};
