//! Naming conventions for a target language.

/// Language-specific naming conventions.
///
/// Defines how a public source name maps to a private identifier, and how
/// reserved words are kept out of the generated code.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a public name into its private form (e.g., "OneField" -> "oneField")
    pub public_to_private: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "type_" in Go)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a public name and make it safe for use as a private identifier.
    pub fn private_name(&self, name: &str) -> String {
        let transformed = (self.public_to_private)(name);
        self.safe_name(&transformed)
    }
}
