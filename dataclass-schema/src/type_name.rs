use std::fmt;

use dataclass_core::is_public;

use crate::{
    error::{Error, Result},
    syntax::is_identifier,
};

/// Name of the generated interface: a non-empty, exported Go identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(String);

impl TypeName {
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::invalid_type_name(name, "type must be set"));
        }
        if !is_identifier(name) || !is_public(name) {
            return Err(Error::invalid_type_name(
                name,
                format!("type must be public: {}", name),
            ));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["OneType", "T", "HTTPClient", "Élan"] {
            assert_eq!(TypeName::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_empty_name() {
        let err = TypeName::parse("").unwrap_err();
        assert_eq!(err.to_string(), "type must be set");
    }

    #[test]
    fn test_private_name() {
        let err = TypeName::parse("oneType").unwrap_err();
        assert_eq!(err.to_string(), "type must be public: oneType");
    }

    #[test]
    fn test_not_an_identifier() {
        for name in ["One Type", "pkg.Type", "Type[T]", " OneType"] {
            assert!(
                matches!(*TypeName::parse(name).unwrap_err(), Error::InvalidTypeName { .. }),
                "{:?}",
                name
            );
        }
    }
}
