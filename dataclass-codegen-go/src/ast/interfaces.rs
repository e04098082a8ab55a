//! Go interface builder.

use dataclass_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A method without parameters, e.g. `Name() string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub returns: String,
}

impl Method {
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: returns.into(),
        }
    }
}

/// Builder for Go interface declarations.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    methods: Vec<Method>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.methods.is_empty() {
            return vec![CodeFragment::line(format!(
                "type {} interface{{}}",
                self.name
            ))];
        }

        let body = self
            .methods
            .iter()
            .map(|m| CodeFragment::line(format!("{}() {}", m.name, m.returns)))
            .collect();

        vec![CodeFragment::block(
            format!("type {} interface {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        assert_eq!(Interface::new("Empty").build(), "type Empty interface{}\n");
    }

    #[test]
    fn test_interface_with_methods() {
        let s = Interface::new("TwoType")
            .method(Method::new("First", "*http.Request"))
            .method(Method::new("Second", "string"))
            .build();
        assert_eq!(
            s,
            "type TwoType interface {\n\tFirst() *http.Request\n\tSecond() string\n}\n"
        );
    }
}
