//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Buffer for building code with proper indentation.
///
/// # Example
///
/// ```
/// use dataclass_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("func main() {")
///     .push_indent()
///     .push_line("println(\"hello\")")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "func main() {\n\tprintln(\"hello\")\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation (Go default).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` line comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::go();
        builder.push_line("x := 1");
        assert_eq!(builder.build(), "x := 1\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::go();
        builder
            .push_line("type t struct {")
            .push_indent()
            .push_line("v int")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "type t struct {\n\tv int\n}\n");
    }

    #[test]
    fn test_space_indentation() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder
            .push_line("type T interface {")
            .push_indent()
            .push_line("V() int")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "type T interface {\n  V() int\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::go();
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_blank_and_comment() {
        let mut builder = CodeBuilder::go();
        builder
            .push_comment("Code generated; DO NOT EDIT.")
            .push_blank()
            .push_line("package main");

        assert_eq!(
            builder.build(),
            "// Code generated; DO NOT EDIT.\n\npackage main\n"
        );
    }

    #[test]
    fn test_emit_comment_and_blank_fragments() {
        struct Header;
        impl Renderable for Header {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("generated"),
                    CodeFragment::Blank,
                    CodeFragment::line("package p"),
                ]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&Header);
        assert_eq!(builder.build(), "// generated\n\npackage p\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "func f() {",
                    vec![CodeFragment::line("return")],
                    Some("}".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "func f() {\n\treturn\n}\n");
    }

    #[test]
    fn test_emit_nested_indent() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::line("a"),
                    CodeFragment::Indent(vec![CodeFragment::block(
                        "b {",
                        vec![CodeFragment::line("c"), CodeFragment::line("d")],
                        Some("}".to_string()),
                    )]),
                    CodeFragment::line("e"),
                ]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&Nested);
        assert_eq!(builder.build(), "a\n\tb {\n\t\tc\n\t\td\n\t}\ne\n");
    }
}
