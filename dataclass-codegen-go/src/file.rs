//! GoFile abstraction for a complete generated Go source file.

use dataclass_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A generated Go file: the "Code generated" header, the package clause and a body.
///
/// # Example
///
/// ```
/// use dataclass_codegen_go::GoFile;
///
/// let file = GoFile::new("main")
///     .generated_by(["-type", "OneType"])
///     .body("type OneType interface{}\n")
///     .render();
/// assert!(file.starts_with("// Code generated by \"dataclass -type OneType\"; DO NOT EDIT.\n\npackage main\n\n"));
/// ```
#[derive(Debug, Clone)]
pub struct GoFile {
    package: String,
    args: Vec<String>,
    body: String,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            args: Vec::new(),
            body: String::new(),
        }
    }

    /// Command-line arguments recorded in the header.
    pub fn generated_by(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn header(&self) -> String {
        format!(
            "Code generated by \"dataclass {}\"; DO NOT EDIT.",
            self.args.join(" ")
        )
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::GO);
        builder.emit(self);
        let mut out = builder.build();
        out.push_str(&self.body);
        out
    }
}

/// The preamble: header comment and package clause. The body is appended verbatim.
impl Renderable for GoFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::comment(self.header()),
            CodeFragment::Blank,
            CodeFragment::line(format!("package {}", self.package)),
            CodeFragment::Blank,
        ]
    }
}
