//! Go function builder.

use dataclass_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Go function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A method receiver, e.g. `(s *oneType)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    pub name: String,
    pub ty: String,
}

impl Receiver {
    /// Pointer receiver `(name *ty)`.
    pub fn pointer(name: impl Into<String>, ty: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            ty: format!("*{}", ty.as_ref()),
        }
    }
}

/// Builder for Go functions and methods.
///
/// A function with [`inline`](Func::inline) set and a single body line renders
/// on one line: `func (s *t) Name() T { return s.name }`.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    receiver: Option<Receiver>,
    params: Vec<Param>,
    returns: Option<String>,
    body: Vec<CodeFragment>,
    inline: bool,
    params_per_line: bool,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
            inline: false,
            params_per_line: false,
        }
    }

    pub fn receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add pre-built fragments to the function body.
    pub fn body_fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Render a single-line body on the signature line.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Put each parameter on its own line, each followed by a comma.
    pub fn params_per_line(mut self) -> Self {
        self.params_per_line = true;
        self
    }

    /// `func (r T) Name` or `func Name`.
    fn head(&self) -> String {
        match &self.receiver {
            Some(r) => format!("func ({} {}) {}", r.name, r.ty, self.name),
            None => format!("func {}", self.name),
        }
    }

    fn tail(&self) -> String {
        match &self.returns {
            Some(ret) => format!(") {} {{", ret),
            None => ") {".to_string(),
        }
    }

    fn params_str(&self) -> String {
        self.params
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.inline
            && !self.params_per_line
            && let [CodeFragment::Line(line)] = self.body.as_slice()
        {
            return vec![CodeFragment::line(format!(
                "{}({}{} {} }}",
                self.head(),
                self.params_str(),
                self.tail(),
                line
            ))];
        }

        let close = Some("}".to_string());
        if self.params_per_line && !self.params.is_empty() {
            let params = self
                .params
                .iter()
                .map(|p| CodeFragment::line(format!("{} {},", p.name, p.ty)))
                .collect();
            return vec![
                CodeFragment::line(format!("{}(", self.head())),
                CodeFragment::Indent(params),
                CodeFragment::block(self.tail(), self.body.clone(), close),
            ];
        }

        vec![CodeFragment::block(
            format!("{}({}{}", self.head(), self.params_str(), self.tail()),
            self.body.clone(),
            close,
        )]
    }
}
