use dataclass_codegen::{CodeFragment, Renderable};

/// A keyed struct literal, optionally address-taken: `&t{a: a}`.
#[derive(Debug, Clone)]
pub struct StructLit {
    ty: String,
    address_of: bool,
    fields: Vec<(String, String)>,
}

impl StructLit {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            address_of: false,
            fields: Vec::new(),
        }
    }

    pub fn address_of(mut self) -> Self {
        self.address_of = true;
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Render after `prefix` on the opening line, e.g. `return `.
    pub fn to_fragments_after(&self, prefix: &str) -> Vec<CodeFragment> {
        let amp = if self.address_of { "&" } else { "" };
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("{}{}{}{{}}", prefix, amp, self.ty))];
        }

        let body = self
            .fields
            .iter()
            .map(|(key, value)| CodeFragment::line(format!("{}: {},", key, value)))
            .collect();

        vec![CodeFragment::block(
            format!("{}{}{}{{", prefix, amp, self.ty),
            body,
            Some("}".to_string()),
        )]
    }
}

impl Renderable for StructLit {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_fragments_after("")
    }
}
