use std::ops::Range;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::syntax::SyntaxError;

/// Result type for dataclass-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Name under which the raw field list is shown in diagnostics.
pub const FIELD_SOURCE_NAME: &str = "--field";

/// Source context for error reporting.
///
/// Holds the raw field list so every error factory can attach it as the
/// diagnostic's source code.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new("A int|A string");
/// ctx.duplicate_field_name("A", 0..1, 6..7);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(FIELD_SOURCE_NAME, self.src.clone())
    }

    pub fn empty_field_list(&self) -> Box<Error> {
        Box::new(Error::EmptyFieldList {
            src: self.named_source(),
        })
    }

    pub fn malformed_field(&self, segment: &str, span: Range<usize>) -> Box<Error> {
        Box::new(Error::MalformedField {
            src: self.named_source(),
            span: span.into(),
            segment: segment.to_string(),
        })
    }

    pub fn invalid_field_name(
        &self,
        name: &str,
        reason: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::InvalidFieldName {
            src: self.named_source(),
            span: span.into(),
            name: name.to_string(),
            reason: reason.into(),
        })
    }

    /// `type_start` is the offset of the type expression in the raw field list;
    /// the syntax error's own span is relative to the type expression.
    pub fn invalid_type_syntax(
        &self,
        segment: &str,
        type_start: usize,
        source: SyntaxError,
    ) -> Box<Error> {
        let span = source.span();
        let start = type_start + span.start;
        let end = (type_start + span.end).min(self.src.len());
        Box::new(Error::InvalidTypeSyntax {
            src: self.named_source(),
            span: (start..end.max(start)).into(),
            segment: segment.to_string(),
            reason: source.message().to_string(),
            source,
        })
    }

    pub fn duplicate_field_name(
        &self,
        name: &str,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateFieldName {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no fields found")]
    #[diagnostic(
        code(dataclass::empty_field_list),
        help("pass at least one field, e.g. --field \"Name string\"")
    )]
    EmptyFieldList {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("invalid field '{segment}'")]
    #[diagnostic(
        code(dataclass::malformed_field),
        help("a field is a name and a type separated by a space, fields are separated by '|'")
    )]
    MalformedField {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `Name type`")]
        span: SourceSpan,
        segment: String,
    },

    #[error("invalid field name '{name}'")]
    #[diagnostic(
        code(dataclass::invalid_field_name),
        help("{reason}. Field names must be public Go identifiers, e.g. 'Name'")
    )]
    InvalidFieldName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid field name")]
        span: SourceSpan,
        name: String,
        reason: String,
    },

    #[error("failed to parse field {segment}: {source}")]
    #[diagnostic(code(dataclass::invalid_type_syntax))]
    InvalidTypeSyntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        segment: String,
        reason: String,
        #[source]
        source: SyntaxError,
    },

    #[error("duplicated name '{name}'")]
    #[diagnostic(
        code(dataclass::duplicate_field_name),
        help("each field name may appear only once")
    )]
    DuplicateFieldName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("{reason}")]
    #[diagnostic(
        code(dataclass::invalid_type_name),
        help("the type name must be an exported Go identifier, e.g. 'Person'")
    )]
    InvalidTypeName { name: String, reason: String },
}

impl Error {
    /// Create an invalid type name error
    pub fn invalid_type_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidTypeName {
            name: name.into(),
            reason: reason.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_syntax_span_is_shifted_to_field_list() {
        let ctx = SourceContext::new("A notatype<<<");
        let err = ctx.invalid_type_syntax(
            "A notatype<<<",
            2,
            SyntaxError::new(10..11, "expected operand, found `<`"),
        );
        let Error::InvalidTypeSyntax { span, .. } = *err else {
            panic!("expected InvalidTypeSyntax");
        };
        assert_eq!(span.offset(), 12);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_type_syntax_message() {
        let ctx = SourceContext::new("A int]");
        let err = ctx.invalid_type_syntax(
            "A int]",
            2,
            SyntaxError::new(3..4, "expected end of expression, found `]`"),
        );
        assert_eq!(
            err.to_string(),
            "failed to parse field A int]: 3: expected end of expression, found `]`"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let ctx = SourceContext::new("");
        let err = ctx.empty_field_list();
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("dataclass::empty_field_list")
        );

        let err = Error::invalid_type_name("", "type must be set");
        assert_eq!(err.to_string(), "type must be set");
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("dataclass::invalid_type_name")
        );
    }
}
