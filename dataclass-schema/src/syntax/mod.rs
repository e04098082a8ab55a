//! Go expression syntax checking.
//!
//! A field's type is accepted when it parses as a single Go expression,
//! which covers every type form (`[]T`, `map[K]V`, `<-chan T`, `func(...)`,
//! qualified and generic names). Nothing is resolved or type-checked.

mod ast;
mod lexer;
mod parser;

use std::ops::Range;

pub use ast::{
    BinaryOp, ChanDir, Expr, Field, FuncType, InterfaceElem, LitKind, UnaryOp,
};
pub use lexer::{Spanned, Token, comment_span, is_identifier, package_name, tokenize};
pub use parser::{MAX_NESTING_DEPTH, parse_expr};
use thiserror::Error;

/// A syntax error with the byte range of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .span.start, .message)]
pub struct SyntaxError {
    span: Range<usize>,
    message: String,
}

impl SyntaxError {
    pub fn new(span: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Byte offset of the error in the parsed text.
    pub fn offset(&self) -> usize {
        self.span.start
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
