//! Field list parsing: `Name type|Name type|...`.

use std::ops::Range;

use dataclass_core::{has_private_form, is_public};
use indexmap::IndexMap;
use tracing::debug;

use crate::{
    error::{Result, SourceContext},
    syntax::{SyntaxError, comment_span, is_identifier, parse_expr},
};

/// Separator between field declarations.
pub const FIELD_SEPARATOR: char = '|';

/// One validated `Name type` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    name: String,
    type_expr: String,
}

impl FieldDeclaration {
    /// Public field name, e.g. `FirstName`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type expression exactly as written.
    pub fn type_expr(&self) -> &str {
        &self.type_expr
    }
}

/// Field declarations in input order. Never empty, names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList {
    fields: IndexMap<String, FieldDeclaration>,
}

impl FieldList {
    pub fn iter(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields.get(name)
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a FieldDeclaration;
    type IntoIter = indexmap::map::Values<'a, String, FieldDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}

/// Splits and validates a raw field list.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldParser {
    debug: bool,
}

impl FieldParser {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Parse `raw` into an ordered field list.
    ///
    /// Fails on the first invalid segment; nothing is returned for the
    /// segments before it.
    ///
    /// ```
    /// use dataclass_schema::FieldParser;
    ///
    /// let fields = FieldParser::default().parse("First *http.Request|Second string").unwrap();
    /// let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
    /// assert_eq!(names, ["First", "Second"]);
    /// ```
    pub fn parse(&self, raw: &str) -> Result<FieldList> {
        let ctx = SourceContext::new(raw);
        if raw.trim().is_empty() {
            return Err(ctx.empty_field_list());
        }

        let mut fields = IndexMap::new();
        let mut name_spans: Vec<Range<usize>> = Vec::new();
        let mut start = 0;

        for segment in raw.split(FIELD_SEPARATOR) {
            let segment_span = start..start + segment.len();
            let segment_start = start;
            start = segment_span.end + FIELD_SEPARATOR.len_utf8();

            if self.debug {
                debug!(segment, "parsing field");
            }

            let Some((name, type_expr)) = segment.split_once(' ') else {
                return Err(ctx.malformed_field(segment, segment_span));
            };
            let name_span = segment_start..segment_start + name.len();

            if let Some(reason) = invalid_name_reason(name) {
                return Err(ctx.invalid_field_name(name, reason, name_span));
            }

            let type_start = name_span.end + 1;
            parse_expr(type_expr)
                .map_err(|err| ctx.invalid_type_syntax(segment, type_start, err))?;
            // Types are spliced into single lines of output.
            if let Some(span) = comment_span(type_expr) {
                let err = SyntaxError::new(span, "comments are not allowed in a field type");
                return Err(ctx.invalid_type_syntax(segment, type_start, err));
            }

            if let Some(index) = fields.get_index_of(name) {
                return Err(ctx.duplicate_field_name(
                    name,
                    name_spans[index].clone(),
                    name_span,
                ));
            }

            if self.debug {
                debug!(name, type_expr, "accepted field");
            }
            name_spans.push(name_span);
            fields.insert(
                name.to_string(),
                FieldDeclaration {
                    name: name.to_string(),
                    type_expr: type_expr.to_string(),
                },
            );
        }

        Ok(FieldList { fields })
    }
}

fn invalid_name_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("field name is empty")
    } else if name.chars().any(char::is_whitespace) {
        Some("field name contains whitespace")
    } else if !is_public(name) {
        Some("field name must start with an upper-case letter")
    } else if !is_identifier(name) {
        Some("field name is not a Go identifier")
    } else if !has_private_form(name) {
        Some("field name has no single-character lower-case form")
    } else {
        None
    }
}
