//! Recursive-descent parser for Go expressions.

use std::ops::Range;

use super::{
    SyntaxError,
    ast::{BinaryOp, ChanDir, Expr, Field, FuncType, InterfaceElem, LitKind, UnaryOp},
    lexer::{Spanned, Token, tokenize},
};

type ParseResult<T> = Result<T, SyntaxError>;

/// Deepest nesting of types and sub-expressions accepted before parsing
/// stops with an error instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Parse `source` as exactly one Go expression.
///
/// ```
/// use dataclass_schema::syntax::{Expr, parse_expr};
///
/// assert!(matches!(parse_expr("map[string][]int"), Ok(Expr::Map { .. })));
/// assert!(parse_expr("notatype<<<").is_err());
/// ```
pub fn parse_expr(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut parser = Parser::new(&tokens, source.len());
    let expr = parser.parse_expr()?;
    parser.expect_end()?;
    Ok(expr)
}

/// Whether a type can start with this token.
fn starts_type(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::Ident(_)
            | Token::Star
            | Token::LBracket
            | Token::LParen
            | Token::Map
            | Token::Chan
            | Token::Arrow
            | Token::Func
            | Token::Struct
            | Token::Interface
    )
}

struct Parser<'t, 'src> {
    tokens: &'t [Spanned<'src>],
    pos: usize,
    source_len: usize,
    depth: usize,
    too_deep: bool,
}

impl<'t, 'src> Parser<'t, 'src> {
    fn new(tokens: &'t [Spanned<'src>], source_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            source_len,
            depth: 0,
            too_deep: false,
        }
    }

    /// Run `parse` one nesting level deeper.
    fn nested<T>(&mut self, parse: fn(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.too_deep = true;
            return self.error("exceeded max nesting depth");
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Restore `checkpoint` after a failed speculative parse. Running out of
    /// depth is never retried.
    fn backtrack(&mut self, checkpoint: usize, err: SyntaxError) -> ParseResult<()> {
        if self.too_deep {
            return Err(err);
        }
        self.pos = checkpoint;
        Ok(())
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_binary(1)
    }

    fn parse_binary(&mut self, min_prec: u8) -> ParseResult<Expr> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = self.peek_binary_op() {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.pos += 1;
            let rhs = self.parse_binary(prec + 1)?;
            lhs = Expr::Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn peek_binary_op(&self) -> Option<BinaryOp> {
        let op = match self.peek()? {
            Token::OrOr => BinaryOp::LogicalOr,
            Token::AndAnd => BinaryOp::LogicalAnd,
            Token::EqEq => BinaryOp::Eq,
            Token::NotEq => BinaryOp::NotEq,
            Token::Lt => BinaryOp::Lt,
            Token::LtEq => BinaryOp::LtEq,
            Token::Gt => BinaryOp::Gt,
            Token::GtEq => BinaryOp::GtEq,
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Sub,
            Token::Pipe => BinaryOp::Or,
            Token::Caret => BinaryOp::Xor,
            Token::Star => BinaryOp::Mul,
            Token::Slash => BinaryOp::Div,
            Token::Percent => BinaryOp::Rem,
            Token::Shl => BinaryOp::Shl,
            Token::Shr => BinaryOp::Shr,
            Token::Amp => BinaryOp::And,
            Token::AndNot => BinaryOp::AndNot,
            _ => return None,
        };
        Some(op)
    }

    fn parse_unary(&mut self) -> ParseResult<Expr> {
        self.nested(Self::parse_unary_expr)
    }

    fn parse_unary_expr(&mut self) -> ParseResult<Expr> {
        let op = match self.peek() {
            Some(Token::Plus) => UnaryOp::Plus,
            Some(Token::Minus) => UnaryOp::Neg,
            Some(Token::Not) => UnaryOp::Not,
            Some(Token::Caret) => UnaryOp::Xor,
            Some(Token::Amp) => UnaryOp::Addr,
            Some(Token::Tilde) => UnaryOp::Tilde,
            Some(Token::Star) => {
                self.pos += 1;
                return Ok(Expr::Star(Box::new(self.parse_unary()?)));
            }
            Some(Token::Arrow) => {
                if matches!(self.peek_ahead(1), Some(Token::Chan)) {
                    return self.parse_recv_chan_type();
                }
                UnaryOp::Recv
            }
            _ => return self.parse_primary(),
        };
        self.pos += 1;
        Ok(Expr::Unary {
            op,
            expr: Box::new(self.parse_unary()?),
        })
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_operand()?;
        loop {
            expr = match self.peek() {
                Some(Token::Dot) => self.parse_selector_or_assert(expr)?,
                Some(Token::LBracket) => self.parse_index_or_slice(expr)?,
                Some(Token::LParen) => self.parse_call(expr)?,
                Some(Token::LBrace) if expr.is_literal_type() => {
                    let elts = self.parse_literal_value()?;
                    Expr::CompositeLit {
                        ty: Some(Box::new(expr)),
                        elts,
                    }
                }
                _ => return Ok(expr),
            };
        }
    }

    fn parse_operand(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.peek() else {
            return self.expected("operand");
        };
        let (kind, value) = match token {
            Token::Ident(name) => {
                self.pos += 1;
                return Ok(Expr::Ident(name.to_string()));
            }
            Token::Int(v) => (LitKind::Int, v),
            Token::Float(v) => (LitKind::Float, v),
            Token::Imag(v) => (LitKind::Imag, v),
            Token::Char(v) => (LitKind::Char, v),
            Token::String(v) => (LitKind::String, v),
            Token::LParen => {
                self.pos += 1;
                let inner = self.parse_expr()?;
                self.expect(&Token::RParen)?;
                return Ok(Expr::Paren(Box::new(inner)));
            }
            Token::LBracket => return self.parse_array_type(),
            Token::Map => return self.parse_map_type(),
            Token::Chan => return self.parse_chan_type(),
            Token::Struct => return self.parse_struct_type(),
            Token::Interface => return self.parse_interface_type(),
            Token::Func => return self.parse_func_type_or_lit(),
            Token::Keyword(keyword) => {
                return self.error(format!("unexpected keyword `{}`", keyword));
            }
            _ => return self.expected("operand"),
        };
        self.pos += 1;
        Ok(Expr::BasicLit(kind, value.to_string()))
    }

    fn parse_selector_or_assert(&mut self, expr: Expr) -> ParseResult<Expr> {
        self.expect(&Token::Dot)?;
        match self.peek() {
            Some(Token::Ident(sel)) => {
                self.pos += 1;
                Ok(Expr::Selector {
                    expr: Box::new(expr),
                    sel: sel.to_string(),
                })
            }
            Some(Token::LParen) => {
                self.pos += 1;
                let ty = self.parse_type()?;
                self.expect(&Token::RParen)?;
                Ok(Expr::TypeAssert {
                    expr: Box::new(expr),
                    ty: Box::new(ty),
                })
            }
            _ => self.expected("selector or type assertion"),
        }
    }

    fn parse_index_or_slice(&mut self, expr: Expr) -> ParseResult<Expr> {
        self.expect(&Token::LBracket)?;
        if self.at(&Token::Colon) {
            return self.parse_slice_tail(expr, None);
        }
        let first = self.parse_expr()?;
        if self.at(&Token::Colon) {
            return self.parse_slice_tail(expr, Some(first));
        }

        let mut indices = vec![first];
        while self.eat(&Token::Comma) {
            if self.at(&Token::RBracket) {
                break;
            }
            indices.push(self.parse_expr()?);
        }
        self.expect(&Token::RBracket)?;
        Ok(Expr::Index {
            expr: Box::new(expr),
            indices,
        })
    }

    fn parse_slice_tail(&mut self, expr: Expr, low: Option<Expr>) -> ParseResult<Expr> {
        self.expect(&Token::Colon)?;
        let high = if self.at(&Token::RBracket) || self.at(&Token::Colon) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        let max = if self.at(&Token::Colon) {
            if high.is_none() {
                return self.error("middle index required in 3-index slice");
            }
            self.pos += 1;
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect(&Token::RBracket)?;
        Ok(Expr::Slice {
            expr: Box::new(expr),
            low: low.map(Box::new),
            high,
            max,
        })
    }

    /// `f(a, b)` or `f(a, b...)`; nothing but `)` may follow the `...`.
    fn parse_call(&mut self, func: Expr) -> ParseResult<Expr> {
        self.expect(&Token::LParen)?;
        let mut args = Vec::new();
        let mut ellipsis = false;
        while !self.at(&Token::RParen) && !ellipsis {
            args.push(self.parse_expr()?);
            if self.eat(&Token::Ellipsis) {
                ellipsis = true;
            }
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.expect(&Token::RParen)?;
        Ok(Expr::Call {
            func: Box::new(func),
            args,
            ellipsis,
        })
    }

    fn parse_literal_value(&mut self) -> ParseResult<Vec<Expr>> {
        self.nested(Self::parse_literal_elements)
    }

    fn parse_literal_elements(&mut self) -> ParseResult<Vec<Expr>> {
        self.expect(&Token::LBrace)?;
        let mut elts = Vec::new();
        while !self.at(&Token::RBrace) {
            let key = self.parse_element()?;
            let elt = if self.eat(&Token::Colon) {
                Expr::KeyValue {
                    key: Box::new(key),
                    value: Box::new(self.parse_element()?),
                }
            } else {
                key
            };
            elts.push(elt);
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.expect(&Token::RBrace)?;
        Ok(elts)
    }

    fn parse_element(&mut self) -> ParseResult<Expr> {
        if self.at(&Token::LBrace) {
            let elts = self.parse_literal_value()?;
            return Ok(Expr::CompositeLit { ty: None, elts });
        }
        self.parse_expr()
    }

    fn parse_func_type_or_lit(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Func)?;
        let sig = self.parse_signature()?;
        if self.at(&Token::LBrace) {
            self.skip_body()?;
            return Ok(Expr::FuncLit(sig));
        }
        Ok(Expr::Func(sig))
    }

    /// Statements are out of scope; a function literal body only has to balance its braces.
    fn skip_body(&mut self) -> ParseResult<()> {
        let open = self.span();
        self.expect(&Token::LBrace)?;
        let mut depth = 1usize;
        while let Some((token, _)) = self.advance() {
            match token {
                Token::LBrace => depth += 1,
                Token::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(SyntaxError::new(open, "function body is not closed"))
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type(&mut self) -> ParseResult<Expr> {
        self.nested(Self::parse_type_expr)
    }

    fn parse_type_expr(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            Some(Token::Ident(_)) => self.parse_type_name(),
            Some(Token::LParen) => {
                self.pos += 1;
                let inner = self.parse_type()?;
                self.expect(&Token::RParen)?;
                Ok(Expr::Paren(Box::new(inner)))
            }
            Some(Token::Star) => {
                self.pos += 1;
                Ok(Expr::Star(Box::new(self.parse_type()?)))
            }
            Some(Token::LBracket) => self.parse_array_type(),
            Some(Token::Map) => self.parse_map_type(),
            Some(Token::Chan) => self.parse_chan_type(),
            Some(Token::Arrow) => self.parse_recv_chan_type(),
            Some(Token::Func) => {
                self.pos += 1;
                Ok(Expr::Func(self.parse_signature()?))
            }
            Some(Token::Struct) => self.parse_struct_type(),
            Some(Token::Interface) => self.parse_interface_type(),
            _ => self.expected("type"),
        }
    }

    /// `T`, `pkg.T`, optionally instantiated: `T[A, B]`.
    fn parse_type_name(&mut self) -> ParseResult<Expr> {
        let mut ty = Expr::Ident(self.expect_ident()?);
        if self.eat(&Token::Dot) {
            let sel = self.expect_ident()?;
            ty = Expr::Selector {
                expr: Box::new(ty),
                sel,
            };
        }
        if self.eat(&Token::LBracket) {
            let mut indices = vec![self.parse_type()?];
            while self.eat(&Token::Comma) {
                if self.at(&Token::RBracket) {
                    break;
                }
                indices.push(self.parse_type()?);
            }
            self.expect(&Token::RBracket)?;
            ty = Expr::Index {
                expr: Box::new(ty),
                indices,
            };
        }
        Ok(ty)
    }

    fn parse_array_type(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LBracket)?;
        let len = if self.eat(&Token::RBracket) {
            None
        } else {
            let len = if self.eat(&Token::Ellipsis) {
                Expr::Ellipsis(None)
            } else {
                self.parse_expr()?
            };
            self.expect(&Token::RBracket)?;
            Some(Box::new(len))
        };
        let elem = self.parse_type()?;
        Ok(Expr::Array {
            len,
            elem: Box::new(elem),
        })
    }

    fn parse_map_type(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Map)?;
        self.expect(&Token::LBracket)?;
        let key = self.parse_type()?;
        self.expect(&Token::RBracket)?;
        let value = self.parse_type()?;
        Ok(Expr::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// `chan T` or `chan<- T`.
    fn parse_chan_type(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Chan)?;
        let dir = if self.eat(&Token::Arrow) {
            ChanDir::Send
        } else {
            ChanDir::Both
        };
        let elem = self.parse_type()?;
        Ok(Expr::Chan {
            dir,
            elem: Box::new(elem),
        })
    }

    /// `<-chan T`.
    fn parse_recv_chan_type(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Arrow)?;
        self.expect(&Token::Chan)?;
        let elem = self.parse_type()?;
        Ok(Expr::Chan {
            dir: ChanDir::Recv,
            elem: Box::new(elem),
        })
    }

    fn parse_signature(&mut self) -> ParseResult<FuncType> {
        let params = self.parse_params()?;
        let results = if self.at(&Token::LParen) {
            self.parse_params()?
        } else if self.peek().is_some_and(starts_type) {
            vec![Field::unnamed(self.parse_type()?)]
        } else {
            Vec::new()
        };
        Ok(FuncType { params, results })
    }

    /// A parameter list is either all unnamed types or all named. In the
    /// named form a bare identifier shares the type of the next named entry,
    /// so `(a, b int)` declares two `int` parameters.
    fn parse_params(&mut self) -> ParseResult<Vec<Field>> {
        self.expect(&Token::LParen)?;
        let mut params = Vec::new();
        while !self.at(&Token::RParen) {
            let start = self.span();
            params.push((start, self.parse_param()?));
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.expect(&Token::RParen)?;

        if params.iter().all(|(_, param)| param.names.is_empty()) {
            return Ok(params.into_iter().map(|(_, param)| param).collect());
        }

        let mut grouped = Vec::new();
        let mut pending = Vec::new();
        let mut dangling = None;
        for (span, param) in params {
            match param {
                Field { names, ty, .. } if !names.is_empty() => {
                    pending.extend(names);
                    grouped.push(Field::named(std::mem::take(&mut pending), ty));
                    dangling = None;
                }
                Field {
                    ty: Expr::Ident(name),
                    ..
                } => {
                    pending.push(name);
                    if dangling.is_none() {
                        dangling = Some(span);
                    }
                }
                _ => return Err(mixed_params(span)),
            }
        }
        match dangling {
            Some(span) => Err(mixed_params(span)),
            None => Ok(grouped),
        }
    }

    /// `name T`, `name ...T`, or an unnamed `T`.
    ///
    /// `a []int` and `T[int]` share a prefix, so the named reading is tried
    /// first and abandoned if it does not parse.
    fn parse_param(&mut self) -> ParseResult<Field> {
        if let Some(Token::Ident(name)) = self.peek() {
            let names_a_type = self
                .peek_ahead(1)
                .is_some_and(|next| starts_type(next) || matches!(next, Token::Ellipsis));
            if names_a_type {
                let checkpoint = self.pos;
                self.pos += 1;
                match self.parse_param_type() {
                    Ok(ty) => return Ok(Field::named(vec![name.to_string()], ty)),
                    Err(err) => self.backtrack(checkpoint, err)?,
                }
            }
        }
        Ok(Field::unnamed(self.parse_param_type()?))
    }

    fn parse_param_type(&mut self) -> ParseResult<Expr> {
        if self.eat(&Token::Ellipsis) {
            return Ok(Expr::Ellipsis(Some(Box::new(self.parse_type()?))));
        }
        self.parse_type()
    }

    fn parse_struct_type(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Struct)?;
        self.expect(&Token::LBrace)?;
        let mut fields = Vec::new();
        while !self.at(&Token::RBrace) {
            fields.push(self.parse_field_decl()?);
            if !self.eat(&Token::Semicolon) {
                break;
            }
        }
        self.expect(&Token::RBrace)?;
        Ok(Expr::Struct(fields))
    }

    fn parse_field_decl(&mut self) -> ParseResult<Field> {
        let mut field = match (self.peek(), self.peek_ahead(1)) {
            (Some(Token::Star), _) => {
                self.pos += 1;
                Field::unnamed(Expr::Star(Box::new(self.parse_type_name()?)))
            }
            (
                Some(Token::Ident(_)),
                Some(Token::Dot | Token::String(_) | Token::Semicolon | Token::RBrace) | None,
            ) => Field::unnamed(self.parse_type_name()?),
            (Some(Token::Ident(name)), Some(Token::LBracket)) => {
                let checkpoint = self.pos;
                self.pos += 1;
                match self.parse_type() {
                    Ok(ty) => Field::named(vec![name.to_string()], ty),
                    Err(err) => {
                        self.backtrack(checkpoint, err)?;
                        Field::unnamed(self.parse_type_name()?)
                    }
                }
            }
            (Some(Token::Ident(_)), _) => {
                let mut names = vec![self.expect_ident()?];
                while self.eat(&Token::Comma) {
                    names.push(self.expect_ident()?);
                }
                Field::named(names, self.parse_type()?)
            }
            _ => return self.expected("field name or embedded type"),
        };
        if let Some(Token::String(tag)) = self.peek() {
            field.tag = Some(tag.to_string());
            self.pos += 1;
        }
        Ok(field)
    }

    fn parse_interface_type(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::Interface)?;
        self.expect(&Token::LBrace)?;
        let mut elems = Vec::new();
        while !self.at(&Token::RBrace) {
            elems.push(self.parse_interface_elem()?);
            if !self.eat(&Token::Semicolon) {
                break;
            }
        }
        self.expect(&Token::RBrace)?;
        Ok(Expr::Interface(elems))
    }

    fn parse_interface_elem(&mut self) -> ParseResult<InterfaceElem> {
        if let (Some(Token::Ident(name)), Some(Token::LParen)) = (self.peek(), self.peek_ahead(1)) {
            self.pos += 1;
            let sig = self.parse_signature()?;
            return Ok(InterfaceElem::Method {
                name: name.to_string(),
                sig,
            });
        }

        let mut union = self.parse_type_term()?;
        while self.eat(&Token::Pipe) {
            let rhs = self.parse_type_term()?;
            union = Expr::Binary {
                lhs: Box::new(union),
                op: BinaryOp::Or,
                rhs: Box::new(rhs),
            };
        }
        Ok(InterfaceElem::Embedded(union))
    }

    fn parse_type_term(&mut self) -> ParseResult<Expr> {
        if self.eat(&Token::Tilde) {
            return Ok(Expr::Unary {
                op: UnaryOp::Tilde,
                expr: Box::new(self.parse_type()?),
            });
        }
        self.parse_type()
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn peek_ahead(&self, offset: usize) -> Option<&'t Token<'src>> {
        self.tokens.get(self.pos + offset).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Option<&'t Spanned<'src>> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    fn at(&self, token: &Token<'src>) -> bool {
        self.peek() == Some(token)
    }

    fn eat(&mut self, token: &Token<'src>) -> bool {
        if self.at(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Token<'src>) -> ParseResult<()> {
        if self.eat(token) {
            Ok(())
        } else {
            self.expected(&token.to_string())
        }
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                self.pos += 1;
                Ok(name.to_string())
            }
            _ => self.expected("identifier"),
        }
    }

    fn expect_end(&self) -> ParseResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(_) => self.expected("end of expression"),
        }
    }

    /// Span of the current token, or an empty span at the end of input.
    fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.clone())
            .unwrap_or(self.source_len..self.source_len)
    }

    fn error<T>(&self, message: impl Into<String>) -> ParseResult<T> {
        Err(SyntaxError::new(self.span(), message))
    }

    fn expected<T>(&self, what: &str) -> ParseResult<T> {
        let found = match self.peek() {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        };
        self.error(format!("expected {}, found {}", what, found))
    }
}

fn mixed_params(span: Range<usize>) -> SyntaxError {
    SyntaxError::new(span, "mixed named and unnamed parameters")
}
