use std::{fmt, ops::Range};

use logos::Logos;

use super::SyntaxError;

/// Go tokens that can appear in an expression.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token<'src> {
    // Keywords that start a type literal
    #[token("chan")]
    Chan,
    #[token("func")]
    Func,
    #[token("interface")]
    Interface,
    #[token("map")]
    Map,
    #[token("struct")]
    Struct,

    // Statement and declaration keywords, never valid inside an expression
    #[token("break", |lex| lex.slice())]
    #[token("case", |lex| lex.slice())]
    #[token("const", |lex| lex.slice())]
    #[token("continue", |lex| lex.slice())]
    #[token("default", |lex| lex.slice())]
    #[token("defer", |lex| lex.slice())]
    #[token("else", |lex| lex.slice())]
    #[token("fallthrough", |lex| lex.slice())]
    #[token("for", |lex| lex.slice())]
    #[token("go", |lex| lex.slice())]
    #[token("goto", |lex| lex.slice())]
    #[token("if", |lex| lex.slice())]
    #[token("import", |lex| lex.slice())]
    #[token("package", |lex| lex.slice())]
    #[token("range", |lex| lex.slice())]
    #[token("return", |lex| lex.slice())]
    #[token("select", |lex| lex.slice())]
    #[token("switch", |lex| lex.slice())]
    #[token("type", |lex| lex.slice())]
    #[token("var", |lex| lex.slice())]
    Keyword(&'src str),

    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*", |lex| lex.slice())]
    Ident(&'src str),

    // Literals
    #[regex(r"[0-9][0-9_]*|0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+", |lex| lex.slice())]
    Int(&'src str),
    #[regex(
        r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?|\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?|[0-9][0-9_]*[eE][+-]?[0-9_]+",
        |lex| lex.slice()
    )]
    Float(&'src str),
    #[regex(r"([0-9][0-9_]*|[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?)i", |lex| lex.slice())]
    Imag(&'src str),
    #[regex(r"'([^'\\\n]|\\[^\n])+'", |lex| lex.slice())]
    Char(&'src str),
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, |lex| lex.slice())]
    #[regex(r"`[^`]*`", |lex| lex.slice())]
    String(&'src str),

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("&^")]
    AndNot,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("<-")]
    Arrow,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("!")]
    Not,
    #[token("~")]
    Tilde,
    #[token("=")]
    Assign,
    #[token(":=")]
    Define,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,

    // Trivia, consumed by `tokenize`
    #[token("\n")]
    Newline,
    #[regex(r"//[^\n]*", |lex| lex.slice(), allow_greedy = true)]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| lex.slice())]
    Comment(&'src str),
}

impl Token<'_> {
    /// Whether a line break after this token ends the statement.
    fn ends_line(&self) -> bool {
        matches!(
            self,
            Token::Ident(_)
                | Token::Int(_)
                | Token::Float(_)
                | Token::Imag(_)
                | Token::Char(_)
                | Token::String(_)
                | Token::Keyword("break" | "continue" | "fallthrough" | "return")
                | Token::Inc
                | Token::Dec
                | Token::RParen
                | Token::RBracket
                | Token::RBrace
        )
    }

    fn is_trivia(&self) -> bool {
        matches!(self, Token::Newline | Token::Comment(_))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Token::Chan => "chan",
            Token::Func => "func",
            Token::Interface => "interface",
            Token::Map => "map",
            Token::Struct => "struct",
            Token::Keyword(s)
            | Token::Ident(s)
            | Token::Int(s)
            | Token::Float(s)
            | Token::Imag(s)
            | Token::Char(s)
            | Token::String(s)
            | Token::Comment(s) => s,
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::Amp => "&",
            Token::Pipe => "|",
            Token::Caret => "^",
            Token::Shl => "<<",
            Token::Shr => ">>",
            Token::AndNot => "&^",
            Token::AndAnd => "&&",
            Token::OrOr => "||",
            Token::Arrow => "<-",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::Lt => "<",
            Token::LtEq => "<=",
            Token::Gt => ">",
            Token::GtEq => ">=",
            Token::Not => "!",
            Token::Tilde => "~",
            Token::Assign => "=",
            Token::Define => ":=",
            Token::Inc => "++",
            Token::Dec => "--",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Colon => ":",
            Token::Dot => ".",
            Token::Ellipsis => "...",
            Token::Newline => "newline",
        };
        write!(f, "`{}`", s)
    }
}

/// A token paired with its byte range in the source.
pub type Spanned<'src> = (Token<'src>, Range<usize>);

/// Tokenize a complete source string.
///
/// Comments are dropped and line breaks become semicolons where Go inserts
/// them. A semicolon inserted at the very end is dropped, so `"int\n"` is
/// still a single expression. Fails on the first character that does not
/// start a Go token.
pub fn tokenize(source: &str) -> Result<Vec<Spanned<'_>>, SyntaxError> {
    let mut tokens: Vec<Spanned<'_>> = Vec::new();
    let mut inserted = false;
    for (result, span) in Token::lexer(source).spanned() {
        let token = result.map_err(|()| {
            SyntaxError::new(
                span.clone(),
                format!("invalid token {:?}", &source[span.clone()]),
            )
        })?;
        let line_break = match token {
            Token::Newline => true,
            Token::Comment(text) => text.contains('\n'),
            token => {
                tokens.push((token, span));
                inserted = false;
                continue;
            }
        };
        if line_break && tokens.last().is_some_and(|(last, _)| last.ends_line()) {
            tokens.push((Token::Semicolon, span));
            inserted = true;
        }
    }
    if inserted {
        tokens.pop();
    }
    Ok(tokens)
}

/// Span of the first comment in `source`, if any.
pub fn comment_span(source: &str) -> Option<Range<usize>> {
    Token::lexer(source)
        .spanned()
        .find_map(|(token, span)| matches!(token, Ok(Token::Comment(_))).then_some(span))
}

/// Whether `s` is exactly one Go identifier (keywords excluded).
pub fn is_identifier(s: &str) -> bool {
    let mut lexer = Token::lexer(s);
    matches!(lexer.next(), Some(Ok(Token::Ident(ident))) if ident == s) && lexer.next().is_none()
}

/// Name declared by the `package` clause at the top of a Go source file.
pub fn package_name(source: &str) -> Option<&str> {
    let mut lexer = Token::lexer(source)
        .filter(|token| !token.as_ref().is_ok_and(|token| token.is_trivia()));
    match (lexer.next(), lexer.next()) {
        (Some(Ok(Token::Keyword("package"))), Some(Ok(Token::Ident(name)))) => Some(name),
        _ => None,
    }
}
