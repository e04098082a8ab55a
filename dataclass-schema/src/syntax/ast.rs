//! Syntax tree for Go expressions and type expressions.
//!
//! The tree only records structure; it is used to confirm that a type
//! expression is well formed and is discarded afterwards.

/// A Go expression. Types are expressions too.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    BasicLit(LitKind, String),
    /// `T{...}`, or an elided-type element `{...}` nested in another literal.
    CompositeLit {
        ty: Option<Box<Expr>>,
        elts: Vec<Expr>,
    },
    FuncLit(FuncType),
    Paren(Box<Expr>),
    Selector {
        expr: Box<Expr>,
        sel: String,
    },
    /// `x[i]`, or a generic instantiation `T[A, B]`.
    Index {
        expr: Box<Expr>,
        indices: Vec<Expr>,
    },
    Slice {
        expr: Box<Expr>,
        low: Option<Box<Expr>>,
        high: Option<Box<Expr>>,
        max: Option<Box<Expr>>,
    },
    TypeAssert {
        expr: Box<Expr>,
        ty: Box<Expr>,
    },
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
        ellipsis: bool,
    },
    /// `*x`: pointer type or dereference.
    Star(Box<Expr>),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        lhs: Box<Expr>,
        op: BinaryOp,
        rhs: Box<Expr>,
    },
    KeyValue {
        key: Box<Expr>,
        value: Box<Expr>,
    },
    /// `...T` in a parameter list, or the bare `...` of `[...]T`.
    Ellipsis(Option<Box<Expr>>),
    /// `[N]T`; `len` is `None` for a slice `[]T`.
    Array {
        len: Option<Box<Expr>>,
        elem: Box<Expr>,
    },
    Map {
        key: Box<Expr>,
        value: Box<Expr>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<Expr>,
    },
    Func(FuncType),
    Struct(Vec<Field>),
    Interface(Vec<InterfaceElem>),
}

impl Expr {
    /// Whether `{` after this expression opens a composite literal.
    pub fn is_literal_type(&self) -> bool {
        match self {
            Expr::Ident(_) | Expr::Array { .. } | Expr::Map { .. } | Expr::Struct(_) => true,
            Expr::Selector { expr, .. } => matches!(**expr, Expr::Ident(_)),
            Expr::Index { expr, .. } => matches!(
                **expr,
                Expr::Ident(_) | Expr::Selector { .. }
            ),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    Xor,
    Addr,
    Recv,
    /// `~T` in a type constraint.
    Tilde,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    LogicalOr,
    LogicalAnd,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Or,
    Xor,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    And,
    AndNot,
}

impl BinaryOp {
    /// Go operator precedence, 1 (lowest) to 5 (highest).
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::LogicalOr => 1,
            BinaryOp::LogicalAnd => 2,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq => 3,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Or | BinaryOp::Xor => 4,
            BinaryOp::Mul
            | BinaryOp::Div
            | BinaryOp::Rem
            | BinaryOp::Shl
            | BinaryOp::Shr
            | BinaryOp::And
            | BinaryOp::AndNot => 5,
        }
    }
}

/// Parameters and results of a function type.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncType {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

/// A parameter, result, or struct field. `names` is empty when unnamed or embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: Expr,
    pub tag: Option<String>,
}

impl Field {
    pub fn unnamed(ty: Expr) -> Self {
        Self {
            names: Vec::new(),
            ty,
            tag: None,
        }
    }

    pub fn named(names: Vec<String>, ty: Expr) -> Self {
        Self {
            names,
            ty,
            tag: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterfaceElem {
    Method { name: String, sig: FuncType },
    /// An embedded type or a union of type terms.
    Embedded(Expr),
}
