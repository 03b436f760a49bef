// AST definitions for the C expression sublanguage

/// Literal categories distinguished by the lexer.
///
/// The generator re-emits the raw literal text verbatim, so the category is
/// carried for diagnostics and tests rather than for rendering decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    Char,
    Str,
}

/// Binary operators, in grammar order (multiplicative through comma).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    BitAnd,
    BitXor,
    BitOr,
    LogAnd,
    LogOr,
    Comma,
}

impl BinOp {
    /// The C spelling of this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::BitAnd => "&",
            BinOp::BitXor => "^",
            BinOp::BitOr => "|",
            BinOp::LogAnd => "&&",
            BinOp::LogOr => "||",
            BinOp::Comma => ",",
        }
    }
}

/// Unary operators, prefix and postfix.
///
/// `Sizeof` here is always sizeof-of-a-value; sizeof of a type is the
/// separate [`Expr::SizeofType`] node, which renders differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Plus,    // +x
    Neg,     // -x
    LogNot,  // !x
    BitNot,  // ~x
    Deref,   // *x
    AddrOf,  // &x
    PreInc,  // ++x
    PreDec,  // --x
    PostInc, // x++
    PostDec, // x--
    Sizeof,  // sizeof x
}

impl UnOp {
    /// The C spelling of this operator (`sizeof` without its trailing space).
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Plus => "+",
            UnOp::Neg => "-",
            UnOp::LogNot => "!",
            UnOp::BitNot => "~",
            UnOp::Deref => "*",
            UnOp::AddrOf => "&",
            UnOp::PreInc | UnOp::PostInc => "++",
            UnOp::PreDec | UnOp::PostDec => "--",
            UnOp::Sizeof => "sizeof",
        }
    }

    /// Whether the operator is written after its operand.
    pub fn is_postfix(self) -> bool {
        matches!(self, UnOp::PostInc | UnOp::PostDec)
    }
}

/// Assignment operators (`=` and the compound family).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    XorAssign,
    OrAssign,
}

impl AssignOp {
    /// The C spelling of this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::ModAssign => "%=",
            AssignOp::ShlAssign => "<<=",
            AssignOp::ShrAssign => ">>=",
            AssignOp::AndAssign => "&=",
            AssignOp::XorAssign => "^=",
            AssignOp::OrAssign => "|=",
        }
    }
}

/// Minimal type description for cast targets and `sizeof(type)` operands.
///
/// `base` is either a space-joined built-in keyword sequence (`"unsigned
/// long"`) or a typedef name known to the registry (`"size_t"`). Array
/// dimensions keep their literal text; `None` is an unsized `[]`.
/// Deliberately not a full C type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    pub is_const: bool,
    pub base: String,
    pub pointer_depth: usize,
    pub array_dims: Vec<Option<String>>,
}

impl TypeName {
    pub fn new(base: impl Into<String>) -> Self {
        TypeName {
            is_const: false,
            base: base.into(),
            pointer_depth: 0,
            array_dims: Vec::new(),
        }
    }
}

/// Expression nodes.
///
/// A closed sum type built bottom-up by the parser in a single pass and
/// never mutated; the generator's match over it is exhaustive, so a new
/// kind cannot be added without the compiler pointing at every consumer.
/// Nodes carry no source locations — locations live in tokens and errors —
/// which keeps trees structurally comparable across a parse/render/re-parse
/// round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal, kept as its raw source text (`0x1Fu`, `'\n'`, `"s"`).
    Constant { text: String, kind: LiteralKind },
    Identifier(String),
    FunctionCall {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    ArrayAccess {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    MemberAccess {
        base: Box<Expr>,
        field: String,
        /// `true` for `->`, `false` for `.`.
        arrow: bool,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
    },
    /// `sizeof (type)` — operand is a type, not a value.
    SizeofType { type_name: TypeName },
    Cast {
        type_name: TypeName,
        operand: Box<Expr>,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    TernaryOp {
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    Assignment {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
}
