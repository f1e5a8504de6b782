//! AST node definitions.
//!
//! The tree is plain owned data: every node is owned by its parent and the
//! whole tree by [`Program`]. Later phases only read it.

use std::fmt;

/// Root of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Name given after `programma`
    pub name: String,

    /// Top-level statements
    pub block: Block,
}

/// An ordered statement sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements in source order
    pub statements: Vec<Stmt>,
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `var`/`cost` declaration
    VarDecl(VarDecl),

    /// `x assegna expr`
    Assign(Assignment),

    /// `leggi(x)`
    Read(ReadStmt),

    /// `scrivi(e1, e2, ...)`
    Write(WriteStmt),

    /// `se ... allora ... [altrimenti ...] finese`
    If(IfStmt),

    /// `mentre ... fai ... finementre`
    While(WhileStmt),

    /// `per (init. cond. update) fai ... fineper`
    For(ForStmt),

    /// `ritorna expr`
    Return(Expr),

    /// `interrompi`
    Break,
}

/// Variable or constant declaration
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// Declared with `cost`
    pub is_const: bool,

    /// Declared name
    pub name: String,

    /// Declared type
    pub ty: PrimitiveType,

    /// Initializer after `assegna`
    pub init: Option<Expr>,
}

/// Assignment, also used for the init and update clauses of `per`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Target variable
    pub name: String,

    /// Assigned value
    pub expr: Expr,
}

/// Read into a variable
#[derive(Debug, Clone, PartialEq)]
pub struct ReadStmt {
    /// Target variable
    pub name: String,
}

/// Write one or more values
#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt {
    /// Values, in output order (never empty when parsed)
    pub expressions: Vec<Expr>,
}

/// Conditional
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    /// Condition
    pub cond: Condition,

    /// Taken branch
    pub then_block: Block,

    /// `altrimenti` branch
    pub else_block: Option<Block>,
}

/// Pre-tested loop
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    /// Loop condition
    pub cond: Condition,

    /// Body
    pub block: Block,
}

/// Counting loop
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    /// Runs once before the first test
    pub init: Assignment,

    /// Loop condition
    pub cond: Condition,

    /// Runs after each iteration
    pub update: Assignment,

    /// Body
    pub block: Block,
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Constant value
    Literal(Literal),

    /// Variable reference
    Variable(String),

    /// Binary arithmetic
    Binary(BinaryExpr),
}

impl Expr {
    /// Builds a binary node.
    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /// Builds a variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }
}

/// Literal value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `42`
    Int(i64),

    /// `3,14`
    Decimal(f64),

    /// `vero` / `falso`
    Bool(bool),

    /// `"..."`, escapes kept verbatim
    Text(String),
}

impl Literal {
    /// Intrinsic type of the value.
    pub fn ty(&self) -> PrimitiveType {
        match self {
            Literal::Int(_) => PrimitiveType::Int,
            Literal::Decimal(_) => PrimitiveType::Decimal,
            Literal::Bool(_) => PrimitiveType::Bool,
            Literal::Text(_) => PrimitiveType::Text,
        }
    }
}

/// Binary expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// Left operand
    pub left: Box<Expr>,

    /// Operator
    pub op: BinOp,

    /// Right operand
    pub right: Box<Expr>,
}

/// Condition of `se`, `mentre` and `per`
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// A bare boolean-valued expression
    Single(Expr),

    /// `left relop right`
    Compare {
        /// Left side
        left: Expr,
        /// Relational operator
        op: BinOp,
        /// Right side
        right: Expr,
    },
}

/// Operator. The parser only places arithmetic operators in [`BinaryExpr`]
/// and relational operators in [`Condition::Compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `piu`
    Add,
    /// `meno`
    Sub,
    /// `moltiplica`
    Mul,
    /// `diviso`
    Div,
    /// `%`
    Rem,
    /// `uguale`
    Eq,
    /// `diverso`
    Ne,
    /// `minore`
    Lt,
    /// `maggiore`
    Gt,
    /// `minoreuguale`
    Le,
    /// `maggioreuguale`
    Ge,
}

impl BinOp {
    /// Maps an operator lexeme to its operator.
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        let op = match lexeme {
            "piu" => BinOp::Add,
            "meno" => BinOp::Sub,
            "moltiplica" => BinOp::Mul,
            "diviso" => BinOp::Div,
            "%" => BinOp::Rem,
            "uguale" => BinOp::Eq,
            "diverso" => BinOp::Ne,
            "minore" => BinOp::Lt,
            "maggiore" => BinOp::Gt,
            "minoreuguale" => BinOp::Le,
            "maggioreuguale" => BinOp::Ge,
            _ => return None,
        };
        Some(op)
    }

    /// Source spelling.
    pub const fn lexeme(&self) -> &'static str {
        match self {
            BinOp::Add => "piu",
            BinOp::Sub => "meno",
            BinOp::Mul => "moltiplica",
            BinOp::Div => "diviso",
            BinOp::Rem => "%",
            BinOp::Eq => "uguale",
            BinOp::Ne => "diverso",
            BinOp::Lt => "minore",
            BinOp::Gt => "maggiore",
            BinOp::Le => "minoreuguale",
            BinOp::Ge => "maggioreuguale",
        }
    }

    /// `piu meno moltiplica diviso %`
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Rem)
    }

    /// `uguale diverso minore maggiore minoreuguale maggioreuguale`
    pub const fn is_relational(&self) -> bool {
        !self.is_arithmetic()
    }

    /// `uguale diverso`
    pub const fn is_equality(&self) -> bool {
        matches!(self, BinOp::Eq | BinOp::Ne)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

/// The four primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `intero`
    Int,
    /// `decimale`
    Decimal,
    /// `booleano`
    Bool,
    /// `testo`
    Text,
}

impl PrimitiveType {
    /// Maps a type keyword to its type.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "intero" => Some(PrimitiveType::Int),
            "decimale" => Some(PrimitiveType::Decimal),
            "booleano" => Some(PrimitiveType::Bool),
            "testo" => Some(PrimitiveType::Text),
            _ => None,
        }
    }

    /// Source spelling.
    pub const fn keyword(&self) -> &'static str {
        match self {
            PrimitiveType::Int => "intero",
            PrimitiveType::Decimal => "decimale",
            PrimitiveType::Bool => "booleano",
            PrimitiveType::Text => "testo",
        }
    }

    /// `intero` or `decimale`
    pub const fn is_numeric(&self) -> bool {
        matches!(self, PrimitiveType::Int | PrimitiveType::Decimal)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
