//! Semantic error types.

use itac_par::{BinOp, PrimitiveType};
use itac_util::{Category, Diagnostic};
use thiserror::Error;

/// First declaration, scoping or typing rule the program violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// Second declaration of a name anywhere in the program.
    #[error("variable '{name}' is already declared")]
    AlreadyDeclared {
        /// Redeclared name
        name: String,
    },

    /// `cost` without `assegna`.
    #[error("constant '{name}' must be initialized")]
    ConstWithoutInit {
        /// Constant name
        name: String,
    },

    /// Use of a name with no prior declaration.
    #[error("variable '{name}' used in {usage} is not declared")]
    NotDeclared {
        /// Undeclared name
        name: String,
        /// Where it was used
        usage: &'static str,
    },

    /// Declaration initializer of the wrong type.
    #[error("initializer of '{name}' has type {found}, incompatible with declared type {declared}")]
    IncompatibleInit {
        /// Declared name
        name: String,
        /// Declared type
        declared: PrimitiveType,
        /// Initializer type
        found: PrimitiveType,
    },

    /// Assignment of the wrong type.
    #[error("cannot assign a {found} value to '{name}' of type {expected}")]
    IncompatibleAssign {
        /// Target name
        name: String,
        /// Target type
        expected: PrimitiveType,
        /// Value type
        found: PrimitiveType,
    },

    /// Condition that is not boolean.
    #[error("condition of '{statement}' must be booleano, found {found}")]
    NonBooleanCondition {
        /// `se`, `mentre` or `per`
        statement: &'static str,
        /// Actual type
        found: PrimitiveType,
    },

    /// `%` with a decimal operand.
    #[error("operator '%' cannot be applied to decimale operands")]
    ModuloOnDecimal,

    /// Arithmetic between types it is not defined for.
    #[error("arithmetic operator '{op}' applied to incompatible types {left} and {right}")]
    IncompatibleOperands {
        /// Operator
        op: BinOp,
        /// Left operand type
        left: PrimitiveType,
        /// Right operand type
        right: PrimitiveType,
    },

    /// Relational operator used where an arithmetic one is required.
    #[error("operator '{op}' cannot be used in an arithmetic expression")]
    NonArithmeticOperator {
        /// Operator
        op: BinOp,
    },

    /// Comparison between unrelated types.
    #[error("comparison '{op}' between incompatible types {left} and {right}")]
    IncompatibleComparison {
        /// Operator
        op: BinOp,
        /// Left side type
        left: PrimitiveType,
        /// Right side type
        right: PrimitiveType,
    },

    /// Ordering comparison on text or booleans.
    #[error("operator '{op}' is not valid for {ty} operands, use 'uguale' or 'diverso'")]
    InvalidComparisonOperator {
        /// Operator
        op: BinOp,
        /// Operand type
        ty: PrimitiveType,
    },

    /// AST shape the analyzer was never taught to handle.
    #[error("{message}")]
    Internal {
        /// Description of the shape
        message: String,
    },
}

impl SemanticError {
    /// Error family. A relational operator inside an arithmetic expression
    /// can only come from a malformed tree, so it is internal too.
    pub fn category(&self) -> Category {
        match self {
            SemanticError::Internal { .. } | SemanticError::NonArithmeticOperator { .. } => Category::Internal,
            _ => Category::Semantic,
        }
    }

    /// Lowers the error into a renderable diagnostic.
    pub fn diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::new(self.category(), self.to_string());
        match self {
            SemanticError::AlreadyDeclared { .. } => {
                diag.note("every declaration shares one program-wide symbol table")
            },
            SemanticError::IncompatibleInit { .. } | SemanticError::IncompatibleAssign { .. } => {
                diag.note("the only implicit conversion is intero to decimale")
            },
            _ => diag,
        }
    }
}

/// Result type alias for semantic analysis
pub type Result<T> = std::result::Result<T, SemanticError>;
