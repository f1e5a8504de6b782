//! Mapping of source types, operators and literals to C++ spellings.

use itac_par::{BinOp, Literal, PrimitiveType};

/// C++ type of a primitive type.
pub const fn map_type(ty: PrimitiveType) -> &'static str {
    match ty {
        PrimitiveType::Int => "int",
        PrimitiveType::Decimal => "double",
        PrimitiveType::Bool => "bool",
        PrimitiveType::Text => "string",
    }
}

/// C++ operator of a source operator.
pub const fn map_op(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Rem => "%",
        BinOp::Eq => "==",
        BinOp::Ne => "!=",
        BinOp::Lt => "<",
        BinOp::Gt => ">",
        BinOp::Le => "<=",
        BinOp::Ge => ">=",
    }
}

/// C++ spelling of a literal.
pub fn literal(value: &Literal) -> String {
    match value {
        Literal::Int(value) => value.to_string(),
        // Debug keeps a fractional part on whole values (`5.0`)
        Literal::Decimal(value) => format!("{:?}", value),
        Literal::Bool(true) => "true".to_string(),
        Literal::Bool(false) => "false".to_string(),
        Literal::Text(text) => format!("\"{}\"", escape_text(text)),
    }
}

/// Escapes backslashes and double quotes for a C++ string literal.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
