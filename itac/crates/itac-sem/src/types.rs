//! Typing rules shared by declarations, assignments and conditions.

use crate::error::{Result, SemanticError};
use itac_par::{BinOp, PrimitiveType};

/// Returns true if a `source` value may be stored in a `target` variable:
/// identical types, or widening from `intero` to `decimale`.
pub fn can_assign(target: PrimitiveType, source: PrimitiveType) -> bool {
    target == source || (target == PrimitiveType::Decimal && source == PrimitiveType::Int)
}

/// Result type of `left op right` for an arithmetic operator.
///
/// Numeric operands yield `decimale` if either side is decimal, else
/// `intero`; `%` rejects decimals. `testo piu testo` concatenates.
pub fn arithmetic_result(op: BinOp, left: PrimitiveType, right: PrimitiveType) -> Result<PrimitiveType> {
    if !op.is_arithmetic() {
        return Err(SemanticError::NonArithmeticOperator { op });
    }

    if left.is_numeric() && right.is_numeric() {
        let has_decimal = left == PrimitiveType::Decimal || right == PrimitiveType::Decimal;
        if op == BinOp::Rem && has_decimal {
            return Err(SemanticError::ModuloOnDecimal);
        }
        return Ok(if has_decimal { PrimitiveType::Decimal } else { PrimitiveType::Int });
    }

    if op == BinOp::Add && left == PrimitiveType::Text && right == PrimitiveType::Text {
        return Ok(PrimitiveType::Text);
    }

    Err(SemanticError::IncompatibleOperands { op, left, right })
}

/// Validates `left op right` for a relational operator.
///
/// Numbers compare with any operator. Two `testo` or two `booleano` values
/// compare only with `uguale`/`diverso`. Anything else is rejected.
pub fn check_comparison(op: BinOp, left: PrimitiveType, right: PrimitiveType) -> Result<()> {
    if left.is_numeric() && right.is_numeric() {
        return Ok(());
    }
    if left != right {
        return Err(SemanticError::IncompatibleComparison { op, left, right });
    }
    if !op.is_equality() {
        return Err(SemanticError::InvalidComparisonOperator { op, ty: left });
    }
    Ok(())
}
