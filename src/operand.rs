use num_traits::Num;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::instructions::{OperandKind, Shape};
use crate::registers::parse_reg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// Register index 0..=31
    Reg(u8),
    /// Immediate as written; field-width checks happen at encode time
    Imm(i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} operands, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("bad register: {0}")]
    BadRegister(String),
    #[error("bad immediate: {0}")]
    BadImmediate(String),
}

/// Parse `0x`-prefixed hex or (optionally signed) decimal.
pub fn parse_int<T: Num>(s: &str) -> Option<T> {
    let t = s.trim();
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        T::from_str_radix(hex, 16).ok()
    } else {
        T::from_str_radix(t, 10).ok()
    }
}

/// Split an operand field on commas and type each token against the shape's
/// expected operand kinds. Arity is checked before any token is parsed.
pub fn parse_operands(text: &str, shape: Shape) -> Result<Vec<Operand>, ParseError> {
    let tokens: Vec<&str> = if text.trim().is_empty() {
        Vec::new()
    } else {
        text.split(',').map(str::trim).collect()
    };
    let kinds = shape.operand_kinds();
    if tokens.len() != kinds.len() {
        return Err(ParseError::ArityMismatch {
            expected: kinds.len(),
            found: tokens.len(),
        });
    }
    let mut ops = Vec::with_capacity(tokens.len());
    for (tok, kind) in tokens.iter().zip(kinds) {
        let op = match kind {
            OperandKind::Reg => Operand::Reg(
                parse_reg(tok).ok_or_else(|| ParseError::BadRegister(tok.to_string()))?,
            ),
            OperandKind::Shamt => Operand::Imm(
                parse_int::<i64>(tok).ok_or_else(|| ParseError::BadImmediate(tok.to_string()))?,
            ),
        };
        ops.push(op);
    }
    Ok(ops)
}
