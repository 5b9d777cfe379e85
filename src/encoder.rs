use thiserror::Error;

use crate::instructions::{InstrDesc, Shape};
use crate::operand::Operand;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("immediate {value} does not fit in {bits} unsigned bits")]
    ImmediateOutOfRange { value: i64, bits: u32 },
    #[error("operand list does not match the {0} format")]
    OperandMismatch(&'static str),
}

/// Pack a descriptor's constant fields and the parsed operands into one
/// 32-bit word. Register indices are already validated (0..=31); shamt
/// immediates are range-checked here against the shape's field width.
pub fn encode(desc: &InstrDesc, ops: &[Operand]) -> Result<u32, EncodeError> {
    let rtype = |rd: u8, rs1: u8, rs2: u32| {
        (desc.funct << 25)
            | (rs2 << 20)
            | ((rs1 as u32) << 15)
            | (desc.funct3 << 12)
            | ((rd as u32) << 7)
            | desc.opcode
    };

    match (desc.shape, ops) {
        (Shape::RegRegReg, [Operand::Reg(rd), Operand::Reg(rs1), Operand::Reg(rs2)]) => {
            Ok(rtype(*rd, *rs1, *rs2 as u32))
        }
        (Shape::RegReg, [Operand::Reg(rd), Operand::Reg(rs1)]) => {
            Ok(rtype(*rd, *rs1, desc.rs2))
        }
        (Shape::RegRegShamt5, [Operand::Reg(rd), Operand::Reg(rs1), Operand::Imm(shamt)]) => {
            Ok(rtype(*rd, *rs1, unsigned_field(*shamt, 5)?))
        }
        (Shape::RegRegShamt6, [Operand::Reg(rd), Operand::Reg(rs1), Operand::Imm(shamt)]) => {
            let shamt = unsigned_field(*shamt, 6)?;
            Ok((desc.funct << 26)
                | (shamt << 20)
                | ((*rs1 as u32) << 15)
                | (desc.funct3 << 12)
                | ((*rd as u32) << 7)
                | desc.opcode)
        }
        _ => Err(EncodeError::OperandMismatch(desc.mnemonic)),
    }
}

fn unsigned_field(value: i64, bits: u32) -> Result<u32, EncodeError> {
    if value < 0 || value >> bits != 0 {
        return Err(EncodeError::ImmediateOutOfRange { value, bits });
    }
    Ok(value as u32)
}
