use bitflags::bitflags;
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExtSet: u8 {
        const ZBA = 1 << 0; // address generation
        const ZBB = 1 << 1; // basic bit-manipulation
        const ZBC = 1 << 2; // carry-less multiply
        const ZBS = 1 << 3; // single-bit ops
    }
}

/// Field layout class of an encoding. Every supported mnemonic uses one of
/// these; the fields of each shape must partition bits 0..=31 exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// `rd, rs1, rs2` R-type (funct7 | rs2 | rs1 | funct3 | rd | opcode)
    RegRegReg,
    /// `rd, rs1` unary R-type; the rs2 field carries a fixed selector
    RegReg,
    /// `rd, rs1, shamt` I-shift with 6-bit shamt under a funct6
    RegRegShamt6,
    /// `rd, rs1, shamt` word-form shift with 5-bit shamt under a funct7
    RegRegShamt5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Reg,
    Shamt,
}

/// One bit-field of an instruction word: `width` bits starting at `lo`.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub lo: u32,
    pub width: u32,
}

const R_FIELDS: &[Field] = &[
    Field { lo: 0, width: 7 },  // opcode
    Field { lo: 7, width: 5 },  // rd
    Field { lo: 12, width: 3 }, // funct3
    Field { lo: 15, width: 5 }, // rs1
    Field { lo: 20, width: 5 }, // rs2 (or 5-bit shamt)
    Field { lo: 25, width: 7 }, // funct7
];

const SHAMT6_FIELDS: &[Field] = &[
    Field { lo: 0, width: 7 },
    Field { lo: 7, width: 5 },
    Field { lo: 12, width: 3 },
    Field { lo: 15, width: 5 },
    Field { lo: 20, width: 6 }, // shamt
    Field { lo: 26, width: 6 }, // funct6
];

impl Shape {
    pub fn operand_kinds(self) -> &'static [OperandKind] {
        match self {
            Shape::RegRegReg => &[OperandKind::Reg, OperandKind::Reg, OperandKind::Reg],
            Shape::RegReg => &[OperandKind::Reg, OperandKind::Reg],
            Shape::RegRegShamt6 | Shape::RegRegShamt5 => {
                &[OperandKind::Reg, OperandKind::Reg, OperandKind::Shamt]
            }
        }
    }

    pub fn shamt_bits(self) -> Option<u32> {
        match self {
            Shape::RegRegShamt6 => Some(6),
            Shape::RegRegShamt5 => Some(5),
            _ => None,
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            Shape::RegRegReg | Shape::RegReg | Shape::RegRegShamt5 => R_FIELDS,
            Shape::RegRegShamt6 => SHAMT6_FIELDS,
        }
    }
}

/// Immutable per-mnemonic descriptor. One entry per supported instruction,
/// in `crate::isa::zb::TABLE`; never constructed at runtime.
#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub ext: ExtSet,
    pub shape: Shape,
    pub opcode: u32,
    pub funct3: u32,
    /// funct7, or funct6 for `RegRegShamt6`
    pub funct: u32,
    /// fixed rs2 selector for the `RegReg` shape
    pub rs2: u32,
}

/// Case-sensitive exact lookup over the supported set. Base-ISA mnemonics
/// are intentionally absent; callers treat `None` as pass-through.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    crate::isa::zb::TABLE.iter().find(|d| d.mnemonic == mnemonic)
}

/// Mark every bit position covered by the shape's fields. Returns `None` if
/// any two fields overlap; a full partition has all 32 bits set.
pub fn coverage(shape: Shape) -> Option<BitArr!(for 32, in u32)> {
    let mut bits: BitArr!(for 32, in u32) = BitArray::ZERO;
    for f in shape.fields() {
        for i in f.lo..f.lo + f.width {
            if bits[i as usize] {
                return None;
            }
            bits.set(i as usize, true);
        }
    }
    Some(bits)
}
