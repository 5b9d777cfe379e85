use crate::instructions::{ExtSet, InstrDesc, Shape};

/// RISC-V bit-manipulation descriptor table (Zba/Zbb/Zbc/Zbs, RV64).
///
/// Constant fields follow the ratified B extension spec v1.0. `funct` is the
/// funct7 value, except for `RegRegShamt6` entries where it is the funct6
/// sitting above the 6-bit shamt. `rs2` is only read for `RegReg` entries,
/// where the rs2 field selects the unary operation.
pub const TABLE: &[InstrDesc] = &[
    InstrDesc { mnemonic: "add.uw", ext: ExtSet::ZBA, shape: Shape::RegRegReg, opcode: 0b0111011, funct3: 0b000, funct: 0b0000100, rs2: 0 },
    InstrDesc { mnemonic: "andn", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b111, funct: 0b0100000, rs2: 0 },
    InstrDesc { mnemonic: "bclr", ext: ExtSet::ZBS, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b001, funct: 0b0100100, rs2: 0 },
    InstrDesc { mnemonic: "bclri", ext: ExtSet::ZBS, shape: Shape::RegRegShamt6, opcode: 0b0010011, funct3: 0b001, funct: 0b010010, rs2: 0 },
    InstrDesc { mnemonic: "bext", ext: ExtSet::ZBS, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b101, funct: 0b0100100, rs2: 0 },
    InstrDesc { mnemonic: "bexti", ext: ExtSet::ZBS, shape: Shape::RegRegShamt6, opcode: 0b0010011, funct3: 0b101, funct: 0b010010, rs2: 0 },
    InstrDesc { mnemonic: "binv", ext: ExtSet::ZBS, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b001, funct: 0b0110100, rs2: 0 },
    InstrDesc { mnemonic: "binvi", ext: ExtSet::ZBS, shape: Shape::RegRegShamt6, opcode: 0b0010011, funct3: 0b001, funct: 0b011010, rs2: 0 },
    InstrDesc { mnemonic: "bset", ext: ExtSet::ZBS, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b001, funct: 0b0010100, rs2: 0 },
    InstrDesc { mnemonic: "bseti", ext: ExtSet::ZBS, shape: Shape::RegRegShamt6, opcode: 0b0010011, funct3: 0b001, funct: 0b001010, rs2: 0 },
    InstrDesc { mnemonic: "clmul", ext: ExtSet::ZBC, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b001, funct: 0b0000101, rs2: 0 },
    InstrDesc { mnemonic: "clmulh", ext: ExtSet::ZBC, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b011, funct: 0b0000101, rs2: 0 },
    InstrDesc { mnemonic: "clmulr", ext: ExtSet::ZBC, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b010, funct: 0b0000101, rs2: 0 },
    InstrDesc { mnemonic: "clz", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0010011, funct3: 0b001, funct: 0b0110000, rs2: 0b00000 },
    InstrDesc { mnemonic: "clzw", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0011011, funct3: 0b001, funct: 0b0110000, rs2: 0b00000 },
    InstrDesc { mnemonic: "cpop", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0010011, funct3: 0b001, funct: 0b0110000, rs2: 0b00010 },
    InstrDesc { mnemonic: "cpopw", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0011011, funct3: 0b001, funct: 0b0110000, rs2: 0b00010 },
    InstrDesc { mnemonic: "ctz", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0010011, funct3: 0b001, funct: 0b0110000, rs2: 0b00001 },
    InstrDesc { mnemonic: "ctzw", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0011011, funct3: 0b001, funct: 0b0110000, rs2: 0b00001 },
    InstrDesc { mnemonic: "max", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b110, funct: 0b0000101, rs2: 0 },
    InstrDesc { mnemonic: "maxu", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b111, funct: 0b0000101, rs2: 0 },
    InstrDesc { mnemonic: "min", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b100, funct: 0b0000101, rs2: 0 },
    InstrDesc { mnemonic: "minu", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b101, funct: 0b0000101, rs2: 0 },
    InstrDesc { mnemonic: "orc.b", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0010011, funct3: 0b101, funct: 0b0010100, rs2: 0b00111 },
    InstrDesc { mnemonic: "orn", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b110, funct: 0b0100000, rs2: 0 },
    InstrDesc { mnemonic: "rev8", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0010011, funct3: 0b101, funct: 0b0110101, rs2: 0b11000 },
    InstrDesc { mnemonic: "rol", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b001, funct: 0b0110000, rs2: 0 },
    InstrDesc { mnemonic: "rolw", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0111011, funct3: 0b001, funct: 0b0110000, rs2: 0 },
    InstrDesc { mnemonic: "ror", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b101, funct: 0b0110000, rs2: 0 },
    InstrDesc { mnemonic: "rori", ext: ExtSet::ZBB, shape: Shape::RegRegShamt6, opcode: 0b0010011, funct3: 0b101, funct: 0b011000, rs2: 0 },
    InstrDesc { mnemonic: "roriw", ext: ExtSet::ZBB, shape: Shape::RegRegShamt5, opcode: 0b0011011, funct3: 0b101, funct: 0b0110000, rs2: 0 },
    InstrDesc { mnemonic: "rorw", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0111011, funct3: 0b101, funct: 0b0110000, rs2: 0 },
    InstrDesc { mnemonic: "sext.b", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0010011, funct3: 0b001, funct: 0b0110000, rs2: 0b00100 },
    InstrDesc { mnemonic: "sext.h", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0010011, funct3: 0b001, funct: 0b0110000, rs2: 0b00101 },
    InstrDesc { mnemonic: "sh1add", ext: ExtSet::ZBA, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b010, funct: 0b0010000, rs2: 0 },
    InstrDesc { mnemonic: "sh1add.uw", ext: ExtSet::ZBA, shape: Shape::RegRegReg, opcode: 0b0111011, funct3: 0b010, funct: 0b0010000, rs2: 0 },
    InstrDesc { mnemonic: "sh2add", ext: ExtSet::ZBA, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b100, funct: 0b0010000, rs2: 0 },
    InstrDesc { mnemonic: "sh2add.uw", ext: ExtSet::ZBA, shape: Shape::RegRegReg, opcode: 0b0111011, funct3: 0b100, funct: 0b0010000, rs2: 0 },
    InstrDesc { mnemonic: "sh3add", ext: ExtSet::ZBA, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b110, funct: 0b0010000, rs2: 0 },
    InstrDesc { mnemonic: "sh3add.uw", ext: ExtSet::ZBA, shape: Shape::RegRegReg, opcode: 0b0111011, funct3: 0b110, funct: 0b0010000, rs2: 0 },
    InstrDesc { mnemonic: "slli.uw", ext: ExtSet::ZBA, shape: Shape::RegRegShamt6, opcode: 0b0011011, funct3: 0b001, funct: 0b000010, rs2: 0 },
    InstrDesc { mnemonic: "xnor", ext: ExtSet::ZBB, shape: Shape::RegRegReg, opcode: 0b0110011, funct3: 0b100, funct: 0b0100000, rs2: 0 },
    InstrDesc { mnemonic: "zext.h", ext: ExtSet::ZBB, shape: Shape::RegReg, opcode: 0b0111011, funct3: 0b100, funct: 0b0000100, rs2: 0b00000 },
];
