/// Render one 32-bit instruction word as a `.byte` directive, least
/// significant byte first, in the exact form a hand-written listing uses.
pub fn render_word(word: u32) -> String {
    let b = word.to_le_bytes();
    format!(
        ".byte 0x{:02x},0x{:02x},0x{:02x},0x{:02x}",
        b[0], b[1], b[2], b[3]
    )
}

/// R-type field breakdown in binary, for debug diagnostics.
pub fn field_dump(word: u32) -> String {
    let bits = |lo: u32, width: u32| {
        let v = (word >> lo) & ((1 << width) - 1);
        format!("{v:0width$b}", width = width as usize)
    };
    format!(
        "funct7: {} rs2: {} rs1: {} funct3: {} rd: {} opcode: {}",
        bits(25, 7),
        bits(20, 5),
        bits(15, 5),
        bits(12, 3),
        bits(7, 5),
        bits(0, 7)
    )
}
