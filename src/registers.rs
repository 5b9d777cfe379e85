/// Resolve an architectural register name to its 5-bit index.
///
/// Accepts `x0`..`x31` and the standard ABI aliases. Matching is
/// case-sensitive; anything else (including `x32` and beyond) is `None`.
pub fn parse_reg(name: &str) -> Option<u8> {
    let idx = match name {
        "zero" => 0,
        "ra" => 1,
        "sp" => 2,
        "gp" => 3,
        "tp" => 4,
        "t0" => 5,
        "t1" => 6,
        "t2" => 7,
        "s0" | "fp" => 8, // s0 == fp
        "s1" => 9,
        "a0" => 10,
        "a1" => 11,
        "a2" => 12,
        "a3" => 13,
        "a4" => 14,
        "a5" => 15,
        "a6" => 16,
        "a7" => 17,
        "s2" => 18,
        "s3" => 19,
        "s4" => 20,
        "s5" => 21,
        "s6" => 22,
        "s7" => 23,
        "s8" => 24,
        "s9" => 25,
        "s10" => 26,
        "s11" => 27,
        "t3" => 28,
        "t4" => 29,
        "t5" => 30,
        "t6" => 31,
        _ => {
            let n = name.strip_prefix('x')?.parse::<u8>().ok()?;
            if n > 31 {
                return None;
            }
            return Some(n);
        }
    };
    Some(idx)
}
