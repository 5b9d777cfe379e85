pub mod emit;
pub mod encoder;
pub mod instructions;
pub mod operand;
pub mod registers;
pub mod rewrite;

pub mod isa {
    pub mod zb; // Zba/Zbb/Zbc/Zbs descriptor tables (ratified B spec v1.0, RV64)
}

pub use instructions::{ExtSet, InstrDesc, Shape};
pub use rewrite::{Outcome, Rewriter};
