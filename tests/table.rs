use pretty_assertions::assert_eq;
use std::collections::HashSet;

use rvzb_rs::instructions::{coverage, lookup, Shape};
use rvzb_rs::isa::zb::TABLE;
use rvzb_rs::ExtSet;

#[test]
fn every_shape_partitions_all_32_bits() {
    for desc in TABLE {
        let bits = coverage(desc.shape)
            .unwrap_or_else(|| panic!("{}: overlapping fields", desc.mnemonic));
        assert!(bits.all(), "{}: uncovered bits", desc.mnemonic);
    }
}

#[test]
fn mnemonics_are_unique_and_sorted() {
    let names: Vec<&str> = TABLE.iter().map(|d| d.mnemonic).collect();
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn constant_fields_fit_their_widths() {
    for d in TABLE {
        assert!(d.opcode < 128, "{}: opcode", d.mnemonic);
        // all B encodings are 32-bit instructions
        assert_eq!(d.opcode & 0b11, 0b11, "{}: opcode low bits", d.mnemonic);
        assert!(d.funct3 < 8, "{}: funct3", d.mnemonic);
        let funct_width = match d.shape {
            Shape::RegRegShamt6 => 6,
            _ => 7,
        };
        assert_eq!(d.funct >> funct_width, 0, "{}: funct", d.mnemonic);
        assert!(d.rs2 < 32, "{}: rs2 selector", d.mnemonic);
        assert_eq!(d.ext.bits().count_ones(), 1, "{}: ext group", d.mnemonic);
    }
}

#[test]
fn lookup_is_exact_match_only() {
    assert!(lookup("clz").is_some());
    assert!(lookup("add.uw").is_some());
    assert!(lookup("addi").is_none());
    assert!(lookup("clzz").is_none());
    assert!(lookup("cl").is_none());
    assert!(lookup("CLZ").is_none());
}

#[test]
fn extension_groups_cover_the_documented_sets() {
    let count = |ext: ExtSet| TABLE.iter().filter(|d| d.ext == ext).count();
    assert_eq!(count(ExtSet::ZBA), 8);
    assert_eq!(count(ExtSet::ZBB), 24);
    assert_eq!(count(ExtSet::ZBC), 3);
    assert_eq!(count(ExtSet::ZBS), 8);
    assert_eq!(TABLE.len(), 43);
}
