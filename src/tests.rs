use voxell_rng::rng::XorShift128;

use crate::code::CodeTable;
use crate::codec;
use crate::freq::FrequencyTable;
use crate::tree::CodeTree;

pub const SHORT_DATA: &[u8] = b"Hello, World!";
pub const LONG_DATA: &[u8] =
    b"This is a longer string to test the greedy code construction. It should be able to handle various lengths and characters.";
pub const RNG_DATA: &[u8] = &const {
    let mut arr = [0u8; 1000];
    let mut rng = XorShift128::new(0xdeadcafe);
    let mut i = 0;
    while i < 1000 {
        let data = rng.peek_next_u64();
        arr[i] = (data & 0xFF) as u8;
        rng = XorShift128::new(data);
        i += 1;
    }
    arr
};
pub const REPEATING_DATA: &[u8] = b"a baba da babble da dabble babble doo bee babble dabble dooble dee boo dooble daddle boo";
pub const SINGLE_SYMBOL_DATA: &[u8] = &[b'A'; 64];
pub const EMPTY_DATA: &[u8] = &[];

pub const TEST_CASES: &[(&[u8], &str)] = &[
    (REPEATING_DATA, "repeating data"),
    (SHORT_DATA, "short data"),
    (LONG_DATA, "long data"),
    (RNG_DATA, "rng data"),
    (SINGLE_SYMBOL_DATA, "single symbol data"),
    (EMPTY_DATA, "empty data"),
];

/// Counts `data`, builds the weighted tree, and collects its code table.
/// `None` for empty input, which has no tree at all.
pub fn build(data: &[u8]) -> Option<(FrequencyTable, CodeTree, CodeTable)> {
    let table = FrequencyTable::count(data);
    let tree = CodeTree::from_table(&table)?;
    let codes = tree.code_table().expect("weights are assigned by from_table");
    Some((table, tree, codes))
}

pub fn roundtrip_test(data: &[u8], name: &str) {
    let Some((_, tree, codes)) = build(data) else {
        assert!(data.is_empty(), "non-empty input '{}' must produce a tree", name);
        return;
    };
    assert_prefix_free(&codes);

    let bits = codec::encode(data, &codes)
        .unwrap_or_else(|e| panic!("failed to encode '{}': {}", name, e));
    let decoded = codec::decode(&bits, &tree)
        .unwrap_or_else(|e| panic!("failed to decode '{}': {}", name, e));
    assert_eq!(
        decoded, data,
        "roundtrip for '{}' did not reproduce the original data",
        name
    );
}

/// No code may be a prefix of another; otherwise the decoder walk would be
/// ambiguous.
pub fn assert_prefix_free(codes: &CodeTable) {
    for (a_symbol, a) in codes.iter() {
        for (b_symbol, b) in codes.iter() {
            if a_symbol == b_symbol {
                continue;
            }
            assert!(
                !b.bits().starts_with(a.bits()),
                "code {} of {:#04x} is a prefix of code {} of {:#04x}",
                a,
                a_symbol,
                b,
                b_symbol
            );
        }
    }
}
