//! In-memory bit encoding and decoding against a finished code tree.
//!
//! These operate on bit sequences, not packed byte streams; framing and any
//! on-disk layout belong to the callers on either side.

use bitvec::prelude::*;

use crate::code::{Bits, CodeTable};
use crate::tree::CodeTree;
use crate::{HuffmanError, Result};

if_tracing! {
    use tracing::debug;
}

/// Replaces every input symbol with its assigned code.
///
/// # Errors
///
/// Returns [`HuffmanError::MissingCode`] for a symbol the table does not
/// cover.
pub fn encode(symbols: &[u8], table: &CodeTable) -> Result<Bits> {
    if_tracing! {
        debug!(target = "codec", input_len = symbols.len(), "encode start");
    }
    let mut bits = Bits::new();
    for &symbol in symbols {
        let code = table.get(symbol).ok_or(HuffmanError::MissingCode(symbol))?;
        bits.extend_from_bitslice(code.bits());
    }
    if_tracing! {
        debug!(target = "codec", input_len = symbols.len(), output_bits = bits.len(), "encode complete");
    }
    Ok(bits)
}

/// Walks the tree bit by bit from the root, emitting a symbol at every leaf
/// reached and restarting from the root.
///
/// A tree whose root is itself a leaf (single-symbol alphabet) yields its
/// symbol once per consumed bit, matching the one-bit code the encoder
/// produces for it.
///
/// # Errors
///
/// Returns [`HuffmanError::TruncatedInput`] when the bit sequence ends in
/// the middle of a code word.
pub fn decode(bits: &BitSlice<u8, Msb0>, tree: &CodeTree) -> Result<Vec<u8>> {
    if_tracing! {
        debug!(target = "codec", input_bits = bits.len(), "decode start");
    }
    if let Some(symbol) = tree.node(tree.root()).symbol() {
        return Ok(vec![symbol; bits.len()]);
    }

    let mut decoded = Vec::new();
    let mut cursor = tree.root();
    for bit in bits.iter().by_vals() {
        // cursor is always internal here: the walk restarts at the root
        // after every emitted symbol, and the root is internal
        let Some((left, right)) = tree.node(cursor).children() else {
            break;
        };
        cursor = if bit { right } else { left };
        if let Some(symbol) = tree.node(cursor).symbol() {
            decoded.push(symbol);
            cursor = tree.root();
        }
    }
    if cursor != tree.root() {
        return Err(HuffmanError::TruncatedInput);
    }
    if_tracing! {
        debug!(target = "codec", input_bits = bits.len(), output_len = decoded.len(), "decode complete");
    }
    Ok(decoded)
}
