//! Greedy prefix-free code construction.
//!
//! Given a finalized symbol-to-frequency mapping, this crate builds the binary
//! code tree by repeatedly merging the two lowest-frequency forest entries,
//! then stamps every leaf with its root-to-leaf bit path (0 for a left edge,
//! 1 for a right edge). Downstream encoders consume the resulting
//! [`CodeTable`](code::CodeTable); decoders walk the finished
//! [`CodeTree`](tree::CodeTree) bit by bit.
//!
//! Byte-stream packing and any on-disk format are out of scope here; the
//! [`codec`] module works on in-memory bit sequences only.

use thiserror::Error;

#[macro_export]
macro_rules! if_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(feature = "tracing")] {
                $($body)*
            }
        }
    };
}

pub mod cli;
pub mod code;
pub mod codec;
pub mod display;
pub mod freq;
pub mod stats;
pub mod tree;

#[cfg(test)]
pub mod tests;

/// Represents a precondition violation detected while building or using a
/// code table. None of these are recoverable mid-algorithm; the caller must
/// fix the input and retry from scratch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// The seed mapping named the same symbol twice.
    #[error("symbol {0:#04x} appears more than once in the frequency table")]
    DuplicateSymbol(u8),

    /// The seed mapping carried a symbol that never occurs.
    #[error("symbol {0:#04x} has a zero frequency")]
    ZeroFrequency(u8),

    /// The encoder was handed a symbol the code table knows nothing about.
    #[error("symbol {0:#04x} has no assigned code")]
    MissingCode(u8),

    /// The bit sequence ran out in the middle of a code word.
    #[error("bit sequence ended in the middle of a code")]
    TruncatedInput,

    /// The tree was queried for codes before any weight assignment ran.
    #[error("weights have not been assigned to this tree yet")]
    WeightsNotAssigned,

    /// A textual code contained something other than '0' or '1'.
    #[error("invalid character {0:?} in code string; expected '0' or '1'")]
    InvalidCodeString(char),
}

pub type Result<T, E = HuffmanError> = core::result::Result<T, E>;
