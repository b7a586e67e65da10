use core::fmt;
use core::fmt::Write as _;
use core::str::FromStr;
use std::collections::BTreeMap;

use bitvec::prelude::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{HuffmanError, Result};

/// Bit container used for code paths and encoded streams.
pub type Bits = BitVec<u8, Msb0>;

/// The weight assigned to one leaf: the root-to-leaf path through the code
/// tree, 0 for a left edge and 1 for a right edge.
///
/// The path storage grows dynamically; a degenerate tree (strictly
/// increasing frequencies) can be as deep as the alphabet is large, so no
/// fixed-capacity buffer would do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Code {
    bits: Bits,
}

impl Code {
    pub(crate) fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Bits from the root downwards, `false` for left and `true` for right.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        let mut code = Self::default();
        for ch in s.chars() {
            match ch {
                '0' => code.push(false),
                '1' => code.push(true),
                other => return Err(HuffmanError::InvalidCodeString(other)),
            }
        }
        Ok(code)
    }
}

// codes travel as '0'/'1' strings so an exported table stays readable
impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// The symbol -> code mapping collected from a completed tree, consumed by
/// whatever replaces input symbols with their codes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub(crate) fn insert(&mut self, symbol: u8, code: Code) {
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }
}
