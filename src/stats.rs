use crate::code::CodeTable;
use crate::freq::FrequencyTable;

/// Analytic size estimate for a code table applied to the input its
/// frequency table was counted from. Computed from counts and code lengths
/// alone; no byte stream is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodeStats {
    /// Distinct symbols in the input.
    pub symbol_count: usize,
    /// Input size in bits, at 8 bits per symbol occurrence.
    pub input_bits: u64,
    /// Total bits after replacing every occurrence with its code.
    pub encoded_bits: u64,
}

impl CodeStats {
    pub fn measure(table: &FrequencyTable, codes: &CodeTable) -> Self {
        let mut encoded_bits = 0;
        for (symbol, frequency) in table.iter() {
            if let Some(code) = codes.get(symbol) {
                encoded_bits += frequency * code.len() as u64;
            }
        }
        Self {
            symbol_count: table.len(),
            input_bits: table.total() * 8,
            encoded_bits,
        }
    }

    /// Encoded/original size ratio, 0.0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bits == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.input_bits as f64
    }
}
