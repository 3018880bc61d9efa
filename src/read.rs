// Joseph Prichard
// 10/16/2026
// Reader implementing a bit layer, used to walk the code tree over the payload

use crate::bitwise::get_bit;
use crate::error::{CodecError, Result};
use crate::tree::CodeTree;

pub struct BitReader<'a> {
    // the bytes to read from
    data: &'a [u8],
    // the total number of bits read
    read_len: u64,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> BitReader<'a> {
        BitReader { data, read_len: 0 }
    }

    #[cfg(test)]
    pub fn read_len(&self) -> u64 {
        self.read_len
    }

    pub fn eof(&self) -> bool {
        self.read_len >= (self.data.len() as u64) * 8
    }

    pub fn read_bit(&mut self) -> Option<u8> {
        if self.eof() {
            return None;
        }
        let byte = self.data[(self.read_len / 8) as usize];
        let bit = get_bit(byte, (self.read_len % 8) as u32);
        self.read_len += 1;
        Some(bit)
    }
}

// Decodes exactly `expected` symbols by walking the tree one payload bit at a time.
//
// Bits left over in the final byte are padding and never read. A tree with a single leaf
// needs no payload at all: the symbol is repeated `expected` times.
pub fn unpack(tree: &CodeTree, payload: &[u8], expected: u64) -> Result<Vec<u8>> {
    let root = tree.root();

    if let Some(symbol) = tree.symbol(root) {
        return repeat_symbol(symbol, expected);
    }

    // a payload bit can produce at most one symbol, this bounds preallocation for bad headers
    let capacity = expected.min(payload.len() as u64 * 8) as usize;
    let mut output = Vec::with_capacity(capacity);
    let mut reader = BitReader::new(payload);
    let mut current = root;
    let mut decoded = 0u64;

    while decoded < expected {
        let bit = reader.read_bit()
            .ok_or(CodecError::TruncatedPayload { decoded, expected })?;
        // invariant: the walk restarts at the root after every leaf so current is internal here
        current = tree.child(current, bit)
            .ok_or_else(|| CodecError::malformed_input("tree walk stepped past a leaf"))?;
        if let Some(symbol) = tree.symbol(current) {
            output.push(symbol);
            decoded += 1;
            current = root;
        }
    }
    Ok(output)
}

// the output of a single leaf tree, the header weight alone decides its size so the
// allocation is fallible
fn repeat_symbol(symbol: u8, expected: u64) -> Result<Vec<u8>> {
    let too_large = || CodecError::malformed_header(format!("{} symbols cannot fit in memory", expected));
    let len = usize::try_from(expected).map_err(|_| too_large())?;
    let mut output = Vec::new();
    output.try_reserve_exact(len).map_err(|_| too_large())?;
    output.resize(len, symbol);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FreqTable;

    #[test]
    fn test_read_bits_msb_first() {
        let data = [0b1000_0001, 0b0100_0000];
        let mut reader = BitReader::new(&data);
        let bits: Vec<u8> = std::iter::from_fn(|| reader.read_bit()).collect();
        assert_eq!(bits, vec![1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0]);
        assert!(reader.eof());
        assert_eq!(reader.read_len(), 16);
    }

    #[test]
    fn test_unpack_ignores_padding() {
        let tree = CodeTree::build(&FreqTable::count(b"AAABBC")).unwrap();
        // the trailing zeros would decode as extra A symbols if read
        let output = unpack(&tree, &[0b0001_1111, 0b0000_0000], 6).unwrap();
        assert_eq!(output, b"AAABBC");
    }

    #[test]
    fn test_unpack_truncated() {
        let tree = CodeTree::build(&FreqTable::count(b"AAABBC")).unwrap();
        match unpack(&tree, &[0b0001_1111], 6) {
            Err(CodecError::TruncatedPayload { decoded, expected }) => {
                assert_eq!(decoded, 5);
                assert_eq!(expected, 6);
            }
            other => panic!("Expected truncated payload, got {:?}", other),
        }
    }

    #[test]
    fn test_unpack_single_leaf() {
        let tree = CodeTree::build(&FreqTable::count(b"QQQ")).unwrap();
        assert_eq!(unpack(&tree, &[], 3).unwrap(), b"QQQ");
    }

    #[test]
    fn test_unpack_single_leaf_weight_too_large() {
        let mut table = FreqTable::new();
        table.set(b'A', 1u64 << 63);
        let tree = CodeTree::build(&table).unwrap();
        assert!(matches!(unpack(&tree, &[], 1u64 << 63), Err(CodecError::MalformedHeader(_))));
    }
}
