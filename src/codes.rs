// Joseph Prichard
// 10/16/2026
// Symbol codes derived from the code tree

use std::fmt;
use crate::bitwise::{get_bit, set_bit};
use crate::frequency::{FreqTable, TABLE_SIZE};
use crate::tree::{CodeTree, NodeKind};

// a growable bit string, bits are packed most significant first
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct SymbolCode {
    packed: Vec<u8>,
    bit_len: usize,
}

impl SymbolCode {
    pub fn new() -> SymbolCode {
        SymbolCode { packed: vec![], bit_len: 0 }
    }

    pub fn append_bit(&self, bit: u8) -> SymbolCode {
        let mut code = self.clone();
        code.push(bit);
        code
    }

    pub fn push(&mut self, bit: u8) {
        let offset = (self.bit_len % 8) as u32;
        if offset == 0 {
            self.packed.push(0);
        }
        if bit > 0 {
            let last = self.packed.len() - 1;
            self.packed[last] = set_bit(self.packed[last], offset);
        }
        self.bit_len += 1;
    }

    pub fn bit(&self, i: usize) -> u8 {
        get_bit(self.packed[i / 8], (i % 8) as u32)
    }

    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.bit_len).map(|i| self.bit(i))
    }

    pub fn len(&self) -> usize {
        self.bit_len
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    #[cfg(test)]
    pub fn is_prefix_of(&self, other: &SymbolCode) -> bool {
        self.bit_len <= other.bit_len && (0..self.bit_len).all(|i| self.bit(i) == other.bit(i))
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

pub struct CodeTable {
    codes: Vec<Option<SymbolCode>>,
}

impl CodeTable {
    // Walks every root-to-leaf path of the tree, assigning the path taken to the leaf's symbol.
    // A left edge appends a 0 and a right edge appends a 1. A single leaf root gets the empty code.
    pub fn derive(tree: &CodeTree) -> CodeTable {
        let mut codes = vec![None; TABLE_SIZE];
        let mut stack = vec![(tree.root(), SymbolCode::new())];

        while let Some((index, code)) = stack.pop() {
            match tree.node(index).kind {
                NodeKind::Leaf { symbol } => codes[symbol as usize] = Some(code),
                NodeKind::Internal { left, right } => {
                    stack.push((right, code.append_bit(1)));
                    stack.push((left, code.append_bit(0)));
                }
            }
        }
        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&SymbolCode> {
        self.codes[symbol as usize].as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &SymbolCode)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, code)| code.as_ref().map(|code| (s as u8, code)))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // number of payload bits the table produces for input with these frequencies
    pub fn encoded_bit_len(&self, table: &FreqTable) -> u64 {
        self.iter()
            .map(|(symbol, code)| table.weight(symbol) * code.len() as u64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn derive(data: &[u8]) -> CodeTable {
        CodeTable::derive(&CodeTree::build(&FreqTable::count(data)).unwrap())
    }

    #[test]
    fn test_symbol_code() {
        let code = SymbolCode::new().append_bit(1).append_bit(0).append_bit(1);
        assert_eq!(code.len(), 3);
        assert_eq!(code.to_string(), "101");
        assert!(SymbolCode::new().append_bit(1).is_prefix_of(&code));
        assert!(!SymbolCode::new().append_bit(0).is_prefix_of(&code));
    }

    #[test]
    fn test_long_code() {
        // no ceiling on code length
        let mut code = SymbolCode::new();
        for i in 0..300 {
            code.push((i % 3 == 0) as u8);
        }
        assert_eq!(code.len(), 300);
        assert_eq!(code.bit(0), 1);
        assert_eq!(code.bit(298), 0);
        assert_eq!(code.bit(297), 1);
    }

    #[test]
    fn test_example_codes() {
        let codes = derive(b"AAABBC");
        assert_eq!(codes.get(b'A').unwrap().to_string(), "0");
        assert_eq!(codes.get(b'C').unwrap().to_string(), "10");
        assert_eq!(codes.get(b'B').unwrap().to_string(), "11");
        assert!(codes.get(b'D').is_none());
        assert_eq!(codes.len(), 3);
    }

    #[test]
    fn test_single_symbol_code_is_empty() {
        let codes = derive(b"ZZZZZ");
        assert!(codes.get(b'Z').unwrap().is_empty());
        assert_eq!(codes.len(), 1);
    }

    #[test]
    fn test_prefix_free() {
        let mut rng = rand::thread_rng();
        let data: Vec<u8> = (0..5000).map(|_| rng.gen_range(0..64) * rng.gen_range(1..4)).collect();
        let table = FreqTable::count(&data);
        let codes = derive(&data);
        assert_eq!(codes.len(), table.symbol_count());

        for (a, code_a) in codes.iter() {
            for (b, code_b) in codes.iter() {
                if a != b {
                    assert!(!code_a.is_prefix_of(code_b), "{} is a prefix of {}", code_a, code_b);
                }
            }
        }
    }

    #[test]
    fn test_skewed_weights_make_deep_codes() {
        // fibonacci weights produce a maximally unbalanced tree
        let mut table = FreqTable::new();
        let (mut a, mut b) = (1u64, 1u64);
        for symbol in 0..40u8 {
            table.set(symbol, a);
            (a, b) = (b, a + b);
        }
        let codes = CodeTable::derive(&CodeTree::build(&table).unwrap());
        let longest = codes.iter().map(|(_, code)| code.len()).max().unwrap();
        assert_eq!(longest, 39);
    }

    #[test]
    fn test_encoded_bit_len() {
        let table = FreqTable::count(b"AAABBC");
        let codes = CodeTable::derive(&CodeTree::build(&table).unwrap());
        // 3 * 1 + 2 * 2 + 1 * 2
        assert_eq!(codes.encoded_bit_len(&table), 9);
    }
}
