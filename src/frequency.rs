// Joseph Prichard
// 10/16/2026
// Byte frequency table used to build the code tree

pub const TABLE_SIZE: usize = 256;

// weight of every byte value, a zero weight means the symbol is absent
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FreqTable {
    weights: Box<[u64; TABLE_SIZE]>,
}

impl FreqTable {
    pub fn new() -> FreqTable {
        FreqTable { weights: Box::new([0u64; TABLE_SIZE]) }
    }

    pub fn count(bytes: &[u8]) -> FreqTable {
        let mut table = FreqTable::new();
        // iterate through each byte and increment count
        for &byte in bytes {
            table.weights[byte as usize] += 1;
        }
        table
    }

    pub fn weight(&self, symbol: u8) -> u64 {
        self.weights[symbol as usize]
    }

    pub fn set(&mut self, symbol: u8, weight: u64) {
        self.weights[symbol as usize] = weight;
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.weights[symbol as usize] > 0
    }

    // present symbols with their weights, in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0)
            .map(|(s, &w)| (s as u8, w))
    }

    pub fn symbol_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }

    #[cfg(test)]
    pub fn total(&self) -> u64 {
        self.weights.iter().sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.symbol_count() == 0
    }
}

impl Default for FreqTable {
    fn default() -> Self {
        Self::new()
    }
}
