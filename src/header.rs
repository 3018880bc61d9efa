// Joseph Prichard
// 10/16/2026
// Binary header holding the frequency table needed to rebuild the code tree
//
// Layout, all integers little endian:
//   symbol count: u16 (1 to 256)
//   symbol count entries of { weight: u64, symbol: u8 }

use crate::error::{CodecError, Result};
use crate::frequency::{FreqTable, TABLE_SIZE};
use crate::utils::get_size_of;

pub const COUNT_SIZE: usize = 2;
pub const ENTRY_SIZE: usize = 9;

pub fn header_size(symbol_count: usize) -> usize {
    COUNT_SIZE + symbol_count * ENTRY_SIZE
}

// Serializes the present symbols of the table in ascending symbol order.
pub fn write_header(table: &FreqTable) -> Result<Vec<u8>> {
    let symbol_count = table.symbol_count();
    if symbol_count == 0 {
        return Err(CodecError::EmptyInput);
    }

    let mut header = Vec::with_capacity(header_size(symbol_count));
    header.extend_from_slice(&(symbol_count as u16).to_le_bytes());
    for (symbol, weight) in table.iter() {
        header.extend_from_slice(&weight.to_le_bytes());
        header.push(symbol);
    }
    Ok(header)
}

// cursor over header bytes that fails with a malformed header when bytes run out
struct HeaderReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> HeaderReader<'a> {
    fn take(&mut self, len: usize, field: &str) -> Result<&'a [u8]> {
        let end = self.position + len;
        if end > self.bytes.len() {
            return Err(CodecError::malformed_header(format!(
                "truncated at byte {} while reading {}", self.position, field)));
        }
        let slice = &self.bytes[self.position..end];
        self.position = end;
        Ok(slice)
    }

    fn read_u16(&mut self, field: &str) -> Result<u16> {
        let mut buffer = [0u8; 2];
        buffer.copy_from_slice(self.take(get_size_of(0u16), field)?);
        Ok(u16::from_le_bytes(buffer))
    }

    fn read_u64(&mut self, field: &str) -> Result<u64> {
        let mut buffer = [0u8; 8];
        buffer.copy_from_slice(self.take(get_size_of(0u64), field)?);
        Ok(u64::from_le_bytes(buffer))
    }

    fn read_u8(&mut self, field: &str) -> Result<u8> {
        Ok(self.take(1, field)?[0])
    }
}

// Parses a header from the front of `bytes`, returning the table and the number of bytes
// consumed. Anything after the consumed bytes is payload.
pub fn read_header(bytes: &[u8]) -> Result<(FreqTable, usize)> {
    let mut reader = HeaderReader { bytes, position: 0 };

    let symbol_count = reader.read_u16("symbol count")? as usize;
    if symbol_count == 0 {
        return Err(CodecError::EmptyInput);
    }
    if symbol_count > TABLE_SIZE {
        return Err(CodecError::malformed_header(format!(
            "symbol count {} exceeds the {} byte values", symbol_count, TABLE_SIZE)));
    }

    let mut table = FreqTable::new();
    let mut total = 0u64;
    for i in 0..symbol_count {
        let weight = reader.read_u64("weight")?;
        let symbol = reader.read_u8("symbol")?;
        if weight == 0 {
            return Err(CodecError::malformed_header(format!("entry {} for symbol {:#04x} has zero weight", i, symbol)));
        }
        if table.contains(symbol) {
            return Err(CodecError::malformed_header(format!("duplicate entry for symbol {:#04x}", symbol)));
        }
        total = total.checked_add(weight)
            .ok_or_else(|| CodecError::malformed_header("total weight overflows u64"))?;
        table.set(symbol, weight);
    }

    Ok((table, reader.position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(weight: u64, symbol: u8) -> Vec<u8> {
        let mut bytes = weight.to_le_bytes().to_vec();
        bytes.push(symbol);
        bytes
    }

    #[test]
    fn test_layout() {
        let header = write_header(&FreqTable::count(b"AAABBC")).unwrap();
        let mut expected = vec![3, 0];
        expected.extend(entry(3, b'A'));
        expected.extend(entry(2, b'B'));
        expected.extend(entry(1, b'C'));
        assert_eq!(header, expected);
        assert_eq!(header.len(), header_size(3));
    }

    #[test]
    fn test_read_reports_consumed() {
        let table = FreqTable::count(b"mississippi");
        let mut bytes = write_header(&table).unwrap();
        let header_len = bytes.len();
        bytes.extend_from_slice(&[0xFF, 0xEE]);

        let (parsed, consumed) = read_header(&bytes).unwrap();
        assert_eq!(parsed, table);
        assert_eq!(consumed, header_len);
    }

    #[test]
    fn test_digit_and_colon_symbols() {
        // symbols that look like text delimiters must not confuse parsing
        let table = FreqTable::count(b"1:2:3::00\n");
        let bytes = write_header(&table).unwrap();
        assert_eq!(read_header(&bytes).unwrap().0, table);
    }

    #[test]
    fn test_entry_order_does_not_matter() {
        let mut bytes = vec![2, 0];
        bytes.extend(entry(1, b'z'));
        bytes.extend(entry(7, b'a'));
        let (table, _) = read_header(&bytes).unwrap();
        assert_eq!(table.weight(b'a'), 7);
        assert_eq!(table.weight(b'z'), 1);
    }

    #[test]
    fn test_all_symbols() {
        let data: Vec<u8> = (0..=255u8).collect();
        let bytes = write_header(&FreqTable::count(&data)).unwrap();
        assert_eq!(&bytes[0..2], &[0, 1]);
        assert_eq!(read_header(&bytes).unwrap().0.symbol_count(), 256);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(write_header(&FreqTable::new()), Err(CodecError::EmptyInput)));
        assert!(matches!(read_header(&[0, 0]), Err(CodecError::EmptyInput)));
    }

    #[test]
    fn test_truncated() {
        let bytes = write_header(&FreqTable::count(b"AAABBC")).unwrap();
        for len in [0, 1, 5, bytes.len() - 1] {
            assert!(matches!(read_header(&bytes[..len]), Err(CodecError::MalformedHeader(_))), "len {}", len);
        }
    }

    #[test]
    fn test_duplicate_symbol() {
        let mut bytes = vec![2, 0];
        bytes.extend(entry(1, b'x'));
        bytes.extend(entry(4, b'x'));
        assert!(matches!(read_header(&bytes), Err(CodecError::MalformedHeader(_))));
    }

    #[test]
    fn test_invalid_counts_and_weights() {
        assert!(matches!(read_header(&[1, 1]), Err(CodecError::MalformedHeader(_))));

        let mut zero_weight = vec![1, 0];
        zero_weight.extend(entry(0, b'x'));
        assert!(matches!(read_header(&zero_weight), Err(CodecError::MalformedHeader(_))));

        let mut overflow = vec![2, 0];
        overflow.extend(entry(u64::MAX, b'x'));
        overflow.extend(entry(1, b'y'));
        assert!(matches!(read_header(&overflow), Err(CodecError::MalformedHeader(_))));
    }
}
