// Joseph Prichard
// 10/16/2026
// In-memory huffman encoder and decoder

use tracing::debug;
use crate::codes::CodeTable;
use crate::error::{CodecError, Result};
use crate::frequency::FreqTable;
use crate::header::{read_header, write_header};
use crate::tree::CodeTree;
use crate::{read, write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub header: Vec<u8>,
    pub payload: Vec<u8>,
}

impl Encoded {
    // header followed directly by payload
    #[cfg(test)]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header.len() + self.payload.len());
        bytes.extend_from_slice(&self.header);
        bytes.extend_from_slice(&self.payload);
        bytes
    }
}

// the tree and codes built from one frequency table, kept together so callers that need
// them after encoding don't rebuild them
pub struct CodeBook {
    pub table: FreqTable,
    pub tree: CodeTree,
    pub codes: CodeTable,
}

impl CodeBook {
    pub fn from_table(table: FreqTable) -> Result<CodeBook> {
        let tree = CodeTree::build(&table)?;
        let codes = CodeTable::derive(&tree);
        Ok(CodeBook { table, tree, codes })
    }
}

// Encodes input into a frequency table header and a packed payload.
pub fn encode(input: &[u8]) -> Result<Encoded> {
    let (encoded, _) = encode_with_book(input)?;
    Ok(encoded)
}

pub fn encode_with_book(input: &[u8]) -> Result<(Encoded, CodeBook)> {
    if input.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let book = CodeBook::from_table(FreqTable::count(input))?;
    debug!(symbols = book.tree.symbol_count(), bytes = input.len(), "built code tree");

    let payload = write::pack(&book.codes, input)?;
    let header = write_header(&book.table)?;
    debug!(header_len = header.len(), payload_len = payload.len(), "encoded input");

    Ok((Encoded { header, payload }, book))
}

// Decodes a payload using the tree rebuilt from `header`. The header must be exactly one
// serialized frequency table.
pub fn decode(header: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    let (table, consumed) = read_header(header)?;
    if consumed != header.len() {
        return Err(CodecError::malformed_header(format!(
            "{} trailing bytes after {} symbol entries", header.len() - consumed, table.symbol_count())));
    }
    decode_table(&table, payload)
}

// Decodes a header immediately followed by its payload.
pub fn decode_packed(bytes: &[u8]) -> Result<Vec<u8>> {
    let (table, consumed) = read_header(bytes)?;
    decode_table(&table, &bytes[consumed..])
}

pub fn decode_table(table: &FreqTable, payload: &[u8]) -> Result<Vec<u8>> {
    let tree = CodeTree::build(table)?;
    let expected = tree.root_weight();
    debug!(symbols = tree.symbol_count(), expected, payload_len = payload.len(), "rebuilt code tree");
    read::unpack(&tree, payload, expected)
}
