// Joseph Prichard
// 10/16/2026
// Printing of the code table rebuilt from an archive header

use crate::codes::CodeTable;
use crate::error::Result;
use crate::frequency::FreqTable;
use crate::tree::CodeTree;

pub struct CodeRow {
    pub symbol: u8,
    pub weight: u64,
    pub code: String,
}

pub fn code_rows(table: &FreqTable) -> Result<Vec<CodeRow>> {
    let codes = CodeTable::derive(&CodeTree::build(table)?);
    let mut rows: Vec<CodeRow> = codes
        .iter()
        .map(|(symbol, code)| CodeRow { symbol, weight: table.weight(symbol), code: code.to_string() })
        .collect();
    // most frequent first, so the shortest codes lead
    rows.sort_by(|a, b| b.weight.cmp(&a.weight).then(a.symbol.cmp(&b.symbol)));
    Ok(rows)
}

pub fn format_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        format!("{:#04x} '{}'", symbol, symbol as char)
    } else {
        format!("{:#04x}", symbol)
    }
}

pub fn print_codes(table: &FreqTable) -> Result<()> {
    println!("{:>12}\t{:>15}\t{:>6}\t{}", "symbol", "weight", "bits", "code");
    for row in code_rows(table)? {
        println!("{:>12}\t{:>15}\t{:>6}\t{}", format_symbol(row.symbol), row.weight, row.code.len(), row.code);
    }
    println!();
    Ok(())
}
