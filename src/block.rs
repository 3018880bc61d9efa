// Joseph Prichard
// 10/16/2026
// Summaries of compressed archives and the listing table

use crate::codec::CodeBook;

// represents the metadata of a single compressed archive
#[derive(Clone, Debug, PartialEq)]
pub struct ArchiveSummary {
    // name of the archive or original file
    pub name: String,
    // size of the whole archive on disk, including signature and header
    pub compressed_size: u64,
    // size of the uncompressed data
    pub original_size: u64,
    // distinct byte values in the uncompressed data
    pub symbol_count: usize,
    // length of the packed payload before padding
    pub payload_bits: u64,
}

impl ArchiveSummary {
    pub fn of(name: &str, book: &CodeBook, compressed_size: u64) -> ArchiveSummary {
        ArchiveSummary {
            name: String::from(name),
            compressed_size,
            original_size: book.tree.root_weight(),
            symbol_count: book.tree.symbol_count(),
            payload_bits: book.codes.encoded_bit_len(&book.table),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (self.compressed_size as f64) / (self.original_size as f64) * 100.0
    }
}

macro_rules! summary_row_format {
    () => ("{:>15}\t\t{:>15}\t\t{:>8}\t\t{:>7}\t\t{:25}")
}

pub fn list_summaries(summaries: &[ArchiveSummary]) {
    println!(summary_row_format!(), "compressed", "uncompressed", "ratio", "symbols", "name");
    for summary in summaries {
        let ratio_str = format!("{:.2}%", summary.ratio());
        println!(summary_row_format!(), summary.compressed_size, summary.original_size, &ratio_str,
                 summary.symbol_count, &summary.name);
    }
    println!();
}
