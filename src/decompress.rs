// Joseph Prichard
// 10/16/2026
// Bit-by-bit file decompressor

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use crate::block::ArchiveSummary;
use crate::codec::{self, CodeBook};
use crate::compress::SIG;
use crate::error::{CodecError, Result};
use crate::frequency::FreqTable;
use crate::header::read_header;
use crate::threading::{self, FileJob};
use crate::utils::{self, get_size_of};

// checks the signature and splits an archive into its frequency table and payload
pub fn open_archive(archive: &[u8]) -> Result<(FreqTable, &[u8])> {
    let sig_len = get_size_of(SIG);
    if archive.len() < sig_len {
        return Err(CodecError::malformed_header(format!(
            "archive is {} bytes, too short for a signature", archive.len())));
    }
    let mut sig = [0u8; 8];
    sig.copy_from_slice(&archive[0..sig_len]);
    let sig = u64::from_le_bytes(sig);
    if sig != SIG {
        return Err(CodecError::BadSignature(sig));
    }

    let (table, consumed) = read_header(&archive[sig_len..])?;
    Ok((table, &archive[sig_len + consumed..]))
}

pub fn unarchive_bytes(archive: &[u8]) -> Result<Vec<u8>> {
    let (table, payload) = open_archive(archive)?;
    codec::decode_table(&table, payload)
}

pub fn decompress_stream<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64> {
    let mut archive = vec![];
    reader.read_to_end(&mut archive)?;
    let output = unarchive_bytes(&archive)?;
    writer.write_all(&output)?;
    writer.flush()?;
    Ok(output.len() as u64)
}

pub fn decompress_file(input_path: &Path, output_path: &Path) -> Result<u64> {
    let now = Instant::now();

    let archive = fs::read(input_path)?;
    let output = unarchive_bytes(&archive)?;
    utils::write_atomic(output_path, &output)?;

    debug!(input = %input_path.display(), output = %output_path.display(),
        elapsed = ?now.elapsed(), "decompressed file");
    Ok(output.len() as u64)
}

pub fn decompress_files(jobs: &[FileJob], multithreaded: bool) -> Result<Vec<Result<u64>>> {
    let now = Instant::now();

    let pool = threading::configure_thread_pool(multithreaded, jobs.len())?;
    let results = threading::run_jobs(&pool, jobs, |job| decompress_file(&job.input, &job.output));

    info!("Finished decompressing {} files in {:.2?}", jobs.len(), now.elapsed());
    Ok(results)
}

// reads only what is needed from an archive to describe it
pub fn read_summary(archive_path: &Path) -> Result<ArchiveSummary> {
    let archive = fs::read(archive_path)?;
    let (table, _) = open_archive(&archive)?;
    let book = CodeBook::from_table(table)?;
    Ok(ArchiveSummary::of(&archive_path.display().to_string(), &book, archive.len() as u64))
}
