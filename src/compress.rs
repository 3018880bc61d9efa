// Joseph Prichard
// 10/16/2026
// Byte-by-byte file compressor

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use crate::block::ArchiveSummary;
use crate::codec::{self, CodeBook};
use crate::error::Result;
use crate::threading::{self, FileJob};
use crate::utils::{self, str_to_u64};

pub const SIG: u64 = str_to_u64("huffpack");
pub const EXT: &str = "hpk";

// the archive image: signature, header then payload
pub fn archive_bytes(input: &[u8]) -> Result<(Vec<u8>, CodeBook)> {
    let (encoded, book) = codec::encode_with_book(input)?;
    let mut archive = Vec::with_capacity(8 + encoded.header.len() + encoded.payload.len());
    archive.extend_from_slice(&SIG.to_le_bytes());
    archive.extend_from_slice(&encoded.header);
    archive.extend_from_slice(&encoded.payload);
    Ok((archive, book))
}

// Reads the whole of `reader`, then writes the compressed archive to `writer`.
pub fn compress_stream<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64> {
    let mut input = vec![];
    reader.read_to_end(&mut input)?;
    let (archive, _) = archive_bytes(&input)?;
    writer.write_all(&archive)?;
    writer.flush()?;
    Ok(archive.len() as u64)
}

pub fn compress_file(input_path: &Path, output_path: &Path) -> Result<ArchiveSummary> {
    let now = Instant::now();

    let input = fs::read(input_path)?;
    let (archive, book) = archive_bytes(&input)?;
    utils::write_atomic(output_path, &archive)?;

    let summary = ArchiveSummary::of(&input_path.display().to_string(), &book, archive.len() as u64);
    debug!(input = %input_path.display(), output = %output_path.display(),
        elapsed = ?now.elapsed(), "compressed file");
    Ok(summary)
}

// compress every job, each file is an independent operation so jobs may run in parallel
pub fn compress_files(jobs: &[FileJob], multithreaded: bool) -> Result<Vec<Result<ArchiveSummary>>> {
    let now = Instant::now();

    let pool = threading::configure_thread_pool(multithreaded, jobs.len())?;
    let results = threading::run_jobs(&pool, jobs, |job| compress_file(&job.input, &job.output));

    info!("Finished compressing {} files in {:.2?}", jobs.len(), now.elapsed());
    Ok(results)
}
