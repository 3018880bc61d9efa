// Joseph Prichard
// 10/16/2026
// Application to compress or decompress files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::{error, info};

use huffpack::error::Result;
use huffpack::threading::FileJob;
use huffpack::{block, compress, debug, decompress, logger, utils};

#[derive(Parser)]
#[command(name = "huffpack", version)]
#[command(about = "Compress and decompress files with huffman coding.", long_about = None)]
struct Cli {
    /// Log per-file detail
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress each file into <file>.hpk
    #[command(visible_alias = "c")]
    Compress {
        /// Files to compress, or - to compress stdin to stdout
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output path, only valid with a single input file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Process files in parallel
        #[arg(long)]
        mt: bool,
    },
    /// Decompress each archive, stripping the .hpk extension
    #[command(visible_alias = "d")]
    Decompress {
        /// Archives to decompress, or - to decompress stdin to stdout
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output path, only valid with a single input file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Process files in parallel
        #[arg(long)]
        mt: bool,
    },
    /// List sizes and compression ratios of archives
    #[command(visible_alias = "l")]
    List {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the code assigned to every symbol of an archive
    Codes { file: PathBuf },
}

const STDIO: &str = "-";

fn is_stdio(files: &[PathBuf]) -> bool {
    files.len() == 1 && files[0] == Path::new(STDIO)
}

// argument combinations clap cannot express on its own
fn check_usage(command: &Commands) -> std::result::Result<(), clap::Error> {
    let (files, output) = match command {
        Commands::Compress { files, output, .. } | Commands::Decompress { files, output, .. } => (files, output),
        Commands::List { .. } | Commands::Codes { .. } => return Ok(()),
    };
    let conflict = if output.is_some() && files.len() > 1 {
        Some("--output can only be used with a single input file")
    } else if files.len() > 1 && files.iter().any(|file| file == Path::new(STDIO)) {
        Some("- cannot be combined with other input files")
    } else if output.is_some() && is_stdio(files) {
        Some("--output cannot be used when reading from stdin")
    } else {
        None
    };
    match conflict {
        Some(message) => Err(Cli::command().error(ErrorKind::ArgumentConflict, message)),
        None => Ok(()),
    }
}

// pairs every input with its output, an explicit output only comes with a single input
fn create_jobs(files: &[PathBuf], output: Option<PathBuf>, name_output: impl Fn(&Path) -> PathBuf) -> Vec<FileJob> {
    files.iter()
        .map(|input| FileJob {
            input: input.clone(),
            output: output.clone().unwrap_or_else(|| name_output(input)),
        })
        .collect()
}

// logs every failed job and returns the number of failures
fn report_failures<T>(jobs: &[FileJob], results: &[Result<T>]) -> usize {
    let mut failures = 0;
    for (job, result) in jobs.iter().zip(results) {
        if let Err(e) = result {
            error!("{}: {}", job.input.display(), e);
            failures += 1;
        }
    }
    failures
}

fn run(command: Commands) -> Result<usize> {
    match command {
        Commands::Compress { files, .. } if is_stdio(&files) => {
            let len = compress::compress_stream(&mut io::stdin().lock(), &mut io::stdout().lock())?;
            info!("Wrote {} byte archive to stdout", len);
            Ok(0)
        }
        Commands::Compress { files, output, mt } => {
            let jobs = create_jobs(&files, output, |input| utils::with_added_ext(input, compress::EXT));
            let results = compress::compress_files(&jobs, mt)?;
            let summaries: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).cloned().collect();
            if !summaries.is_empty() {
                block::list_summaries(&summaries);
            }
            Ok(report_failures(&jobs, &results))
        }
        Commands::Decompress { files, .. } if is_stdio(&files) => {
            let len = decompress::decompress_stream(&mut io::stdin().lock(), &mut io::stdout().lock())?;
            info!("Restored {} bytes to stdout", len);
            Ok(0)
        }
        Commands::Decompress { files, output, mt } => {
            let jobs = create_jobs(&files, output, |input| utils::strip_or_add_ext(input, compress::EXT, "out"));
            let results = decompress::decompress_files(&jobs, mt)?;
            for (job, result) in jobs.iter().zip(&results) {
                if let Ok(len) = result {
                    info!("Restored {} bytes to {}", len, job.output.display());
                }
            }
            Ok(report_failures(&jobs, &results))
        }
        Commands::List { files } => {
            let mut summaries = vec![];
            let mut failures = 0;
            for file in &files {
                match decompress::read_summary(file) {
                    Ok(summary) => summaries.push(summary),
                    Err(e) => {
                        error!("{}: {}", file.display(), e);
                        failures += 1;
                    }
                }
            }
            block::list_summaries(&summaries);
            Ok(failures)
        }
        Commands::Codes { file } => {
            let archive = fs::read(&file)?;
            let (table, _) = decompress::open_archive(&archive)?;
            debug::print_codes(&table)?;
            Ok(0)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = check_usage(&cli.command) {
        e.exit();
    }
    logger::init(logger::level_for(cli.verbose, cli.quiet));

    match run(cli.command) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            error!("{} file(s) failed", failures);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
