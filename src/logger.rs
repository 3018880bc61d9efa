// Joseph Prichard
// 10/16/2026
// Logging setup

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Initializer for logger, logs go to stderr so listings on stdout stay clean
pub fn init(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up the global logger: {}", e);
    }
}

// quiet wins over verbose when both are given
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}
