use clap::Parser;
use fuzzscout::{search_with, ExtensionSet, SearchConfig, SearchError};
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, SearchError>;

/// Concurrent fuzzy line search across a directory tree
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to search
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Fuzzy pattern to search for (case-sensitive)
    #[arg(long, default_value = "")]
    pattern: String,

    /// Number of concurrent scan workers (default: number of CPU cores)
    #[arg(long)]
    workers: Option<i64>,

    /// Comma-separated file extensions to include, with leading dot (e.g. .go,.txt)
    #[arg(long, default_value = "")]
    ext: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.pattern.is_empty() {
        println!("Please provide a search pattern using the --pattern flag.");
        return Ok(());
    }

    let worker_count = resolve_worker_count(cli.workers);

    let config = SearchConfig::new(cli.pattern, cli.path)
        .with_worker_count(worker_count)
        .with_extensions(ExtensionSet::parse(&cli.ext));

    search_with(&config, |result| println!("{}", result))
}

/// A non-positive worker count is corrected to the full default rather
/// than rejected.
fn resolve_worker_count(requested: Option<i64>) -> NonZeroUsize {
    let default = num_cpus::get().max(1);
    let count = match requested {
        Some(n) if n <= 0 => {
            println!(
                "Number of workers must be greater than 0. Using default of {} CPU cores.",
                default
            );
            default
        }
        Some(n) => n as usize,
        None => default,
    };
    NonZeroUsize::new(count).unwrap_or_else(|| NonZeroUsize::new(1).unwrap())
}
