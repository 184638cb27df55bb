use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use include_order::report::{self, GraphStats, OutputFormat, ReportData};
use include_order::source::{
    read_candidate_ordering, read_scoped_request, DirectorySource, DEFAULT_EXTENSION,
};

#[derive(Parser)]
#[command(name = "include-order")]
#[command(version)]
#[command(about = "Validates header include orderings against declared inter-file dependencies", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a candidate ordering of headers is achievable
    ///
    /// Without DIR, the first line of stdin names the directory and the
    /// remaining lines are the ordering.
    Check {
        /// Directory holding the known files
        dir: Option<PathBuf>,

        /// Extension of known files
        #[arg(short, long, default_value = DEFAULT_EXTENSION)]
        extension: String,

        /// Read the ordering from this file instead of stdin
        #[arg(short, long, requires = "dir")]
        candidates: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
    /// Summarize the dependency graph of a directory
    Stats {
        /// Directory holding the known files
        dir: PathBuf,

        /// Extension of known files
        #[arg(short, long, default_value = DEFAULT_EXTENSION)]
        extension: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
    /// Show version information
    Version,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Option<Commands>) -> Result<ExitCode> {
    match command {
        Some(Commands::Check {
            dir,
            extension,
            candidates,
            format,
        }) => check(dir, &extension, candidates, format),
        Some(Commands::Stats {
            dir,
            extension,
            format,
        }) => stats(dir, &extension, format),
        Some(Commands::Version) => {
            println!("include-order v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("include-order - header include order validator");
            println!("Run 'include-order check <DIR>' and pass the ordering on stdin");
            println!("Run 'include-order --help' for more information");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(
    dir: Option<PathBuf>,
    extension: &str,
    candidates: Option<PathBuf>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let (dir, names) = match (dir, candidates) {
        (Some(dir), Some(path)) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let names = read_candidate_ordering(BufReader::new(file))
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (dir, names)
        }
        (Some(dir), None) => {
            let names =
                read_candidate_ordering(io::stdin().lock()).context("Failed to read stdin")?;
            (dir, names)
        }
        (None, None) => {
            let request =
                read_scoped_request(io::stdin().lock()).context("Failed to read stdin")?;
            (PathBuf::from(request.scope), request.candidates)
        }
        (None, Some(_)) => bail!("a directory is required when --candidates is given"),
    };

    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let source = DirectorySource::with_extension(&dir, extension);
    let verdict = include_order::check_order(&source, &names)
        .with_context(|| format!("Failed to check ordering in {}", dir.display()))?;

    emit(format, ReportData::from(verdict))?;
    Ok(if verdict.correct {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn stats(dir: PathBuf, extension: &str, format: OutputFormat) -> Result<ExitCode> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let source = DirectorySource::with_extension(&dir, extension);
    let (_, graph) = include_order::load_graph(&source)
        .with_context(|| format!("Failed to load dependencies in {}", dir.display()))?;

    emit(format, ReportData::from(GraphStats::of(&graph)))?;
    Ok(ExitCode::SUCCESS)
}

fn emit(format: OutputFormat, data: ReportData) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::report(format, &data, &mut out).context("Failed to write output")?;
    out.flush().context("Failed to write output")?;
    Ok(())
}
