#![warn(missing_docs)]
//! acbench CLI Library
//!
//! Command-line harness: loads the adapters and scenarios, runs the
//! measurement matrix and writes the reports. Binaries call [`run`] after
//! installing [`TrackingAllocator`](acbench_core::TrackingAllocator) as the
//! global allocator so memory deltas are observable.
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: acbench_core::TrackingAllocator = acbench_core::TrackingAllocator;
//!
//! fn main() -> anyhow::Result<()> {
//!     acbench_cli::run()
//! }
//! ```

mod config;

pub use config::{AcbenchConfig, CONFIG_FILE, OutputConfig};

use acbench_adapters::{load_adapters, registered_adapters};
use acbench_core::{AllocatorProbe, HeapProbe, Runner, RunnerConfig};
use acbench_corpus::{
    GUTENBERG_URL, SCENARIO_NAMES, SetupOutcome, load_scenarios, setup_large_corpus,
};
use acbench_report::{OutputFormat, Report, render, write_reports};
use anyhow::Context;
use clap::{Parser, Subcommand};
use regex::Regex;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// acbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "acbench")]
#[command(author, version, about = "acbench - multi-pattern string matching benchmark")]
pub struct Cli {
    /// Optional subcommand (Run, List, Init, SetupCorpus); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use reduced iteration counts for development
    #[arg(long)]
    pub quick: bool,

    /// Only run adapters whose name matches this regex
    #[arg(long)]
    pub adapters: Option<String>,

    /// Only run scenarios whose name matches this regex
    #[arg(long)]
    pub scenarios: Option<String>,

    /// Timed compile() calls per pair
    #[arg(long)]
    pub compile_iterations: Option<usize>,

    /// Untimed search passes before sampling
    #[arg(long)]
    pub warmup_iterations: Option<usize>,

    /// Timed search passes per pair
    #[arg(long)]
    pub search_iterations: Option<usize>,

    /// Output directory for report files
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Terminal output format: human, json, csv, markdown
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Configuration file (default: discover acbench.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the benchmark matrix (default)
    Run,
    /// List registered adapters and scenarios
    List,
    /// Print a default acbench.toml
    Init,
    /// Download the real-world large text to the configured path
    SetupCorpus {
        /// Plain-text Project Gutenberg URL to fetch
        #[arg(long, default_value = GUTENBERG_URL)]
        url: String,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Fallback location when the config disables the large text path
const DEFAULT_LARGE_TEXT_PATH: &str = "corpus/large.txt";

/// Run the acbench CLI with the process arguments
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the acbench CLI with pre-parsed arguments
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => AcbenchConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => AcbenchConfig::discover().unwrap_or_default(),
    };

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", AcbenchConfig::default_toml());
            Ok(())
        }
        Some(Commands::List) => list(&cli),
        Some(Commands::SetupCorpus { ref url, force }) => {
            let dest = config
                .corpus
                .large_text_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LARGE_TEXT_PATH));
            setup_corpus(url, &dest, force)
        }
        Some(Commands::Run) | None => {
            let loaded = run_benchmarks(&cli, &config)?;
            if loaded == 0 {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "acbench=debug" } else { "acbench=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layer the runner configuration: file, then `--quick`, then explicit flags
pub fn resolve_runner_config(cli: &Cli, config: &AcbenchConfig) -> anyhow::Result<RunnerConfig> {
    let mut runner = if cli.quick {
        RunnerConfig {
            outlier_factor: config.runner.outlier_factor,
            ..RunnerConfig::quick()
        }
    } else {
        config.runner.clone()
    };

    if let Some(n) = cli.compile_iterations {
        runner.compile_iterations = n;
    }
    if let Some(n) = cli.warmup_iterations {
        runner.search_warmup_iterations = n;
    }
    if let Some(n) = cli.search_iterations {
        runner.search_iterations = n;
    }

    runner.validate()?;
    Ok(runner)
}

fn compile_filter(pattern: Option<&str>, what: &str) -> anyhow::Result<Option<Regex>> {
    pattern
        .map(|p| Regex::new(p).with_context(|| format!("invalid {what} filter: {p}")))
        .transpose()
}

fn list(cli: &Cli) -> anyhow::Result<()> {
    let adapter_filter = compile_filter(cli.adapters.as_deref(), "adapter")?;
    let scenario_filter = compile_filter(cli.scenarios.as_deref(), "scenario")?;

    println!("Adapters:");
    for def in registered_adapters() {
        if adapter_filter.as_ref().is_some_and(|re| !re.is_match(def.name)) {
            continue;
        }
        let availability = match def.load() {
            Ok(_) => "available".to_string(),
            Err(e) => e.to_string(),
        };
        println!("├── {} [{}] ({})", def.name, def.package_name, availability);
    }

    println!("Scenarios:");
    for name in SCENARIO_NAMES {
        if scenario_filter.as_ref().is_some_and(|re| !re.is_match(name)) {
            continue;
        }
        println!("├── {}", name);
    }
    Ok(())
}

fn setup_corpus(url: &str, dest: &Path, force: bool) -> anyhow::Result<()> {
    match setup_large_corpus(url, dest, force)? {
        SetupOutcome::AlreadyPresent => {
            eprintln!(
                "{} already exists; pass --force to download again",
                dest.display()
            );
        }
        SetupOutcome::Written { bytes } => {
            eprintln!("Saved {:.1} KB to {}", bytes as f64 / 1024.0, dest.display());
        }
    }
    Ok(())
}

/// Run the matrix and write reports; returns the number of adapters loaded
fn run_benchmarks(cli: &Cli, config: &AcbenchConfig) -> anyhow::Result<usize> {
    let runner_config = resolve_runner_config(cli, config)?;
    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let adapter_filter = compile_filter(cli.adapters.as_deref(), "adapter")?;
    let scenario_filter = compile_filter(cli.scenarios.as_deref(), "scenario")?;

    tracing::info!(
        mode = if cli.quick { "quick" } else { "full" },
        compile_iterations = runner_config.compile_iterations,
        warmup_iterations = runner_config.search_warmup_iterations,
        search_iterations = runner_config.search_iterations,
        "Configuration"
    );

    if !AllocatorProbe.is_available() {
        tracing::warn!(
            "TrackingAllocator is not the global allocator; memory deltas will read as zero"
        );
    }

    let mut adapters = load_adapters(adapter_filter.as_ref());
    if adapters.is_empty() {
        eprintln!("No adapters loaded! Check the --adapters filter and enabled features.");
        return Ok(0);
    }
    tracing::info!(count = adapters.len(), "Adapters loaded");

    let mut scenarios = load_scenarios(&config.corpus)?;
    if let Some(re) = &scenario_filter {
        scenarios.retain(|s| re.is_match(&s.name));
    }
    tracing::info!(count = scenarios.len(), "Scenarios loaded");

    let start = Instant::now();
    let outcome = Runner::new(runner_config.clone())
        .with_progress(!cli.verbose && std::io::stderr().is_terminal())
        .run(&mut adapters, &scenarios);
    tracing::info!(
        pairs = outcome.results.len(),
        seconds = start.elapsed().as_secs_f64(),
        "All benchmarks completed"
    );

    let report = Report::new(outcome, &runner_config);
    print!("{}", render(&report, format)?);

    let dir = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory));
    let written = write_reports(&report, &dir, &config.output.formats)?;
    if !written.is_empty() {
        eprintln!("\nResults written to:");
        for path in &written {
            eprintln!("  {}", path.display());
        }
    }

    Ok(adapters.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("acbench").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_command_is_run() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.format, "human");
    }

    #[test]
    fn test_subcommands() {
        assert!(matches!(parse(&["list"]).command, Some(Commands::List)));
        assert!(matches!(parse(&["init"]).command, Some(Commands::Init)));
        assert!(matches!(parse(&["run"]).command, Some(Commands::Run)));
    }

    #[test]
    fn test_setup_corpus_args() {
        match parse(&["setup-corpus"]).command {
            Some(Commands::SetupCorpus { url, force }) => {
                assert_eq!(url, GUTENBERG_URL);
                assert!(!force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(matches!(
            parse(&["setup-corpus", "--force", "--url", "http://localhost/x.txt"]).command,
            Some(Commands::SetupCorpus { force: true, .. })
        ));
    }

    #[test]
    fn test_setup_corpus_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("large.txt");
        std::fs::write(&dest, "already here").unwrap();

        setup_corpus("http://invalid.invalid/", &dest, false).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "already here");
    }

    #[test]
    fn test_quick_then_explicit_flags() {
        let config = AcbenchConfig::default();

        let quick = resolve_runner_config(&parse(&["--quick"]), &config).unwrap();
        assert_eq!(quick, RunnerConfig::quick());

        let mixed = resolve_runner_config(
            &parse(&["--quick", "--search-iterations", "25"]),
            &config,
        )
        .unwrap();
        assert_eq!(mixed.compile_iterations, 3);
        assert_eq!(mixed.search_iterations, 25);
    }

    #[test]
    fn test_file_values_used_without_flags() {
        let mut config = AcbenchConfig::default();
        config.runner.compile_iterations = 4;
        let resolved = resolve_runner_config(&parse(&[]), &config).unwrap();
        assert_eq!(resolved.compile_iterations, 4);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = AcbenchConfig::default();
        let cli = parse(&["--compile-iterations", "0"]);
        assert!(resolve_runner_config(&cli, &config).is_err());
    }

    #[test]
    fn test_invalid_filter_rejected() {
        assert!(compile_filter(Some("("), "adapter").is_err());
        assert!(compile_filter(None, "adapter").unwrap().is_none());
    }
}
