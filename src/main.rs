//! leafcmp command-line interface.
//!
//! Parses arguments with clap, loads both documents, runs the leaf-path
//! comparison and prints the verdict. Exit code 0 means equal, 1 not equal,
//! 2 an error.

use anyhow::{bail, Context, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, ValueEnum};
use leafcmp::parser::{ensure_mapping, parse_stdin, STDIN_SOURCE};
use leafcmp::{
    compare_files, compare_nodes, format_result, load_file, CompareConfig, ComparisonResult,
    FormatHint, LinearizeConfig, Node, NullPolicy, OutputFormat, OutputOptions, SequencePolicy,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

const STDIN_ARG: &str = "-";

/// leafcmp - check whether two structured documents hold the same leaves
///
/// Compares JSON, YAML and TOML documents by the set of paths to their leaf
/// values, ignoring key order, sequence order and formatting.
#[derive(Parser, Debug)]
#[command(name = "leafcmp")]
#[command(version)]
#[command(about = "Order-insensitive comparison of structured documents", long_about = None)]
struct Cli {
    /// First document ("-" reads stdin)
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Second document ("-" reads stdin)
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "terminal")]
    format: OutputFormatArg,

    /// Syntax of the inputs (auto uses the file extension)
    #[arg(long, value_enum, default_value = "auto")]
    input_format: InputFormatArg,

    /// Only walk the first element of every sequence
    #[arg(long)]
    first_element_only: bool,

    /// Drop the key name from paths of null-valued entries
    #[arg(long)]
    drop_null_keys: bool,

    /// Use the legacy path encoding (implies both options above, keys unescaped)
    #[arg(long)]
    legacy: bool,

    /// Print the path listings even when the documents are equal
    #[arg(long)]
    show_paths: bool,

    /// Verbose output (log pipeline stages to stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (print nothing, only set the exit code)
    #[arg(short, long)]
    quiet: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
enum OutputFormatArg {
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
    /// Plain text (no colors)
    Plain,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Plain => OutputFormat::Plain,
        }
    }
}

/// Input format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
enum InputFormatArg {
    Auto,
    Json,
    Yaml,
    Toml,
}

impl From<InputFormatArg> for FormatHint {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Auto => FormatHint::Auto,
            InputFormatArg::Json => FormatHint::Json,
            InputFormatArg::Yaml => FormatHint::Yaml,
            InputFormatArg::Toml => FormatHint::Toml,
        }
    }
}

impl Cli {
    fn compare_config(&self) -> CompareConfig {
        let mut linearize = if self.legacy {
            LinearizeConfig::legacy()
        } else {
            LinearizeConfig::default()
        };
        if self.first_element_only {
            linearize.sequence_policy = SequencePolicy::FirstElement;
        }
        if self.drop_null_keys {
            linearize.null_policy = NullPolicy::DropKey;
        }

        CompareConfig {
            format: self.input_format.into(),
            linearize,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_argument_count_error(&err) => {
            println!("usage: leafcmp <first file path> <second file path>");
            process::exit(0);
        }
        Err(err) => err.exit(),
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

/// Missing or surplus positional arguments get a usage line instead of an error.
fn is_argument_count_error(err: &clap::Error) -> bool {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => true,
        ErrorKind::UnknownArgument => matches!(
            err.get(ContextKind::InvalidArg),
            Some(ContextValue::String(arg)) if !arg.starts_with('-')
        ),
        _ => false,
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    if is_stdin(&cli.file1) && is_stdin(&cli.file2) {
        bail!("stdin can only be used for one of the two documents");
    }

    let config = cli.compare_config();
    let result = if is_stdin(&cli.file1) || is_stdin(&cli.file2) {
        compare_with_stdin(&cli.file1, &cli.file2, &config)?
    } else {
        compare_files(&cli.file1, &cli.file2, &config).context("Failed to compare documents")?
    };

    if !cli.quiet {
        let output_options = OutputOptions {
            show_paths: cli.show_paths,
        };
        let output_format: OutputFormat = cli.format.into();
        let output = format_result(&result, &output_format, &output_options)
            .context("Failed to format comparison output")?;
        println!("{}", output);
    }

    if result.is_equal {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_ARG
}

/// One side comes from stdin, the other from disk.
fn compare_with_stdin(
    first: &Path,
    second: &Path,
    config: &CompareConfig,
) -> Result<ComparisonResult> {
    let first = load(first, config.format)
        .with_context(|| format!("Failed to load first document: {}", first.display()))?;
    let second = load(second, config.format)
        .with_context(|| format!("Failed to load second document: {}", second.display()))?;

    compare_nodes(first, second, config).context("Failed to compare documents")
}

fn load(path: &Path, hint: FormatHint) -> Result<Node> {
    if is_stdin(path) {
        tracing::debug!("parsing document from stdin");
        let node = parse_stdin(hint)?;
        return Ok(ensure_mapping(node, STDIN_SOURCE)?);
    }

    Ok(load_file(path, hint)?)
}
