use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use worksheet_core::{Worksheet, validate_worksheet};
use worksheet_parser::{
    OutputFormat, ParserConfig, format_header, format_run, format_worksheet, parse_worksheet_header,
    parse_worksheet_with_report,
};

/// Formats the header-only command can emit.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum HeaderFormat {
    Json,
    Yaml,
}

impl From<HeaderFormat> for OutputFormat {
    fn from(fmt: HeaderFormat) -> Self {
        match fmt {
            HeaderFormat::Json => Self::Json,
            HeaderFormat::Yaml => Self::Yaml,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "worksheet")]
#[command(about = "Parse store order worksheet reports")]
struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a worksheet report from a file.
    ParseFile(ParseFileArgs),
    /// Parse a worksheet report from stdin.
    ParseStdin(ParseStdinArgs),
    /// Print only the header record of a worksheet report.
    Header(HeaderArgs),
    /// Validate one or more parsed worksheet JSON files.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ParseOptions {
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Output both the worksheet and the parse report.
    #[arg(long)]
    with_report: bool,
    /// Parser configuration YAML file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Path to the worksheet report text.
    #[arg(long)]
    input: PathBuf,
    #[command(flatten)]
    options: ParseOptions,
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    #[command(flatten)]
    options: ParseOptions,
}

#[derive(Debug, Args)]
struct HeaderArgs {
    /// Path to the worksheet report text.
    #[arg(long)]
    input: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: HeaderFormat,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Worksheet JSON files, as written by `parse-file --format json`.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::ParseFile(args) => run_parse_file(args),
        Command::ParseStdin(args) => run_parse_stdin(args),
        Command::Header(args) => run_header(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), String> {
    let text = read_report(&args.input)?;
    run_parse_text(&text, &args.options)
}

fn run_parse_stdin(args: ParseStdinArgs) -> Result<(), String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    run_parse_text(&text, &args.options)
}

fn run_parse_text(text: &str, options: &ParseOptions) -> Result<(), String> {
    let config = match &options.config {
        Some(path) => ParserConfig::from_yaml_file(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => ParserConfig::default(),
    };

    let run = parse_worksheet_with_report(text, &config);
    for warning in &run.report.warnings {
        warn!("{warning}");
    }

    let output = if options.with_report {
        format_run(&run, options.format)
    } else {
        format_worksheet(&run.worksheet, options.format)
    }
    .map_err(|err| format!("Failed to format output: {err}"))?;
    print!("{}", terminate(output));
    Ok(())
}

fn run_header(args: HeaderArgs) -> Result<(), String> {
    let text = read_report(&args.input)?;
    let header = parse_worksheet_header(&text);
    if header.is_empty() {
        warn!(input = %args.input.display(), "No header lines found");
    }
    let output = format_header(&header, args.format.into())
        .map_err(|err| format!("Failed to format output: {err}"))?;
    print!("{}", terminate(output));
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut failures = Vec::new();

    for path in &args.inputs {
        let raw = fs::read_to_string(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
        let worksheet: Worksheet = serde_json::from_str(&raw)
            .map_err(|err| format!("Failed to parse '{}': {err}", path.display()))?;

        let errors = validate_worksheet(&worksheet);
        debug!(path = %path.display(), errors = errors.len(), "Validated worksheet");
        for error in errors {
            failures.push(format!("{}: {error}", path.display()));
        }
    }

    if !failures.is_empty() {
        return Err(format!(
            "{} validation error(s):\n  {}",
            failures.len(),
            failures.join("\n  ")
        ));
    }

    println!("Validated {} worksheet file(s).", args.inputs.len());
    Ok(())
}

fn read_report(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("Failed to read '{}': {err}", path.display()))
}

fn terminate(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
