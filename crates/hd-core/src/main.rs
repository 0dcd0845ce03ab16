//! Heredity Core - exact pedigree trait inference
//!
//! The main entry point for hd-core, handling:
//! - Pedigree CSV loading and validation
//! - Exact Bayesian inference over gene counts and trait presence
//! - Human and JSON report output

use clap::{Args, CommandFactory, Parser, Subcommand};
use hd_common::error::{format_error_human, StructuredError};
use hd_common::{Error, OutputFormat};
use hd_config::{resolve_priors, validate_priors, ValidationError};
use hd_core::exit_codes::ExitCode;
use hd_core::family::loader::load_family;
use hd_core::inference::run_inference;
use hd_core::logging::{init_logging, LogFormat};
use hd_core::output::{render_check, render_report, CheckReport, InferenceReport};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Heredity Core - exact Bayesian inference of gene and trait posteriors
#[derive(Parser)]
#[command(name = "hd-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to a priors.json model (HD_PRIORS is consulted when absent)
    #[arg(long, global = true)]
    priors: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "human")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log output format on stderr
    #[arg(long, global = true, default_value = "human")]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute posteriors for every person in a pedigree CSV
    Infer(InferArgs),

    /// Validate the priors model (and optionally a pedigree) without inferring
    Check(CheckArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct InferArgs {
    /// Pedigree CSV (columns: name, mother, father, trait)
    data: PathBuf,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Also validate a pedigree CSV
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.log_format, cli.global.verbose, cli.global.quiet);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            report_error(&err, &cli.global);
            ExitCode::from_error(&err)
        }
    };
    std::process::exit(code.as_i32());
}

fn run(cli: &Cli) -> Result<ExitCode, Error> {
    match &cli.command {
        Some(Commands::Infer(args)) => cmd_infer(args, &cli.global),
        Some(Commands::Check(args)) => cmd_check(args, &cli.global),
        Some(Commands::Version) => {
            println!("hd-core {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::Clean)
        }
        None => {
            let _ = Cli::command().print_help();
            Ok(ExitCode::ArgsError)
        }
    }
}

fn cmd_infer(args: &InferArgs, global: &GlobalOpts) -> Result<ExitCode, Error> {
    let (priors, source) = resolve_priors(global.priors.as_deref()).map_err(map_validation)?;
    validate_priors(&priors).map_err(map_validation)?;
    tracing::info!(source = %source, "priors resolved");

    let family = load_family(&args.data)?;
    tracing::info!(
        people = family.len(),
        data = %args.data.display(),
        "pedigree loaded"
    );

    let posteriors = run_inference(&family, &priors)?;
    let report = InferenceReport::new(args.data.display().to_string(), posteriors);
    print!("{}", ensure_newline(render_report(&report, global.format)));
    Ok(ExitCode::Clean)
}

fn cmd_check(args: &CheckArgs, global: &GlobalOpts) -> Result<ExitCode, Error> {
    let (priors, source) = resolve_priors(global.priors.as_deref()).map_err(map_validation)?;
    validate_priors(&priors).map_err(map_validation)?;

    let people = match &args.data {
        Some(path) => Some(load_family(path)?.len()),
        None => None,
    };

    let report = CheckReport {
        schema_version: hd_common::SCHEMA_VERSION.to_string(),
        priors_source: source.to_string(),
        people,
    };
    print!("{}", ensure_newline(render_check(&report, global.format)));
    Ok(ExitCode::Clean)
}

/// Map a config validation error onto the unified error type.
fn map_validation(err: ValidationError) -> Error {
    match err {
        ValidationError::VersionMismatch { .. } => Error::SchemaValidation(err.to_string()),
        other => Error::InvalidPriors(other.to_string()),
    }
}

fn report_error(err: &Error, global: &GlobalOpts) {
    match global.format {
        OutputFormat::Json => eprintln!("{}", StructuredError::from(err).to_json()),
        OutputFormat::Human => {
            let use_color = !global.no_color && std::io::stderr().is_terminal();
            eprintln!("{}", format_error_human(err, use_color));
        }
    }
}

fn ensure_newline(mut payload: String) -> String {
    if !payload.ends_with('\n') {
        payload.push('\n');
    }
    payload
}
