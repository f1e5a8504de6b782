//! itac - Italian-keyword to C++ compiler.
//!
//! `itac <INPUT> <OUTPUT>` compiles one source file and writes the result.
//! Phase progress is logged through `tracing`; the symbol table is printed
//! on stdout after a successful compile.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use itac_drv::{CompileError, Config, EmitType, Session, SessionOptions, SymbolFormat};
use itac_sem::SymbolTable;

/// itac - compile an .ita program to C++
#[derive(Parser, Debug)]
#[command(name = "itac")]
#[command(author = "Itac Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile an Italian-keyword program to C++", long_about = None)]
struct Cli {
    /// Source file to compile
    input: PathBuf,

    /// Where to write the generated file
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "ITAC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "ITAC_NO_COLOR")]
    no_color: bool,

    /// Path to configuration file
    #[arg(short, long, env = "ITAC_CONFIG")]
    config: Option<PathBuf>,

    /// What to write to OUTPUT
    #[arg(long, value_enum, default_value_t = EmitType::Cpp)]
    emit: EmitType,

    /// Symbol-table report format (overrides the configuration file)
    #[arg(long, value_enum)]
    symbols: Option<SymbolFormat>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let source = std::fs::read_to_string(&cli.input).map_err(|source| CompileError::Io {
        path: cli.input.clone(),
        source,
    })?;
    tracing::debug!(input = %cli.input.display(), bytes = source.len(), "read source");

    let session = Session::new(SessionOptions::from_config(&config, cli.emit));
    let compilation = session.compile(&source)?;

    if let Some(symbols) = &compilation.symbols {
        print_symbols(symbols, cli.symbols.unwrap_or(config.report.symbols))?;
    }

    std::fs::write(&cli.output, &compilation.output).map_err(|source| CompileError::Io {
        path: cli.output.clone(),
        source,
    })?;
    tracing::info!(output = %cli.output.display(), "output written");
    Ok(())
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    config.context("failed to load configuration")
}

fn print_symbols(symbols: &SymbolTable, format: SymbolFormat) -> Result<()> {
    match format {
        SymbolFormat::Text => {
            println!("--- Symbol table ---");
            print!("{}", symbols);
        },
        SymbolFormat::Json => {
            let json = serde_json::to_string_pretty(&symbols.report()).context("failed to serialize symbol table")?;
            println!("{}", json);
        },
        SymbolFormat::Off => {},
    }
    Ok(())
}

fn report_error(err: &anyhow::Error) {
    eprintln!("=== COMPILATION ERROR ===");
    match err.downcast_ref::<CompileError>().and_then(CompileError::diagnostic) {
        Some(diagnostic) => eprintln!("{}", diagnostic),
        None => eprintln!("error: {:#}", err),
    }
}
