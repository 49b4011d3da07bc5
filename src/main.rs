use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gox::{lexer::lexer::Lexer, render_error, Token};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Print the tokens of a GOX source file, one per line.
#[derive(Parser, Debug)]
#[command(name = "goxlex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a GOX source file", long_about = None)]
struct Cli {
    /// GOX source file to tokenize
    file: PathBuf,

    /// How each token is printed
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, env = "GOX_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "GOX_NO_COLOR")]
    no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// `Token { kind: VAR, value: "var", line: 1 }`
    Pretty,
    /// `('VAR', 'var', 1)`
    Tuple,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color)?;

    let source = read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    debug!(file = %cli.file.display(), bytes = source.len(), "read source");

    let start = Instant::now();
    let mut count = 0usize;

    for token in Lexer::new(&source) {
        match token {
            Ok(token) => {
                println!("{}", format_token(&token, cli.format));
                count += 1;
            }
            Err(error) => {
                eprint!("{}", render_error(&error, &source, &cli.file));
                debug!(line = error.line(), "lexing stopped at first error");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    info!(tokens = count, "Tokenized in {:?}", start.elapsed());
    Ok(ExitCode::SUCCESS)
}

fn format_token(token: &Token, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => token.to_string(),
        OutputFormat::Tuple => token.as_tuple(),
    }
}

/// Logs go to stderr so stdout carries only tokens.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
