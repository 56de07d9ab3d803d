use clap::Parser;
use jsontok::{Error, InternalResult, Recovery, Tokenizer, TokenizerConfig};
use std::{
    collections::BTreeMap,
    io::{Read, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file to tokenize, stdin when omitted
    input: Option<PathBuf>,

    /// Path to a tokenizer config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Error recovery policy (halt or skip), overrides the config file
    #[arg(short, long)]
    recovery: Option<Recovery>,

    /// Print token counts per kind instead of the tokens
    #[arg(short, long)]
    summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> InternalResult<TokenizerConfig> {
    let mut config = match &cli.config {
        Some(path) => TokenizerConfig::from_file(path)?,
        None => TokenizerConfig::default(),
    };
    if let Some(recovery) = cli.recovery {
        config.recovery = recovery;
    }
    Ok(config)
}

fn read_source(cli: &Cli) -> InternalResult<String> {
    match &cli.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Writes one line per token, or the counts per kind when `summary` is set,
/// and returns whether the input was free of lexical errors.
fn write_tokens<W: Write>(
    source: &str,
    config: TokenizerConfig,
    summary: bool,
    out: &mut W,
) -> InternalResult<bool> {
    let mut errors = 0usize;
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();

    for token in Tokenizer::with_config(source, config) {
        if let Err(error) = token.into_result() {
            errors += 1;
            eprintln!("error: {} {:?}", Error::from(error), token.text);
        }
        if summary {
            *counts.entry(token.kind.into()).or_default() += 1;
        } else {
            writeln!(out, "{}", token)?;
        }
    }

    if summary {
        for (kind, count) in &counts {
            writeln!(out, "{:<14}{}", kind, count)?;
        }
    }
    debug!(errors, "tokenization finished");

    Ok(errors == 0)
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> InternalResult<bool> {
    let config = load_config(cli)?;
    debug!("config: {:?}", config);

    let source = read_source(cli)?;
    info!(bytes = source.len(), "input loaded.");

    write_tokens(&source, config, cli.summary, out)
}

fn exit_code(result: &InternalResult<bool>) -> ExitCode {
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(_) => ExitCode::from(2),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = run(&cli, &mut std::io::stdout().lock());
    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    exit_code(&result)
}
