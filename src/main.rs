//! Format normalization CLI.
//!
//! This binary is the thin collaborator around the impose library: it
//! supplies source text (arguments, a file, or stdin), invokes the
//! engine, and writes the results back (stdout or a file).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use impose::{EngineConfig, FormatEngine, Pattern};

/// Form-Input Auto-Formatter
///
/// Rewrites values into a canonical display format: dates, times, credit
/// cards, phone numbers, or a custom search/replace pair. Values that do
/// not match the chosen format pass through unchanged.
#[derive(Parser)]
#[command(name = "impose")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text values to reformat (reads --input or stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Named format from the registry (date, time, creditcard, phone)
    #[arg(short, long, value_name = "NAME")]
    format: Option<String>,

    /// Custom search regex, "/body/flags" or bare source
    #[arg(long, value_name = "REGEX", requires = "replace")]
    search: Option<String>,

    /// Custom replacement template, e.g. "[0$1]{-2}/[0$2]{-2}"
    #[arg(long, value_name = "TEMPLATE", requires = "search")]
    replace: Option<String>,

    /// Input file with one value per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered formats and their pattern pairs
    List,
}

/// Formatting command handler.
struct FormatHandler {
    engine: FormatEngine,
    verbose: bool,
}

impl FormatHandler {
    fn new(engine: FormatEngine, verbose: bool) -> Self {
        Self { engine, verbose }
    }

    /// Reformats each value and writes the results.
    fn run(&self, values: &[String], output: Option<&Path>) -> Result<()> {
        let mut lines = Vec::with_capacity(values.len());
        let mut reformatted = 0usize;

        for value in values {
            match self.engine.apply(value, None) {
                Some(text) => {
                    reformatted += 1;
                    lines.push(text);
                }
                None => lines.push(value.clone()),
            }
        }

        let mut body = lines.join("\n");
        body.push('\n');

        if let Some(path) = output {
            std::fs::write(path, &body)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        } else {
            io::stdout()
                .write_all(body.as_bytes())
                .context("Failed to write to stdout")?;
        }

        // Keep the result stream clean; the summary goes to stderr
        if self.verbose {
            eprintln!("Values processed:   {}", values.len());
            eprintln!("Values reformatted: {}", reformatted);
        }

        Ok(())
    }

    /// Prints the registered format names and their pattern pairs.
    fn list(&self) -> Result<()> {
        let registry = &self.engine.config().patterns;
        for name in registry.names() {
            if let Some(pattern) = registry.get(&name) {
                println!(
                    "{:<12} {}  =>  {}",
                    name,
                    pattern.search().as_str(),
                    pattern.replacement()
                );
            }
        }
        Ok(())
    }
}

/// Builds the engine configuration from the CLI pattern selection.
///
/// A --search/--replace pair becomes the explicit override; otherwise
/// --format is validated against the registry and set as the engine-wide
/// default.
fn build_config(
    format: Option<&str>,
    search: Option<&str>,
    replace: Option<&str>,
) -> Result<EngineConfig> {
    let config = EngineConfig::new();

    if let (Some(search), Some(replace)) = (search, replace) {
        let pattern = Pattern::parse(search, replace)
            .with_context(|| format!("Invalid --search pattern '{}'", search))?;
        return Ok(config.with_pattern(pattern));
    }

    if let Some(name) = format {
        config.patterns.require(name)?;
        return Ok(config.with_format(name));
    }

    anyhow::bail!("No format specified. Use --format NAME or --search/--replace, or run 'impose list'.");
}

/// Collects the values to reformat from arguments, a file, or stdin.
fn gather_values(cli: &Cli) -> Result<Vec<String>> {
    if !cli.text.is_empty() {
        return Ok(cli.text.clone());
    }

    let raw = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    Ok(raw.lines().map(str::to_string).collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::List) => {
            let handler = FormatHandler::new(FormatEngine::with_builtins(), cli.verbose);
            handler.list()
        }
        None => {
            let config = build_config(
                cli.format.as_deref(),
                cli.search.as_deref(),
                cli.replace.as_deref(),
            )?;
            let handler = FormatHandler::new(FormatEngine::new(config), cli.verbose);
            let values = gather_values(&cli)?;
            handler.run(&values, cli.output.as_deref())
        }
    }
}
