//! # edi-cli
//!
//! Command-line front end for converting DELFOR delivery schedules.

mod config;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use config::{CliConfig, OutputFormat};
use edi_adapter_edifact::{Separators, read_message, split_segments};
use edi_adapter_xml::{XmlConfig, XmlEncoding, XmlWriter};
use edi_delfor::DelforConverter;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Exit code for conversion or I/O failures
const EXIT_FAILURE: u8 = 1;
/// Exit code for unusable configuration
const EXIT_CONFIG: u8 = 3;

/// Output path meaning "write to stdout"
const STDOUT_PATH: &str = "-";

#[derive(Parser)]
#[command(name = "delfor")]
#[command(about = "Convert EDIFACT DELFOR delivery schedules to XML")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a DELFOR message into a schedule document
    Convert {
        /// Input file path
        input: PathBuf,

        /// Output file path ("-" for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// XML output encoding (iso-8859-1 or utf-8)
        #[arg(short, long)]
        encoding: Option<XmlEncoding>,

        /// XML indentation width (0 for a single line)
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Print the split segments of a message as JSON
    Segments {
        /// Input file path
        input: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(CliConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => return fail(EXIT_CONFIG, &anyhow::Error::new(e)),
    };
    init_logging(cli.verbose, &config);

    let separators = match config.separators.to_separators() {
        Ok(separators) => separators,
        Err(e) => return fail(EXIT_CONFIG, &anyhow::Error::new(e)),
    };

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            encoding,
            indent,
        } => {
            let options = ConvertOptions {
                format: format.unwrap_or(config.output.format),
                xml: XmlConfig::new()
                    .encoding(encoding.unwrap_or(config.output.encoding))
                    .indent(indent.unwrap_or(config.output.indent)),
            };
            convert(&input, output.as_deref(), separators, options)
        }
        Commands::Segments { input, pretty } => segments(&input, separators, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(EXIT_FAILURE, &e),
    }
}

fn fail(code: u8, error: &anyhow::Error) -> ExitCode {
    eprintln!("ERROR: {error:#}");
    ExitCode::from(code)
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`, which wins
/// over the config file; the fallback is `warn`.
fn init_logging(verbose: u8, config: &CliConfig) {
    let level = match verbose {
        0 => config.log_level.map_or(Level::WARN, Level::from),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct ConvertOptions {
    format: OutputFormat,
    xml: XmlConfig,
}

fn convert(
    input: &Path,
    output: Option<&Path>,
    separators: Separators,
    options: ConvertOptions,
) -> anyhow::Result<()> {
    let text = read_message(input).context("failed to read input message")?;

    let schedule = DelforConverter::new()
        .with_separators(separators)
        .convert(&text);
    let document = schedule
        .to_document()
        .with_source(input.display().to_string())
        .stamped(chrono::Utc::now());

    let output =
        output.unwrap_or_else(|| Path::new(options.format.default_file_name()));
    let to_stdout = output == Path::new(STDOUT_PATH);
    info!(
        input = %input.display(),
        output = %output.display(),
        format = ?options.format,
        "Writing schedule"
    );

    match options.format {
        OutputFormat::Xml => {
            let writer = XmlWriter::with_config(options.xml);
            let written = if to_stdout {
                writer.write(std::io::stdout().lock(), &document)
            } else {
                writer.write_file(output, &document)
            };
            written.with_context(|| format!("failed to write XML to '{}'", output.display()))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&document)
                .context("failed to serialize schedule document")?;
            write_text(output, to_stdout, &json)?;
        }
    }

    info!(
        article_lines = schedule.article_lines.len(),
        demand_lines = schedule.demand_lines.len(),
        "Converted schedule"
    );
    eprintln!(
        "Conversion summary: article_lines={}, demand_lines={}",
        schedule.article_lines.len(),
        schedule.demand_lines.len()
    );
    Ok(())
}

fn segments(input: &Path, separators: Separators, pretty: bool) -> anyhow::Result<()> {
    let text = read_message(input).context("failed to read input message")?;
    let segments = split_segments(&text, &separators);

    let json = if pretty {
        serde_json::to_string_pretty(&segments)
    } else {
        serde_json::to_string(&segments)
    }
    .context("failed to serialize segments")?;
    write_text(Path::new(STDOUT_PATH), true, &json)?;

    eprintln!("Segment summary: segments={}", segments.len());
    Ok(())
}

fn write_text(output: &Path, to_stdout: bool, text: &str) -> anyhow::Result<()> {
    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").context("failed to write to stdout")?;
        stdout.flush().context("failed to flush stdout")?;
    } else {
        std::fs::write(output, format!("{text}\n"))
            .with_context(|| format!("failed to write '{}'", output.display()))?;
    }
    Ok(())
}
