// Allow dead code for library features not used by the CLI
#![allow(dead_code)]

use clap::Parser;
use std::path::PathBuf;

use anyhow::Result;

mod conversion;
mod discovery;
mod error;
mod parser;

use crate::conversion::{ConversionConfig, ConversionEngine, DelimiterType};
use crate::discovery::enumerate_data_dirs;

/// CSV tree to JSON converter
#[derive(Parser, Debug)]
#[command(name = "csvconv")]
#[command(about = "Convert a directory tree of CSV files into a mirrored tree of JSON record files")]
#[command(version = "0.1.0")]
struct CliArgs {
    /// Input directory (root plus its immediate subdirectories are processed)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory (must already exist)
    #[arg(short, long)]
    output: PathBuf,

    /// Convert files; without this flag the run is a validated dry run
    #[arg(short = 'c', long)]
    convert: bool,

    /// Input cell delimiter: comma, semicolon, or tab (default: comma)
    #[arg(long)]
    delimiter: Option<String>,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    continue_on_error: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = create_conversion_config(&args)?;

    if !args.input.is_dir() {
        return Err(anyhow::anyhow!(
            "Input directory does not exist: {}",
            args.input.display()
        ));
    }
    if !args.output.exists() {
        return Err(anyhow::anyhow!(
            "Invalid output directory. {} does not exist",
            args.output.display()
        ));
    }

    let data_dirs = enumerate_data_dirs(&args.input)?;

    if !args.convert {
        if !args.quiet {
            println!(
                "Would convert {} data directories under {}",
                data_dirs.len(),
                args.input.display()
            );
        }
        return Err(anyhow::anyhow!("dry run: pass --convert to write files"));
    }

    let engine = ConversionEngine::new(config);
    let summary = engine.convert(&data_dirs, &args.input, &args.output)?;

    if !args.quiet {
        println!(
            "Converted {} files ({} failed)",
            summary.files_converted, summary.files_failed
        );
    }

    // A commit run only succeeds when every file converted
    if summary.files_failed > 0 {
        return Err(anyhow::anyhow!(
            "{} files failed to convert",
            summary.files_failed
        ));
    }

    Ok(())
}

fn create_conversion_config(args: &CliArgs) -> Result<ConversionConfig> {
    let delimiter = match args.delimiter.as_deref() {
        Some(s) => DelimiterType::from_str(s).map_err(|e| anyhow::anyhow!(e))?,
        None => DelimiterType::Comma,
    };

    Ok(ConversionConfig {
        delimiter,
        quiet: args.quiet,
        continue_on_error: args.continue_on_error,
        ..ConversionConfig::default()
    })
}
