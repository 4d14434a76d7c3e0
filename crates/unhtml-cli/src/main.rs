//! Command-line interface for unhtml
//!
//! Reads HTML and writes plain text. Without arguments it is a filter from
//! stdin to stdout, which makes it safe to drop into a pipeline on data that
//! may or may not be HTML.
//!
//! Usage:
//!   unhtml [INPUT] [-o OUTPUT]   - Convert a file (or stdin) to text
//!   unhtml --list-tags           - Print the tag vocabulary

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};

/// CLI flags
#[derive(Parser)]
#[command(name = "unhtml", author, version, about)]
struct Cli {
    /// Print every known tag with how it is treated, then exit
    #[arg(long = "list-tags", action = ArgAction::SetTrue)]
    list_tags: bool,

    /// Input file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = if cli.list_tags {
        list_tags()
    } else {
        run(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let input: Box<dyn Read> = match &cli.input {
        Some(path) => {
            log::debug!("reading {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => {
            log::debug!("writing {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };

    let mut out = BufWriter::new(output);
    let converted = unhtml::html_to_text(input, &mut out);
    // Keep whatever was converted before a failure
    out.flush()?;
    converted.context("conversion failed")
}

fn list_tags() -> anyhow::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for (tag, class) in unhtml::vocabulary::entries() {
        writeln!(out, "{}\t{}", class.as_str(), tag)?;
    }
    out.flush()?;
    Ok(())
}
