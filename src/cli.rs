// src/cli.rs
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use crate::config::consts::{DEFAULT_LOG_LEVEL, DOC_URL, LOG_FILE};
use crate::config::{LogTarget, RunOptions};
use crate::core::Dom;
use crate::resolve::Registry;

#[derive(Parser, Debug)]
#[command(name = "loldoc")]
#[command(about = "Parse a saved League of Legends API reference page into a typed JSON model")]
#[command(after_help = format!("Reference page: {DOC_URL}"))]
pub struct Args {
    /// Saved copy of the reference page
    input: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(short = 'p', long)]
    pretty: bool,

    /// After parsing, list page text that was never consumed
    #[arg(long)]
    audit: bool,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file; "-" logs to stderr
    #[arg(long, default_value = LOG_FILE)]
    log_file: String,
}

impl From<Args> for RunOptions {
    fn from(a: Args) -> Self {
        let log = match a.log_file.as_str() {
            "-" => LogTarget::Stderr,
            path => LogTarget::File(PathBuf::from(path)),
        };
        RunOptions {
            input: a.input,
            output: a.out,
            pretty: a.pretty,
            audit: a.audit,
            log_level: a.log_level,
            log,
        }
    }
}

/// Parse args, set up logging, run.
pub fn main() -> Result<()> {
    let opts = RunOptions::from(Args::parse());
    crate::log::init(&opts.log_level, &opts.log).wrap_err("failed to set up logging")?;
    run(&opts)
}

pub fn run(opts: &RunOptions) -> Result<()> {
    let src = fs::read_to_string(&opts.input)
        .wrap_err_with(|| format!("failed to read {}", opts.input.display()))?;
    let registry = Registry::builtin().wrap_err("invalid override table")?;

    let mut dom = Dom::parse(&src);
    let doc = crate::doc::parse(&mut dom, &registry)
        .wrap_err_with(|| format!("failed to parse {}", opts.input.display()))?;
    let json = doc.to_json(opts.pretty).wrap_err("failed to serialize document")?;

    match &opts.output {
        Some(path) => {
            fs::write(path, json.as_bytes())
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), resources = doc.resources.len(), "wrote document");
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(json.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }

    if opts.audit {
        let leftover = dom.leftover_text();
        if leftover.is_empty() {
            eprintln!("audit: every text node was consumed");
        } else {
            warn!(count = leftover.len(), "unconsumed text");
            eprintln!("audit: {} unconsumed text node(s)", leftover.len());
            for text in leftover {
                eprintln!("  {text}");
            }
        }
    }
    Ok(())
}
