//! # portfolio
//!
//! Renders the portfolio homepage to a single static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in content -> ./index.html
//! portfolio
//!
//! # Own content, custom output path
//! portfolio --content site.toml --out public/index.html
//!
//! # Just the <main> element, to stdout
//! portfolio --fragment --stdout
//!
//! # Start a content file from the built-in one
//! portfolio --print-content > site.json
//! ```

mod config;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_leptos::Homepage;
use portfolio_leptos::types::SiteContent;
use tracing::{debug, info, warn};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Render the portfolio homepage to static HTML")]
#[command(version)]
struct Args {
    /// Content file (.json or .toml); built-in content when omitted
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Where to write the rendered page
    #[arg(long, short, value_name = "PATH", default_value = "index.html")]
    out: PathBuf,

    /// Print the page to stdout instead of writing --out
    #[arg(long)]
    stdout: bool,

    /// Render only the <main> element
    #[arg(long)]
    fragment: bool,

    /// Print the effective content as JSON and exit
    #[arg(long)]
    print_content: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        default_value = "info",
        value_parser = clap::builder::PossibleValuesParser::new(LOG_LEVELS)
    )]
    log_level: String,
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout may carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let content = match &args.content {
        Some(path) => config::load_content(path)?,
        None => {
            debug!("no content file given, using built-in content");
            SiteContent::default()
        }
    };

    if args.print_content {
        let json = serde_json::to_string_pretty(&content).context("failed to serialize content")?;
        return write_stdout(format!("{json}\n").as_bytes());
    }

    let page = Homepage::from_content(&content).context("content failed validation")?;
    if content.projects.is_empty() {
        warn!("no projects in content, the featured grid will be empty");
    }
    let html = if args.fragment {
        page.render_fragment()
    } else {
        page.render()
    };

    if args.stdout {
        return write_stdout(html.as_bytes());
    }

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&args.out, &html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    info!(
        "Wrote {} ({} bytes, {} projects, {} skills)",
        args.out.display(),
        html.len(),
        content.projects.len(),
        content.skills.len()
    );
    Ok(())
}

/// Write to stdout. A reader that went away early (`| head`) is not an error.
fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut out = io::stdout().lock();
    match out.write_all(bytes).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed by reader, stopping output");
            Ok(())
        }
        Err(e) => Err(e).context("failed to write to stdout"),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[portfolio] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
