// rs/src/bin/duext/main.rs
use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use duextrema::util::{print_about, resolve_dir};

mod extrema;
mod record;
mod report;
mod scanner;

use report::{failure_line, write_json, write_report, write_summary};
use scanner::{ExtremaScanner, ScanError, ScanEvent};

#[derive(Parser, Debug)]
#[command(
    version,
    author,
    color = ColorChoice::Auto,
    about = "Report the largest, smallest, newest and oldest file in a directory"
)]
struct Args {
    /// Directory to scan (defaults to the current directory)
    directory: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Disable colored output
    #[arg(long = "no-color")]
    no_color: bool,
    /// Verbose diagnostics on stderr: info (-v) or debug (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    init_tracing(args.verbose);

    if !args.json {
        print_about();
    }

    let dir = resolve_dir(args.directory.as_deref())
        .context("Failed to read the current directory")?;
    if !args.json {
        println!("Directory: {}", dir.display());
    }

    let scanner = match ExtremaScanner::open(&dir) {
        Ok(s) => s,
        Err(e @ ScanError::EmptyListing { .. }) => {
            tracing::info!("{e}");
            return Ok(());
        }
        Err(e @ ScanError::DirectoryUnreadable { .. }) => {
            eprintln!("{}", format!("Error: {e}").red());
            std::process::exit(1);
        }
    };
    tracing::info!(dir = %dir.display(), "scanning");

    let json = args.json;
    let result = scanner.scan(|ev| match ev {
        ScanEvent::SkippedDir(name) => {
            if json {
                eprintln!("Skipped directory: {}", name.to_string_lossy());
            } else {
                println!("Skipped directory: {}", name.to_string_lossy());
            }
        }
        failed => {
            if let Some(line) = failure_line(&failed) {
                eprintln!("{}", line.yellow());
            }
        }
    });
    tracing::info!(
        files = result.summary.files,
        skipped = result.summary.skipped,
        ignored = result.summary.ignored,
        errors = result.summary.errors,
        "scan finished"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        write_json(&mut out, &dir, result.extrema.as_ref(), &result.summary)?;
        return Ok(());
    }

    match &result.extrema {
        Some(ext) => write_report(&mut out, ext)?,
        None => writeln!(out, "{}", "No regular files found".yellow())?,
    }
    write_summary(&mut out, &result.summary)?;
    writeln!(out, "Done.")?;
    Ok(())
}
