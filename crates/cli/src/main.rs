//! CLI tool for mapping earthquake epicenters from bulletin text.
//!
//! Reads a bulletin from the clipboard (or a file, or stdin), extracts
//! the epicenter coordinates, normalizes them to an ASCII token pair,
//! and optionally opens the map lookup in the default browser.

mod clipboard;

use anyhow::{Context, Result};
use clap::Parser;
use epimap_core::{detect, lookup_url, normalize};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Look up earthquake epicenters from bulletin text on Google Maps.
#[derive(Parser, Debug)]
#[command(name = "epimap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Bulletin text file to read instead of the clipboard ("-" for stdin)
    input: Option<PathBuf>,

    /// Open the epicenter in the default browser
    #[arg(short, long)]
    open: bool,

    /// Keep watching the clipboard and re-extract whenever it changes
    #[arg(short, long, conflicts_with = "input")]
    watch: bool,

    /// Polling interval for --watch, in milliseconds
    #[arg(long, default_value = "500")]
    interval: u64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Result of one extraction run over a bulletin.
#[derive(Debug, Serialize)]
struct Report {
    /// Publisher layout that matched, if any.
    format: Option<String>,

    /// Raw coordinate span as found in the bulletin.
    span: String,

    /// ASCII-normalized coordinate token pair.
    epicenter: String,

    /// Map lookup URL for the normalized token.
    url: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.watch {
        return watch_clipboard(&args);
    }

    let text = read_bulletin(&args).context("Failed to read bulletin text")?;
    let report = process(&text);
    print_report(&report, &text, &args)?;

    if args.open {
        open_map(&report)?;
    }

    Ok(())
}

/// Read bulletin text from the file argument, stdin, or the clipboard.
fn read_bulletin(args: &Args) -> epimap_core::Result<String> {
    match &args.input {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
        None => clipboard::read_text(),
    }
}

/// Run the extraction pipeline over one bulletin.
fn process(text: &str) -> Report {
    let detected = detect(text);
    let span = detected
        .as_ref()
        .map(|e| e.span.clone())
        .unwrap_or_default();
    let epicenter = normalize(&span);
    let url = lookup_url(&epicenter);

    Report {
        format: detected.map(|e| e.format.to_string()),
        span,
        epicenter,
        url,
    }
}

/// Print the run's result, either as the console report or as JSON.
fn print_report(report: &Report, text: &str, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("epicenter: {}", report.epicenter);
    println!("This may be: {}", report.span);

    if args.verbose {
        if let Some(format) = &report.format {
            eprintln!("Matched the {} bulletin layout", format);
        } else {
            eprintln!("No bulletin layout matched");
        }
        eprintln!("--- bulletin ---");
        eprintln!("{}", text);
    }

    Ok(())
}

/// Open the map lookup in the default browser, unless extraction came
/// up empty.
fn open_map(report: &Report) -> Result<()> {
    if report.span.is_empty() {
        log::warn!("no epicenter recognized, skipping browser launch");
        return Ok(());
    }

    log::debug!("opening {}", report.url);
    webbrowser::open(&report.url).with_context(|| format!("Failed to open {}", report.url))?;

    Ok(())
}

/// Poll the clipboard and re-run extraction whenever its contents change.
fn watch_clipboard(args: &Args) -> Result<()> {
    let interval = Duration::from_millis(args.interval.max(1));
    let mut last = String::new();

    eprintln!("Watching the clipboard, Ctrl-C to stop");
    loop {
        let text = clipboard::read_text().context("Failed to read the clipboard")?;

        if text != last && !text.trim().is_empty() {
            last = text.clone();

            let report = process(&text);
            print_report(&report, &text, args)?;

            if args.open {
                open_map(&report)?;
            }
        }

        thread::sleep(interval);
    }
}
