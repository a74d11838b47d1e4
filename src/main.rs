// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging
// 2. Parse command-line arguments using clap
// 3. Mirror the starting URL into the destination directory
// 4. Print a summary (or JSON report)
// 5. Exit with proper code (0 = success, 1 = the run failed)
//
// A run either finishes completely or stops at the first error. Whatever was
// written before the error stays on disk.
//
// Rust concepts used:
// - async/await: Our HTTP client and file I/O are async (tokio)
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod logging;       // src/logging.rs - tracing setup
mod mirror;        // src/mirror/ - the directory walker

use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method
use mirror::{Mirror, MirrorOptions, MirrorReport, SkipReason};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

#[tokio::main]
async fn main() {
    // Parse first so --help/--version and usage errors behave normally
    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole error chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
async fn run(cli: Cli) -> Result<()> {
    logging::init_logging()?;

    let options = MirrorOptions::from(&cli);
    let mirror = Mirror::new(options)?;

    let report = mirror.walk(&cli.location, &cli.destination).await?;

    print_report(&report, cli.json)
}

// Prints the report either as a summary or JSON
fn print_report(report: &MirrorReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_summary(report);
    }
    Ok(())
}

// Prints a human-readable summary in the terminal
fn print_summary(report: &MirrorReport) {
    println!("{:<60} {:>12}", "FILE", "BYTES");
    println!("{}", "=".repeat(73));

    for file in &report.files {
        // Truncate long paths from the left so the file name stays visible
        let path_display = if file.path.chars().count() > 57 {
            let tail: String = file
                .path
                .chars()
                .rev()
                .take(57)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{}", tail)
        } else {
            file.path.clone()
        };

        println!("{:<60} {:>12}", path_display, file.bytes);
    }

    println!();

    println!("📊 Summary:");
    println!("   📁 Pages walked: {}", report.pages.len());
    println!("   📄 Files downloaded: {}", report.files.len());
    println!("   💾 Bytes written: {}", report.total_bytes());
    println!("   ⏭️  Links skipped: {}", report.skipped.len());

    for reason in [SkipReason::QueryString, SkipReason::RootRelative, SkipReason::MissingHref] {
        let count = report.skipped.iter().filter(|s| s.reason == reason).count();
        if count > 0 {
            println!("      {}: {}", format_reason(reason), count);
        }
    }
}

fn format_reason(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::QueryString => "query string",
        SkipReason::RootRelative => "starts with '/'",
        SkipReason::MissingHref => "no href",
    }
}
