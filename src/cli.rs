// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The interface is intentionally small: two required positional arguments
// (where to start, where to write) plus a couple of optional flags.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - From trait: Converting the parsed CLI into walker options
// =============================================================================

use clap::Parser;

use crate::mirror::{MirrorOptions, MissingHref};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "dir-mirror",
    version = "0.1.0",
    about = "Mirror a web directory listing into a local directory tree",
    long_about = "dir-mirror fetches a page, downloads every relative file it links to, \
                  and recurses into every relative subdirectory link, recreating the \
                  remote tree on disk. Links with a query string or a leading '/' are ignored."
)]
pub struct Cli {
    /// Starting URL (e.g., http://example.com/pub/)
    ///
    /// hrefs are appended to this as-is, so it should end with '/'
    pub location: String,

    /// Local directory to mirror into (created if missing)
    pub destination: String,

    /// Print the run report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Skip <a> tags that have no href instead of failing the run
    #[arg(long)]
    pub skip_missing_href: bool,
}

impl From<&Cli> for MirrorOptions {
    fn from(cli: &Cli) -> Self {
        MirrorOptions {
            missing_href: if cli.skip_missing_href {
                MissingHref::Skip
            } else {
                MissingHref::Abort
            },
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. How does clap know which arguments are positional?
//    - Fields without #[arg(...)] attributes become positional arguments
//    - They are required and matched in the order they're declared
//    - #[arg(long)] turns a bool field into an optional --flag
//
// 2. Why implement From<&Cli> for MirrorOptions?
//    - The walker shouldn't know anything about clap
//    - main() converts the parsed CLI into plain options and passes them in
//    - Taking &Cli (a reference) lets main keep using the Cli afterwards
// -----------------------------------------------------------------------------
