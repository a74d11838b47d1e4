// src/mirror/mod.rs
// =============================================================================
// This module mirrors a remote directory listing to local disk.
//
// Submodules:
// - classify: decides if an href is a file, a subdirectory, or ignored
// - links: extracts hrefs from HTML
// - fetch: HTTP GET helpers
// - walk: the recursive walker that ties it all together
// - report: what a run did, for the final summary
// - error: the ways a run can fail
// =============================================================================

mod classify;
mod error;
mod fetch;
mod links;
mod report;
mod walk;

#[cfg(test)]
mod test_server;

pub use classify::SkipReason;
pub use error::MirrorError;
pub use report::MirrorReport;
pub use walk::{Mirror, MirrorOptions, MissingHref};
