// src/mirror/classify.rs
// =============================================================================
// This module decides what to do with a single href.
//
// The rules are deliberately crude (they look at characters, not URLs):
// - contains '?'        -> skip (query string)
// - starts with '/'     -> skip (absolute-from-root, unsupported)
// - contains no '/'     -> leaf file, download it
// - anything else       -> subdirectory, walk into it
//
// Note that "../" is just another subdirectory under these rules.
//
// Rust concepts:
// - Enums with data: LinkKind::Skip carries the reason
// - Pure functions: no I/O here, so it's trivial to test
// =============================================================================

use serde::{Deserialize, Serialize};

// What the walker should do with an href
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Download into the current destination
    Leaf,
    /// Create a local directory and walk into it
    Subdirectory,
    /// Ignore the reference entirely (no fetch, no recursion)
    Skip(SkipReason),
}

// Why an href (or an anchor) was not followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The href has a '?' somewhere in it
    QueryString,
    /// The href starts with '/'
    RootRelative,
    /// The anchor had no href attribute (only with --skip-missing-href)
    ///
    /// Never returned by `classify`; the walker records it before an href
    /// ever reaches classification.
    MissingHref,
}

// Classifies an href
//
// Examples:
//   "file.txt"  -> Leaf
//   "sub/"      -> Subdirectory
//   "list?x=1"  -> Skip(QueryString)
//   "/root"     -> Skip(RootRelative)
//   ""          -> Leaf (no '/' in it)
pub fn classify(href: &str) -> LinkKind {
    if href.contains('?') {
        LinkKind::Skip(SkipReason::QueryString)
    } else if href.starts_with('/') {
        LinkKind::Skip(SkipReason::RootRelative)
    } else if !href.contains('/') {
        LinkKind::Leaf
    } else {
        LinkKind::Subdirectory
    }
}
