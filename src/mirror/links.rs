// src/mirror/links.rs
// =============================================================================
// This module pulls the href out of every <a> tag in a page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so malformed markup still parses
//
// Unlike a link checker we do NOT resolve or filter anything here. Every
// anchor is reported, in document order, even the ones without an href,
// because the walker decides what a missing href means.
//
// Rust concepts:
// - Option<String>: an anchor may or may not carry an href
// - Iterators: map + collect to build the result
// =============================================================================

use scraper::{Html, Selector};

// Extracts the href of every <a> element, in document order
//
// Parameters:
//   html: the page body
//
// Returns: one entry per anchor; None when the anchor has no href attribute
//
// Example:
//   html   = "<a href='a.txt'>A</a><a name='top'></a>"
//   result = [Some("a.txt"), None]
pub fn extract_hrefs(html: &str) -> Vec<Option<String>> {
    let document = Html::parse_document(html);

    // Plain "a" rather than "a[href]": anchors without href must show up too
    let selector = Selector::parse("a").unwrap();

    document
        .select(&selector)
        .map(|element| element.value().attr("href").map(str::to_string))
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the Html document dropped before we return?
//    - scraper's Html type can't be sent between threads
//    - The walker runs inside a boxed, Send future
//    - By returning plain Strings we never hold Html across an .await
//
// 2. What does .map(str::to_string) do?
//    - attr() returns Option<&str> borrowed from the document
//    - We need owned Strings that outlive the document
//    - Option::map converts Some(&str) to Some(String) and leaves None alone
//
// 3. Why unwrap() on the selector?
//    - "a" is a constant, known-valid selector
//    - If it ever failed to parse that would be a programmer error
// -----------------------------------------------------------------------------
