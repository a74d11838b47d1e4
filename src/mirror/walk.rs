// src/mirror/walk.rs
// =============================================================================
// This module implements the mirror walk itself.
//
// How it works (for one page):
// 1. Make sure the local destination directory exists
// 2. Fetch the page at `location`
// 3. Pull out every <a href> in document order
// 4. For each href:
//      skip it          (contains '?' or starts with '/')
//      download it      (no '/' at all)      -> destination/href
//      walk into it     (anything else)      -> location+href, destination/href
//
// Everything is depth-first and strictly one-at-a-time: a subdirectory is
// walked to completion before the next href on the parent page is looked at.
// The first error anywhere stops the whole run.
//
// There is no cycle detection and no depth limit. An href like "../" is
// followed like any other subdirectory, which on most servers never ends.
//
// Rust concepts:
// - Async recursion: an async fn can't call itself directly, so we return
//   a BoxFuture (a heap-allocated future) instead
// - &mut borrowing: the report is threaded through every level
// =============================================================================

use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use tracing::{debug, info, warn};

use super::classify::{classify, LinkKind, SkipReason};
use super::fetch::{fetch_document, fetch_file};
use super::links::extract_hrefs;
use super::report::{DownloadedFile, MirrorReport, SkippedLink};
use super::MirrorError;

// What to do with an <a> tag that has no href attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingHref {
    /// Fail the run (the historical behavior)
    #[default]
    Abort,
    /// Record the anchor as skipped and keep going
    Skip,
}

// Knobs for a mirror run
#[derive(Debug, Clone, Default)]
pub struct MirrorOptions {
    pub missing_href: MissingHref,
}

// Walks a remote directory listing into a local directory
pub struct Mirror {
    client: Client,
    options: MirrorOptions,
}

impl Mirror {
    // Creates a walker with its own HTTP client
    //
    // No timeout is set on purpose: a slow server just makes the run slow.
    pub fn new(options: MirrorOptions) -> Result<Self, MirrorError> {
        let client = Client::builder().build().map_err(MirrorError::Client)?;
        Ok(Self { client, options })
    }

    // Mirrors `location` into `destination`
    //
    // Parameters:
    //   location: URL of the starting page; hrefs are appended to it as-is,
    //             so it normally ends with '/'
    //   destination: local directory; created if missing
    //
    // Returns: a report of every page, file and skipped href on success
    pub async fn walk(&self, location: &str, destination: &str) -> Result<MirrorReport, MirrorError> {
        let mut report = MirrorReport::default();
        self.walk_into(location.to_string(), destination.to_string(), 0, &mut report)
            .await?;
        Ok(report)
    }

    // One level of the walk. Boxed so it can recurse.
    fn walk_into<'a>(
        &'a self,
        location: String,
        destination: String,
        depth: usize,
        report: &'a mut MirrorReport,
    ) -> BoxFuture<'a, Result<(), MirrorError>> {
        async move {
            ensure_dir(&destination).await?;

            info!(depth, %location, %destination, "walking page");
            let html = fetch_document(&self.client, &location).await?;
            report.pages.push(location.clone());

            for (index, href) in extract_hrefs(&html).into_iter().enumerate() {
                let href = match href {
                    Some(href) => href,
                    None => match self.options.missing_href {
                        MissingHref::Abort => {
                            return Err(MirrorError::MissingHref { location, index });
                        }
                        MissingHref::Skip => {
                            debug!(%location, index, "skipping anchor without href");
                            report.skipped.push(SkippedLink {
                                location: location.clone(),
                                href: None,
                                reason: SkipReason::MissingHref,
                            });
                            continue;
                        }
                    },
                };

                match classify(&href) {
                    LinkKind::Skip(reason) => {
                        debug!(%location, %href, ?reason, "skipping link");
                        report.skipped.push(SkippedLink {
                            location: location.clone(),
                            href: Some(href),
                            reason,
                        });
                    }
                    LinkKind::Leaf => {
                        let url = format!("{}{}", location, href);
                        let path = format!("{}/{}", destination, href);
                        let file = self.download(url, path).await?;
                        report.files.push(file);
                    }
                    LinkKind::Subdirectory => {
                        if href.contains("..") {
                            warn!(%location, %href, "following a parent-directory link");
                        }
                        let child_location = format!("{}{}", location, href);
                        let child_destination = format!("{}/{}", destination, href);
                        self.walk_into(child_location, child_destination, depth + 1, report)
                            .await?;
                    }
                }
            }

            Ok(())
        }
        .boxed()
    }

    // Fetches one leaf file and writes it, overwriting whatever was there
    async fn download(&self, url: String, path: String) -> Result<DownloadedFile, MirrorError> {
        let body = fetch_file(&self.client, &url).await?;
        let body = body.as_ref();

        tokio::fs::write(&path, body)
            .await
            .map_err(|source| MirrorError::Write {
                path: path.clone(),
                source,
            })?;

        info!(%url, %path, bytes = body.len(), "downloaded file");
        Ok(DownloadedFile {
            url,
            path,
            bytes: body.len(),
        })
    }
}

// Creates `path` (and any missing parents) unless something already exists there
async fn ensure_dir(path: &str) -> Result<(), MirrorError> {
    if tokio::fs::metadata(path).await.is_ok() {
        return Ok(());
    }

    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| MirrorError::CreateDir {
            path: path.to_string(),
            source,
        })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BoxFuture?
//    - An async fn returns an anonymous future type
//    - If the fn calls itself, that type would have to contain itself
//    - Boxing puts the inner future on the heap, giving it a fixed size
//    - .boxed() comes from futures::FutureExt and also requires Send
//
// 2. Why pass `report: &mut MirrorReport` down instead of returning one?
//    - Each level appends to the same lists in visit order
//    - Only one level runs at a time, so one &mut borrow is enough
//
// 3. Why format! instead of Path::join or Url::join?
//    - Locations and destinations are built by plain string concatenation
//    - Url::join drops the last path segment when the location doesn't end
//      in '/', which would change which URLs get fetched
//    - reqwest still parses the final string as a Url, so dot segments are
//      resolved on the wire: ".../a/" + "../" is requested as "/"
//
// 4. Why check metadata before create_dir_all?
//    - If the destination already exists we leave it alone
//    - That makes running twice into the same directory harmless
// -----------------------------------------------------------------------------
