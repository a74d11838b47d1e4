// src/mirror/fetch.rs
// =============================================================================
// HTTP GET helpers used by the walker.
//
// Two flavors:
// - fetch_document: the page we are about to parse, read as text
// - fetch_file: a leaf file, read as raw bytes so binaries survive untouched
//
// Any non-2xx status is treated exactly like a network error.
// =============================================================================

use reqwest::{Client, Response};

use super::MirrorError;

// Fetches a page and returns its body as text
pub async fn fetch_document(client: &Client, url: &str) -> Result<String, MirrorError> {
    let response = get(client, url).await?;

    response.text().await.map_err(|source| MirrorError::Request {
        url: url.to_string(),
        source,
    })
}

// Fetches a file and returns its body verbatim
//
// The body is handed back as reqwest read it, without copying it into a Vec
pub async fn fetch_file(client: &Client, url: &str) -> Result<impl AsRef<[u8]>, MirrorError> {
    let response = get(client, url).await?;

    response.bytes().await.map_err(|source| MirrorError::Request {
        url: url.to_string(),
        source,
    })
}

// Sends the GET and rejects anything that isn't a success status
async fn get(client: &Client, url: &str) -> Result<Response, MirrorError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| MirrorError::Request {
            url: url.to_string(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(MirrorError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    Ok(response)
}
