//! Hero image downloader.
//!
//! For each parsed record this stage pauses for the configured throttle,
//! fetches the record's `image_url` with a browser-like `user-agent` and a
//! `referer` pointing back at the recipe page, and writes the body to
//! `<image_dir>/<random-hex-token>.png`.
//!
//! Failures are isolated per record: a failed download leaves that record's
//! `local_image` as `None` and the batch continues. The expected failure
//! kinds are closed over [`ImageFetchError`], so HTTP and filesystem
//! problems are distinguished in the logs instead of disappearing into a
//! catch-all.

use crate::models::RecipeRecord;
use crate::utils::random_hex_token;
use reqwest::header::{REFERER, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// Some image hosts refuse requests without a browser-looking user agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36";

/// Extension given to every downloaded image file.
pub const IMAGE_EXTENSION: &str = "png";

/// The closed set of errors a single image download can produce.
#[derive(Error, Debug)]
pub enum ImageFetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("filesystem write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Download the hero image for each record, filling in `local_image`.
///
/// Records are processed sequentially in input order, pausing for
/// `throttle` before each download. The returned vector is the input
/// sequence with `local_image` set to the downloaded file name, or `None`
/// where the download failed.
#[instrument(level = "info", skip_all, fields(image_dir = %image_dir))]
pub async fn download_images(
    mut records: Vec<RecipeRecord>,
    image_dir: &str,
    throttle: Duration,
) -> Vec<RecipeRecord> {
    let client = Client::new();

    for (idx, record) in records.iter_mut().enumerate() {
        info!(index = idx + 1, image_url = %record.image_url, "Downloading image");
        sleep(throttle).await;

        record.local_image =
            match download_one(&client, &record.image_url, &record.url, image_dir).await {
                Ok(local_image) => local_image,
                Err(e @ ImageFetchError::Http(_)) => {
                    warn!(url = %record.url, error = %e, "Image download failed");
                    None
                }
                Err(e @ ImageFetchError::Io(_)) => {
                    warn!(url = %record.url, error = %e, "Image file write failed");
                    None
                }
            };
    }

    let downloaded = records.iter().filter(|r| r.local_image.is_some()).count();
    info!(total = records.len(), downloaded, "Image downloads complete");
    records
}

/// Fetch a single image and write it under `image_dir`.
///
/// Returns the generated file name on success, `None` on a non-success
/// status.
async fn download_one(
    client: &Client,
    image_url: &str,
    referer: &str,
    image_dir: &str,
) -> Result<Option<String>, ImageFetchError> {
    let response = client
        .get(image_url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .header(REFERER, referer)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        warn!(%image_url, %status, "Image fetch returned non-success status");
        return Ok(None);
    }

    let bytes = response.bytes().await?;
    let file_name = format!("{}.{}", random_hex_token(), IMAGE_EXTENSION);
    let file_path = Path::new(image_dir).join(&file_name);
    tokio::fs::write(&file_path, &bytes).await?;

    info!(path = %file_path.display(), bytes = bytes.len(), "Wrote image file");
    Ok(Some(file_name))
}
