//! URL-to-file download

use std::path::Path;

use tracing::debug;

use crate::error::{Result, UtilsError};
use crate::http::HTTP_CLIENT;

/// Downloads a URL and writes its bytes to a file.
///
/// The file is created when missing and overwritten when present. A
/// non-success status surfaces as an error carrying the status text.
///
/// # Arguments
///
/// * `url` - URL to download from
/// * `path` - Path to write to
pub async fn download<P: AsRef<Path>>(url: &str, path: P) -> Result<()> {
    debug!(url, path = %path.as_ref().display(), "downloading file");
    let response = HTTP_CLIENT.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(UtilsError::custom(format!(
            "Failed to fetch: {}",
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    let bytes = response.bytes().await?;
    tokio::fs::write(path, &bytes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_download_invalid_url_fails_without_writing() {
        let target = std::env::temp_dir().join("zaka-utils-download-test");
        let result = download("not-a-url", &target).await;
        assert!(result.is_err());
        assert!(!target.exists());
    }
}
