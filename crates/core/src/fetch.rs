//! Content fetching from URLs, files, and stdin.
//!
//! Fetching lives outside the extraction pipeline: the extractor is
//! handed HTML it never fetched itself. This module is the thin
//! caller-side convenience for obtaining that HTML. A timeout here
//! means no content is available, and callers should route it to the
//! same fallback as a failed extraction.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{MarrowError, Result};

/// HTTP client configuration for fetching pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent string sent with requests.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Marrow/0.1; +https://github.com/marrowlabs/marrow)".to_string(),
        }
    }
}

/// Fetches HTML from a URL.
///
/// Performs a GET with browser-like Accept headers, follows redirects,
/// and returns the body as text. No retries: retry policy belongs to
/// the caller.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| MarrowError::InvalidUrl(e.to_string()))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(MarrowError::Http)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                MarrowError::Timeout { timeout: config.timeout }
            } else {
                MarrowError::Http(e)
            }
        })?;

    let content = response.text().await?;

    Ok(content)
}

/// Reads HTML from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(MarrowError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(MarrowError::from)
    }
}

/// Reads HTML from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(MarrowError::from)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("Marrow"));
    }

    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(MarrowError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(MarrowError::FileNotFound(_))));
    }

    #[test]
    fn test_fetch_file_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<html><body>hi</body></html>").unwrap();

        let content = fetch_file(path.to_str().unwrap()).unwrap();
        assert!(content.contains("hi"));
    }
}
