// Image byte fetching
//
// Fetching is the only I/O boundary of a conversion. Every fetcher turns a
// source reference taken from an `<img src>` attribute into bytes, or
// fails with an error that the resolver turns into a placeholder.

use crate::common::error::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Source of image bytes
pub trait ImageFetcher {
    /// Fetch the bytes referenced by `source`
    fn fetch(&self, source: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Reads images from the local filesystem
///
/// Relative paths (including root-relative site paths such as
/// `/assets/a.png`) resolve against `base_dir`.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    base_dir: PathBuf,
}

impl FileFetcher {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Filesystem path a source refers to
    pub fn resolve(&self, source: &str) -> PathBuf {
        let source = source.strip_prefix("file://").unwrap_or(source);
        let path = Path::new(source);
        if path.is_absolute() && path.exists() {
            return path.to_path_buf();
        }
        self.base_dir.join(source.trim_start_matches(['/', '\\']))
    }
}

impl Default for FileFetcher {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ImageFetcher for FileFetcher {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        let path = self.resolve(source);
        Ok(tokio::fs::read(&path).await?)
    }
}

/// Decodes inline `data:` URIs
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUriFetcher;

impl DataUriFetcher {
    /// Decode a `data:[<mime>][;base64],<payload>` URI
    pub fn decode(source: &str) -> Result<Vec<u8>> {
        let rest = source
            .strip_prefix("data:")
            .ok_or_else(|| Error::Fetch(format!("not a data URI: {}", source)))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::Fetch("data URI has no payload".to_string()))?;

        if header.ends_with(";base64") {
            let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
            Ok(STANDARD.decode(payload)?)
        } else {
            Ok(payload.as_bytes().to_vec())
        }
    }
}

impl ImageFetcher for DataUriFetcher {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        Self::decode(source)
    }
}

/// Downloads images over HTTP(S)
///
/// Any non-success status is a failed fetch.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies, headers)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        let response = self.client.get(source).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Dispatches on the source scheme: `data:` URIs are decoded inline,
/// `http(s)://` URLs are downloaded, anything else is read from disk.
#[derive(Debug, Clone, Default)]
pub struct SourceFetcher {
    files: FileFetcher,
    #[cfg(feature = "http")]
    http: HttpFetcher,
}

impl SourceFetcher {
    /// Resolve filesystem sources against `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            files: FileFetcher::new(base_dir),
            #[cfg(feature = "http")]
            http: HttpFetcher::new(),
        }
    }
}

impl ImageFetcher for SourceFetcher {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        if source.starts_with("data:") {
            return DataUriFetcher::decode(source);
        }
        if source.starts_with("http://") || source.starts_with("https://") {
            #[cfg(feature = "http")]
            return self.http.fetch(source).await;
            #[cfg(not(feature = "http"))]
            return Err(Error::Fetch(format!(
                "remote image requires the `http` feature: {}",
                source
            )));
        }
        self.files.fetch(source).await
    }
}
