//! Yearly weather documents from a local cache, downloaded on a miss.

use crate::source::document::{parse_document, DocumentFormat};
use crate::source::error::SourceError;
use crate::types::observation::RawRecord;
use futures_util::TryStreamExt;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use std::collections::BTreeSet;
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::io::AsyncReadExt;
use tokio::{fs, task};
use tokio_util::io::StreamReader;

pub const DEFAULT_BASE_URL: &str = "http://eris.ad.murdoch.edu.au/~S900432D/ict375/data/";

/// Years reported when neither the server listing nor the cache names any.
pub const FALLBACK_YEARS: RangeInclusive<i32> = 2007..=2016;

/// Loads the raw records of a year, looking for `<year>.xml` and `<year>.json` in the cache
/// directory first and downloading them from `base_url` otherwise.
pub struct YearSource {
    cache_dir: PathBuf,
    base_url: String,
    client: Client,
}

impl YearSource {
    pub fn new(cache_dir: &Path, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            cache_dir: cache_dir.to_path_buf(),
            base_url,
            client: Client::new(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache_path(&self, year: i32, format: DocumentFormat) -> PathBuf {
        self.cache_dir.join(file_name(year, format))
    }

    /// All records of `year` in document order.
    ///
    /// Cached documents win over remote ones, XML over JSON. A downloaded document is only
    /// written to the cache once it parses; an invalid one falls through to the next format.
    pub async fn records(&self, year: i32) -> Result<Vec<RawRecord>, SourceError> {
        for format in DocumentFormat::ALL {
            let path = self.cache_path(year, format);
            if fs::metadata(&path).await.is_ok() {
                info!("Cache hit for year {} at {:?}", year, path);
                let bytes = fs::read(&path)
                    .await
                    .map_err(|e| SourceError::CacheRead(path.clone(), e))?;
                return parse_blocking(bytes, format).await;
            }
        }

        warn!("Cache miss for year {}. Downloading.", year);
        let mut errors = Vec::new();
        for format in DocumentFormat::ALL {
            match self.download(&file_name(year, format)).await {
                Ok(bytes) => match parse_blocking(bytes.clone(), format).await {
                    Ok(records) => {
                        let path = self.cache_path(year, format);
                        self.write_cache(&path, bytes).await?;
                        info!("Cached {} data for year {} to {:?}", format, year, path);
                        return Ok(records);
                    }
                    Err(e) => {
                        warn!("Downloaded {} document for year {} is invalid: {}", format, year, e);
                        errors.push(e);
                    }
                },
                Err(e) => {
                    debug!("No {} document for year {}: {}", format, year, e);
                    errors.push(e);
                }
            }
        }

        // A 404 for one format says nothing about the other; report the first real failure.
        match errors.into_iter().find(|e| !is_not_found(e)) {
            Some(e) => Err(e),
            None => Err(SourceError::YearNotFound(year)),
        }
    }

    /// Years offered by the data server, merged with the years already cached.
    ///
    /// The server's directory index is scanned for `<year>.xml` / `<year>.json` links. When
    /// nothing is found the [`FALLBACK_YEARS`] are returned.
    pub async fn available_years(&self) -> Vec<i32> {
        let mut years = BTreeSet::new();

        match self.fetch_listing().await {
            Ok(listing) => years.extend(years_in_listing(&listing)),
            Err(e) => warn!("Could not list years at {}: {}", self.base_url, e),
        }
        match self.cached_years().await {
            Ok(cached) => years.extend(cached),
            Err(e) => debug!("Could not scan cache directory {:?}: {}", self.cache_dir, e),
        }

        if years.is_empty() {
            warn!("No years found, using fallback range {:?}", FALLBACK_YEARS);
            return FALLBACK_YEARS.collect();
        }
        years.into_iter().collect()
    }

    async fn fetch_listing(&self) -> Result<String, SourceError> {
        let bytes = self.download("").await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn cached_years(&self) -> Result<Vec<i32>, std::io::Error> {
        let mut entries = fs::read_dir(&self.cache_dir).await?;
        let mut years = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                years.extend(year_of_file_name(name));
            }
        }
        Ok(years)
    }

    async fn download(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        let url = format!("{}{}", self.base_url, name);
        info!("Downloading data from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    SourceError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    SourceError::NetworkRequest(url, e)
                });
            }
        };

        let stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
        let mut reader = StreamReader::new(stream);
        let mut body = Vec::new();
        reader.read_to_end(&mut body).await?;
        info!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Writes through a temp file in the cache directory so a failed download never leaves
    /// a truncated document behind.
    async fn write_cache(&self, path: &Path, bytes: Vec<u8>) -> Result<(), SourceError> {
        fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| SourceError::CacheWrite(self.cache_dir.clone(), e))?;

        let dir = self.cache_dir.clone();
        let path_buf = path.to_path_buf();
        task::spawn_blocking(move || {
            let mut temp_file = NamedTempFile::new_in(&dir)
                .map_err(|e| SourceError::CacheWrite(path_buf.clone(), e))?;
            temp_file
                .write_all(&bytes)
                .map_err(|e| SourceError::CacheWrite(path_buf.clone(), e))?;
            temp_file
                .persist(&path_buf)
                .map_err(|e| SourceError::CacheWrite(path_buf.clone(), e.error))?;
            Ok::<(), SourceError>(())
        })
        .await??;
        Ok(())
    }
}

async fn parse_blocking(
    bytes: Vec<u8>,
    format: DocumentFormat,
) -> Result<Vec<RawRecord>, SourceError> {
    task::spawn_blocking(move || parse_document(&bytes, format)).await?
}

fn is_not_found(error: &SourceError) -> bool {
    matches!(error, SourceError::HttpStatus { status, .. } if *status == StatusCode::NOT_FOUND)
}

fn file_name(year: i32, format: DocumentFormat) -> String {
    format!("{}.{}", year, format.extension())
}

/// `2010.xml` → `Some(2010)`; anything but digits followed by a known extension → `None`.
fn year_of_file_name(name: &str) -> Option<i32> {
    let (stem, extension) = name.rsplit_once('.')?;
    DocumentFormat::from_extension(extension)?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

/// Years linked from an HTML directory index.
fn years_in_listing(listing: &str) -> BTreeSet<i32> {
    listing
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '.'))
        .filter_map(year_of_file_name)
        .collect()
}
