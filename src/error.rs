use crate::source::error::SourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::WeatherSummary`].
#[derive(Debug, Error)]
pub enum WindSolarError {
    /// Loading a year's records failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Document cache {0:?} is not a usable directory")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("No default location for the document cache")]
    CacheDirResolution(#[source] std::io::Error),
}
