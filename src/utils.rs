//! Location of the on-disk document cache.

use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// `<platform cache dir>/windsolar_cache`, e.g. `~/.cache/windsolar_cache` on Linux.
pub fn default_cache_dir() -> io::Result<PathBuf> {
    let base = dirs::cache_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "platform has no cache directory")
    })?;
    Ok(base.join("windsolar_cache"))
}

/// Creates `path` and its parents. Fails when something other than a directory sits there.
pub async fn prepare_cache_dir(path: &Path) -> io::Result<()> {
    if fs::try_exists(path).await? {
        debug!("Reusing document cache at {:?}", path);
    } else {
        info!("Creating document cache at {:?}", path);
    }
    fs::create_dir_all(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_cache_dir_name() {
        if let Ok(dir) = default_cache_dir() {
            assert!(dir.ends_with("windsolar_cache"));
        }
    }

    #[tokio::test]
    async fn test_creates_missing_directory() -> io::Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("years").join("cache");
        prepare_cache_dir(&nested).await?;
        assert!(nested.is_dir());
        prepare_cache_dir(&nested).await
    }

    #[tokio::test]
    async fn test_file_in_the_way() -> io::Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("cache");
        std::fs::write(&file, "2010")?;
        assert!(prepare_cache_dir(&file).await.is_err());
        assert!(file.is_file());
        Ok(())
    }
}
