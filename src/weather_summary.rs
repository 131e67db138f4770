//! The main entry point: loads the raw records of a range of years and turns them into a
//! filled monthly [`Grid`].

use crate::aggregation::aggregator::aggregate;
use crate::aggregation::normalizer::normalize;
use crate::error::WindSolarError;
use crate::source::year_source::{YearSource, DEFAULT_BASE_URL};
use crate::types::grid::Grid;
use crate::types::interpolation::Interpolation;
use crate::types::month_set::MonthSet;
use crate::utils::{default_cache_dir, prepare_cache_dir};
use bon::bon;
use log::info;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Client for monthly wind-speed and solar-radiation summaries.
///
/// Yearly documents are cached on disk; create the client with [`WeatherSummary::new()`]
/// for the default cache location or [`WeatherSummary::with_cache_folder()`] to choose one.
///
/// # Examples
///
/// ```no_run
/// # use windsolar::{Interpolation, MonthSet, WeatherSummary, WindSolarError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WindSolarError> {
/// let client = WeatherSummary::new().await?;
///
/// let grid = client
///     .summary(2010..=2011)
///     .months(MonthSet::parse(["1", "2", "3"]))
///     .interpolation(Interpolation::Spline)
///     .call()
///     .await?;
///
/// println!("{}", serde_json::to_string_pretty(&grid).unwrap());
/// # Ok(())
/// # }
/// ```
pub struct WeatherSummary {
    source: YearSource,
}

#[bon]
impl WeatherSummary {
    /// Creates a client caching documents in `cache_folder`, which is created if missing.
    ///
    /// # Errors
    ///
    /// Returns [`WindSolarError::CacheDirCreation`] if the directory cannot be created.
    pub async fn with_cache_folder(cache_folder: PathBuf) -> Result<Self, WindSolarError> {
        prepare_cache_dir(&cache_folder)
            .await
            .map_err(|e| WindSolarError::CacheDirCreation(cache_folder.clone(), e))?;
        Ok(Self {
            source: YearSource::new(&cache_folder, DEFAULT_BASE_URL),
        })
    }

    /// Creates a client using `<system cache dir>/windsolar_cache`.
    ///
    /// # Errors
    ///
    /// Returns [`WindSolarError::CacheDirResolution`] if there is no system cache directory
    /// and [`WindSolarError::CacheDirCreation`] if it cannot be created.
    pub async fn new() -> Result<Self, WindSolarError> {
        let cache_folder = default_cache_dir().map_err(WindSolarError::CacheDirResolution)?;
        Self::with_cache_folder(cache_folder).await
    }

    /// Downloads missing years from `base_url` instead of the default data server.
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let cache_dir = self.source.cache_dir().to_path_buf();
        Self {
            source: YearSource::new(&cache_dir, base_url),
        }
    }

    pub fn source(&self) -> &YearSource {
        &self.source
    }

    /// Years the data server offers, see [`YearSource::available_years`].
    pub async fn available_years(&self) -> Vec<i32> {
        self.source.available_years().await
    }

    /// Summarizes the given years.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.months(MonthSet)`: months to aggregate and fill (default: all twelve).
    /// * `.interpolation(Interpolation)`: strategy for empty months (default: none, gaps
    ///   stay empty).
    ///
    /// Every requested year is present in the returned grid, with all twelve months, before
    /// interpolation runs, so a year without records still has its requested months filled.
    ///
    /// # Errors
    ///
    /// Returns [`WindSolarError::Source`] if the records of any year cannot be loaded.
    #[builder(start_fn = summary)]
    #[doc(hidden)]
    pub async fn build_summary(
        &self,
        #[builder(start_fn)] years: RangeInclusive<i32>,
        months: Option<MonthSet>,
        interpolation: Option<Interpolation>,
    ) -> Result<Grid, WindSolarError> {
        let months = months.unwrap_or_else(MonthSet::all);

        let mut records = Vec::new();
        for year in years.clone() {
            records.extend(self.source.records(year).await?);
        }
        info!(
            "Summarizing {} records for {:?} with {} months requested",
            records.len(),
            years,
            months.len()
        );

        let mut grid = aggregate(records.iter().map(normalize), &months);
        for year in years {
            grid.ensure_year(year);
        }
        if let Some(strategy) = interpolation {
            grid.interpolate(strategy, &months);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::coordinate::Coordinate;
    use tempfile::tempdir;

    const YEAR_2010: &str = r#"{"weather": {"record": [
        {"date": "01/01/2010", "time": "00:00", "ws": 10, "sr": 6000},
        {"date": "01/03/2010", "time": "00:00", "ws": 20, "sr": 12000},
        {"date": "01/05/2010", "time": "00:00", "ws": 30, "sr": 18000}
    ]}}"#;

    async fn client_with_2010(
    ) -> Result<(WeatherSummary, tempfile::TempDir), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("2010.json"), YEAR_2010)?;
        let client = WeatherSummary::with_cache_folder(dir.path().to_path_buf())
            .await?
            .with_base_url("http://127.0.0.1:9/");
        Ok((client, dir))
    }

    #[tokio::test]
    async fn test_summary_linear() -> Result<(), Box<dyn std::error::Error>> {
        let (client, _dir) = client_with_2010().await?;
        let grid = client
            .summary(2010..=2010)
            .months(MonthSet::parse(["1", "2", "3"]))
            .interpolation(Interpolation::Linear)
            .call()
            .await?;

        let feb = grid.get(Coordinate::new(2010, 2)).unwrap();
        assert_eq!(feb.count, 0);
        assert!((feb.wind_speed - 54.0).abs() < 1e-9);
        assert!((feb.solar_radiation - 1.5).abs() < 1e-9);
        // May was not requested, so it is neither aggregated nor filled.
        assert!(grid.get(Coordinate::new(2010, 5)).is_none());
        assert!(grid.get(Coordinate::new(2010, 4)).is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_summary_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let (client, _dir) = client_with_2010().await?;
        let grid = client.summary(2010..=2010).call().await?;
        assert_eq!(grid.cells().filter(|(_, c)| c.is_some()).count(), 3);
        assert!(grid.get(Coordinate::new(2010, 2)).is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_summary_spline_from_selector() -> Result<(), Box<dyn std::error::Error>> {
        let (client, _dir) = client_with_2010().await?;
        let grid = client
            .summary(2010..=2010)
            .maybe_interpolation(Interpolation::from_selector("Spline"))
            .call()
            .await?;
        // Known months 1, 3, 5 around April: neighbors 3, 5, 1.
        let april = grid.get(Coordinate::new(2010, 4)).unwrap();
        assert!(april.is_synthetic());
        // Blend runs from May (108 km/h) to January (36 km/h).
        assert!((april.wind_speed - 90.0).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn test_year_without_requested_month_is_filled() -> Result<(), Box<dyn std::error::Error>>
    {
        let dir = tempdir()?;
        let year = |date: &str, ws: u32| {
            format!(
                r#"{{"weather": {{"record": [{{"date": "{}", "time": "00:00", "ws": {}, "sr": 0}}]}}}}"#,
                date, ws
            )
        };
        std::fs::write(dir.path().join("2010.json"), year("01/01/2010", 10))?;
        std::fs::write(dir.path().join("2011.json"), year("01/02/2011", 20))?;
        std::fs::write(dir.path().join("2012.json"), year("01/01/2012", 30))?;
        let client = WeatherSummary::with_cache_folder(dir.path().to_path_buf())
            .await?
            .with_base_url("http://127.0.0.1:9/");

        let grid = client
            .summary(2010..=2012)
            .months(MonthSet::parse(["1"]))
            .interpolation(Interpolation::Linear)
            .call()
            .await?;

        // 2011 only has February, which was not requested.
        let january = grid.get(Coordinate::new(2011, 1)).unwrap();
        assert_eq!(january.count, 0);
        assert!((january.wind_speed - 72.0).abs() < 1e-9);
        assert!(grid.get(Coordinate::new(2011, 2)).is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_year_is_error() -> Result<(), Box<dyn std::error::Error>> {
        let (client, _dir) = client_with_2010().await?;
        let result = client.summary(2010..=2011).call().await;
        assert!(matches!(result, Err(WindSolarError::Source(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_with_cache_folder_creates_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let cache = dir.path().join("nested");
        let client = WeatherSummary::with_cache_folder(cache.clone()).await?;
        assert!(cache.is_dir());
        assert_eq!(client.source().cache_dir(), cache.as_path());
        Ok(())
    }
}
