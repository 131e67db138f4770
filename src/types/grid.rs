//! The year × month matrix produced by aggregation and filled by interpolation.

use crate::types::aggregate::MonthlyAggregate;
use crate::types::coordinate::Coordinate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Twelve month slots of one year, January at index 0.
pub type YearRow = [Option<MonthlyAggregate>; 12];

/// Monthly summaries keyed by year, with a slot for every month of every year present.
///
/// A year is always created with all twelve months, each starting out as `None`, so the
/// grid stays rectangular and every cell has a chronological [`Coordinate`].
///
/// The grid serializes to the nested shape
/// `{ "<year>": { "<month>": { "amount": .., "ws": .., "sr": .. } | null } }`.
///
/// # Examples
///
/// ```
/// use windsolar::{Coordinate, Grid, MonthlyAggregate};
///
/// let mut grid = Grid::new();
/// grid.set(Coordinate::new(2010, 2), Some(MonthlyAggregate::synthetic(12.0, 3.5)));
///
/// assert_eq!(grid.years().collect::<Vec<_>>(), vec![2010]);
/// assert!(grid.get(Coordinate::new(2010, 1)).is_none());
/// assert_eq!(grid.get(Coordinate::new(2010, 2)).unwrap().wind_speed, 12.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    years: BTreeMap<i32, YearRow>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `year` with all months empty if it is not present yet.
    pub fn ensure_year(&mut self, year: i32) -> &mut YearRow {
        self.years.entry(year).or_insert([None; 12])
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    pub fn row(&self, year: i32) -> Option<&YearRow> {
        self.years.get(&year)
    }

    /// The aggregate at `at`, or `None` for an empty cell, an unknown year or an
    /// out-of-range month.
    pub fn get(&self, at: Coordinate) -> Option<&MonthlyAggregate> {
        let index = month_index(at.month)?;
        self.years.get(&at.year)?[index].as_ref()
    }

    /// Writes a cell, creating its year if needed. Months outside 1..=12 are ignored.
    pub fn set(&mut self, at: Coordinate, value: Option<MonthlyAggregate>) {
        if let Some(index) = month_index(at.month) {
            self.ensure_year(at.year)[index] = value;
        }
    }

    /// Every cell in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Option<&MonthlyAggregate>)> + '_ {
        self.years.iter().flat_map(|(&year, row)| {
            row.iter()
                .enumerate()
                .map(move |(i, cell)| (Coordinate::new(year, i as u32 + 1), cell.as_ref()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

fn month_index(month: u32) -> Option<usize> {
    (1..=12).contains(&month).then(|| month as usize - 1)
}

/// Helper so a year row serializes as a map keyed by month number.
struct MonthMap<'a>(&'a YearRow);

impl Serialize for MonthMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(12))?;
        for (i, cell) in self.0.iter().enumerate() {
            map.serialize_entry(&(i as u32 + 1), cell)?;
        }
        map.end()
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.years.len()))?;
        for (year, row) in &self.years {
            map.serialize_entry(year, &MonthMap(row))?;
        }
        map.end()
    }
}
