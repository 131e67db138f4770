use crate::aggregation::aggregator::aggregate;
use crate::aggregation::normalizer::normalize;
use crate::types::grid::Grid;
use crate::types::interpolation::Interpolation;
use crate::types::month_set::MonthSet;
use crate::types::observation::RawRecord;
use std::borrow::Borrow;

/// Normalizes, aggregates and optionally interpolates a chronological record stream.
///
/// With `interpolation == None` the grid is returned with its gaps left empty.
///
/// # Examples
///
/// ```
/// use windsolar::{summarize, Coordinate, Interpolation, MonthSet, RawRecord};
///
/// let records = vec![
///     RawRecord::new("01/01/2010", "00:00", 10.0, 6000.0),
///     RawRecord::new("01/03/2010", "00:00", 20.0, 12000.0),
/// ];
/// let months = MonthSet::parse(["1", "2", "3"]);
/// let grid = summarize(&records, &months, Some(Interpolation::Linear));
///
/// let february = grid.get(Coordinate::new(2010, 2)).unwrap();
/// assert_eq!(february.count, 0);
/// assert!((february.wind_speed - 54.0).abs() < 1e-9);
/// assert!((february.solar_radiation - 1.5).abs() < 1e-9);
/// ```
pub fn summarize<I>(records: I, months: &MonthSet, interpolation: Option<Interpolation>) -> Grid
where
    I: IntoIterator,
    I::Item: Borrow<RawRecord>,
{
    let observations = records.into_iter().map(|record| normalize(record.borrow()));
    let mut grid = aggregate(observations, months);
    if let Some(strategy) = interpolation {
        grid.interpolate(strategy, months);
    }
    grid
}
