//! Folds observations into monthly aggregates.

use crate::types::aggregate::MonthlyAccumulator;
use crate::types::coordinate::Coordinate;
use crate::types::grid::Grid;
use crate::types::month_set::MonthSet;
use crate::types::observation::Observation;
use chrono::NaiveDateTime;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Aggregates observations into a [`Grid`] of the requested months.
///
/// Observations whose month is not in `months`, or whose year or month could not be parsed,
/// are skipped. The rest are grouped by (year, month) and each group is folded into an
/// average wind speed (km/h) and a total solar radiation (kWh/m²) before being written to
/// the grid, so no cell ever holds a partial sum. Every year with at least one accepted
/// observation is present with all twelve months; months without observations stay `None`.
///
/// The input is expected in chronological order. Records whose date and time go back in
/// time are still added to their own month and counted in a warning.
///
/// # Examples
///
/// ```
/// use windsolar::{aggregate, normalize, Coordinate, MonthSet, RawRecord};
///
/// let records = [
///     RawRecord::new("01/01/2010", "00:00", 10.0, 6000.0),
///     RawRecord::new("01/02/2010", "00:00", 5.0, 0.0),
/// ];
/// let grid = aggregate(records.iter().map(normalize), &MonthSet::parse(["1"]));
///
/// let january = grid.get(Coordinate::new(2010, 1)).unwrap();
/// assert_eq!(january.count, 1);
/// assert!((january.wind_speed - 36.0).abs() < 1e-9);
/// assert!((january.solar_radiation - 1.0).abs() < 1e-9);
/// assert!(grid.get(Coordinate::new(2010, 2)).is_none());
/// ```
pub fn aggregate<I>(observations: I, months: &MonthSet) -> Grid
where
    I: IntoIterator<Item = Observation>,
{
    let mut groups: BTreeMap<Coordinate, MonthlyAccumulator> = BTreeMap::new();
    let mut order = OrderCheck::default();
    let mut skipped = 0usize;

    for observation in observations {
        let (Some(year), Some(month)) = (observation.year, observation.month) else {
            skipped += 1;
            continue;
        };
        if !months.contains(month) {
            skipped += 1;
            continue;
        }
        order.observe(&observation);
        groups
            .entry(Coordinate::new(year, month))
            .or_default()
            .add(&observation);
    }
    if order.backwards > 0 {
        warn!(
            "{} observations went back in time, input is out of order",
            order.backwards
        );
    }
    debug!(
        "Aggregating {} monthly groups, {} records skipped",
        groups.len(),
        skipped
    );

    let mut grid = Grid::new();
    for (at, accumulator) in groups {
        grid.set(at, accumulator.finish());
    }
    grid
}

/// Tracks the latest timestamp seen; observations without a full timestamp are ignored.
#[derive(Default)]
struct OrderCheck {
    latest: Option<NaiveDateTime>,
    backwards: usize,
}

impl OrderCheck {
    /// Returns `true` when `observation` is earlier than one seen before it.
    fn observe(&mut self, observation: &Observation) -> bool {
        let Some(at) = observation.timestamp() else {
            return false;
        };
        match self.latest {
            Some(latest) if at < latest => {
                debug!("Observation at {} follows {}", at, latest);
                self.backwards += 1;
                true
            }
            _ => {
                self.latest = Some(at);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::normalizer::normalize;
    use crate::types::observation::RawRecord;

    fn records(rows: &[(&str, f64, f64)]) -> Vec<Observation> {
        rows.iter()
            .map(|(date, ws, sr)| normalize(&RawRecord::new(date, "12:00", *ws, *sr)))
            .collect()
    }

    #[test]
    fn test_grid_has_twelve_months_per_year() {
        let grid = aggregate(
            records(&[("01/01/2010", 1.0, 1.0), ("01/06/2012", 1.0, 1.0)]),
            &MonthSet::all(),
        );
        assert_eq!(grid.years().collect::<Vec<_>>(), vec![2010, 2012]);
        assert_eq!(grid.cells().count(), 24);
        assert!(!grid.contains_year(2011));
    }

    #[test]
    fn test_months_outside_request_are_skipped() {
        let grid = aggregate(
            records(&[("01/01/2010", 1.0, 1.0), ("01/02/2010", 2.0, 2.0)]),
            &MonthSet::parse(["2"]),
        );
        assert!(grid.get(Coordinate::new(2010, 1)).is_none());
        assert_eq!(grid.get(Coordinate::new(2010, 2)).unwrap().count, 1);
    }

    #[test]
    fn test_year_with_only_unrequested_months_is_absent() {
        let grid = aggregate(records(&[("01/01/2010", 1.0, 1.0)]), &MonthSet::parse(["5"]));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_group_average_and_total() {
        let grid = aggregate(
            records(&[
                ("01/03/2010", 2.0, 1200.0),
                ("02/03/2010", 4.0, 1800.0),
                ("03/03/2010", 6.0, 3000.0),
                ("01/04/2010", 10.0, 6000.0),
            ]),
            &MonthSet::all(),
        );
        let march = grid.get(Coordinate::new(2010, 3)).unwrap();
        assert_eq!(march.count, 3);
        assert!((march.wind_speed - 4.0 * 3.6).abs() < 1e-9);
        assert!((march.solar_radiation - 1.0).abs() < 1e-9);

        // A trailing single record closes its own month.
        let april = grid.get(Coordinate::new(2010, 4)).unwrap();
        assert_eq!(april.count, 1);
        assert!((april.wind_speed - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_result_regardless_of_order_within_month() {
        let forward = records(&[("01/03/2010", 2.0, 10.0), ("02/03/2010", 7.0, 30.0)]);
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(
            aggregate(forward, &MonthSet::all()),
            aggregate(backward, &MonthSet::all())
        );
    }

    #[test]
    fn test_interleaved_month_is_merged_into_one_aggregate() {
        let grid = aggregate(
            records(&[
                ("01/01/2010", 2.0, 600.0),
                ("01/02/2010", 9.0, 9000.0),
                ("02/01/2010", 4.0, 1200.0),
            ]),
            &MonthSet::all(),
        );
        let january = grid.get(Coordinate::new(2010, 1)).unwrap();
        assert_eq!(january.count, 2);
        assert!((january.wind_speed - 3.0 * 3.6).abs() < 1e-9);
        assert!((january.solar_radiation - 0.3).abs() < 1e-9);
        assert_eq!(grid.get(Coordinate::new(2010, 2)).unwrap().count, 1);
    }

    #[test]
    fn test_order_check_uses_time_of_day() {
        let mut order = OrderCheck::default();
        let at = |date: &str, time: &str| normalize(&RawRecord::new(date, time, 0.0, 0.0));

        assert!(!order.observe(&at("01/01/2010", "09:00")));
        assert!(!order.observe(&at("01/01/2010", "09:10")));
        // Same day, earlier time.
        assert!(order.observe(&at("01/01/2010", "08:50")));
        // Incomplete timestamps are not compared.
        assert!(!order.observe(&at("01/01/2010", "")));
        assert!(!order.observe(&at("02/01/2010", "00:00")));
        assert_eq!(order.backwards, 1);
    }

    #[test]
    fn test_nan_measurements_do_not_panic() {
        let obs = normalize(&RawRecord {
            ws: crate::types::observation::RawField::Text("n/a".into()),
            ..RawRecord::new("01/03/2010", "00:00", 0.0, 5.0)
        });
        let grid = aggregate([obs], &MonthSet::all());
        let march = grid.get(Coordinate::new(2010, 3)).unwrap();
        assert_eq!(march.count, 1);
        assert!(march.wind_speed.is_nan());
    }

    #[test]
    fn test_unparseable_dates_skipped() {
        let grid = aggregate(records(&[("bad", 1.0, 1.0)]), &MonthSet::all());
        assert!(grid.is_empty());
    }
}
