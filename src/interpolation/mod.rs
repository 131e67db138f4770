//! Filling of months without observations.
//!
//! Filling happens in three steps: [`gaps::locate_gaps`] splits the grid into known and
//! unknown cells, [`neighbors::nearest_known`] picks the known cells closest to each unknown
//! one, and the selected [`Interpolation`] turns those neighbors into a synthetic
//! [`MonthlyAggregate`] (`count == 0`).

pub mod gaps;
mod linear;
pub mod neighbors;
mod quadratic;
mod spline;

use crate::interpolation::gaps::locate_gaps;
use crate::interpolation::neighbors::nearest_known;
use crate::types::aggregate::MonthlyAggregate;
use crate::types::coordinate::Coordinate;
use crate::types::grid::Grid;
use crate::types::interpolation::Interpolation;
use crate::types::month_set::MonthSet;
use log::debug;

/// A known cell used as interpolation input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub at: Coordinate,
    pub value: MonthlyAggregate,
}

impl Sample {
    pub fn new(at: Coordinate, value: MonthlyAggregate) -> Self {
        Self { at, value }
    }

    pub(crate) fn x(&self) -> f64 {
        self.at.total_months() as f64
    }
}

pub(crate) fn x_of(at: Coordinate) -> f64 {
    at.total_months() as f64
}

impl Interpolation {
    /// Estimates the aggregate at `target` from the neighbors chosen by
    /// [`nearest_known`], in the order that function returns them.
    ///
    /// Missing neighbors (`None` entries or a short slice) make linear interpolation return
    /// the zero aggregate and the other two strategies return `None`.
    pub fn interpolate(
        self,
        target: Coordinate,
        neighbors: &[Option<Sample>],
    ) -> Option<MonthlyAggregate> {
        match self {
            Interpolation::Linear => Some(linear::linear(target, neighbors)),
            Interpolation::Quadratic => quadratic::quadratic(target, neighbors),
            Interpolation::Spline => spline::spline(target, neighbors),
        }
    }
}

impl Grid {
    /// Fills empty cells of the requested months with `strategy`, returning how many cells
    /// were written.
    ///
    /// Neighbors are always measured cells of the grid as it was before this call; cells
    /// filled here never feed other estimates. Months outside `months` are left empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use windsolar::{Coordinate, Grid, Interpolation, MonthSet, MonthlyAggregate};
    ///
    /// let measured = |ws| Some(MonthlyAggregate { count: 10, wind_speed: ws, solar_radiation: 1.0 });
    /// let mut grid = Grid::new();
    /// grid.set(Coordinate::new(2010, 1), measured(10.0));
    /// grid.set(Coordinate::new(2010, 3), measured(20.0));
    ///
    /// let filled = grid.interpolate(Interpolation::Linear, &MonthSet::parse(["1", "2", "3"]));
    /// assert_eq!(filled, 1);
    ///
    /// let february = grid.get(Coordinate::new(2010, 2)).unwrap();
    /// assert_eq!(february.count, 0);
    /// assert!((february.wind_speed - 15.0).abs() < 1e-9);
    /// assert!(grid.get(Coordinate::new(2010, 4)).is_none());
    /// ```
    pub fn interpolate(&mut self, strategy: Interpolation, months: &MonthSet) -> usize {
        let gaps = locate_gaps(self);
        let k = strategy.neighbor_count();

        let estimates: Vec<(Coordinate, MonthlyAggregate)> = gaps
            .unknown
            .iter()
            .filter(|target| months.contains(target.month))
            .filter_map(|&target| {
                let samples: Vec<Option<Sample>> = nearest_known(&gaps.known, target, k)
                    .into_iter()
                    .map(|neighbor| {
                        neighbor.and_then(|at| self.get(at).map(|value| Sample::new(at, *value)))
                    })
                    .collect();
                strategy
                    .interpolate(target, &samples)
                    .map(|estimate| (target, estimate))
            })
            .collect();

        let filled = estimates.len();
        for (at, estimate) in estimates {
            self.set(at, Some(estimate));
        }
        debug!(
            "{} interpolation filled {} of {} empty cells",
            strategy,
            filled,
            gaps.unknown.len()
        );
        filled
    }
}
