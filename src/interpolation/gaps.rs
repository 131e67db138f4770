use crate::types::coordinate::Coordinate;
use crate::types::grid::Grid;

/// Known (measured or already filled) and unknown (empty) cells of a grid, each list in
/// chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gaps {
    pub known: Vec<Coordinate>,
    pub unknown: Vec<Coordinate>,
}

/// Splits every cell of `grid` into known and unknown coordinates.
pub fn locate_gaps(grid: &Grid) -> Gaps {
    let mut gaps = Gaps::default();
    for (at, cell) in grid.cells() {
        match cell {
            Some(_) => gaps.known.push(at),
            None => gaps.unknown.push(at),
        }
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::aggregate::MonthlyAggregate;

    #[test]
    fn test_partition_is_complete_and_sorted() {
        let mut grid = Grid::new();
        grid.ensure_year(2011);
        grid.set(Coordinate::new(2010, 5), Some(MonthlyAggregate::zero()));
        grid.set(Coordinate::new(2011, 1), Some(MonthlyAggregate::zero()));

        let gaps = locate_gaps(&grid);
        assert_eq!(
            gaps.known,
            vec![Coordinate::new(2010, 5), Coordinate::new(2011, 1)]
        );
        assert_eq!(gaps.unknown.len(), 22);
        assert!(gaps.unknown.windows(2).all(|w| w[0] < w[1]));
        assert!(!gaps.unknown.contains(&Coordinate::new(2010, 5)));
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(locate_gaps(&Grid::new()), Gaps::default());
    }
}
