use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A single cell position in a [`crate::Grid`]: a year and a month number (1-12).
///
/// Coordinates order chronologically, year first and month second, which is the same
/// order as [`Coordinate::total_months`].
///
/// # Examples
///
/// ```
/// use windsolar::Coordinate;
///
/// let march = Coordinate::new(2010, 3);
/// assert_eq!(march.total_months(), 2010 * 12 + 3);
/// assert!(Coordinate::new(2009, 12) < march);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub year: i32,
    pub month: u32,
}

impl Coordinate {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Linear month index `year * 12 + month`, used for ordering and interpolation arithmetic.
    pub fn total_months(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_total_months() {
        let mut coords = vec![
            Coordinate::new(2011, 1),
            Coordinate::new(2010, 12),
            Coordinate::new(2010, 2),
        ];
        coords.sort();
        let totals: Vec<i64> = coords.iter().map(|c| c.total_months()).collect();
        assert!(totals.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(coords[0], Coordinate::new(2010, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(2010, 3).to_string(), "2010-03");
    }
}
