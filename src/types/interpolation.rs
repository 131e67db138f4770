//! Selection of the gap-filling strategy.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy used to fill months without observations.
///
/// Every strategy needs a fixed number of known neighbors around the missing month,
/// see [`Interpolation::neighbor_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Straight line through the two nearest known months.
    Linear,
    /// Lagrange polynomial through the three nearest known months.
    Quadratic,
    /// Cubic Hermite-style blend between the second and third neighbor.
    Spline,
}

impl Interpolation {
    pub fn neighbor_count(self) -> usize {
        match self {
            Interpolation::Linear => 2,
            Interpolation::Quadratic | Interpolation::Spline => 3,
        }
    }

    /// Parses a strategy selector case-insensitively.
    ///
    /// `"none"`, an empty selector and unknown names all mean "do not interpolate".
    ///
    /// # Examples
    ///
    /// ```
    /// use windsolar::Interpolation;
    ///
    /// assert_eq!(Interpolation::from_selector("Linear"), Some(Interpolation::Linear));
    /// assert_eq!(Interpolation::from_selector("SPLINE"), Some(Interpolation::Spline));
    /// assert_eq!(Interpolation::from_selector("none"), None);
    /// assert_eq!(Interpolation::from_selector("cubic"), None);
    /// ```
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(Interpolation::Linear),
            "quadratic" => Some(Interpolation::Quadratic),
            "spline" => Some(Interpolation::Spline),
            "" | "none" => None,
            other => {
                warn!("Unsupported interpolation '{}', gaps are left unfilled", other);
                None
            }
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interpolation::Linear => "linear",
            Interpolation::Quadratic => "quadratic",
            Interpolation::Spline => "spline",
        };
        write!(f, "{}", name)
    }
}
