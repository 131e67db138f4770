use crate::types::observation::Observation;
use serde::{Deserialize, Serialize};

/// Metres per second to kilometres per hour.
pub const MS_TO_KMH: f64 = 3.6;
/// Summed W/m² readings (10 minute interval) to kWh/m².
pub const WM2_TO_KWHM2: f64 = 1.0 / 6000.0;

/// Summary of one month of observations.
///
/// `wind_speed` is the average wind speed in km/h and `solar_radiation` is the total
/// solar radiation in kWh/m². `count` is the number of measured observations; an
/// interpolated cell always has `count == 0`.
///
/// Serialized with the short field names `amount`, `ws` and `sr`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    #[serde(rename = "amount")]
    pub count: u32,
    #[serde(rename = "ws")]
    pub wind_speed: f64,
    #[serde(rename = "sr")]
    pub solar_radiation: f64,
}

impl MonthlyAggregate {
    /// A synthetic aggregate carrying the given values.
    pub fn synthetic(wind_speed: f64, solar_radiation: f64) -> Self {
        Self {
            count: 0,
            wind_speed,
            solar_radiation,
        }
    }

    /// The all-zero aggregate written by linear interpolation when it lacks neighbors.
    pub fn zero() -> Self {
        Self::synthetic(0.0, 0.0)
    }

    pub fn is_synthetic(&self) -> bool {
        self.count == 0
    }
}

/// Running sums for one (year, month) group, in source units (m/s and W/m²).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct MonthlyAccumulator {
    count: u32,
    wind_speed_sum: f64,
    solar_radiation_sum: f64,
}

impl MonthlyAccumulator {
    pub(crate) fn add(&mut self, observation: &Observation) {
        self.count += 1;
        self.wind_speed_sum += observation.wind_speed;
        self.solar_radiation_sum += observation.solar_radiation;
    }

    /// Converts the sums into an average km/h and a total kWh/m².
    /// Returns `None` when nothing was added.
    pub(crate) fn finish(self) -> Option<MonthlyAggregate> {
        if self.count == 0 {
            return None;
        }
        Some(MonthlyAggregate {
            count: self.count,
            wind_speed: self.wind_speed_sum * MS_TO_KMH / f64::from(self.count),
            solar_radiation: self.solar_radiation_sum * WM2_TO_KWHM2,
        })
    }
}
