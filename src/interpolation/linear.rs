use super::{x_of, Sample};
use crate::types::aggregate::MonthlyAggregate;
use crate::types::coordinate::Coordinate;

/// Two-point line through `neighbors[0]` and `neighbors[1]`.
/// Anything other than two present neighbors yields [`MonthlyAggregate::zero`].
pub(super) fn linear(target: Coordinate, neighbors: &[Option<Sample>]) -> MonthlyAggregate {
    let [Some(left), Some(right)] = neighbors else {
        return MonthlyAggregate::zero();
    };
    let span = right.x() - left.x();
    let offset = x_of(target) - left.x();
    let estimate = |l: f64, r: f64| l + (r - l) / span * offset;

    MonthlyAggregate::synthetic(
        estimate(left.value.wind_speed, right.value.wind_speed),
        estimate(left.value.solar_radiation, right.value.solar_radiation),
    )
}
