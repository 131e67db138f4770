use super::{x_of, Sample};
use crate::types::aggregate::MonthlyAggregate;
use crate::types::coordinate::Coordinate;

/// Hermite-style cubic between `neighbors[1]` (center) and `neighbors[2]` (right).
///
/// Both end slopes are the center→right difference quotient, so `neighbors[0]` only has
/// to be present and does not shape the curve.
pub(super) fn spline(
    target: Coordinate,
    neighbors: &[Option<Sample>],
) -> Option<MonthlyAggregate> {
    let [Some(_), Some(center), Some(right)] = neighbors else {
        return None;
    };
    let dx = right.x() - center.x();
    let t = (x_of(target) - center.x()) / dx;

    let blend = |y1: f64, y2: f64| {
        let dy = y2 - y1;
        let k1 = dy / dx;
        let k2 = dy / dx;
        let a = k1 * dx - dy;
        let b = -k2 * dx + dy;
        (1.0 - t) * y1 + t * y2 + t * (1.0 - t) * ((1.0 - t) * a + t * b)
    };

    Some(MonthlyAggregate::synthetic(
        blend(center.value.wind_speed, right.value.wind_speed),
        blend(center.value.solar_radiation, right.value.solar_radiation),
    ))
}
