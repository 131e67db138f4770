use super::{x_of, Sample};
use crate::types::aggregate::MonthlyAggregate;
use crate::types::coordinate::Coordinate;

/// Three-point Lagrange polynomial evaluated at `target`.
pub(super) fn quadratic(
    target: Coordinate,
    neighbors: &[Option<Sample>],
) -> Option<MonthlyAggregate> {
    let [Some(p0), Some(p1), Some(p2)] = neighbors else {
        return None;
    };
    let x = x_of(target);
    let (x0, x1, x2) = (p0.x(), p1.x(), p2.x());

    let l0 = (x - x1) * (x - x2) / ((x0 - x1) * (x0 - x2));
    let l1 = (x - x0) * (x - x2) / ((x1 - x0) * (x1 - x2));
    let l2 = (x - x0) * (x - x1) / ((x2 - x0) * (x2 - x1));
    let polynomial = |y0: f64, y1: f64, y2: f64| y0 * l0 + y1 * l1 + y2 * l2;

    Some(MonthlyAggregate::synthetic(
        polynomial(p0.value.wind_speed, p1.value.wind_speed, p2.value.wind_speed),
        polynomial(
            p0.value.solar_radiation,
            p1.value.solar_radiation,
            p2.value.solar_radiation,
        ),
    ))
}
