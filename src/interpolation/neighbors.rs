use crate::types::coordinate::Coordinate;

/// Picks the `k` known coordinates nearest to `target`.
///
/// `known` must be sorted chronologically and must not contain `target`. Starting from the
/// last known coordinate before `target`, the search alternates one step left and one
/// step right (left first) until `k` neighbors are found or both sides run out. The result
/// always has `k` entries; missing neighbors are `None`.
///
/// Every entry is `None` when fewer than `k` coordinates are known, or when `target` lies
/// before the first or after the last known coordinate, as estimates are never
/// extrapolated.
///
/// # Examples
///
/// ```
/// use windsolar::nearest_known;
/// use windsolar::Coordinate;
///
/// let known: Vec<Coordinate> = [1, 3, 5, 7].map(|m| Coordinate::new(2010, m)).to_vec();
/// let found = nearest_known(&known, Coordinate::new(2010, 4), 3);
/// assert_eq!(
///     found,
///     vec![
///         Some(Coordinate::new(2010, 3)),
///         Some(Coordinate::new(2010, 5)),
///         Some(Coordinate::new(2010, 1)),
///     ]
/// );
/// ```
pub fn nearest_known(
    known: &[Coordinate],
    target: Coordinate,
    k: usize,
) -> Vec<Option<Coordinate>> {
    let before = known.partition_point(|at| *at < target);
    let after = known.partition_point(|at| *at <= target);
    if known.len() < k || before == 0 || after == known.len() {
        return vec![None; k];
    }

    let mut left = known[..before].iter().rev();
    let mut right = known[after..].iter();
    let mut neighbors = Vec::with_capacity(k);
    while neighbors.len() < k {
        let mut stepped = false;
        if let Some(at) = left.next() {
            neighbors.push(Some(*at));
            stepped = true;
        }
        if neighbors.len() < k {
            if let Some(at) = right.next() {
                neighbors.push(Some(*at));
                stepped = true;
            }
        }
        if !stepped {
            break;
        }
    }
    neighbors.resize(k, None);
    neighbors
}
