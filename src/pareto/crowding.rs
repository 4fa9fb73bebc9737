//! Per-front crowding distance (§4.4), ported from the older snapshot's
//! `NSGA2::set_crowding_distance`. The teacher stores the running distance as
//! `DataValue::Real(f64::MAX)` for the extremes "because [`f64::INFINITY`] is not
//! supported by serde" — a constraint this crate does not have, since it carries
//! no JSON export, so extremes are set to actual `f64::INFINITY` here (§3:
//! "distance: ... or perpendicular distance").

const DELTA_RANGE_EPSILON: f64 = f64::EPSILON;

/// Assign crowding distance to every member of one front, in place. `fitnesses[i]`
/// is the objective vector of the front member stored at `distances[i]`.
pub fn set_crowding_distance(fitnesses: &[&[f64]], distances: &mut [f64]) {
    let n = fitnesses.len();
    debug_assert_eq!(n, distances.len());

    if n < 3 {
        distances.iter_mut().for_each(|d| *d = f64::INFINITY);
        return;
    }
    distances.iter_mut().for_each(|d| *d = 0.0);

    let num_objectives = fitnesses[0].len();
    for obj in 0..num_objectives {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| fitnesses[a][obj].total_cmp(&fitnesses[b][obj]));

        let min = fitnesses[order[0]][obj];
        let max = fitnesses[order[n - 1]][obj];
        let delta_range = max - min;

        if delta_range.abs() < DELTA_RANGE_EPSILON {
            distances.iter_mut().for_each(|d| *d = f64::INFINITY);
            return;
        }

        distances[order[0]] = f64::INFINITY;
        distances[order[n - 1]] = f64::INFINITY;

        for i in 1..(n - 1) {
            let idx = order[i];
            if distances[idx].is_finite() {
                let delta = (fitnesses[order[i + 1]][obj] - fitnesses[order[i - 1]][obj]) / delta_range;
                distances[idx] += delta;
            }
        }
    }
}
