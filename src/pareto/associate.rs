//! Reference-point association (§4.4, NSGA-III "Algorithm 3" in Deb & Jain),
//! ported from `optirustic/src/algorithms/nsga3/associate.rs` and its
//! `utils::algebra::perpendicular_distance` helper. §4.4 asks for the squared
//! perpendicular distance rather than the teacher's plain magnitude (saves a
//! `sqrt` per candidate-per-reference-point comparison and is what Deb & Jain's
//! own Algorithm 3 computes); this module otherwise follows the teacher's
//! projection construction verbatim.

/// Squared perpendicular distance from `point` to the line through the origin
/// and `reference` (§4.4). `point` is already ideal/nadir-normalized.
pub fn perpendicular_distance_squared(reference: &[f64], point: &[f64]) -> f64 {
    debug_assert_eq!(reference.len(), point.len());

    let ref_magnitude_sq: f64 = reference.iter().map(|r| r * r).sum();
    let ref_magnitude = ref_magnitude_sq.sqrt();

    let projection = dot(point, reference) / ref_magnitude;

    point
        .iter()
        .zip(reference)
        .map(|(p, r)| {
            let projection_component = projection * r / ref_magnitude;
            (projection_component - p).powi(2)
        })
        .sum()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Find the reference point with the minimum squared perpendicular distance to
/// `point`, returning `(ref_idx, dist)` (§4.4: "store (ref_idx, dist) of the
/// minimum").
pub fn find_closest_reference(reference_points: &[Vec<f64>], point: &[f64]) -> (usize, f64) {
    reference_points
        .iter()
        .map(|r| perpendicular_distance_squared(r, point))
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .expect("reference_points must not be empty")
}
