//! NSGA-III reference-point generation (§3, §9), generated once at initialization
//! and never mutated.
//!
//! The teacher generates its reference set with a Das–Dennis / Das–Darren-1998
//! lattice (`optirustic/src/utils/reference_points.rs::DasDarren1998`). Per §9 this
//! spec deviates deliberately and instead generates the set by farthest-point
//! sampling, following `original_source/src/reference_points.h`
//! (`generateRefPoints`/`randomSimplexPoint`) nearly verbatim: sample a candidate
//! pool uniformly on the unit simplex, seed the reference set with one random
//! point, then greedily add whichever candidate maximizes its distance to the
//! nearest already-chosen reference point.

use rand::Rng;

/// Sample one point uniformly on the unit simplex in `dim` dimensions, via
/// normalized `Exp(1)` draws (this is the standard way to sample a uniform
/// Dirichlet(1, ..., 1), which is the uniform distribution on the simplex).
fn random_simplex_point(dim: usize, rng: &mut impl Rng) -> Vec<f64> {
    let mut point: Vec<f64> = (0..dim).map(|_| -(rng.gen::<f64>().ln())).collect();
    let sum: f64 = point.iter().sum();
    for v in &mut point {
        *v /= sum;
    }
    point
}

fn squared_euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Generate `n` reference points on the unit simplex in `dim` dimensions for
/// NSGA-III, by farthest-point sampling from a candidate pool of size
/// `max(10, 2·dim)·n − 1` (§9 "Reference-point set sizing").
pub fn generate_reference_points(n: usize, dim: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    assert!(n > 0, "at least one reference point must be requested");
    assert!(dim > 1, "reference points need at least two objectives");

    let pool_size = std::cmp::max(10, 2 * dim) * n - 1;
    let mut candidates: Vec<Vec<f64>> = (0..pool_size).map(|_| random_simplex_point(dim, rng)).collect();

    let mut refs = Vec::with_capacity(n);
    refs.push(random_simplex_point(dim, rng));

    let mut min_distances: Vec<f64> = vec![f64::INFINITY; candidates.len()];
    while refs.len() < n {
        let last = refs.last().unwrap();
        for (candidate, dmin) in candidates.iter().zip(min_distances.iter_mut()) {
            let d = squared_euclidean_distance(candidate, last);
            if d < *dmin {
                *dmin = d;
            }
        }

        let argmax = min_distances
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .unwrap();

        refs.push(candidates.swap_remove(argmax));
        min_distances.swap_remove(argmax);
    }

    refs
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_point_lies_on_the_unit_simplex() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let points = generate_reference_points(12, 3, &mut rng);
        for p in &points {
            let sum: f64 = p.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
            assert!(p.iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn requested_count_is_generated() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let points = generate_reference_points(20, 3, &mut rng);
        assert_eq!(points.len(), 20);
    }

    #[test]
    fn each_new_point_maximises_distance_to_already_chosen() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let points = generate_reference_points(8, 3, &mut rng);
        // every pair of returned points should be meaningfully separated: a
        // degenerate generator that just repeats the seed point would fail this.
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                assert!(squared_euclidean_distance(&points[i], &points[j]) > 1e-9);
            }
        }
    }
}
