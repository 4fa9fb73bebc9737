//! NSGA-III niche-preserving fill (§4.6 step list), Algorithm 4 of Deb & Jain,
//! ported from `optirustic/src/algorithms/nsga3/niching.rs`'s `Niching::calculate`.
//! The teacher operates on `Individual`s carrying reference-point/distance data
//! fields and a `HashMap`-backed `rho_j` niche-count map; this is the same
//! algorithm working over plain index arrays since this crate keeps niche counts
//! directly on [`crate::candidate::Candidate`] rather than in a side map, except
//! for the transient `rho_j` map the algorithm itself needs while filling.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Iteratively fill `count_to_add` slots from the overflowing front, returning the
/// chosen indices into `potential_ref_idx`/`potential_distance` in selection order
/// (§4.6 steps 1-4). `rho_j` maps reference-point index to the number of already
/// selected population members associated with it; it is mutated as points are
/// chosen, and a reference with no associated candidate left in the front is
/// dropped from consideration (the teacher's "exclude it" step).
pub fn niche_fill(
    potential_ref_idx: &[usize],
    potential_distance: &[f64],
    rho_j: &mut HashMap<usize, usize>,
    count_to_add: usize,
    rng: &mut impl Rng,
) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..potential_ref_idx.len()).collect();
    let mut chosen = Vec::with_capacity(count_to_add);

    while chosen.len() < count_to_add {
        let min_rho = *rho_j.values().min().expect("rho_j must not be empty while filling");
        let j_min_set: Vec<usize> = rho_j
            .iter()
            .filter_map(|(&idx, &count)| (count == min_rho).then_some(idx))
            .collect();

        let j_hat = match j_min_set.len() {
            1 => j_min_set[0],
            _ => *j_min_set.choose(rng).expect("j_min_set is non-empty"),
        };

        let candidates_for_j: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&idx| potential_ref_idx[idx] == j_hat)
            .collect();

        if candidates_for_j.is_empty() {
            rho_j.remove(&j_hat);
            continue;
        }

        let picked = if min_rho == 0 {
            *candidates_for_j
                .iter()
                .min_by(|&&a, &&b| potential_distance[a].total_cmp(&potential_distance[b]))
                .unwrap()
        } else {
            *candidates_for_j.choose(rng).unwrap()
        };

        *rho_j.get_mut(&j_hat).unwrap() += 1;
        remaining.retain(|&idx| idx != picked);
        chosen.push(picked);
    }

    chosen
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn picks_min_distance_when_reference_unassociated() {
        let ref_idx = vec![2, 2];
        let distance = vec![0.4, 0.9];
        let mut rho_j = HashMap::from([(0, 1), (1, 1), (2, 0), (3, 0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let chosen = niche_fill(&ref_idx, &distance, &mut rho_j, 1, &mut rng);

        assert_eq!(rho_j[&2], 1);
        assert_eq!(chosen, vec![0]);
    }

    #[test]
    fn picks_randomly_among_tied_front_members_when_already_associated() {
        let ref_idx = vec![1, 1];
        let distance = vec![99.0, 0.9];
        let mut rho_j = HashMap::from([(0, 1), (1, 1), (2, 0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let chosen = niche_fill(&ref_idx, &distance, &mut rho_j, 1, &mut rng);

        assert_eq!(rho_j[&1], 2);
        assert_eq!(chosen.len(), 1);
    }

    #[test]
    fn unassociated_reference_is_dropped_once_its_candidates_are_exhausted() {
        let ref_idx = vec![0, 0];
        let distance = vec![0.1, 0.2];
        let mut rho_j = HashMap::from([(0, 0), (5, 0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let chosen = niche_fill(&ref_idx, &distance, &mut rho_j, 2, &mut rng);
        assert_eq!(chosen.len(), 2);
        assert!(!rho_j.contains_key(&5));
    }
}
