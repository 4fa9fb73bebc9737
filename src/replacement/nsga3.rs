//! NSGA-III niche-preserving truncation (§4.6), ported from the teacher's
//! `NSGA3::evolve` (`optirustic/src/algorithms/nsga3/mod.rs`): fill whole
//! fronts, then use Algorithm 4 niching to fill the rest of the population from
//! the first overflowing front.

use std::collections::HashMap;

use rand::Rng;

use crate::candidate::Candidate;
use crate::gene::Gene;
use crate::pareto::associate::find_closest_reference;
use crate::pareto::niching::niche_fill;
use crate::pareto::normalise::NormalisationState;
use crate::pareto::sort::fast_non_dominated_sort;

/// Concatenate previous population and children (`pool`), non-dominated sort,
/// refresh ideal/extreme/nadir from the pool, associate every candidate with
/// its closest reference point, fill whole fronts, then niche-fill the
/// remainder from the first overflowing front (§4.6).
pub fn truncate<G: Gene>(
    mut pool: Vec<Candidate<G>>,
    target_size: usize,
    reference_points: &[Vec<f64>],
    normalisation: &mut NormalisationState,
    rng: &mut impl Rng,
) -> Vec<Candidate<G>> {
    for candidate in pool.iter_mut() {
        candidate.reset_bookkeeping();
    }

    let fitnesses: Vec<&[f64]> = pool.iter().map(|c| c.fitness.as_slice()).collect();
    let sort_result = fast_non_dominated_sort(&fitnesses, false);
    for (idx, &rank) in sort_result.ranks.iter().enumerate() {
        pool[idx].rank = rank;
    }

    normalisation.update(&fitnesses);
    for candidate in pool.iter_mut() {
        let normalised = normalisation.normalise(&candidate.fitness);
        let (ref_idx, dist) = find_closest_reference(reference_points, &normalised);
        candidate.ref_idx = Some(ref_idx);
        candidate.distance = dist;
    }

    let mut new_pool: Vec<Candidate<G>> = Vec::with_capacity(target_size);
    let mut overflowing_front: Option<Vec<usize>> = None;

    for front in sort_result.fronts {
        if new_pool.len() + front.len() <= target_size {
            new_pool.extend(front.iter().map(|&i| pool[i].clone()));
        } else if new_pool.len() == target_size {
            break;
        } else {
            overflowing_front = Some(front);
            break;
        }
    }

    let mut rho_j: HashMap<usize, usize> = (0..reference_points.len()).map(|i| (i, 0)).collect();
    for candidate in &new_pool {
        if let Some(idx) = candidate.ref_idx {
            *rho_j.entry(idx).or_insert(0) += 1;
        }
    }

    if let Some(front) = overflowing_front {
        let needed = target_size - new_pool.len();
        let potential_ref_idx: Vec<usize> = front.iter().map(|&i| pool[i].ref_idx.expect("associated above")).collect();
        let potential_distance: Vec<f64> = front.iter().map(|&i| pool[i].distance).collect();

        let chosen_local = niche_fill(&potential_ref_idx, &potential_distance, &mut rho_j, needed, rng);
        new_pool.extend(chosen_local.into_iter().map(|local| pool[front[local]].clone()));
    }

    for candidate in new_pool.iter_mut() {
        if let Some(idx) = candidate.ref_idx {
            candidate.niche_count = rho_j[&idx];
        }
    }

    new_pool
}
