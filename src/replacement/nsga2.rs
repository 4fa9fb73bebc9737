//! NSGA-II front + crowding-distance truncation (§4.6), ported from the
//! teacher's `NSGA2::evolve` survival loop (`examples/s-simoncelli-optirustic/
//! src/algorithms/nsga2.rs`): fill whole fronts while they fit, then sort the
//! first overflowing front by crowded-compare and take the prefix needed to
//! reach `target_size`.

use std::cmp::Ordering;

use crate::candidate::Candidate;
use crate::gene::Gene;
use crate::operators::comparison::crowded_compare;
use crate::pareto::crowding::set_crowding_distance;
use crate::pareto::sort::fast_non_dominated_sort;

/// Concatenate previous population and children (already done by the caller,
/// `pool`), non-dominated sort, fill whole fronts, and truncate the overflowing
/// front by crowding distance (§4.6).
pub fn truncate<G: Gene>(mut pool: Vec<Candidate<G>>, target_size: usize) -> Vec<Candidate<G>> {
    for candidate in pool.iter_mut() {
        candidate.reset_bookkeeping();
    }

    let fitnesses: Vec<&[f64]> = pool.iter().map(|c| c.fitness.as_slice()).collect();
    let sort_result = fast_non_dominated_sort(&fitnesses, false);
    for (idx, &rank) in sort_result.ranks.iter().enumerate() {
        pool[idx].rank = rank;
    }

    let mut new_pool: Vec<Candidate<G>> = Vec::with_capacity(target_size);
    let mut overflowing_front: Option<Vec<usize>> = None;

    for front in sort_result.fronts {
        if new_pool.len() + front.len() <= target_size {
            assign_crowding_distance(&mut pool, &front);
            new_pool.extend(front.iter().map(|&i| pool[i].clone()));
        } else if new_pool.len() == target_size {
            break;
        } else {
            overflowing_front = Some(front);
            break;
        }
    }

    if let Some(front) = overflowing_front {
        assign_crowding_distance(&mut pool, &front);

        let mut sorted_front = front;
        sorted_front.sort_by(|&a, &b| {
            if crowded_compare(&pool[a], &pool[b]) {
                Ordering::Less
            } else if crowded_compare(&pool[b], &pool[a]) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });

        let needed = target_size - new_pool.len();
        let selected: Vec<usize> = sorted_front.into_iter().take(needed).collect();

        // Recompute crowding distances among the newly added members of the partial
        // front so the next generation's tournaments see consistent values (§4.6).
        assign_crowding_distance(&mut pool, &selected);
        new_pool.extend(selected.iter().map(|&i| pool[i].clone()));
    }

    new_pool
}

fn assign_crowding_distance<G: Gene>(pool: &mut [Candidate<G>], front: &[usize]) {
    let fitnesses: Vec<&[f64]> = front.iter().map(|&i| pool[i].fitness.as_slice()).collect();
    let mut distances = vec![0.0; front.len()];
    set_crowding_distance(&fitnesses, &mut distances);
    for (&i, d) in front.iter().zip(distances) {
        pool[i].distance = d;
    }
}
