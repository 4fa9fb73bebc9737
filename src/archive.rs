//! The optional cross-generation non-dominated archive (§3, §4.7).

use crate::candidate::Candidate;
use crate::gene::Gene;
use crate::pareto::kung::{kung_front, max_extractor_1d};

/// A set of non-dominated candidates accumulated across generations,
/// deduplicated by chromosome equality (§3). Reset on each `run()`.
#[derive(Debug, Clone, Default)]
pub struct Archive<G: Gene> {
    members: Vec<Candidate<G>>,
}

impl<G: Gene> Archive<G> {
    pub fn new() -> Self {
        Archive { members: Vec::new() }
    }

    pub fn members(&self) -> &[Candidate<G>] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Candidate<G>> {
        self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Merge the current population into the running non-dominated set, reduce
    /// to the Pareto front, then deduplicate by chromosome equality (§4.7).
    pub fn update(&mut self, population: &[Candidate<G>]) {
        self.members.extend(population.iter().cloned());

        let fitnesses: Vec<&[f64]> = self.members.iter().map(|c| c.fitness.as_slice()).collect();
        let num_objectives = fitnesses.first().map(|f| f.len()).unwrap_or(0);
        let front_indices = if num_objectives <= 1 {
            max_extractor_1d(&fitnesses)
        } else {
            kung_front(&fitnesses)
        };

        let mut front: Vec<Candidate<G>> = front_indices.into_iter().map(|i| self.members[i].clone()).collect();
        dedup_by_chromosome(&mut front);
        self.members = front;
    }
}

/// Drop later duplicates whose chromosome is element-equal (with float
/// tolerance) to an earlier one (§3, §4.7). O(n²) but archives stay small
/// relative to the population by construction (non-dominated sets).
fn dedup_by_chromosome<G: Gene>(members: &mut Vec<Candidate<G>>) {
    let mut kept: Vec<Candidate<G>> = Vec::with_capacity(members.len());
    for candidate in members.drain(..) {
        if !kept.iter().any(|k| k.same_chromosome(&candidate)) {
            kept.push(candidate);
        }
    }
    *members = kept;
}

#[cfg(test)]
mod test {
    use super::*;

    fn candidate(chromosome: Vec<f64>, fitness: Vec<f64>) -> Candidate<f64> {
        let mut c = Candidate::new(chromosome);
        c.fitness = fitness;
        c.evaluated = true;
        c
    }

    #[test]
    fn archive_keeps_only_non_dominated_members() {
        let mut archive: Archive<f64> = Archive::new();
        let pop = vec![
            candidate(vec![1.0], vec![5.0, 1.0]),
            candidate(vec![2.0], vec![1.0, 5.0]),
            candidate(vec![3.0], vec![1.0, 1.0]),
        ];
        archive.update(&pop);
        assert_eq!(archive.members().len(), 2);
    }

    #[test]
    fn archive_deduplicates_identical_chromosomes_across_generations() {
        let mut archive: Archive<f64> = Archive::new();
        archive.update(&[candidate(vec![1.0], vec![5.0, 1.0])]);
        archive.update(&[candidate(vec![1.0 + 1e-12], vec![5.0, 1.0])]);
        assert_eq!(archive.members().len(), 1);
    }

    #[test]
    fn single_objective_archive_uses_the_1d_extractor() {
        let mut archive: Archive<f64> = Archive::new();
        let pop = vec![candidate(vec![1.0], vec![3.0]), candidate(vec![2.0], vec![7.0])];
        archive.update(&pop);
        assert_eq!(archive.members().len(), 1);
        assert_eq!(archive.members()[0].fitness, vec![7.0]);
    }
}
