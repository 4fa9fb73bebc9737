//! A sequence of [`Candidate`]s of configured size P (§3).

use crate::candidate::Candidate;
use crate::gene::Gene;

/// Thin wrapper over `Vec<Candidate<G>>`. Ordering is not semantically significant
/// except during selection preparation, where CDF indices are looked up by
/// position, matching the source's `Population`/individuals accessor split.
#[derive(Debug, Clone, Default)]
pub struct Population<G: Gene> {
    individuals: Vec<Candidate<G>>,
}

impl<G: Gene> Population<G> {
    pub fn new(individuals: Vec<Candidate<G>>) -> Self {
        Population { individuals }
    }

    pub fn empty() -> Self {
        Population { individuals: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Candidate<G>] {
        &self.individuals
    }

    pub fn individuals_mut(&mut self) -> &mut [Candidate<G>] {
        &mut self.individuals
    }

    pub fn into_individuals(self) -> Vec<Candidate<G>> {
        self.individuals
    }

    pub fn push(&mut self, candidate: Candidate<G>) {
        self.individuals.push(candidate);
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = Candidate<G>>) {
        self.individuals.extend(other);
    }

    /// Objective values of the whole population, one row per candidate. Used by the
    /// weighting, sorting, and normalisation kernels, which only ever need the
    /// fitness vectors and not the chromosomes.
    pub fn fitnesses(&self) -> Vec<&[f64]> {
        self.individuals.iter().map(|c| c.fitness.as_slice()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate<G>> {
        self.individuals.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Candidate<G>> {
        self.individuals.iter_mut()
    }
}

impl<G: Gene> IntoIterator for Population<G> {
    type Item = Candidate<G>;
    type IntoIter = std::vec::IntoIter<Candidate<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl<G: Gene> FromIterator<Candidate<G>> for Population<G> {
    fn from_iter<T: IntoIterator<Item = Candidate<G>>>(iter: T) -> Self {
        Population { individuals: iter.into_iter().collect() }
    }
}
