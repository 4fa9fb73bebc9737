//! The unit of population membership (§3).

use crate::gene::Gene;

/// One individual: a chromosome plus everything the driver needs to remember about
/// it between generations. Unlike the teacher's `Individual`, which stores algorithm
/// bookkeeping in a string-keyed `data: HashMap<String, DataValue>` bag (a shape
/// forced on it by its JSON export feature, which this crate does not carry), the
/// bookkeeping fields here are typed directly: there is exactly one generation
/// driver and exactly three modes, so there is no need for an open-ended map.
#[derive(Debug, Clone)]
pub struct Candidate<G: Gene> {
    /// Ordered genes; fixed length for the lifetime of a run.
    pub chromosome: Vec<G>,
    /// Objective scores, maximization convention. Empty until first evaluated.
    pub fitness: Vec<f64>,
    /// Whether `fitness` reflects the current `chromosome`.
    pub evaluated: bool,
    /// SOGA selection probability mass, recomputed every generation.
    pub selection_pdf: f64,
    /// SOGA cumulative selection probability, recomputed every generation.
    pub selection_cdf: f64,
    /// Non-domination layer; 0 is the best front.
    pub rank: usize,
    /// Crowding distance (NSGA-II) or perpendicular distance to the associated
    /// reference line (NSGA-III).
    pub distance: f64,
    /// Associated reference-point index (NSGA-III only).
    pub ref_idx: Option<usize>,
    /// Number of population members sharing this candidate's reference point
    /// (NSGA-III only).
    pub niche_count: usize,
}

impl<G: Gene> Candidate<G> {
    pub fn new(chromosome: Vec<G>) -> Self {
        Candidate {
            chromosome,
            fitness: Vec::new(),
            evaluated: false,
            selection_pdf: 0.0,
            selection_cdf: 0.0,
            rank: usize::MAX,
            distance: 0.0,
            ref_idx: None,
            niche_count: 0,
        }
    }

    /// Reset everything the algorithms derive every generation, short of the
    /// chromosome/fitness/evaluated triple. Called before selection preparation and
    /// before a fresh non-dominated sort so stale state from a prior generation can
    /// never leak into comparisons (§9: a concrete memoization edge case).
    pub fn reset_bookkeeping(&mut self) {
        self.selection_pdf = 0.0;
        self.selection_cdf = 0.0;
        self.rank = usize::MAX;
        self.distance = 0.0;
        self.ref_idx = None;
        self.niche_count = 0;
    }

    /// Mark the chromosome changed: clears the memoization flag so the next
    /// evaluation step does not skip this candidate (§9).
    pub fn invalidate(&mut self) {
        self.evaluated = false;
    }

    /// Two candidates are equal iff their chromosomes are element-equal, with
    /// tolerance for floating-point genes (§3). Used for fitness memoization and
    /// archive deduplication, not for general-purpose `Eq`.
    pub fn same_chromosome(&self, other: &Self) -> bool {
        use crate::gene::GeneEq;
        self.chromosome.gene_eq(&other.chromosome)
    }
}
