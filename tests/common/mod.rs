//! Shared encoding adapters for the end-to-end scenarios (spec §8 S1-S6).
//!
//! These are the "external collaborator" encodings §1 scopes out of the crate
//! proper (binary strings, real vectors, permutations): minimal, test-only
//! implementations exist here purely to drive [`evolve_core::GenerationDriver`]
//! through a full run, the way the teacher's `core::test_utils`/benchmark
//! problems exercise its algorithms under test.

#![allow(dead_code)]

use evolve_core::EncodingAdapter;
use rand::seq::SliceRandom;
use rand::Rng;

/// Binary-string encoding: single-point crossover at `crossover_rate`, per-bit
/// flip mutation at `mutation_rate`.
pub struct BinaryEncoding {
    pub len: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

impl EncodingAdapter<bool> for BinaryEncoding {
    fn generate_candidate(&self, rng: &mut dyn rand::RngCore) -> Vec<bool> {
        (0..self.len).map(|_| rng.gen_bool(0.5)).collect()
    }

    fn crossover(&self, parent_a: &[bool], parent_b: &[bool], rng: &mut dyn rand::RngCore) -> (Vec<bool>, Vec<bool>) {
        if rng.gen::<f64>() > self.crossover_rate {
            return (parent_a.to_vec(), parent_b.to_vec());
        }
        let point = rng.gen_range(1..parent_a.len());
        let mut child_a = parent_a[..point].to_vec();
        child_a.extend_from_slice(&parent_b[point..]);
        let mut child_b = parent_b[..point].to_vec();
        child_b.extend_from_slice(&parent_a[point..]);
        (child_a, child_b)
    }

    fn mutate(&self, chromosome: &mut Vec<bool>, rng: &mut dyn rand::RngCore) {
        for bit in chromosome.iter_mut() {
            if rng.gen::<f64>() < self.mutation_rate {
                *bit = !*bit;
            }
        }
    }
}

/// Decode a run of bits (MSB first) to a real number in `[lo, hi]`.
pub fn decode_bits(bits: &[bool], lo: f64, hi: f64) -> f64 {
    let max = (1u64 << bits.len()) - 1;
    let mut value: u64 = 0;
    for &bit in bits {
        value = (value << 1) | (bit as u64);
    }
    lo + (hi - lo) * (value as f64) / (max as f64)
}

/// Fixed-length real-vector encoding with simulated-binary crossover and
/// Gaussian mutation, clamped back into `[lo, hi]` per gene via `repair`.
pub struct RealVectorEncoding {
    pub len: usize,
    pub lo: f64,
    pub hi: f64,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub sbx_distribution_index: f64,
    pub mutation_sigma: f64,
}

impl EncodingAdapter<f64> for RealVectorEncoding {
    fn generate_candidate(&self, rng: &mut dyn rand::RngCore) -> Vec<f64> {
        (0..self.len).map(|_| rng.gen_range(self.lo..=self.hi)).collect()
    }

    fn crossover(&self, parent_a: &[f64], parent_b: &[f64], rng: &mut dyn rand::RngCore) -> (Vec<f64>, Vec<f64>) {
        if rng.gen::<f64>() > self.crossover_rate {
            return (parent_a.to_vec(), parent_b.to_vec());
        }
        let mut child_a = Vec::with_capacity(self.len);
        let mut child_b = Vec::with_capacity(self.len);
        for i in 0..self.len {
            let u: f64 = rng.gen();
            let beta = if u <= 0.5 {
                (2.0 * u).powf(1.0 / (self.sbx_distribution_index + 1.0))
            } else {
                (1.0 / (2.0 * (1.0 - u))).powf(1.0 / (self.sbx_distribution_index + 1.0))
            };
            let x1 = parent_a[i];
            let x2 = parent_b[i];
            let a = 0.5 * ((1.0 + beta) * x1 + (1.0 - beta) * x2);
            let b = 0.5 * ((1.0 - beta) * x1 + (1.0 + beta) * x2);
            child_a.push(a);
            child_b.push(b);
        }
        (child_a, child_b)
    }

    fn mutate(&self, chromosome: &mut Vec<f64>, rng: &mut dyn rand::RngCore) {
        for gene in chromosome.iter_mut() {
            if rng.gen::<f64>() < self.mutation_rate {
                let noise: f64 = sample_standard_normal(rng) * self.mutation_sigma;
                *gene += noise;
            }
        }
    }

    fn repair(&self, chromosome: Vec<f64>, _rng: &mut dyn rand::RngCore) -> Vec<f64> {
        chromosome.into_iter().map(|v| v.clamp(self.lo, self.hi)).collect()
    }
}

/// Box-Muller transform; good enough for mutation noise without pulling in a
/// distributions dependency beyond what `rand` already offers via `gen`.
fn sample_standard_normal(rng: &mut dyn rand::RngCore) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-12);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Permutation encoding: order crossover (OX1) and inversion mutation, the
/// pairing spec §8 S6 names for the 52-city TSP scenario.
pub struct PermutationEncoding {
    pub len: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

impl EncodingAdapter<usize> for PermutationEncoding {
    fn generate_candidate(&self, rng: &mut dyn rand::RngCore) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..self.len).collect();
        perm.shuffle(rng);
        perm
    }

    fn crossover(&self, parent_a: &[usize], parent_b: &[usize], rng: &mut dyn rand::RngCore) -> (Vec<usize>, Vec<usize>) {
        if rng.gen::<f64>() > self.crossover_rate {
            return (parent_a.to_vec(), parent_b.to_vec());
        }
        (order_crossover(parent_a, parent_b, rng), order_crossover(parent_b, parent_a, rng))
    }

    fn mutate(&self, chromosome: &mut Vec<usize>, rng: &mut dyn rand::RngCore) {
        if rng.gen::<f64>() >= self.mutation_rate {
            return;
        }
        let n = chromosome.len();
        let mut i = rng.gen_range(0..n);
        let mut j = rng.gen_range(0..n);
        if i > j {
            std::mem::swap(&mut i, &mut j);
        }
        chromosome[i..=j].reverse();
    }
}

/// Classic OX1: copy a random slice from `a` verbatim, fill the rest from `b`
/// in `b`'s order, skipping genes already placed.
fn order_crossover(a: &[usize], b: &[usize], rng: &mut dyn rand::RngCore) -> Vec<usize> {
    let n = a.len();
    let mut i = rng.gen_range(0..n);
    let mut j = rng.gen_range(0..n);
    if i > j {
        std::mem::swap(&mut i, &mut j);
    }

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut taken = vec![false; n];
    for k in i..=j {
        child[k] = Some(a[k]);
        taken[a[k]] = true;
    }

    let mut fill_from = (j + 1) % n;
    let mut pos = (j + 1) % n;
    for _ in 0..n {
        let gene = b[fill_from];
        if !taken[gene] {
            child[pos] = Some(gene);
            taken[gene] = true;
            pos = (pos + 1) % n;
        }
        fill_from = (fill_from + 1) % n;
    }

    child.into_iter().map(|g| g.expect("every slot filled by construction")).collect()
}
