//! Gene abstraction.
//!
//! The driver is generic over a gene type supplied by an encoding adapter (encodings
//! themselves are an external collaborator, §6). The only thing this crate asks of a
//! gene is that candidates built from it can be compared for the purpose of fitness
//! memoization (§3: "two candidates are considered equal iff their chromosomes are
//! element-equal, with tolerance for floating-point genes").

/// Equality used to decide whether a child's chromosome is the same point in
/// search space as its parent, for fitness memoization. Implemented for the
/// primitive gene types an encoding adapter is likely to use; real-valued genes
/// compare within a fixed epsilon rather than bit-for-bit, so two candidates built
/// by independent floating-point paths that converge on "the same" real vector are
/// still recognised as equal.
pub trait GeneEq {
    fn gene_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_gene_eq_exact {
    ($($t:ty),*) => {
        $(
            impl GeneEq for $t {
                fn gene_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_gene_eq_exact!(bool, u8, u16, u32, u64, i8, i16, i32, i64, usize, isize, char, String);

const F64_EPSILON: f64 = 1e-9;
const F32_EPSILON: f32 = 1e-5;

impl GeneEq for f64 {
    fn gene_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= F64_EPSILON
    }
}

impl GeneEq for f32 {
    fn gene_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= F32_EPSILON
    }
}

impl<T: GeneEq> GeneEq for Vec<T> {
    fn gene_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.gene_eq(b))
    }
}

/// Marker bound for a usable gene type: cheap to duplicate across a population and
/// comparable for memoization.
pub trait Gene: Clone + Send + Sync + GeneEq {}
impl<T: Clone + Send + Sync + GeneEq> Gene for T {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn float_genes_compare_within_epsilon() {
        assert!(1.0_f64.gene_eq(&(1.0 + 1e-12)));
        assert!(!1.0_f64.gene_eq(&1.1));
    }

    #[test]
    fn chromosome_vectors_compare_elementwise() {
        let a = vec![1.0_f64, 2.0, 3.0];
        let b = vec![1.0 + 1e-12, 2.0, 3.0];
        let c = vec![1.0, 2.0, 3.1];
        assert!(a.gene_eq(&b));
        assert!(!a.gene_eq(&c));
    }
}
