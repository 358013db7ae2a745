//  RANKER.rs
//    by Lut99
//
//  Created:
//    14 Mar 2025, 10:18:45
//  Last edited:
//    24 Mar 2025, 11:02:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the [`BasisRanker`], which gives every `R`-element subset
//!   of a ground set `0..N` a dense index in lexicographic order.
//

use std::fmt::{Display, Formatter, Result as FResult};

use indexmap::IndexSet;
use itertools::Itertools as _;


/***** AUXILLARY *****/
/// A single basis of a matroid, i.e., a strictly increasing sequence of ground-set labels.
pub type Basis = Vec<usize>;

/// Computes the binomial coefficient `n` choose `k`.
///
/// # Arguments
/// - `n`: The size of the set to choose from.
/// - `k`: The number of elements to choose.
///
/// # Returns
/// The number of `k`-element subsets of an `n`-element set. Is `0` if `k > n`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    // Multiplying before dividing keeps every intermediate result integral
    let k: usize = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}





/***** LIBRARY *****/
/// Bijects all `R`-element subsets of the ground set `0..N` to the indices `0..C(N, R)`.
///
/// The order is lexicographic over the sorted elements of every subset, which is the same order in
/// which [`Itertools::combinations()`](itertools::Itertools::combinations()) produces them. As
/// such, the ranker only depends on `R` and `N`.
#[derive(Clone, Debug)]
pub struct BasisRanker {
    /// The rank `R`, i.e., the size of every basis.
    rank:  usize,
    /// The size `N` of the ground set.
    size:  usize,
    /// All bases in order. Their position in the set is their index.
    bases: IndexSet<Basis>,
}
impl BasisRanker {
    /// Constructor for the BasisRanker.
    ///
    /// # Arguments
    /// - `rank`: The size `R` of every basis.
    /// - `size`: The size `N` of the ground set.
    ///
    /// # Returns
    /// A new BasisRanker that knows all `C(N, R)` bases.
    ///
    /// # Panics
    /// This function panics if `rank > size`. The pipeline never asks for such a ranker.
    #[track_caller]
    pub fn new(rank: usize, size: usize) -> Self {
        if rank > size {
            panic!("Cannot rank {rank}-element subsets of a ground set of only {size} elements");
        }
        let bases: IndexSet<Basis> = (0..size).combinations(rank).collect();
        Self { rank, size, bases }
    }

    /// Returns the rank `R` of the bases ranked by this ranker.
    #[inline]
    pub const fn rank(&self) -> usize { self.rank }

    /// Returns the size `N` of the ground set over which this ranker ranks.
    #[inline]
    pub const fn size(&self) -> usize { self.size }

    /// Returns the total number of bases, i.e., `C(N, R)`.
    #[inline]
    pub fn len(&self) -> usize { self.bases.len() }

    /// Returns whether there are no bases at all.
    ///
    /// Note that this never happens, as there is always at least one (possibly empty) subset.
    #[inline]
    pub fn is_empty(&self) -> bool { self.bases.is_empty() }

    /// Finds the index of the given basis.
    ///
    /// # Arguments
    /// - `basis`: The basis to find. Must be sorted.
    ///
    /// # Returns
    /// The index of the basis, or [`None`] if it is not a sorted `R`-subset of `0..N`.
    #[inline]
    pub fn index_of(&self, basis: &[usize]) -> Option<usize> { self.bases.get_index_of(basis) }

    /// Returns the basis with the given index.
    ///
    /// # Arguments
    /// - `index`: The index of the basis to return.
    ///
    /// # Returns
    /// The basis at that index, or [`None`] if `index >= C(N, R)`.
    #[inline]
    pub fn basis(&self, index: usize) -> Option<&[usize]> { self.bases.get_index(index).map(Vec::as_slice) }

    /// Iterates over all bases in order of their index.
    #[inline]
    pub fn iter(&self) -> impl '_ + ExactSizeIterator<Item = &[usize]> { self.bases.iter().map(Vec::as_slice) }
}
impl Display for BasisRanker {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { write!(f, "r{}n{}", self.rank, self.size) }
}





/***** TESTS *****/
