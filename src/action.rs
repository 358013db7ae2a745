//  ACTION.rs
//    by Lut99
//
//  Created:
//    14 Mar 2025, 13:55:40
//  Last edited:
//    25 Mar 2025, 09:12:28
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the [`ActionTable`], which precomputes how exchanging two
//!   labels of the ground set permutes the bases.
//!
//!   This turns applying a transposition to a [`CharVector`] into a single
//!   pass of lookups.
//

use itertools::Itertools as _;

use crate::log::trace;
use crate::ranker::BasisRanker;
use crate::vector::CharVector;


/***** HELPERS *****/
/// Computes the position of the pair `(i1, i2)` in the flattened list of all pairs `i1 < i2 < size`.
///
/// # Panics
/// This function panics if `i1 >= i2` or `i2 >= size`.
#[inline]
#[track_caller]
fn pair_index(size: usize, i1: usize, i2: usize) -> usize {
    if i1 >= i2 || i2 >= size {
        panic!("Illegal label pair ({i1}, {i2}) for a ground set of {size} elements (expected i1 < i2 < {size})");
    }
    // Skip the `size - 1 - j` pairs started by every `j < i1`
    i1 * (2 * size - i1 - 1) / 2 + (i2 - i1 - 1)
}





/***** LIBRARY *****/
/// For every pair of labels `(i1, i2)` with `i1 < i2`, tells which basis the `t`-th basis becomes
/// when the labels `i1` and `i2` are exchanged.
///
/// Built once per rank and ground set size, and read-only afterwards.
#[derive(Clone, Debug)]
pub struct ActionTable {
    /// The size of the ground set.
    size:  usize,
    /// The number of bases.
    len:   usize,
    /// One basis permutation per pair of labels, ordered by [`pair_index()`].
    swaps: Vec<Vec<usize>>,
}
impl ActionTable {
    /// Constructor for the ActionTable.
    ///
    /// # Arguments
    /// - `ranker`: The [`BasisRanker`] for the rank and size to build the table for.
    ///
    /// # Returns
    /// A new ActionTable with `C(N, 2)` basis permutations of `C(N, R)` entries each.
    pub fn new(ranker: &BasisRanker) -> Self {
        let (rank, size): (usize, usize) = (ranker.rank(), ranker.size());
        trace!("Building action table for {ranker}");

        let mut swaps: Vec<Vec<usize>> = Vec::with_capacity(size * size.saturating_sub(1) / 2);
        let mut sorted: Vec<usize> = Vec::with_capacity(rank);
        for i1 in 0..size {
            for i2 in i1 + 1..size {
                // Enumerate the subsets of the relabelled ground set in the same order as the
                // ranker does; the t-th one is then the image of the t-th basis.
                let labels = (0..size).map(|l| if l == i1 { i2 } else if l == i2 { i1 } else { l });
                let mut perm: Vec<usize> = Vec::with_capacity(ranker.len());
                for basis in labels.combinations(rank) {
                    sorted.clear();
                    sorted.extend(basis);
                    sorted.sort_unstable();
                    match ranker.index_of(&sorted) {
                        Some(index) => perm.push(index),
                        None => unreachable!("Relabelled basis {sorted:?} is not a basis in {ranker}"),
                    }
                }
                swaps.push(perm);
            }
        }
        Self { size, len: ranker.len(), swaps }
    }

    /// Returns the size of the ground set this table acts on.
    #[inline]
    pub const fn size(&self) -> usize { self.size }

    /// Returns the number of bases, i.e., the length of the [`CharVector`]s this table acts on.
    #[inline]
    pub const fn len(&self) -> usize { self.len }

    /// Returns whether the table acts on empty vectors.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the permutation of basis indices induced by exchanging two labels.
    ///
    /// # Arguments
    /// - `i1`: The first label to exchange.
    /// - `i2`: The second label to exchange. Must be larger than `i1`.
    ///
    /// # Returns
    /// A slice `perm` such that the `t`-th basis becomes the `perm[t]`-th basis.
    ///
    /// # Panics
    /// This function panics if `i1 >= i2` or `i2 >= N`.
    #[inline]
    #[track_caller]
    pub fn swap(&self, i1: usize, i2: usize) -> &[usize] { &self.swaps[pair_index(self.size, i1, i2)] }

    /// Exchanges two labels in the matroid given by `cv`, writing the result to `out`.
    ///
    /// Because every exchange is an involution, reading `cv` at `perm[t]` is the same as writing
    /// `cv[t]` to `perm[t]`.
    ///
    /// # Arguments
    /// - `i1`: The first label to exchange.
    /// - `i2`: The second label to exchange. Must be larger than `i1`.
    /// - `cv`: The [`CharVector`] to act on.
    /// - `out`: The [`CharVector`] to write the result to.
    ///
    /// # Panics
    /// This function panics if the labels are illegal or the vectors are not of length `C(N, R)`.
    #[inline]
    #[track_caller]
    pub fn apply_into(&self, i1: usize, i2: usize, cv: &CharVector, out: &mut CharVector) { cv.permute_into(self.swap(i1, i2), out) }

    /// Exchanges two labels in the matroid given by `cv`.
    ///
    /// See [`ActionTable::apply_into()`] for more information.
    #[inline]
    #[track_caller]
    pub fn apply(&self, i1: usize, i2: usize, cv: &CharVector) -> CharVector { cv.permuted(self.swap(i1, i2)) }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranker::Basis;
    use crate::tests::{all_vectors, relabel};


    #[test]
    fn test_pair_index() {
        for size in 2..=9 {
            let mut expected: usize = 0;
            for i1 in 0..size {
                for i2 in i1 + 1..size {
                    assert_eq!(pair_index(size, i1, i2), expected);
                    expected += 1;
                }
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_pair_index_unordered() { pair_index(4, 2, 1); }

    #[test]
    fn test_action_scenario() {
        let ranker = BasisRanker::new(2, 3);
        let table = ActionTable::new(&ranker);
        assert_eq!(table.swap(0, 1), &[0, 2, 1]);
        assert_eq!(table.swap(0, 2), &[2, 1, 0]);
        assert_eq!(table.swap(1, 2), &[1, 0, 2]);

        // {(0,1), (0,2)} is fixed by exchanging 1 and 2, and moved by the others
        let cv: CharVector = "110".parse().unwrap();
        assert_eq!(table.apply(1, 2, &cv).to_string(), "110");
        assert_eq!(table.apply(0, 1, &cv).to_string(), "101");
        assert_eq!(table.apply(0, 2, &cv).to_string(), "011");

        // Only (1,2) is in the set, so it follows the relabelling
        let cv: CharVector = "001".parse().unwrap();
        assert_eq!(table.apply(1, 2, &cv).to_string(), "001");
        assert_eq!(table.apply(0, 1, &cv).to_string(), "010");
        assert_eq!(table.apply(0, 2, &cv).to_string(), "100");
    }

    #[test]
    fn test_action_matches_relabelling() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        for size in 2..=5 {
            for rank in 0..=size {
                let ranker = BasisRanker::new(rank, size);
                let table = ActionTable::new(&ranker);
                assert_eq!(table.len(), ranker.len());
                for cv in all_vectors(ranker.len()) {
                    let bases: Vec<Basis> = cv.ones().filter_map(|t| ranker.basis(t)).map(<[usize]>::to_vec).collect();
                    for i1 in 0..size {
                        for i2 in i1 + 1..size {
                            // Relabel the bases by hand and rebuild the vector
                            let mut perm: Vec<usize> = (0..size).collect();
                            perm.swap(i1, i2);
                            let relabelled: Vec<Basis> = relabel(&bases, &perm);
                            let expected = CharVector::from_bases(&ranker, relabelled.iter().map(Vec::as_slice)).unwrap();
                            assert_eq!(table.apply(i1, i2, &cv), expected, "r{rank}n{size}, swap ({i1}, {i2}) of {cv}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_action_involution() {
        for size in 2..=5 {
            for rank in 1..size {
                let ranker = BasisRanker::new(rank, size);
                let table = ActionTable::new(&ranker);
                let mut scratch = CharVector::zeroes(table.len());
                for cv in all_vectors(ranker.len()) {
                    for i1 in 0..size {
                        for i2 in i1 + 1..size {
                            table.apply_into(i1, i2, &cv, &mut scratch);
                            assert_eq!(table.apply(i1, i2, &scratch), cv);
                        }
                    }
                }
            }
        }
    }
}
