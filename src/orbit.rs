//  ORBIT.rs
//    by Lut99
//
//  Created:
//    17 Mar 2025, 14:03:55
//  Last edited:
//    26 Mar 2025, 10:51:14
//  Auto updated?
//    Yes
//
//  Description:
//!   Expands a matroid into all matroids obtained by relabelling its
//!   ground set, i.e., its orbit under the symmetric group.
//!
//!   The group is walked with Heap's algorithm, which reaches every one of
//!   the `N!` permutations by a single transposition from the previous
//!   one. Every transposition is applied to the running characteristic
//!   vector through the [`ActionTable`], so no permutation is ever
//!   materialized.
//!
//!   # References
//!   [1] B. R. Heap. 1963. _Permutations by Interchanges._ The Computer
//!       Journal 6, 3, 293–298. <https://doi.org/10.1093/comjnl/6.3.293>
//

use indexmap::IndexSet;

use crate::action::ActionTable;
use crate::log::trace;
use crate::vector::CharVector;


/***** LIBRARY FUNCTIONS *****/
/// Runs Heap's algorithm on the first `k` labels, calling `visit` for every transposition.
///
/// In total, `visit` is called `k! - 1` times, and the composition of the first `j`
/// transpositions is a different permutation for every `j` in `0..k!`.
///
/// # Arguments
/// - `k`: The number of labels to permute, i.e., the prefix size.
/// - `visit`: Some closure that is called with `(i, j)` for every transposition, where `i < j`.
pub fn heap_transpositions<F>(k: usize, visit: &mut F)
where
    F: FnMut(usize, usize),
{
    if k <= 1 {
        return;
    }
    heap_transpositions(k - 1, visit);
    for i in 0..k - 1 {
        if k % 2 == 0 {
            visit(i, k - 1);
        } else {
            visit(0, k - 1);
        }
        heap_transpositions(k - 1, visit);
    }
}

/// Computes the orbit of a characteristic vector under relabelling of the ground set.
///
/// # Arguments
/// - `cv`: The [`CharVector`] of the matroid to expand.
/// - `table`: The [`ActionTable`] for the rank and ground set size of the matroid.
///
/// # Returns
/// An [`Orbit`] with every relabelling of the matroid exactly once.
///
/// # Panics
/// This function panics if `cv` is not as long as the vectors the table acts on.
#[track_caller]
pub fn expand(cv: &CharVector, table: &ActionTable) -> Orbit {
    assert_eq!(cv.len(), table.len(), "Characteristic vector is not of the length the action table acts on");

    // The running vector is swapped with the scratch space on every step, so only the snapshots
    // that are new to the orbit are cloned.
    let mut current: CharVector = cv.clone();
    let mut scratch: CharVector = CharVector::zeroes(cv.len());
    let mut members: IndexSet<CharVector> = IndexSet::new();
    members.insert(current.clone());
    #[cfg(feature = "log")]
    let mut steps: usize = 0;
    heap_transpositions(table.size(), &mut |i1, i2| {
        table.apply_into(i1, i2, &current, &mut scratch);
        std::mem::swap(&mut current, &mut scratch);
        if !members.contains(&current) {
            members.insert(current.clone());
        }
        #[cfg(feature = "log")]
        {
            steps += 1;
        }
    });
    trace!("Expanded {cv} into {} matroids ({} transpositions)", members.len(), steps);
    Orbit { members }
}





/***** LIBRARY *****/
/// The orbit of a matroid, i.e., all of its relabellings.
///
/// Members are kept in the order in which they were first reached, which makes the order
/// deterministic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Orbit {
    /// The distinct members.
    members: IndexSet<CharVector>,
}
impl Orbit {
    /// Returns the number of distinct matroids in the orbit.
    #[inline]
    pub fn len(&self) -> usize { self.members.len() }

    /// Returns whether the orbit is empty. This never happens, as it contains at least the origin.
    #[inline]
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Checks whether the given matroid is in this orbit.
    #[inline]
    pub fn contains(&self, cv: &CharVector) -> bool { self.members.contains(cv) }

    /// Iterates over the members of the orbit.
    #[inline]
    pub fn iter(&self) -> indexmap::set::Iter<'_, CharVector> { self.members.iter() }
}
impl IntoIterator for Orbit {
    type IntoIter = indexmap::set::IntoIter<CharVector>;
    type Item = CharVector;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.members.into_iter() }
}
impl<'o> IntoIterator for &'o Orbit {
    type IntoIter = indexmap::set::Iter<'o, CharVector>;
    type Item = &'o CharVector;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.members.iter() }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools as _;

    use super::*;
    use crate::ranker::{Basis, BasisRanker};
    use crate::tests::relabel;


    /// Computes `n!`.
    fn factorial(n: usize) -> usize { (1..=n).product() }

    /// Walks the transpositions of Heap's algorithm without recursion, as an independent check on
    /// [`heap_transpositions()`].
    struct Transpositions {
        /// The loop counter of every (emulated) recursion level.
        counters: Vec<usize>,
        /// The current recursion level.
        i: usize,
    }
    impl Transpositions {
        fn new(n: usize) -> Self { Self { counters: vec![0; n], i: 1 } }
    }
    impl Iterator for Transpositions {
        type Item = (usize, usize);

        fn next(&mut self) -> Option<Self::Item> {
            while self.i < self.counters.len() {
                let i: usize = self.i;
                if self.counters[i] < i {
                    // Level `i` permutes the first `i + 1` labels, so odd prefixes always swap the first
                    let res: (usize, usize) = if i % 2 == 0 { (0, i) } else { (self.counters[i], i) };
                    self.counters[i] += 1;
                    self.i = 1;
                    return Some(res);
                } else {
                    self.counters[i] = 0;
                    self.i += 1;
                }
            }
            None
        }
    }


    #[test]
    fn test_heap_visits_every_permutation() {
        for n in 0..=6 {
            let mut perm: Vec<usize> = (0..n).collect();
            let mut seen: HashSet<Vec<usize>> = HashSet::new();
            seen.insert(perm.clone());
            let mut count: usize = 0;
            heap_transpositions(n, &mut |i, j| {
                assert!(i < j && j < n);
                perm.swap(i, j);
                seen.insert(perm.clone());
                count += 1;
            });
            assert_eq!(count + 1, factorial(n));
            assert_eq!(seen.len(), factorial(n));
        }
    }

    #[test]
    fn test_iterative_matches_recursive() {
        for n in 0..=7 {
            let mut recursive: Vec<(usize, usize)> = Vec::new();
            heap_transpositions(n, &mut |i, j| recursive.push((i, j)));
            let iterative: Vec<(usize, usize)> = Transpositions::new(n).collect();
            assert_eq!(recursive, iterative, "n = {n}");
        }
        assert_eq!(Transpositions::new(3).collect::<Vec<_>>(), vec![(0, 1), (0, 2), (0, 1), (0, 2), (0, 1)]);
    }

    #[test]
    fn test_orbit_scenario() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let ranker = BasisRanker::new(2, 3);
        let table = ActionTable::new(&ranker);
        let orbit: Orbit = expand(&"110".parse::<CharVector>().unwrap(), &table);
        assert_eq!(orbit.len(), 3);
        let members: HashSet<String> = orbit.iter().map(CharVector::to_string).collect();
        assert_eq!(members, HashSet::from(["110".to_string(), "101".to_string(), "011".to_string()]));
        assert!(orbit.contains(&"011".parse().unwrap()));
        assert!(!orbit.contains(&"111".parse().unwrap()));

        // The origin is reached first
        assert_eq!(orbit.iter().next().map(CharVector::to_string), Some("110".into()));
    }

    #[test]
    fn test_orbit_trivial() {
        // The uniform matroid is fixed by everything
        let ranker = BasisRanker::new(2, 4);
        let table = ActionTable::new(&ranker);
        let orbit: Orbit = expand(&"111111".parse::<CharVector>().unwrap(), &table);
        assert_eq!(orbit.into_iter().collect::<Vec<_>>(), vec!["111111".parse::<CharVector>().unwrap()]);

        // A single label has no transpositions at all
        let ranker = BasisRanker::new(1, 1);
        let table = ActionTable::new(&ranker);
        assert_eq!(expand(&"1".parse::<CharVector>().unwrap(), &table).len(), 1);
    }

    #[test]
    fn test_orbit_complete_and_sound() {
        for size in 1..=5 {
            for rank in 1..=size {
                let ranker = BasisRanker::new(rank, size);
                let table = ActionTable::new(&ranker);

                // Take a handful of irregular basis sets
                for seed in [1usize, 3, 5] {
                    let bases: Vec<Basis> = ranker.iter().enumerate().filter(|(t, _)| (t * seed + t / 2) % 3 != 1).map(|(_, b)| b.to_vec()).collect();
                    if bases.is_empty() {
                        continue;
                    }
                    let cv = CharVector::from_bases(&ranker, bases.iter().map(Vec::as_slice)).unwrap();
                    let orbit: Orbit = expand(&cv, &table);

                    // Brute-force the orbit by relabelling with every permutation
                    let expected: HashSet<CharVector> = (0..size)
                        .permutations(size)
                        .map(|perm| {
                            let relabelled: Vec<Basis> = relabel(&bases, &perm);
                            CharVector::from_bases(&ranker, relabelled.iter().map(Vec::as_slice)).unwrap()
                        })
                        .collect();
                    let got: HashSet<CharVector> = orbit.iter().cloned().collect();
                    assert_eq!(got.len(), orbit.len(), "r{rank}n{size}: orbit has duplicates");
                    assert_eq!(got, expected, "r{rank}n{size}: orbit of {cv} is wrong");
                    assert_eq!(factorial(size) % orbit.len(), 0);
                    assert!(orbit.iter().all(|m| m.count_ones() == bases.len()));
                }
            }
        }
    }
}
