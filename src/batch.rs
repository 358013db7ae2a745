//  BATCH.rs
//    by Lut99
//
//  Created:
//    18 Mar 2025, 15:47:13
//  Last edited:
//    26 Mar 2025, 14:10:32
//  Auto updated?
//    Yes
//
//  Description:
//!   Groups representatives by rank, ground set size and number of
//!   bases, and walks all such groups in a fixed order.
//

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FResult};

use crate::input::Representative;
use crate::log::warn;
use crate::progress::ProgressReporter;
use crate::ranker::binomial;


/***** LIBRARY *****/
/// Identifies a batch of matroids.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BatchKey {
    /// The rank `R`.
    pub rank: usize,
    /// The ground set size `N`.
    pub size: usize,
    /// The number of bases.
    pub basis_count: usize,
}
impl Display for BatchKey {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { write!(f, "r{}n{} with {} bases", self.rank, self.size, self.basis_count) }
}

/// A group of representatives sharing the same [`BatchKey`].
#[derive(Clone, Debug)]
pub struct Batch<'r> {
    /// The key all members share.
    pub key: BatchKey,
    /// The members, in input order. May be empty.
    pub members: Vec<&'r Representative>,
}



/// Walks all batches for `R` in `1..=max`, `N` in `R..=max` and `#bases` in `1..=C(N, R)`, in that
/// order, stopping at the cutoff `(R, N)`.
///
/// Batches without any representative are yielded too, with no members.
#[derive(Debug)]
pub struct Batches<'r, 'p> {
    /// The representatives, grouped. Groups are removed once yielded.
    groups:   HashMap<BatchKey, Vec<&'r Representative>>,
    /// The largest rank and ground set size to walk.
    max_size: usize,
    /// The `(R, N)`-pair to stop at.
    cutoff:   (usize, usize),
    /// The reporter to report progress with.
    progress: &'p mut ProgressReporter,
    /// The key of the next batch to yield, or [`None`] if we're done.
    next:     Option<BatchKey>,
}
impl<'r, 'p> Batches<'r, 'p> {
    /// Constructor for the Batches.
    ///
    /// # Arguments
    /// - `reps`: The representatives to group.
    /// - `max_size`: The largest rank and ground set size to walk.
    /// - `cutoff`: The `(R, N)`-pair to stop at. It is not walked itself.
    /// - `progress`: A [`ProgressReporter`] that reports which batch we're at.
    ///
    /// # Returns
    /// A new Batches, ready to iterate.
    pub fn new(reps: impl IntoIterator<Item = &'r Representative>, max_size: usize, cutoff: (usize, usize), progress: &'p mut ProgressReporter) -> Self {
        let mut groups: HashMap<BatchKey, Vec<&'r Representative>> = HashMap::new();
        for rep in reps {
            groups.entry(BatchKey { rank: rep.rank, size: rep.size, basis_count: rep.basis_count }).or_default().push(rep);
        }
        Self { groups, max_size, cutoff, progress, next: Some(BatchKey { rank: 1, size: 1, basis_count: 1 }) }
    }
}
impl<'r, 'p> Iterator for Batches<'r, 'p> {
    type Item = Batch<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let key: BatchKey = self.next?;
            if key.rank > self.max_size || (key.rank, key.size) == self.cutoff {
                self.next = None;
                if !self.groups.is_empty() {
                    warn!("{} group(s) of representatives fall outside of the enumerated range and are skipped", self.groups.len());
                }
                return None;
            }
            if key.size > self.max_size {
                self.next = Some(BatchKey { rank: key.rank + 1, size: key.rank + 1, basis_count: 1 });
                continue;
            }
            if key.basis_count > binomial(key.size, key.rank) {
                self.next = Some(BatchKey { rank: key.rank, size: key.size + 1, basis_count: 1 });
                continue;
            }

            // It's a valid batch
            if key.basis_count == 1 {
                self.progress.announce(format_args!("R = {}, N = {}", key.rank, key.size));
            } else {
                self.progress.tick(|| format!("R = {}, N = {} ...bases: {}", key.rank, key.size, key.basis_count));
            }
            self.next = Some(BatchKey { basis_count: key.basis_count + 1, ..key });
            return Some(Batch { key, members: self.groups.remove(&key).unwrap_or_default() });
        }
    }
}





/***** TESTS *****/
