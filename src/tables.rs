//  TABLES.rs
//    by Lut99
//
//  Created:
//    17 Mar 2025, 09:44:10
//  Last edited:
//    24 Mar 2025, 14:27:51
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the [`TableCache`], which owns the [`BasisRanker`]s and
//!   [`ActionTable`]s for every rank and ground set size encountered.
//

use std::collections::HashMap;

use crate::action::ActionTable;
use crate::log::debug;
use crate::ranker::BasisRanker;


/***** HELPERS *****/
/// The tables built for a single rank and ground set size.
#[derive(Debug)]
struct Tables {
    /// The ranker, which is always needed.
    ranker: BasisRanker,
    /// The action table, which is only needed when expanding orbits.
    action: Option<ActionTable>,
}





/***** LIBRARY *****/
/// An explicit cache of the tables for every `(R, N)`-pair.
///
/// Tables are built lazily on first request and never change afterwards.
#[derive(Debug, Default)]
pub struct TableCache {
    /// The tables, keyed by `(R, N)`.
    tables: HashMap<(usize, usize), Tables>,
}
impl TableCache {
    /// Constructor for the TableCache.
    ///
    /// # Returns
    /// A new TableCache that has not built anything yet.
    #[inline]
    pub fn new() -> Self { Self { tables: HashMap::new() } }

    /// Returns the entry for the given pair, creating it (and its ranker) if it didn't exist.
    #[track_caller]
    fn entry(&mut self, rank: usize, size: usize) -> &mut Tables {
        self.tables.entry((rank, size)).or_insert_with(|| {
            debug!("Building basis ranker for r{rank}n{size}");
            Tables { ranker: BasisRanker::new(rank, size), action: None }
        })
    }

    /// Returns the [`BasisRanker`] for the given rank and ground set size.
    ///
    /// # Arguments
    /// - `rank`: The rank `R`.
    /// - `size`: The ground set size `N`.
    ///
    /// # Returns
    /// A reference to the (possibly freshly built) ranker.
    ///
    /// # Panics
    /// This function panics if `rank > size`.
    #[inline]
    #[track_caller]
    pub fn ranker(&mut self, rank: usize, size: usize) -> &BasisRanker { &self.entry(rank, size).ranker }

    /// Returns the [`ActionTable`] for the given rank and ground set size.
    ///
    /// # Arguments
    /// - `rank`: The rank `R`.
    /// - `size`: The ground set size `N`.
    ///
    /// # Returns
    /// A reference to the (possibly freshly built) action table.
    ///
    /// # Panics
    /// This function panics if `rank > size`.
    #[track_caller]
    pub fn action(&mut self, rank: usize, size: usize) -> &ActionTable {
        let Tables { ranker, action } = self.entry(rank, size);
        action.get_or_insert_with(|| {
            debug!("Building action table for r{rank}n{size}");
            ActionTable::new(ranker)
        })
    }

    /// Returns the number of `(R, N)`-pairs for which tables have been built.
    #[inline]
    pub fn len(&self) -> usize { self.tables.len() }

    /// Returns whether no tables have been built yet.
    #[inline]
    pub fn is_empty(&self) -> bool { self.tables.is_empty() }
}





/***** TESTS *****/
