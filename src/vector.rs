//  VECTOR.rs
//    by Lut99
//
//  Created:
//    14 Mar 2025, 11:31:02
//  Last edited:
//    24 Mar 2025, 11:40:36
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the [`CharVector`], the characteristic vector of a set of
//!   bases over the [lexicographic order](crate::ranker::BasisRanker) of
//!   all bases.
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};
use std::str::FromStr;

use crate::ranker::BasisRanker;


/***** ERRORS *****/
/// Defines ways in which a matroid given by its bases can be malformed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum IntegrityError {
    /// The rank of the matroid exceeds the size of its ground set.
    RankExceedsSize { rank: usize, size: usize },
    /// A basis did not have exactly `rank` elements.
    BasisWrongSize { basis: Vec<usize>, rank: usize },
    /// A basis mentioned a label outside of the ground set.
    BasisOutOfRange { basis: Vec<usize>, size: usize },
    /// A basis mentioned the same label twice.
    DuplicateLabel { basis: Vec<usize>, label: usize },
    /// The same basis was given twice.
    DuplicateBasis { basis: Vec<usize> },
    /// The declared number of bases did not match the given number of bases.
    BasisCountMismatch { declared: usize, got: usize },
}
impl Display for IntegrityError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use IntegrityError::*;
        match self {
            RankExceedsSize { rank, size } => write!(f, "Rank {rank} exceeds ground set size {size}"),
            BasisWrongSize { basis, rank } => write!(f, "Basis {basis:?} has {} elements, but the matroid has rank {rank}", basis.len()),
            BasisOutOfRange { basis, size } => write!(f, "Basis {basis:?} has elements outside of the ground set 0..{size}"),
            DuplicateLabel { basis, label } => write!(f, "Basis {basis:?} mentions element {label} more than once"),
            DuplicateBasis { basis } => write!(f, "Basis {basis:?} is given more than once"),
            BasisCountMismatch { declared, got } => write!(f, "Matroid declares {declared} bases, but {got} bases are given"),
        }
    }
}
impl error::Error for IntegrityError {}

/// Defines errors originating from parsing [`CharVector`]s from their `0/1`-string form.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// Found a character that is neither `0` nor `1`.
    IllegalChar { pos: usize, c: char },
}
impl Display for ParseError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::IllegalChar { pos, c } => write!(f, "Illegal character {c:?} at position {pos} (expected '0' or '1')"),
        }
    }
}
impl error::Error for ParseError {}





/***** LIBRARY *****/
/// The characteristic vector of a set of bases.
///
/// Position `t` is true iff the `t`-th basis (in lexicographic order) is in the set.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CharVector {
    /// The bits themselves.
    bits: Vec<bool>,
}

// Constructors
impl CharVector {
    /// Creates an all-false CharVector of the given length.
    ///
    /// # Arguments
    /// - `len`: The number of bases this vector is over.
    ///
    /// # Returns
    /// A new CharVector representing the empty set of bases.
    #[inline]
    pub fn zeroes(len: usize) -> Self { Self { bits: vec![false; len] } }

    /// Builds the characteristic vector of the given bases.
    ///
    /// The bases may be given in any order, and the elements in each basis may be unsorted too.
    ///
    /// # Arguments
    /// - `ranker`: The [`BasisRanker`] for the rank and ground set size of the matroid.
    /// - `bases`: The bases of the matroid.
    ///
    /// # Returns
    /// A new CharVector of length `C(N, R)` with every basis' index set.
    ///
    /// # Errors
    /// This function errors if any of the bases is not an `R`-subset of `0..N`, or if a basis is
    /// given more than once.
    pub fn from_bases<'b>(ranker: &BasisRanker, bases: impl IntoIterator<Item = &'b [usize]>) -> Result<Self, IntegrityError> {
        let mut res: Self = Self::zeroes(ranker.len());
        let mut sorted: Vec<usize> = Vec::with_capacity(ranker.rank());
        for basis in bases {
            if basis.len() != ranker.rank() {
                return Err(IntegrityError::BasisWrongSize { basis: basis.to_vec(), rank: ranker.rank() });
            }
            if basis.iter().any(|&e| e >= ranker.size()) {
                return Err(IntegrityError::BasisOutOfRange { basis: basis.to_vec(), size: ranker.size() });
            }
            sorted.clear();
            sorted.extend_from_slice(basis);
            sorted.sort_unstable();
            if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
                return Err(IntegrityError::DuplicateLabel { basis: basis.to_vec(), label: w[0] });
            }

            // With the above, it's a proper subset and thus has an index
            let Some(index) = ranker.index_of(&sorted) else {
                return Err(IntegrityError::BasisOutOfRange { basis: basis.to_vec(), size: ranker.size() });
            };
            if res.bits[index] {
                return Err(IntegrityError::DuplicateBasis { basis: basis.to_vec() });
            }
            res.bits[index] = true;
        }
        Ok(res)
    }
}

// Accessors
impl CharVector {
    /// Returns the number of bases this vector is over.
    #[inline]
    pub fn len(&self) -> usize { self.bits.len() }

    /// Returns whether this vector is over no bases at all.
    #[inline]
    pub fn is_empty(&self) -> bool { self.bits.is_empty() }

    /// Returns whether the `t`-th basis is in the set.
    ///
    /// # Panics
    /// This function panics if `t` is out-of-bounds.
    #[inline]
    #[track_caller]
    pub fn get(&self, t: usize) -> bool { self.bits[t] }

    /// Sets whether the `t`-th basis is in the set.
    ///
    /// # Panics
    /// This function panics if `t` is out-of-bounds.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, t: usize, value: bool) { self.bits[t] = value; }

    /// Returns the number of bases in the set.
    #[inline]
    pub fn count_ones(&self) -> usize { self.bits.iter().filter(|b| **b).count() }

    /// Returns the indices of the bases in the set.
    #[inline]
    pub fn ones(&self) -> impl '_ + Iterator<Item = usize> { self.bits.iter().enumerate().filter_map(|(i, b)| if *b { Some(i) } else { None }) }

    /// Returns the bits as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[bool] { &self.bits }
}

// Transformations
impl CharVector {
    /// Writes the permutation of this vector into another one.
    ///
    /// Specifically, writes `self[perm[t]]` to position `t` of `out` for every `t`.
    ///
    /// # Arguments
    /// - `perm`: The permutation of indices to apply.
    /// - `out`: The CharVector to write to. Its old contents are overwritten.
    ///
    /// # Panics
    /// This function panics if the lengths of `self`, `perm` and `out` differ.
    #[track_caller]
    pub fn permute_into(&self, perm: &[usize], out: &mut Self) {
        assert_eq!(self.len(), perm.len(), "Permutation length does not match vector length");
        assert_eq!(self.len(), out.len(), "Output vector length does not match vector length");
        for (o, &p) in out.bits.iter_mut().zip(perm) {
            *o = self.bits[p];
        }
    }

    /// Returns the permutation of this vector.
    ///
    /// See [`CharVector::permute_into()`] for the semantics.
    #[inline]
    #[track_caller]
    pub fn permuted(&self, perm: &[usize]) -> Self {
        let mut res: Self = Self::zeroes(self.len());
        self.permute_into(perm, &mut res);
        res
    }
}

// Conversions
impl Display for CharVector {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        for b in &self.bits {
            write!(f, "{}", if *b { '1' } else { '0' })?;
        }
        Ok(())
    }
}
impl FromStr for CharVector {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits: Vec<bool> = s
            .chars()
            .enumerate()
            .map(|(pos, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                c => Err(ParseError::IllegalChar { pos, c }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { bits })
    }
}
impl From<Vec<bool>> for CharVector {
    #[inline]
    fn from(value: Vec<bool>) -> Self { Self { bits: value } }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_from_bases_scenario() {
        let ranker = BasisRanker::new(2, 3);
        let cv = CharVector::from_bases(&ranker, [&[0, 1][..], &[0, 2][..]]).unwrap();
        assert_eq!(cv.to_string(), "110");
        assert_eq!(cv.count_ones(), 2);
        assert_eq!(cv.ones().collect::<Vec<_>>(), vec![0, 1]);

        // Order of bases and of elements does not matter
        let cv2 = CharVector::from_bases(&ranker, [&[2, 0][..], &[1, 0][..]]).unwrap();
        assert_eq!(cv, cv2);
    }

    #[test]
    fn test_from_bases_integrity() {
        let ranker = BasisRanker::new(2, 4);
        assert_eq!(CharVector::from_bases(&ranker, [&[0, 1, 2][..]]), Err(IntegrityError::BasisWrongSize { basis: vec![0, 1, 2], rank: 2 }));
        assert_eq!(CharVector::from_bases(&ranker, [&[0, 4][..]]), Err(IntegrityError::BasisOutOfRange { basis: vec![0, 4], size: 4 }));
        assert_eq!(CharVector::from_bases(&ranker, [&[3, 3][..]]), Err(IntegrityError::DuplicateLabel { basis: vec![3, 3], label: 3 }));
        assert_eq!(
            CharVector::from_bases(&ranker, [&[0, 3][..], &[3, 0][..]]),
            Err(IntegrityError::DuplicateBasis { basis: vec![3, 0] })
        );
    }

    #[test]
    fn test_popcount_matches_bases() {
        let ranker = BasisRanker::new(3, 6);
        let bases: Vec<&[usize]> = ranker.iter().step_by(3).collect();
        let cv = CharVector::from_bases(&ranker, bases.iter().copied()).unwrap();
        assert_eq!(cv.len(), 20);
        assert_eq!(cv.count_ones(), bases.len());
    }

    #[test]
    fn test_string_form() {
        let cv: CharVector = "01101".parse().unwrap();
        assert_eq!(cv.len(), 5);
        assert!(!cv.get(0));
        assert!(cv.get(1));
        assert_eq!(cv.to_string(), "01101");
        assert_eq!("01a".parse::<CharVector>(), Err(ParseError::IllegalChar { pos: 2, c: 'a' }));
        assert!("".parse::<CharVector>().unwrap().is_empty());
    }

    #[test]
    fn test_permuted() {
        let cv: CharVector = "1100".parse().unwrap();
        assert_eq!(cv.permuted(&[3, 2, 1, 0]).to_string(), "0011");
        assert_eq!(cv.permuted(&[0, 2, 1, 3]).to_string(), "1010");
    }
}
