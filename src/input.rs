//  INPUT.rs
//    by Lut99
//
//  Created:
//    18 Mar 2025, 11:02:51
//  Last edited:
//    26 Mar 2025, 13:35:20
//  Auto updated?
//    Yes
//
//  Description:
//!   Reads the database of isomorphism class representatives.
//!
//!   Every line of the input describes one matroid as
//!   ```plain
//!   <id> <N> <R> <#bases> <basis 1> <basis 2> ... <basis #bases>
//!   ```
//!   where every basis is written as its element labels (one digit each)
//!   between some delimiters, e.g., `[013]`.
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use crate::log::debug;
use crate::progress::ProgressReporter;
use crate::ranker::Basis;
use crate::tables::TableCache;
use crate::vector::{CharVector, IntegrityError};


/***** CONSTANTS *****/
/// The number of lines read between two checks whether progress must be reported.
pub const LINES_PER_PROGRESS_CHECK: usize = 1000;





/***** ERRORS *****/
/// Defines why a single line could not be parsed.
#[derive(Debug)]
pub enum ParseErrorKind {
    /// A mandatory field was not given.
    MissingField { what: &'static str },
    /// A field was not a (non-negative) integer.
    IllegalInteger { what: &'static str, raw: String, err: ParseIntError },
    /// A basis was not a delimited sequence of digits.
    IllegalBasis { raw: String },
}
impl Display for ParseErrorKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use ParseErrorKind::*;
        match self {
            MissingField { what } => write!(f, "Missing field {what}"),
            IllegalInteger { what, raw, .. } => write!(f, "Field {what} ({raw:?}) is not a valid non-negative integer"),
            IllegalBasis { raw } => write!(f, "Basis {raw:?} is not a delimited sequence of digits"),
        }
    }
}
impl error::Error for ParseErrorKind {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::IllegalInteger { err, .. } => Some(err),
            Self::MissingField { .. } | Self::IllegalBasis { .. } => None,
        }
    }
}

/// Defines errors originating from reading the representatives.
#[derive(Debug)]
pub enum Error {
    /// Failed to open the input file.
    FileOpen { path: PathBuf, err: std::io::Error },
    /// Failed to read from the input.
    Read { what: String, err: std::io::Error },
    /// A line in the input was malformed.
    Parse { what: String, line: usize, err: ParseErrorKind },
    /// A representative did not describe a valid set of bases.
    Integrity { id: String, err: IntegrityError },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use Error::*;
        match self {
            FileOpen { path, .. } => write!(f, "Failed to open input file '{}'", path.display()),
            Read { what, .. } => write!(f, "Failed to read from {what}"),
            Parse { what, line, .. } => write!(f, "Failed to parse line {line} of {what}"),
            Integrity { id, .. } => write!(f, "Representative {id:?} is malformed"),
        }
    }
}
impl error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        use Error::*;
        match self {
            FileOpen { err, .. } => Some(err),
            Read { err, .. } => Some(err),
            Parse { err, .. } => Some(err),
            Integrity { err, .. } => Some(err),
        }
    }
}





/***** HELPERS *****/
/// Parses the next whitespace-separated field as an integer.
fn parse_int<'l>(fields: &mut impl Iterator<Item = &'l str>, what: &'static str) -> Result<usize, ParseErrorKind> {
    let raw: &str = fields.next().ok_or(ParseErrorKind::MissingField { what })?;
    raw.parse().map_err(|err| ParseErrorKind::IllegalInteger { what, raw: raw.into(), err })
}

/// Parses a basis by stripping the delimiters and reading every remaining character as a label.
fn parse_basis(raw: &str) -> Result<Basis, ParseErrorKind> {
    let mut chars = raw.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(ParseErrorKind::IllegalBasis { raw: raw.into() });
    }
    chars
        .map(|c| c.to_digit(10).map(|d| d as usize).ok_or_else(|| ParseErrorKind::IllegalBasis { raw: raw.into() }))
        .collect()
}





/***** LIBRARY *****/
/// A single line of the input, as given.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The identifier of the matroid.
    pub id: String,
    /// The size `N` of the ground set.
    pub size: usize,
    /// The rank `R` of the matroid.
    pub rank: usize,
    /// The declared number of bases.
    pub basis_count: usize,
    /// The bases as written down.
    pub bases: Vec<Basis>,
}
impl Record {
    /// Parses a single line of the input.
    ///
    /// # Arguments
    /// - `line`: The line to parse.
    ///
    /// # Returns
    /// A new Record with the line's contents. Note that the bases are not yet validated.
    ///
    /// # Errors
    /// This function errors if the line does not have the shape of a record.
    pub fn parse(line: &str) -> Result<Self, ParseErrorKind> {
        let mut fields = line.split_whitespace();
        let id: String = fields.next().ok_or(ParseErrorKind::MissingField { what: "id" })?.into();
        let size: usize = parse_int(&mut fields, "N")?;
        let rank: usize = parse_int(&mut fields, "R")?;
        let basis_count: usize = parse_int(&mut fields, "#bases")?;
        let bases: Vec<Basis> = fields.map(parse_basis).collect::<Result<_, _>>()?;
        Ok(Self { id, size, rank, basis_count, bases })
    }
}



/// A representative of an isomorphism class of matroids, together with its characteristic vector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Representative {
    /// The identifier of the matroid.
    pub id: String,
    /// The size `N` of the ground set.
    pub size: usize,
    /// The rank `R` of the matroid.
    pub rank: usize,
    /// The number of bases.
    pub basis_count: usize,
    /// The bases, as given in the input.
    pub bases: Vec<Basis>,
    /// The characteristic vector of the bases.
    pub char_vector: CharVector,
}
impl Representative {
    /// Derives the representative (i.e., computes its characteristic vector) of a [`Record`].
    ///
    /// # Arguments
    /// - `record`: The [`Record`] to derive from.
    /// - `tables`: The [`TableCache`] to take the ranker from.
    ///
    /// # Returns
    /// A new Representative.
    ///
    /// # Errors
    /// This function errors if the record does not describe a valid set of bases of its declared
    /// rank, size and count.
    pub fn derive(record: Record, tables: &mut TableCache) -> Result<Self, IntegrityError> {
        let Record { id, size, rank, basis_count, bases } = record;
        if rank > size {
            return Err(IntegrityError::RankExceedsSize { rank, size });
        }
        if basis_count != bases.len() {
            return Err(IntegrityError::BasisCountMismatch { declared: basis_count, got: bases.len() });
        }
        let char_vector: CharVector = CharVector::from_bases(tables.ranker(rank, size), bases.iter().map(Vec::as_slice))?;
        Ok(Self { id, size, rank, basis_count, bases, char_vector })
    }
}



/// Reads all records from the given reader.
///
/// Reading stops at the first record of the given cutoff rank and size. That record is not
/// returned, and neither is anything after it. Every line must hold a
/// record, so an empty line is a parse error too.
///
/// # Arguments
/// - `what`: Some description of the input, used in errors.
/// - `reader`: The [`BufRead`]er to read from.
/// - `cutoff`: The `(R, N)`-pair to stop at.
/// - `progress`: A [`ProgressReporter`] to report the number of lines read with.
///
/// # Returns
/// The [`Record`]s, in input order.
///
/// # Errors
/// This function errors if reading failed or a line was malformed.
pub fn read_records(what: &str, reader: impl BufRead, cutoff: (usize, usize), progress: &mut ProgressReporter) -> Result<Vec<Record>, Error> {
    progress.announce(format_args!("Reading representatives from {what}..."));
    let mut records: Vec<Record> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line: String = line.map_err(|err| Error::Read { what: what.into(), err })?;
        let record: Record = Record::parse(&line).map_err(|err| Error::Parse { what: what.into(), line: i + 1, err })?;
        if (record.rank, record.size) == cutoff {
            debug!("Reached cutoff r{}n{} at line {} of {what}", cutoff.0, cutoff.1, i + 1);
            break;
        }
        records.push(record);

        if i % LINES_PER_PROGRESS_CHECK == LINES_PER_PROGRESS_CHECK - 1 {
            progress.tick(|| format!("Processed {} lines.", i + 1));
        }
    }
    debug!("Read {} record(s) from {what}", records.len());
    Ok(records)
}

/// Derives the representatives of all given records.
///
/// # Arguments
/// - `records`: The [`Record`]s to derive from, e.g., as returned by [`read_records()`].
/// - `tables`: The [`TableCache`] to take the rankers from.
/// - `progress`: A [`ProgressReporter`] to report progress with.
///
/// # Returns
/// The [`Representative`]s, in the order of the records.
///
/// # Errors
/// This function errors at the first record that does not describe a valid set of bases. The
/// error names the record by its identifier.
pub fn derive_representatives(records: Vec<Record>, tables: &mut TableCache, progress: &mut ProgressReporter) -> Result<Vec<Representative>, Error> {
    progress.announce("Calculating characteristic vectors...");
    let mut reps: Vec<Representative> = Vec::with_capacity(records.len());
    for record in records {
        let id: String = record.id.clone();
        reps.push(Representative::derive(record, tables).map_err(|err| Error::Integrity { id, err })?);
    }
    debug!("Derived {} representative(s)", reps.len());
    Ok(reps)
}

/// Reads all records from the given file.
///
/// See [`read_records()`] for more information.
///
/// # Errors
/// This function errors if the file could not be opened or read, or a line was malformed.
pub fn load_records(path: impl AsRef<Path>, cutoff: (usize, usize), progress: &mut ProgressReporter) -> Result<Vec<Record>, Error> {
    let path: &Path = path.as_ref();
    let handle: File = File::open(path).map_err(|err| Error::FileOpen { path: path.into(), err })?;
    read_records(&format!("'{}'", path.display()), BufReader::new(handle), cutoff, progress)
}





/***** TESTS *****/
