//  OUTPUT.rs
//    by Lut99
//
//  Created:
//    19 Mar 2025, 09:35:28
//  Last edited:
//    26 Mar 2025, 15:22:46
//  Auto updated?
//    Yes
//
//  Description:
//!   Writes batches of matroids to disk, and reads them back.
//!
//!   Every batch gets two files in the directory `r<R>n<N>` under some
//!   root:
//!   - `<#bases>_bases_representatives.txt`, with one `<id>:<vector>`
//!     line per representative; and
//!   - `<#bases>_bases_all.txt`, with one `<vector>` line per matroid in
//!     the orbits of the representatives.
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};
use std::fs::{self, File};
use std::io::{BufRead as _, BufReader, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use crate::batch::{Batch, BatchKey};
use crate::log::trace;
use crate::vector::{self, CharVector};


/***** ERRORS *****/
/// Defines errors originating from writing or reading batch files.
#[derive(Debug)]
pub enum Error {
    /// Failed to create a batch directory.
    DirCreate { path: PathBuf, err: std::io::Error },
    /// Failed to create a batch file.
    FileCreate { path: PathBuf, err: std::io::Error },
    /// Failed to write to a batch file.
    FileWrite { path: PathBuf, err: std::io::Error },
    /// Failed to open a batch file for reading.
    FileOpen { path: PathBuf, err: std::io::Error },
    /// Failed to read from a batch file.
    FileRead { path: PathBuf, err: std::io::Error },
    /// A line in a batch file was not a characteristic vector.
    IllegalVector { path: PathBuf, line: usize, err: vector::ParseError },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use Error::*;
        match self {
            DirCreate { path, .. } => write!(f, "Failed to create batch directory '{}'", path.display()),
            FileCreate { path, .. } => write!(f, "Failed to create batch file '{}'", path.display()),
            FileWrite { path, .. } => write!(f, "Failed to write to batch file '{}'", path.display()),
            FileOpen { path, .. } => write!(f, "Failed to open batch file '{}'", path.display()),
            FileRead { path, .. } => write!(f, "Failed to read from batch file '{}'", path.display()),
            IllegalVector { path, line, .. } => write!(f, "Line {line} of batch file '{}' is not a characteristic vector", path.display()),
        }
    }
}
impl error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        use Error::*;
        match self {
            DirCreate { err, .. } | FileCreate { err, .. } | FileWrite { err, .. } | FileOpen { err, .. } | FileRead { err, .. } => Some(err),
            IllegalVector { err, .. } => Some(err),
        }
    }
}





/***** LIBRARY *****/
/// Knows where the batch files live, and writes them.
#[derive(Clone, Debug)]
pub struct OutputWriter {
    /// The directory under which all batch directories are made.
    root: PathBuf,
}
impl OutputWriter {
    /// Constructor for the OutputWriter.
    ///
    /// # Arguments
    /// - `root`: The directory under which to write everything. Doesn't have to exist yet.
    ///
    /// # Returns
    /// A new OutputWriter.
    #[inline]
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    /// Returns the directory for all batches of the given rank and ground set size.
    #[inline]
    pub fn batch_dir(&self, rank: usize, size: usize) -> PathBuf { self.root.join(format!("r{rank}n{size}")) }

    /// Returns the path of the representatives file of the given batch.
    #[inline]
    pub fn representatives_path(&self, key: BatchKey) -> PathBuf {
        self.batch_dir(key.rank, key.size).join(format!("{}_bases_representatives.txt", key.basis_count))
    }

    /// Returns the path of the file with all matroids of the given batch.
    #[inline]
    pub fn all_path(&self, key: BatchKey) -> PathBuf { self.batch_dir(key.rank, key.size).join(format!("{}_bases_all.txt", key.basis_count)) }

    /// Creates a file and all of its parent directories.
    fn create(&self, path: PathBuf) -> Result<VectorSink, Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|err| Error::DirCreate { path: dir.into(), err })?;
        }
        trace!("Creating batch file '{}'", path.display());
        match File::create(&path) {
            Ok(handle) => Ok(VectorSink { handle: BufWriter::new(handle), path, written: 0 }),
            Err(err) => Err(Error::FileCreate { path, err }),
        }
    }

    /// Writes the representatives file of a batch.
    ///
    /// # Arguments
    /// - `batch`: The [`Batch`] to write. If it has no members, an empty file is written.
    ///
    /// # Returns
    /// The path of the written file.
    ///
    /// # Errors
    /// This function errors if the file (or its directory) could not be created or written to.
    pub fn write_representatives(&self, batch: &Batch) -> Result<PathBuf, Error> {
        let mut sink: VectorSink = self.create(self.representatives_path(batch.key))?;
        for rep in &batch.members {
            sink.write_labelled(&rep.id, &rep.char_vector)?;
        }
        sink.finish()
    }

    /// Creates the file with all matroids of a batch.
    ///
    /// # Arguments
    /// - `key`: The [`BatchKey`] of the batch to create the file for.
    ///
    /// # Returns
    /// A [`VectorSink`] to write the matroids to. Don't forget to call [`VectorSink::finish()`].
    ///
    /// # Errors
    /// This function errors if the file (or its directory) could not be created.
    #[inline]
    pub fn create_all(&self, key: BatchKey) -> Result<VectorSink, Error> { self.create(self.all_path(key)) }
}



/// An open batch file to which characteristic vectors are written, one per line.
#[derive(Debug)]
pub struct VectorSink {
    /// The buffered file.
    handle:  BufWriter<File>,
    /// The path of the file, for errors.
    path:    PathBuf,
    /// The number of lines written.
    written: usize,
}
impl VectorSink {
    /// Writes a single vector as a line.
    ///
    /// # Errors
    /// This function errors if writing failed.
    #[inline]
    pub fn write(&mut self, cv: &CharVector) -> Result<(), Error> {
        writeln!(self.handle, "{cv}").map_err(|err| Error::FileWrite { path: self.path.clone(), err })?;
        self.written += 1;
        Ok(())
    }

    /// Writes a single vector as a line, prefixed with `<id>:`.
    ///
    /// # Errors
    /// This function errors if writing failed.
    #[inline]
    pub fn write_labelled(&mut self, id: &str, cv: &CharVector) -> Result<(), Error> {
        writeln!(self.handle, "{id}:{cv}").map_err(|err| Error::FileWrite { path: self.path.clone(), err })?;
        self.written += 1;
        Ok(())
    }

    /// Returns the number of lines written so far.
    #[inline]
    pub const fn written(&self) -> usize { self.written }

    /// Flushes the file and closes it.
    ///
    /// # Returns
    /// The path of the file.
    ///
    /// # Errors
    /// This function errors if flushing failed.
    pub fn finish(mut self) -> Result<PathBuf, Error> {
        if let Err(err) = self.handle.flush() {
            return Err(Error::FileWrite { path: self.path, err });
        }
        trace!("Wrote {} line(s) to '{}'", self.written, self.path.display());
        Ok(self.path)
    }
}



/// Reads the characteristic vectors from a file of all matroids of a batch.
///
/// # Arguments
/// - `path`: The path to the file to read.
///
/// # Returns
/// The vectors in file order.
///
/// # Errors
/// This function errors if the file could not be read or contained something else than vectors.
pub fn read_vectors(path: impl AsRef<Path>) -> Result<Vec<CharVector>, Error> {
    let path: &Path = path.as_ref();
    let handle: File = File::open(path).map_err(|err| Error::FileOpen { path: path.into(), err })?;
    let mut res: Vec<CharVector> = Vec::new();
    for (i, line) in BufReader::new(handle).lines().enumerate() {
        let line: String = line.map_err(|err| Error::FileRead { path: path.into(), err })?;
        res.push(line.trim_end().parse().map_err(|err| Error::IllegalVector { path: path.into(), line: i + 1, err })?);
    }
    Ok(res)
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Record, Representative};
    use crate::tables::TableCache;
    use crate::tests::scratch_dir;


    #[test]
    fn test_paths() {
        let writer = OutputWriter::new("/tmp/sets");
        let key = BatchKey { rank: 2, size: 5, basis_count: 7 };
        assert_eq!(writer.representatives_path(key), PathBuf::from("/tmp/sets/r2n5/7_bases_representatives.txt"));
        assert_eq!(writer.all_path(key), PathBuf::from("/tmp/sets/r2n5/7_bases_all.txt"));
    }

    #[test]
    fn test_write_and_read() {
        let dir = scratch_dir("output-write-and-read");
        let writer = OutputWriter::new(&dir);

        // Representatives
        let mut tables = TableCache::new();
        let rep = Representative::derive(Record::parse("m7 3 2 2 [01] [02]").unwrap(), &mut tables).unwrap();
        let key = BatchKey { rank: 2, size: 3, basis_count: 2 };
        let path = writer.write_representatives(&Batch { key, members: vec![&rep] }).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "m7:110\n");

        // Empty batches still get a file, and a second write is idempotent
        let empty = BatchKey { rank: 2, size: 3, basis_count: 1 };
        let path = writer.write_representatives(&Batch { key: empty, members: vec![] }).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        writer.write_representatives(&Batch { key: empty, members: vec![] }).unwrap();

        // All
        let mut sink = writer.create_all(key).unwrap();
        for cv in ["110", "101", "011"] {
            sink.write(&cv.parse().unwrap()).unwrap();
        }
        assert_eq!(sink.written(), 3);
        let path = sink.finish().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "110\n101\n011\n");
        assert_eq!(read_vectors(&path).unwrap().iter().map(CharVector::to_string).collect::<Vec<_>>(), vec!["110", "101", "011"]);
    }

    #[test]
    fn test_read_illegal() {
        let dir = scratch_dir("output-read-illegal");
        let path = dir.join("bad.txt");
        fs::write(&path, "110\n1x0\n").unwrap();
        assert!(matches!(read_vectors(&path), Err(Error::IllegalVector { line: 2, .. })));
        assert!(matches!(read_vectors(dir.join("missing.txt")), Err(Error::FileOpen { .. })));
    }
}
