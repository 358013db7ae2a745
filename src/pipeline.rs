//  PIPELINE.rs
//    by Lut99
//
//  Created:
//    19 Mar 2025, 13:58:04
//  Last edited:
//    27 Mar 2025, 10:44:19
//  Auto updated?
//    Yes
//
//  Description:
//!   Ties everything together: reads the representatives, computes their
//!   characteristic vectors, writes them out and finally writes out all
//!   matroids in their orbits.
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};
use std::path::PathBuf;
use std::time::Duration;

use crate::batch::{Batch, Batches};
use crate::input::{self, Record, Representative};
use crate::log::debug;
use crate::orbit::{self, Orbit};
use crate::output::{self, OutputWriter, VectorSink};
use crate::progress::{DEFAULT_UPDATE_FREQUENCY, ProgressReporter};
use crate::tables::TableCache;


/***** CONSTANTS *****/
/// The default path of the database of representatives.
pub const DEFAULT_INPUT: &str = "resources/matroid_sets/matroids09_bases";
/// The default directory to write the batches to.
pub const DEFAULT_OUTPUT: &str = "resources/matroid_sets";
/// The default `(R, N)`-pair at which reading and enumerating stops.
pub const DEFAULT_CUTOFF: (usize, usize) = (2, 2);
/// The default largest rank and ground set size enumerated.
pub const DEFAULT_MAX_SIZE: usize = 9;





/***** ERRORS *****/
/// Defines errors originating from running the pipeline.
#[derive(Debug)]
pub enum Error {
    /// Failed to read the representatives.
    Input { err: input::Error },
    /// Failed to write a batch.
    Output { err: output::Error },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::Input { .. } => write!(f, "Failed to load representatives"),
            Self::Output { .. } => write!(f, "Failed to write matroids"),
        }
    }
}
impl error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Input { err } => Some(err),
            Self::Output { err } => Some(err),
        }
    }
}
impl From<input::Error> for Error {
    #[inline]
    fn from(err: input::Error) -> Self { Self::Input { err } }
}
impl From<output::Error> for Error {
    #[inline]
    fn from(err: output::Error) -> Self { Self::Output { err } }
}





/***** LIBRARY *****/
/// Configures a run of the pipeline.
#[derive(Clone, Debug)]
pub struct Config {
    /// The database of representatives to read.
    pub input: PathBuf,
    /// The directory to write the batches to.
    pub output: PathBuf,
    /// The `(R, N)`-pair at which reading and enumerating stops.
    pub cutoff: (usize, usize),
    /// The largest rank and ground set size enumerated.
    pub max_size: usize,
    /// The minimum time between two throttled progress messages.
    pub update_frequency: Duration,
    /// Whether to report progress at all.
    pub verbose: bool,
}
impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
            cutoff: DEFAULT_CUTOFF,
            max_size: DEFAULT_MAX_SIZE,
            update_frequency: DEFAULT_UPDATE_FREQUENCY,
            verbose: true,
        }
    }
}
impl Config {
    /// Returns a [`ProgressReporter`] as configured.
    #[inline]
    pub fn progress(&self) -> ProgressReporter { if self.verbose { ProgressReporter::new(self.update_frequency) } else { ProgressReporter::quiet() } }
}



/// Summarizes what a run of the pipeline did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// The number of representatives read.
    pub representatives: usize,
    /// The number of batches walked (including empty ones).
    pub batches: usize,
    /// The number of matroids written over all orbits.
    pub matroids: usize,
}
impl Display for Summary {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        write!(f, "{} representative(s) expanded into {} matroid(s) over {} batch(es)", self.representatives, self.matroids, self.batches)
    }
}



/// Reads the representatives and computes their characteristic vectors.
///
/// # Arguments
/// - `config`: The [`Config`] that says where to read from and when to stop.
/// - `tables`: The [`TableCache`] to take the rankers from.
/// - `progress`: A [`ProgressReporter`] to report progress with.
///
/// # Returns
/// The [`Representative`]s, in input order.
///
/// # Errors
/// This function errors if the input could not be read or described malformed matroids.
pub fn load(config: &Config, tables: &mut TableCache, progress: &mut ProgressReporter) -> Result<Vec<Representative>, Error> {
    let records: Vec<Record> = input::load_records(&config.input, config.cutoff, progress)?;
    Ok(input::derive_representatives(records, tables, progress)?)
}

/// Writes the representatives file of every batch.
///
/// # Arguments
/// - `reps`: The [`Representative`]s to write.
/// - `config`: The [`Config`] that says which batches to walk.
/// - `writer`: The [`OutputWriter`] to write with.
/// - `progress`: A [`ProgressReporter`] to report progress with.
///
/// # Returns
/// The number of batches written.
///
/// # Errors
/// This function errors if any of the files could not be written.
pub fn write_representatives(reps: &[Representative], config: &Config, writer: &OutputWriter, progress: &mut ProgressReporter) -> Result<usize, Error> {
    progress.announce("Writing characteristic vectors to files...");
    let mut n_batches: usize = 0;
    for batch in Batches::new(reps, config.max_size, config.cutoff, progress) {
        writer.write_representatives(&batch)?;
        n_batches += 1;
    }
    Ok(n_batches)
}

/// Writes the file with all matroids of a single batch.
///
/// # Arguments
/// - `batch`: The [`Batch`] to expand.
/// - `writer`: The [`OutputWriter`] to write with.
/// - `tables`: The [`TableCache`] to take the action table from.
///
/// # Returns
/// The number of matroids written.
///
/// # Errors
/// This function errors if the file could not be written.
pub fn expand_batch(batch: &Batch, writer: &OutputWriter, tables: &mut TableCache) -> Result<usize, Error> {
    let mut sink: VectorSink = writer.create_all(batch.key)?;
    if !batch.members.is_empty() {
        let table = tables.action(batch.key.rank, batch.key.size);
        for rep in &batch.members {
            let orbit: Orbit = orbit::expand(&rep.char_vector, table);
            debug!("Representative {:?} ({}) has {} relabelling(s)", rep.id, batch.key, orbit.len());
            for cv in &orbit {
                sink.write(cv)?;
            }
        }
    }
    let written: usize = sink.written();
    sink.finish()?;
    Ok(written)
}

/// Writes the file with all matroids of every batch.
///
/// # Arguments
/// - `reps`: The [`Representative`]s to expand.
/// - `config`: The [`Config`] that says which batches to walk.
/// - `writer`: The [`OutputWriter`] to write with.
/// - `tables`: The [`TableCache`] to take the action tables from.
/// - `progress`: A [`ProgressReporter`] to report progress with.
///
/// # Returns
/// The number of matroids written.
///
/// # Errors
/// This function errors if any of the files could not be written.
pub fn generate_all(
    reps: &[Representative],
    config: &Config,
    writer: &OutputWriter,
    tables: &mut TableCache,
    progress: &mut ProgressReporter,
) -> Result<usize, Error> {
    progress.announce("Generating all matroids...");
    let mut n_matroids: usize = 0;
    for batch in Batches::new(reps, config.max_size, config.cutoff, progress) {
        n_matroids += expand_batch(&batch, writer, tables)?;
    }
    Ok(n_matroids)
}

/// Runs the whole pipeline.
///
/// # Arguments
/// - `config`: The [`Config`] to run with.
///
/// # Returns
/// A [`Summary`] of what has been done.
///
/// # Errors
/// This function errors if the input could not be read or any of the output could not be written.
pub fn run(config: &Config) -> Result<Summary, Error> {
    let mut progress: ProgressReporter = config.progress();
    let mut tables: TableCache = TableCache::new();
    let writer: OutputWriter = OutputWriter::new(&config.output);

    let reps: Vec<Representative> = load(config, &mut tables, &mut progress)?;
    let batches: usize = write_representatives(&reps, config, &writer, &mut progress)?;
    let matroids: usize = generate_all(&reps, config, &writer, &mut tables, &mut progress)?;
    progress.announce("Program complete.");
    Ok(Summary { representatives: reps.len(), batches, matroids })
}





/***** TESTS *****/
