//  TESTS.rs
//    by Lut99
//
//  Created:
//    17 Mar 2025, 15:20:42
//  Last edited:
//    26 Mar 2025, 11:08:03
//  Auto updated?
//    Yes
//
//  Description:
//!   Contains some common test functions.
//

#![allow(unused)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::ranker::Basis;
use crate::vector::CharVector;


/***** LIBRARY *****/
/// Sets up a logger if wanted.
#[cfg(feature = "log")]
pub fn setup_logger() {
    use humanlog::{DebugMode, HumanLogger};

    // Check if the envs tell us to
    if let Ok(logger) = std::env::var("LOGGER") {
        if logger == "1" || logger == "true" {
            // Create the logger
            if let Err(err) = HumanLogger::terminal(DebugMode::Full).init() {
                eprintln!("WARNING: Failed to setup logger: {err} (no logging for this session)");
            }
        }
    }
}



/// Relabels bases by hand, i.e., replaces every label `l` by `perm[l]` and sorts the result.
pub fn relabel(bases: &[Basis], perm: &[usize]) -> Vec<Basis> {
    bases
        .iter()
        .map(|basis| {
            let mut basis: Basis = basis.iter().map(|&l| perm[l]).collect();
            basis.sort_unstable();
            basis
        })
        .collect()
}

/// Produces all `2^len` characteristic vectors of the given length.
pub fn all_vectors(len: usize) -> impl Iterator<Item = CharVector> {
    (0..1usize << len).map(move |bits| CharVector::from((0..len).map(|i| bits & (1 << i) != 0).collect::<Vec<bool>>()))
}

/// Makes a fresh, empty scratch directory for a test.
///
/// # Arguments
/// - `name`: Some name that is unique for the calling test.
///
/// # Returns
/// The path to the directory, which exists but is empty.
#[track_caller]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir: PathBuf = std::env::temp_dir().join(format!("matroid-orbits-{}-{name}", std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap_or_else(|err| panic!("Failed to clear scratch directory '{}': {err}", dir.display()));
    }
    std::fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("Failed to create scratch directory '{}': {err}", dir.display()));
    dir
}

/// Reads every file below a directory.
///
/// # Arguments
/// - `root`: The directory to read.
///
/// # Returns
/// A map from the path of every (regular) file, relative to `root`, to its contents.
#[track_caller]
pub fn read_tree(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files: BTreeMap<PathBuf, Vec<u8>> = BTreeMap::new();
    for entry in WalkDir::new(root) {
        let entry = entry.unwrap_or_else(|err| panic!("Failed to walk '{}': {err}", root.display()));
        if entry.file_type().is_file() {
            let contents: Vec<u8> = std::fs::read(entry.path()).unwrap_or_else(|err| panic!("Failed to read '{}': {err}", entry.path().display()));
            let rel: PathBuf = entry.path().strip_prefix(root).unwrap_or_else(|err| panic!("'{}' is not below '{}': {err}", entry.path().display(), root.display())).into();
            files.insert(rel, contents);
        }
    }
    files
}
