//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Mar 2025, 09:51:26
//  Last edited:
//    27 Mar 2025, 10:50:02
//  Auto updated?
//    Yes
//
//  Description:
//!   Enumerates all matroids of small rank and ground set size.
//!
//!   Starting from one representative per isomorphism class, every
//!   representative is expanded into all matroids obtained by relabelling
//!   its ground set. Matroids are encoded as characteristic vectors over
//!   the lexicographically ordered bases, and relabellings are applied
//!   through precomputed [action tables](action::ActionTable).
//

// Declare modules
pub mod action;
pub mod batch;
pub mod input;
mod log;
pub mod orbit;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod ranker;
pub mod tables;
#[cfg(test)]
mod tests;
pub mod vector;
