//  GENERATE.rs
//    by Lut99
//
//  Created:
//    19 Mar 2025, 16:12:40
//  Last edited:
//    27 Mar 2025, 11:05:37
//  Auto updated?
//    Yes
//
//  Description:
//!   Generates all matroids from a database of isomorphism class
//!   representatives.
//

use std::fmt::{Display, Formatter, Result as FResult};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use console::style;
use error_trace::toplevel;
use humanlog::{DebugMode, HumanLogger};
use log::{debug, error, info};
use matroid_orbits::pipeline::{self, Config, Summary, DEFAULT_CUTOFF, DEFAULT_INPUT, DEFAULT_MAX_SIZE, DEFAULT_OUTPUT};


/***** HELPERS *****/
/// Parses an `(R, N)`-pair given as `R,N`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Pair(usize, usize);
impl Display for Pair {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { write!(f, "{},{}", self.0, self.1) }
}
impl FromStr for Pair {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, size) = s.split_once(',').ok_or_else(|| format!("Expected a pair 'R,N', got {s:?}"))?;
        let rank: usize = rank.trim().parse().map_err(|err| format!("Illegal rank {rank:?}: {err}"))?;
        let size: usize = size.trim().parse().map_err(|err| format!("Illegal ground set size {size:?}: {err}"))?;
        Ok(Self(rank, size))
    }
}





/***** ARGUMENTS *****/
/// Defines arguments to the generator.
#[derive(Debug, Parser)]
pub struct Arguments {
    /// If given, enables more verbose logging.
    #[clap(long, global = true)]
    debug: bool,
    /// If given, does not report progress.
    #[clap(short, long, global = true)]
    quiet: bool,

    /// The database of representatives to read, one matroid per line.
    #[clap(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// The directory to write the batches to.
    #[clap(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// The rank and ground set size, as `R,N`, at which to stop reading and generating.
    #[clap(short, long, default_value_t = Pair(DEFAULT_CUTOFF.0, DEFAULT_CUTOFF.1))]
    cutoff: Pair,
    /// The largest rank and ground set size to generate for.
    #[clap(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,
    /// The minimum number of seconds between two progress messages.
    #[clap(long, default_value_t = 3)]
    update_frequency: u64,
}





/***** ENTRYPOINT *****/
fn main() {
    // Parse the CLI arguments
    let args = Arguments::parse();

    // Setup the logger
    if let Err(err) = HumanLogger::terminal(if args.debug { DebugMode::Full } else { DebugMode::HumanFriendly }).init() {
        eprintln!("WARNING: Failed to setup logger: {err} (no logging for this session)");
    }
    info!("matroid-orbits {} - v{}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));

    // Build the config
    let config = Config {
        input: args.input,
        output: args.output,
        cutoff: (args.cutoff.0, args.cutoff.1),
        max_size: args.max_size,
        update_frequency: Duration::from_secs(args.update_frequency),
        verbose: !args.quiet,
    };
    debug!("Running with {config:#?}");

    // Run it
    let summary: Summary = match pipeline::run(&config) {
        Ok(summary) => summary,
        Err(err) => {
            error!("{}", toplevel!(("Failed to generate matroids from '{}'", config.input.display()), err));
            std::process::exit(1);
        },
    };
    println!("{} {summary}", style("Done:").bold().green());
    println!("Output written to {}", style(config.output.display()).bold());
}





/***** TESTS *****/
