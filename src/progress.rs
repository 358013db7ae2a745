//  PROGRESS.rs
//    by Lut99
//
//  Created:
//    18 Mar 2025, 10:26:37
//  Last edited:
//    25 Mar 2025, 16:03:49
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements a [`ProgressReporter`] that tells the user what the
//!   (long-running) pipeline is doing without flooding the log.
//

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::log::info;


/***** CONSTANTS *****/
/// The default minimum time between two throttled progress messages.
pub const DEFAULT_UPDATE_FREQUENCY: Duration = Duration::from_secs(3);





/***** LIBRARY *****/
/// Reports progress through the `info!()`-log, throttled to at most one message per update
/// period.
#[derive(Clone, Debug)]
pub struct ProgressReporter {
    /// Whether to report at all.
    enabled: bool,
    /// The minimum time between two throttled messages.
    update_frequency: Duration,
    /// The last time a message was emitted, or when the reporter was created.
    last: Instant,
}
impl ProgressReporter {
    /// Constructor for the ProgressReporter.
    ///
    /// # Arguments
    /// - `update_frequency`: The minimum time between two throttled messages.
    ///
    /// # Returns
    /// A new ProgressReporter that starts its first period now.
    #[inline]
    pub fn new(update_frequency: Duration) -> Self { Self { enabled: true, update_frequency, last: Instant::now() } }

    /// Constructor for a ProgressReporter that never reports anything.
    #[inline]
    pub fn quiet() -> Self { Self { enabled: false, update_frequency: Duration::MAX, last: Instant::now() } }

    /// Returns whether this reporter reports anything.
    #[inline]
    pub const fn is_enabled(&self) -> bool { self.enabled }

    /// Reports a message unconditionally (if enabled), and starts a new period.
    ///
    /// # Arguments
    /// - `msg`: The message to report.
    #[allow(unused_variables)]
    pub fn announce(&mut self, msg: impl Display) {
        if self.enabled {
            info!("{msg}");
            self.last = Instant::now();
        }
    }

    /// Reports a message if (and only if) the current period has elapsed.
    ///
    /// # Arguments
    /// - `msg`: A closure producing the message. Only called if it is reported.
    ///
    /// # Returns
    /// Whether the message was reported.
    #[allow(unused_variables)]
    pub fn tick<D: Display>(&mut self, msg: impl FnOnce() -> D) -> bool {
        if !self.enabled {
            return false;
        }
        let now: Instant = Instant::now();
        if now.duration_since(self.last) <= self.update_frequency {
            return false;
        }
        info!("{}", msg());
        self.last = now;
        true
    }
}
impl Default for ProgressReporter {
    #[inline]
    fn default() -> Self { Self::new(DEFAULT_UPDATE_FREQUENCY) }
}





/***** TESTS *****/
