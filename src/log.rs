//  LOG.rs
//    by Lut99
//
//  Created:
//    14 Mar 2025, 10:02:17
//  Last edited:
//    21 Mar 2025, 16:40:53
//  Auto updated?
//    Yes
//
//  Description:
//!   Provides [`log`]-macro counterparts that only log if the `log`-feature
//!   is given.
//!
//!   The enumeration itself is silent; these are used by the pipeline
//!   and the progress reporter to tell the user where we are.
//


/***** LIBRARY *****/
/// Mirrors the `info!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature enabled, this macro has exactly the same behaviour.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! info {
    ($($t:tt)*) => {
        ::log::info!($($t)*)
    };
}
/// Mirrors the `info!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature disabled, this macro does nothing.
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! info {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use info;

/// Mirrors the `warn!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature enabled, this macro has exactly the same behaviour.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! warning {
    ($($t:tt)*) => {
        ::log::warn!($($t)*)
    };
}
/// Mirrors the `warn!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature disabled, this macro does nothing.
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! warning {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use warning as warn;

/// Mirrors the `debug!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature enabled, this macro has exactly the same behaviour.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! debug {
    ($($t:tt)*) => {
        ::log::debug!($($t)*)
    };
}
/// Mirrors the `debug!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature disabled, this macro does nothing.
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! debug {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use debug;

/// Mirrors the `trace!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature enabled, this macro has exactly the same behaviour.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! trace {
    ($($t:tt)*) => {
        ::log::trace!($($t)*)
    };
}
/// Mirrors the `trace!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature disabled, this macro does nothing.
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! trace {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use trace;
