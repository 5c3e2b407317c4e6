#![no_std]
#![forbid(unsafe_code)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_assignments, unused_variables))
))]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub, missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Fibonacci numbers, computed two ways, printed as a table.
//!
//! The crate exposes a naive [recursive](algorithm::recursive) generator and a linear
//! [iterative](algorithm::iterative) one. Both produce the same values; they only differ in cost.
//! A [`Table`] pairs one of them with an upper bound and yields `index\tvalue` rows.
//!
//! ## Features
//! - **`std`**\
//!   Enables [`Table::write_to`] for writing rows to any [`std::io::Write`]. Enabled by default.
//! - **`log`**\
//!   Emits diagnostics through the [`log`](https://docs.rs/log) facade. Enabled by default.
//!
//! ## Usage
//!
//! ```rust
//! use fibtable::{Algorithm, Table};
//!
//! assert_eq!(Algorithm::Recursive.fib(10)?, 55);
//!
//! let mut out = Vec::new();
//! let rows = Table::with_max_count(Algorithm::Iterative, 3).write_to(&mut out)?;
//! assert_eq!(rows, 3);
//! assert_eq!(out, b"0\t0\n1\t1\n2\t1\n");
//! # Ok::<(), fibtable::Error>(())
//! ```

#[cfg(feature = "std")]
extern crate std;

// log for logging (optional).
#[cfg(feature = "log")]
#[allow(clippy::single_component_path_imports, unused_imports)]
use log;

#[cfg(not(feature = "log"))]
#[allow(unused_imports, unused_macros)]
pub(crate) mod log {
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    pub(crate) use debug;
    pub(crate) use trace;
}

mod error;
pub use error::*;

pub mod algorithm;
pub use algorithm::{Algorithm, MAX_INDEX};

mod table;
pub use table::{DEFAULT_MAX_COUNT, Row, Rows, Table};
