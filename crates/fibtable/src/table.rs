use core::{fmt::Display, ops::Range};

use crate::{Algorithm, Result};

#[allow(unused_imports)]
use crate::log::{debug, trace};

/// Number of rows both table programs print
pub const DEFAULT_MAX_COUNT: u32 = 35;

/// A single `index\tvalue` line of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// The sequence index
    pub index: u32,
    /// `fib(index)`
    pub value: u64,
}

impl Display for Row {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}\t{}", self.index, self.value)
    }
}

/// A Fibonacci table for the indices `0..max_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    algorithm: Algorithm,
    max_count: u32,
}

impl Table {
    /// Create a table of [`DEFAULT_MAX_COUNT`] rows
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_max_count(algorithm, DEFAULT_MAX_COUNT)
    }

    /// Create a table of `max_count` rows
    pub fn with_max_count(algorithm: Algorithm, max_count: u32) -> Self {
        Self { algorithm, max_count }
    }

    /// The algorithm used to compute each row
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The exclusive upper bound on the printed indices
    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Iterate over the rows, computing each value as it is pulled
    pub fn rows(&self) -> Rows {
        Rows { algorithm: self.algorithm, indices: 0..self.max_count }
    }

    /// Write every row followed by a newline, then flush
    ///
    /// Returns the number of rows written.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn write_to(&self, mut writer: impl std::io::Write) -> Result<usize> {
        debug!("writing {} rows using the {} algorithm", self.max_count, self.algorithm);

        let mut written = 0;
        for row in self.rows() {
            let row = row?;
            trace!("row {}: {}", row.index, row.value);
            writeln!(writer, "{row}")?;
            written += 1;
        }

        writer.flush()?;
        Ok(written)
    }
}

/// Iterator over the rows of a [`Table`], see [`Table::rows`]
#[derive(Debug, Clone)]
pub struct Rows {
    algorithm: Algorithm,
    indices: Range<u32>,
}

impl Iterator for Rows {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        Some(self.algorithm.fib(index).map(|value| Row { index, value }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for Rows {}
