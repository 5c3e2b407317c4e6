//! The two Fibonacci generators.
//!
//! See <http://en.wikipedia.org/wiki/Fibonacci_number>

use core::{fmt::Display, str::FromStr};

use crate::{Error, Result};

/// The largest index whose Fibonacci value still fits in a `u64`
///
/// `fib(93) = 12200160415121876738`, `fib(94)` would need 65 bits.
pub const MAX_INDEX: u32 = 93;

/// Compute `fib(n)` by naive recursion
///
/// Exponential in `n`: fine for a table of 35 rows, painfully slow well before [`MAX_INDEX`].
pub fn recursive(n: u32) -> Result<u64> {
    check_index(n)?;
    Ok(recursive_unchecked(n))
}

fn recursive_unchecked(n: u32) -> u64 {
    if n < 2 {
        return n as u64;
    }
    recursive_unchecked(n - 1) + recursive_unchecked(n - 2)
}

/// Compute `fib(n)` by iteration, in linear time and constant space
pub fn iterative(n: u32) -> Result<u64> {
    check_index(n)?;

    let mut last = 0u64;
    let mut curr = 1u64;
    for _ in 0..n {
        // `curr` runs one step ahead of `last`, so it may exceed u64 on the final step
        (last, curr) = (curr, last.wrapping_add(curr));
    }
    Ok(last)
}

fn check_index(n: u32) -> Result<()> {
    match n > MAX_INDEX {
        true => Err(Error::Overflow { index: n }),
        false => Ok(()),
    }
}

/// Which generator a [`Table`](crate::Table) uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// [`iterative`]
    #[default]
    Iterative,

    /// [`recursive`]
    Recursive,
}

impl Algorithm {
    /// Compute `fib(n)` with this algorithm
    #[inline]
    pub fn fib(self, n: u32) -> Result<u64> {
        match self {
            Self::Iterative => iterative(n),
            Self::Recursive => recursive(n),
        }
    }

    /// The name used by [`Display`] and [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Algorithm`] name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm;

impl Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown algorithm, expected `iterative` or `recursive`")
    }
}

impl core::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "iterative" => Ok(Self::Iterative),
            "recursive" => Ok(Self::Recursive),
            _ => Err(UnknownAlgorithm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() -> Result<()> {
        for algorithm in [Algorithm::Iterative, Algorithm::Recursive] {
            assert_eq!(algorithm.fib(0)?, 0);
            assert_eq!(algorithm.fib(1)?, 1);
            assert_eq!(algorithm.fib(2)?, 1);
            assert_eq!(algorithm.fib(10)?, 55);
            assert_eq!(algorithm.fib(34)?, 5702887);
        }
        Ok(())
    }

    #[test]
    fn variants_agree() -> Result<()> {
        for n in 0..35 {
            assert_eq!(recursive(n)?, iterative(n)?, "fib({n})");
        }
        Ok(())
    }

    #[test]
    fn recurrence_holds() -> Result<()> {
        for n in 2..=MAX_INDEX {
            assert_eq!(iterative(n)?, iterative(n - 1)? + iterative(n - 2)?, "fib({n})");
        }
        Ok(())
    }

    #[test]
    fn monotonic() -> Result<()> {
        let mut prev = 0;
        for n in 0..=MAX_INDEX {
            let value = iterative(n)?;
            assert!(value >= prev);
            prev = value;
        }
        Ok(())
    }

    #[test]
    fn largest_index_fits() -> Result<()> {
        assert_eq!(iterative(MAX_INDEX)?, 12200160415121876738);
        Ok(())
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(matches!(iterative(MAX_INDEX + 1), Err(Error::Overflow { index: 94 })));
        assert!(matches!(recursive(u32::MAX), Err(Error::Overflow { index: u32::MAX })));
        assert!(matches!(Algorithm::Iterative.fib(200), Err(Error::Overflow { index: 200 })));
    }

    #[test]
    fn parse_names() {
        assert_eq!("iterative".parse(), Ok(Algorithm::Iterative));
        assert_eq!("recursive".parse(), Ok(Algorithm::Recursive));
        assert_eq!("memoized".parse::<Algorithm>(), Err(UnknownAlgorithm));
        assert_eq!(Algorithm::default(), Algorithm::Iterative);
    }
}
