use std::fmt::{self, Display, Formatter};
use std::iter::Copied;
use std::slice;

/// The primes discovered so far, in ascending order.
///
/// The sequence only ever contains the first `len()` primes, as long as
/// candidates are offered in increasing order starting at 2. It doubles as
/// the divisor set for testing the next candidate.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrimeSequence {
    primes: Vec<u64>,
}

impl PrimeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence with room for `capacity` primes. The
    /// sequence still grows beyond that if needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            primes: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if one of the known primes divides `candidate`.
    /// Stops at the first divisor found.
    pub fn has_divisor(&self, candidate: u64) -> bool {
        self.primes.iter().any(|p| candidate % p == 0)
    }

    /// Appends `candidate` if none of the known primes divides it and
    /// returns whether it was appended.
    ///
    /// `candidate` must be larger than every candidate offered before and
    /// the first candidate must be 2.
    pub(crate) fn push_if_prime(&mut self, candidate: u64) -> bool {
        debug_assert!(candidate >= 2);
        debug_assert!(!matches!(self.last(), Some(last) if last >= candidate));
        if self.has_divisor(candidate) {
            false
        } else {
            self.primes.push(candidate);
            true
        }
    }

    /// The most recently discovered prime, which is also the largest.
    pub fn last(&self) -> Option<u64> {
        self.primes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    pub fn iter(&self) -> Copied<slice::Iter<'_, u64>> {
        self.primes.iter().copied()
    }
}

impl IntoIterator for PrimeSequence {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.into_iter()
    }
}

impl<'a> IntoIterator for &'a PrimeSequence {
    type Item = u64;
    type IntoIter = Copied<slice::Iter<'a, u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the primes as a single comma separated line.
impl Display for PrimeSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut primes = self.primes.iter();
        if let Some(first) = primes.next() {
            write!(f, "{first}")?;
            for p in primes {
                write!(f, ",{p}")?;
            }
        }
        Ok(())
    }
}
