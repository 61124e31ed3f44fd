use std::iter::FusedIterator;

use crate::{Error, PrimeSequence};

/// Upper bound for the up-front allocation of a search, larger counts grow
/// the sequence on demand.
const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// Returns the `count`-th prime, where 2 is prime number 1.
///
/// Fails with [`Error::InvalidArgument`] if `count` is not positive and with
/// [`Error::Overflow`] if the prime does not fit into a `u64`.
pub fn find_nth_prime(count: i64) -> Result<u64, Error> {
    let primes = first_primes(count)?;
    primes
        .last()
        .ok_or_else(|| Error::InvalidArgument(format!("no prime number {count}")))
}

/// Returns the first `count` primes in ascending order.
pub fn first_primes(count: i64) -> Result<PrimeSequence, Error> {
    let count = validate_count(count)?;
    log::debug!("Searching for the first {count} primes");

    let primes = Primes::with_capacity(count.min(MAX_INITIAL_CAPACITY));
    let sequence = take_primes(primes, count)?;
    log::debug!(
        "Prime number {count} is {}",
        sequence.last().unwrap_or_default()
    );
    Ok(sequence)
}

/// Advances `primes` until it has found `count` primes in total.
fn take_primes(mut primes: Primes, count: usize) -> Result<PrimeSequence, Error> {
    while primes.found() < count {
        if primes.next().is_none() {
            return Err(Error::Overflow { count });
        }
    }
    Ok(primes.into_sequence())
}

fn validate_count(count: i64) -> Result<usize, Error> {
    if count <= 0 {
        return Err(Error::InvalidArgument(format!(
            "count must be positive, got {count}"
        )));
    }
    usize::try_from(count).map_err(|_| {
        Error::InvalidArgument(format!("count {count} is too large for this platform"))
    })
}

/// Iterator over all primes representable as `u64`, in ascending order.
///
/// Each candidate is tested against the primes yielded so far, which are
/// kept in an owned [`PrimeSequence`].
#[derive(Debug, Clone)]
pub struct Primes {
    sequence: PrimeSequence,
    /// `None` once the candidate range is exhausted.
    next_candidate: Option<u64>,
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Primes {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            sequence: PrimeSequence::with_capacity(capacity),
            next_candidate: Some(2),
        }
    }

    /// Number of primes yielded so far.
    pub fn found(&self) -> usize {
        self.sequence.len()
    }

    /// The primes yielded so far.
    pub fn sequence(&self) -> &PrimeSequence {
        &self.sequence
    }

    pub fn into_sequence(self) -> PrimeSequence {
        self.sequence
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.next_candidate?;
            self.next_candidate = candidate.checked_add(1);
            if self.sequence.push_if_prime(candidate) {
                log::trace!("Found prime number {}: {candidate}", self.sequence.len());
                return Some(candidate);
            }
        }
    }
}

impl FusedIterator for Primes {}
