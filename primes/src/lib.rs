//! Prime search by trial division against previously found primes.

mod error;
mod finder;
mod sequence;

pub use error::{parse_count, Error};
pub use finder::{find_nth_prime, first_primes, Primes};
pub use sequence::PrimeSequence;
