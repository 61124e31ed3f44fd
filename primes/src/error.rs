/// Failures of a prime search. A failed search never yields a number.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("prime number {count} does not fit into 64 bits")]
    Overflow { count: usize },
}

/// Parses a textual prime count, e.g. from the command line.
///
/// Only the integer syntax is checked here; the sign is validated by the
/// search functions themselves.
pub fn parse_count(input: &str) -> Result<i64, Error> {
    let input = input.trim();
    input.parse::<i64>().map_err(|e| {
        Error::InvalidArgument(format!("expected an integer count, got {input:?}: {e}"))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_integers() {
        assert_eq!(parse_count("10"), Ok(10));
        assert_eq!(parse_count(" 7\n"), Ok(7));
        assert_eq!(parse_count("-5"), Ok(-5));
        assert_eq!(parse_count("0"), Ok(0));
    }

    #[test]
    fn reject_non_integers() {
        for input in ["", "2.5", "ten", "1e3", "99999999999999999999"] {
            assert!(
                matches!(parse_count(input), Err(Error::InvalidArgument(_))),
                "{input:?} was accepted"
            );
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::InvalidArgument("count must be positive, got 0".to_string()).to_string(),
            "invalid argument: count must be positive, got 0"
        );
        assert_eq!(
            Error::Overflow { count: 3 }.to_string(),
            "prime number 3 does not fit into 64 bits"
        );
    }
}
