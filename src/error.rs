use std::{error, fmt};

// This is the primary error type we'll be using everywhere. Every failure in
// this crate is the synchronous detection of a violated precondition, so each
// variant simply records which kind of precondition was violated together
// with a message describing the violation. A failed call with the same
// arguments will always fail again; there is nothing to retry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    // A negative argument, or a rank less than 1, was passed to an entry
    // point. Detected before any computation happens.
    InvalidArgument(String),

    // A rank or sequence index fell outside the interval [1, S(m, n)].
    RankOutOfRange(String),

    // The chosen fixed-width integer type cannot represent the requested
    // count. Arbitrary-precision counting never produces this error.
    NumericOverflow(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(message)
            | Self::RankOutOfRange(message)
            | Self::NumericOverflow(message) => write!(f, "Error: {}", message),
        }
    }
}

impl error::Error for Error {}

// This macro is useful for writing tests that deal with errors.
#[macro_export]
macro_rules! assert_fails {
    ($expr:expr, $substr:expr $(,)?) => {{
        // Macros are call-by-name, but we want call-by-value (or at least call-by-need) to avoid
        // accidentally evaluating arguments multiple times. Here we force eager evaluation.
        let expr = $expr;
        let substr = $substr;

        // Before we actually evaluate the expression, disable terminal colors.
        colored::control::set_override(false);

        // Check that `$expr` fails and that the failure contains `$substr`.
        if let Err(error) = expr {
            assert!(error.to_string().contains(substr));
        } else {
            assert!(false);
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    #[test]
    fn display_invalid_argument() {
        let error = Error::InvalidArgument("The argument is negative.".to_owned());

        assert_eq!(error.to_string(), "Error: The argument is negative.");
    }

    #[test]
    fn display_rank_out_of_range() {
        let error = Error::RankOutOfRange("The rank is too large.".to_owned());

        assert_eq!(error.to_string(), "Error: The rank is too large.");
    }

    #[test]
    fn display_numeric_overflow() {
        let error = Error::NumericOverflow("The count does not fit.".to_owned());

        assert_eq!(error.to_string(), "Error: The count does not fit.");
    }

    #[test]
    fn assert_fails_matches_substring() {
        let result: Result<(), Error> =
            Err(Error::InvalidArgument("The argument is negative.".to_owned()));

        assert_fails!(result, "negative");
    }
}
