use thiserror::Error;

/// Errors returned when constructing a [`BloomFilter`](crate::BloomFilter).
///
/// Once a filter exists, [`add`](crate::BloomFilter::add) and
/// [`check`](crate::BloomFilter::check) cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A sizing parameter is outside its valid domain, such as a zero item
    /// count or a false-positive probability not strictly between 0 and 1.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// The offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::invalid("expected_items", "must be greater than zero");
        assert_eq!(
            e.to_string(),
            "invalid parameter `expected_items`: must be greater than zero"
        );
    }
}
