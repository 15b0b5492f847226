use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The catalog source failed structural validation. Fatal at startup.
    #[error("Malformed catalog{}: {reason}", record_suffix(.record.as_ref()))]
    MalformedCatalog {
        /// Zero-based position of the offending record, if the failure is
        /// attributable to one.
        record: Option<usize>,
        reason: String,
    },

    #[error("Question is empty")]
    EmptyQuery,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No pattern matches id or slug: {0}")]
    PatternNotFound(String),
}

impl Error {
    pub fn malformed(record: usize, reason: impl Into<String>) -> Self {
        Self::MalformedCatalog {
            record: Some(record),
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Whether the error leaves the tool unable to serve any query.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedCatalog { .. })
    }
}

fn record_suffix(record: Option<&usize>) -> String {
    record.map_or_else(String::new, |i| format!(" (record {i})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_record() {
        let err = Error::malformed(3, "missing title");
        assert_eq!(err.to_string(), "Malformed catalog (record 3): missing title");
    }

    #[test]
    fn malformed_message_without_record() {
        let err = Error::MalformedCatalog {
            record: None,
            reason: "expected a JSON array".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed catalog: expected a JSON array");
    }

    #[test]
    fn only_catalog_errors_are_fatal() {
        assert!(Error::malformed(0, "x").is_fatal());
        assert!(!Error::EmptyQuery.is_fatal());
        assert!(!Error::invalid_argument("top_k must be >= 1").is_fatal());
        assert!(!Error::PatternNotFound("nope".to_string()).is_fatal());
    }
}
