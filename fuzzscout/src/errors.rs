use std::io;
use thiserror::Error;

/// Errors that can occur while running a search
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

impl SearchError {
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }

    pub fn pipeline(msg: impl Into<String>) -> Self {
        Self::Pipeline(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SearchError::invalid_pattern("empty pattern");
        assert!(matches!(err, SearchError::InvalidPattern(_)));

        let err = SearchError::pipeline("worker panicked");
        assert!(matches!(err, SearchError::Pipeline(_)));

        let err = SearchError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(matches!(err, SearchError::Io(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = SearchError::invalid_pattern("search pattern must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid pattern: search pattern must not be empty"
        );

        let err = SearchError::pipeline("reporter thread panicked");
        assert_eq!(err.to_string(), "Pipeline error: reporter thread panicked");
    }
}
