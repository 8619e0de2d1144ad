//! Query error types
//!
//! Malformed arguments are rejected at the call boundary before any
//! computation runs. A pattern that is simply absent from the text is
//! not an error; those queries return empty results.

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised by the query engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Empty pattern passed to a search-based query
    EmptyPattern,
    /// `longest_repeated_substring` called with fewer than 2 repetitions
    RepetitionsTooSmall(usize),
    /// Suffix index outside the indexed text
    SuffixOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::EmptyPattern => write!(f, "empty pattern"),
            QueryError::RepetitionsTooSmall(got) => {
                write!(f, "repetitions must be at least 2, got {}", got)
            }
            QueryError::SuffixOutOfRange { index, len } => {
                write!(f, "suffix index {} out of range [0, {})", index, len)
            }
        }
    }
}

impl std::error::Error for QueryError {}
