use std::collections::TryReserveError;

use thiserror::Error;

/// Failures surfaced by [`Engine::begin`](crate::Engine::begin) and
/// [`Engine::advance`](crate::Engine::advance).
///
/// A search that cannot reach its goal is not an error; that is the
/// [`Outcome::NoPath`](crate::Outcome::NoPath) result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("allocation failed while growing {what} by {requested} entries")]
    Allocation { what: &'static str, requested: usize },
    #[error("advance called before begin")]
    NotStarted,
    #[error("advance called after the search finished; call begin to start a new one")]
    Finished,
}

impl SearchError {
    pub(crate) fn alloc(what: &'static str, requested: usize) -> impl FnOnce(TryReserveError) -> SearchError {
        move |_| SearchError::Allocation { what, requested }
    }

    /// True for protocol misuse, false for resource exhaustion.
    pub fn is_usage(&self) -> bool {
        matches!(self, SearchError::NotStarted | SearchError::Finished)
    }
}

pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_are_distinct_from_exhaustion() {
        assert!(SearchError::NotStarted.is_usage());
        assert!(SearchError::Finished.is_usage());
        assert!(!SearchError::Allocation { what: "frontier", requested: 1 }.is_usage());
    }

    #[test]
    fn allocation_message_names_the_structure() {
        let e = SearchError::Allocation { what: "visited set", requested: 3 };
        assert_eq!(e.to_string(), "allocation failed while growing visited set by 3 entries");
    }
}
