//! Result of a single remote fetch.

/// Outcome of fetching one resource.
///
/// Keeps "the page had no such content" apart from "the request failed", so a
/// transport error is never mistaken for missing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// The resource was fetched and the expected content extracted
    Found(T),
    /// The resource was fetched but the expected structure was missing
    NotFound,
    /// Non-success status or network failure
    TransportError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absence_kinds_are_distinct() {
        let missing: FetchOutcome<u8> = FetchOutcome::NotFound;
        let failed: FetchOutcome<u8> = FetchOutcome::TransportError("HTTP 503".into());
        assert_ne!(missing, failed);
        assert_ne!(failed, FetchOutcome::Found(0));
    }
}
