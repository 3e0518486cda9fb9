//! Client-side filter over index status labels.

use std::collections::HashSet;

/// A set of accepted index status labels (e.g. `open`, `close`).
///
/// The empty filter accepts every status. This is a deliberate sentinel:
/// callers that want an unfiltered listing pass [`StatusFilter::any`],
/// and adding labels only ever narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFilter(HashSet<String>);

impl StatusFilter {
    /// The filter that accepts every status.
    pub fn any() -> Self {
        Self::default()
    }

    /// Builds a filter accepting exactly the given labels.
    pub fn of<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(statuses.into_iter().map(Into::into).collect())
    }

    /// Returns true if the given status passes the filter.
    pub fn matches(&self, status: &str) -> bool {
        self.0.is_empty() || self.0.contains(status)
    }

    /// Returns true if this filter accepts every status.
    pub fn accepts_all(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StatusFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::of(iter)
    }
}
