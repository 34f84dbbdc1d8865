use std::fmt;
use std::sync::Arc;

/// The result of filtering a list with a user query.
pub struct Search<T> {
    query: String,
    matches: Arc<[T]>,
}

impl<T> Search<T> {
    pub fn new(query: impl Into<String>, matches: impl Into<Arc<[T]>>) -> Self {
        Self {
            query: query.into(),
            matches: matches.into(),
        }
    }

    /// The normalized query that produced the matches.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[T] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl<T> Clone for Search<T> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            matches: self.matches.clone(),
        }
    }
}

impl<T> fmt::Debug for Search<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("query", &self.query)
            .field("matches", &self.matches.len())
            .finish()
    }
}
