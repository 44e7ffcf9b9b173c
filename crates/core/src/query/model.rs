use crate::errors::QueryError;

/// Snapshot of one query hook.
///
/// Starting a fetch sets `is_loading` and clears `error`; `data` keeps its
/// last value until a fetch succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<QueryError>,
    /// Number of `refetch()` calls so far.
    pub refetch_count: u64,
}

impl<T> QueryState<T> {
    pub fn new(data: Option<T>) -> Self {
        Self {
            data,
            is_loading: false,
            error: None,
            refetch_count: 0,
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::new(None)
    }
}
