//! Fetched lists and the stale-response guard.
//!
//! Every fetch takes a [`RequestId`] from [`ListState::begin`]. When it
//! settles, [`ListState::settle`] only applies the result if no newer fetch
//! has started since; otherwise it is dropped.

use crate::failure::Failure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub failure: Option<Failure>,
    latest: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            failure: None,
            latest: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        self.loading = true;
        RequestId(self.latest)
    }

    /// Apply a finished fetch. Returns `false` if it was stale and ignored.
    ///
    /// A failure leaves the previous items in place.
    pub fn settle(&mut self, id: RequestId, result: Result<Vec<T>, Failure>) -> bool {
        if id.0 != self.latest {
            tracing::debug!(request = id.0, latest = self.latest, "dropping stale list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.failure = None;
            }
            Err(failure) => self.failure = Some(failure),
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_response_is_ignored() {
        let mut list = ListState::<&str>::default();
        let first = list.begin();
        let second = list.begin();

        assert!(list.settle(second, Ok(vec!["new"])));
        assert!(!list.settle(first, Ok(vec!["old"])));
        assert_eq!(list.items, vec!["new"]);
        assert!(!list.loading);
    }

    #[test]
    fn test_older_response_does_not_clear_loading() {
        let mut list = ListState::<u8>::default();
        let first = list.begin();
        let _second = list.begin();

        assert!(!list.settle(first, Ok(vec![1])));
        assert!(list.loading);
        assert!(list.is_empty());
    }

    #[test]
    fn test_failure_keeps_items() {
        let mut list = ListState::default();
        let id = list.begin();
        list.settle(id, Ok(vec![1, 2]));

        let id = list.begin();
        list.settle(id, Err(Failure::Transport));
        assert_eq!(list.items, vec![1, 2]);
        assert_eq!(list.failure, Some(Failure::Transport));
    }
}
