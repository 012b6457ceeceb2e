//! Mutator factories for testing option providers.
//!
//! Available behind the `test-utils` feature flag.

use crate::lister::Mutator;
use std::sync::{Arc, Mutex, PoisonError};

/// A shared, append-only record of which mutators ran, in order.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label.
    pub fn record(&self, label: impl Into<String>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(label.into());
    }

    /// Return a snapshot of all recorded labels.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A mutator that records `label` in `journal` and succeeds without
/// touching the target.
pub fn journaling<T, E>(journal: &Journal, label: impl Into<String>) -> Mutator<T, E> {
    let journal = journal.clone();
    let label = label.into();
    Box::new(move |_| {
        journal.record(label.as_str());
        Ok(())
    })
}

/// A mutator that always fails with `make_err()`.
pub fn failing<T, E, F>(make_err: F) -> Mutator<T, E>
where
    F: Fn() -> E + Send + Sync + 'static,
{
    Box::new(move |_| Err(make_err()))
}
