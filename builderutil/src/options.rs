//! A concrete, reusable option provider.

use crate::error::OptionError;
use crate::lister::{Lister, Mutator};
use std::fmt;

/// Box a closure into a [`Mutator`].
///
/// ```
/// use builderutil::{Mutator, mutator};
///
/// #[derive(Default)]
/// struct Config { retries: u32 }
///
/// let retries: Mutator<Config> = mutator(|c: &mut Config| {
///     c.retries = 3;
///     Ok(())
/// });
/// ```
#[must_use]
pub fn mutator<T, E, F>(f: F) -> Mutator<T, E>
where
    F: Fn(&mut T) -> Result<(), E> + Send + Sync + 'static,
{
    Box::new(f)
}

/// An ordered list of mutator entries for a target `T`.
///
/// Entries are applied in insertion order. An entry may be absent (see
/// [`Options::push_entry`]); the builder skips those.
///
/// ```
/// use builderutil::{Options, OptionError, build};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Config { value: i32 }
///
/// let opts: Options<Config> = Options::new()
///     .with(|c: &mut Config| { c.value = 40; Ok(()) })
///     .with(|c: &mut Config| { c.value += 2; Ok(()) });
///
/// let config = build::<Config, OptionError>(&[Some(&opts)]).unwrap();
/// assert_eq!(config, Config { value: 42 });
/// ```
pub struct Options<T, E = OptionError> {
    entries: Vec<Option<Mutator<T, E>>>,
}

impl<T, E> Options<T, E> {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a mutator and return the provider, for chaining.
    #[must_use]
    pub fn with<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut T) -> Result<(), E> + Send + Sync + 'static,
    {
        self.push(f);
        self
    }

    /// Append a mutator.
    pub fn push<F>(&mut self, f: F)
    where
        F: Fn(&mut T) -> Result<(), E> + Send + Sync + 'static,
    {
        self.entries.push(Some(Box::new(f)));
    }

    /// Append an entry that may be absent.
    pub fn push_entry(&mut self, entry: Option<Mutator<T, E>>) {
        self.entries.push(entry);
    }

    /// Number of entries, absent ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, E> Default for Options<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Lister<T, E> for Options<T, E> {
    fn list(&self) -> &[Option<Mutator<T, E>>] {
        &self.entries
    }
}

impl<T, E> From<Vec<Option<Mutator<T, E>>>> for Options<T, E> {
    fn from(entries: Vec<Option<Mutator<T, E>>>) -> Self {
        Self { entries }
    }
}

impl<T, E> FromIterator<Mutator<T, E>> for Options<T, E> {
    fn from_iter<I: IntoIterator<Item = Mutator<T, E>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Some).collect(),
        }
    }
}

impl<T, E> Extend<Mutator<T, E>> for Options<T, E> {
    fn extend<I: IntoIterator<Item = Mutator<T, E>>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(Some));
    }
}

// Closures aren't Debug; report the shape instead.
impl<T, E> fmt::Debug for Options<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("entries", &self.entries.len())
            .field(
                "present",
                &self.entries.iter().filter(|e| e.is_some()).count(),
            )
            .finish()
    }
}
