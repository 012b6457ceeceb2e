//! The option-provider capability.
//!
//! A [`Lister`] hands the builder an ordered slice of mutator entries. Any
//! entry may be `None`, which the builder skips. Listing is side-effect
//! free; mutators only run when the builder invokes them.

use crate::error::OptionError;
use std::sync::Arc;

/// One configuration step: mutate the target in place or fail with `E`.
///
/// Mutators are `Fn`, not `FnOnce`, so a provider can be listed by any
/// number of builds.
pub type Mutator<T, E = OptionError> = Box<dyn Fn(&mut T) -> Result<(), E> + Send + Sync>;

/// Supplies an ordered list of mutators for a target type `T`.
///
/// Object-safe: the builder takes `&dyn Lister<T, E>` so providers of
/// different concrete types can be mixed in one build.
pub trait Lister<T, E = OptionError> {
    /// The mutator entries, in the order they must be applied.
    fn list(&self) -> &[Option<Mutator<T, E>>];
}

impl<T, E, L: Lister<T, E> + ?Sized> Lister<T, E> for &L {
    fn list(&self) -> &[Option<Mutator<T, E>>] {
        (**self).list()
    }
}

impl<T, E, L: Lister<T, E> + ?Sized> Lister<T, E> for Box<L> {
    fn list(&self) -> &[Option<Mutator<T, E>>] {
        (**self).list()
    }
}

impl<T, E, L: Lister<T, E> + ?Sized> Lister<T, E> for Arc<L> {
    fn list(&self) -> &[Option<Mutator<T, E>>] {
        (**self).list()
    }
}

/// An absent provider lists nothing.
impl<T, E, L: Lister<T, E>> Lister<T, E> for Option<L> {
    fn list(&self) -> &[Option<Mutator<T, E>>] {
        match self {
            Some(inner) => inner.list(),
            None => Default::default(),
        }
    }
}

impl<T, E> Lister<T, E> for [Option<Mutator<T, E>>] {
    fn list(&self) -> &[Option<Mutator<T, E>>] {
        self
    }
}

impl<T, E> Lister<T, E> for Vec<Option<Mutator<T, E>>> {
    fn list(&self) -> &[Option<Mutator<T, E>>] {
        self.as_slice()
    }
}
