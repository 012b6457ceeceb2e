//! The builder: apply every provider's mutators to a fresh target.

use crate::lister::Lister;
use std::any::type_name;

/// Build a `T` by applying all mutators from `providers` to `T::default()`.
///
/// Providers are processed in slice order and each provider's mutators in
/// list order. A `None` provider or a `None` mutator entry is skipped. The
/// first mutator to fail stops the build; its error is returned as-is and
/// the partly configured target is dropped.
///
/// ```
/// use builderutil::{Options, OptionError, build};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Config { value: i32 }
///
/// let a: Options<Config> = Options::new().with(|c: &mut Config| { c.value += 10; Ok(()) });
/// let b: Options<Config> = Options::new().with(|c: &mut Config| { c.value += 15; Ok(()) });
///
/// let config = build::<Config, OptionError>(&[Some(&a), None, Some(&b)]).unwrap();
/// assert_eq!(config.value, 25);
/// ```
pub fn build<T, E>(providers: &[Option<&dyn Lister<T, E>>]) -> Result<T, E>
where
    T: Default,
{
    build_from(T::default(), providers)
}

/// Like [`build`], but start from `base` instead of `T::default()`.
///
/// `base` is consumed. On failure it is dropped together with whatever the
/// mutators had already changed.
pub fn build_from<T, E>(base: T, providers: &[Option<&dyn Lister<T, E>>]) -> Result<T, E> {
    let mut target = base;
    let mut applied = 0usize;

    for (provider, entry) in providers.iter().enumerate() {
        let Some(lister) = entry else {
            tracing::trace!(provider, "skipping absent provider");
            continue;
        };

        for (mutator, slot) in lister.list().iter().enumerate() {
            let Some(apply) = slot else {
                tracing::trace!(provider, mutator, "skipping absent mutator");
                continue;
            };

            if let Err(err) = apply(&mut target) {
                tracing::debug!(
                    ty = type_name::<T>(),
                    provider,
                    mutator,
                    "option failed, discarding target"
                );
                return Err(err);
            }
            applied += 1;
        }
    }

    tracing::trace!(
        ty = type_name::<T>(),
        providers = providers.len(),
        applied,
        "build complete"
    );
    Ok(target)
}
